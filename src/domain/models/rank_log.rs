// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::keyword::Keyword;

/// 排名日志实体
///
/// 一次排名检测的观测记录。`rank` 为提供商报告的1起始位置，
/// 目标域名未出现在结果中时为 `None`（圏外）。记录只追加，从不修改。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankLog {
    pub id: i64,
    /// 所属关键词ID
    pub keyword_id: i64,
    pub rank: Option<u32>,
    /// 首个命中结果的URL
    pub position_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

/// 待创建的排名日志
#[derive(Debug, Clone, PartialEq)]
pub struct NewRankLog {
    pub keyword_id: i64,
    pub rank: Option<u32>,
    pub position_url: Option<String>,
}

/// 排名日志及其所属关键词
///
/// 日志列表页需要内联展示关键词文本和站点域名
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RankLogWithKeyword {
    pub log: RankLog,
    pub keyword: Option<Keyword>,
}
