// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::domain::models::rank_log::RankLogWithKeyword;

/// 日志列表查询参数
#[derive(Debug, Deserialize)]
pub struct RankLogQueryDto {
    /// 返回的最大条数，默认10
    pub limit: Option<u64>,
}

/// 排名日志响应条目
///
/// 关键词文本和站点域名内联展示；所属关键词缺失时两者为空
#[derive(Debug, Serialize, Deserialize)]
pub struct RankLogDto {
    pub id: i64,
    pub keyword_id: i64,
    pub keyword: Option<String>,
    pub site: Option<String>,
    pub rank: Option<u32>,
    pub position_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<RankLogWithKeyword> for RankLogDto {
    fn from(row: RankLogWithKeyword) -> Self {
        let (keyword, site) = match row.keyword {
            Some(k) => (Some(k.keyword), Some(k.site)),
            None => (None, None),
        };
        Self {
            id: row.log.id,
            keyword_id: row.log.keyword_id,
            keyword,
            site,
            rank: row.log.rank,
            position_url: row.log.position_url,
            created_at: row.log.created_at,
        }
    }
}
