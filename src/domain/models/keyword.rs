// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// 关键词实体
///
/// 用户登记的（关键词，站点域名）组合，创建后不可变
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Keyword {
    pub id: i64,
    /// 检索关键词
    pub keyword: String,
    /// 被跟踪的站点域名，例如 "example.com"
    pub site: String,
    pub created_at: DateTime<FixedOffset>,
}

/// 待创建的关键词
///
/// 尚未持久化，没有ID和创建时间
#[derive(Debug, Clone, PartialEq)]
pub struct NewKeyword {
    pub keyword: String,
    pub site: String,
}
