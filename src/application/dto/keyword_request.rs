// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::keyword::Keyword;

/// 关键词注册请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CreateKeywordDto {
    /// 检索关键词
    #[validate(length(min = 1, message = "keyword cannot be empty"))]
    pub keyword: String,
    /// 被跟踪的站点域名，例如 "example.com"
    #[validate(length(min = 1, message = "site cannot be empty"))]
    pub site: String,
}

/// 关键词响应
#[derive(Debug, Serialize, Deserialize)]
pub struct KeywordDto {
    pub id: i64,
    pub keyword: String,
    pub site: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<Keyword> for KeywordDto {
    fn from(keyword: Keyword) -> Self {
        Self {
            id: keyword.id,
            keyword: keyword.keyword,
            site: keyword.site,
            created_at: keyword.created_at,
        }
    }
}
