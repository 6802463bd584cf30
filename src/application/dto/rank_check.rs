// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 排名检测请求
///
/// 只携带关键词ID；关键词文本和站点域名从存储加载，
/// 保证日志行始终引用一个存在的关键词
#[derive(Debug, Deserialize, Serialize)]
pub struct RankCheckRequestDto {
    pub keyword_id: i64,
}

/// 排名检测响应
///
/// `rank` 为提供商报告的1起始位置，圏外时为空
#[derive(Debug, Serialize, Deserialize)]
pub struct RankCheckResponseDto {
    pub keyword: String,
    pub site: String,
    pub rank: Option<u32>,
    pub position_url: Option<String>,
}
