// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 自然搜索结果条目
///
/// 提供商返回的单条结果，系统只消费位置和链接两个字段
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrganicResult {
    /// 提供商报告的1起始排名位置
    pub position: u32,
    /// 结果URL
    pub link: String,
}

impl OrganicResult {
    pub fn new(position: u32, link: impl Into<String>) -> Self {
        Self {
            position,
            link: link.into(),
        }
    }
}
