// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::organic_result::OrganicResult;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum SearchError {
    /// 提供商报告的错误，或响应不可用
    #[error("Search provider error: {0}")]
    Provider(String),
    /// 网络层错误
    #[error("Network error: {0}")]
    Network(String),
    /// API密钥未配置
    #[error("Search provider API key is not configured")]
    MissingApiKey,
}

/// 搜索结果提供商特质
///
/// 一次调用返回按排名排序的自然搜索结果列表。
/// 提供商报告错误时整次观测失败，不做部分匹配。
#[async_trait]
pub trait SerpProvider: Send + Sync {
    /// 获取关键词的自然搜索结果
    ///
    /// # 参数
    ///
    /// * `query` - 检索关键词
    ///
    /// # 返回值
    ///
    /// * `Ok(Vec<OrganicResult>)` - 按提供商排名排序的结果列表
    /// * `Err(SearchError)` - 提供商调用失败
    async fn fetch_organic(&self, query: &str) -> Result<Vec<OrganicResult>, SearchError>;

    /// 提供商名称
    fn name(&self) -> &'static str;
}
