// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::SerpSettings;
use crate::domain::models::organic_result::OrganicResult;
use crate::domain::search::provider::{SearchError, SerpProvider};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info};

/// SerpApi响应中的单条自然结果
#[derive(Debug, Deserialize)]
struct SerpApiEntry {
    position: u32,
    link: String,
}

/// SerpApi响应体
///
/// 提供商在出错时返回 `error` 字段而非HTTP错误状态，
/// 两种情况都作为整次观测的硬失败处理
#[derive(Debug, Deserialize)]
struct SerpApiResponse {
    organic_results: Option<Vec<SerpApiEntry>>,
    error: Option<String>,
}

/// SerpApi搜索结果客户端
///
/// 通过一次GET请求获取Google自然搜索结果。
/// `base_url` 可配置，测试时指向本地mock服务。
pub struct SerpApiClient {
    client: Client,
    settings: SerpSettings,
}

impl SerpApiClient {
    /// 创建新的SerpApi客户端
    ///
    /// # 参数
    ///
    /// * `settings` - 搜索提供商配置
    ///
    /// # 返回值
    ///
    /// * `Ok(SerpApiClient)` - 客户端实例
    /// * `Err(SearchError)` - HTTP客户端构建失败
    pub fn new(settings: &SerpSettings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout))
            .build()
            .map_err(|e| SearchError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }
}

#[async_trait]
impl SerpProvider for SerpApiClient {
    async fn fetch_organic(&self, query: &str) -> Result<Vec<OrganicResult>, SearchError> {
        if self.settings.api_key.is_empty() {
            return Err(SearchError::MissingApiKey);
        }

        let url = format!(
            "{}/search.json",
            self.settings.base_url.trim_end_matches('/')
        );
        debug!("SerpApi request: {} q={}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("hl", self.settings.hl.as_str()),
                ("gl", self.settings.gl.as_str()),
                ("api_key", self.settings.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Provider(format!(
                "provider returned HTTP {}",
                status
            )));
        }

        let body: SerpApiResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Provider(format!("invalid response body: {}", e)))?;

        if let Some(message) = body.error {
            return Err(SearchError::Provider(message));
        }

        let results: Vec<OrganicResult> = body
            .organic_results
            .unwrap_or_default()
            .into_iter()
            .map(|entry| OrganicResult::new(entry.position, entry.link))
            .collect();

        info!("SerpApi returned {} organic results", results.len());
        Ok(results)
    }

    fn name(&self) -> &'static str {
        "serpapi"
    }
}
