// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::application::dto::rank_check::RankCheckResponseDto;
use crate::domain::matcher;
use crate::domain::models::rank_log::NewRankLog;
use crate::domain::repositories::keyword_repository::{KeywordRepository, RepositoryError};
use crate::domain::repositories::rank_log_repository::RankLogRepository;
use crate::domain::search::provider::{SearchError, SerpProvider};

/// 排名检测用例错误
///
/// 区分失败阶段：校验、提供商调用、存储。
/// 存储失败时排名已计算完成但未持久化，错误信息携带已计算的排名。
#[derive(Debug, Error)]
pub enum RankCheckError {
    /// 关键词不存在，在任何网络调用之前被拒绝
    #[error("keyword {0} not found")]
    KeywordNotFound(i64),
    /// 关键词站点域名为空，无法进行匹配
    #[error("keyword {0} has an empty site, validation required")]
    EmptySite(i64),
    /// 关键词加载失败
    #[error("failed to load keyword: {0}")]
    Repository(#[from] RepositoryError),
    /// 提供商调用失败，观测未记录
    #[error(transparent)]
    Provider(#[from] SearchError),
    /// 排名已计算但日志保存失败
    #[error("rank computed ({rank:?}) but saving the log failed: {source}")]
    Storage {
        rank: Option<u32>,
        source: RepositoryError,
    },
}

/// 排名检测用例
///
/// 编排一次完整的排名检测：加载关键词、调用提供商、
/// 线性扫描匹配、追加一条日志。单次网络调用，无重试。
pub struct CheckRankUseCase<KR, RR, P> {
    keyword_repo: Arc<KR>,
    rank_log_repo: Arc<RR>,
    provider: Arc<P>,
}

impl<KR, RR, P> CheckRankUseCase<KR, RR, P>
where
    KR: KeywordRepository,
    RR: RankLogRepository,
    P: SerpProvider,
{
    /// 创建新的排名检测用例实例
    pub fn new(keyword_repo: Arc<KR>, rank_log_repo: Arc<RR>, provider: Arc<P>) -> Self {
        Self {
            keyword_repo,
            rank_log_repo,
            provider,
        }
    }

    /// 执行排名检测
    ///
    /// # 参数
    ///
    /// * `keyword_id` - 待检测关键词的ID
    ///
    /// # 返回值
    ///
    /// * `Ok(RankCheckResponseDto)` - 检测结果（圏外时rank为空）
    /// * `Err(RankCheckError)` - 失败及其所在阶段
    pub async fn execute(&self, keyword_id: i64) -> Result<RankCheckResponseDto, RankCheckError> {
        let keyword = self
            .keyword_repo
            .find_by_id(keyword_id)
            .await?
            .ok_or(RankCheckError::KeywordNotFound(keyword_id))?;

        // The matcher treats an empty target as a substring of everything,
        // so an empty site must never reach it.
        if keyword.site.trim().is_empty() {
            return Err(RankCheckError::EmptySite(keyword_id));
        }

        let results = self.provider.fetch_organic(&keyword.keyword).await?;

        let found = matcher::rank_of(&results, &keyword.site);
        let rank = found.map(|entry| entry.position);
        let position_url = found.map(|entry| entry.link.clone());

        info!(
            "Rank check for keyword {} ({}): rank={:?} via {}",
            keyword_id,
            keyword.keyword,
            rank,
            self.provider.name()
        );

        self.rank_log_repo
            .create(NewRankLog {
                keyword_id,
                rank,
                position_url: position_url.clone(),
            })
            .await
            .map_err(|source| RankCheckError::Storage { rank, source })?;

        Ok(RankCheckResponseDto {
            keyword: keyword.keyword,
            site: keyword.site,
            rank,
            position_url,
        })
    }
}
