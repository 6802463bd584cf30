// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::keyword_repository::RepositoryError;
use crate::domain::models::rank_log::{NewRankLog, RankLog, RankLogWithKeyword};
use async_trait::async_trait;

/// 排名日志仓库特质
///
/// 日志只追加、从不修改或删除，因此只提供创建和查询操作。
#[async_trait]
pub trait RankLogRepository: Send + Sync {
    /// 追加一条排名日志
    ///
    /// # 参数
    ///
    /// * `log` - 待创建的排名日志
    ///
    /// # 返回值
    ///
    /// * `Ok(RankLog)` - 成功创建后返回带ID的日志实体
    /// * `Err(RepositoryError)` - 创建失败时返回错误
    async fn create(&self, log: NewRankLog) -> Result<RankLog, RepositoryError>;

    /// 列出最近的排名日志及其所属关键词，按创建时间倒序
    ///
    /// # 参数
    ///
    /// * `limit` - 返回的最大条数
    async fn list_recent(&self, limit: u64) -> Result<Vec<RankLogWithKeyword>, RepositoryError>;
}
