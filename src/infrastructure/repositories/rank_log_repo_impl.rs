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

use crate::domain::models::rank_log::{NewRankLog, RankLog, RankLogWithKeyword};
use crate::domain::repositories::keyword_repository::RepositoryError;
use crate::domain::repositories::rank_log_repository::RankLogRepository;
use crate::infrastructure::database::entities::{keyword as keyword_entity, rank_log as rank_log_entity};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, Set};
use std::sync::Arc;

/// 排名日志仓库实现
///
/// 基于SeaORM实现的排名日志数据访问层
#[derive(Clone)]
pub struct RankLogRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl RankLogRepositoryImpl {
    /// 创建新的排名日志仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<rank_log_entity::Model> for RankLog {
    fn from(model: rank_log_entity::Model) -> Self {
        Self {
            id: model.id,
            keyword_id: model.keyword_id,
            rank: model.rank.map(|r| r as u32),
            position_url: model.position_url,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl RankLogRepository for RankLogRepositoryImpl {
    async fn create(&self, log: NewRankLog) -> Result<RankLog, RepositoryError> {
        let model = rank_log_entity::ActiveModel {
            keyword_id: Set(log.keyword_id),
            rank: Set(log.rank.map(|r| r as i32)),
            position_url: Set(log.position_url),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn list_recent(&self, limit: u64) -> Result<Vec<RankLogWithKeyword>, RepositoryError> {
        let rows = rank_log_entity::Entity::find()
            .find_also_related(keyword_entity::Entity)
            .order_by_desc(rank_log_entity::Column::CreatedAt)
            .limit(limit)
            .all(self.db.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|(log, keyword)| RankLogWithKeyword {
                log: log.into(),
                keyword: keyword.map(Into::into),
            })
            .collect())
    }
}
