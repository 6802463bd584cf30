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

use crate::domain::models::keyword::{Keyword, NewKeyword};
use crate::domain::repositories::keyword_repository::{KeywordRepository, RepositoryError};
use crate::infrastructure::database::entities::keyword as keyword_entity;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use std::sync::Arc;

/// 关键词仓库实现
///
/// 基于SeaORM实现的关键词数据访问层
#[derive(Clone)]
pub struct KeywordRepositoryImpl {
    /// 数据库连接
    db: Arc<DatabaseConnection>,
}

impl KeywordRepositoryImpl {
    /// 创建新的关键词仓库实例
    ///
    /// # 参数
    ///
    /// * `db` - 数据库连接
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl From<keyword_entity::Model> for Keyword {
    fn from(model: keyword_entity::Model) -> Self {
        Self {
            id: model.id,
            keyword: model.keyword,
            site: model.site,
            created_at: model.created_at,
        }
    }
}

#[async_trait]
impl KeywordRepository for KeywordRepositoryImpl {
    async fn create(&self, keyword: NewKeyword) -> Result<Keyword, RepositoryError> {
        let model = keyword_entity::ActiveModel {
            keyword: Set(keyword.keyword),
            site: Set(keyword.site),
            created_at: Set(Utc::now().into()),
            ..Default::default()
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Keyword>, RepositoryError> {
        let model = keyword_entity::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn list(&self) -> Result<Vec<Keyword>, RepositoryError> {
        let models = keyword_entity::Entity::find()
            .order_by_desc(keyword_entity::Column::CreatedAt)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
