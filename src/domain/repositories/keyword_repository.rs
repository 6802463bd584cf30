// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::keyword::{Keyword, NewKeyword};
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 关键词仓库特质
///
/// 定义关键词数据访问接口。关键词创建后不可变，因此不提供更新操作。
#[async_trait]
pub trait KeywordRepository: Send + Sync {
    /// 创建关键词
    ///
    /// # 参数
    ///
    /// * `keyword` - 待创建的关键词
    ///
    /// # 返回值
    ///
    /// * `Ok(Keyword)` - 成功创建后返回带ID的关键词实体
    /// * `Err(RepositoryError)` - 创建失败时返回错误
    async fn create(&self, keyword: NewKeyword) -> Result<Keyword, RepositoryError>;

    /// 根据ID查找关键词
    ///
    /// # 参数
    ///
    /// * `id` - 关键词的唯一标识符
    ///
    /// # 返回值
    ///
    /// * `Ok(Some(Keyword))` - 找到时返回关键词实体
    /// * `Ok(None)` - 未找到时返回空
    /// * `Err(RepositoryError)` - 查询失败时返回错误
    async fn find_by_id(&self, id: i64) -> Result<Option<Keyword>, RepositoryError>;

    /// 列出全部关键词，按创建时间倒序
    async fn list(&self) -> Result<Vec<Keyword>, RepositoryError>;
}
