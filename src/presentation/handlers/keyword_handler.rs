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

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;
use validator::Validate;

use crate::{
    application::dto::keyword_request::{CreateKeywordDto, KeywordDto},
    domain::models::keyword::NewKeyword,
    domain::repositories::keyword_repository::KeywordRepository,
    presentation::errors::AppError,
};

/// 注册（关键词，站点域名）组合
///
/// # 返回值
///
/// 成功时返回201和持久化后的关键词；关键词或域名为空时返回400
pub async fn create_keyword<KR>(
    Extension(repo): Extension<Arc<KR>>,
    Json(payload): Json<CreateKeywordDto>,
) -> Result<impl IntoResponse, AppError>
where
    KR: KeywordRepository + 'static,
{
    payload.validate()?;

    // Whitespace-only input passes the length check but is still unusable.
    let keyword = payload.keyword.trim().to_string();
    let site = payload.site.trim().to_string();
    if keyword.is_empty() {
        return Err(anyhow::anyhow!("keyword cannot be empty").into());
    }
    if site.is_empty() {
        return Err(anyhow::anyhow!("site cannot be empty").into());
    }

    let created = repo.create(NewKeyword { keyword, site }).await?;

    Ok((StatusCode::CREATED, Json(KeywordDto::from(created))))
}

/// 列出全部关键词，按创建时间倒序
pub async fn list_keywords<KR>(
    Extension(repo): Extension<Arc<KR>>,
) -> Result<impl IntoResponse, AppError>
where
    KR: KeywordRepository + 'static,
{
    let keywords = repo.list().await?;
    let body: Vec<KeywordDto> = keywords.into_iter().map(KeywordDto::from).collect();

    Ok((StatusCode::OK, Json(body)))
}
