// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::{
    application::dto::rank_log_response::{RankLogDto, RankLogQueryDto},
    domain::repositories::rank_log_repository::RankLogRepository,
    presentation::errors::AppError,
};

/// 日志列表默认条数
const DEFAULT_LOG_LIMIT: u64 = 10;
/// 日志列表条数上限
const MAX_LOG_LIMIT: u64 = 100;

/// 列出最近的排名日志，按创建时间倒序
///
/// 每条日志内联其所属关键词的文本和站点域名
pub async fn list_rank_logs<RR>(
    Extension(repo): Extension<Arc<RR>>,
    Query(query): Query<RankLogQueryDto>,
) -> Result<impl IntoResponse, AppError>
where
    RR: RankLogRepository + 'static,
{
    let limit = query.limit.unwrap_or(DEFAULT_LOG_LIMIT).min(MAX_LOG_LIMIT);

    let rows = repo.list_recent(limit).await?;
    let body: Vec<RankLogDto> = rows.into_iter().map(RankLogDto::from).collect();

    Ok((StatusCode::OK, Json(body)))
}
