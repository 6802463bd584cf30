// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Json},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::{
    application::dto::rank_check::RankCheckRequestDto,
    application::use_cases::check_rank::{CheckRankUseCase, RankCheckError},
    domain::repositories::keyword_repository::KeywordRepository,
    domain::repositories::rank_log_repository::RankLogRepository,
    domain::search::provider::SerpProvider,
};

/// 处理排名检测请求
///
/// # 参数
///
/// * `keyword_repo` - 关键词仓库实例
/// * `rank_log_repo` - 排名日志仓库实例
/// * `provider` - 搜索结果提供商实例
/// * `payload` - 排名检测请求数据
///
/// # 返回值
///
/// 返回实现了 `IntoResponse` 的响应，包含检测结果或错误信息
///
/// # 错误
///
/// 可能在以下情况下返回错误响应：
/// - 关键词不存在
/// - 提供商调用失败
/// - 日志保存失败
pub async fn check_rank<KR, RR, P>(
    Extension(keyword_repo): Extension<Arc<KR>>,
    Extension(rank_log_repo): Extension<Arc<RR>>,
    Extension(provider): Extension<Arc<P>>,
    Json(payload): Json<RankCheckRequestDto>,
) -> impl IntoResponse
where
    KR: KeywordRepository + 'static,
    RR: RankLogRepository + 'static,
    P: SerpProvider + 'static,
{
    let use_case = CheckRankUseCase::new(keyword_repo, rank_log_repo, provider);
    match use_case.execute(payload.keyword_id).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            error!("Rank check for keyword {} failed: {}", payload.keyword_id, e);
            let (status, msg): (StatusCode, String) = e.into();
            (status, Json(json!({ "error": msg }))).into_response()
        }
    }
}

impl From<RankCheckError> for (StatusCode, String) {
    fn from(err: RankCheckError) -> Self {
        match err {
            RankCheckError::KeywordNotFound(_) => (StatusCode::NOT_FOUND, err.to_string()),
            RankCheckError::EmptySite(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            RankCheckError::Provider(_) => (StatusCode::BAD_GATEWAY, err.to_string()),
            RankCheckError::Repository(_) | RankCheckError::Storage { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}
