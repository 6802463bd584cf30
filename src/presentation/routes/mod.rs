// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::keyword_repo_impl::KeywordRepositoryImpl;
use crate::infrastructure::repositories::rank_log_repo_impl::RankLogRepositoryImpl;
use crate::infrastructure::search::serpapi::SerpApiClient;
use crate::presentation::handlers::{keyword_handler, rank_check_handler, rank_log_handler};
use axum::{
    routing::{get, post},
    Router,
};

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由；仓库和提供商实例通过Extension层注入
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version));

    let api_routes = Router::new()
        .route(
            "/v1/keywords",
            post(keyword_handler::create_keyword::<KeywordRepositoryImpl>)
                .get(keyword_handler::list_keywords::<KeywordRepositoryImpl>),
        )
        .route(
            "/v1/logs",
            get(rank_log_handler::list_rank_logs::<RankLogRepositoryImpl>),
        )
        .route(
            "/v1/rank-checks",
            post(
                rank_check_handler::check_rank::<
                    KeywordRepositoryImpl,
                    RankLogRepositoryImpl,
                    SerpApiClient,
                >,
            ),
        );

    Router::new().merge(public_routes).merge(api_routes)
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
