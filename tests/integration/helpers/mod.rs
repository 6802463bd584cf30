// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    body::Body,
    http::{Request, Response},
    Extension, Router,
};
use migration::{Migrator, MigratorTrait};
use rankwatch::config::settings::SerpSettings;
use rankwatch::infrastructure::repositories::keyword_repo_impl::KeywordRepositoryImpl;
use rankwatch::infrastructure::repositories::rank_log_repo_impl::RankLogRepositoryImpl;
use rankwatch::infrastructure::search::serpapi::SerpApiClient;
use rankwatch::presentation::routes;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use tower::util::ServiceExt;

/// 创建已迁移的内存SQLite数据库
///
/// 连接数固定为1，保证所有操作落在同一个内存数据库上
pub async fn test_db() -> Arc<DatabaseConnection> {
    let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
    opt.max_connections(1).min_connections(1);

    let db = Database::connect(opt)
        .await
        .expect("failed to open in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations failed");
    Arc::new(db)
}

/// 指向mock提供商的搜索配置
pub fn serp_settings(base_url: &str) -> SerpSettings {
    SerpSettings {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        hl: "ja".to_string(),
        gl: "jp".to_string(),
        timeout: 5,
    }
}

/// 构建完整的测试应用
pub fn test_app(db: Arc<DatabaseConnection>, serp: &SerpSettings) -> Router {
    let keyword_repo = Arc::new(KeywordRepositoryImpl::new(db.clone()));
    let rank_log_repo = Arc::new(RankLogRepositoryImpl::new(db));
    let serp_client = Arc::new(SerpApiClient::new(serp).expect("failed to build serp client"));

    routes::routes()
        .layer(Extension(keyword_repo))
        .layer(Extension(rank_log_repo))
        .layer(Extension(serp_client))
}

/// 发送一次JSON请求
pub async fn send_json(
    app: Router,
    method: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .method(method)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// 发送一次GET请求
pub async fn send_get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// 读取响应体为JSON
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
