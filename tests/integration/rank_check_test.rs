// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::helpers::{body_json, send_get, send_json, serp_settings, test_app, test_db};

/// 向测试库注册一个关键词并返回其ID
async fn register_keyword(
    db: std::sync::Arc<sea_orm::DatabaseConnection>,
    serp: &rankwatch::config::settings::SerpSettings,
    keyword: &str,
    site: &str,
) -> i64 {
    let response = send_json(
        test_app(db, serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": keyword, "site": site }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["id"].as_i64().unwrap()
}

/// 端到端排名检测测试
///
/// 提供商返回三条结果，第二条命中目标域名；
/// 验证响应携带位置2和命中URL，且日志页可见
#[tokio::test]
async fn rank_check_records_first_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .and(query_param("q", "rust web framework"))
        .and(query_param("engine", "google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [
                { "position": 1, "link": "https://a.com/post", "title": "a" },
                { "position": 2, "link": "https://shop.target.com/item", "title": "t" },
                { "position": 3, "link": "https://target.com", "title": "t2" }
            ]
        })))
        .mount(&server)
        .await;

    let db = test_db().await;
    let serp = serp_settings(&server.uri());
    let keyword_id = register_keyword(db.clone(), &serp, "rust web framework", "target.com").await;

    let response = send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/rank-checks",
        json!({ "keyword_id": keyword_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["keyword"], "rust web framework");
    assert_eq!(body["site"], "target.com");
    assert_eq!(body["rank"], 2);
    assert_eq!(body["position_url"], "https://shop.target.com/item");

    // The observation shows up in the log list with the keyword inlined
    let response = send_get(test_app(db, &serp), "/v1/logs").await;
    assert_eq!(response.status(), StatusCode::OK);
    let logs = body_json(response).await;
    let items = logs.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["keyword_id"], keyword_id);
    assert_eq!(items[0]["keyword"], "rust web framework");
    assert_eq!(items[0]["site"], "target.com");
    assert_eq!(items[0]["rank"], 2);
}

/// 圏外测试
///
/// 目标域名不在结果中时，记录一条rank为空的日志
#[tokio::test]
async fn rank_check_records_null_rank_when_absent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [
                { "position": 1, "link": "https://a.com" },
                { "position": 2, "link": "https://b.com" }
            ]
        })))
        .mount(&server)
        .await;

    let db = test_db().await;
    let serp = serp_settings(&server.uri());
    let keyword_id = register_keyword(db.clone(), &serp, "rust", "target.com").await;

    let response = send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/rank-checks",
        json!({ "keyword_id": keyword_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["rank"], serde_json::Value::Null);
    assert_eq!(body["position_url"], serde_json::Value::Null);

    let logs = body_json(send_get(test_app(db, &serp), "/v1/logs").await).await;
    let items = logs.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["rank"], serde_json::Value::Null);
}

/// 提供商错误测试
///
/// 提供商报告error字段时整次观测失败，不记录日志
#[tokio::test]
async fn rank_check_provider_error_records_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "error": "Google hasn't returned any results for this query."
        })))
        .mount(&server)
        .await;

    let db = test_db().await;
    let serp = serp_settings(&server.uri());
    let keyword_id = register_keyword(db.clone(), &serp, "rust", "target.com").await;

    let response = send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/rank-checks",
        json!({ "keyword_id": keyword_id }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Google hasn't returned any results"));

    let logs = body_json(send_get(test_app(db, &serp), "/v1/logs").await).await;
    assert_eq!(logs.as_array().unwrap().len(), 0);
}

/// 未知关键词测试
///
/// 不存在的关键词在任何提供商调用之前被拒绝
#[tokio::test]
async fn rank_check_unknown_keyword_returns_404() {
    let server = MockServer::start().await;

    let db = test_db().await;
    let serp = serp_settings(&server.uri());

    let response = send_json(
        test_app(db, &serp),
        "POST",
        "/v1/rank-checks",
        json!({ "keyword_id": 9999 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(server.received_requests().await.unwrap().is_empty());
}

/// 日志条数限制测试
#[tokio::test]
async fn logs_honor_limit_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic_results": [{ "position": 1, "link": "https://target.com" }]
        })))
        .mount(&server)
        .await;

    let db = test_db().await;
    let serp = serp_settings(&server.uri());
    let keyword_id = register_keyword(db.clone(), &serp, "rust", "target.com").await;

    for _ in 0..3 {
        let response = send_json(
            test_app(db.clone(), &serp),
            "POST",
            "/v1/rank-checks",
            json!({ "keyword_id": keyword_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let logs = body_json(send_get(test_app(db, &serp), "/v1/logs?limit=2").await).await;
    assert_eq!(logs.as_array().unwrap().len(), 2);
}
