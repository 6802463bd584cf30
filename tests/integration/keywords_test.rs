// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;

use super::helpers::{body_json, send_get, send_json, serp_settings, test_app, test_db};

/// 关键词注册测试
///
/// 验证注册成功后返回带ID和创建时间的实体
#[tokio::test]
async fn create_keyword_returns_persisted_row() {
    let db = test_db().await;
    let serp = serp_settings("http://127.0.0.1:0");
    let app = test_app(db, &serp);

    let response = send_json(
        app,
        "POST",
        "/v1/keywords",
        json!({ "keyword": "rust web framework", "site": "example.com" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["keyword"], "rust web framework");
    assert_eq!(body["site"], "example.com");
    assert!(body["id"].as_i64().unwrap() > 0);
    assert!(body["created_at"].is_string());
}

/// 空关键词拒绝测试
#[tokio::test]
async fn create_keyword_rejects_empty_fields() {
    let db = test_db().await;
    let serp = serp_settings("http://127.0.0.1:0");

    let response = send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": "", "site": "example.com" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Whitespace-only passes the length check but must still be rejected
    let response = send_json(
        test_app(db, &serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": "rust", "site": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 输入首尾空白剥离测试
#[tokio::test]
async fn create_keyword_trims_whitespace() {
    let db = test_db().await;
    let serp = serp_settings("http://127.0.0.1:0");

    let response = send_json(
        test_app(db, &serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": "  rust  ", "site": " example.com " }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["keyword"], "rust");
    assert_eq!(body["site"], "example.com");
}

/// 关键词列表测试
///
/// 验证列表按创建时间倒序返回
#[tokio::test]
async fn list_keywords_newest_first() {
    let db = test_db().await;
    let serp = serp_settings("http://127.0.0.1:0");

    send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": "first", "site": "a.example" }),
    )
    .await;
    tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    send_json(
        test_app(db.clone(), &serp),
        "POST",
        "/v1/keywords",
        json!({ "keyword": "second", "site": "b.example" }),
    )
    .await;

    let response = send_get(test_app(db, &serp), "/v1/keywords").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["keyword"], "second");
    assert_eq!(items[1]["keyword"], "first");
}
