mod common;

use serde_json::{Value, json};
use shortlink::api::dto::links::LinkResponse;
use sqlx::PgPool;

fn is_valid_generated_code(code: &str) -> bool {
    code.len() == 6 && code.chars().all(|c| c.is_ascii_alphanumeric())
}

#[sqlx::test]
async fn test_create_link_with_generated_code(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com/some/page" }))
        .await;

    assert_eq!(response.status_code(), 201);

    let link = response.json::<LinkResponse>();
    assert!(is_valid_generated_code(&link.code), "code: {}", link.code);
    assert_eq!(link.target_url, "https://example.com/some/page");
    assert_eq!(link.total_clicks, 0);
    assert!(link.last_clicked.is_none());
}

#[sqlx::test]
async fn test_create_link_response_is_camel_case(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com" }))
        .await;

    let json = response.json::<Value>();
    for key in ["id", "code", "targetUrl", "totalClicks", "lastClicked", "createdAt"] {
        assert!(json.get(key).is_some(), "missing key {key}");
    }
    assert!(json["lastClicked"].is_null());
}

#[sqlx::test]
async fn test_create_link_with_custom_code(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "promo24" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.json::<LinkResponse>().code, "promo24");
}

#[sqlx::test]
async fn test_create_link_empty_custom_code_generates_one(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "" }))
        .await;

    assert_eq!(response.status_code(), 201);
    assert!(is_valid_generated_code(&response.json::<LinkResponse>().code));
}

#[sqlx::test]
async fn test_create_link_duplicate_custom_code(pool: PgPool) {
    common::create_test_link(&pool, "taken01", "https://first.example").await;
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://second.example", "customCode": "taken01" }))
        .await;

    assert_eq!(response.status_code(), 409);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "conflict");

    let existing: String = sqlx::query_scalar("SELECT target_url FROM links WHERE code = $1")
        .bind("taken01")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(existing, "https://first.example");
}

#[sqlx::test]
async fn test_create_link_invalid_url(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "not a url" }))
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert!(!json["error"]["details"].as_object().unwrap().is_empty());
}

#[sqlx::test]
async fn test_create_link_url_with_embedded_newline(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    for target in ["https://example.com/a\nb", "https://example.com/a\tb"] {
        let response = server
            .post("/api/links")
            .json(&json!({ "targetUrl": target, "customCode": "ctrl001" }))
            .await;

        assert_eq!(response.status_code(), 400, "accepted {target:?}");
        assert_eq!(response.json::<Value>()["error"]["code"], "validation_error");
    }

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    server.get("/ctrl001").await.assert_status_not_found();
}

#[sqlx::test]
async fn test_create_link_custom_code_too_short(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "ab" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_create_link_custom_code_with_symbols(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "targetUrl": "https://example.com", "customCode": "bad-code" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_create_link_malformed_json(pool: PgPool) {
    let server = common::create_test_server(pool.clone());

    let response = server
        .post("/api/links")
        .content_type("application/json")
        .bytes("{\"targetUrl\": ".into())
        .await;

    assert_eq!(response.status_code(), 400);

    let json = response.json::<Value>();
    assert_eq!(json["error"]["code"], "validation_error");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test]
async fn test_create_link_missing_target_url(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server
        .post("/api/links")
        .json(&json!({ "customCode": "promo24" }))
        .await;

    assert_eq!(response.status_code(), 400);
}

#[sqlx::test]
async fn test_get_link(pool: PgPool) {
    common::create_test_link(&pool, "getme01", "https://example.com/get").await;
    let server = common::create_test_server(pool);

    let response = server.get("/api/links/getme01").await;

    response.assert_status_ok();

    let link = response.json::<LinkResponse>();
    assert_eq!(link.code, "getme01");
    assert_eq!(link.target_url, "https://example.com/get");
}

#[sqlx::test]
async fn test_get_link_not_found(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/links/missing1").await;

    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_list_links_empty(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.get("/api/links").await;

    response.assert_status_ok();
    assert!(response.json::<Vec<LinkResponse>>().is_empty());
}

#[sqlx::test]
async fn test_list_links_newest_first(pool: PgPool) {
    let server = common::create_test_server(pool);

    for (url, code) in [
        ("https://one.example", "first01"),
        ("https://two.example", "second1"),
        ("https://three.example", "third01"),
    ] {
        server
            .post("/api/links")
            .json(&json!({ "targetUrl": url, "customCode": code }))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
    }

    let response = server.get("/api/links").await;
    let links = response.json::<Vec<LinkResponse>>();

    let codes: Vec<&str> = links.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["third01", "second1", "first01"]);
}

#[sqlx::test]
async fn test_delete_link(pool: PgPool) {
    let link_id = common::create_test_link(&pool, "delme01", "https://example.com").await;
    common::create_test_click(&pool, link_id).await;
    let server = common::create_test_server(pool.clone());

    let response = server.delete("/api/links/delme01").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "success": true }));

    server
        .get("/api/links/delme01")
        .await
        .assert_status_not_found();
    server.get("/delme01").await.assert_status_not_found();

    assert_eq!(common::count_clicks(&pool, link_id).await, 0);
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: PgPool) {
    let server = common::create_test_server(pool);

    let response = server.delete("/api/links/missing1").await;

    assert_eq!(response.status_code(), 404);
}

#[sqlx::test]
async fn test_delete_link_twice(pool: PgPool) {
    common::create_test_link(&pool, "twice01", "https://example.com").await;
    let server = common::create_test_server(pool);

    server.delete("/api/links/twice01").await.assert_status_ok();
    server
        .delete("/api/links/twice01")
        .await
        .assert_status_not_found();
}
