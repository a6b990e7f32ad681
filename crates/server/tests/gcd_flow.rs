use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use migration::MigratorTrait;
use sea_orm::{ConnectOptions, Database};
use serde_json::{json, Value};
use tower::ServiceExt;

use server::routes::{self, auth};

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

async fn build_app() -> anyhow::Result<Router> {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await?;
    migration::Migrator::up(&db, None).await?;
    let state = auth::ServerState {
        db,
        auth: auth::ServerAuthConfig { jwt_secret: "test-secret".into(), token_ttl_minutes: 30 },
    };
    Ok(routes::build_router(cors(), state))
}

fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {}", t));
    }
    builder.body(Body::from(serde_json::to_vec(body).unwrap())).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {}", t));
    }
    builder.body(Body::empty()).unwrap()
}

fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("DELETE").uri(uri);
    if let Some(t) = token {
        builder = builder.header("authorization", format!("Bearer {}", t));
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(resp: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = resp.into_body().collect().await?.to_bytes();
    Ok(serde_json::from_slice(&bytes)?)
}

async fn register(app: &Router, email: &str) -> anyhow::Result<String> {
    let resp = app
        .clone()
        .oneshot(post_json("/auth/register", None, &json!({"email": email, "password": "secret1"})))
        .await?;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await?;
    Ok(body["access_token"].as_str().unwrap().to_string())
}

#[tokio::test]
async fn calculate_requires_bearer_token() -> anyhow::Result<()> {
    let app = build_app().await?;

    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", None, &json!({"a": 48, "b": 18})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", Some("not.a.jwt"), &json!({"a": 48, "b": 18})))
        .await?;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn calculate_rejects_non_positive_operands() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = register(&app, "user@example.com").await?;

    for payload in [json!({"a": 0, "b": 18}), json!({"a": 48, "b": -6})] {
        let resp = app
            .clone()
            .oneshot(post_json("/gcd/calculate", Some(&token), &payload))
            .await?;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = json_body(resp).await?;
        assert!(body["detail"].as_str().unwrap().contains("positive"));
    }
    Ok(())
}

#[tokio::test]
async fn calculate_returns_full_trace() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = register(&app, "user@example.com").await?;

    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", Some(&token), &json!({"a": 48, "b": 18})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await?;
    assert_eq!(body["result"], 6);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0], json!({"a": 48, "b": 18, "quotient": 2, "remainder": 12}));
    assert_eq!(steps[2], json!({"a": 12, "b": 6, "quotient": 2, "remainder": 0}));

    // Equal inputs: exactly one step
    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", Some(&token), &json!({"a": 7, "b": 7})))
        .await?;
    let body = json_body(resp).await?;
    assert_eq!(body["result"], 7);
    assert_eq!(body["steps"], json!([{"a": 7, "b": 7, "quotient": 1, "remainder": 0}]));
    Ok(())
}

#[tokio::test]
async fn history_lists_newest_first_with_limit() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = register(&app, "user@example.com").await?;

    for (a, b) in [(48, 18), (100, 35), (7, 7)] {
        let resp = app
            .clone()
            .oneshot(post_json("/gcd/calculate", Some(&token), &json!({"a": a, "b": b})))
            .await?;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = app.clone().oneshot(get("/gcd/history", Some(&token))).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let items = json_body(resp).await?;
    let items = items.as_array().unwrap().clone();
    assert_eq!(items.len(), 3);
    // Newest first: the (7, 7) computation is on top
    assert_eq!(items[0]["a"], 7);
    assert_eq!(items[2]["a"], 48);
    // Owner id is not echoed back
    assert!(items[0].get("user_id").is_none());

    let resp = app.clone().oneshot(get("/gcd/history?limit=2", Some(&token))).await?;
    let items = json_body(resp).await?;
    assert_eq!(items.as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn history_item_fetch_and_delete() -> anyhow::Result<()> {
    let app = build_app().await?;
    let token = register(&app, "user@example.com").await?;

    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", Some(&token), &json!({"a": 100, "b": 35})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(get("/gcd/history", Some(&token))).await?;
    let items = json_body(resp).await?;
    let id = items[0]["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(get(&format!("/gcd/history/{}", id), Some(&token)))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let item = json_body(resp).await?;
    assert_eq!(item["result"], 5);
    assert_eq!(item["steps"].as_array().unwrap().len(), 3);

    let resp = app
        .clone()
        .oneshot(delete(&format!("/gcd/history/{}", id), Some(&token)))
        .await?;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    // Gone now, both for fetch and repeated delete
    let resp = app
        .clone()
        .oneshot(get(&format!("/gcd/history/{}", id), Some(&token)))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app
        .clone()
        .oneshot(delete(&format!("/gcd/history/{}", id), Some(&token)))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn history_is_isolated_between_users() -> anyhow::Result<()> {
    let app = build_app().await?;
    let alice = register(&app, "alice@example.com").await?;
    let mallory = register(&app, "mallory@example.com").await?;

    let resp = app
        .clone()
        .oneshot(post_json("/gcd/calculate", Some(&alice), &json!({"a": 270, "b": 192})))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.clone().oneshot(get("/gcd/history", Some(&alice))).await?;
    let items = json_body(resp).await?;
    let id = items[0]["id"].as_i64().unwrap();

    // Another user sees an empty history and cannot touch the item
    let resp = app.clone().oneshot(get("/gcd/history", Some(&mallory))).await?;
    let items = json_body(resp).await?;
    assert!(items.as_array().unwrap().is_empty());

    let resp = app
        .clone()
        .oneshot(get(&format!("/gcd/history/{}", id), Some(&mallory)))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = app
        .clone()
        .oneshot(delete(&format!("/gcd/history/{}", id), Some(&mallory)))
        .await?;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Still intact for the owner
    let resp = app
        .clone()
        .oneshot(get(&format!("/gcd/history/{}", id), Some(&alice)))
        .await?;
    assert_eq!(resp.status(), StatusCode::OK);
    Ok(())
}
