use crate::api::handlers::api_routes;
use crate::tests::create_test_service;
use axum::{Router, body::Body};
use http::{Method, Request, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_app() -> Router {
    Router::new().nest("/api", api_routes(Arc::new(create_test_service())))
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(method: Method, uri: &str, token: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn signup_and_token(app: &Router, email: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/users/create",
            json!({ "email": email, "password": password, "name": "Test User" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/users/token",
            json!({ "email": email, "password": password }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    response_json(response).await["token"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_create_user_returns_201_without_password() {
    let app = test_app();
    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/users/create",
            json!({
                "name": "Testy McTester",
                "email": "Test@Example.com",
                "password": "testpass"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["email"], "test@example.com");
    assert_eq!(body["name"], "Testy McTester");
    assert!(body.get("password").is_none());
}

#[tokio::test]
async fn test_token_exchange_returns_token() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_token_exchange_bad_credentials_is_400() {
    let app = test_app();
    signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/users/token",
            json!({ "email": "test@example.com", "password": "wrongpass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unauthenticated_requests_are_401() {
    let app = test_app();
    for uri in [
        "/api/recipe/recipes",
        "/api/recipe/tags",
        "/api/recipe/ingredients",
        "/api/users/profile",
    ] {
        let response = app.clone().oneshot(get_request(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }
}

#[tokio::test]
async fn test_profile_post_is_method_not_allowed() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .oneshot(authed_request(
            Method::POST,
            "/api/users/profile",
            &token,
            Some(json!({ "name": "X" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_create_tag_empty_name_is_400_and_no_row() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::POST,
            "/api/recipe/tags",
            &token,
            Some(json!({ "name": "" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .oneshot(authed_request(
            Method::GET,
            "/api/recipe/tags",
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_json(response).await, json!([]));
}

#[tokio::test]
async fn test_tags_are_scoped_per_token() {
    let app = test_app();
    let token_a = signup_and_token(&app, "a@example.com", "testpass").await;
    let token_b = signup_and_token(&app, "b@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::POST,
            "/api/recipe/tags",
            &token_a,
            Some(json!({ "name": "Charcuterie" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(authed_request(
            Method::GET,
            "/api/recipe/tags",
            &token_b,
            None,
        ))
        .await
        .unwrap();
    let tags = response_json(response).await;
    assert!(
        tags.as_array()
            .unwrap()
            .iter()
            .all(|t| t["name"] != "Charcuterie")
    );
}

#[tokio::test]
async fn test_cross_owner_recipe_is_404() {
    let app = test_app();
    let token_a = signup_and_token(&app, "a@example.com", "testpass").await;
    let token_b = signup_and_token(&app, "b@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::POST,
            "/api/recipe/recipes",
            &token_a,
            Some(json!({ "title": "Sample recipe", "time_minutes": 10, "price": 5.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let recipe_id = response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let cross_owner = app
        .clone()
        .oneshot(authed_request(
            Method::GET,
            &format!("/api/recipe/recipes/{}", recipe_id),
            &token_b,
            None,
        ))
        .await
        .unwrap();
    let missing = app
        .oneshot(authed_request(
            Method::GET,
            "/api/recipe/recipes/no-such-id",
            &token_b,
            None,
        ))
        .await
        .unwrap();

    // Same status either way: ownership must not leak.
    assert_eq!(cross_owner.status(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_recipe_put_replaces_all_fields() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::POST,
            "/api/recipe/recipes",
            &token,
            Some(json!({ "title": "Sample recipe", "time_minutes": 10, "price": 5.0 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let recipe_id = response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .oneshot(authed_request(
            Method::PUT,
            &format!("/api/recipe/recipes/{}", recipe_id),
            &token,
            Some(json!({ "title": "Stew", "time_minutes": 90, "price": 12.5 })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["title"], "Stew");
    assert_eq!(body["time_minutes"], 90);
    assert_eq!(body["price"], 12.5);
}

#[tokio::test]
async fn test_tags_and_ingredients_have_no_delete_surface() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    for uri in ["/api/recipe/tags", "/api/recipe/ingredients"] {
        let response = app
            .clone()
            .oneshot(authed_request(Method::DELETE, uri, &token, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{}", uri);
    }
}

#[tokio::test]
async fn test_recipe_delete_returns_204() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::POST,
            "/api/recipe/recipes",
            &token,
            Some(json!({ "title": "Sample recipe", "time_minutes": 10, "price": 5.0 })),
        ))
        .await
        .unwrap();
    let recipe_id = response_json(response).await["id"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::DELETE,
            &format!("/api/recipe/recipes/{}", recipe_id),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(authed_request(
            Method::GET,
            &format!("/api/recipe/recipes/{}", recipe_id),
            &token,
            None,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_profile_patch_updates_name_and_password() {
    let app = test_app();
    let token = signup_and_token(&app, "test@example.com", "testpass").await;

    let response = app
        .clone()
        .oneshot(authed_request(
            Method::PATCH,
            "/api/users/profile",
            &token,
            Some(json!({ "name": "X", "password": "newtestpass" })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "X");
    assert_eq!(body["email"], "test@example.com");

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/users/token",
            json!({ "email": "test@example.com", "password": "newtestpass" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
