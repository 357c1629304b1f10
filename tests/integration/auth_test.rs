//! Authentication integration tests
//!
//! Login, registration, logout and the redirect guarding every page.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, body_string, create_test_user, set_cookie, TestApp};
use crate::{assert_contains, assert_redirect};

#[tokio::test]
async fn test_login_success_sets_identity_cookie() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;

    let response = app
        .post_form("/login", "username=alice&password=p1", None)
        .await;

    assert_redirect!(response, "/");
    let cookie = set_cookie(&response).expect("identity cookie");
    assert_contains!(cookie, &format!("user_id={}", user.id));
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    create_test_user(app.db.pool(), "alice", "p1").await;

    let response = app
        .post_form("/login", "username=alice&password=nope", None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie(&response), None);
    let page = body_json(response).await;
    assert_eq!(page["template"], "login");
    assert_eq!(page["context"]["message"], "Invalid login");
}

#[tokio::test]
async fn test_login_unknown_user_and_missing_fields() {
    let app = TestApp::new().await;

    for body in ["username=ghost&password=p1", "username=ghost", ""] {
        let response = app.post_form("/login", body, None).await;
        assert_eq!(set_cookie(&response), None);
        let page = body_json(response).await;
        assert_eq!(page["context"]["message"], "Invalid login");
    }
}

#[tokio::test]
async fn test_blank_user_cannot_log_in_with_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/register", "username=&email=&password=", None)
        .await;
    assert_redirect!(response, "/login");

    let response = app.post_form("/login", "", None).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(set_cookie(&response), None);
    let page = body_json(response).await;
    assert_eq!(page["context"]["message"], "Invalid login");

    let response = app.post_form("/login", "username=&password=", None).await;
    assert_redirect!(response, "/");
}

#[tokio::test]
async fn test_form_without_content_type_is_bad_request() {
    let app = TestApp::new().await;

    let request = axum::http::Request::post("/login")
        .body(axum::body::Body::from("username=alice&password=p1"))
        .unwrap();
    let response = app.send(request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(set_cookie(&response), None);
    assert_contains!(body_string(response).await, "400 Bad Request");
}

#[tokio::test]
async fn test_login_and_register_forms_are_public() {
    let app = TestApp::new().await;

    let page = body_json(app.get("/login", None).await).await;
    assert_eq!(page, json!({ "template": "login", "context": { "message": null } }));

    let page = body_json(app.get("/register", None).await).await;
    assert_eq!(page["template"], "register");
}

#[tokio::test]
async fn test_protected_routes_redirect_without_cookie() {
    let app = TestApp::new().await;

    for path in [
        "/",
        "/restaurant",
        "/restaurant/1",
        "/add_restaurant",
        "/add_review",
        "/add_dish",
        "/dishes",
    ] {
        let response = app.get(path, None).await;
        assert_redirect!(response, "/login");
    }

    let response = app.post_form("/add_restaurant", "name=X", None).await;
    assert_redirect!(response, "/login");
    assert_eq!(app.db.count("Restaurant").await, 0);
}

#[tokio::test]
async fn test_redirect_happens_before_any_store_access() {
    let app = TestApp::new().await;
    app.db.pool().close().await;

    let response = app.get("/restaurant", None).await;
    assert_redirect!(response, "/login");

    let response = app.get("/restaurant", Some("user_id=1")).await;
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_non_numeric_cookie_is_treated_as_absent() {
    let app = TestApp::new().await;

    let response = app.get("/", Some("user_id=admin")).await;
    assert_redirect!(response, "/login");
}

#[tokio::test]
async fn test_register_duplicate_username_fails() {
    let app = TestApp::new().await;
    create_test_user(app.db.pool(), "alice", "p1").await;

    let response = app
        .post_form("/register", "username=alice&email=b%40x.com&password=p2", None)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["template"], "register");
    let message = page["context"]["message"].as_str().unwrap();
    assert!(message.starts_with("Registration Failed: "), "{message}");
    assert_eq!(app.db.count("\"User\"").await, 1);
}

#[tokio::test]
async fn test_register_without_password_fails() {
    let app = TestApp::new().await;

    let response = app.post_form("/register", "username=bob", None).await;

    let page = body_json(response).await;
    assert_contains!(page["context"]["message"].as_str().unwrap(), "Registration Failed");
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let app = TestApp::new().await;

    let response = app.get("/logout", Some("user_id=1")).await;

    assert_redirect!(response, "/login");
    let cookie = set_cookie(&response).expect("cleared cookie");
    assert_contains!(cookie, "user_id=;");
    assert_contains!(cookie, "Max-Age=0");
}
