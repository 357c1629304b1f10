//! Restaurant page integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use crate::common::{body_json, body_string, create_test_user, TestApp, TestUser};
use crate::{assert_approx_eq, assert_contains, assert_redirect};

/// Alpha rated {3, 4, 5}, Bravo rated {5, 4}, Charlie unrated
async fn seeded() -> (TestApp, TestUser) {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;

    let alpha = app.db.insert_restaurant("Alpha", "1 A St", "Thai").await;
    let bravo = app.db.insert_restaurant("Bravo", "2 B St", "Diner").await;
    app.db.insert_restaurant("Charlie", "3 C St", "Diner").await;

    for rating in [3, 4, 5] {
        app.db.insert_review(alpha, user.id, rating, "ok").await;
    }
    for rating in [5, 4] {
        app.db.insert_review(bravo, user.id, rating, "ok").await;
    }

    (app, user)
}

fn names(page: &Value) -> Vec<String> {
    page["context"]["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_listing_aggregates() {
    let (app, user) = seeded().await;

    let page = body_json(app.get("/restaurant", Some(&user.cookie())).await).await;

    assert_eq!(page["template"], "restaurant");
    assert_eq!(names(&page), vec!["Bravo", "Alpha", "Charlie"]);

    let rows = page["context"]["data"].as_array().unwrap();
    assert_approx_eq!(rows[1]["avg_rating"].as_f64().unwrap(), 4.0, 1e-9);
    assert_eq!(rows[1]["review_count"], 3);
    assert_approx_eq!(rows[2]["avg_rating"].as_f64().unwrap(), 0.0, 1e-9);
    assert_eq!(rows[2]["review_count"], 0);
}

#[tokio::test]
async fn test_listing_is_idempotent() {
    let (app, user) = seeded().await;
    let uri = "/restaurant?search=a&rating=";

    let first = body_json(app.get(uri, Some(&user.cookie())).await).await;
    let second = body_json(app.get(uri, Some(&user.cookie())).await).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_listing_filters_echoed() {
    let (app, user) = seeded().await;

    let page = body_json(
        app.get("/restaurant?search=BRA&rating=4", Some(&user.cookie()))
            .await,
    )
    .await;

    assert_eq!(names(&page), vec!["Bravo"]);
    assert_eq!(page["context"]["search"], "BRA");
    assert_eq!(page["context"]["rating"], "4");
}

#[tokio::test]
async fn test_rating_filter_excludes_unrated() {
    let (app, user) = seeded().await;

    let page = body_json(app.get("/restaurant?rating=0", Some(&user.cookie())).await).await;

    assert_eq!(names(&page), vec!["Bravo", "Alpha", "Charlie"]);

    let page = body_json(app.get("/restaurant?rating=4.2", Some(&user.cookie())).await).await;
    assert_eq!(names(&page), vec!["Bravo"]);
}

#[tokio::test]
async fn test_invalid_rating_is_bad_request() {
    let (app, user) = seeded().await;

    let response = app.get("/restaurant?rating=high", Some(&user.cookie())).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_restaurant_info() {
    let (app, user) = seeded().await;
    let alpha_id = 1;
    app.db.insert_dish(alpha_id, "Pad Thai", 12.0, &["Peanuts", "Eggs"]).await;

    let page = body_json(
        app.get(&format!("/restaurant/{alpha_id}"), Some(&user.cookie()))
            .await,
    )
    .await;

    assert_eq!(page["template"], "restaurant_info");
    let context = &page["context"];
    assert_eq!(context["restaurant"]["name"], "Alpha");
    assert_eq!(context["restaurant"]["review_count"], 3);
    assert_eq!(context["dishes"][0]["name"], "Pad Thai");
    assert_eq!(
        context["dishes"][0]["allergens"],
        serde_json::json!(["Eggs", "Peanuts"])
    );
    assert_eq!(context["reviews"].as_array().unwrap().len(), 3);
    assert_eq!(context["reviews"][0]["user"], "alice");
}

#[tokio::test]
async fn test_unknown_restaurant_is_not_found() {
    let (app, user) = seeded().await;

    let response = app.get("/restaurant/999999", Some(&user.cookie())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.get("/restaurant/abc", Some(&user.cookie())).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_add_restaurant() {
    let (app, user) = seeded().await;

    let response = app
        .post_form(
            "/add_restaurant",
            "name=Delta&address=4+D+St&cuisine=Greek",
            Some(&user.cookie()),
        )
        .await;

    assert_redirect!(response, "/restaurant");
    assert_eq!(app.db.count("Restaurant").await, 4);
}

#[tokio::test]
async fn test_add_restaurant_without_name_rerenders_form() {
    let (app, user) = seeded().await;

    let response = app
        .post_form("/add_restaurant", "address=nowhere", Some(&user.cookie()))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["template"], "add_restaurant");
    assert_contains!(
        page["context"]["message"].as_str().unwrap(),
        "Restaurant Add Failed: "
    );
    assert_eq!(app.db.count("Restaurant").await, 3);
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let (app, user) = seeded().await;

    let response = app.get("/no/such/page", Some(&user.cookie())).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_contains!(body_string(response).await, "404 Not Found");
}

#[tokio::test]
async fn test_missing_static_asset_is_public_not_found() {
    let app = TestApp::new().await;

    let response = app.get("/static/no-such-file.css", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
