//! Review feed and review submission integration tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use crate::common::{body_json, create_test_user, TestApp};
use crate::{assert_contains, assert_redirect};

#[tokio::test]
async fn test_feed_lists_reviews_newest_first() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;
    let joes = app.db.insert_restaurant("Joe's", "1 Main St", "Diner").await;
    app.db.insert_review(joes, user.id, 3, "first").await;
    app.db.insert_review(joes, user.id, 5, "second").await;

    let page = body_json(app.get("/", Some(&user.cookie())).await).await;

    assert_eq!(page["template"], "index");
    assert_eq!(page["context"]["user_id"], user.id);
    let reviews = page["context"]["data"].as_array().unwrap();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0]["text"], "second");
    assert_eq!(reviews[0]["user"], "alice");
    assert_eq!(reviews[0]["restaurant"], "Joe's");
}

#[tokio::test]
async fn test_add_review_form_lists_restaurants() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;
    app.db.insert_restaurant("Zed's", "z", "Diner").await;
    app.db.insert_restaurant("Ann's", "a", "Cafe").await;

    let page = body_json(app.get("/add_review", Some(&user.cookie())).await).await;

    assert_eq!(page["template"], "add_review");
    assert_eq!(page["context"]["data"][0]["name"], "Ann's");
    assert_eq!(page["context"]["data"][1]["name"], "Zed's");
}

#[tokio::test]
async fn test_add_review_as_current_user() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;
    let joes = app.db.insert_restaurant("Joe's", "1 Main St", "Diner").await;

    let body = format!("restaurant={joes}&rating=4&text=Great+pie");
    let response = app.post_form("/add_review", &body, Some(&user.cookie())).await;
    assert_redirect!(response, "/");

    let page = body_json(app.get(&format!("/restaurant/{joes}"), Some(&user.cookie())).await).await;
    assert_eq!(page["context"]["reviews"][0]["user"], "alice");
    assert_eq!(page["context"]["reviews"][0]["text"], "Great pie");
    assert_eq!(page["context"]["restaurant"]["avg_rating"], 4.0);
}

#[tokio::test]
async fn test_repeated_rating_uses_first_value() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;
    let joes = app.db.insert_restaurant("Joe's", "1 Main St", "Diner").await;

    let body = format!("restaurant={joes}&rating=2&rating=5&text=meh");
    let response = app.post_form("/add_review", &body, Some(&user.cookie())).await;
    assert_redirect!(response, "/");

    let page = body_json(app.get(&format!("/restaurant/{joes}"), Some(&user.cookie())).await).await;
    assert_eq!(page["context"]["restaurant"]["avg_rating"], 2.0);
    assert_eq!(page["context"]["restaurant"]["review_count"], 1);
}

#[tokio::test]
async fn test_add_review_with_bad_rating_rerenders_form() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;
    let joes = app.db.insert_restaurant("Joe's", "1 Main St", "Diner").await;

    let body = format!("restaurant={joes}&rating=five&text=hmm");
    let response = app.post_form("/add_review", &body, Some(&user.cookie())).await;

    assert_eq!(response.status(), StatusCode::OK);
    let page = body_json(response).await;
    assert_eq!(page["template"], "add_review");
    assert_contains!(
        page["context"]["message"].as_str().unwrap(),
        "Review Submission Failed: "
    );
    assert_eq!(page["context"]["data"][0]["name"], "Joe's");
    assert_eq!(app.db.count("Review").await, 0);
}
