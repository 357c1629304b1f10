//! End-to-end browsing scenarios

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::assert_redirect;
use crate::common::{body_json, create_test_user, set_cookie, TestApp};

#[tokio::test]
async fn test_register_login_and_view_feed() {
    let app = TestApp::new().await;

    let response = app
        .post_form("/register", "username=alice&email=a%40x.com&password=p1", None)
        .await;
    assert_redirect!(response, "/login");

    let response = app
        .post_form("/login", "username=alice&password=p1", None)
        .await;
    assert_redirect!(response, "/");
    let set = set_cookie(&response).expect("identity cookie");
    let cookie = set.split(';').next().unwrap().to_string();

    let page = body_json(app.get("/", Some(&cookie)).await).await;
    assert_eq!(page["template"], "index");
    assert_eq!(page["context"]["data"], json!([]));
}

#[tokio::test]
async fn test_add_restaurant_then_search() {
    let app = TestApp::new().await;
    let user = create_test_user(app.db.pool(), "alice", "p1").await;

    let response = app
        .post_form(
            "/add_restaurant",
            "name=Joe%27s&address=1+Main+St&cuisine=Diner",
            Some(&user.cookie()),
        )
        .await;
    assert_redirect!(response, "/restaurant");

    let page = body_json(app.get("/restaurant?search=joe", Some(&user.cookie())).await).await;
    let rows = page["context"]["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Joe's");
    assert_eq!(rows[0]["address"], "1 Main St");
    assert_eq!(rows[0]["avg_rating"], 0.0);
    assert_eq!(rows[0]["review_count"], 0);
}
