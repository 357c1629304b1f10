//! Authentication test helpers
//!
//! Provides utilities for creating test users and the identity cookie a
//! logged-in browser would send.

use chrono::NaiveDate;
use restaurant_reviews::backend::auth::users::{create_user, NewUser};
use sqlx::SqlitePool;

/// Test user credentials
pub struct TestUser {
    pub id: i64,
    pub username: String,
    pub password: String,
}

impl TestUser {
    /// `Cookie` request header value identifying this user
    pub fn cookie(&self) -> String {
        format!("user_id={}", self.id)
    }
}

/// Create a test user in the database
pub async fn create_test_user(pool: &SqlitePool, username: &str, password: &str) -> TestUser {
    let mut conn = pool.acquire().await.expect("Failed to acquire connection");
    let user = NewUser {
        username: Some(username.to_string()),
        email: Some(format!("{username}@example.com")),
        password: Some(password.to_string()),
        join_date: NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date"),
    };
    let id = create_user(&mut conn, &user)
        .await
        .expect("Failed to create test user");

    TestUser {
        id,
        username: username.to_string(),
        password: password.to_string(),
    }
}
