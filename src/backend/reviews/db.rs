//! Database operations for reviews

use chrono::NaiveDateTime;
use serde::Serialize;
use sqlx::SqliteConnection;

/// Review in the global feed
///
/// Reviewer and restaurant come from outer joins and may be missing.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ReviewRow {
    pub user: Option<String>,
    pub restaurant: Option<String>,
    pub rating: i64,
    pub text: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Review shown on a restaurant's page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantReview {
    pub user: Option<String>,
    pub rating: i64,
    pub text: Option<String>,
    pub timestamp: NaiveDateTime,
}

/// Values submitted on the review form
///
/// Restaurant and rating are kept as submitted; the store converts them and
/// rejects values that are not integers.
#[derive(Debug, Clone, Default)]
pub struct NewReview {
    pub restaurant_id: Option<String>,
    pub user_id: i64,
    pub rating: Option<String>,
    pub text_content: Option<String>,
}

/// All reviews with reviewer and restaurant names, newest first
pub async fn list_reviews(conn: &mut SqliteConnection) -> Result<Vec<ReviewRow>, sqlx::Error> {
    sqlx::query_as::<_, ReviewRow>(
        r#"
        SELECT
            u.username AS user,
            res.name AS restaurant,
            r.rating AS rating,
            r.text_content AS text,
            r."timestamp" AS timestamp
        FROM Review r
        LEFT JOIN "User" u ON r.user_id = u.user_id
        LEFT JOIN Restaurant res ON r.restaurant_id = res.restaurant_id
        ORDER BY r."timestamp" DESC, r.review_id DESC
        "#,
    )
    .fetch_all(&mut *conn)
    .await
}

/// Reviews of one restaurant, newest first
pub async fn list_reviews_for_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<Vec<RestaurantReview>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantReview>(
        r#"
        SELECT
            u.username AS user,
            r.rating AS rating,
            r.text_content AS text,
            r."timestamp" AS timestamp
        FROM Review r
        LEFT JOIN "User" u ON r.user_id = u.user_id
        WHERE r.restaurant_id = ?
        ORDER BY r."timestamp" DESC, r.review_id DESC
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(&mut *conn)
    .await
}

/// Insert a review stamped with the store's current time
///
/// # Returns
/// The new review's id
pub async fn create_review(
    conn: &mut SqliteConnection,
    review: &NewReview,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO Review (restaurant_id, user_id, rating, text_content, "timestamp")
        VALUES (?, ?, ?, ?, CURRENT_TIMESTAMP)
        "#,
    )
    .bind(&review.restaurant_id)
    .bind(review.user_id)
    .bind(&review.rating)
    .bind(&review.text_content)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
