//! Database operations for restaurants
//!
//! Average ratings are computed in the store, rounded to one decimal place,
//! and default to `0.0` for restaurants without reviews.

use serde::Serialize;
use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::backend::database::{Filter, FilterSet};

/// Restaurant row on the listing page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantListing {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub avg_rating: f64,
    pub review_count: i64,
}

/// Header of a restaurant's own page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantSummary {
    pub restaurant_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub cuisine: Option<String>,
    pub avg_rating: f64,
    pub review_count: i64,
}

/// Restaurant choice on the review form
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantChoice {
    pub id: i64,
    pub name: String,
}

/// Restaurant choice on the dish pages
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantOption {
    pub restaurant_id: i64,
    pub name: String,
}

/// Optional filters of the listing page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantQuery {
    /// Case-insensitive substring of the name
    pub search: Option<String>,
    /// Minimum unrounded average rating
    pub min_rating: Option<f64>,
}

impl RestaurantQuery {
    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        filters.contains("r.name", self.search.as_deref());
        if let Some(min_rating) = self.min_rating {
            filters.push(Filter::AtLeast {
                aggregate: "AVG(rev.rating)",
                value: min_rating,
            });
        }
        filters
    }
}

/// Values submitted on the restaurant form
#[derive(Debug, Clone, Default)]
pub struct NewRestaurant {
    pub name: Option<String>,
    pub address: Option<String>,
    pub cuisine: Option<String>,
}

const LISTING_SELECT: &str = r#"
    SELECT
        r.restaurant_id AS id,
        r.name,
        r.address,
        r.cuisine,
        COALESCE(ROUND(AVG(rev.rating), 1), 0.0) AS avg_rating,
        COUNT(rev.review_id) AS review_count
    FROM Restaurant r
    LEFT JOIN Review rev ON r.restaurant_id = rev.restaurant_id"#;

/// Restaurants with rating aggregates, best rated first then by name
pub async fn list_restaurants(
    conn: &mut SqliteConnection,
    query: &RestaurantQuery,
) -> Result<Vec<RestaurantListing>, sqlx::Error> {
    let filters = query.filters();

    let mut builder = QueryBuilder::<Sqlite>::new(LISTING_SELECT);
    filters.write_where(&mut builder);
    builder.push(" GROUP BY r.restaurant_id, r.name, r.address, r.cuisine");
    filters.write_having(&mut builder);
    builder.push(" ORDER BY avg_rating DESC, r.name ASC");

    builder
        .build_query_as::<RestaurantListing>()
        .fetch_all(&mut *conn)
        .await
}

/// One restaurant with its rating aggregates
///
/// # Returns
/// `None` if no restaurant has this id
pub async fn get_restaurant_summary(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<Option<RestaurantSummary>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantSummary>(
        r#"
        SELECT
            r.restaurant_id,
            r.name,
            r.address,
            r.cuisine,
            COALESCE(ROUND(AVG(rev.rating), 1), 0.0) AS avg_rating,
            COUNT(rev.review_id) AS review_count
        FROM Restaurant r
        LEFT JOIN Review rev ON r.restaurant_id = rev.restaurant_id
        WHERE r.restaurant_id = ?
        GROUP BY r.restaurant_id, r.name, r.address, r.cuisine
        "#,
    )
    .bind(restaurant_id)
    .fetch_optional(&mut *conn)
    .await
}

/// Id and name of every restaurant, for the review form
pub async fn list_restaurant_choices(
    conn: &mut SqliteConnection,
) -> Result<Vec<RestaurantChoice>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantChoice>(
        "SELECT restaurant_id AS id, name FROM Restaurant ORDER BY name",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Id and name of every restaurant, for the dish pages
pub async fn list_restaurant_options(
    conn: &mut SqliteConnection,
) -> Result<Vec<RestaurantOption>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantOption>(
        "SELECT restaurant_id, name FROM Restaurant ORDER BY name",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Insert a restaurant
///
/// # Returns
/// The new restaurant's id
pub async fn create_restaurant(
    conn: &mut SqliteConnection,
    restaurant: &NewRestaurant,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO Restaurant (name, address, cuisine)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&restaurant.name)
    .bind(&restaurant.address)
    .bind(&restaurant.cuisine)
    .execute(&mut *conn)
    .await?;

    Ok(result.last_insert_rowid())
}
