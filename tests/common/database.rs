//! Database test fixtures and utilities
//!
//! Every fixture is a private in-memory SQLite store with the schema
//! applied. The pool holds a single connection that never expires, so the
//! data lives as long as the fixture.

use restaurant_reviews::backend::database::{create_pool, DatabaseConfig};
use sqlx::SqlitePool;

/// Create an in-memory pool with the schema and allergen list in place
pub async fn create_test_pool() -> SqlitePool {
    create_pool(&DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        ..DatabaseConfig::default()
    })
    .await
    .expect("Failed to create test database pool")
}

/// Test database fixture
pub struct TestDatabase {
    pool: SqlitePool,
}

impl TestDatabase {
    /// Create a new test database fixture
    pub async fn new() -> Self {
        Self {
            pool: create_test_pool().await,
        }
    }

    /// Get the database pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn insert_restaurant(&self, name: &str, address: &str, cuisine: &str) -> i64 {
        sqlx::query("INSERT INTO Restaurant (name, address, cuisine) VALUES (?, ?, ?)")
            .bind(name)
            .bind(address)
            .bind(cuisine)
            .execute(&self.pool)
            .await
            .expect("Failed to insert restaurant")
            .last_insert_rowid()
    }

    pub async fn insert_review(&self, restaurant_id: i64, user_id: i64, rating: i64, text: &str) {
        sqlx::query(
            "INSERT INTO Review (restaurant_id, user_id, rating, text_content) VALUES (?, ?, ?, ?)",
        )
        .bind(restaurant_id)
        .bind(user_id)
        .bind(rating)
        .bind(text)
        .execute(&self.pool)
        .await
        .expect("Failed to insert review");
    }

    /// Insert a dish served by one restaurant, tagged with the named allergens
    pub async fn insert_dish(
        &self,
        restaurant_id: i64,
        name: &str,
        price: f64,
        allergens: &[&str],
    ) -> i64 {
        let dish_id = sqlx::query("INSERT INTO Dish (name, description) VALUES (?, NULL)")
            .bind(name)
            .execute(&self.pool)
            .await
            .expect("Failed to insert dish")
            .last_insert_rowid();

        sqlx::query("INSERT INTO Serves (restaurant_id, dish_id, price) VALUES (?, ?, ?)")
            .bind(restaurant_id)
            .bind(dish_id)
            .bind(price)
            .execute(&self.pool)
            .await
            .expect("Failed to insert serves row");

        for allergen in allergens {
            let allergen_id = self.allergen_id(allergen).await;
            sqlx::query("INSERT INTO Contains (dish_id, allergen_id) VALUES (?, ?)")
                .bind(dish_id)
                .bind(allergen_id)
                .execute(&self.pool)
                .await
                .expect("Failed to insert contains row");
        }

        dish_id
    }

    pub async fn allergen_id(&self, name: &str) -> i64 {
        sqlx::query_scalar("SELECT allergen_id FROM Allergens WHERE allergen_name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("Unknown allergen")
    }

    /// Row count of a table
    pub async fn count(&self, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count rows")
    }
}
