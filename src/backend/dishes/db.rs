//! Database operations for dishes and allergens
//!
//! Dish listings are fetched first, then each dish's allergen names are
//! loaded with a secondary query on the same connection.

use serde::Serialize;
use sqlx::{Connection, QueryBuilder, Sqlite, SqliteConnection};

use crate::backend::database::{Filter, FilterSet};

/// Dish row on the dishes page, one per (dish, restaurant) pair
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct DishListing {
    pub dish_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub restaurant: String,
    pub restaurant_id: i64,
    #[sqlx(skip)]
    pub allergens: Vec<String>,
}

/// Dish row on a restaurant's page
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct RestaurantDish {
    pub dish_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
    #[sqlx(skip)]
    pub allergens: Vec<String>,
}

/// Allergen choice
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AllergenOption {
    pub allergen_id: i64,
    pub allergen_name: String,
}

/// Optional filters of the dishes page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DishQuery {
    /// Case-insensitive substring of the dish name
    pub search: Option<String>,
    /// Only dishes served by this restaurant
    pub restaurant_id: Option<i64>,
    /// Only dishes without this allergen
    pub exclude_allergen: Option<i64>,
}

impl DishQuery {
    fn filters(&self) -> FilterSet {
        let mut filters = FilterSet::new();
        filters.contains("d.name", self.search.as_deref());
        if let Some(value) = self.restaurant_id {
            filters.push(Filter::IdEquals {
                column: "r.restaurant_id",
                value,
            });
        }
        if let Some(allergen_id) = self.exclude_allergen {
            filters.push(Filter::ExcludesAllergen {
                dish_column: "d.dish_id",
                allergen_id,
            });
        }
        filters
    }
}

/// Values submitted on the dish form
///
/// Ids and price are kept as submitted; the store converts them.
#[derive(Debug, Clone, Default)]
pub struct NewDish {
    pub name: Option<String>,
    pub description: Option<String>,
    pub restaurant_id: Option<String>,
    pub price: Option<String>,
    pub allergen_ids: Vec<String>,
}

/// Dishes with restaurant and price, ordered by restaurant then dish name
///
/// Allergen lists are filled in.
pub async fn list_dishes(
    conn: &mut SqliteConnection,
    query: &DishQuery,
) -> Result<Vec<DishListing>, sqlx::Error> {
    let mut builder = QueryBuilder::<Sqlite>::new(
        r#"
        SELECT DISTINCT
            d.dish_id,
            d.name,
            d.description,
            s.price,
            r.name AS restaurant,
            r.restaurant_id
        FROM Dish d
        JOIN Serves s ON d.dish_id = s.dish_id
        JOIN Restaurant r ON s.restaurant_id = r.restaurant_id"#,
    );
    query.filters().write_where(&mut builder);
    builder.push(" ORDER BY r.name ASC, d.name ASC");

    let mut dishes = builder
        .build_query_as::<DishListing>()
        .fetch_all(&mut *conn)
        .await?;

    for dish in &mut dishes {
        dish.allergens = list_allergen_names_for_dish(conn, dish.dish_id).await?;
    }

    Ok(dishes)
}

/// Dishes served by one restaurant, by name
///
/// Allergen lists are left empty for the caller to fill.
pub async fn list_dishes_for_restaurant(
    conn: &mut SqliteConnection,
    restaurant_id: i64,
) -> Result<Vec<RestaurantDish>, sqlx::Error> {
    sqlx::query_as::<_, RestaurantDish>(
        r#"
        SELECT
            d.dish_id,
            d.name,
            d.description,
            s.price
        FROM Dish d
        JOIN Serves s ON d.dish_id = s.dish_id
        WHERE s.restaurant_id = ?
        ORDER BY d.name ASC
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(&mut *conn)
    .await
}

/// Allergen names of one dish, alphabetically
pub async fn list_allergen_names_for_dish(
    conn: &mut SqliteConnection,
    dish_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar(
        r#"
        SELECT a.allergen_name
        FROM Contains c
        JOIN Allergens a ON c.allergen_id = a.allergen_id
        WHERE c.dish_id = ?
        ORDER BY a.allergen_name
        "#,
    )
    .bind(dish_id)
    .fetch_all(&mut *conn)
    .await
}

/// Every allergen, alphabetically
pub async fn list_allergens(
    conn: &mut SqliteConnection,
) -> Result<Vec<AllergenOption>, sqlx::Error> {
    sqlx::query_as::<_, AllergenOption>(
        "SELECT allergen_id, allergen_name FROM Allergens ORDER BY allergen_name",
    )
    .fetch_all(&mut *conn)
    .await
}

/// Insert a dish, the restaurant serving it and its allergens
///
/// The Dish row, the Serves row and the Contains rows are written in one
/// transaction: either all of them are committed or none is.
///
/// # Returns
/// The new dish's id
pub async fn create_dish(conn: &mut SqliteConnection, dish: &NewDish) -> Result<i64, sqlx::Error> {
    let mut tx = conn.begin().await?;

    let dish_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO Dish (name, description)
        VALUES (?, ?)
        RETURNING dish_id
        "#,
    )
    .bind(&dish.name)
    .bind(&dish.description)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO Serves (restaurant_id, dish_id, price)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&dish.restaurant_id)
    .bind(dish_id)
    .bind(&dish.price)
    .execute(&mut *tx)
    .await?;

    for allergen_id in &dish.allergen_ids {
        sqlx::query(
            r#"
            INSERT INTO Contains (dish_id, allergen_id)
            VALUES (?, ?)
            "#,
        )
        .bind(dish_id)
        .bind(allergen_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    Ok(dish_id)
}
