//! Dish HTTP Handlers
//!
//! - `GET /dishes` - dish listing with `search`, `restaurant` and `allergen` filters
//! - `GET /add_dish` - dish form
//! - `POST /add_dish` - insert a dish with its price and allergens

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::db::{self, DishQuery, NewDish};
use crate::backend::database::DbConn;
use crate::backend::error::BackendError;
use crate::backend::middleware::{CurrentUser, Fields, FormFields, QueryFields};
use crate::backend::restaurants::db::list_restaurant_options;
use crate::backend::routes::redirect_to;
use crate::backend::server::state::AppState;
use crate::backend::templates::{Page, Template};

/// Query string of the dishes page
#[derive(Debug, Default)]
pub struct DishParams {
    pub search: Option<String>,
    pub restaurant: Option<String>,
    pub allergen: Option<String>,
}

fn parse_id(name: &str, raw: Option<&str>) -> Result<Option<i64>, BackendError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| BackendError::bad_request(format!("invalid {name} '{raw}'"))),
    }
}

impl DishParams {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            search: fields.first("search"),
            restaurant: fields.first("restaurant"),
            allergen: fields.first("allergen"),
        }
    }

    /// Convert raw parameters into typed filters
    ///
    /// Blank ids mean "any". Non-integer ids are rejected.
    pub fn to_query(&self) -> Result<DishQuery, BackendError> {
        Ok(DishQuery {
            search: self.search.clone(),
            restaurant_id: parse_id("restaurant", self.restaurant.as_deref())?,
            exclude_allergen: parse_id("allergen", self.allergen.as_deref())?,
        })
    }
}

/// Collect the dish form
///
/// `allergens` may repeat, one value per checked box.
fn dish_from_fields(fields: &Fields) -> NewDish {
    NewDish {
        name: fields.first("name"),
        description: fields.first("description"),
        restaurant_id: fields.first("restaurant"),
        price: fields.first("price"),
        allergen_ids: fields.all("allergens"),
    }
}

/// `GET /dishes`
pub async fn dishes(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    QueryFields(fields): QueryFields,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    let params = DishParams::from_fields(&fields);
    let query = params.to_query()?;
    tracing::debug!("Dish listing with {:?}", query);

    let conn = db.get()?;
    let dishes = db::list_dishes(conn, &query).await?;
    let restaurants = list_restaurant_options(conn).await?;
    let allergens = db::list_allergens(conn).await?;

    state.render(
        Template::Dishes,
        &json!({
            "data": dishes,
            "restaurants": restaurants,
            "allergens": allergens,
            "search": params.search,
            "restaurant": params.restaurant,
            "allergen": params.allergen,
        }),
    )
}

/// `GET /add_dish`
pub async fn add_dish_form(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    render_form(&state, &mut db, None).await
}

/// `POST /add_dish`
pub async fn add_dish(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
    FormFields(fields): FormFields,
) -> Result<Response, BackendError> {
    let dish = dish_from_fields(&fields);

    let result = db::create_dish(db.get()?, &dish).await;
    match result {
        Ok(dish_id) => {
            tracing::info!(
                "Dish {} added by user {} with {} allergens",
                dish_id,
                user_id,
                dish.allergen_ids.len()
            );
            Ok(redirect_to("/dishes"))
        }
        Err(e) => {
            tracing::warn!("Dish add failed: {}", e);
            let message = format!("Dish Add Failed: {e}");
            Ok(render_form(&state, &mut db, Some(message)).await?.into_response())
        }
    }
}

async fn render_form(
    state: &AppState,
    db: &mut DbConn,
    message: Option<String>,
) -> Result<Page, BackendError> {
    let conn = db.get()?;
    let restaurants = list_restaurant_options(conn).await?;
    let allergens = db::list_allergens(conn).await?;

    state.render(
        Template::AddDish,
        &json!({
            "restaurants": restaurants,
            "allergens": allergens,
            "message": message,
        }),
    )
}
