//! Restaurant HTTP Handlers
//!
//! - `GET /restaurant` - listing with optional `search` and `rating` filters
//! - `GET /restaurant/{id}` - one restaurant with its dishes and reviews
//! - `GET /add_restaurant` - restaurant form
//! - `POST /add_restaurant` - insert a restaurant

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::db::{self, NewRestaurant, RestaurantQuery};
use crate::backend::database::DbConn;
use crate::backend::dishes::db::{list_allergen_names_for_dish, list_dishes_for_restaurant};
use crate::backend::error::BackendError;
use crate::backend::middleware::{CurrentUser, Fields, FormFields, QueryFields};
use crate::backend::reviews::db::list_reviews_for_restaurant;
use crate::backend::routes::redirect_to;
use crate::backend::server::state::AppState;
use crate::backend::templates::{Page, Template};

/// Query string of the listing page
#[derive(Debug, Default)]
pub struct RestaurantParams {
    pub search: Option<String>,
    pub rating: Option<String>,
}

impl RestaurantParams {
    pub fn from_fields(fields: &Fields) -> Self {
        Self {
            search: fields.first("search"),
            rating: fields.first("rating"),
        }
    }

    /// Convert raw parameters into typed filters
    ///
    /// An empty `rating` means no minimum. Anything else must be a number.
    pub fn to_query(&self) -> Result<RestaurantQuery, BackendError> {
        let min_rating = match self.rating.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(raw.parse::<f64>().map_err(|_| {
                BackendError::bad_request(format!("invalid rating '{raw}'"))
            })?),
        };

        Ok(RestaurantQuery {
            search: self.search.clone(),
            min_rating,
        })
    }
}

/// `GET /restaurant`
pub async fn restaurants(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    QueryFields(fields): QueryFields,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    let params = RestaurantParams::from_fields(&fields);
    let query = params.to_query()?;
    tracing::debug!("Restaurant listing with {:?}", query);

    let restaurants = db::list_restaurants(db.get()?, &query).await?;

    state.render(
        Template::Restaurants,
        &json!({
            "data": restaurants,
            "search": params.search,
            "rating": params.rating,
        }),
    )
}

/// `GET /restaurant/{restaurant_id}`
///
/// A non-numeric id is treated like an unknown one.
pub async fn restaurant_info(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    let not_found = || BackendError::not_found(format!("Restaurant {raw_id} not found"));
    let restaurant_id: i64 = raw_id.parse().map_err(|_| not_found())?;

    let conn = db.get()?;
    let restaurant = db::get_restaurant_summary(conn, restaurant_id)
        .await?
        .ok_or_else(not_found)?;

    let mut dishes = list_dishes_for_restaurant(conn, restaurant_id).await?;
    for dish in &mut dishes {
        dish.allergens = list_allergen_names_for_dish(conn, dish.dish_id).await?;
    }

    let reviews = list_reviews_for_restaurant(conn, restaurant_id).await?;

    state.render(
        Template::RestaurantInfo,
        &json!({
            "restaurant": restaurant,
            "dishes": dishes,
            "reviews": reviews,
        }),
    )
}

/// `GET /add_restaurant`
pub async fn add_restaurant_form(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
) -> Result<Page, BackendError> {
    state.render(Template::AddRestaurant, &json!({ "message": null }))
}

/// `POST /add_restaurant`
pub async fn add_restaurant(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
    FormFields(fields): FormFields,
) -> Result<Response, BackendError> {
    let restaurant = NewRestaurant {
        name: fields.first("name"),
        address: fields.first("address"),
        cuisine: fields.first("cuisine"),
    };

    let result = db::create_restaurant(db.get()?, &restaurant).await;
    match result {
        Ok(restaurant_id) => {
            tracing::info!("Restaurant {} added by user {}", restaurant_id, user_id);
            Ok(redirect_to("/restaurant"))
        }
        Err(e) => {
            tracing::warn!("Restaurant add failed: {}", e);
            let message = format!("Restaurant Add Failed: {e}");
            let page = state.render(Template::AddRestaurant, &json!({ "message": message }))?;
            Ok(page.into_response())
        }
    }
}
