/**
 * Router Configuration
 *
 * Combines every route into a single Axum router.
 *
 * # Routes
 *
 * | Route | Methods | Auth |
 * |---|---|---|
 * | `/` | GET | required |
 * | `/restaurant` | GET | required |
 * | `/restaurant/{id}` | GET | required |
 * | `/add_restaurant` | GET, POST | required |
 * | `/add_review` | GET, POST | required |
 * | `/add_dish` | GET, POST | required |
 * | `/dishes` | GET | required |
 * | `/login` | GET, POST | none |
 * | `/register` | GET, POST | none |
 * | `/logout` | GET | none |
 * | `/static/{*path}` | GET | none |
 *
 * Unknown paths fall back to a 404 page.
 */

use axum::{routing::get, Router};
use tower_http::services::ServeDir;

use crate::backend::auth::{login, login_form, logout, register, register_form};
use crate::backend::dishes::handlers::{add_dish, add_dish_form, dishes};
use crate::backend::error::BackendError;
use crate::backend::restaurants::handlers::{
    add_restaurant, add_restaurant_form, restaurant_info, restaurants,
};
use crate::backend::reviews::handlers::{add_review, add_review_form, index};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route("/", get(index))
        .route("/restaurant", get(restaurants))
        .route("/restaurant/{restaurant_id}", get(restaurant_info))
        .route(
            "/add_restaurant",
            get(add_restaurant_form).post(add_restaurant),
        )
        .route("/add_review", get(add_review_form).post(add_review))
        .route("/add_dish", get(add_dish_form).post(add_dish))
        .route("/dishes", get(dishes))
        .route("/login", get(login_form).post(login))
        .route("/register", get(register_form).post(register))
        .route("/logout", get(logout));

    // Static assets from ./static
    let router = router.nest_service("/static", ServeDir::new("static"));

    // Fallback handler for 404
    let router = router.fallback(|| async { BackendError::not_found("Page not found") });

    router.with_state(app_state)
}
