//! Review HTTP Handlers
//!
//! - `GET /` - review feed
//! - `GET /add_review` - review form
//! - `POST /add_review` - submit a review as the current user

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::json;

use super::db::{self, NewReview};
use crate::backend::database::DbConn;
use crate::backend::error::BackendError;
use crate::backend::middleware::{CurrentUser, FormFields};
use crate::backend::restaurants::db::list_restaurant_choices;
use crate::backend::routes::redirect_to;
use crate::backend::server::state::AppState;
use crate::backend::templates::{Page, Template};

/// `GET /`
pub async fn index(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    let reviews = db::list_reviews(db.get()?).await?;

    state.render(Template::Index, &json!({ "data": reviews, "user_id": user_id }))
}

/// `GET /add_review`
pub async fn add_review_form(
    CurrentUser(_): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
) -> Result<Page, BackendError> {
    render_form(&state, &mut db, None).await
}

/// `POST /add_review`
pub async fn add_review(
    CurrentUser(user_id): CurrentUser,
    State(state): State<AppState>,
    mut db: DbConn,
    FormFields(fields): FormFields,
) -> Result<Response, BackendError> {
    let review = NewReview {
        restaurant_id: fields.first("restaurant"),
        user_id,
        rating: fields.first("rating"),
        text_content: fields.first("text"),
    };

    let result = db::create_review(db.get()?, &review).await;
    match result {
        Ok(review_id) => {
            tracing::info!("Review {} added by user {}", review_id, user_id);
            Ok(redirect_to("/"))
        }
        Err(e) => {
            tracing::warn!("Review submission failed: {}", e);
            let message = format!("Review Submission Failed: {e}");
            Ok(render_form(&state, &mut db, Some(message)).await?.into_response())
        }
    }
}

async fn render_form(
    state: &AppState,
    db: &mut DbConn,
    message: Option<String>,
) -> Result<Page, BackendError> {
    let restaurants = list_restaurant_choices(db.get()?).await?;

    state.render(
        Template::AddReview,
        &json!({ "data": restaurants, "message": message }),
    )
}
