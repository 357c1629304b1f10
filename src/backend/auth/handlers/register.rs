/**
 * Registration Handlers
 *
 * `POST /register` inserts a user with today's date as join date and
 * redirects to `/login`. Any store failure (a duplicate username, a missing
 * field) re-renders the form with the failure text.
 */

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use chrono::Local;
use serde_json::json;

use crate::backend::auth::users::{create_user, NewUser};
use crate::backend::database::DbConn;
use crate::backend::error::BackendError;
use crate::backend::middleware::FormFields;
use crate::backend::routes::redirect_to;
use crate::backend::server::state::AppState;
use crate::backend::templates::{Page, Template};

/// `GET /register`
pub async fn register_form(State(state): State<AppState>) -> Result<Page, BackendError> {
    state.render(Template::Register, &json!({ "message": null }))
}

/// `POST /register`
pub async fn register(
    State(state): State<AppState>,
    mut db: DbConn,
    FormFields(fields): FormFields,
) -> Result<Response, BackendError> {
    let user = NewUser {
        username: fields.first("username"),
        email: fields.first("email"),
        password: fields.first("password"),
        join_date: Local::now().date_naive(),
    };

    let result = create_user(db.get()?, &user).await;
    match result {
        Ok(user_id) => {
            tracing::info!("User registered: {:?} ({})", user.username, user_id);
            Ok(redirect_to("/login"))
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            let message = format!("Registration Failed: {e}");
            let page = state.render(Template::Register, &json!({ "message": message }))?;
            Ok(page.into_response())
        }
    }
}
