/**
 * Login Handlers
 *
 * `GET /login` renders the form. `POST /login` checks the submitted
 * username and password by exact equality against the stored row; on a
 * match it sets the `user_id` cookie and redirects to `/`, otherwise it
 * re-renders the form with "Invalid login" and sets no cookie. A missing
 * field never matches a stored row.
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::backend::auth::sessions::identity_cookie;
use crate::backend::auth::users::find_user_id_by_credentials;
use crate::backend::database::DbConn;
use crate::backend::error::BackendError;
use crate::backend::middleware::FormFields;
use crate::backend::routes::redirect_to;
use crate::backend::server::state::AppState;
use crate::backend::templates::{Page, Template};

/// Message shown when no user matches the credentials
pub const INVALID_LOGIN: &str = "Invalid login";

/// `GET /login`
pub async fn login_form(State(state): State<AppState>) -> Result<Page, BackendError> {
    state.render(Template::Login, &json!({ "message": null }))
}

/// `POST /login`
pub async fn login(
    State(state): State<AppState>,
    mut db: DbConn,
    FormFields(fields): FormFields,
) -> Result<Response, BackendError> {
    let username = fields.first("username");
    let password = fields.first("password");
    tracing::info!("Login request for: {:?}", username);

    let user_id =
        find_user_id_by_credentials(db.get()?, username.as_deref(), password.as_deref()).await?;

    match user_id {
        Some(user_id) => {
            tracing::info!("User logged in: {:?} ({})", username, user_id);
            Ok(([(SET_COOKIE, identity_cookie(user_id))], redirect_to("/")).into_response())
        }
        None => {
            tracing::warn!("Invalid login for user: {:?}", username);
            let page = state.render(Template::Login, &json!({ "message": INVALID_LOGIN }))?;
            Ok(page.into_response())
        }
    }
}
