/**
 * Logout Handler
 *
 * Clears the identity cookie and redirects to `/login`. No server-side
 * state is involved.
 */

use axum::{
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};

use crate::backend::auth::sessions::cleared_identity_cookie;
use crate::backend::routes::redirect_to;

/// `GET /logout`
pub async fn logout() -> Response {
    ([(SET_COOKIE, cleared_identity_cookie())], redirect_to("/login")).into_response()
}
