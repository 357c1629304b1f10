/**
 * Authentication Extractor
 *
 * `CurrentUser` guards every route that requires a logged-in user. It reads
 * the identity cookie and, when it is absent, rejects the request with a
 * redirect to `/login`.
 *
 * Handlers list `CurrentUser` as their first extractor, so an
 * unauthenticated request is redirected before a connection is acquired or
 * any query runs.
 */

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::Response,
};

use crate::backend::auth::sessions::read_user_id;
use crate::backend::routes::redirect_to;

/// Id of the logged-in user, taken from the `user_id` cookie
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentUser(pub i64);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        read_user_id(&parts.headers).map(CurrentUser).ok_or_else(|| {
            tracing::debug!("No identity cookie on {}, redirecting to login", parts.uri.path());
            redirect_to("/login")
        })
    }
}
