/**
 * Identity Cookie
 *
 * The session is a single cookie, `user_id`, holding the raw numeric id of
 * the logged-in user. There is no server-side session store, no expiry and
 * no signature: whatever id the browser sends is used as-is.
 */

use axum::http::{header::COOKIE, HeaderMap};

/// Name of the identity cookie
pub const IDENTITY_COOKIE: &str = "user_id";

/// Read the user id from the request's `Cookie` headers
///
/// Returns `None` when the cookie is missing, empty or not a number.
pub fn read_user_id(headers: &HeaderMap) -> Option<i64> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .flat_map(|h| h.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| name.trim() == IDENTITY_COOKIE)
        .and_then(|(_, value)| value.trim().trim_matches('"').parse::<i64>().ok())
}

/// `Set-Cookie` value issued at login
pub fn identity_cookie(user_id: i64) -> String {
    format!("{IDENTITY_COOKIE}={user_id}; Path=/")
}

/// `Set-Cookie` value that clears the identity cookie at logout
pub fn cleared_identity_cookie() -> String {
    format!("{IDENTITY_COOKIE}=; Path=/; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT")
}
