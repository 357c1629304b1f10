/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse`, so handlers can return
 * `Result<_, BackendError>` and let Axum turn failures into pages.
 *
 * # Response Format
 *
 * A minimal HTML page carrying the status code and the error message, with
 * the message escaped.
 */

use axum::{
    http::header::CONTENT_TYPE,
    response::{IntoResponse, Response},
};

use crate::backend::error::types::BackendError;
use crate::backend::templates::escape_html;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("Request failed with {}: {}", status, message);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, message);
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!doctype html>\n<html><head><title>{code} {reason}</title></head>\
             <body><h1>{code} {reason}</h1><p>{message}</p></body></html>\n",
            code = status.as_u16(),
            reason = reason,
            message = escape_html(&message),
        );

        (status, [(CONTENT_TYPE, "text/html; charset=utf-8")], body).into_response()
    }
}
