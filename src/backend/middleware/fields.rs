/**
 * Form and Query Field Extractors
 *
 * Query strings and form bodies are read as ordered `(name, value)` pairs.
 * A repeated name keeps every value; single-valued lookups take the first
 * one. A body or query string that cannot be decoded is rejected with
 * `BackendError::BadRequest`, so the client gets the regular error page.
 */

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Form,
};

use crate::backend::error::BackendError;

/// Submitted fields in the order they were sent
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Vec<(String, String)>);

impl Fields {
    /// First value submitted under `name`
    pub fn first(&self, name: &str) -> Option<String> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
    }

    /// Every value submitted under `name`
    pub fn all(&self, name: &str) -> Vec<String> {
        self.0
            .iter()
            .filter(|(key, _)| key == name)
            .map(|(_, value)| value.clone())
            .collect()
    }
}

impl From<Vec<(String, String)>> for Fields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

/// Query string fields
#[derive(Debug, Clone, Default)]
pub struct QueryFields(pub Fields);

impl<S> FromRequestParts<S> for QueryFields
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| BackendError::bad_request(rejection.body_text()))?;
        Ok(QueryFields(pairs.into()))
    }
}

/// `application/x-www-form-urlencoded` body fields
#[derive(Debug, Clone, Default)]
pub struct FormFields(pub Fields);

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected form body: {}", rejection.body_text());
                BackendError::bad_request(rejection.body_text())
            })?;
        Ok(FormFields(pairs.into()))
    }
}
