use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// A `Path<T>` wrapper for entity routes. A segment that does not parse as the
/// expected id names no page, so it is a 404 rather than a 400.
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("Unmatched path parameter: {}", e.body_text());
                AppError::NotFound("Page not found".into())
            })?;
        Ok(AppPath(value))
    }
}
