use std::collections::HashMap;

use axum::{
    Form,
    extract::{FromRequest, Request, rejection::FormRejection},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;
use crate::utils::genres::join_genres;

/// Keys a multi-select may submit more than once.
const MULTI_VALUE_KEYS: &[&str] = &["genres"];

/// A `Form<T>` wrapper that converts decoding errors into `AppError::Validation`.
///
/// Handlers that report failures as flash messages take
/// `Result<FormFields, AppError>` instead, so the rejection reaches them.
pub struct AppForm<T>(pub T);

impl<S, T> FromRequest<S> for AppForm<T>
where
    Form<T>: FromRequest<S, Rejection = FormRejection>,
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(e.body_text()))?;
        Ok(AppForm(value))
    }
}

/// A create or edit submission as loose key/value pairs.
///
/// Repeated `genres` values are joined into one delimited tag list. Any other
/// repeated key keeps its last value.
#[derive(Debug, Default)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut fields = HashMap::new();
        let mut multi: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            if MULTI_VALUE_KEYS.contains(&key.as_str()) {
                multi.entry(key).or_default().push(value);
            } else {
                fields.insert(key, value);
            }
        }
        for (key, values) in multi {
            fields.insert(key, join_genres(values.as_slice()));
        }
        Self(fields)
    }

    pub fn take(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn into_inner(self) -> HashMap<String, String> {
        self.0
    }
}

impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let AppForm(pairs) = AppForm::<Vec<(String, String)>>::from_request(req, state).await?;
        Ok(Self::from_pairs(pairs))
    }
}
