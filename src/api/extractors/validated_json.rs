//! JSON body extractor that runs `validator` rules after deserialization.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Deserialized and validated request body.
///
/// Malformed JSON and failed rules both surface as `AppError::Validation`,
/// so the caller sees the same 400 envelope either way.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection, "Rejected request body");
            AppError::validation(rejection.body_text())
        })?;

        payload.validate().map_err(|e| AppError::validation(describe(&e)))?;

        Ok(Self(payload))
    }
}

/// One `field: message` entry per failed rule, sorted by field name.
fn describe(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, failures)| {
            failures.iter().map(move |failure| match &failure.message {
                Some(message) => format!("{field}: {message}"),
                None => format!("{field}: failed {} check", failure.code),
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
