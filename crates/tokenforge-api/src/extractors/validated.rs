//! Body extractors that deserialize and then run `validator` rules.
//!
//! Axum's own rejections (wrong content type, malformed body, missing or
//! mistyped fields) are folded into validation errors so every bad request
//! gets the same 400 `VALIDATION_ERROR` body.

use axum::Form;
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use tokenforge_core::error::AppError;

use crate::error::ApiError;

/// JSON body that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        validate(&value)?;
        Ok(Self(value))
    }
}

/// URL-encoded form body that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedForm<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedForm<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        validate(&value)?;
        Ok(Self(value))
    }
}

fn validate<T: Validate>(value: &T) -> Result<(), AppError> {
    value
        .validate()
        .map_err(|errors| AppError::validation(format!("Invalid request: {errors}")))
}
