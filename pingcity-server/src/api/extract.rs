//! Request extractors with uniform rejection handling
//!
//! Axum's stock `Query`/`Json` rejections reply in plain text; these
//! wrappers convert them into `AppError::Validation` so malformed
//! input gets the standard `{success: false, error}` envelope.

use axum::Json;
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use http::request::Parts;
use serde::de::DeserializeOwned;

use crate::utils::AppError;

/// `Query<T>` wrapper that turns deserialization failures into a 400
pub struct ValidQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid query parameters: {e}")))?;
        Ok(ValidQuery(value))
    }
}

/// `Json<T>` wrapper that turns body deserialization failures into a 400
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;
        Ok(ValidJson(value))
    }
}
