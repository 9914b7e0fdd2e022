//! JSON extractor with contract-shaped rejections.
//!
//! Axum's stock `Json` extractor answers malformed bodies with its own
//! plain-text responses (and 422 for missing fields). The API contract
//! wants 400 with `{"error": <message>}` instead, the message naming the
//! offending field, so this wrapper remaps the rejection.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::ErrorBody;
use serde::de::DeserializeOwned;

/// JSON extractor whose rejection follows the `{"error": ...}` contract.
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

impl<T> std::ops::Deref for ApiJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(ApiJsonRejection(rejection)),
        }
    }
}

/// Rejection carrying the deserializer's message.
#[derive(Debug)]
pub struct ApiJsonRejection(pub JsonRejection);

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.0.body_text(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
