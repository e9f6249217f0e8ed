use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
    Json,
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON body that is both well-typed and passes `Validate`.
///
/// A request without a `Content-Type` header is still parsed as JSON; a
/// non-JSON content type is rejected. Any failure, whether a parse error, a
/// missing field, a wrong type, a foreign content type or a rule violation,
/// is rejected as 422.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Rejected request body");
                AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text()))
            })?;
            value
        } else {
            let bytes = Bytes::from_request(req, state).await.map_err(|e| {
                tracing::debug!(error = %e.body_text(), "Failed to buffer request body");
                AppError::UnprocessableEntity(anyhow::anyhow!(e.body_text()))
            })?;
            serde_json::from_slice::<T>(&bytes).map_err(|e| {
                tracing::debug!(error = %e, "Rejected untyped request body");
                AppError::UnprocessableEntity(anyhow::anyhow!(
                    "Failed to deserialize the JSON body into the target type: {}",
                    e
                ))
            })?
        };

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
