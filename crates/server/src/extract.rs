use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// JSON body extractor that turns every failure (unreadable body, bad
/// syntax, wrong field types) into the API's 400 payload error.
///
/// The body is parsed as JSON whatever the `Content-Type` header says.
/// A literal `null` body yields `T::default()`.
#[derive(Debug)]
pub struct JsonPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonPayload<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(ApiError::invalid_payload)?;
        serde_json::from_slice::<Option<T>>(&bytes)
            .map(|v| JsonPayload(v.unwrap_or_default()))
            .map_err(ApiError::invalid_payload)
    }
}

/// Raw `:id` path segment. Decoding failures (e.g. invalid UTF-8) become the
/// API's 400 id error; numeric parsing is left to the handler.
#[derive(Debug)]
pub struct IdToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for IdToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(token)| IdToken(token))
            .map_err(ApiError::invalid_id)
    }
}
