use axum::{extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;

/// Whether the request was issued by htmx rather than a full page load.
#[derive(Clone, Copy, Debug)]
pub struct HxRequest(pub bool);

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for HxRequest
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.headers.contains_key("hx-request")))
    }
}
