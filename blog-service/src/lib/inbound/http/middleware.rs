use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::security::models::Principal;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Binds the request's principal, if any, to its extensions.
///
/// Always hands the request on; handlers decide whether identity is required.
pub async fn authenticate(State(state): State<AppState>, mut req: Request, next: Next) -> Response {
    let authorization = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let principal = state
        .request_authenticator
        .authenticate(req.method().as_str(), req.uri().path(), authorization)
        .await;

    if let Some(principal) = principal {
        req.extensions_mut().insert(principal);
    }

    next.run(req).await
}

/// Extractor for handlers that require identity; rejects with 401 otherwise.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Principal);

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(AuthenticatedUser)
            .ok_or_else(ApiError::unauthenticated)
    }
}

/// Extractor for handlers that shape their response for an optional viewer.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticatedUser(pub Option<Principal>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeAuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthenticatedUser(
            parts.extensions.get::<Principal>().cloned(),
        ))
    }
}
