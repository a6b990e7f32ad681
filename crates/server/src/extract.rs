use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tracing::warn;
use uuid::Uuid;

use service::auth::token;

use crate::errors::JsonApiError;
use crate::routes::auth::ServerState;

/// The authenticated owner of the current request, resolved from the
/// `Authorization: Bearer <token>` header. Every protected handler takes
/// this extractor; a missing, malformed or expired token rejects with 401.
pub struct CurrentUser(pub Uuid);

#[async_trait]
impl FromRequestParts<ServerState> for CurrentUser {
    type Rejection = JsonApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &ServerState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                warn!(path = %parts.uri.path(), "missing Authorization header");
                JsonApiError::unauthorized("missing Authorization header")
            })?;

        let token = header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!(path = %parts.uri.path(), "invalid Authorization format (expect Bearer)");
            JsonApiError::unauthorized("expected Bearer token")
        })?;

        let user_id = token::resolve(&state.auth.jwt_secret, token).map_err(|e| {
            warn!(path = %parts.uri.path(), err = %e, "token validation failed");
            JsonApiError::unauthorized("invalid or expired token")
        })?;

        Ok(CurrentUser(user_id))
    }
}
