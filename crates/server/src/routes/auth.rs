use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use sea_orm::DatabaseConnection;
use serde::Serialize;

use service::auth::domain::{LoginInput, RegisterInput};
use service::auth::errors::AuthError;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};

use crate::errors::JsonApiError;

#[derive(Clone)]
pub struct ServerAuthConfig {
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
}

#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
    pub auth: ServerAuthConfig,
}

#[derive(Serialize)]
pub struct TokenOutput {
    pub access_token: String,
    pub token_type: &'static str,
}

impl TokenOutput {
    fn bearer(access_token: String) -> Self {
        Self { access_token, token_type: "bearer" }
    }
}

fn auth_service(state: &ServerState) -> AuthService<SeaOrmAuthRepository> {
    let repo = Arc::new(SeaOrmAuthRepository { db: state.db.clone() });
    AuthService::new(
        repo,
        AuthConfig {
            jwt_secret: state.auth.jwt_secret.clone(),
            password_algorithm: "argon2".into(),
            token_ttl_minutes: state.auth.token_ttl_minutes,
        },
    )
}

fn map_auth_error(e: AuthError) -> JsonApiError {
    match e {
        AuthError::Validation(msg) => {
            JsonApiError::new(StatusCode::BAD_REQUEST, "Validation Error", Some(msg))
        }
        AuthError::Conflict => JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some("a user with this email already exists".into()),
        ),
        AuthError::Unauthorized | AuthError::NotFound => {
            JsonApiError::unauthorized("invalid email or password")
        }
        other => {
            tracing::error!(err = %other, code = other.code(), "auth failure");
            JsonApiError::internal()
        }
    }
}

#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 201, description = "Registered, token issued"), (status = 400, description = "Validation error or email taken")))]
pub async fn register(
    State(state): State<ServerState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<TokenOutput>), JsonApiError> {
    let session = auth_service(&state).register(input).await.map_err(map_auth_error)?;
    Ok((StatusCode::CREATED, Json(TokenOutput::bearer(session.token))))
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "Logged in, token issued"), (status = 401, description = "Unauthorized")))]
pub async fn login(
    State(state): State<ServerState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<TokenOutput>, JsonApiError> {
    let session = auth_service(&state).login(input).await.map_err(map_auth_error)?;
    Ok(Json(TokenOutput::bearer(session.token)))
}
