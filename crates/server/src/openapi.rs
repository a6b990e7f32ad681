use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(ToSchema)]
pub struct TokenResponseDoc {
    pub access_token: String,
    pub token_type: String,
}

#[derive(ToSchema)]
pub struct GcdRequestDoc {
    pub a: i64,
    pub b: i64,
}

#[derive(ToSchema)]
pub struct GcdStepDoc {
    pub a: u64,
    pub b: u64,
    pub quotient: u64,
    pub remainder: u64,
}

#[derive(ToSchema)]
pub struct HistoryItemDoc {
    pub id: i64,
    pub a: i64,
    pub b: i64,
    pub result: i64,
    pub steps: Vec<GcdStepDoc>,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::root,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::gcd::calculate,
        crate::routes::gcd::list_history,
        crate::routes::gcd::get_history_item,
        crate::routes::gcd::delete_history_item,
        crate::routes::theory::euclid,
        crate::routes::theory::complexity,
        crate::routes::theory::applications,
    ),
    components(
        schemas(
            HealthResponse,
            RegisterRequest,
            LoginRequest,
            TokenResponseDoc,
            GcdRequestDoc,
            GcdStepDoc,
            HistoryItemDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "auth"),
        (name = "gcd"),
        (name = "theory")
    )
)]
pub struct ApiDoc;
