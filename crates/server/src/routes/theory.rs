use axum::Json;

use service::theory::{self, ApplicationsInfo, ComplexityInfo, TheoryResponse};

#[utoipa::path(get, path = "/theory/euclid", tag = "theory", responses((status = 200, description = "Cached algorithm explanation")))]
pub async fn euclid() -> Json<&'static TheoryResponse> {
    Json(theory::euclid())
}

#[utoipa::path(get, path = "/theory/complexity", tag = "theory", responses((status = 200, description = "Complexity description")))]
pub async fn complexity() -> Json<&'static ComplexityInfo> {
    Json(theory::complexity())
}

#[utoipa::path(get, path = "/theory/applications", tag = "theory", responses((status = 200, description = "Use cases")))]
pub async fn applications() -> Json<&'static ApplicationsInfo> {
    Json(theory::applications())
}
