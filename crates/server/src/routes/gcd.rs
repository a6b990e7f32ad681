use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use service::euclid::{self, GcdStep};
use service::history;

use crate::errors::JsonApiError;
use crate::extract::CurrentUser;
use crate::routes::auth::ServerState;

#[derive(Debug, Deserialize)]
pub struct GcdRequest {
    pub a: i64,
    pub b: i64,
}

#[derive(Debug, Serialize)]
pub struct GcdOutput {
    pub steps: Vec<GcdStep>,
    pub result: u64,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct HistoryQuery {
    pub limit: Option<u64>,
}

/// History item as returned to the owner; the owner id itself is not echoed.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: i64,
    pub a: i64,
    pub b: i64,
    pub result: i64,
    pub steps: serde_json::Value,
    pub created_at: DateTime<FixedOffset>,
}

impl From<models::gcd_result::Model> for HistoryItem {
    fn from(m: models::gcd_result::Model) -> Self {
        Self {
            id: m.id,
            a: m.a,
            b: m.b,
            result: m.result,
            steps: m.steps,
            created_at: m.created_at,
        }
    }
}

#[utoipa::path(post, path = "/gcd/calculate", tag = "gcd", request_body = crate::openapi::GcdRequestDoc, responses((status = 200, description = "Computed and persisted"), (status = 400, description = "Non-positive operands"), (status = 401, description = "Unauthorized")))]
pub async fn calculate(
    State(state): State<ServerState>,
    CurrentUser(user_id): CurrentUser,
    Json(input): Json<GcdRequest>,
) -> Result<Json<GcdOutput>, JsonApiError> {
    if input.a <= 0 || input.b <= 0 {
        return Err(JsonApiError::new(
            StatusCode::BAD_REQUEST,
            "Validation Error",
            Some("a and b must be strictly positive integers".into()),
        ));
    }
    let (a, b) = (input.a as u64, input.b as u64);
    let (result, steps) = euclid::compute(a, b);

    history::record(&state.db, user_id, a, b, result, &steps)
        .await
        .map_err(|e| {
            error!(err = %e, "failed to persist gcd computation");
            JsonApiError::internal()
        })?;

    info!(user_id = %user_id, a, b, result, steps = steps.len(), "gcd_calculated");
    Ok(Json(GcdOutput { steps, result }))
}

#[utoipa::path(get, path = "/gcd/history", tag = "gcd", params(HistoryQuery), responses((status = 200, description = "History list, newest first"), (status = 401, description = "Unauthorized")))]
pub async fn list_history(
    State(state): State<ServerState>,
    CurrentUser(user_id): CurrentUser,
    Query(q): Query<HistoryQuery>,
) -> Result<Json<Vec<HistoryItem>>, JsonApiError> {
    let items = history::list_for_user(&state.db, user_id, q.limit)
        .await
        .map_err(|e| {
            error!(err = %e, "failed to list history");
            JsonApiError::internal()
        })?;
    Ok(Json(items.into_iter().map(HistoryItem::from).collect()))
}

#[utoipa::path(get, path = "/gcd/history/{id}", tag = "gcd", params(("id" = i64, Path, description = "History item id")), responses((status = 200, description = "OK"), (status = 401, description = "Unauthorized"), (status = 404, description = "Absent or not owned")))]
pub async fn get_history_item(
    State(state): State<ServerState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i64>,
) -> Result<Json<HistoryItem>, JsonApiError> {
    let item = history::get_for_user(&state.db, id, user_id)
        .await
        .map_err(|e| {
            error!(err = %e, "failed to fetch history item");
            JsonApiError::internal()
        })?
        .ok_or_else(|| JsonApiError::not_found("history item not found"))?;
    Ok(Json(item.into()))
}

#[utoipa::path(delete, path = "/gcd/history/{id}", tag = "gcd", params(("id" = i64, Path, description = "History item id")), responses((status = 204, description = "Deleted"), (status = 401, description = "Unauthorized"), (status = 404, description = "Absent or not owned")))]
pub async fn delete_history_item(
    State(state): State<ServerState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<i64>,
) -> Result<StatusCode, JsonApiError> {
    let deleted = history::delete_for_user(&state.db, id, user_id)
        .await
        .map_err(|e| {
            error!(err = %e, "failed to delete history item");
            JsonApiError::internal()
        })?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found("history item not found"))
    }
}
