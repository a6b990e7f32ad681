//! Calculation history: per-user persistence of GCD computations.
//!
//! Every operation is ownership-checked; a record owned by another user is
//! indistinguishable from an absent one.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use tracing::info;
use uuid::Uuid;

use models::gcd_result;

use crate::errors::ServiceError;
use crate::euclid::GcdStep;

pub const DEFAULT_LIMIT: u64 = 10;
pub const MAX_LIMIT: u64 = 100;

/// Persist one computation. The id is assigned by the database and increases
/// monotonically; the steps are stored as a JSON array-of-objects column.
pub async fn record(
    db: &DatabaseConnection,
    user_id: Uuid,
    a: u64,
    b: u64,
    result: u64,
    steps: &[GcdStep],
) -> Result<gcd_result::Model, ServiceError> {
    let steps_json =
        serde_json::to_value(steps).map_err(|e| ServiceError::Db(e.to_string()))?;
    let am = gcd_result::ActiveModel {
        user_id: Set(user_id),
        a: Set(a as i64),
        b: Set(b as i64),
        result: Set(result as i64),
        steps: Set(steps_json),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    };
    let saved = am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?;
    info!(id = saved.id, user_id = %user_id, a, b, result, "gcd_computation_recorded");
    Ok(saved)
}

/// List a user's computations, newest first. `limit` falls back to
/// [`DEFAULT_LIMIT`] and is capped at [`MAX_LIMIT`].
pub async fn list_for_user(
    db: &DatabaseConnection,
    user_id: Uuid,
    limit: Option<u64>,
) -> Result<Vec<gcd_result::Model>, ServiceError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    gcd_result::Entity::find()
        .filter(gcd_result::Column::UserId.eq(user_id))
        .order_by_desc(gcd_result::Column::CreatedAt)
        // id breaks ties for rows created within the same timestamp tick
        .order_by_desc(gcd_result::Column::Id)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Fetch one computation if it exists and belongs to `user_id`.
pub async fn get_for_user(
    db: &DatabaseConnection,
    id: i64,
    user_id: Uuid,
) -> Result<Option<gcd_result::Model>, ServiceError> {
    gcd_result::Entity::find_by_id(id)
        .filter(gcd_result::Column::UserId.eq(user_id))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete one computation if it exists and belongs to `user_id`.
/// Returns `false` when nothing matched.
pub async fn delete_for_user(
    db: &DatabaseConnection,
    id: i64,
    user_id: Uuid,
) -> Result<bool, ServiceError> {
    let res = gcd_result::Entity::delete_many()
        .filter(gcd_result::Column::Id.eq(id))
        .filter(gcd_result::Column::UserId.eq(user_id))
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    if res.rows_affected > 0 {
        info!(id, user_id = %user_id, "gcd_computation_deleted");
    }
    Ok(res.rows_affected > 0)
}
