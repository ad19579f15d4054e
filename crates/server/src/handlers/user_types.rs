//! # User Type Handlers
//!
//! Read-only endpoints over the fixed user type catalog.

use axum::Json;
use entity::user_types::{Column as UserTypeColumn, Entity as UserTypesEntity};
use error::{ApiResponse, AppError, Result};
use sea_orm::{EntityTrait, QueryOrder};
use tracing::debug;

use crate::{dto::user_types::UserTypeResponse, AppState};

/// List all user types
pub async fn list_user_types_handler(
    state: &AppState,
) -> Result<Json<ApiResponse<Vec<UserTypeResponse>>>> {
    let user_types = UserTypesEntity::find()
        .order_by_asc(UserTypeColumn::Id)
        .all(&state.db)
        .await?;

    debug!(count = user_types.len(), "User types listed");

    let responses: Vec<UserTypeResponse> = user_types.iter().map(user_type_model_to_response).collect();
    Ok(Json(ApiResponse::ok(responses, "User types retrieved")))
}

/// Get a single user type by ID
pub async fn get_user_type_handler(
    state: &AppState,
    type_id: i16,
) -> Result<Json<ApiResponse<UserTypeResponse>>> {
    let user_type = UserTypesEntity::find_by_id(type_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User type not found"))?;

    Ok(Json(ApiResponse::ok(
        user_type_model_to_response(&user_type),
        "User type retrieved",
    )))
}

/// Convert a user type entity model to a response DTO
fn user_type_model_to_response(user_type: &entity::user_types::Model) -> UserTypeResponse {
    UserTypeResponse {
        id:         user_type.id,
        name:       user_type.name.clone(),
        created_at: user_type.created_at.to_rfc3339(),
        updated_at: user_type.updated_at.to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_model_to_response() {
        let model = entity::user_types::Model {
            id:         3,
            name:       "Broker".to_string(),
            created_at: chrono::DateTime::default(),
            updated_at: chrono::DateTime::default(),
        };

        let response = user_type_model_to_response(&model);
        assert_eq!(response.id, 3);
        assert_eq!(response.name, "Broker");
    }
}
