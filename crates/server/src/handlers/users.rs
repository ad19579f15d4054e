//! # User Handlers
//!
//! HTTP request handlers for user CRUD, search, and password management.

use axum::Json;
use chrono::Utc;
use entity::{
    user_types::Entity as UserTypesEntity,
    users::{Column as UserColumn, Entity as UsersEntity},
};
use error::{ApiResponse, AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::users::{
        ChangePasswordRequest,
        CreateUserRequest,
        UpdateUserRequest,
        UserListQuery,
        UserResponse,
        UserSearchQuery,
    },
    password::{hash_password, verify_password},
    utils::escape_like_wildcards,
    AppState,
};

/// Create a new user
pub async fn create_user_handler(
    state: &AppState,
    req: CreateUserRequest,
) -> Result<Json<ApiResponse<UserResponse>>> {
    req.validate()?;

    let existing = UsersEntity::find()
        .filter(UserColumn::Email.eq(&req.email))
        .one(&state.db)
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("Email already in use"));
    }

    let user_type = UserTypesEntity::find_by_id(req.user_type_id)
        .one(&state.db)
        .await?;
    if user_type.is_none() {
        return Err(AppError::not_found("User type not found"));
    }

    let now = Utc::now();
    let user = entity::users::ActiveModel {
        id: Set(uuid::Uuid::new_v4()),
        name: Set(req.name),
        email: Set(req.email),
        password_hash: Set(hash_password(&req.password)?),
        phone: Set(req.phone),
        user_type_id: Set(req.user_type_id),
        deleted: Set(false),
        created_at: Set(now),
        updated_at: Set(now),
        deleted_at: Set(None),
    };

    let created = user.insert(&state.db).await?;

    info!(user_id = %created.id, user_type_id = created.user_type_id, "User created");

    Ok(Json(ApiResponse::ok(
        user_model_to_response(&created),
        "User created successfully",
    )))
}

/// Search for a user by exact id, email, or phone
pub async fn search_users_handler(
    state: &AppState,
    query: UserSearchQuery,
) -> Result<Json<ApiResponse<UserResponse>>> {
    if !query.has_criteria() {
        return Err(AppError::bad_request(
            "At least one search criterion (id, email, or phone) is required",
        ));
    }

    let mut find = UsersEntity::find();
    if let Some(id) = query.id {
        find = find.filter(UserColumn::Id.eq(id));
    }
    if let Some(ref email) = query.email {
        find = find.filter(UserColumn::Email.eq(email));
    }
    if let Some(ref phone) = query.phone {
        find = find.filter(UserColumn::Phone.eq(phone));
    }
    if !query.include_deleted.unwrap_or(false) {
        find = find.filter(UserColumn::Deleted.eq(false));
    }

    let user = find
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(
        user_model_to_response(&user),
        "User retrieved",
    )))
}

/// List users with optional filters
pub async fn list_users_handler(
    state: &AppState,
    query: UserListQuery,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>> {
    let mut find = UsersEntity::find();

    if let Some(ref name) = query.name {
        let pattern = format!("%{}%", escape_like_wildcards(name));
        find = find.filter(UserColumn::Name.like(&pattern));
    }
    if let Some(ref email) = query.email {
        let pattern = format!("%{}%", escape_like_wildcards(email));
        find = find.filter(UserColumn::Email.like(&pattern));
    }
    if let Some(user_type_id) = query.user_type_id {
        find = find.filter(UserColumn::UserTypeId.eq(user_type_id));
    }
    if !query.include_deleted.unwrap_or(false) {
        find = find.filter(UserColumn::Deleted.eq(false));
    }

    let users = find.order_by_asc(UserColumn::Name).all(&state.db).await?;

    let responses: Vec<UserResponse> = users.iter().map(user_model_to_response).collect();
    Ok(Json(ApiResponse::ok(responses, "Users retrieved")))
}

/// Update a user
pub async fn update_user_handler(
    state: &AppState,
    user_id: uuid::Uuid,
    req: UpdateUserRequest,
) -> Result<Json<ApiResponse<UserResponse>>> {
    req.validate()?;

    let user = UsersEntity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if user.deleted {
        return Err(AppError::bad_request("User is deleted"));
    }

    if let Some(ref email) = req.email {
        let existing = UsersEntity::find()
            .filter(UserColumn::Email.eq(email))
            .filter(UserColumn::Id.ne(user_id))
            .one(&state.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }
    }

    if let Some(user_type_id) = req.user_type_id {
        let user_type = UserTypesEntity::find_by_id(user_type_id)
            .one(&state.db)
            .await?;
        if user_type.is_none() {
            return Err(AppError::not_found("User type not found"));
        }
    }

    let mut active_model: entity::users::ActiveModel = user.into();
    if let Some(name) = req.name {
        active_model.name = Set(name);
    }
    if let Some(email) = req.email {
        active_model.email = Set(email);
    }
    if let Some(phone) = req.phone {
        active_model.phone = Set(Some(phone));
    }
    if let Some(user_type_id) = req.user_type_id {
        active_model.user_type_id = Set(user_type_id);
    }
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(user_id = %user_id, "User updated");

    Ok(Json(ApiResponse::ok(
        user_model_to_response(&updated),
        "User updated successfully",
    )))
}

/// Change a user's password
///
/// Verifies the current password before re-hashing the new one.
pub async fn change_password_handler(
    state: &AppState,
    user_id: uuid::Uuid,
    req: ChangePasswordRequest,
) -> Result<Json<ApiResponse<UserResponse>>> {
    req.validate()?;

    if req.new_password != req.confirm_password {
        return Err(AppError::validation("Password confirmation does not match"));
    }

    let user = UsersEntity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if user.deleted {
        return Err(AppError::bad_request("User is deleted"));
    }

    if !verify_password(&req.current_password, &user.password_hash)? {
        return Err(AppError::validation("Current password is incorrect"));
    }

    let mut active_model: entity::users::ActiveModel = user.into();
    active_model.password_hash = Set(hash_password(&req.new_password)?);
    active_model.updated_at = Set(Utc::now());

    let updated = active_model.update(&state.db).await?;

    info!(user_id = %user_id, "User password changed");

    Ok(Json(ApiResponse::ok(
        user_model_to_response(&updated),
        "Password changed successfully",
    )))
}

/// Soft-delete a user
///
/// User deletion is terminal; there is no restore endpoint.
pub async fn delete_user_handler(
    state: &AppState,
    user_id: uuid::Uuid,
) -> Result<Json<ApiResponse<UserResponse>>> {
    let user = UsersEntity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    if user.deleted {
        return Err(AppError::bad_request("User is already deleted"));
    }

    let now = Utc::now();
    let mut active_model: entity::users::ActiveModel = user.into();
    active_model.deleted = Set(true);
    active_model.deleted_at = Set(Some(now));
    active_model.updated_at = Set(now);

    let deleted = active_model.update(&state.db).await?;

    info!(user_id = %user_id, "User soft-deleted");

    Ok(Json(ApiResponse::ok(
        user_model_to_response(&deleted),
        "User deleted successfully",
    )))
}

/// Convert a user entity model to a response DTO
///
/// The password hash never leaves the handler layer.
fn user_model_to_response(user: &entity::users::Model) -> UserResponse {
    UserResponse {
        id:           user.id,
        name:         user.name.clone(),
        email:        user.email.clone(),
        phone:        user.phone.clone(),
        user_type_id: user.user_type_id,
        deleted:      user.deleted,
        created_at:   user.created_at.to_rfc3339(),
        updated_at:   user.updated_at.to_rfc3339(),
        deleted_at:   user.deleted_at.map(|t| t.to_rfc3339()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> entity::users::Model {
        entity::users::Model {
            id:            uuid::Uuid::new_v4(),
            name:          "Ana Souza".to_string(),
            email:         "ana@imovia.com.br".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            phone:         Some("+55 41 99999-0000".to_string()),
            user_type_id:  3,
            deleted:       false,
            created_at:    chrono::DateTime::default(),
            updated_at:    chrono::DateTime::default(),
            deleted_at:    None,
        }
    }

    #[test]
    fn test_user_model_to_response() {
        let user = sample_user();
        let response = user_model_to_response(&user);
        assert_eq!(response.id, user.id);
        assert_eq!(response.email, "ana@imovia.com.br");
        assert!(!response.deleted);
        assert!(response.deleted_at.is_none());
    }

    #[test]
    fn test_user_response_never_serializes_password() {
        let response = user_model_to_response(&sample_user());
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("argon2"));
    }

    #[test]
    fn test_deleted_user_response_carries_deleted_at() {
        let mut user = sample_user();
        user.deleted = true;
        user.deleted_at = Some(chrono::DateTime::default());
        let response = user_model_to_response(&user);
        assert!(response.deleted);
        assert!(response.deleted_at.is_some());
    }
}
