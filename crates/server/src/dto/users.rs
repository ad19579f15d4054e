//! # User Data Transfer Objects
//!
//! Request and response types for user management endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a new user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// User's full name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:         String,
    /// User's email address
    #[validate(email(message = "Invalid email address"))]
    pub email:        String,
    /// Plaintext password, hashed before storage
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password:     String,
    /// Optional phone number
    pub phone:        Option<String>,
    /// Reference into the user type catalog
    pub user_type_id: i16,
}

/// Request to update an existing user
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// Updated name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:         Option<String>,
    /// Updated email address
    #[validate(email(message = "Invalid email address"))]
    pub email:        Option<String>,
    /// Updated phone number
    pub phone:        Option<String>,
    /// Updated user type
    pub user_type_id: Option<i16>,
}

/// Request to change a user's password
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// The password currently on record
    #[validate(length(min = 1, message = "Current password is required"))]
    pub current_password: String,
    /// The new password
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub new_password:     String,
    /// Confirmation of the new password
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
}

/// Query parameters for the exact-match user search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserSearchQuery {
    /// Search by id
    pub id:              Option<uuid::Uuid>,
    /// Search by exact email
    pub email:           Option<String>,
    /// Search by exact phone
    pub phone:           Option<String>,
    /// Include soft-deleted users
    pub include_deleted: Option<bool>,
}

impl UserSearchQuery {
    /// Whether at least one search criterion was supplied
    pub fn has_criteria(&self) -> bool {
        self.id.is_some() || self.email.is_some() || self.phone.is_some()
    }
}

/// Query parameters for the user list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    /// Partial name filter
    pub name:            Option<String>,
    /// Partial email filter
    pub email:           Option<String>,
    /// Filter by user type
    pub user_type_id:    Option<i16>,
    /// Include soft-deleted users
    pub include_deleted: Option<bool>,
}

/// Response for a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    /// User's unique identifier
    pub id:           uuid::Uuid,
    /// User's full name
    pub name:         String,
    /// User's email address
    pub email:        String,
    /// Phone number
    pub phone:        Option<String>,
    /// Reference into the user type catalog
    pub user_type_id: i16,
    /// Whether the user is soft-deleted
    pub deleted:      bool,
    /// Creation timestamp
    pub created_at:   String,
    /// Last update timestamp
    pub updated_at:   String,
    /// Soft-deletion timestamp
    pub deleted_at:   Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_request_valid() {
        let req = CreateUserRequest {
            name:         "Ana Souza".to_string(),
            email:        "ana@imovia.com.br".to_string(),
            password:     "long-enough-pw".to_string(),
            phone:        None,
            user_type_id: 3,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_user_request_bad_email() {
        let req = CreateUserRequest {
            name:         "Ana Souza".to_string(),
            email:        "not-an-email".to_string(),
            password:     "long-enough-pw".to_string(),
            phone:        None,
            user_type_id: 3,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_user_request_short_password() {
        let req = CreateUserRequest {
            name:         "Ana Souza".to_string(),
            email:        "ana@imovia.com.br".to_string(),
            password:     "short".to_string(),
            phone:        None,
            user_type_id: 3,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_user_request_all_none_is_valid() {
        let req = UpdateUserRequest {
            name:         None,
            email:        None,
            phone:        None,
            user_type_id: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_search_query_criteria() {
        let empty = UserSearchQuery {
            id:              None,
            email:           None,
            phone:           None,
            include_deleted: None,
        };
        assert!(!empty.has_criteria());

        let by_email = UserSearchQuery {
            id:              None,
            email:           Some("ana@imovia.com.br".to_string()),
            phone:           None,
            include_deleted: None,
        };
        assert!(by_email.has_criteria());
    }
}
