//! # User Type Data Transfer Objects

use serde::Serialize;

/// Response for a single user type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTypeResponse {
    /// Fixed catalog identifier
    pub id:         i16,
    /// Role name
    pub name:       String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}
