//! # Member Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::teams::TeamSummary;

/// Request to create a new team member
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateMemberRequest {
    /// Member's full name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:      String,
    /// Member's email address
    #[validate(email(message = "Invalid email address"))]
    pub email:     String,
    /// Optional phone number
    pub phone:     Option<String>,
    /// Whether the member leads the team (default false)
    pub is_leader: Option<bool>,
    /// Whether the member is active (default true)
    pub active:    Option<bool>,
    /// Team the member belongs to
    pub team_id:   uuid::Uuid,
}

/// Request to update a team member
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateMemberRequest {
    /// Updated name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:      Option<String>,
    /// Updated email address
    #[validate(email(message = "Invalid email address"))]
    pub email:     Option<String>,
    /// Updated phone number
    pub phone:     Option<String>,
    /// Updated leadership flag
    pub is_leader: Option<bool>,
    /// Move the member to a different team
    pub team_id:   Option<uuid::Uuid>,
}

/// Request to toggle a member's active status
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateMemberStatusRequest {
    /// New active status
    pub active: bool,
}

/// Query parameters for the member list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct MemberListQuery {
    /// Partial name filter
    pub name:      Option<String>,
    /// Partial email filter
    pub email:     Option<String>,
    /// Filter by leadership flag
    pub is_leader: Option<bool>,
    /// Filter by team
    pub team_id:   Option<uuid::Uuid>,
    /// Filter by active status
    pub active:    Option<bool>,
}

/// Query parameters for fetching a single member
#[derive(Debug, Clone, Deserialize)]
pub struct MemberGetQuery {
    /// Embed the member's team
    pub include_team: Option<bool>,
}

/// Response for a single member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberResponse {
    /// Member's unique identifier
    pub id:         uuid::Uuid,
    /// Member's full name
    pub name:       String,
    /// Member's email address
    pub email:      String,
    /// Phone number
    pub phone:      Option<String>,
    /// Whether the member leads the team
    pub is_leader:  bool,
    /// Whether the member is active
    pub active:     bool,
    /// Team the member belongs to
    pub team_id:    uuid::Uuid,
    /// When the member joined the team
    pub joined_at:  String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// The member's team, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team:       Option<TeamSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_member_request_valid() {
        let req = CreateMemberRequest {
            name:      "Carlos Lima".to_string(),
            email:     "carlos@imovia.com.br".to_string(),
            phone:     Some("+55 41 99999-0000".to_string()),
            is_leader: Some(true),
            active:    None,
            team_id:   uuid::Uuid::new_v4(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_member_request_bad_email() {
        let req = CreateMemberRequest {
            name:      "Carlos Lima".to_string(),
            email:     "carlos-at-imovia".to_string(),
            phone:     None,
            is_leader: None,
            active:    None,
            team_id:   uuid::Uuid::new_v4(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_member_request_all_none_is_valid() {
        let req = UpdateMemberRequest {
            name:      None,
            email:     None,
            phone:     None,
            is_leader: None,
            team_id:   None,
        };
        assert!(req.validate().is_ok());
    }
}
