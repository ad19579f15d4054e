//! # Team Data Transfer Objects
//!
//! Request and response types for team management endpoints.

use entity::teams::TeamType;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::members::MemberResponse;

/// Request to create a new team
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateTeamRequest {
    /// Team name, unique across teams
    #[validate(length(
        min = 1,
        max = 255,
        message = "Team name must be between 1 and 255 characters"
    ))]
    pub name:      String,
    /// Team function
    pub team_type: TeamType,
}

/// Request to update an existing team
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    /// Updated team name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Team name must be between 1 and 255 characters"
    ))]
    pub name:      Option<String>,
    /// Updated team function
    pub team_type: Option<TeamType>,
}

/// Request to assign the team leader
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SetLeaderRequest {
    /// Member to promote
    pub member_id: uuid::Uuid,
}

/// Query parameters for the team list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TeamListQuery {
    /// Partial name filter
    pub name:      Option<String>,
    /// Filter by team function
    pub team_type: Option<TeamType>,
}

/// Query parameters for fetching a single team
#[derive(Debug, Clone, Deserialize)]
pub struct TeamGetQuery {
    /// Embed team members
    pub include_members: Option<bool>,
}

/// Query parameters for the team members sub-resource
#[derive(Debug, Clone, Deserialize)]
pub struct TeamMembersQuery {
    /// Restrict to active members
    pub only_active: Option<bool>,
}

/// Response for a single team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamResponse {
    /// Team's unique identifier
    pub id:         uuid::Uuid,
    /// Team name
    pub name:       String,
    /// Team function
    pub team_type:  TeamType,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
    /// Team members, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members:    Option<Vec<MemberResponse>>,
}

/// Abbreviated team payload embedded in member responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSummary {
    /// Team's unique identifier
    pub id:        uuid::Uuid,
    /// Team name
    pub name:      String,
    /// Team function
    pub team_type: TeamType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_team_request_valid() {
        let req = CreateTeamRequest {
            name:      "Equipe Centro".to_string(),
            team_type: TeamType::Brokers,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_team_request_empty_name() {
        let req = CreateTeamRequest {
            name:      String::new(),
            team_type: TeamType::Legal,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_team_type_deserializes_from_variant_name() {
        let req: CreateTeamRequest =
            serde_json::from_str(r#"{"name":"Suporte","team_type":"Support"}"#).unwrap();
        assert_eq!(req.team_type, TeamType::Support);
    }

    #[test]
    fn test_team_response_omits_absent_members() {
        let response = TeamResponse {
            id:         uuid::Uuid::new_v4(),
            name:       "Equipe Centro".to_string(),
            team_type:  TeamType::Brokers,
            created_at: "2025-06-01T00:00:00Z".to_string(),
            updated_at: "2025-06-01T00:00:00Z".to_string(),
            members:    None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("members").is_none());
    }
}
