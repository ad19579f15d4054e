//! # Region Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::neighborhoods::NeighborhoodResponse;

/// Request to create a region
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateRegionRequest {
    /// Region name, unique across regions
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name:             String,
    /// Neighborhoods to link at creation time
    pub neighborhood_ids: Option<Vec<uuid::Uuid>>,
}

/// Request to update a region
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateRegionRequest {
    /// Updated name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
}

/// Request body carrying a set of neighborhood ids for association endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NeighborhoodIdsRequest {
    /// Neighborhood ids to link
    pub neighborhood_ids: Vec<uuid::Uuid>,
}

/// Query parameters for the region list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RegionListQuery {
    /// Partial name filter
    pub name:                  Option<String>,
    /// Embed linked neighborhoods in each item
    pub include_neighborhoods: Option<bool>,
}

/// Query parameters for fetching a single region
#[derive(Debug, Clone, Deserialize)]
pub struct RegionGetQuery {
    /// Embed linked neighborhoods
    pub include_neighborhoods: Option<bool>,
}

/// Response for a single region
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionResponse {
    /// Region's unique identifier
    pub id:            uuid::Uuid,
    /// Region name
    pub name:          String,
    /// Creation timestamp
    pub created_at:    String,
    /// Last update timestamp
    pub updated_at:    String,
    /// Linked neighborhoods, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhoods: Option<Vec<NeighborhoodResponse>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_region_request_valid() {
        let req = CreateRegionRequest {
            name:             "Zona Sul".to_string(),
            neighborhood_ids: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_region_request_empty_name() {
        let req = CreateRegionRequest {
            name:             String::new(),
            neighborhood_ids: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_region_response_omits_absent_neighborhoods() {
        let response = RegionResponse {
            id:            uuid::Uuid::new_v4(),
            name:          "Zona Sul".to_string(),
            created_at:    "2025-06-01T00:00:00Z".to_string(),
            updated_at:    "2025-06-01T00:00:00Z".to_string(),
            neighborhoods: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("neighborhoods").is_none());
    }
}
