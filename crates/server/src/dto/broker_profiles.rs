//! # Broker Profile Data Transfer Objects

use entity::broker_profiles::{BrokerType, CreciType};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    neighborhoods::NeighborhoodResponse,
    regions::RegionResponse,
    PaginationInfo,
};

/// Request to create a broker profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateBrokerProfileRequest {
    /// Broker specialization
    pub broker_type:      BrokerType,
    /// CRECI registration number
    #[validate(length(
        min = 1,
        max = 50,
        message = "CRECI must be between 1 and 50 characters"
    ))]
    pub creci:            String,
    /// CRECI license category
    pub creci_type:       CreciType,
    /// Internal ranking (default 0)
    #[validate(range(min = 0, max = 100, message = "Classification must be between 0 and 100"))]
    pub classification:   Option<i32>,
    /// Regions to link at creation time
    pub region_ids:       Option<Vec<uuid::Uuid>>,
    /// Neighborhoods to link at creation time
    pub neighborhood_ids: Option<Vec<uuid::Uuid>>,
}

/// Request to update a broker profile
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateBrokerProfileRequest {
    /// Updated specialization
    pub broker_type:    Option<BrokerType>,
    /// Updated CRECI registration number
    #[validate(length(
        min = 1,
        max = 50,
        message = "CRECI must be between 1 and 50 characters"
    ))]
    pub creci:          Option<String>,
    /// Updated license category
    pub creci_type:     Option<CreciType>,
    /// Updated ranking
    #[validate(range(min = 0, max = 100, message = "Classification must be between 0 and 100"))]
    pub classification: Option<i32>,
}

/// Request body carrying a set of region ids for association endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionIdsRequest {
    /// Region ids to link
    pub region_ids: Vec<uuid::Uuid>,
}

/// Query parameters for the broker profile list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerProfileListQuery {
    /// Filter by specialization
    pub broker_type:     Option<BrokerType>,
    /// Filter by license category
    pub creci_type:      Option<CreciType>,
    /// Filter by exact ranking
    pub classification:  Option<i32>,
    /// Restrict to brokers covering this region
    pub region_id:       Option<uuid::Uuid>,
    /// Restrict to brokers covering this neighborhood
    pub neighborhood_id: Option<uuid::Uuid>,
    /// Include soft-deleted profiles
    pub include_deleted: Option<bool>,
    /// Page number (1-based, default: 1)
    pub page:            Option<u64>,
    /// Items per page (default: 20, max: 100)
    pub limit:           Option<u64>,
}

impl BrokerProfileListQuery {
    /// Get page number (1-based, default: 1)
    pub fn page(&self) -> u64 { self.page.unwrap_or(1).max(1) }

    /// Get items per page (default: 20, max: 100)
    pub fn limit(&self) -> u64 { self.limit.unwrap_or(20).clamp(1, 100) }
}

/// Query parameters for fetching a single broker profile
#[derive(Debug, Clone, Deserialize)]
pub struct BrokerProfileGetQuery {
    /// Embed linked regions
    pub include_regions:       Option<bool>,
    /// Embed linked neighborhoods
    pub include_neighborhoods: Option<bool>,
}

/// Response for a single broker profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokerProfileResponse {
    /// Profile's unique identifier
    pub id:             uuid::Uuid,
    /// Broker specialization
    pub broker_type:    BrokerType,
    /// CRECI registration number
    pub creci:          String,
    /// CRECI license category
    pub creci_type:     CreciType,
    /// Internal ranking
    pub classification: i32,
    /// Whether the profile is soft-deleted
    pub deleted:        bool,
    /// Creation timestamp
    pub created_at:     String,
    /// Last update timestamp
    pub updated_at:     String,
    /// Soft-deletion timestamp
    pub deleted_at:     Option<String>,
    /// Linked regions, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regions:        Option<Vec<RegionResponse>>,
    /// Linked neighborhoods, present when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhoods:  Option<Vec<NeighborhoodResponse>>,
}

/// Response for the paginated broker profile list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrokerProfileListResponse {
    /// Matching profiles for the requested page
    pub items:      Vec<BrokerProfileResponse>,
    /// Pagination info
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_broker_profile_request_valid() {
        let req = CreateBrokerProfileRequest {
            broker_type:      BrokerType::Hybrid,
            creci:            "PR-12345".to_string(),
            creci_type:       CreciType::Permanent,
            classification:   Some(3),
            region_ids:       None,
            neighborhood_ids: None,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_broker_profile_request_empty_creci() {
        let req = CreateBrokerProfileRequest {
            broker_type:      BrokerType::Rental,
            creci:            String::new(),
            creci_type:       CreciType::Intern,
            classification:   None,
            region_ids:       None,
            neighborhood_ids: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_broker_profile_request_classification_out_of_range() {
        let req = CreateBrokerProfileRequest {
            broker_type:      BrokerType::Sale,
            creci:            "PR-777".to_string(),
            creci_type:       CreciType::Permanent,
            classification:   Some(101),
            region_ids:       None,
            neighborhood_ids: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_list_query_defaults() {
        let q = BrokerProfileListQuery {
            broker_type:     None,
            creci_type:      None,
            classification:  None,
            region_id:       None,
            neighborhood_id: None,
            include_deleted: None,
            page:            None,
            limit:           None,
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 20);
    }

    #[test]
    fn test_list_query_clamp() {
        let q = BrokerProfileListQuery {
            broker_type:     None,
            creci_type:      None,
            classification:  None,
            region_id:       None,
            neighborhood_id: None,
            include_deleted: None,
            page:            Some(0),
            limit:           Some(1000),
        };
        assert_eq!(q.page(), 1);
        assert_eq!(q.limit(), 100);
    }
}
