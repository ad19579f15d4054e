//! # Neighborhood Data Transfer Objects

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateNeighborhoodRequest {
    /// Neighborhood name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: String,
    /// City the neighborhood belongs to
    #[validate(length(
        min = 1,
        max = 255,
        message = "City must be between 1 and 255 characters"
    ))]
    pub city: String,
}

/// Request to create several neighborhoods of one city at once
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct CreateNeighborhoodBatchRequest {
    /// City the neighborhoods belong to
    #[validate(length(
        min = 1,
        max = 255,
        message = "City must be between 1 and 255 characters"
    ))]
    pub city:  String,
    /// Neighborhood names to create
    #[validate(length(min = 1, message = "At least one neighborhood name is required"))]
    pub names: Vec<String>,
}

/// Request to update a neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateNeighborhoodRequest {
    /// Updated name
    #[validate(length(
        min = 1,
        max = 255,
        message = "Name must be between 1 and 255 characters"
    ))]
    pub name: Option<String>,
    /// Updated city
    #[validate(length(
        min = 1,
        max = 255,
        message = "City must be between 1 and 255 characters"
    ))]
    pub city: Option<String>,
}

/// Query parameters for the neighborhood list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct NeighborhoodListQuery {
    /// Partial name filter
    pub name: Option<String>,
    /// Partial city filter
    pub city: Option<String>,
}

/// Response for a single neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NeighborhoodResponse {
    /// Neighborhood's unique identifier
    pub id:         uuid::Uuid,
    /// Neighborhood name
    pub name:       String,
    /// City the neighborhood belongs to
    pub city:       String,
    /// Creation timestamp
    pub created_at: String,
    /// Last update timestamp
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_neighborhood_request_valid() {
        let req = CreateNeighborhoodRequest {
            name: "Centro".to_string(),
            city: "Curitiba".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_neighborhood_request_empty_name() {
        let req = CreateNeighborhoodRequest {
            name: String::new(),
            city: "Curitiba".to_string(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_batch_request_requires_names() {
        let req = CreateNeighborhoodBatchRequest {
            city:  "Curitiba".to_string(),
            names: vec![],
        };
        assert!(req.validate().is_err());

        let req = CreateNeighborhoodBatchRequest {
            city:  "Curitiba".to_string(),
            names: vec!["Centro".to_string(), "Batel".to_string()],
        };
        assert!(req.validate().is_ok());
    }
}
