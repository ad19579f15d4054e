//! # Data Transfer Objects
//!
//! Request and response types for the API, one module per entity.

pub mod broker_profiles;
pub mod members;
pub mod neighborhoods;
pub mod regions;
pub mod teams;
pub mod user_types;
pub mod users;

use serde::Serialize;

/// Usage report for entities referenced by junction tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageResponse {
    /// Whether any junction row references the entity
    pub is_used: bool,
    /// Human-readable list of referencing relations
    pub used_in: Vec<String>,
}

/// Pagination info for paginated list responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationInfo {
    /// Current page (1-based)
    pub page:        u64,
    /// Items per page
    pub limit:       u64,
    /// Total matching items
    pub total:       u64,
    /// Total pages
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_response_serializes_camel_case() {
        let usage = UsageResponse {
            is_used: true,
            used_in: vec!["regions".to_string()],
        };
        let json = serde_json::to_value(&usage).unwrap();
        assert_eq!(json["isUsed"], true);
        assert_eq!(json["usedIn"][0], "regions");
    }
}
