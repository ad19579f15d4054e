//! Simple enum tests for entity crate

use entity::broker_profiles::{BrokerType, CreciType};
use entity::teams::TeamType;

/// Test TeamType enum values
#[test]
fn test_team_type_values() {
    assert_eq!(format!("{}", TeamType::Brokers), "brokers");
    assert_eq!(format!("{}", TeamType::Registration), "registration");
    assert_eq!(format!("{}", TeamType::Legal), "legal");
    assert_eq!(format!("{}", TeamType::Support), "support");
    assert_eq!(format!("{}", TeamType::Administrative), "administrative");
}

/// Test TeamType equality
#[test]
fn test_team_type_equality() {
    assert_eq!(TeamType::Brokers, TeamType::Brokers);
    assert_eq!(TeamType::Legal, TeamType::Legal);
    assert_ne!(TeamType::Brokers, TeamType::Support);
}

/// Test BrokerType enum values
#[test]
fn test_broker_type_values() {
    assert_eq!(format!("{}", BrokerType::Rental), "rental");
    assert_eq!(format!("{}", BrokerType::Sale), "sale");
    assert_eq!(format!("{}", BrokerType::Hybrid), "hybrid");
}

/// Test BrokerType equality
#[test]
fn test_broker_type_equality() {
    assert_eq!(BrokerType::Rental, BrokerType::Rental);
    assert_ne!(BrokerType::Rental, BrokerType::Sale);
}

/// Test CreciType enum values
#[test]
fn test_creci_type_values() {
    assert_eq!(format!("{}", CreciType::Permanent), "permanent");
    assert_eq!(format!("{}", CreciType::Intern), "intern");
    assert_eq!(format!("{}", CreciType::Registration), "registration");
}

/// Test CreciType equality
#[test]
fn test_creci_type_equality() {
    assert_eq!(CreciType::Permanent, CreciType::Permanent);
    assert_ne!(CreciType::Intern, CreciType::Registration);
}

/// Test enum Clone
#[test]
fn test_enum_clone() {
    assert_eq!(TeamType::Brokers.clone(), TeamType::Brokers);
    assert_eq!(BrokerType::Hybrid.clone(), BrokerType::Hybrid);
    assert_eq!(CreciType::Intern.clone(), CreciType::Intern);
}

/// Test enum Debug
#[test]
fn test_enum_debug() {
    let debug = format!("{:?}", TeamType::Administrative);
    assert!(debug.contains("Administrative"));

    let debug = format!("{:?}", BrokerType::Sale);
    assert!(debug.contains("Sale"));

    let debug = format!("{:?}", CreciType::Permanent);
    assert!(debug.contains("Permanent"));
}

/// Test serde round-trip through string values
#[test]
fn test_enum_serde_values() {
    let json = serde_json::to_string(&TeamType::Brokers).unwrap();
    assert_eq!(json, "\"Brokers\"");
    let parsed: BrokerType = serde_json::from_str("\"Hybrid\"").unwrap();
    assert_eq!(parsed, BrokerType::Hybrid);
}
