//! Broker Profiles Entity
//!
//! Broker registration data (CRECI) with soft-delete support. Coverage
//! areas live in the broker_regions / broker_neighborhoods junctions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "broker_profiles")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id:             uuid::Uuid,
    pub broker_type:    BrokerType,
    pub creci:          String,
    pub creci_type:     CreciType,
    pub classification: i32,
    pub deleted:        bool,
    pub created_at:     chrono::DateTime<chrono::Utc>,
    pub updated_at:     chrono::DateTime<chrono::Utc>,
    pub deleted_at:     Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::broker_regions::Entity")]
    BrokerRegions,
    #[sea_orm(has_many = "super::broker_neighborhoods::Entity")]
    BrokerNeighborhoods,
}

impl Related<super::broker_regions::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerRegions.def() }
}

impl Related<super::broker_neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerNeighborhoods.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Broker specialization enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "broker_type")]
pub enum BrokerType {
    /// Rental transactions only
    #[sea_orm(string_value = "rental")]
    Rental,
    /// Sale transactions only
    #[sea_orm(string_value = "sale")]
    Sale,
    /// Both rental and sale
    #[sea_orm(string_value = "hybrid")]
    Hybrid,
}

impl std::fmt::Display for BrokerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrokerType::Rental => write!(f, "rental"),
            BrokerType::Sale => write!(f, "sale"),
            BrokerType::Hybrid => write!(f, "hybrid"),
        }
    }
}

/// CRECI license category enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "creci_type")]
pub enum CreciType {
    /// Definitive license
    #[sea_orm(string_value = "permanent")]
    Permanent,
    /// Internship license
    #[sea_orm(string_value = "intern")]
    Intern,
    /// Registration in progress
    #[sea_orm(string_value = "registration")]
    Registration,
}

impl std::fmt::Display for CreciType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreciType::Permanent => write!(f, "permanent"),
            CreciType::Intern => write!(f, "intern"),
            CreciType::Registration => write!(f, "registration"),
        }
    }
}
