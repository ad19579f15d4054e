//! Teams Entity
//!
//! Back-office teams grouped by function; members hang off a team and
//! cascade on team deletion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "teams")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id:         uuid::Uuid,
    #[sea_orm(unique)]
    pub name:       String,
    pub team_type:  TeamType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::members::Entity")]
    Members,
}

impl Related<super::members::Entity> for Entity {
    fn to() -> RelationDef { Relation::Members.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Team function enumeration
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "team_type")]
pub enum TeamType {
    /// Sales brokers
    #[sea_orm(string_value = "brokers")]
    Brokers,
    /// Property registration staff
    #[sea_orm(string_value = "registration")]
    Registration,
    /// Legal department
    #[sea_orm(string_value = "legal")]
    Legal,
    /// Customer support
    #[sea_orm(string_value = "support")]
    Support,
    /// Administrative staff
    #[sea_orm(string_value = "administrative")]
    Administrative,
}

impl std::fmt::Display for TeamType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamType::Brokers => write!(f, "brokers"),
            TeamType::Registration => write!(f, "registration"),
            TeamType::Legal => write!(f, "legal"),
            TeamType::Support => write!(f, "support"),
            TeamType::Administrative => write!(f, "administrative"),
        }
    }
}
