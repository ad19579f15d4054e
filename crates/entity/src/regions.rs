//! Regions Entity
//!
//! Named coverage areas grouping neighborhoods.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "regions")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id:         uuid::Uuid,
    #[sea_orm(unique)]
    pub name:       String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::region_neighborhoods::Entity")]
    RegionNeighborhoods,
    #[sea_orm(has_many = "super::broker_regions::Entity")]
    BrokerRegions,
}

impl Related<super::region_neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::RegionNeighborhoods.def() }
}

impl Related<super::broker_regions::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerRegions.def() }
}

impl ActiveModelBehavior for ActiveModel {}
