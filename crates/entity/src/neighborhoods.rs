//! Neighborhoods Entity
//!
//! City neighborhoods; `(name, city)` is unique.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "neighborhoods")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id:         uuid::Uuid,
    pub name:       String,
    pub city:       String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::region_neighborhoods::Entity")]
    RegionNeighborhoods,
    #[sea_orm(has_many = "super::broker_neighborhoods::Entity")]
    BrokerNeighborhoods,
}

impl Related<super::region_neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::RegionNeighborhoods.def() }
}

impl Related<super::broker_neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerNeighborhoods.def() }
}

impl ActiveModelBehavior for ActiveModel {}
