//! Broker Neighborhoods Entity
//!
//! Junction between broker profiles and neighborhoods; the pair is the
//! primary key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "broker_neighborhoods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub broker_profile_id: uuid::Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub neighborhood_id:   uuid::Uuid,
    pub created_at:        chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::broker_profiles::Entity",
        from = "Column::BrokerProfileId",
        to = "super::broker_profiles::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    BrokerProfile,
    #[sea_orm(
        belongs_to = "super::neighborhoods::Entity",
        from = "Column::NeighborhoodId",
        to = "super::neighborhoods::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Neighborhood,
}

impl Related<super::broker_profiles::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerProfile.def() }
}

impl Related<super::neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::Neighborhood.def() }
}

impl ActiveModelBehavior for ActiveModel {}
