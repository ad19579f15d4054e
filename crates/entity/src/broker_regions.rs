//! Broker Regions Entity
//!
//! Junction between broker profiles and regions; the pair is the primary key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "broker_regions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub broker_profile_id: uuid::Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub region_id:         uuid::Uuid,
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
        belongs_to = "super::regions::Entity",
        from = "Column::RegionId",
        to = "super::regions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Region,
}

impl Related<super::broker_profiles::Entity> for Entity {
    fn to() -> RelationDef { Relation::BrokerProfile.def() }
}

impl Related<super::regions::Entity> for Entity {
    fn to() -> RelationDef { Relation::Region.def() }
}

impl ActiveModelBehavior for ActiveModel {}
