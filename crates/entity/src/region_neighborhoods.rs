//! Region Neighborhoods Entity
//!
//! Junction between regions and neighborhoods; the pair is the primary key.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "region_neighborhoods")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub region_id:       uuid::Uuid,
    #[sea_orm(primary_key, auto_increment = false, column_type = "Uuid")]
    pub neighborhood_id: uuid::Uuid,
    pub created_at:      chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::regions::Entity",
        from = "Column::RegionId",
        to = "super::regions::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Region,
    #[sea_orm(
        belongs_to = "super::neighborhoods::Entity",
        from = "Column::NeighborhoodId",
        to = "super::neighborhoods::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Neighborhood,
}

impl Related<super::regions::Entity> for Entity {
    fn to() -> RelationDef { Relation::Region.def() }
}

impl Related<super::neighborhoods::Entity> for Entity {
    fn to() -> RelationDef { Relation::Neighborhood.def() }
}

impl ActiveModelBehavior for ActiveModel {}
