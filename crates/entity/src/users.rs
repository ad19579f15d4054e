//! Users Entity
//!
//! Application users with a role reference and soft-delete support.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, column_type = "Uuid")]
    pub id:            uuid::Uuid,
    pub name:          String,
    #[sea_orm(unique)]
    pub email:         String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub phone:         Option<String>,
    pub user_type_id:  i16,
    pub deleted:       bool,
    pub created_at:    chrono::DateTime<chrono::Utc>,
    pub updated_at:    chrono::DateTime<chrono::Utc>,
    pub deleted_at:    Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_types::Entity",
        from = "Column::UserTypeId",
        to = "super::user_types::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    UserType,
}

impl Related<super::user_types::Entity> for Entity {
    fn to() -> RelationDef { Relation::UserType.def() }
}

impl ActiveModelBehavior for ActiveModel {}
