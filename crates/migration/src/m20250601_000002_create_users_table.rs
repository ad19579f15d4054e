use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_uuid(Users::Id))
                    .col(string(Users::Name).not_null())
                    .col(string(Users::Email).not_null())
                    .col(string(Users::PasswordHash).not_null())
                    .col(string_null(Users::Phone))
                    .col(small_integer(Users::UserTypeId).not_null())
                    .col(boolean(Users::Deleted).not_null().default(false))
                    .col(
                        timestamp_with_time_zone(Users::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Users::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Users::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_users_user_type_id")
                    .from(Users::Table, Users::UserTypeId)
                    .to(UserTypes::Table, UserTypes::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email_unique")
                    .table(Users::Table)
                    .col(Users::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Filtered lookups by role
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_user_type_id")
                    .table(Users::Table)
                    .col(Users::UserTypeId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Users {
    Table,
    Id,
    Name,
    Email,
    PasswordHash,
    Phone,
    UserTypeId,
    Deleted,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

// Reference to user_types table
#[derive(DeriveIden)]
pub enum UserTypes {
    Table,
    Id,
}
