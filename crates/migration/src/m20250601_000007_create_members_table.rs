use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Members::Table)
                    .if_not_exists()
                    .col(pk_uuid(Members::Id))
                    .col(string(Members::Name).not_null())
                    .col(string(Members::Email).not_null())
                    .col(string_null(Members::Phone))
                    .col(boolean(Members::IsLeader).not_null().default(false))
                    .col(boolean(Members::Active).not_null().default(true))
                    .col(uuid(Members::TeamId).not_null())
                    .col(
                        timestamp_with_time_zone(Members::JoinedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Members::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Members::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_members_team_id")
                    .from(Members::Table, Members::TeamId)
                    .to(Teams::Table, Teams::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_members_email_unique")
                    .table(Members::Table)
                    .col(Members::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Leadership checks scan by team
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_members_team_id")
                    .table(Members::Table)
                    .col(Members::TeamId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Members::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Members {
    Table,
    Id,
    Name,
    Email,
    Phone,
    IsLeader,
    Active,
    TeamId,
    JoinedAt,
    CreatedAt,
    UpdatedAt,
}

// Reference to teams table
#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
}
