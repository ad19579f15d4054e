use sea_orm_migration::{prelude::*, schema::*, sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create team_type enum type
        manager
            .create_type(
                Type::create()
                    .as_enum(TeamType::Table)
                    .values(vec![
                        TeamType::Brokers,
                        TeamType::Registration,
                        TeamType::Legal,
                        TeamType::Support,
                        TeamType::Administrative,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Teams::Table)
                    .if_not_exists()
                    .col(pk_uuid(Teams::Id))
                    .col(string(Teams::Name).not_null())
                    .col(enumeration(
                        Teams::TeamType,
                        TeamType::Table,
                        vec![
                            TeamType::Brokers,
                            TeamType::Registration,
                            TeamType::Legal,
                            TeamType::Support,
                            TeamType::Administrative,
                        ],
                    ))
                    .col(
                        timestamp_with_time_zone(Teams::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Teams::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_teams_name_unique")
                    .table(Teams::Table)
                    .col(Teams::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Teams::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(TeamType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Teams {
    Table,
    Id,
    Name,
    TeamType,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub enum TeamType {
    Table,
    Brokers,
    Registration,
    Legal,
    Support,
    Administrative,
}
