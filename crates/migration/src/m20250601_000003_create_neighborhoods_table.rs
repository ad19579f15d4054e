use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Neighborhoods::Table)
                    .if_not_exists()
                    .col(pk_uuid(Neighborhoods::Id))
                    .col(string(Neighborhoods::Name).not_null())
                    .col(string(Neighborhoods::City).not_null())
                    .col(
                        timestamp_with_time_zone(Neighborhoods::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Neighborhoods::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // The same neighborhood name may repeat across cities
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_neighborhoods_name_city_unique")
                    .table(Neighborhoods::Table)
                    .col(Neighborhoods::Name)
                    .col(Neighborhoods::City)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Neighborhoods::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Neighborhoods {
    Table,
    Id,
    Name,
    City,
    CreatedAt,
    UpdatedAt,
}
