use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RegionNeighborhoods::Table)
                    .if_not_exists()
                    .col(uuid(RegionNeighborhoods::RegionId).not_null())
                    .col(uuid(RegionNeighborhoods::NeighborhoodId).not_null())
                    .col(
                        timestamp_with_time_zone(RegionNeighborhoods::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_region_neighborhoods")
                            .col(RegionNeighborhoods::RegionId)
                            .col(RegionNeighborhoods::NeighborhoodId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_region_neighborhoods_region_id")
                    .from(RegionNeighborhoods::Table, RegionNeighborhoods::RegionId)
                    .to(Regions::Table, Regions::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_region_neighborhoods_neighborhood_id")
                    .from(RegionNeighborhoods::Table, RegionNeighborhoods::NeighborhoodId)
                    .to(Neighborhoods::Table, Neighborhoods::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Reverse lookups from the neighborhood side
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_region_neighborhoods_neighborhood_id")
                    .table(RegionNeighborhoods::Table)
                    .col(RegionNeighborhoods::NeighborhoodId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RegionNeighborhoods::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RegionNeighborhoods {
    Table,
    RegionId,
    NeighborhoodId,
    CreatedAt,
}

// Reference to regions table
#[derive(DeriveIden)]
pub enum Regions {
    Table,
    Id,
}

// Reference to neighborhoods table
#[derive(DeriveIden)]
pub enum Neighborhoods {
    Table,
    Id,
}
