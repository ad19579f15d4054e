use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrokerRegions::Table)
                    .if_not_exists()
                    .col(uuid(BrokerRegions::BrokerProfileId).not_null())
                    .col(uuid(BrokerRegions::RegionId).not_null())
                    .col(
                        timestamp_with_time_zone(BrokerRegions::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_broker_regions")
                            .col(BrokerRegions::BrokerProfileId)
                            .col(BrokerRegions::RegionId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_broker_regions_broker_profile_id")
                    .from(BrokerRegions::Table, BrokerRegions::BrokerProfileId)
                    .to(BrokerProfiles::Table, BrokerProfiles::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_broker_regions_region_id")
                    .from(BrokerRegions::Table, BrokerRegions::RegionId)
                    .to(Regions::Table, Regions::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Usage checks scan by region
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_broker_regions_region_id")
                    .table(BrokerRegions::Table)
                    .col(BrokerRegions::RegionId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrokerRegions::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrokerRegions {
    Table,
    BrokerProfileId,
    RegionId,
    CreatedAt,
}

// Reference to broker_profiles table
#[derive(DeriveIden)]
pub enum BrokerProfiles {
    Table,
    Id,
}

// Reference to regions table
#[derive(DeriveIden)]
pub enum Regions {
    Table,
    Id,
}
