use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrokerNeighborhoods::Table)
                    .if_not_exists()
                    .col(uuid(BrokerNeighborhoods::BrokerProfileId).not_null())
                    .col(uuid(BrokerNeighborhoods::NeighborhoodId).not_null())
                    .col(
                        timestamp_with_time_zone(BrokerNeighborhoods::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_broker_neighborhoods")
                            .col(BrokerNeighborhoods::BrokerProfileId)
                            .col(BrokerNeighborhoods::NeighborhoodId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_broker_neighborhoods_broker_profile_id")
                    .from(
                        BrokerNeighborhoods::Table,
                        BrokerNeighborhoods::BrokerProfileId,
                    )
                    .to(BrokerProfiles::Table, BrokerProfiles::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name("fk_broker_neighborhoods_neighborhood_id")
                    .from(
                        BrokerNeighborhoods::Table,
                        BrokerNeighborhoods::NeighborhoodId,
                    )
                    .to(Neighborhoods::Table, Neighborhoods::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        // Usage checks scan by neighborhood
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_broker_neighborhoods_neighborhood_id")
                    .table(BrokerNeighborhoods::Table)
                    .col(BrokerNeighborhoods::NeighborhoodId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrokerNeighborhoods::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrokerNeighborhoods {
    Table,
    BrokerProfileId,
    NeighborhoodId,
    CreatedAt,
}

// Reference to broker_profiles table
#[derive(DeriveIden)]
pub enum BrokerProfiles {
    Table,
    Id,
}

// Reference to neighborhoods table
#[derive(DeriveIden)]
pub enum Neighborhoods {
    Table,
    Id,
}
