use sea_orm_migration::{prelude::*, schema::*, sea_query::extension::postgres::Type};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create broker_type enum type
        manager
            .create_type(
                Type::create()
                    .as_enum(BrokerType::Table)
                    .values(vec![BrokerType::Rental, BrokerType::Sale, BrokerType::Hybrid])
                    .to_owned(),
            )
            .await?;

        // Create creci_type enum type
        manager
            .create_type(
                Type::create()
                    .as_enum(CreciType::Table)
                    .values(vec![
                        CreciType::Permanent,
                        CreciType::Intern,
                        CreciType::Registration,
                    ])
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(BrokerProfiles::Table)
                    .if_not_exists()
                    .col(pk_uuid(BrokerProfiles::Id))
                    .col(enumeration(
                        BrokerProfiles::BrokerType,
                        BrokerType::Table,
                        vec![BrokerType::Rental, BrokerType::Sale, BrokerType::Hybrid],
                    ))
                    .col(string(BrokerProfiles::Creci).not_null())
                    .col(enumeration(
                        BrokerProfiles::CreciType,
                        CreciType::Table,
                        vec![
                            CreciType::Permanent,
                            CreciType::Intern,
                            CreciType::Registration,
                        ],
                    ))
                    .col(integer(BrokerProfiles::Classification).not_null().default(0))
                    .col(boolean(BrokerProfiles::Deleted).not_null().default(false))
                    .col(
                        timestamp_with_time_zone(BrokerProfiles::CreatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BrokerProfiles::UpdatedAt)
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(BrokerProfiles::DeletedAt))
                    .to_owned(),
            )
            .await?;

        // Listing filters by type and classification
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_broker_profiles_broker_type")
                    .table(BrokerProfiles::Table)
                    .col(BrokerProfiles::BrokerType)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrokerProfiles::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(BrokerType::Table).to_owned())
            .await?;

        manager
            .drop_type(Type::drop().name(CreciType::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BrokerProfiles {
    Table,
    Id,
    BrokerType,
    Creci,
    CreciType,
    Classification,
    Deleted,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum BrokerType {
    Table,
    Rental,
    Sale,
    Hybrid,
}

#[derive(DeriveIden)]
pub enum CreciType {
    Table,
    Permanent,
    Intern,
    Registration,
}
