pub use sea_orm_migration::prelude::*;

mod m20250601_000001_create_user_types_table;
mod m20250601_000002_create_users_table;
mod m20250601_000003_create_neighborhoods_table;
mod m20250601_000004_create_regions_table;
mod m20250601_000005_create_region_neighborhoods_table;
mod m20250601_000006_create_teams_table;
mod m20250601_000007_create_members_table;
mod m20250601_000008_create_broker_profiles_table;
mod m20250601_000009_create_broker_regions_table;
mod m20250601_000010_create_broker_neighborhoods_table;
pub mod seeds;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250601_000001_create_user_types_table::Migration),
            Box::new(m20250601_000002_create_users_table::Migration),
            Box::new(m20250601_000003_create_neighborhoods_table::Migration),
            Box::new(m20250601_000004_create_regions_table::Migration),
            Box::new(m20250601_000005_create_region_neighborhoods_table::Migration),
            Box::new(m20250601_000006_create_teams_table::Migration),
            Box::new(m20250601_000007_create_members_table::Migration),
            Box::new(m20250601_000008_create_broker_profiles_table::Migration),
            Box::new(m20250601_000009_create_broker_regions_table::Migration),
            Box::new(m20250601_000010_create_broker_neighborhoods_table::Migration),
        ]
    }
}

/// Database connection helper for CLI usage
pub async fn connect_to_database(database_url: &str) -> Result<sea_orm::DatabaseConnection, sea_orm::DbErr> {
    sea_orm::Database::connect(database_url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_registered_in_order() {
        let migrations = Migrator::migrations();
        assert_eq!(migrations.len(), 10);
    }
}
