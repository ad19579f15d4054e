//! # Seed Data Management
//!
//! Seeds the fixed reference data the application depends on. Seeding is
//! idempotent; existing rows are left untouched.

use sea_orm::{ConnectionTrait, DbErr};
use sea_orm_migration::sea_query::{OnConflict, Query};

use crate::m20250601_000001_create_user_types_table::UserTypes;

/// Fixed user type catalog. The ids are part of the API contract.
pub const USER_TYPES: &[(i16, &str)] = &[
    (1, "Admin"),
    (2, "Manager"),
    (3, "Broker"),
    (4, "User"),
];

/// Insert the user type catalog, skipping rows that already exist.
pub async fn seed_user_types(db: &impl ConnectionTrait) -> Result<(), DbErr> {
    let mut insert = Query::insert()
        .into_table(UserTypes::Table)
        .columns([UserTypes::Id, UserTypes::Name])
        .on_conflict(OnConflict::column(UserTypes::Id).do_nothing().to_owned())
        .to_owned();

    for (id, name) in USER_TYPES {
        insert.values_panic([(*id).into(), (*name).into()]);
    }

    let builder = db.get_database_backend();
    db.execute(builder.build(&insert)).await?;

    tracing::info!(count = USER_TYPES.len(), "User types seeded");
    Ok(())
}

/// Runs all seed operations in order.
pub async fn run_all_seeds(db: &impl ConnectionTrait) -> Result<(), DbErr> {
    seed_user_types(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_catalog_is_stable() {
        assert_eq!(USER_TYPES.len(), 4);
        assert_eq!(USER_TYPES[0], (1, "Admin"));
        assert_eq!(USER_TYPES[1], (2, "Manager"));
        assert_eq!(USER_TYPES[2], (3, "Broker"));
        assert_eq!(USER_TYPES[3], (4, "User"));
    }

    #[test]
    fn test_user_type_ids_are_unique() {
        let mut ids: Vec<i16> = USER_TYPES.iter().map(|(id, _)| *id).collect();
        ids.dedup();
        assert_eq!(ids.len(), USER_TYPES.len());
    }
}
