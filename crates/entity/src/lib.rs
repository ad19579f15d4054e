//! Entity definitions for the imovia API
//!
//! This crate contains Sea-ORM entity definitions for the database models.

pub mod user_types;
pub use user_types::Entity as UserTypes;
pub mod users;
pub use users::Entity as Users;
pub mod neighborhoods;
pub use neighborhoods::Entity as Neighborhoods;
pub mod regions;
pub use regions::Entity as Regions;
pub mod region_neighborhoods;
pub use region_neighborhoods::Entity as RegionNeighborhoods;
pub mod teams;
pub use teams::Entity as Teams;
pub mod members;
pub use members::Entity as Members;
pub mod broker_profiles;
pub use broker_profiles::Entity as BrokerProfiles;
pub mod broker_regions;
pub use broker_regions::Entity as BrokerRegions;
pub mod broker_neighborhoods;
pub use broker_neighborhoods::Entity as BrokerNeighborhoods;
