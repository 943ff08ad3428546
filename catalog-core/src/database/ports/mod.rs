//! Repository ports (interfaces), one per catalog entity.
//! Implementations live in the Postgres adapter under
//! `database::infrastructure::postgres`.

pub mod catalog_brands;
pub mod catalog_items;
pub mod specifications;
