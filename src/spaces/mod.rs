//! Board spaces and rent rules.

pub mod rent;
pub mod space;

pub use rent::{property_rent, station_rent, utility_rent};
pub use space::{BuildingLevel, ColorGroup, RentTable, Space, SpaceKind};
