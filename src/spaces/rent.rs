//! Pure rent rules.
//!
//! Each function maps a space's state to the amount owed; the board
//! manager decides who pays whom.

use super::{BuildingLevel, RentTable};

/// Rent owed on a property at a given building level.
///
/// The table is indexed full-group-first: `[full group, 1 house,
/// 2 houses, 3 houses, 4 houses, hotel, base]`. A `Base` level property
/// charges the last entry.
#[must_use]
pub fn property_rent(rent: &RentTable, level: BuildingLevel) -> i64 {
    let index = match level {
        BuildingLevel::Base => 6,
        BuildingLevel::FullGroup => 0,
        BuildingLevel::Hotel => 5,
        houses => houses.buildings() as usize,
    };
    rent.get(index).copied().unwrap_or(0)
}

/// Rent owed on a station given how many stations its owner holds.
///
/// Returns 0 when `owned` is outside `1..=table length`.
#[must_use]
pub fn station_rent(rent: &RentTable, owned: u8) -> i64 {
    if owned == 0 {
        return 0;
    }
    rent.get(usize::from(owned) - 1).copied().unwrap_or(0)
}

/// Rent owed on a utility: 4x the dice roll with one utility owned,
/// 10x with both.
#[must_use]
pub fn utility_rent(roll: u8, owned: u8) -> i64 {
    let multiplier = if owned <= 1 { 4 } else { 10 };
    i64::from(roll) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[i64]) -> RentTable {
        RentTable::from_slice(entries)
    }

    #[test]
    fn test_property_rent_by_level() {
        let rent = table(&[4, 10, 30, 90, 160, 250, 2]);
        assert_eq!(property_rent(&rent, BuildingLevel::Base), 2);
        assert_eq!(property_rent(&rent, BuildingLevel::FullGroup), 4);
        assert_eq!(property_rent(&rent, BuildingLevel::OneHouse), 10);
        assert_eq!(property_rent(&rent, BuildingLevel::TwoHouses), 30);
        assert_eq!(property_rent(&rent, BuildingLevel::ThreeHouses), 90);
        assert_eq!(property_rent(&rent, BuildingLevel::FourHouses), 160);
        assert_eq!(property_rent(&rent, BuildingLevel::Hotel), 250);
    }

    #[test]
    fn test_property_rent_short_table() {
        let rent = table(&[4, 10]);
        assert_eq!(property_rent(&rent, BuildingLevel::Hotel), 0);
        assert_eq!(property_rent(&rent, BuildingLevel::Base), 0);
    }

    #[test]
    fn test_station_rent_ladder() {
        let rent = table(&[25, 50, 100, 200]);
        assert_eq!(station_rent(&rent, 1), 25);
        assert_eq!(station_rent(&rent, 2), 50);
        assert_eq!(station_rent(&rent, 3), 100);
        assert_eq!(station_rent(&rent, 4), 200);
    }

    #[test]
    fn test_station_rent_out_of_range() {
        let rent = table(&[25, 50, 100, 200]);
        assert_eq!(station_rent(&rent, 0), 0);
        assert_eq!(station_rent(&rent, 5), 0);
    }

    #[test]
    fn test_utility_rent_multipliers() {
        assert_eq!(utility_rent(7, 1), 28);
        assert_eq!(utility_rent(7, 2), 70);
        assert_eq!(utility_rent(2, 1), 8);
        assert_eq!(utility_rent(12, 2), 120);
    }
}
