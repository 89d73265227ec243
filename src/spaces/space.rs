//! Board spaces as a closed tagged union.
//!
//! Every space has a name and a kind; the kind carries all behavior
//! parameters. Landing behavior itself lives in the board manager, which
//! matches exhaustively on [`SpaceKind`] — adding a new kind of space
//! extends the enum and the compiler points at every match to update.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::PlayerId;

/// Rent table. Properties use seven entries (full group, 1-4 houses,
/// hotel, base rent), stations four (by stations owned).
pub type RentTable = SmallVec<[i64; 7]>;

/// Color group a property belongs to.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ColorGroup {
    Purple,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    Blue,
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ColorGroup::Purple => "purple",
            ColorGroup::LightBlue => "light blue",
            ColorGroup::Pink => "pink",
            ColorGroup::Orange => "orange",
            ColorGroup::Red => "red",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Green => "green",
            ColorGroup::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

/// A property's discrete improvement state.
///
/// `Base` is the unimproved state. `FullGroup` unlocks once the owner
/// holds the whole color group (no houses yet), then 1-4 houses, then a
/// hotel at the top.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum BuildingLevel {
    #[default]
    Base,
    FullGroup,
    OneHouse,
    TwoHouses,
    ThreeHouses,
    FourHouses,
    Hotel,
}

impl BuildingLevel {
    /// Number of build steps above `FullGroup` (0 for `Base` and
    /// `FullGroup`, 1-4 for houses, 5 for a hotel).
    #[must_use]
    pub fn buildings(self) -> u8 {
        match self {
            BuildingLevel::Base | BuildingLevel::FullGroup => 0,
            BuildingLevel::OneHouse => 1,
            BuildingLevel::TwoHouses => 2,
            BuildingLevel::ThreeHouses => 3,
            BuildingLevel::FourHouses => 4,
            BuildingLevel::Hotel => 5,
        }
    }

    /// Level for a given number of build steps (clamps at a hotel).
    #[must_use]
    pub fn from_buildings(n: u8) -> Self {
        match n {
            0 => BuildingLevel::FullGroup,
            1 => BuildingLevel::OneHouse,
            2 => BuildingLevel::TwoHouses,
            3 => BuildingLevel::ThreeHouses,
            4 => BuildingLevel::FourHouses,
            _ => BuildingLevel::Hotel,
        }
    }

    /// Number of houses standing (0 unless 1-4 houses).
    #[must_use]
    pub fn houses(self) -> u8 {
        match self {
            BuildingLevel::OneHouse
            | BuildingLevel::TwoHouses
            | BuildingLevel::ThreeHouses
            | BuildingLevel::FourHouses => self.buildings(),
            _ => 0,
        }
    }

    /// Whether a hotel is standing.
    #[must_use]
    pub fn is_hotel(self) -> bool {
        self == BuildingLevel::Hotel
    }
}

/// The behavior variant of a space.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpaceKind {
    Go,
    Jail,
    GoToJail,
    FreeParking,
    CommunityChest,
    Chance,
    Tax {
        amount: i64,
    },
    Property {
        color: ColorGroup,
        price: i64,
        house_price: i64,
        rent: RentTable,
        level: BuildingLevel,
        owner: Option<PlayerId>,
    },
    Station {
        price: i64,
        rent: RentTable,
        owner: Option<PlayerId>,
    },
    Utility {
        price: i64,
        owner: Option<PlayerId>,
    },
}

/// A space on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub name: String,
    pub kind: SpaceKind,
}

impl Space {
    pub fn go() -> Self {
        Self::named("Go", SpaceKind::Go)
    }

    pub fn jail() -> Self {
        Self::named("Jail", SpaceKind::Jail)
    }

    pub fn go_to_jail() -> Self {
        Self::named("Go To Jail", SpaceKind::GoToJail)
    }

    pub fn free_parking() -> Self {
        Self::named("Free Parking", SpaceKind::FreeParking)
    }

    pub fn community_chest() -> Self {
        Self::named("Community Chest", SpaceKind::CommunityChest)
    }

    pub fn chance() -> Self {
        Self::named("Chance", SpaceKind::Chance)
    }

    pub fn tax(name: impl Into<String>, amount: i64) -> Self {
        Self::named(name, SpaceKind::Tax { amount })
    }

    pub fn property(
        name: impl Into<String>,
        color: ColorGroup,
        price: i64,
        house_price: i64,
        rent: [i64; 7],
    ) -> Self {
        Self::named(
            name,
            SpaceKind::Property {
                color,
                price,
                house_price,
                rent: RentTable::from_slice(&rent),
                level: BuildingLevel::Base,
                owner: None,
            },
        )
    }

    /// Station with the standard price and rent ladder.
    pub fn station(name: impl Into<String>) -> Self {
        Self::named(
            name,
            SpaceKind::Station {
                price: 200,
                rent: RentTable::from_slice(&[25, 50, 100, 200]),
                owner: None,
            },
        )
    }

    /// Utility with the standard price; rent comes from the dice roll.
    pub fn utility(name: impl Into<String>) -> Self {
        Self::named(name, SpaceKind::Utility { price: 150, owner: None })
    }

    fn named(name: impl Into<String>, kind: SpaceKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Owner of a purchasable space; `None` for unowned or non-purchasable.
    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        match &self.kind {
            SpaceKind::Property { owner, .. }
            | SpaceKind::Station { owner, .. }
            | SpaceKind::Utility { owner, .. } => *owner,
            _ => None,
        }
    }

    /// Set the owner of a purchasable space; no-op otherwise.
    pub fn set_owner(&mut self, new_owner: Option<PlayerId>) {
        match &mut self.kind {
            SpaceKind::Property { owner, .. }
            | SpaceKind::Station { owner, .. }
            | SpaceKind::Utility { owner, .. } => *owner = new_owner,
            _ => {}
        }
    }

    /// Purchase price of a purchasable space.
    #[must_use]
    pub fn price(&self) -> Option<i64> {
        match &self.kind {
            SpaceKind::Property { price, .. }
            | SpaceKind::Station { price, .. }
            | SpaceKind::Utility { price, .. } => Some(*price),
            _ => None,
        }
    }

    /// Whether this space can be bought at all.
    #[must_use]
    pub fn is_buyable(&self) -> bool {
        self.price().is_some()
    }
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SpaceKind::Property {
                color,
                price,
                house_price,
                rent,
                ..
            } => {
                writeln!(f, "Property: {} ({color})", self.name)?;
                writeln!(f, "  Price: {price}")?;
                writeln!(f, "  Rent with full group: {}", rent.first().unwrap_or(&0))?;
                for houses in 1..=4 {
                    if let Some(r) = rent.get(houses) {
                        writeln!(f, "  Rent with {houses} house(s): {r}")?;
                    }
                }
                if let Some(r) = rent.get(5) {
                    writeln!(f, "  Rent with a hotel: {r}")?;
                }
                if let Some(r) = rent.get(6) {
                    writeln!(f, "  Base rent: {r}")?;
                }
                write!(f, "  House price: {house_price}")
            }
            SpaceKind::Station { price, rent, .. } => {
                writeln!(f, "Station: {}", self.name)?;
                writeln!(f, "  Price: {price}")?;
                for (i, r) in rent.iter().enumerate() {
                    writeln!(f, "  Rent with {} station(s): {r}", i + 1)?;
                }
                Ok(())
            }
            SpaceKind::Utility { price, .. } => {
                writeln!(f, "Utility: {}", self.name)?;
                writeln!(f, "  Price: {price}")?;
                write!(
                    f,
                    "  Rent: 4x the dice roll with one utility owned, 10x with both"
                )
            }
            SpaceKind::Tax { amount } => {
                write!(f, "Tax: {} ({amount})", self.name)
            }
            _ => write!(f, "{}", self.name),
        }
    }
}
