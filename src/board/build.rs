//! Completed color groups and house construction.

use tracing::{error, info};

use super::{BoardManager, MAX_BUILD_ATTEMPTS};
use crate::core::PlayerId;
use crate::io::Prompter;
use crate::spaces::{BuildingLevel, SpaceKind};

impl BoardManager {
    /// Indices of every property in a color group fully owned by `id`.
    ///
    /// Detecting a completed group also promotes its properties from
    /// `Base` to `FullGroup` so base rent stops applying; the promotion
    /// is idempotent.
    pub fn owned_groups(&mut self, id: PlayerId) -> Vec<usize> {
        let mut owned = Vec::new();
        for indices in self.group_index.values() {
            if !indices.iter().all(|&i| self.spaces[i].owner() == Some(id)) {
                continue;
            }
            for &i in indices {
                if let SpaceKind::Property { level, .. } = &mut self.spaces[i].kind {
                    if *level == BuildingLevel::Base {
                        *level = BuildingLevel::FullGroup;
                    }
                }
                owned.push(i);
            }
        }
        owned.sort_unstable();
        owned
    }

    /// Ask the current player how many buildings to add to each property
    /// of one completed color group, then apply and charge the request.
    ///
    /// A request leaving the group uneven (building counts more than one
    /// apart) is rejected and re-asked, up to [`MAX_BUILD_ATTEMPTS`]
    /// times. A request the player cannot pay for is abandoned outright.
    /// The group is charged in a single debit once accepted.
    pub fn build_on_properties(&mut self, group: &[usize], io: &mut dyn Prompter) {
        let Some(current) = self.players().current() else {
            return;
        };
        let Some(&first) = group.first() else {
            return;
        };
        let SpaceKind::Property { house_price, .. } = self.spaces[first].kind else {
            error!("{} is not a property", self.spaces[first].name);
            return;
        };

        for _ in 0..=MAX_BUILD_ATTEMPTS {
            let money = self.players().player(current).money;
            info!(
                "With the money you currently have, you can build up to {} buildings in total.",
                money / house_price
            );

            let mut requested: Vec<(usize, u8)> = Vec::with_capacity(group.len());
            let mut min_total = u8::MAX;
            let mut max_total = u8::MIN;
            let mut new_buildings: i64 = 0;
            for &i in group {
                let SpaceKind::Property { level, .. } = &self.spaces[i].kind else {
                    continue;
                };
                let standing = level.buildings();
                let cap = i64::from(5 - standing).min(money / house_price);
                let additional = io.number(
                    &format!(
                        "Enter the number of additional buildings you want to build on {}: ",
                        self.spaces[i].name
                    ),
                    0,
                    cap,
                ) as u8;
                new_buildings += i64::from(additional);
                let total = standing + additional;
                if total == 5 {
                    info!("You have chosen to build a hotel on {}.", self.spaces[i].name);
                } else {
                    info!(
                        "You have chosen to build {additional} house(s) on {}.",
                        self.spaces[i].name
                    );
                }
                requested.push((i, total));
                min_total = min_total.min(total);
                max_total = max_total.max(total);
            }

            if max_total - min_total > 1 {
                error!("There is a difference of more than 1 building between some properties.");
                continue;
            }
            if new_buildings * house_price > money {
                error!("You don't have enough money to build all these properties.");
                return;
            }
            self.players_mut()
                .transfer(Some(current), None, new_buildings * house_price);

            for (i, total) in requested {
                if let SpaceKind::Property { level, .. } = &mut self.spaces[i].kind {
                    *level = BuildingLevel::from_buildings(total);
                }
                info!(
                    "{} now has {} {}.",
                    self.spaces[i].name,
                    if total == 5 { 1 } else { total },
                    if total == 5 { "hotel" } else { "house(s)" }
                );
            }
            return;
        }
        error!("Too many attempts. Exiting.");
    }
}
