//! Landing on purchasable spaces: rent, purchase, or auction.

use tracing::{error, info};

use super::BoardManager;
use crate::core::PlayerId;
use crate::io::Prompter;
use crate::spaces::{property_rent, station_rent, utility_rent, SpaceKind};

impl BoardManager {
    /// Landing action for a property, station, or utility.
    ///
    /// Owned by someone else charges rent; owned by the lander does
    /// nothing; unowned offers a purchase at list price, and a declined
    /// or unaffordable purchase sends the space to auction.
    pub(crate) fn land_on_buyable(&mut self, position: usize, io: &mut dyn Prompter) {
        let Some(current) = self.players().current() else {
            return;
        };
        let space = self.space(position);
        let label = match &space.kind {
            SpaceKind::Property { .. } => "property",
            SpaceKind::Station { .. } => "station",
            SpaceKind::Utility { .. } => "utility",
            _ => {
                error!("{} is not a buyable space", space.name);
                return;
            }
        };
        match space.owner() {
            Some(owner) if owner == current => {
                info!("You own this {label}");
            }
            Some(owner) => {
                info!(
                    "This {label} is owned by {}",
                    self.players().player(owner).name
                );
                self.charge_rent(position, current, owner);
            }
            None => {
                info!("This {label} is not owned");
                info!("{}", self.space(position));
                let Some(price) = self.space(position).price() else {
                    return;
                };
                let wants_it =
                    io.yes_no(&format!("Do you want to buy it for {price}? [y/n]"));
                if wants_it {
                    if self.players().player(current).money < price {
                        info!("You don't have enough money to buy this {label}");
                        self.auction(position, label, io);
                    } else {
                        self.players_mut().transfer(Some(current), None, price);
                        self.grant_ownership(current, position);
                        info!("You now own this {label}");
                    }
                } else {
                    self.auction(position, label, io);
                }
            }
        }
    }

    /// Charge `payer` the rent owed to `owner` for the space at `position`.
    fn charge_rent(&mut self, position: usize, payer: PlayerId, owner: PlayerId) {
        let rent = match &self.space(position).kind {
            SpaceKind::Property { rent, level, .. } => property_rent(rent, *level),
            SpaceKind::Station { rent, .. } => {
                let owned = self.players().player(owner).stations_owned;
                info!("{} owns {owned} station(s)", self.players().player(owner).name);
                station_rent(rent, owned)
            }
            SpaceKind::Utility { .. } => {
                let (d1, d2) = self.last_roll();
                let owned = self.players().player(owner).utilities_owned;
                let multiplier = if owned <= 1 { 4 } else { 10 };
                info!("The rent is ({d1} + {d2}) * {multiplier}");
                utility_rent(d1 + d2, owned)
            }
            _ => return,
        };
        info!(
            "{} needs to pay {rent} to {}",
            self.players().player(payer).name,
            self.players().player(owner).name
        );
        self.players_mut().transfer(Some(payer), Some(owner), rent);
    }

    /// Make `id` the owner of the space at `position`, updating the
    /// board-wide station/utility counters used for rent.
    pub(crate) fn grant_ownership(&mut self, id: PlayerId, position: usize) {
        self.space_mut(position).set_owner(Some(id));
        match &self.space(position).kind {
            SpaceKind::Station { .. } => self.players_mut().player_mut(id).stations_owned += 1,
            SpaceKind::Utility { .. } => self.players_mut().player_mut(id).utilities_owned += 1,
            _ => {}
        }
    }
}
