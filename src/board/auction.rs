//! Auctioning declined spaces.

use std::collections::VecDeque;

use tracing::{error, info};

use super::BoardManager;
use crate::io::Prompter;

impl BoardManager {
    /// Auction the space at `position` among all active players.
    ///
    /// Elimination queue: each bidder in turn either raises (any amount
    /// from one over the current bid up to one under their cash, keeping
    /// them solvent) or drops out; a bidder who cannot raise is dropped
    /// automatically. The last player standing pays the final bid, which
    /// is zero when everyone declined.
    pub fn auction(&mut self, position: usize, label: &str, io: &mut dyn Prompter) {
        info!("You decided not to buy this {label} and it will now be auctioned");
        let mut bidders: VecDeque<_> = self.players().roster().iter().copied().collect();
        let mut bid: i64 = 0;

        while bidders.len() > 1 {
            let Some(bidder) = bidders.pop_front() else {
                break;
            };
            let (name, money) = {
                let player = self.players().player(bidder);
                (player.name.clone(), player.money)
            };
            info!("It is {name}'s turn to bid.");
            if money - 1 <= bid {
                info!("{name} doesn't have enough money to bid and is out of the auction");
            } else if io.yes_no(&format!("Do you want to bid on this {label}? [y/n]")) {
                bid = io.number("How much do you want to bid?", bid + 1, money - 1);
                info!("{name} is now the highest bidder with a bid of {bid}");
                bidders.push_back(bidder);
            } else {
                info!("{name} decided not to bid and is out of the auction");
            }
        }

        let Some(winner) = bidders.front().copied() else {
            error!("auction ended with no remaining bidder");
            return;
        };
        info!(
            "{} won the auction with a bid of {bid}",
            self.players().player(winner).name
        );
        self.players_mut().transfer(Some(winner), None, bid);
        self.grant_ownership(winner, position);
        info!(
            "{} now owns this {label}",
            self.players().player(winner).name
        );
    }
}
