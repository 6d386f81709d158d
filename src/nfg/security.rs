//! Security (maximin) levels.
//!
//! A player's security level is the best payoff they can guarantee
//! whatever the others do: for each of their strategies take the worst row
//! using it, then the best of those minimums. Only rows present in the
//! table are considered.

use crate::nfg::error::{GameError, GameResult, TableError};
use crate::nfg::table::{Payoff, PayoffTable};

/// Security level of `player`.
pub fn security_level(table: &PayoffTable, player: usize) -> GameResult<Payoff> {
    if player >= table.num_players() {
        return Err(GameError::PlayerOutOfRange {
            player,
            num_players: table.num_players(),
        });
    }

    let mut worst: Vec<Option<Payoff>> = vec![None; table.strategy_counts()[player]];
    for row in table.rows() {
        let slot = &mut worst[row.profile[player]];
        let payoff = row.payoffs[player];
        *slot = Some(slot.map_or(payoff, |w| w.min(payoff)));
    }

    // A validated table has at least one row, so some strategy appears.
    worst
        .into_iter()
        .flatten()
        .max()
        .ok_or(GameError::MalformedTable(TableError::NoProfiles))
}

/// Security level of every player, in player order.
pub fn security_levels(table: &PayoffTable) -> GameResult<Vec<Payoff>> {
    (0..table.num_players())
        .map(|player| security_level(table, player))
        .collect()
}
