//! Best-response enumeration.
//!
//! For a target player, every combination of the opponents' strategies is
//! visited once; at each one the target's payoff-maximizing strategies are
//! collected (all of them when tied). The result is the set of full
//! profiles at which the target is best-responding.

use rustc_hash::FxHashSet;

use crate::nfg::error::GameResult;
use crate::nfg::profile::{opponent_contexts, Profile, Strategy};
use crate::nfg::tensor::PayoffTensor;

/// The target's best strategies with the opponents fixed by `context`.
///
/// `context[player]` is ignored. Payoffs are compared exactly, so ties
/// return several strategies, in increasing order.
pub fn best_strategies(tensor: &PayoffTensor, player: usize, context: &[Strategy]) -> Vec<Strategy> {
    let mut profile = context.to_vec();
    let mut best = Vec::new();
    let mut max = None;

    for strategy in 0..tensor.strategy_counts()[player] {
        profile[player] = strategy;
        let payoff = tensor.payoff(player, &profile);
        match max {
            Some(m) if payoff < m => {}
            Some(m) if payoff == m => best.push(strategy),
            _ => {
                max = Some(payoff);
                best.clear();
                best.push(strategy);
            }
        }
    }
    best
}

/// Every profile at which `player` is playing a best response.
///
/// With `prior = Some(set)` only profiles also contained in `set` are kept;
/// with `None` every best-response profile is returned. Profiles come out
/// grouped by opponent combination in lexicographic order.
pub fn best_responses(
    tensor: &PayoffTensor,
    player: usize,
    prior: Option<&[Profile]>,
) -> GameResult<Vec<Profile>> {
    tensor.check_player(player)?;

    let allowed: Option<FxHashSet<&[Strategy]>> =
        prior.map(|set| set.iter().map(Vec::as_slice).collect());

    let mut responses = Vec::new();
    for mut context in opponent_contexts(tensor.strategy_counts(), player) {
        for strategy in best_strategies(tensor, player, &context) {
            context[player] = strategy;
            let keep = allowed
                .as_ref()
                .map_or(true, |set| set.contains(context.as_slice()));
            if keep {
                responses.push(context.clone());
            }
        }
    }

    log::trace!(
        "player {} has {} best-response profiles (prior: {:?})",
        player,
        responses.len(),
        prior.map(<[Profile]>::len)
    );
    Ok(responses)
}
