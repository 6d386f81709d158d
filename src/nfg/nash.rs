//! Pure-strategy Nash equilibria.
//!
//! A profile is an equilibrium when it is a best response for every
//! player, so the equilibria are the intersection of all players'
//! best-response sets. The sequential finder threads the running
//! intersection through [`best_responses`] as its prior; the parallel one
//! computes every set independently and intersects once at the end.

use rayon::prelude::*;
use rustc_hash::FxHashSet;

use crate::nfg::best_response::{best_responses, best_strategies};
use crate::nfg::config::SolverConfig;
use crate::nfg::error::GameResult;
use crate::nfg::profile::{Profile, Strategy};
use crate::nfg::tensor::PayoffTensor;

/// Every pure-strategy Nash equilibrium of the game.
///
/// An empty result means the game has no pure equilibrium.
///
/// # Example
/// ```
/// use strategic_solver::games::classic;
/// use strategic_solver::nfg::{pure_nash, PayoffTensor};
///
/// let tensor = PayoffTensor::from_table(&classic::prisoners_dilemma());
/// assert_eq!(pure_nash(&tensor).unwrap(), vec![vec![1, 1]]);
/// ```
pub fn pure_nash(tensor: &PayoffTensor) -> GameResult<Vec<Profile>> {
    let mut running: Option<Vec<Profile>> = None;
    for player in 0..tensor.num_players() {
        let next = best_responses(tensor, player, running.as_deref())?;
        log::debug!("after player {}: {} candidate profiles", player, next.len());
        running = Some(next);
    }
    Ok(running.unwrap_or_default())
}

/// [`pure_nash`], optionally computing the per-player best-response sets on
/// the rayon pool when `config.parallel` is set.
///
/// Both paths return the same profiles in the same order.
pub fn pure_nash_with(tensor: &PayoffTensor, config: &SolverConfig) -> GameResult<Vec<Profile>> {
    if !config.parallel || tensor.num_players() < 2 {
        return pure_nash(tensor);
    }

    let sets = (0..tensor.num_players())
        .into_par_iter()
        .map(|player| best_responses(tensor, player, None))
        .collect::<GameResult<Vec<_>>>()?;

    Ok(intersect_in_order(&sets))
}

/// Profiles of the last set that appear in every other set, in the last
/// set's order.
fn intersect_in_order(sets: &[Vec<Profile>]) -> Vec<Profile> {
    let Some((last, rest)) = sets.split_last() else {
        return Vec::new();
    };
    let lookups: Vec<FxHashSet<&[Strategy]>> = rest
        .iter()
        .map(|set| set.iter().map(Vec::as_slice).collect())
        .collect();

    last.iter()
        .filter(|profile| lookups.iter().all(|set| set.contains(profile.as_slice())))
        .cloned()
        .collect()
}

/// Whether no player can gain by deviating alone from `profile`.
pub fn is_pure_nash(tensor: &PayoffTensor, profile: &[Strategy]) -> bool {
    (0..tensor.num_players())
        .all(|player| best_strategies(tensor, player, profile).contains(&profile[player]))
}
