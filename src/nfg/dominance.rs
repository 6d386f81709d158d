//! Dominant strategies.
//!
//! Both tests run on the player's best-response set:
//!
//! - **Strict**: one strategy is the only best response against every
//!   opponent combination.
//! - **Weak**: a strategy is among the best responses against every
//!   opponent combination (ties allowed). Several strategies can be weakly
//!   dominant at once.

use serde::Serialize;

use crate::nfg::best_response::best_responses;
use crate::nfg::error::GameResult;
use crate::nfg::profile::{opponent_combinations, Strategy};
use crate::nfg::tensor::PayoffTensor;

/// Outcome of the dominance test for one player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "strategies", rename_all = "snake_case")]
pub enum Dominance {
    /// The strategy is the unique best response everywhere.
    Strict(Strategy),
    /// Each strategy is a best response everywhere, possibly tied.
    Weak(Vec<Strategy>),
    /// No strategy is always a best response.
    None,
}

impl Dominance {
    /// Whether a strictly dominant strategy exists.
    pub fn is_strict(&self) -> bool {
        matches!(self, Dominance::Strict(_))
    }

    /// Whether weakly (but not strictly) dominant strategies exist.
    pub fn is_weak(&self) -> bool {
        matches!(self, Dominance::Weak(_))
    }

    /// The dominant strategies, empty for [`Dominance::None`].
    pub fn strategies(&self) -> Vec<Strategy> {
        match self {
            Dominance::Strict(s) => vec![*s],
            Dominance::Weak(strategies) => strategies.clone(),
            Dominance::None => Vec::new(),
        }
    }
}

impl std::fmt::Display for Dominance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dominance::Strict(s) => write!(f, "strictly dominant strategy {}", s),
            Dominance::Weak(strategies) => write!(f, "weakly dominant strategies {:?}", strategies),
            Dominance::None => write!(f, "no dominant strategy"),
        }
    }
}

/// Find strictly or weakly dominant strategies of `player`.
pub fn dominant_strategies(tensor: &PayoffTensor, player: usize) -> GameResult<Dominance> {
    let responses = best_responses(tensor, player, None)?;

    // Every context has at least one best response, so this is non-empty.
    let first = responses[0][player];
    if responses.iter().all(|profile| profile[player] == first) {
        return Ok(Dominance::Strict(first));
    }

    let mut appearances = vec![0usize; tensor.strategy_counts()[player]];
    for profile in &responses {
        appearances[profile[player]] += 1;
    }

    let contexts = opponent_combinations(tensor.strategy_counts(), player);
    let weak: Vec<Strategy> = appearances
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == contexts)
        .map(|(strategy, _)| strategy)
        .collect();

    log::debug!(
        "player {}: best-response counts {:?} over {} contexts",
        player,
        appearances,
        contexts
    );

    if weak.is_empty() {
        Ok(Dominance::None)
    } else {
        Ok(Dominance::Weak(weak))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nfg::error::GameError;

    fn prisoners() -> PayoffTensor {
        PayoffTensor::new(vec![2, 2], vec![3, 0, 5, 1, 3, 5, 0, 1]).unwrap()
    }

    #[test]
    fn test_prisoners_strictly_dominant_defect() {
        let tensor = prisoners();
        for player in 0..2 {
            let dominance = dominant_strategies(&tensor, player).unwrap();
            assert_eq!(dominance, Dominance::Strict(1));
            assert!(dominance.is_strict());
            assert!(!dominance.is_weak());
            assert_eq!(dominance.strategies(), vec![1]);
        }
    }

    #[test]
    fn test_weak_dominance() {
        // row 0 ties row 1 against column 0, beats it against column 1
        let tensor = PayoffTensor::new(vec![2, 2], vec![1, 2, 1, 0, 0, 0, 0, 0]).unwrap();
        let dominance = dominant_strategies(&tensor, 0).unwrap();
        assert_eq!(dominance, Dominance::Weak(vec![0]));
        assert!(!dominance.is_strict());
        assert!(dominance.is_weak());
    }

    #[test]
    fn test_all_tied_is_weak_for_every_strategy() {
        let tensor = PayoffTensor::new(vec![3, 2], vec![0; 12]).unwrap();
        assert_eq!(
            dominant_strategies(&tensor, 0).unwrap(),
            Dominance::Weak(vec![0, 1, 2])
        );
    }

    #[test]
    fn test_matching_pennies_has_none() {
        let tensor = PayoffTensor::new(vec![2, 2], vec![1, -1, -1, 1, -1, 1, 1, -1]).unwrap();
        for player in 0..2 {
            let dominance = dominant_strategies(&tensor, player).unwrap();
            assert_eq!(dominance, Dominance::None);
            assert!(dominance.strategies().is_empty());
        }
    }

    #[test]
    fn test_single_strategy_is_strict() {
        let tensor = PayoffTensor::new(vec![1, 3], vec![4, 5, 6, 0, 0, 0]).unwrap();
        assert_eq!(dominant_strategies(&tensor, 0).unwrap(), Dominance::Strict(0));
    }

    #[test]
    fn test_three_players() {
        // player 2's payoff is its own strategy index, whatever the others do
        let mut payoffs = vec![0; 16];
        payoffs.extend((0..8).map(|i| (i % 2) as i64));
        let tensor = PayoffTensor::new(vec![2, 2, 2], payoffs).unwrap();
        assert_eq!(dominant_strategies(&tensor, 2).unwrap(), Dominance::Strict(1));
        assert_eq!(
            dominant_strategies(&tensor, 0).unwrap(),
            Dominance::Weak(vec![0, 1])
        );
    }

    #[test]
    fn test_player_out_of_range() {
        assert!(matches!(
            dominant_strategies(&prisoners(), 5),
            Err(GameError::PlayerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_serializes_tagged() {
        let json = serde_json::to_string(&Dominance::Weak(vec![0, 2])).unwrap();
        assert_eq!(json, r#"{"kind":"weak","strategies":[0,2]}"#);
    }
}
