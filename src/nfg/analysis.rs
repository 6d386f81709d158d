//! Full analysis report for one game.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::nfg::config::SolverConfig;
use crate::nfg::dominance::{dominant_strategies, Dominance};
use crate::nfg::error::{GameError, GameResult};
use crate::nfg::mixed::{mixed_nash, MixedEquilibrium};
use crate::nfg::nash::pure_nash_with;
use crate::nfg::pareto::pareto_optimal;
use crate::nfg::profile::Profile;
use crate::nfg::security::security_levels;
use crate::nfg::table::{Payoff, PayoffTable};
use crate::nfg::tensor::PayoffTensor;
use crate::nfg::zero_sum::{value_bounds, SaddleBounds};

/// Every solution concept computed for one payoff table.
///
/// Analyses that do not apply to the game's shape (mixed equilibria beyond
/// 3×3, zero-sum bounds for more than two players) are `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameAnalysis {
    /// Strategy count of every player.
    pub strategy_counts: Vec<usize>,
    /// Pure-strategy Nash equilibria.
    pub pure_nash: Vec<Profile>,
    /// Dominance result per player.
    pub dominance: Vec<Dominance>,
    /// Pareto-optimal profiles, in table order.
    pub pareto_optimal: Vec<Profile>,
    /// Security level per player.
    pub security_levels: Vec<Payoff>,
    /// Mixed equilibrium of a 2×2 or 3×3 game, if one was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixed: Option<MixedEquilibrium>,
    /// Maximin/minimax of player 0 in a two-player game.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zero_sum: Option<SaddleBounds>,
}

impl GameAnalysis {
    /// Run every analysis on `table`.
    pub fn run(table: &PayoffTable, config: &SolverConfig) -> GameResult<Self> {
        let tensor = PayoffTensor::from_table(table);

        let pure_nash = pure_nash_with(&tensor, config)?;
        let dominance = (0..tensor.num_players())
            .map(|player| dominant_strategies(&tensor, player))
            .collect::<GameResult<Vec<_>>>()?;

        let mixed = shape_dependent(mixed_nash(&tensor, config))?.flatten();
        let zero_sum = shape_dependent(value_bounds(&tensor))?;

        Ok(Self {
            strategy_counts: tensor.strategy_counts().to_vec(),
            pure_nash,
            dominance,
            pareto_optimal: pareto_optimal(table),
            security_levels: security_levels(table)?,
            mixed,
            zero_sum,
        })
    }

    /// Zero-sum value, when maximin and minimax meet.
    pub fn game_value(&self) -> Option<Payoff> {
        self.zero_sum.and_then(|bounds| bounds.value())
    }

    /// Write the report as pretty-printed JSON.
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}

/// Turn "wrong shape for this analysis" into `None`, keep other errors.
fn shape_dependent<T>(result: GameResult<T>) -> GameResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(GameError::UnsupportedPlayerCount { .. } | GameError::UnsupportedStrategyCount(_)) => {
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

impl std::fmt::Display for GameAnalysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Strategy counts: {:?}", self.strategy_counts)?;
        writeln!(f)?;

        if self.pure_nash.is_empty() {
            writeln!(f, "Pure Nash equilibria: none")?;
        } else {
            writeln!(f, "Pure Nash equilibria ({}):", self.pure_nash.len())?;
            for profile in &self.pure_nash {
                writeln!(f, "  {:?}", profile)?;
            }
        }

        writeln!(f, "Dominance:")?;
        for (player, dominance) in self.dominance.iter().enumerate() {
            writeln!(f, "  player {}: {}", player, dominance)?;
        }

        writeln!(f, "Pareto optimal ({}):", self.pareto_optimal.len())?;
        for profile in &self.pareto_optimal {
            writeln!(f, "  {:?}", profile)?;
        }

        writeln!(f, "Security levels: {:?}", self.security_levels)?;

        match &self.mixed {
            Some(eq) => writeln!(f, "Mixed equilibrium: {}", eq)?,
            None => writeln!(f, "Mixed equilibrium: none found or not applicable")?,
        }

        match self.zero_sum {
            Some(bounds) => match bounds.value() {
                Some(v) => writeln!(f, "Zero-sum value: {}", v)?,
                None => writeln!(
                    f,
                    "Zero-sum value: none (maximin {} < minimax {})",
                    bounds.maximin, bounds.minimax
                )?,
            },
            None => writeln!(f, "Zero-sum value: not applicable")?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::classic;

    #[test]
    fn test_prisoners_dilemma_report() {
        let report = GameAnalysis::run(&classic::prisoners_dilemma(), &SolverConfig::default())
            .unwrap();
        assert_eq!(report.strategy_counts, vec![2, 2]);
        assert_eq!(report.pure_nash, vec![vec![1, 1]]);
        assert_eq!(report.dominance, vec![Dominance::Strict(1), Dominance::Strict(1)]);
        assert!(!report.pareto_optimal.contains(&vec![1, 1]));
        assert_eq!(report.security_levels, vec![1, 1]);
        assert_eq!(report.mixed, None);
        assert!(report.zero_sum.is_some());
    }

    #[test]
    fn test_matching_pennies_report() {
        let report = GameAnalysis::run(&classic::matching_pennies(), &SolverConfig::default())
            .unwrap();
        assert!(report.pure_nash.is_empty());
        let mixed = report.mixed.as_ref().unwrap();
        assert!((mixed.strategy(0)[0] - 0.5).abs() < 1e-12);
        assert_eq!(report.game_value(), None);
    }

    #[test]
    fn test_three_players_skips_two_player_analyses() {
        let report = GameAnalysis::run(&classic::three_way_coordination(), &SolverConfig::default())
            .unwrap();
        assert_eq!(report.pure_nash, vec![vec![0, 0, 0], vec![1, 1, 1]]);
        assert_eq!(report.mixed, None);
        assert_eq!(report.zero_sum, None);
        assert_eq!(report.dominance.len(), 3);
    }

    #[test]
    fn test_display_and_json() {
        let report = GameAnalysis::run(&classic::matching_pennies(), &SolverConfig::default())
            .unwrap();
        let text = report.to_string();
        assert!(text.contains("Pure Nash equilibria: none"));
        assert!(text.contains("maximin -1 < minimax 1"));

        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strategy_counts"], serde_json::json!([2, 2]));
        assert_eq!(json["zero_sum"]["minimax"], 1);
        assert_eq!(json["dominance"][0]["kind"], "none");
    }
}
