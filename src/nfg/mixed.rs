//! Mixed Nash equilibria of two-player games with 2 or 3 strategies each.
//!
//! # 2×2
//!
//! Each player mixes so that the opponent is indifferent between its two
//! strategies. On player `i`'s own payoffs `a`:
//!
//! ```text
//! q = (a₂₂ − a_{i,1−i}) / (a₁₁ + a₂₂ − a₁₂ − a₂₁)
//! ```
//!
//! is the probability the opponent puts on its first strategy. A zero
//! denominator or `q` outside `[0, 1]` means no fully mixed equilibrium.
//!
//! # 3×3
//!
//! The indifference conditions between consecutive opponent strategies
//! give a 2×2 linear system in the mixer's first two probabilities; the
//! third is `1 − p₁ − p₂`. If either player's system is singular or its
//! solution is not a distribution, every pair of 2-strategy supports is
//! tried with the 2×2 formula and the first success is returned.

use itertools::Itertools;
use serde::Serialize;

use crate::nfg::config::SolverConfig;
use crate::nfg::error::{GameError, GameResult};
use crate::nfg::profile::Strategy;
use crate::nfg::tensor::PayoffTensor;

/// One probability distribution per player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MixedEquilibrium {
    /// `strategies[p][s]` is the probability that player `p` plays `s`.
    pub strategies: [Vec<f64>; 2],
}

impl MixedEquilibrium {
    /// Distribution of `player`.
    pub fn strategy(&self, player: usize) -> &[f64] {
        &self.strategies[player]
    }

    /// Expected payoff of each player when both mix.
    pub fn expected_payoffs(&self, tensor: &PayoffTensor) -> [f64; 2] {
        let mut values = [0.0; 2];
        for (r, &x) in self.strategies[0].iter().enumerate() {
            for (c, &y) in self.strategies[1].iter().enumerate() {
                for (player, value) in values.iter_mut().enumerate() {
                    *value += x * y * tensor.payoff(player, &[r, c]) as f64;
                }
            }
        }
        values
    }

    /// Largest gain any player could get by switching to a pure strategy.
    ///
    /// Zero (up to rounding) for a genuine equilibrium.
    pub fn max_regret(&self, tensor: &PayoffTensor) -> f64 {
        let expected = self.expected_payoffs(tensor);
        let counts = tensor.strategy_counts();

        let best_row = (0..counts[0])
            .map(|r| {
                self.strategies[1]
                    .iter()
                    .enumerate()
                    .map(|(c, &y)| y * tensor.payoff(0, &[r, c]) as f64)
                    .sum::<f64>()
            })
            .fold(f64::NEG_INFINITY, f64::max);
        let best_col = (0..counts[1])
            .map(|c| {
                self.strategies[0]
                    .iter()
                    .enumerate()
                    .map(|(r, &x)| x * tensor.payoff(1, &[r, c]) as f64)
                    .sum::<f64>()
            })
            .fold(f64::NEG_INFINITY, f64::max);

        (best_row - expected[0]).max(best_col - expected[1]).max(0.0)
    }
}

impl std::fmt::Display for MixedEquilibrium {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (player, dist) in self.strategies.iter().enumerate() {
            if player > 0 {
                write!(f, ", ")?;
            }
            let probs: Vec<String> = dist.iter().map(|p| format!("{:.4}", p)).collect();
            write!(f, "player {}: [{}]", player, probs.join(", "))?;
        }
        Ok(())
    }
}

/// Result of solving a 2×2 linear system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinearSolution {
    /// The unique solution.
    Solved([f64; 2]),
    /// The determinant is zero (within tolerance).
    Singular,
}

/// Solve `a · x = b` by Cramer's rule.
pub fn solve_linear_2x2(a: [[f64; 2]; 2], b: [f64; 2], tolerance: f64) -> LinearSolution {
    let det = a[0][0] * a[1][1] - a[0][1] * a[1][0];
    if det.abs() <= tolerance {
        return LinearSolution::Singular;
    }
    LinearSolution::Solved([
        (b[0] * a[1][1] - a[0][1] * b[1]) / det,
        (a[0][0] * b[1] - b[0] * a[1][0]) / det,
    ])
}

/// Result of solving one player's 3-strategy indifference system.
#[derive(Debug, Clone, PartialEq)]
pub enum Indifference {
    /// A distribution over the mixer's three strategies.
    Mixed(Vec<f64>),
    /// The system has a solution but it is not a distribution.
    Infeasible([f64; 2]),
    /// The system has no unique solution.
    Singular,
}

/// Mixed Nash equilibrium of a 2×2 or 3×3 two-player game.
///
/// `Ok(None)` means no equilibrium was found by these methods; it is not an
/// error.
///
/// # Errors
/// [`GameError::UnsupportedPlayerCount`] unless the game has two players,
/// [`GameError::UnsupportedStrategyCount`] unless both players have 2 or
/// both have 3 strategies.
pub fn mixed_nash(
    tensor: &PayoffTensor,
    config: &SolverConfig,
) -> GameResult<Option<MixedEquilibrium>> {
    if tensor.num_players() != 2 {
        return Err(GameError::UnsupportedPlayerCount {
            expected: 2,
            found: tensor.num_players(),
        });
    }
    match tensor.strategy_counts() {
        [2, 2] => Ok(mixed_nash_2x2(tensor, config.tolerance)),
        [3, 3] => mixed_nash_3x3(tensor, config.tolerance),
        counts => Err(GameError::UnsupportedStrategyCount(counts.to_vec())),
    }
}

/// Closed-form 2×2 equilibrium. The tensor must be 2×2.
fn mixed_nash_2x2(tensor: &PayoffTensor, tolerance: f64) -> Option<MixedEquilibrium> {
    let mut strategies: [Vec<f64>; 2] = [Vec::new(), Vec::new()];

    for player in 0..2 {
        // widened so sums of four payoffs cannot overflow
        let g = |r: usize, c: usize| i128::from(tensor.payoff(player, &[r, c]));
        let numerator = g(1, 1) - if player == 0 { g(0, 1) } else { g(1, 0) };
        let denominator = g(0, 0) + g(1, 1) - g(1, 0) - g(0, 1);
        if denominator == 0 {
            log::trace!("2x2: player {} has zero denominator", player);
            return None;
        }

        let q = numerator as f64 / denominator as f64;
        if q < -tolerance || q > 1.0 + tolerance {
            log::trace!("2x2: player {} needs opponent probability {}", player, q);
            return None;
        }
        let q = q.clamp(0.0, 1.0);
        strategies[1 - player] = vec![q, 1.0 - q];
    }

    Some(MixedEquilibrium { strategies })
}

/// Solve the indifference system that makes `mixer`'s opponent indifferent
/// between all three of its strategies. The tensor must be 3×3.
pub fn indifference_3x3(tensor: &PayoffTensor, mixer: usize, tolerance: f64) -> Indifference {
    let opponent = 1 - mixer;
    // opponent's payoff when the mixer plays `own` and the opponent `other`
    let u = |own: usize, other: usize| {
        let profile = if mixer == 0 { [own, other] } else { [other, own] };
        tensor.payoff(opponent, &profile) as f64
    };

    let mut a = [[0.0; 2]; 2];
    let mut b = [0.0; 2];
    for j in 0..2 {
        let d: Vec<f64> = (0..3).map(|k| u(k, j) - u(k, j + 1)).collect();
        a[j] = [d[0] - d[2], d[1] - d[2]];
        b[j] = -d[2];
    }

    match solve_linear_2x2(a, b, tolerance) {
        LinearSolution::Singular => Indifference::Singular,
        LinearSolution::Solved([p0, p1]) => {
            if p0 < -tolerance || p1 < -tolerance || p0 + p1 > 1.0 + tolerance {
                return Indifference::Infeasible([p0, p1]);
            }
            let p0 = p0.max(0.0);
            let p1 = p1.max(0.0);
            Indifference::Mixed(vec![p0, p1, (1.0 - p0 - p1).max(0.0)])
        }
    }
}

fn mixed_nash_3x3(tensor: &PayoffTensor, tolerance: f64) -> GameResult<Option<MixedEquilibrium>> {
    match (
        indifference_3x3(tensor, 0, tolerance),
        indifference_3x3(tensor, 1, tolerance),
    ) {
        (Indifference::Mixed(x), Indifference::Mixed(y)) => {
            return Ok(Some(MixedEquilibrium { strategies: [x, y] }))
        }
        (x, y) => log::debug!(
            "3x3 full support failed ({:?}, {:?}), enumerating 2-strategy supports",
            x,
            y
        ),
    }

    let supports: Vec<Vec<Strategy>> = (0..3).combinations(2).collect();
    for (rows, cols) in supports.iter().cartesian_product(&supports) {
        let sub = tensor.restrict(&[rows.clone(), cols.clone()])?;
        if let Some(found) = mixed_nash_2x2(&sub, tolerance) {
            log::debug!("3x3 equilibrium on supports {:?} x {:?}", rows, cols);
            return Ok(Some(MixedEquilibrium {
                strategies: [embed(&found.strategies[0], rows), embed(&found.strategies[1], cols)],
            }));
        }
    }
    Ok(None)
}

/// Spread probabilities over a support inside a 3-strategy distribution.
fn embed(probabilities: &[f64], support: &[Strategy]) -> Vec<f64> {
    let mut full = vec![0.0; 3];
    for (&p, &s) in probabilities.iter().zip(support) {
        full[s] = p;
    }
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    /// Two-player tensor from row-major matrices.
    fn bimatrix(a: &[&[i64]], b: &[&[i64]]) -> PayoffTensor {
        let counts = vec![a.len(), a[0].len()];
        let payoffs = a.iter().chain(b).flat_map(|row| row.iter().copied()).collect();
        PayoffTensor::new(counts, payoffs).unwrap()
    }

    fn assert_dist(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!((a - e).abs() < EPS, "{:?} != {:?}", actual, expected);
        }
    }

    fn solve(tensor: &PayoffTensor) -> Option<MixedEquilibrium> {
        mixed_nash(tensor, &SolverConfig::default()).unwrap()
    }

    #[test]
    fn test_matching_pennies() {
        let tensor = bimatrix(&[&[1, -1], &[-1, 1]], &[&[-1, 1], &[1, -1]]);
        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[0.5, 0.5]);
        assert_dist(eq.strategy(1), &[0.5, 0.5]);
        assert!(eq.max_regret(&tensor) < EPS);
        assert!(eq.expected_payoffs(&tensor)[0].abs() < EPS);
    }

    #[test]
    fn test_battle_of_the_sexes_assigns_each_player_its_own_mix() {
        let tensor = bimatrix(&[&[2, 0], &[0, 1]], &[&[1, 0], &[0, 2]]);
        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[2.0 / 3.0, 1.0 / 3.0]);
        assert_dist(eq.strategy(1), &[1.0 / 3.0, 2.0 / 3.0]);
        assert!(eq.max_regret(&tensor) < EPS);
    }

    #[test]
    fn test_prisoners_dilemma_has_no_mixed() {
        let tensor = bimatrix(&[&[3, 0], &[5, 1]], &[&[3, 5], &[0, 1]]);
        assert_eq!(solve(&tensor), None);
    }

    #[test]
    fn test_zero_denominator() {
        let tensor = bimatrix(&[&[1, 1], &[1, 1]], &[&[0, 1], &[1, 0]]);
        assert_eq!(solve(&tensor), None);
    }

    #[test]
    fn test_rock_paper_scissors_uniform() {
        let a: &[&[i64]] = &[&[0, -1, 1], &[1, 0, -1], &[-1, 1, 0]];
        let b: &[&[i64]] = &[&[0, 1, -1], &[-1, 0, 1], &[1, -1, 0]];
        let tensor = bimatrix(a, b);
        match indifference_3x3(&tensor, 0, 1e-9) {
            Indifference::Mixed(p) => assert_dist(&p, &[1.0 / 3.0; 3]),
            other => panic!("expected a distribution, got {:?}", other),
        }
        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[1.0 / 3.0; 3]);
        assert_dist(eq.strategy(1), &[1.0 / 3.0; 3]);
        assert!(eq.max_regret(&tensor) < EPS);
    }

    #[test]
    fn test_three_way_coordination() {
        let m: &[&[i64]] = &[&[3, 0, 0], &[0, 2, 0], &[0, 0, 1]];
        let eq = solve(&bimatrix(m, m)).unwrap();
        let expected = [2.0 / 11.0, 3.0 / 11.0, 6.0 / 11.0];
        assert_dist(eq.strategy(0), &expected);
        assert_dist(eq.strategy(1), &expected);
    }

    #[test]
    fn test_singular_system_falls_back_to_support() {
        // matching pennies padded with an all-zero strategy
        let a: &[&[i64]] = &[&[1, -1, 0], &[-1, 1, 0], &[0, 0, 0]];
        let b: &[&[i64]] = &[&[-1, 1, 0], &[1, -1, 0], &[0, 0, 0]];
        let tensor = bimatrix(a, b);
        assert_eq!(indifference_3x3(&tensor, 0, 1e-9), Indifference::Singular);

        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[0.5, 0.5, 0.0]);
        assert_dist(eq.strategy(1), &[0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_infeasible_system_falls_back_to_support() {
        let a: &[&[i64]] = &[&[3, 1, 0], &[0, 2, 1], &[-1, -1, -1]];
        let b: &[&[i64]] = &[&[1, 0, 2], &[0, 3, 1], &[2, 2, 0]];
        let tensor = bimatrix(a, b);
        assert_dist(
            match &indifference_3x3(&tensor, 1, 1e-9) {
                Indifference::Infeasible(p) => p,
                other => panic!("expected infeasible, got {:?}", other),
            },
            &[0.25, -1.75],
        );

        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[0.75, 0.25, 0.0]);
        assert_dist(eq.strategy(1), &[0.25, 0.75, 0.0]);
    }

    #[test]
    fn test_fallback_embeds_support_without_first_strategy() {
        // battle of the sexes on strategies {1, 2}, strategy 0 always costs 5
        let a: &[&[i64]] = &[&[-5, -5, -5], &[0, 2, 0], &[0, 0, 1]];
        let b: &[&[i64]] = &[&[-5, 0, 0], &[-5, 1, 0], &[-5, 0, 2]];
        let tensor = bimatrix(a, b);
        assert!(matches!(
            indifference_3x3(&tensor, 0, 1e-9),
            Indifference::Infeasible(_)
        ));

        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[0.0, 2.0 / 3.0, 1.0 / 3.0]);
        assert_dist(eq.strategy(1), &[0.0, 1.0 / 3.0, 2.0 / 3.0]);
        assert!(eq.max_regret(&tensor) < 1e-9);
    }

    #[test]
    fn test_extreme_payoffs_do_not_overflow() {
        let m = i64::MAX;
        let tensor = bimatrix(&[&[m, 0], &[0, m]], &[&[0, m], &[m, 0]]);
        let eq = solve(&tensor).unwrap();
        assert_dist(eq.strategy(0), &[0.5, 0.5]);
        assert_dist(eq.strategy(1), &[0.5, 0.5]);

        let low = bimatrix(&[&[i64::MIN, m], &[m, i64::MIN]], &[&[0, 0], &[0, 0]]);
        assert_eq!(solve(&low), None);
    }

    #[test]
    fn test_no_solution_under_any_support() {
        // both players' payoffs depend only on their own strategy
        let a: &[&[i64]] = &[&[0, 0, 0], &[1, 1, 1], &[2, 2, 2]];
        let b: &[&[i64]] = &[&[0, 1, 2], &[0, 1, 2], &[0, 1, 2]];
        assert_eq!(solve(&bimatrix(a, b)), None);
    }

    #[test]
    fn test_linear_solver() {
        assert_eq!(
            solve_linear_2x2([[2.0, 0.0], [0.0, 4.0]], [1.0, 1.0], 1e-9),
            LinearSolution::Solved([0.5, 0.25])
        );
        assert_eq!(
            solve_linear_2x2([[1.0, 2.0], [2.0, 4.0]], [1.0, 1.0], 1e-9),
            LinearSolution::Singular
        );
    }

    #[test]
    fn test_unsupported_shapes() {
        let three_players = PayoffTensor::new(vec![2, 2, 2], vec![0; 24]).unwrap();
        assert_eq!(
            mixed_nash(&three_players, &SolverConfig::default()),
            Err(GameError::UnsupportedPlayerCount {
                expected: 2,
                found: 3
            })
        );

        let uneven = PayoffTensor::new(vec![2, 3], vec![0; 12]).unwrap();
        assert_eq!(
            mixed_nash(&uneven, &SolverConfig::default()),
            Err(GameError::UnsupportedStrategyCount(vec![2, 3]))
        );

        let big = PayoffTensor::new(vec![4, 4], vec![0; 32]).unwrap();
        assert!(matches!(
            mixed_nash(&big, &SolverConfig::default()),
            Err(GameError::UnsupportedStrategyCount(_))
        ));
    }
}
