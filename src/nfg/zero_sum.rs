//! Value of two-player zero-sum games in pure strategies.
//!
//! Only player 0's payoffs are read; player 1 is assumed to receive their
//! negation. The game has a value when the row player's maximin equals the
//! column player's minimax, i.e. there is a saddle point.

use serde::Serialize;

use crate::nfg::error::{GameError, GameResult};
use crate::nfg::table::Payoff;
use crate::nfg::tensor::PayoffTensor;

/// Pure-strategy bounds on the value of a zero-sum game.
///
/// `maximin <= minimax` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SaddleBounds {
    /// Best worst-case row payoff.
    pub maximin: Payoff,
    /// Worst best-case column payoff.
    pub minimax: Payoff,
}

impl SaddleBounds {
    /// The value, if the bounds meet.
    pub fn value(&self) -> Option<Payoff> {
        (self.maximin == self.minimax).then_some(self.maximin)
    }
}

/// Maximin and minimax of player 0's payoff matrix.
pub fn value_bounds(tensor: &PayoffTensor) -> GameResult<SaddleBounds> {
    if tensor.num_players() != 2 {
        return Err(GameError::UnsupportedPlayerCount {
            expected: 2,
            found: tensor.num_players(),
        });
    }
    let matrix = tensor.matrix(0)?;
    let cols = tensor.strategy_counts()[1];

    let maximin = matrix.iter().filter_map(|row| row.iter().min().copied()).max();
    let minimax = (0..cols)
        .filter_map(|c| matrix.iter().map(|row| row[c]).max())
        .min();

    // Strategy counts are at least 1, so both exist.
    match (maximin, minimax) {
        (Some(maximin), Some(minimax)) => Ok(SaddleBounds { maximin, minimax }),
        _ => Err(GameError::UnsupportedStrategyCount(
            tensor.strategy_counts().to_vec(),
        )),
    }
}

/// Value of the game when maximin equals minimax, otherwise `None`.
///
/// # Example
/// ```
/// use strategic_solver::games::classic;
/// use strategic_solver::nfg::{game_value, PayoffTensor};
///
/// let pennies = PayoffTensor::from_table(&classic::matching_pennies());
/// assert_eq!(game_value(&pennies).unwrap(), None);
/// ```
pub fn game_value(tensor: &PayoffTensor) -> GameResult<Option<Payoff>> {
    let bounds = value_bounds(tensor)?;
    log::debug!(
        "zero-sum bounds: maximin {} minimax {}",
        bounds.maximin,
        bounds.minimax
    );
    Ok(bounds.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_sum(a: &[&[i64]]) -> PayoffTensor {
        let counts = vec![a.len(), a[0].len()];
        let own: Vec<i64> = a.iter().flat_map(|row| row.iter().copied()).collect();
        let payoffs = own.iter().copied().chain(own.iter().map(|x| -x)).collect();
        PayoffTensor::new(counts, payoffs).unwrap()
    }

    #[test]
    fn test_matching_pennies_has_no_value() {
        let tensor = zero_sum(&[&[1, -1], &[-1, 1]]);
        assert_eq!(
            value_bounds(&tensor).unwrap(),
            SaddleBounds {
                maximin: -1,
                minimax: 1
            }
        );
        assert_eq!(game_value(&tensor).unwrap(), None);
    }

    #[test]
    fn test_saddle_point() {
        // row 1 guarantees 2, column 1 holds the row player to 2
        let tensor = zero_sum(&[&[4, 1, 8], &[5, 2, 3], &[0, 1, 9]]);
        assert_eq!(game_value(&tensor).unwrap(), Some(2));
    }

    #[test]
    fn test_rectangular() {
        let tensor = zero_sum(&[&[3, -2, 4], &[1, 0, 2]]);
        let bounds = value_bounds(&tensor).unwrap();
        assert_eq!(bounds.maximin, 0);
        assert_eq!(bounds.minimax, 0);
        assert_eq!(bounds.value(), Some(0));
    }

    #[test]
    fn test_reads_only_player_zero() {
        // player 1's payoffs are not the negation but are ignored
        let tensor = PayoffTensor::new(vec![2, 2], vec![1, 1, 0, 0, 9, 9, 9, 9]).unwrap();
        assert_eq!(game_value(&tensor).unwrap(), Some(1));
    }

    #[test]
    fn test_requires_two_players() {
        let tensor = PayoffTensor::new(vec![2], vec![1, 2]).unwrap();
        assert_eq!(
            game_value(&tensor),
            Err(GameError::UnsupportedPlayerCount {
                expected: 2,
                found: 1
            })
        );
    }
}
