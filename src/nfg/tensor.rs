//! Dense payoff tensor.
//!
//! Logically the tensor has shape `[N, s₁, …, s_N]`: `payoff(p, profile)`
//! is player `p`'s payoff when every player plays their entry of `profile`.
//! It is stored as one flat buffer with row-major offsets, player first.

use serde::Serialize;

use crate::nfg::error::{GameError, GameResult, TableError};
use crate::nfg::profile::{profile_count, profiles, Strategy};
use crate::nfg::table::{Payoff, PayoffTable};

/// Payoffs of every player at every profile.
///
/// Entries missing from the source table are zero. The tensor is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoffTensor {
    strategy_counts: Vec<usize>,
    /// Row-major strides of the profile dimensions.
    strides: Vec<usize>,
    /// Entries per player slice (`∏ sᵢ`).
    slice_len: usize,
    payoffs: Vec<Payoff>,
}

impl PayoffTensor {
    /// Build a tensor from a flat buffer laid out as `[player][i₁]…[i_N]`.
    pub fn new(strategy_counts: Vec<usize>, payoffs: Vec<Payoff>) -> Result<Self, TableError> {
        if strategy_counts.is_empty() {
            return Err(TableError::Empty);
        }
        if let Some(player) = strategy_counts.iter().position(|&c| c == 0) {
            return Err(TableError::InvalidStrategyCount { player, count: 0 });
        }

        let expected = dense_len(&strategy_counts)?;
        let slice_len = profile_count(&strategy_counts);
        if payoffs.len() != expected {
            return Err(TableError::ShapeMismatch {
                expected,
                found: payoffs.len(),
            });
        }

        Ok(Self {
            strides: row_major_strides(&strategy_counts),
            strategy_counts,
            slice_len,
            payoffs,
        })
    }

    /// Build the tensor from a validated table.
    ///
    /// When a profile appears in several rows the last row wins.
    pub fn from_table(table: &PayoffTable) -> Self {
        let counts = table.strategy_counts().to_vec();
        let n = counts.len();
        let slice_len = profile_count(&counts);

        let mut tensor = Self {
            strides: row_major_strides(&counts),
            slice_len,
            payoffs: vec![0; slice_len * n],
            strategy_counts: counts,
        };

        for row in table.rows() {
            let offset = tensor.offset(&row.profile);
            for (player, &payoff) in row.payoffs.iter().enumerate() {
                tensor.payoffs[player * slice_len + offset] = payoff;
            }
        }

        log::debug!(
            "built payoff tensor {:?} from {} rows",
            tensor.strategy_counts,
            table.rows().len()
        );
        tensor
    }

    /// Number of players.
    pub fn num_players(&self) -> usize {
        self.strategy_counts.len()
    }

    /// Strategy count of every player.
    pub fn strategy_counts(&self) -> &[usize] {
        &self.strategy_counts
    }

    /// Row-major offset of a profile inside one player's slice.
    ///
    /// # Panics
    /// Panics in debug builds if the profile has the wrong length or an
    /// index is out of range.
    pub fn offset(&self, profile: &[Strategy]) -> usize {
        debug_assert_eq!(profile.len(), self.strategy_counts.len());
        profile
            .iter()
            .zip(&self.strides)
            .zip(&self.strategy_counts)
            .map(|((&s, &stride), &count)| {
                debug_assert!(s < count, "strategy {} out of range {}", s, count);
                s * stride
            })
            .sum()
    }

    /// Payoff of `player` at `profile`.
    ///
    /// # Panics
    /// Panics if `player` is not a player of this game (use
    /// [`check_player`](Self::check_player) to guard untrusted indices), and
    /// in debug builds under the same conditions as [`offset`](Self::offset).
    pub fn payoff(&self, player: usize, profile: &[Strategy]) -> Payoff {
        self.payoffs[player * self.slice_len + self.offset(profile)]
    }

    /// Payoff vector of every player at `profile`.
    ///
    /// # Panics
    /// In debug builds, under the same conditions as [`offset`](Self::offset).
    pub fn payoffs_at(&self, profile: &[Strategy]) -> Vec<Payoff> {
        let offset = self.offset(profile);
        (0..self.num_players())
            .map(|p| self.payoffs[p * self.slice_len + offset])
            .collect()
    }

    /// Check that `player` indexes a player of this game.
    pub fn check_player(&self, player: usize) -> GameResult<()> {
        if player < self.num_players() {
            Ok(())
        } else {
            Err(GameError::PlayerOutOfRange {
                player,
                num_players: self.num_players(),
            })
        }
    }

    /// Sub-game where each player may only use the listed strategies.
    ///
    /// Strategy `j` of player `i` in the result is `supports[i][j]` in
    /// `self`.
    pub fn restrict(&self, supports: &[Vec<Strategy>]) -> Result<Self, TableError> {
        debug_assert_eq!(supports.len(), self.num_players());
        let counts: Vec<usize> = supports.iter().map(Vec::len).collect();
        let sub_len = profile_count(&counts);

        let mut payoffs = Vec::with_capacity(sub_len * self.num_players());
        for player in 0..self.num_players() {
            for sub_profile in profiles(&counts) {
                let original: Vec<Strategy> = sub_profile
                    .iter()
                    .zip(supports)
                    .map(|(&j, support)| support[j])
                    .collect();
                payoffs.push(self.payoff(player, &original));
            }
        }
        Self::new(counts, payoffs)
    }

    /// `player`'s payoffs of a two-player game as a row × column matrix,
    /// rows being player 0's strategies.
    pub fn matrix(&self, player: usize) -> GameResult<Vec<Vec<Payoff>>> {
        if self.num_players() != 2 {
            return Err(GameError::UnsupportedPlayerCount {
                expected: 2,
                found: self.num_players(),
            });
        }
        self.check_player(player)?;

        let (rows, cols) = (self.strategy_counts[0], self.strategy_counts[1]);
        Ok((0..rows)
            .map(|r| (0..cols).map(|c| self.payoff(player, &[r, c])).collect())
            .collect())
    }
}

/// Entries of a dense tensor over `strategy_counts` (`N · ∏ sᵢ`).
///
/// Fails with [`TableError::TooLarge`] when the buffer could not be
/// allocated, so every later product over these counts is overflow-free.
pub(crate) fn dense_len(strategy_counts: &[usize]) -> Result<usize, TableError> {
    let max_entries = isize::MAX as usize / std::mem::size_of::<Payoff>();
    strategy_counts
        .iter()
        .try_fold(strategy_counts.len(), |acc, &count| acc.checked_mul(count))
        .filter(|&len| len <= max_entries)
        .ok_or_else(|| TableError::TooLarge {
            strategy_counts: strategy_counts
                .iter()
                .map(|&c| i64::try_from(c).unwrap_or(i64::MAX))
                .collect(),
        })
}

fn row_major_strides(strategy_counts: &[usize]) -> Vec<usize> {
    let mut strides = vec![1; strategy_counts.len()];
    for i in (0..strategy_counts.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * strategy_counts[i + 1];
    }
    strides
}
