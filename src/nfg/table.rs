//! The raw payoff table a game is loaded from.
//!
//! Row 0 holds the strategy count of every player (its length is the player
//! count N). Each following row is a profile followed by every player's
//! payoff: `[i₁, …, i_N, g₁, …, g_N]`.
//!
//! ```text
//! 2,2        <- two players, two strategies each
//! 0,0,3,3
//! 0,1,0,5
//! 1,0,5,0
//! 1,1,1,1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::nfg::error::TableError;
use crate::nfg::profile::{profiles, Strategy};
use crate::nfg::tensor::dense_len;

/// Integer payoff as it appears in the table.
pub type Payoff = i64;

/// One profile row of a payoff table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffRow {
    /// Strategy chosen by each player.
    pub profile: Vec<Strategy>,
    /// Payoff of each player under `profile`.
    pub payoffs: Vec<Payoff>,
}

/// A validated payoff table.
///
/// Construction checks the row shape and profile bounds, so every analysis
/// working on a `PayoffTable` can index freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PayoffTable {
    strategy_counts: Vec<usize>,
    rows: Vec<PayoffRow>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    Wrapped { rows: Vec<Vec<i64>> },
    Bare(Vec<Vec<i64>>),
}

impl PayoffTable {
    /// Build a table from raw integer rows, row 0 being the metadata row.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, TableError> {
        let mut rows = rows.into_iter();
        let meta = rows.next().ok_or(TableError::Empty)?;
        if meta.is_empty() {
            return Err(TableError::Empty);
        }

        let strategy_counts = meta
            .iter()
            .enumerate()
            .map(|(player, &count)| {
                if count < 1 {
                    return Err(TableError::InvalidStrategyCount { player, count });
                }
                usize::try_from(count).map_err(|_| TableError::TooLarge {
                    strategy_counts: meta.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        dense_len(&strategy_counts)?;

        let n = strategy_counts.len();
        let mut parsed = Vec::new();
        for (i, row) in rows.enumerate() {
            let row_index = i + 1;
            if row.len() != 2 * n {
                return Err(TableError::RaggedRow {
                    row: row_index,
                    expected: 2 * n,
                    found: row.len(),
                });
            }

            let mut profile = Vec::with_capacity(n);
            for (player, &strategy) in row[..n].iter().enumerate() {
                let count = strategy_counts[player];
                if strategy < 0 || strategy as usize >= count {
                    return Err(TableError::ProfileOutOfBounds {
                        row: row_index,
                        player,
                        strategy,
                        count,
                    });
                }
                profile.push(strategy as usize);
            }

            parsed.push(PayoffRow {
                profile,
                payoffs: row[n..].to_vec(),
            });
        }

        if parsed.is_empty() {
            return Err(TableError::NoProfiles);
        }

        Ok(Self {
            strategy_counts,
            rows: parsed,
        })
    }

    /// Complete table with one row per profile, in lexicographic order.
    ///
    /// Callers guarantee a non-empty `strategy_counts` without zeros and
    /// that `payoffs` returns one entry per player.
    pub(crate) fn from_fn<F>(strategy_counts: Vec<usize>, mut payoffs: F) -> Self
    where
        F: FnMut(&[Strategy]) -> Vec<Payoff>,
    {
        debug_assert!(!strategy_counts.is_empty() && !strategy_counts.contains(&0));
        let rows = profiles(&strategy_counts)
            .map(|profile| {
                let values = payoffs(&profile);
                debug_assert_eq!(values.len(), strategy_counts.len());
                PayoffRow {
                    profile,
                    payoffs: values,
                }
            })
            .collect();
        Self {
            strategy_counts,
            rows,
        }
    }

    /// Parse comma-separated rows. Blank lines and `#` comments are skipped.
    pub fn from_csv_str(text: &str) -> Result<Self, TableError> {
        let mut rows = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let row = line
                .split(',')
                .map(|cell| {
                    cell.trim().parse::<i64>().map_err(|e| TableError::Parse {
                        line: i + 1,
                        message: format!("{:?}: {}", cell.trim(), e),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        Self::from_rows(rows)
    }

    /// Parse a JSON table: either `{"rows": [...]}` or a bare array of rows.
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let table: JsonTable = serde_json::from_str(json).map_err(|e| TableError::Parse {
            line: e.line(),
            message: e.to_string(),
        })?;
        match table {
            JsonTable::Wrapped { rows } | JsonTable::Bare(rows) => Self::from_rows(rows),
        }
    }

    /// Load a table from disk, choosing the format from the extension
    /// (`.json` is JSON, anything else is CSV).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| TableError::Io(e.to_string()))?;
        let is_json = path
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_csv_str(&text)
        }
    }

    /// Number of players.
    pub fn num_players(&self) -> usize {
        self.strategy_counts.len()
    }

    /// Strategy count of every player.
    pub fn strategy_counts(&self) -> &[usize] {
        &self.strategy_counts
    }

    /// Profile rows, metadata excluded.
    pub fn rows(&self) -> &[PayoffRow] {
        &self.rows
    }

    /// Back to raw integer rows, metadata row first.
    pub fn to_rows(&self) -> Vec<Vec<i64>> {
        let meta = self.strategy_counts.iter().map(|&c| c as i64).collect();
        std::iter::once(meta)
            .chain(self.rows.iter().map(|row| {
                row.profile
                    .iter()
                    .map(|&s| s as i64)
                    .chain(row.payoffs.iter().copied())
                    .collect()
            }))
            .collect()
    }
}
