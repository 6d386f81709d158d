//! Random games.
//!
//! Every profile gets a row and every payoff is drawn uniformly from
//! `[-max_payoff, max_payoff]`. A small range makes ties, and hence weak
//! dominance and multiple equilibria, common.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::nfg::error::TableError;
use crate::nfg::table::{Payoff, PayoffTable};
use crate::nfg::tensor::dense_len;

/// Random complete table drawn from `rng`.
pub fn random_table<R: Rng>(
    rng: &mut R,
    strategy_counts: &[usize],
    max_payoff: Payoff,
) -> Result<PayoffTable, TableError> {
    if strategy_counts.is_empty() {
        return Err(TableError::Empty);
    }
    if let Some(player) = strategy_counts.iter().position(|&c| c == 0) {
        return Err(TableError::InvalidStrategyCount { player, count: 0 });
    }
    dense_len(strategy_counts)?;

    let bound = max_payoff.saturating_abs();
    let n = strategy_counts.len();
    Ok(PayoffTable::from_fn(strategy_counts.to_vec(), |_| {
        (0..n).map(|_| rng.gen_range(-bound..=bound)).collect()
    }))
}

/// [`random_table`] with a fresh RNG seeded from `seed`, or from entropy
/// when `seed` is `None`.
pub fn seeded_table(
    seed: Option<u64>,
    strategy_counts: &[usize],
    max_payoff: Payoff,
) -> Result<PayoffTable, TableError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    random_table(&mut rng, strategy_counts, max_payoff)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_table() {
        let a = seeded_table(Some(7), &[3, 2], 5).unwrap();
        let b = seeded_table(Some(7), &[3, 2], 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shape_and_range() {
        let table = seeded_table(Some(42), &[2, 3, 2], 4).unwrap();
        assert_eq!(table.strategy_counts(), &[2, 3, 2]);
        assert_eq!(table.rows().len(), 12);
        for row in table.rows() {
            assert_eq!(row.payoffs.len(), 3);
            assert!(row.payoffs.iter().all(|p| (-4..=4).contains(p)));
        }
    }

    #[test]
    fn test_zero_range_is_all_zero() {
        let table = seeded_table(None, &[2, 2], 0).unwrap();
        assert!(table.rows().iter().all(|row| row.payoffs == vec![0, 0]));
    }

    #[test]
    fn test_extreme_bounds() {
        let table = seeded_table(Some(3), &[2, 2], i64::MIN).unwrap();
        assert!(table
            .rows()
            .iter()
            .flat_map(|row| &row.payoffs)
            .all(|&p| p >= -i64::MAX));
        assert!(matches!(
            seeded_table(Some(3), &[usize::MAX, 2], 1),
            Err(TableError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_counts() {
        assert_eq!(seeded_table(Some(1), &[], 3), Err(TableError::Empty));
        assert_eq!(
            seeded_table(Some(1), &[2, 0], 3),
            Err(TableError::InvalidStrategyCount { player: 1, count: 0 })
        );
    }
}
