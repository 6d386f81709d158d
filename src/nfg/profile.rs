//! Strategy profiles and the product space they live in.
//!
//! Every enumeration in this crate walks the Cartesian product of the
//! players' strategy ranges. The product is generated explicitly instead of
//! building indices one dimension per recursive call, so the depth does not
//! grow with the player count.

use itertools::Itertools;

/// Index of a strategy within one player's strategy set.
pub type Strategy = usize;

/// One strategy per player, in player order.
pub type Profile = Vec<Strategy>;

/// Every profile of a game with the given strategy counts, in
/// lexicographic order (last player varies fastest).
///
/// Yields nothing if any count is zero.
pub fn profiles(strategy_counts: &[usize]) -> impl Iterator<Item = Profile> + '_ {
    strategy_counts
        .iter()
        .map(|&count| 0..count)
        .multi_cartesian_product()
}

/// Every combination of the opponents' strategies for `player`.
///
/// Each item is a full profile whose `player` coordinate is 0; callers
/// overwrite that slot with the strategy they want to evaluate. The number
/// of items is [`opponent_combinations`].
pub fn opponent_contexts(
    strategy_counts: &[usize],
    player: usize,
) -> impl Iterator<Item = Profile> + '_ {
    strategy_counts
        .iter()
        .enumerate()
        .map(move |(p, &count)| if p == player { 0..1 } else { 0..count })
        .multi_cartesian_product()
}

/// Number of opponent strategy combinations `∏_{i≠player} sᵢ`.
pub fn opponent_combinations(strategy_counts: &[usize], player: usize) -> usize {
    strategy_counts
        .iter()
        .enumerate()
        .filter(|&(p, _)| p != player)
        .map(|(_, &count)| count)
        .product()
}

/// Size of the full profile space `∏ sᵢ`.
pub fn profile_count(strategy_counts: &[usize]) -> usize {
    strategy_counts.iter().product()
}
