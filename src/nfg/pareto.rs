//! Pareto optimality over the rows of a payoff table.

use crate::nfg::profile::Profile;
use crate::nfg::table::{Payoff, PayoffTable};

/// Whether payoff vector `a` Pareto-dominates `b`: no coordinate is worse
/// and at least one is strictly better. Equal vectors do not dominate.
pub fn pareto_dominates(a: &[Payoff], b: &[Payoff]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    let mut better = false;
    for (&x, &y) in a.iter().zip(b) {
        if x < y {
            return false;
        }
        if x > y {
            better = true;
        }
    }
    better
}

/// Profiles whose payoff vector no other row dominates, in table order.
///
/// Quadratic in the number of rows.
pub fn pareto_optimal(table: &PayoffTable) -> Vec<Profile> {
    let rows = table.rows();
    rows.iter()
        .filter(|candidate| {
            !rows
                .iter()
                .any(|other| pareto_dominates(&other.payoffs, &candidate.payoffs))
        })
        .map(|row| row.profile.clone())
        .collect()
}
