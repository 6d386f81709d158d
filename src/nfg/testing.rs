//! Random games for property tests.

use quickcheck::{Arbitrary, Gen};

use crate::nfg::profile::profiles;
use crate::nfg::table::PayoffTable;

/// Random well-formed table with 1-3 players and 1-3 strategies each.
///
/// Payoffs are drawn from a narrow range so ties are common.
#[derive(Debug, Clone)]
pub(crate) struct SmallTable(pub PayoffTable);

impl Arbitrary for SmallTable {
    fn arbitrary(g: &mut Gen) -> Self {
        let players = 1 + usize::arbitrary(g) % 3;
        let counts: Vec<usize> = (0..players).map(|_| 1 + usize::arbitrary(g) % 3).collect();

        let mut rows = vec![counts.iter().map(|&c| c as i64).collect::<Vec<_>>()];
        for profile in profiles(&counts) {
            let mut row: Vec<i64> = profile.iter().map(|&s| s as i64).collect();
            row.extend((0..players).map(|_| i64::from(i8::arbitrary(g) % 4)));
            rows.push(row);
        }
        SmallTable(PayoffTable::from_rows(rows).unwrap())
    }
}
