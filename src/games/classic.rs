//! Textbook games with known solutions.
//!
//! | Game                  | Pure Nash            | Mixed (player 0, player 1)      |
//! |-----------------------|----------------------|---------------------------------|
//! | Prisoner's Dilemma    | (D, D)               | none                            |
//! | Matching Pennies      | none                 | (½, ½), (½, ½)                  |
//! | Rock–Paper–Scissors   | none                 | uniform, uniform                |
//! | Battle of the Sexes   | (O, O), (F, F)       | (⅔, ⅓), (⅓, ⅔)                  |
//! | Stag Hunt             | (S, S), (H, H)       | (¾, ¼), (¾, ¼)                  |
//!
//! Strategy 0 is always the first-listed action.

use crate::nfg::table::{Payoff, PayoffTable};

/// Two-player table from row-player and column-player matrices.
fn bimatrix(a: &[&[Payoff]], b: &[&[Payoff]]) -> PayoffTable {
    PayoffTable::from_fn(vec![a.len(), a[0].len()], |p| {
        vec![a[p[0]][p[1]], b[p[0]][p[1]]]
    })
}

/// Prisoner's Dilemma. Strategies: cooperate, defect.
///
/// Defecting strictly dominates, so (1, 1) is the only equilibrium even
/// though (0, 0) is better for both.
pub fn prisoners_dilemma() -> PayoffTable {
    bimatrix(&[&[3, 0], &[5, 1]], &[&[3, 5], &[0, 1]])
}

/// Matching Pennies. Player 0 wins on a match.
pub fn matching_pennies() -> PayoffTable {
    bimatrix(&[&[1, -1], &[-1, 1]], &[&[-1, 1], &[1, -1]])
}

/// Rock–Paper–Scissors, zero-sum with win = 1, loss = -1.
pub fn rock_paper_scissors() -> PayoffTable {
    let a: &[&[Payoff]] = &[&[0, -1, 1], &[1, 0, -1], &[-1, 1, 0]];
    let b: &[&[Payoff]] = &[&[0, 1, -1], &[-1, 0, 1], &[1, -1, 0]];
    bimatrix(a, b)
}

/// Battle of the Sexes. Strategies: opera, football.
pub fn battle_of_the_sexes() -> PayoffTable {
    bimatrix(&[&[2, 0], &[0, 1]], &[&[1, 0], &[0, 2]])
}

/// Stag Hunt. Strategies: stag, hare.
pub fn stag_hunt() -> PayoffTable {
    bimatrix(&[&[4, 0], &[3, 3]], &[&[4, 3], &[0, 3]])
}

/// Three players with two strategies each. Everyone gets 2 when all play
/// 0, 1 when all play 1, and 0 otherwise.
pub fn three_way_coordination() -> PayoffTable {
    PayoffTable::from_fn(vec![2, 2, 2], |p| {
        let payoff = match p {
            [0, 0, 0] => 2,
            [1, 1, 1] => 1,
            _ => 0,
        };
        vec![payoff; 3]
    })
}
