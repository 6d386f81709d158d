//! Error types for loading payoff tables and running analyses.
//!
//! Only malformed input and unsupported game shapes are errors. "No
//! equilibrium", "no dominant strategy" and "no value" are ordinary results
//! and are reported through `Option`, empty vectors or
//! [`Dominance::None`](crate::nfg::Dominance::None).

/// A payoff table that cannot describe a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The table has no rows at all, so no strategy counts.
    Empty,
    /// The metadata row is present but no profile rows follow it.
    NoProfiles,
    /// A player was declared with a strategy count below 1.
    InvalidStrategyCount {
        /// Player index.
        player: usize,
        /// Declared count.
        count: i64,
    },
    /// A profile row does not have `2 * num_players` entries.
    RaggedRow {
        /// Row index in the table (metadata is row 0).
        row: usize,
        /// Expected row width.
        expected: usize,
        /// Actual row width.
        found: usize,
    },
    /// A profile index falls outside the declared strategy count.
    ProfileOutOfBounds {
        /// Row index in the table.
        row: usize,
        /// Player whose index is out of range.
        player: usize,
        /// Offending strategy index.
        strategy: i64,
        /// Declared strategy count for that player.
        count: usize,
    },
    /// A payoff buffer does not match the declared shape.
    ShapeMismatch {
        /// Entries required by the strategy counts.
        expected: usize,
        /// Entries supplied.
        found: usize,
    },
    /// The strategy counts describe more entries than can be addressed.
    TooLarge {
        /// Declared strategy counts, as written in the table.
        strategy_counts: Vec<i64>,
    },
    /// A cell could not be parsed as an integer.
    Parse {
        /// 1-based line number in the source text.
        line: usize,
        /// Parser message.
        message: String,
    },
    /// The source could not be read.
    Io(String),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "payoff table is empty"),
            Self::NoProfiles => write!(f, "payoff table has no profile rows"),
            Self::InvalidStrategyCount { player, count } => {
                write!(f, "player {} has invalid strategy count {}", player, count)
            }
            Self::RaggedRow { row, expected, found } => {
                write!(f, "row {} has {} entries, expected {}", row, found, expected)
            }
            Self::ProfileOutOfBounds { row, player, strategy, count } => write!(
                f,
                "row {}: strategy {} of player {} is outside [0, {})",
                row, strategy, player, count
            ),
            Self::ShapeMismatch { expected, found } => {
                write!(f, "payoff buffer has {} entries, shape needs {}", found, expected)
            }
            Self::TooLarge { strategy_counts } => {
                write!(f, "strategy counts {:?} describe a game too large to store", strategy_counts)
            }
            Self::Parse { line, message } => write!(f, "line {}: {}", line, message),
            Self::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for TableError {}

/// Errors surfaced by the analyses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The input table is malformed.
    MalformedTable(TableError),
    /// The analysis only supports a specific number of players.
    UnsupportedPlayerCount {
        /// Players the analysis supports.
        expected: usize,
        /// Players in the game.
        found: usize,
    },
    /// The analysis does not support these strategy counts.
    UnsupportedStrategyCount(Vec<usize>),
    /// A player index outside `[0, num_players)`.
    PlayerOutOfRange {
        /// Requested player.
        player: usize,
        /// Players in the game.
        num_players: usize,
    },
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedTable(e) => write!(f, "malformed payoff table: {}", e),
            Self::UnsupportedPlayerCount { expected, found } => write!(
                f,
                "unsupported player count {} (this analysis needs {})",
                found, expected
            ),
            Self::UnsupportedStrategyCount(counts) => {
                write!(f, "unsupported strategy counts {:?}", counts)
            }
            Self::PlayerOutOfRange { player, num_players } => {
                write!(f, "player {} out of range for {}-player game", player, num_players)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MalformedTable(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TableError> for GameError {
    fn from(e: TableError) -> Self {
        GameError::MalformedTable(e)
    }
}

/// Shorthand for results carrying a [`GameError`].
pub type GameResult<T> = Result<T, GameError>;
