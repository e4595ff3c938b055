//! Error types for the arena simulation.
//!
//! The simulation itself has a single runtime failure: a body resolving to a
//! grid cell that does not exist. Everything else here comes from setup
//! (layout parsing, configuration loading).

use thiserror::Error;

/// Errors raised while building or ticking an arena.
#[derive(Debug, Error)]
pub enum ArenaError {
    /// A world position mapped to a row/column outside the grid.
    #[error("position resolves outside the grid (row {row}, col {col})")]
    OutOfBounds { row: i64, col: i64 },

    /// The layout text contains no rows.
    #[error("map layout is empty")]
    EmptyLayout,

    /// The layout has no `S` cells, so nothing can ever spawn.
    #[error("map layout has no spawn points")]
    NoSpawnPoints,

    /// A layout character outside the known cell alphabet.
    #[error("unknown map cell {ch:?} at row {row}, col {col}")]
    UnknownCell { row: usize, col: usize, ch: char },

    /// Configuration values that cannot drive a simulation.
    #[error("invalid arena config: {0}")]
    Config(String),

    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ArenaError>;
