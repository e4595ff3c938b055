//! World Module
//!
//! The arena grid: cell types, coordinate mapping, wall solids, spawn points,
//! and the built-in layout.

pub mod grid;
pub mod layout;

pub use grid::{CellKind, FLOOR_HEIGHT, GridMap, MapCell, Solid, SolidId};
pub use layout::DEFAULT_ARENA_LAYOUT;
