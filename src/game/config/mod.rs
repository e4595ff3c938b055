//! Config Module
//!
//! Centralized configuration for the arena layout and gameplay constants.

pub mod arena_config;

pub use arena_config::ArenaConfig;
