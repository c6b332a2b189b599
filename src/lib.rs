//! Tabular Q-learning Snake agent
//!
//! This library provides:
//! - Core game logic with wraparound movement (game module)
//! - The tabular learner: state snapshots, Q-table, lookahead simulation,
//!   reward shaping (rl module)
//! - Training statistics (metrics module)
//! - The training loop (modes module)

pub mod game;
pub mod metrics;
pub mod modes;
pub mod rl;
