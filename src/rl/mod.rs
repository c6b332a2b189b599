//! Tabular reinforcement learning for the snake agent
//!
//! Provides:
//! - Hashable state snapshots used as value-table keys
//! - A lazily expanding Q-table over the three turn actions
//! - One-step lookahead simulation of candidate actions
//! - Distance/collision/food reward shaping
//! - The learner driving the observe/act/update cycle

pub mod config;
pub mod environment;
pub mod error;
pub mod learner;
pub mod qtable;
pub mod reward;
pub mod simulator;
pub mod state;

pub use config::{LearnerConfig, RewardConfig};
pub use environment::{Environment, MoveOutcome};
pub use error::LearnError;
pub use learner::{EpisodeProgress, Learner, TickOutcome};
pub use qtable::{ActionValues, QTable};
pub use reward::{Reward, RewardModel};
pub use simulator::simulate;
pub use state::AgentState;
