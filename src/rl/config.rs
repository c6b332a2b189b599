//! Learning hyperparameter configuration

use serde::{Deserialize, Serialize};

/// Constants feeding the per-state reward computation
///
/// The shaping term interpolates linearly from `max_reward` at distance
/// zero down to `min_reward` at `max_distance` cells from the food, and
/// stays at `min_reward` beyond that. `collision_penalty` is stored as a
/// non-negative magnitude and always subtracted, so a collision can only
/// decrease the net reward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardConfig {
    /// Shaping reward when the head sits on the food
    ///
    /// Default: 1.0
    pub max_reward: f32,

    /// Shaping reward at and beyond `max_distance`
    ///
    /// Default: 0.0
    pub min_reward: f32,

    /// Distance (in cells) at which shaping bottoms out
    ///
    /// Default: 10.0
    pub max_distance: f32,

    /// Bonus added when the head reaches the food cell
    ///
    /// Default: 10.0
    pub food_bonus: f32,

    /// Magnitude subtracted when the head overlaps a body segment
    ///
    /// Default: 5.0
    pub collision_penalty: f32,

    /// Bonus the learner adds for every tick survived
    ///
    /// Kept separate from the distance shaping so it can be tuned (or
    /// zeroed) independently.
    ///
    /// Default: 0.1
    pub survival_bonus: f32,
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            max_reward: 1.0,
            min_reward: 0.0,
            max_distance: 10.0,
            food_bonus: 10.0,
            collision_penalty: 5.0,
            survival_bonus: 0.1,
        }
    }
}

/// Configuration for the tabular Q-learning agent
///
/// # Example
///
/// ```rust
/// use q_snake::rl::LearnerConfig;
///
/// // Use default hyperparameters
/// let config = LearnerConfig::default();
/// assert!(config.validate().is_ok());
///
/// // Or customize specific parameters
/// let config = LearnerConfig {
///     alpha: 0.5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Learning rate controlling the update step size
    ///
    /// Must lie strictly inside (0, 1).
    ///
    /// Default: 0.1
    pub alpha: f32,

    /// Discount factor weighting future reward
    ///
    /// Must lie strictly inside (0, 1).
    ///
    /// Default: 0.9
    pub gamma: f32,

    /// Exploration rate for epsilon-greedy action selection
    ///
    /// With probability `epsilon` the agent takes a uniformly random
    /// action instead of the greedy one. Zero disables exploration and
    /// makes selection fully deterministic.
    ///
    /// Default: 0.05
    pub epsilon: f32,

    /// Seed for the exploration RNG; random when absent
    pub seed: Option<u64>,

    /// Reward shaping constants
    pub reward: RewardConfig,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            gamma: 0.9,
            epsilon: 0.05,
            seed: None,
            reward: RewardConfig::default(),
        }
    }
}

impl LearnerConfig {
    /// Create a new configuration with default hyperparameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration parameters
    ///
    /// # Returns
    ///
    /// `Ok(())` if all parameters are in valid ranges, `Err(String)` with
    /// an error message otherwise.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(format!("alpha must be in (0, 1), got {}", self.alpha));
        }

        if !(self.gamma > 0.0 && self.gamma < 1.0) {
            return Err(format!("gamma must be in (0, 1), got {}", self.gamma));
        }

        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(format!("epsilon must be in [0, 1], got {}", self.epsilon));
        }

        if self.reward.max_distance <= 0.0 {
            return Err(format!(
                "max_distance must be positive, got {}",
                self.reward.max_distance
            ));
        }

        if self.reward.max_reward < self.reward.min_reward {
            return Err(format!(
                "max_reward ({}) cannot be below min_reward ({})",
                self.reward.max_reward, self.reward.min_reward
            ));
        }

        if self.reward.collision_penalty < 0.0 {
            return Err(format!(
                "collision_penalty is a magnitude and must be non-negative, got {}",
                self.reward.collision_penalty
            ));
        }

        if self.reward.survival_bonus < 0.0 {
            return Err(format!(
                "survival_bonus must be non-negative, got {}",
                self.reward.survival_bonus
            ));
        }

        Ok(())
    }
}
