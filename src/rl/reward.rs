use super::config::RewardConfig;
use super::state::AgentState;

/// Reward for one evaluated state, broken into its components
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reward {
    /// Distance-to-food shaping term
    pub shaping: f32,
    /// Magnitude subtracted because the head overlaps the body
    pub collision_penalty: f32,
    /// Bonus added because the head sits on the food
    pub food_bonus: f32,
}

impl Reward {
    /// Net reward: shaping minus the collision penalty plus the food bonus
    pub fn total(&self) -> f32 {
        self.shaping - self.collision_penalty + self.food_bonus
    }
}

/// Scores states by proximity to food, collision, and food capture
///
/// Stateless apart from its constants; the accumulating per-tick survival
/// bonus is applied by the learner so the two terms stay independently
/// tunable.
#[derive(Debug, Clone)]
pub struct RewardModel {
    config: RewardConfig,
}

impl RewardModel {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    /// Evaluate `state`
    ///
    /// The shaping term interpolates from `max_reward` at distance zero to
    /// `min_reward` at `max_distance` cells and is clamped beyond it. A
    /// head overlapping any body segment subtracts `collision_penalty`; a
    /// head on the food cell adds `food_bonus`.
    pub fn reward(&self, state: &AgentState) -> Reward {
        let distance = state.head.position.distance_to(state.food);
        let t = (distance / self.config.max_distance).clamp(0.0, 1.0);
        let shaping = lerp(self.config.max_reward, self.config.min_reward, t);

        let collision_penalty = if is_colliding_with_body(state) {
            self.config.collision_penalty
        } else {
            0.0
        };

        let food_bonus = if state.head.position == state.food {
            self.config.food_bonus
        } else {
            0.0
        };

        Reward {
            shaping,
            collision_penalty,
            food_bonus,
        }
    }
}

/// True if the head position coincides with any body segment position
pub fn is_colliding_with_body(state: &AgentState) -> bool {
    state
        .body
        .iter()
        .any(|segment| segment.position == state.head.position)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
