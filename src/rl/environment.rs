use crate::game::{GridPoint, Pose};

/// Outcome of one discrete movement tick
///
/// Carries the episodic signals a driver or learner may react to: the head
/// reaching food, or the head running into the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The head reached the food cell this tick
    pub ate_food: bool,
    /// The head collided with a body segment; the episode is over
    pub collided: bool,
}

/// The world the learner observes and steers
///
/// The learner pulls positional snapshots from the environment once per
/// movement tick, issues at most one turn command, and then advances the
/// world by one discrete move. Implementations own all movement rules
/// (wraparound, growth, collision detection); the learner never reaches
/// into them directly.
pub trait Environment {
    /// Position and orientation of the snake head, if one exists yet
    fn head_pose(&self) -> Option<Pose>;

    /// Poses of the body segments, head-to-tail order
    fn body_segments(&self) -> Vec<Pose>;

    /// Position of the current food target, if one is spawned
    fn food_position(&self) -> Option<GridPoint>;

    /// Rotate the head 90 degrees clockwise
    fn rotate_clockwise(&mut self);

    /// Rotate the head 90 degrees counterclockwise
    fn rotate_counterclockwise(&mut self);

    /// Advance the world by one movement tick
    fn advance(&mut self) -> MoveOutcome;
}
