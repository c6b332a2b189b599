use super::environment::Environment;
use super::error::LearnError;
use crate::game::{GridPoint, Pose};

/// Immutable snapshot of the world used as a value-table key
///
/// Equality and hashing cover every field: head pose, the full ordered body
/// sequence, and the food position. Two snapshots whose body sequences
/// differ in length are never equal, so states taken before and after the
/// snake grows stay distinct keys. The derived hash mixes fields in order,
/// so permuted bodies hash differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AgentState {
    /// Head position and orientation
    pub head: Pose,
    /// Body segment poses, head-to-tail order
    pub body: Vec<Pose>,
    /// Position of the food target
    pub food: GridPoint,
}

impl AgentState {
    pub fn new(head: Pose, body: Vec<Pose>, food: GridPoint) -> Self {
        Self { head, body, food }
    }

    /// Build a snapshot from live environment readings
    ///
    /// Fails with [`LearnError::MissingEntity`] when the environment cannot
    /// yet provide a head or a food target; the caller skips the tick.
    pub fn observe<E: Environment>(env: &E) -> Result<Self, LearnError> {
        let head = env.head_pose().ok_or(LearnError::MissingEntity("snake head"))?;
        let food = env
            .food_position()
            .ok_or(LearnError::MissingEntity("food"))?;
        Ok(Self::new(head, env.body_segments(), food))
    }
}
