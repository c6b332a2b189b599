//! One-step lookahead simulation
//!
//! Predicts the state that follows a candidate action without touching the
//! live environment, so the learner can evaluate an action's consequences
//! before (and after) committing to it.

use super::state::AgentState;
use crate::game::{Pose, TurnAction};

/// Predicted state after taking `action` in `state`
///
/// The head heading rotates 90 degrees for a turn action and is unchanged
/// for [`TurnAction::DoNothing`]; the head then advances one cell along the
/// resulting heading. The body follows the chain: the first segment takes
/// the old head pose and each later segment takes its predecessor's pose.
/// The food position carries over unchanged; simulation never consumes
/// food or grows the body.
///
/// Coordinates are not wrapped to any grid. The prediction is purely
/// geometric and one cell of travel never needs the grid bounds that the
/// live environment applies.
pub fn simulate(state: &AgentState, action: TurnAction) -> AgentState {
    let heading = action.applied_to(state.head.heading);
    let head = Pose::new(state.head.position.stepped(heading), heading);

    let mut body = Vec::with_capacity(state.body.len());
    if !state.body.is_empty() {
        body.push(state.head);
        body.extend_from_slice(&state.body[..state.body.len() - 1]);
    }

    AgentState::new(head, body, state.food)
}
