use super::state::AgentState;
use crate::game::TurnAction;
use std::collections::HashMap;

/// Per-state action value estimates, one slot per [`TurnAction`]
pub type ActionValues = [f32; TurnAction::COUNT];

/// Value table mapping (state, action) pairs to scalar estimates
///
/// States are inserted lazily: [`QTable::ensure`] adds an all-zero entry on
/// first encounter, and every present key always carries a value for all
/// three actions. Reading or writing a state that was never ensured is a
/// programming error; debug builds assert, release builds fall back to the
/// zero estimate.
#[derive(Debug, Clone, Default)]
pub struct QTable {
    entries: HashMap<AgentState, ActionValues>,
}

impl QTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `state` with all-zero estimates if absent. Idempotent.
    pub fn ensure(&mut self, state: &AgentState) {
        if !self.entries.contains_key(state) {
            self.entries.insert(state.clone(), [0.0; TurnAction::COUNT]);
        }
    }

    /// Current estimate for taking `action` in `state`
    pub fn value(&self, state: &AgentState, action: TurnAction) -> f32 {
        match self.entries.get(state) {
            Some(values) => values[action.index()],
            None => {
                debug_assert!(false, "value lookup for a state that was never ensured");
                0.0
            }
        }
    }

    /// Overwrite the estimate for (`state`, `action`)
    ///
    /// Inserts the state with zero estimates first if it is absent, so a
    /// key can never be partially populated.
    pub fn set(&mut self, state: &AgentState, action: TurnAction, value: f32) {
        let values = self
            .entries
            .entry(state.clone())
            .or_insert([0.0; TurnAction::COUNT]);
        values[action.index()] = value;
    }

    /// Action with the highest estimate in `state`
    ///
    /// Ties resolve to the earliest declared action: only a strictly
    /// greater estimate displaces the current best.
    pub fn best_action(&self, state: &AgentState) -> TurnAction {
        let mut best = TurnAction::ALL[0];
        let mut best_value = self.value(state, best);

        for &action in &TurnAction::ALL[1..] {
            let value = self.value(state, action);
            if value > best_value {
                best = action;
                best_value = value;
            }
        }
        best
    }

    /// Highest estimate over all actions in `state`
    pub fn max_value(&self, state: &AgentState) -> f32 {
        TurnAction::ALL
            .iter()
            .map(|&action| self.value(state, action))
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// True if `state` has been ensured
    pub fn contains(&self, state: &AgentState) -> bool {
        self.entries.contains_key(state)
    }

    /// Number of distinct states in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
