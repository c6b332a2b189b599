use serde::{Deserialize, Serialize};

/// Cardinal heading of the snake head
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Right,
    Down,
    Left,
}

impl Heading {
    /// Returns the grid delta (dx, dy) for one step along this heading
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::Up => (0, 1),
            Heading::Right => (1, 0),
            Heading::Down => (0, -1),
            Heading::Left => (-1, 0),
        }
    }

    /// Heading after a 90-degree clockwise rotation
    pub fn rotated_clockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Right,
            Heading::Right => Heading::Down,
            Heading::Down => Heading::Left,
            Heading::Left => Heading::Up,
        }
    }

    /// Heading after a 90-degree counterclockwise rotation
    pub fn rotated_counterclockwise(self) -> Self {
        match self {
            Heading::Up => Heading::Left,
            Heading::Left => Heading::Down,
            Heading::Down => Heading::Right,
            Heading::Right => Heading::Up,
        }
    }
}

/// Turn decision the agent can take on a movement tick
///
/// The declaration order matters: action selection breaks ties in favor of
/// the earliest declared variant, so repeated selections over identical
/// value estimates are reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    DoNothing,
    TurnRight,
    TurnLeft,
}

impl TurnAction {
    /// All actions in declaration (tie-break) order
    pub const ALL: [TurnAction; 3] = [
        TurnAction::DoNothing,
        TurnAction::TurnRight,
        TurnAction::TurnLeft,
    ];

    /// Number of actions in the fixed action set
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index of this action into a per-state value array
    pub fn index(self) -> usize {
        match self {
            TurnAction::DoNothing => 0,
            TurnAction::TurnRight => 1,
            TurnAction::TurnLeft => 2,
        }
    }

    /// The heading that results from applying this turn to `heading`
    pub fn applied_to(self, heading: Heading) -> Heading {
        match self {
            TurnAction::DoNothing => heading,
            TurnAction::TurnRight => heading.rotated_clockwise(),
            TurnAction::TurnLeft => heading.rotated_counterclockwise(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clockwise_rotation_cycle() {
        assert_eq!(Heading::Up.rotated_clockwise(), Heading::Right);
        assert_eq!(Heading::Right.rotated_clockwise(), Heading::Down);
        assert_eq!(Heading::Down.rotated_clockwise(), Heading::Left);
        assert_eq!(Heading::Left.rotated_clockwise(), Heading::Up);
    }

    #[test]
    fn test_counterclockwise_inverts_clockwise() {
        for heading in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(
                heading.rotated_clockwise().rotated_counterclockwise(),
                heading
            );
        }
    }

    #[test]
    fn test_turn_right_then_left_restores_heading() {
        let turned = TurnAction::TurnRight.applied_to(Heading::Up);
        assert_eq!(turned, Heading::Right);
        assert_eq!(TurnAction::TurnLeft.applied_to(turned), Heading::Up);
    }

    #[test]
    fn test_do_nothing_keeps_heading() {
        for heading in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            assert_eq!(TurnAction::DoNothing.applied_to(heading), heading);
        }
    }

    #[test]
    fn test_action_indices_follow_declaration_order() {
        for (i, action) in TurnAction::ALL.iter().enumerate() {
            assert_eq!(action.index(), i);
        }
    }

    #[test]
    fn test_deltas_are_unit_steps() {
        for heading in [Heading::Up, Heading::Right, Heading::Down, Heading::Left] {
            let (dx, dy) = heading.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }
}
