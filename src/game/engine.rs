use super::{
    action::Heading,
    config::GameConfig,
    state::{GameState, GridPoint, Pose, Snake},
};
use crate::rl::{Environment, MoveOutcome};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Headless movement engine for the snake grid
///
/// Owns the live game state and implements the [`Environment`] interface
/// the learner drives: positional snapshots, turn commands, and discrete
/// movement ticks. The grid has wraparound edges; the only way to die is
/// running the head into the body.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: SmallRng,
}

impl GameEngine {
    /// Create an engine with a freshly spawned snake and food
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let snake = Self::spawn_snake(&config);
        let food = Self::spawn_food(&config, &mut rng, &snake);

        Self {
            state: GameState::new(snake, food),
            config,
            rng,
        }
    }

    /// Restart the episode: new snake at the center, new food
    pub fn reset(&mut self) {
        let snake = Self::spawn_snake(&self.config);
        let food = Self::spawn_food(&self.config, &mut self.rng, &snake);
        self.state = GameState::new(snake, food);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    fn spawn_snake(config: &GameConfig) -> Snake {
        let center = GridPoint::new(
            (config.grid_width / 2) as i32,
            (config.grid_height / 2) as i32,
        );
        Snake::new(Pose::new(center, Heading::Up), config.initial_snake_length)
    }

    /// Pick a random cell not covered by the snake
    fn spawn_food(config: &GameConfig, rng: &mut SmallRng, snake: &Snake) -> GridPoint {
        loop {
            let pos = GridPoint::new(
                rng.gen_range(0..config.grid_width) as i32,
                rng.gen_range(0..config.grid_height) as i32,
            );
            if !snake.occupies(pos) {
                return pos;
            }
        }
    }
}

impl Environment for GameEngine {
    fn head_pose(&self) -> Option<Pose> {
        Some(self.state.snake.head)
    }

    fn body_segments(&self) -> Vec<Pose> {
        self.state.snake.segments.clone()
    }

    fn food_position(&self) -> Option<GridPoint> {
        Some(self.state.food)
    }

    fn rotate_clockwise(&mut self) {
        self.state.snake.head.heading = self.state.snake.head.heading.rotated_clockwise();
    }

    fn rotate_counterclockwise(&mut self) {
        self.state.snake.head.heading = self.state.snake.head.heading.rotated_counterclockwise();
    }

    fn advance(&mut self) -> MoveOutcome {
        if !self.state.is_alive {
            return MoveOutcome {
                ate_food: false,
                collided: true,
            };
        }

        let heading = self.state.snake.head.heading;
        let new_pos = self
            .state
            .snake
            .head
            .position
            .stepped(heading)
            .wrapped(self.config.grid_width, self.config.grid_height);

        if self.state.snake.collides_with_body(new_pos) {
            self.state.is_alive = false;
            self.state.steps += 1;
            return MoveOutcome {
                ate_food: false,
                collided: true,
            };
        }

        let ate_food = new_pos == self.state.food;
        self.state
            .snake
            .advance_to(Pose::new(new_pos, heading), ate_food);

        if ate_food {
            self.state.score += 1;
            self.state.food = Self::spawn_food(&self.config, &mut self.rng, &self.state.snake);
        }
        self.state.steps += 1;

        MoveOutcome {
            ate_food,
            collided: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_engine() -> GameEngine {
        let config = GameConfig {
            seed: Some(7),
            ..GameConfig::small()
        };
        GameEngine::new(config)
    }

    #[test]
    fn test_new_spawns_centered_snake_facing_up() {
        let engine = seeded_engine();
        let state = engine.state();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.steps, 0);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head.position, GridPoint::new(5, 5));
        assert_eq!(state.snake.head.heading, Heading::Up);
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_advance_moves_head_one_cell() {
        let mut engine = seeded_engine();
        engine.state.food = GridPoint::new(0, 0);

        let outcome = engine.advance();

        assert!(!outcome.collided);
        assert!(!outcome.ate_food);
        assert_eq!(engine.state().snake.head.position, GridPoint::new(5, 6));
        assert_eq!(engine.state().steps, 1);
    }

    #[test]
    fn test_rotation_commands_change_heading() {
        let mut engine = seeded_engine();

        engine.rotate_clockwise();
        assert_eq!(engine.state().snake.head.heading, Heading::Right);

        engine.rotate_counterclockwise();
        engine.rotate_counterclockwise();
        assert_eq!(engine.state().snake.head.heading, Heading::Left);
    }

    #[test]
    fn test_wraparound_at_grid_edge() {
        let mut engine = seeded_engine();
        engine.state.snake = Snake::new(
            Pose::new(GridPoint::new(5, 9), Heading::Up),
            3,
        );
        engine.state.food = GridPoint::new(0, 0);

        let outcome = engine.advance();

        assert!(!outcome.collided);
        assert_eq!(engine.state().snake.head.position, GridPoint::new(5, 0));
    }

    #[test]
    fn test_eating_food_grows_and_respawns() {
        let mut engine = seeded_engine();
        let head = engine.state().snake.head;
        engine.state.food = head.position.stepped(head.heading);
        let initial_length = engine.state().snake.len();

        let outcome = engine.advance();

        assert!(outcome.ate_food);
        assert_eq!(engine.state().score, 1);
        assert_eq!(engine.state().snake.len(), initial_length + 1);
        assert_ne!(engine.state().food, engine.state().snake.head.position);
        assert!(!engine.state().snake.occupies(engine.state().food));
    }

    #[test]
    fn test_self_collision_ends_episode() {
        let mut engine = seeded_engine();
        engine.state.snake = Snake::new(
            Pose::new(GridPoint::new(5, 5), Heading::Right),
            5,
        );
        engine.state.food = GridPoint::new(0, 0);

        // loop counterclockwise back into the body
        engine.advance();
        engine.rotate_counterclockwise();
        engine.advance();
        engine.rotate_counterclockwise();
        engine.advance();
        engine.rotate_counterclockwise();
        let outcome = engine.advance();

        assert!(outcome.collided);
        assert!(!engine.state().is_alive);
    }

    #[test]
    fn test_advance_after_death_is_inert() {
        let mut engine = seeded_engine();
        engine.state.is_alive = false;
        let steps_before = engine.state().steps;

        let outcome = engine.advance();

        assert!(outcome.collided);
        assert_eq!(engine.state().steps, steps_before);
    }

    #[test]
    fn test_reset_restores_fresh_episode() {
        let mut engine = seeded_engine();
        engine.advance();
        engine.state.is_alive = false;

        engine.reset();

        assert!(engine.state().is_alive);
        assert_eq!(engine.state().steps, 0);
        assert_eq!(engine.state().snake.len(), 3);
    }
}
