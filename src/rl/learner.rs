use super::config::LearnerConfig;
use super::environment::Environment;
use super::qtable::QTable;
use super::reward::RewardModel;
use super::simulator::simulate;
use super::state::AgentState;
use crate::game::TurnAction;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::warn;

/// Result of one learning tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// The agent observed, acted, and updated its estimates
    Stepped {
        action: TurnAction,
        reward: f32,
        td_error: f32,
        ate_food: bool,
        collided: bool,
    },
    /// The environment was not observable; nothing was learned
    Skipped,
}

/// Running totals for the episode in progress
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpisodeProgress {
    /// Ticks survived so far
    pub steps: u32,
    /// Cumulative reward collected across ticks
    pub alive_score: f32,
    /// Food items reached
    pub food_eaten: u32,
}

/// Tabular Q-learning agent driving one snake
///
/// Owns its value table and reward model; nothing about the learner is
/// global. Once per movement tick the driver calls [`Learner::tick`],
/// which snapshots the environment, picks a turn epsilon-greedily, issues
/// it, advances the world one move, and performs the one-step temporal
/// difference update against the simulated successor state.
///
/// Observation failures never escape: a tick that cannot see a head or a
/// food target is logged and skipped, and the loop carries on.
pub struct Learner {
    config: LearnerConfig,
    q: QTable,
    reward_model: RewardModel,
    rng: SmallRng,
    episode: EpisodeProgress,
}

impl Learner {
    pub fn new(config: LearnerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let reward_model = RewardModel::new(config.reward.clone());

        Self {
            config,
            q: QTable::new(),
            reward_model,
            rng,
            episode: EpisodeProgress::default(),
        }
    }

    /// Run one decision/update cycle against `env`
    pub fn tick<E: Environment>(&mut self, env: &mut E) -> TickOutcome {
        let state = match AgentState::observe(env) {
            Ok(state) => state,
            Err(err) => {
                warn!(error = %err, "skipping learning tick");
                return TickOutcome::Skipped;
            }
        };

        self.q.ensure(&state);
        let action = self.select_action(&state);

        match action {
            TurnAction::DoNothing => {}
            TurnAction::TurnRight => env.rotate_clockwise(),
            TurnAction::TurnLeft => env.rotate_counterclockwise(),
        }
        let outcome = env.advance();

        let next = simulate(&state, action);
        let reward = self.reward_model.reward(&next).total() + self.config.reward.survival_bonus;
        let td_error = self.td_update(&state, action, reward, &next);

        self.episode.steps += 1;
        self.episode.alive_score += reward;
        if outcome.ate_food {
            self.episode.food_eaten += 1;
        }

        TickOutcome::Stepped {
            action,
            reward,
            td_error,
            ate_food: outcome.ate_food,
            collided: outcome.collided,
        }
    }

    /// One-step Q-learning update; returns the temporal difference error
    ///
    /// `Q(s,a) <- Q(s,a) + alpha * (r + gamma * max_a' Q(s',a') - Q(s,a))`
    ///
    /// Both states are ensured first, so the update is safe for keys the
    /// table has never seen.
    pub fn td_update(
        &mut self,
        state: &AgentState,
        action: TurnAction,
        reward: f32,
        next: &AgentState,
    ) -> f32 {
        self.q.ensure(state);
        self.q.ensure(next);

        let old_value = self.q.value(state, action);
        let target = reward + self.config.gamma * self.q.max_value(next);
        let td_error = target - old_value;
        self.q
            .set(state, action, old_value + self.config.alpha * td_error);
        td_error
    }

    /// Epsilon-greedy selection over the fixed action set
    fn select_action(&mut self, state: &AgentState) -> TurnAction {
        if self.config.epsilon > 0.0 && self.rng.gen::<f32>() < self.config.epsilon {
            TurnAction::ALL[self.rng.gen_range(0..TurnAction::COUNT)]
        } else {
            self.q.best_action(state)
        }
    }

    /// Clear per-episode accounting before a new episode starts
    pub fn start_episode(&mut self) {
        self.episode = EpisodeProgress::default();
    }

    /// Override the exploration rate, e.g. to evaluate greedily
    pub fn set_epsilon(&mut self, epsilon: f32) {
        self.config.epsilon = epsilon;
    }

    pub fn q_table(&self) -> &QTable {
        &self.q
    }

    pub fn config(&self) -> &LearnerConfig {
        &self.config
    }

    pub fn episode(&self) -> EpisodeProgress {
        self.episode
    }
}
