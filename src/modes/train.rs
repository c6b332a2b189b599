//! Training mode for the tabular Q-learning agent
//!
//! Runs the learner against the headless game engine for a configured
//! number of episodes, tracks rolling statistics, and finishes with a
//! greedy evaluation pass over the learned table.

use anyhow::{anyhow, Result};

use crate::game::{GameConfig, GameEngine};
use crate::metrics::TrainingStats;
use crate::rl::{Learner, LearnerConfig, TickOutcome};

/// Configuration for training mode
#[derive(Debug, Clone)]
pub struct TrainConfig {
    /// Number of episodes to train
    pub num_episodes: usize,

    /// Hard cap on ticks per episode, so an agent circling forever
    /// still ends its episode
    pub max_steps_per_episode: usize,

    /// Greedy episodes to run after training
    pub eval_episodes: usize,

    /// Log training progress every N episodes
    pub log_frequency: usize,

    /// Game configuration (grid size, spawn, seed)
    pub game_config: GameConfig,

    /// Learning hyperparameters
    pub learner_config: LearnerConfig,
}

impl TrainConfig {
    /// Create a training configuration with defaults for everything but
    /// the episode count
    pub fn new(num_episodes: usize) -> Self {
        Self {
            num_episodes,
            max_steps_per_episode: 1000,
            eval_episodes: 20,
            log_frequency: 100,
            game_config: GameConfig::default(),
            learner_config: LearnerConfig::default(),
        }
    }
}

/// Training mode: episode loop, progress logging, final greedy evaluation
pub struct TrainMode {
    engine: GameEngine,
    learner: Learner,
    stats: TrainingStats,
    config: TrainConfig,
}

impl TrainMode {
    /// Create a new training mode
    ///
    /// Fails if the learning hyperparameters are out of range.
    pub fn new(config: TrainConfig) -> Result<Self> {
        config
            .learner_config
            .validate()
            .map_err(|message| anyhow!("invalid learner configuration: {message}"))?;

        let engine = GameEngine::new(config.game_config.clone());
        let learner = Learner::new(config.learner_config.clone());
        // 100-episode rolling window
        let stats = TrainingStats::new(100);

        Ok(Self {
            engine,
            learner,
            stats,
            config,
        })
    }

    /// Run the full training loop, then the greedy evaluation pass
    pub fn run(&mut self) -> Result<()> {
        self.print_header();

        for episode in 0..self.config.num_episodes {
            let (reward, steps, score) = self.run_episode();
            self.stats.record_episode(reward, steps, score);

            if (episode + 1) % self.config.log_frequency == 0 {
                println!(
                    "[Episode {}/{}] {}",
                    episode + 1,
                    self.config.num_episodes,
                    self.stats.format_summary()
                );
            }
        }

        println!("\nTraining complete!");
        println!("{}", self.stats.format_summary());

        if self.config.eval_episodes > 0 {
            self.evaluate();
        }

        Ok(())
    }

    /// Run a single episode to collision or the step cap
    ///
    /// Returns the cumulative reward, ticks survived, and food eaten.
    fn run_episode(&mut self) -> (f32, usize, u32) {
        self.engine.reset();
        self.learner.start_episode();

        let mut ticks = 0;
        while ticks < self.config.max_steps_per_episode {
            ticks += 1;
            match self.learner.tick(&mut self.engine) {
                TickOutcome::Stepped {
                    td_error, collided, ..
                } => {
                    self.stats
                        .record_update(td_error, self.learner.q_table().len());
                    if collided {
                        break;
                    }
                }
                TickOutcome::Skipped => continue,
            }
        }

        let progress = self.learner.episode();
        (
            progress.alive_score,
            progress.steps as usize,
            progress.food_eaten,
        )
    }

    /// Greedy pass over the learned table
    ///
    /// Exploration is switched off and restored afterwards; learning stays
    /// online during the pass, as it does for the live agent.
    fn evaluate(&mut self) {
        let trained_epsilon = self.learner.config().epsilon;
        self.learner.set_epsilon(0.0);

        let mut eval_stats = TrainingStats::new(self.config.eval_episodes);
        for _ in 0..self.config.eval_episodes {
            let (reward, steps, score) = self.run_episode();
            eval_stats.record_episode(reward, steps, score);
        }

        self.learner.set_epsilon(trained_epsilon);

        println!("\nGreedy evaluation ({} episodes):", self.config.eval_episodes);
        println!("{}", eval_stats.format_summary());
    }

    fn print_header(&self) {
        println!("{}", "=".repeat(70));
        println!("Tabular Q-learning - Snake");
        println!("{}", "=".repeat(70));
        println!("Episodes: {}", self.config.num_episodes);
        println!(
            "Grid: {}x{} (wraparound)",
            self.config.game_config.grid_width, self.config.game_config.grid_height
        );
        println!("Learner:");
        println!("  Alpha: {}", self.config.learner_config.alpha);
        println!("  Gamma: {}", self.config.learner_config.gamma);
        println!("  Epsilon: {}", self.config.learner_config.epsilon);
        println!(
            "  Food bonus: {} | Collision penalty: {} | Survival bonus: {}",
            self.config.learner_config.reward.food_bonus,
            self.config.learner_config.reward.collision_penalty,
            self.config.learner_config.reward.survival_bonus
        );
        println!("Step cap: {} per episode", self.config.max_steps_per_episode);
        println!("Logging: Every {} episodes", self.config.log_frequency);
        println!("{}", "=".repeat(70));
        println!();
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }

    pub fn learner(&self) -> &Learner {
        &self.learner
    }
}
