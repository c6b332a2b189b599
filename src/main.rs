use anyhow::Result;
use clap::Parser;
use q_snake::game::GameConfig;
use q_snake::modes::{TrainConfig, TrainMode};

#[derive(Parser)]
#[command(name = "q_snake")]
#[command(version, about = "Tabular Q-learning agent for grid Snake")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value = "20")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "20")]
    height: usize,

    /// Number of training episodes
    #[arg(long, default_value = "2000")]
    episodes: usize,

    /// Tick cap per episode
    #[arg(long, default_value = "1000")]
    max_steps: usize,

    /// Greedy episodes to run after training
    #[arg(long, default_value = "20")]
    eval_episodes: usize,

    /// Log progress every N episodes
    #[arg(long, default_value = "100")]
    log_every: usize,

    /// Learning rate
    #[arg(long, default_value = "0.1")]
    alpha: f32,

    /// Discount factor
    #[arg(long, default_value = "0.9")]
    gamma: f32,

    /// Exploration rate
    #[arg(long, default_value = "0.05")]
    epsilon: f32,

    /// Seed for food placement and exploration
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut config = TrainConfig::new(cli.episodes);
    config.game_config = GameConfig {
        seed: cli.seed,
        ..GameConfig::new(cli.width, cli.height)
    };
    config.learner_config.alpha = cli.alpha;
    config.learner_config.gamma = cli.gamma;
    config.learner_config.epsilon = cli.epsilon;
    config.learner_config.seed = cli.seed;
    config.max_steps_per_episode = cli.max_steps;
    config.eval_episodes = cli.eval_episodes;
    config.log_frequency = cli.log_every;

    TrainMode::new(config)?.run()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
