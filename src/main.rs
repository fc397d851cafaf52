//! Mastermind code-breaker - CLI
//!
//! Plays Mastermind against hidden combinations using an entropy-guided
//! evolutionary search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use mastermind_evo::{
    commands::{BenchmarkConfig, PlayConfig, SolveConfig, run_benchmark, run_play, solve_secret},
    core::Combination,
    game::GameConfig,
    output::{print_benchmark_result, print_game_result, print_solve_result, print_tally},
    solver::{EntropyReference, GeneticConfig, SearchConfig, StrategyKind},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind code-breaker using an entropy-guided evolutionary search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of colors (1-10)
    #[arg(short, long, global = true, default_value = "7")]
    colors: usize,

    /// Number of pegs per combination
    #[arg(short, long, global = true, default_value = "4")]
    length: usize,

    /// Guess proposal strategy
    #[arg(long, global = true, value_enum, default_value_t)]
    strategy: StrategyKind,

    /// Population size of the evolutionary search
    #[arg(long, global = true, default_value = "50")]
    population: usize,

    /// Generations evolved per attempt
    #[arg(long, global = true, default_value = "50")]
    generations: usize,

    /// Crossover rate
    #[arg(long, global = true, default_value = "0.9")]
    crossover: f64,

    /// Population entropy is measured against
    #[arg(long, global = true, value_enum, default_value_t)]
    reference: EntropyReference,

    /// Search from the first attempt instead of playing the fixed opening
    #[arg(long, global = true)]
    no_opening: bool,

    /// Seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play games one after another and keep running statistics (default)
    Play {
        /// Fixed secret such as 3211 (default: random per game)
        #[arg(short, long)]
        secret: Option<String>,

        /// Number of games (default: play until interrupted)
        #[arg(short = 'n', long)]
        games: Option<usize>,
    },

    /// Solve a specific secret and show every step
    Solve {
        /// The secret to solve, one digit per peg
        secret: String,
    },

    /// Benchmark the strategy on random secrets
    Benchmark {
        /// Number of random secrets to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Attempts before a game counts as failed
        #[arg(long, default_value = "20")]
        max_attempts: usize,
    },
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig {
            colors: self.colors,
            pegs: self.length,
            search: SearchConfig {
                genetic: GeneticConfig {
                    population_size: self.population,
                    generations: self.generations,
                    crossover_rate: self.crossover,
                    ..GeneticConfig::default()
                },
                reference: self.reference,
                opening_guess: !self.no_opening,
            },
        };
        config.validate().context("invalid game configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let game = cli.game_config()?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        secret: None,
        games: None,
    });

    match command {
        Commands::Play { secret, games } => {
            run_play_command(game, cli.strategy, secret.as_deref(), games, cli.seed)
        }
        Commands::Solve { secret } => run_solve_command(game, cli.strategy, secret, cli.seed),
        Commands::Benchmark {
            count,
            max_attempts,
        } => run_benchmark_command(game, cli.strategy, count, max_attempts, cli.seed),
    }
}

fn run_play_command(
    game: GameConfig,
    strategy: StrategyKind,
    secret: Option<&str>,
    games: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = PlayConfig::new(game);
    config.strategy = strategy;
    config.secret = secret
        .map(Combination::from_symbols)
        .transpose()
        .context("invalid secret")?;
    config.games = games;
    config.seed = seed;

    run_play(&config, |index, outcome, tally| {
        print_game_result(index, outcome, game.pegs);
        print_tally(tally);
    })
    .context("cannot start play session")?;
    Ok(())
}

fn run_solve_command(
    game: GameConfig,
    strategy: StrategyKind,
    secret: String,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = SolveConfig::new(game, secret);
    config.strategy = strategy;
    config.seed = seed;

    let result = solve_secret(&config).context("cannot solve secret")?;
    print_solve_result(&result, game.pegs, log::log_enabled!(log::Level::Debug));
    Ok(())
}

fn run_benchmark_command(
    game: GameConfig,
    strategy: StrategyKind,
    count: usize,
    max_attempts: usize,
    seed: Option<u64>,
) -> Result<()> {
    println!("Running benchmark on {count} random secrets...");

    let mut config = BenchmarkConfig::new(game, count);
    config.strategy = strategy;
    config.max_attempts = max_attempts;
    config.seed = seed;

    let result = run_benchmark(&config).context("cannot run benchmark")?;
    print_benchmark_result(&result);
    Ok(())
}
