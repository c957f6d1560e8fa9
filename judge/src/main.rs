use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::Parser;
use judge::{
    play_round, round_robin, run_matchup, tournament_report, MatchSettings, Player, PlayerConfig,
    Recorder,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Path to the config JSON files of players
    #[clap(num_args(2..), value_delimiter = ' ')]
    player_configs: Vec<PathBuf>,

    /// Rounds per pair of players
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// End a matchup at its first illegal move
    #[arg(short, long, default_value_t = false)]
    stop_on_illegal_move: bool,

    /// Directory to write one JSON recording per round into
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = args
        .record_games_to_directory
        .map(Recorder::new)
        .transpose()?;

    let player_configs = args
        .player_configs
        .iter()
        .map(|path| PlayerConfig::load(path))
        .collect::<Result<Vec<PlayerConfig>, anyhow::Error>>()?;
    let nicks: Vec<String> = player_configs.iter().map(|c| c.nick.clone()).collect();

    let settings = MatchSettings {
        num_games: args.num_games,
        stop_on_illegal_move: args.stop_on_illegal_move,
    };
    let mut results = BTreeMap::new();
    for (i1, i2) in round_robin(player_configs.len()) {
        let mut player_1 = Player::from_config(&player_configs[i1])?;
        let mut player_2 = Player::from_config(&player_configs[i2])?;
        let score = run_matchup([nicks[i1].as_str(), nicks[i2].as_str()], settings, || {
            play_round(&mut rng, &mut player_1, &mut player_2, &mut recorder)
        })?;
        eprintln!("{}", score.summary(&nicks[i1], &nicks[i2]));
        results.insert((i1, i2), score);
    }

    if player_configs.len() > 2 {
        println!("\n{}", tournament_report(&nicks, &results));
    }

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .with(Targets::new().with_default(level))
        .init();
}
