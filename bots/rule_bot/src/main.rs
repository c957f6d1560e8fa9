use tictactoe::{Board, Decision, OpponentPolicy, PlayTurnResponse, Player};
use tictactoe_bot_utils::Bot;

use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

struct RuleBot {
    policy: OpponentPolicy,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    RuleBot {
        policy: OpponentPolicy::new(),
    }
    .run()
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

impl Bot for RuleBot {
    fn new_game(&mut self, mark: Player) {
        self.policy = OpponentPolicy::playing(mark);
    }

    fn play_turn(&mut self, board: Board) -> PlayTurnResponse {
        match self.policy.decide(&board) {
            Some(Decision { row, col, tier }) => {
                debug!(%board, mark = ?self.policy.mark(), row, col, ?tier, "Picked a cell");
                PlayTurnResponse { row, col }
            }
            None => {
                // The judge never asks on a full board. Answer with an
                // illegal cell so that the judge reports it.
                warn!(%board, mark = ?self.policy.mark(), "Asked to play on a full board");
                PlayTurnResponse { row: -1, col: -1 }
            }
        }
    }
}
