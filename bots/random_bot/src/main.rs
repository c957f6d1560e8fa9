use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tictactoe::{Board, PlayTurnResponse, Player};
use tictactoe_bot_utils::Bot;

#[derive(Parser)]
struct Args {
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let rng = StdRng::seed_from_u64(seed);

    RandomBot { rng }.run()
}

struct RandomBot {
    rng: StdRng,
}

impl Bot for RandomBot {
    fn new_game(&mut self, _mark: Player) {}

    fn play_turn(&mut self, board: Board) -> PlayTurnResponse {
        // Out of bounds on a full board, which the judge reports as an illegal move
        let (row, col) = board.random_move(&mut self.rng).unwrap_or((-1, -1));
        PlayTurnResponse { row, col }
    }
}
