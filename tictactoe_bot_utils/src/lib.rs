use std::io::{BufRead, Write};

use tictactoe::{Board, Okay, Player, PlayTurnResponse, Request};

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, mark: Player);
    fn play_turn(&mut self, board: Board) -> PlayTurnResponse;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.serve(stdin, stdout)
    }

    /// Answers requests read line by line from `input` until EOF or [`Request::Bye`].
    fn serve<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<()> {
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = input.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - the judge has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;

            match req {
                Request::NewGame { mark } => {
                    self.new_game(mark);
                    serde_json::to_writer(&mut output, &Okay())?;
                }
                Request::PlayTurn { board } => {
                    serde_json::to_writer(&mut output, &self.play_turn(board))?
                }
                Request::Bye => break Ok(()),
            }
            writeln!(output)?;
            output.flush()?;
        }
    }
}
