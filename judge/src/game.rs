use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tictactoe::{Board, GameOutcome, Okay, PlayTurnResponse, Player as Mark, Request};
use tracing::debug;

use crate::error::IllegalTurn;
use crate::player::{Player, Seat};
use crate::recording::Recorder;

#[derive(Debug)]
pub enum RoundResult {
    WonByPlayer { player_idx: usize },
    Draw,
    IllegalMoveByPlayer { player_idx: usize, err: IllegalTurn },
}

/// Plays one round from the empty board to a win or a full board.
///
/// Returns an error only on communication failure, not when an
/// illegal move is played.
pub fn play_round(
    rng: &mut StdRng,
    player_1: &mut Player,
    player_2: &mut Player,
    recorder: &mut Option<Recorder>,
) -> anyhow::Result<RoundResult> {
    // Randomly decide who places X and thereby moves first
    let [player_1_mark, player_2_mark] = {
        let mut arr = [Mark::First, Mark::Second];
        arr.shuffle(rng);
        arr
    };

    let mut seats = [
        Seat::new(player_1, player_1_mark),
        Seat::new(player_2, player_2_mark),
    ];

    // Inform the players about the new round, so that they can reset their state
    for seat in seats.iter_mut() {
        let _: Okay = seat.perform_request(recorder, &Request::NewGame { mark: seat.mark })?;
    }

    let mut current_player_idx = if player_1_mark == Mark::First { 0 } else { 1 };
    let mut board = Board::new();
    let mut move_idx = 0;
    let round_result = loop {
        let current_seat = &mut seats[current_player_idx];
        let PlayTurnResponse { row, col } =
            current_seat.perform_request(recorder, &Request::PlayTurn { board })?;
        if let Err(err) = board.place(row, col, current_seat.mark) {
            break RoundResult::IllegalMoveByPlayer {
                player_idx: current_player_idx,
                err: IllegalTurn {
                    move_idx,
                    mark: current_seat.mark,
                    err,
                },
            };
        }
        match board.outcome() {
            GameOutcome::InProgress => {}
            // Only the player who just moved can have completed a line
            GameOutcome::Win(_) => {
                break RoundResult::WonByPlayer {
                    player_idx: current_player_idx,
                }
            }
            GameOutcome::Draw => break RoundResult::Draw,
        }
        current_player_idx = 1 - current_player_idx;
        move_idx += 1;
    };
    debug!(%board, "Round finished");

    if let Some(rec) = recorder {
        rec.write_game_recording()?;
    }

    Ok(round_result)
}

#[cfg(all(test, unix))]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::PlayerConfig;

    /// A bot that ignores the board and answers with a fixed list of responses.
    fn scripted_player(nick: &str, moves: &[(i8, i8)]) -> Player {
        let mut script = String::from("for r in '[]'");
        for (row, col) in moves {
            script += &format!(r#" '{{"row":{},"col":{}}}'"#, row, col);
        }
        script += r#"; do read line; echo "$r"; done"#;
        Player::from_config(&PlayerConfig {
            nick: String::from(nick),
            cmd: String::from("sh"),
            args: vec![String::from("-c"), script],
        })
        .unwrap()
    }

    #[test]
    fn top_row_wins_in_either_seat() {
        for seed in 0..4 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut alice = scripted_player("alice", &[(0, 0), (0, 1), (0, 2)]);
            let mut bob = scripted_player("bob", &[(1, 0), (1, 1), (2, 2)]);
            let result = play_round(&mut rng, &mut alice, &mut bob, &mut None).unwrap();
            assert!(
                matches!(result, RoundResult::WonByPlayer { player_idx: 0 }),
                "{:?}",
                result
            );
        }
    }

    #[test]
    fn occupied_cell_is_reported() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut alice = scripted_player("alice", &[(0, 0), (0, 0)]);
        let mut bob = scripted_player("bob", &[(1, 1), (1, 2)]);
        let result = play_round(&mut rng, &mut alice, &mut bob, &mut None).unwrap();
        match result {
            RoundResult::IllegalMoveByPlayer { player_idx, err } => {
                assert_eq!(player_idx, 0);
                assert!(matches!(
                    err.err,
                    tictactoe::IllegalMove::InvalidMove { row: 0, col: 0, .. }
                ));
            }
            other => panic!("Expected an illegal move, got {:?}", other),
        }
    }
}
