use std::collections::BTreeMap;
use std::error::Error;

use itertools::Itertools;
use tracing::{debug, info};

use crate::game::RoundResult;
use crate::score::MatchScore;

/// Settings shared by every matchup of a tournament.
#[derive(Clone, Copy, Debug)]
pub struct MatchSettings {
    pub num_games: usize,
    pub stop_on_illegal_move: bool,
}

/// All pairs `(i, j)` with `i < j` among `num_players` players.
pub fn round_robin(num_players: usize) -> Vec<(usize, usize)> {
    (0..num_players).tuple_combinations().collect()
}

/// Plays up to `settings.num_games` rounds between two players and tallies them.
///
/// `play` is called once per round. A communication error aborts the matchup.
pub fn run_matchup<F>(
    names: [&str; 2],
    settings: MatchSettings,
    mut play: F,
) -> anyhow::Result<MatchScore>
where
    F: FnMut() -> anyhow::Result<RoundResult>,
{
    let mut score = MatchScore::default();
    for game_idx in 0..settings.num_games {
        let result = play()?;
        score.record(&result);
        match &result {
            RoundResult::WonByPlayer { player_idx } => {
                debug!(winner = names[*player_idx], game_idx);
            }
            RoundResult::Draw => debug!(game_idx, "Draw"),
            RoundResult::IllegalMoveByPlayer { player_idx, err } => {
                info!(
                    player = names[*player_idx],
                    game_idx,
                    reason = %error_chain(err),
                    "Illegal move"
                );
                if settings.stop_on_illegal_move {
                    break;
                }
            }
        }
    }
    Ok(score)
}

/// The error and all of its sources, joined with `": "`.
pub fn error_chain(err: &(dyn Error + 'static)) -> String {
    std::iter::successors(Some(err), |&e| e.source())
        .map(|e| e.to_string())
        .join(": ")
}

/// Totals of one player over all of its matchups.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Standing {
    pub wins: usize,
    pub losses: usize,
    pub draws: usize,
    pub illegal_moves: usize,
}

impl Standing {
    /// Two points per win and one per draw.
    pub fn points(&self) -> usize {
        2 * self.wins + self.draws
    }
}

/// Sums up the matchups for each player, in the order of `nicks`.
pub fn standings(nicks: &[String], results: &BTreeMap<(usize, usize), MatchScore>) -> Vec<Standing> {
    let mut standings = vec![Standing::default(); nicks.len()];
    for (&(i, j), score) in results {
        for (player, side) in [(i, 0), (j, 1)] {
            let standing = &mut standings[player];
            standing.wins += score.wins[side];
            standing.losses += score.wins[1 - side];
            standing.draws += score.draws;
            standing.illegal_moves += score.illegal_moves[side];
        }
    }
    standings
}

/// The per-matchup percentages followed by a table of players ranked by points.
pub fn tournament_report(nicks: &[String], results: &BTreeMap<(usize, usize), MatchScore>) -> String {
    let mut report = String::from("Matchups (p1 win %, p2 win %, draw %):\n");
    for (&(i, j), score) in results {
        let [win_1, win_2, draw] = score.percentages();
        report += &format!(
            "  {:>12} vs {:<12} {:5.1}% {:5.1}% {:5.1}%\n",
            nicks[i], nicks[j], win_1, win_2, draw
        );
    }

    report += &format!(
        "\n{:<4} {:<12} {:>6} {:>4} {:>4} {:>4} {:>7}\n",
        "rank", "player", "points", "won", "lost", "draw", "illegal"
    );
    let ranked = standings(nicks, results)
        .into_iter()
        .enumerate()
        .sorted_by(|(a_idx, a), (b_idx, b)| {
            b.points()
                .cmp(&a.points())
                .then_with(|| nicks[*a_idx].cmp(&nicks[*b_idx]))
        });
    for (rank, (idx, standing)) in ranked.enumerate() {
        report += &format!(
            "{:<4} {:<12} {:>6} {:>4} {:>4} {:>4} {:>7}\n",
            rank + 1,
            nicks[idx],
            standing.points(),
            standing.wins,
            standing.losses,
            standing.draws,
            standing.illegal_moves
        );
    }
    report
}
