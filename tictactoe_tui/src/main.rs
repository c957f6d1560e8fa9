mod app;

use std::io::{self, stdout};

use app::{App, Phase};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
    widgets::*,
};
use tictactoe::{visualize_board, GameOutcome, Player};

fn main() -> io::Result<()> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    let mut app = App::new();

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    result?;

    let score = app.scoreboard;
    println!(
        "Thanks for playing! You won {}, the computer won {}, {} draws.",
        score.player, score.computer, score.draws
    );
    Ok(())
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    while app.phase != Phase::Quit {
        terminal.draw(|frame| ui(frame, app))?;
        handle_events(app)?;
    }
    Ok(())
}

fn handle_events(app: &mut App) -> io::Result<()> {
    if event::poll(std::time::Duration::from_millis(16))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == event::KeyEventKind::Press {
                match key.code {
                    KeyCode::Char(c) => app.handle_key(c),
                    KeyCode::Enter => app.confirm(),
                    KeyCode::Esc | KeyCode::Backspace => app.cancel(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

fn mark_style(player: Player) -> Style {
    match player {
        Player::First => Style::new().fg(Color::Green).bold(),
        Player::Second => Style::new().fg(Color::Red).bold(),
    }
}

/// Splits a line of the board drawing so that the marks can be colored.
fn colorize(line: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut plain = String::new();
    for ch in line.chars() {
        let player = match ch {
            'X' => Player::First,
            'O' => Player::Second,
            _ => {
                plain.push(ch);
                continue;
            }
        };
        spans.push(Span::styled(std::mem::take(&mut plain), Style::new().cyan()));
        spans.push(Span::styled(ch.to_string(), mark_style(player)));
    }
    spans.push(Span::styled(plain, Style::new().cyan()));
    Line::from(spans)
}

fn result_banner(outcome: GameOutcome) -> (&'static str, Style) {
    match outcome {
        GameOutcome::Win(Player::First) => ("CONGRATULATIONS! YOU WIN!", mark_style(Player::First)),
        GameOutcome::Win(Player::Second) => {
            ("GAME OVER! COMPUTER WINS!", mark_style(Player::Second))
        }
        _ => ("IT'S A DRAW! WELL PLAYED!", Style::new().yellow().bold()),
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let main_layout = Layout::new(
        Direction::Vertical,
        [
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Length(4),
            Constraint::Min(0),
        ],
    )
    .split(frame.size());

    let rounded = Block::new()
        .border_type(BorderType::Rounded)
        .borders(Borders::all());

    let title = Paragraph::new("TIC-TAC-TOE".bold().cyan())
        .alignment(Alignment::Center)
        .block(rounded.clone());
    frame.render_widget(title, main_layout[0]);

    let score = app.scoreboard;
    let scoreboard = Paragraph::new(vec![
        Line::styled(format!("Player (X):   {}", score.player), mark_style(Player::First)),
        Line::styled(format!("Computer (O): {}", score.computer), mark_style(Player::Second)),
        Line::styled(format!("Draws:        {}", score.draws), Style::new().blue()),
    ])
    .block(rounded.clone().title("Scoreboard").yellow());
    frame.render_widget(scoreboard, main_layout[1]);

    let board_lines: Vec<Line> = visualize_board(&app.board)
        .lines()
        .map(colorize)
        .collect();
    frame.render_widget(
        Paragraph::new(board_lines).block(Block::new().padding(Padding::new(2, 0, 1, 0))),
        main_layout[2],
    );

    let mut status = Vec::new();
    if let Phase::RoundOver(outcome) = app.phase {
        let (banner, style) = result_banner(outcome);
        status.push(Line::styled(banner, style));
    }
    if !app.message.is_empty() {
        status.push(Line::styled(app.message, Style::new().red()));
    }
    status.push(Line::from(app.prompt()));
    frame.render_widget(
        Paragraph::new(status).block(Block::new().padding(Padding::horizontal(2))),
        main_layout[3],
    );

    let instructions = Paragraph::new(vec![
        Line::from("1. You are X, the computer is O"),
        Line::from("2. Type the row (1-3), then the column (1-3)"),
        Line::from("3. Get 3 in a row to win! Esc clears, q quits"),
    ])
    .block(rounded.title("How to play").yellow());
    frame.render_widget(instructions, main_layout[4]);
}
