//! Interactive human-vs-computer session.
//!
//! The human plays X and always moves first; the computer plays O at the
//! configured difficulty. The think delay lives here, never in the engine.

use crate::EngineConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use strictly_tictactoe::{COMPUTER, ComputerPlayer, Game, GameTransition, Outcome, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Tally of finished games in a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Games the human won.
    pub human_wins: u32,
    /// Games the computer won.
    pub computer_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl SessionSummary {
    /// Number of finished games.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins + self.draws
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Player::X) => self.human_wins += 1,
            Outcome::Win(Player::O) => self.computer_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::Undecided => {}
        }
    }
}

/// Runs games until the human quits, declines a rematch or input ends.
#[instrument(skip(input, output))]
pub fn run_session<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    config: &EngineConfig,
) -> Result<SessionSummary> {
    let mut computer = match config.seed() {
        Some(seed) => ComputerPlayer::seeded(COMPUTER, *config.difficulty(), *seed),
        None => ComputerPlayer::new(COMPUTER, *config.difficulty()),
    };
    let mut summary = SessionSummary::default();

    loop {
        writeln!(
            output,
            "New game ({} difficulty). You are X and move first.",
            computer.difficulty()
        )?;

        let Some(outcome) = play_game(&mut input, &mut output, &mut computer, config)? else {
            break;
        };
        summary.record(outcome);
        info!(%outcome, games = summary.games(), "Game finished");

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match read_line(&mut input)? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    writeln!(
        output,
        "Goodbye! You won {}, the computer won {}, {} drawn.",
        summary.human_wins, summary.computer_wins, summary.draws
    )?;
    Ok(summary)
}

/// Plays one game; `None` if the human quit before it finished.
fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    computer: &mut ComputerPlayer,
    config: &EngineConfig,
) -> Result<Option<Outcome>> {
    let mut game = Game::new();

    loop {
        writeln!(output, "\n{}\n", game.board())?;

        let pos = if game.to_move() == computer.mark() {
            writeln!(output, "Computer is thinking...")?;
            if *config.think_delay_ms() > 0 {
                std::thread::sleep(Duration::from_millis(*config.think_delay_ms()));
            }
            let pos = computer.choose(game.board())?;
            writeln!(output, "Computer plays {}", pos)?;
            pos
        } else {
            match prompt_move(input, output, &game)? {
                Some(pos) => pos,
                None => return Ok(None),
            }
        };

        game = match game.place(pos)? {
            GameTransition::InProgress(next) => next,
            finished => {
                let outcome = finished.outcome();
                writeln!(output, "\n{}\n", finished.board())?;
                writeln!(output, "{}", verdict(outcome))?;
                return Ok(Some(outcome));
            }
        };
    }
}

/// Reads until the human names an empty square; `None` on quit or end of input.
fn prompt_move<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &Game<strictly_tictactoe::InProgress>,
) -> Result<Option<Position>> {
    loop {
        write!(output, "Your move (1-9 or a name like \"center\", q to quit): ")?;
        output.flush()?;

        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }

        match Position::from_input(&line) {
            Some(pos) if game.board().is_empty(pos) => {
                debug!(%pos, "Human move accepted");
                return Ok(Some(pos));
            }
            Some(pos) => {
                warn!(%pos, "Human picked an occupied square");
                writeln!(output, "{} is already taken.", pos)?;
            }
            None => {
                warn!(input = %line, "Unrecognized move input");
                writeln!(output, "Not a square: {:?}", line)?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win(Player::X) => "Player wins!",
        Outcome::Win(Player::O) => "Computer wins!",
        Outcome::Draw => "It's a draw!",
        Outcome::Undecided => "Game abandoned.",
    }
}
