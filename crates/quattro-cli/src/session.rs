//! Turn-based game loop over a line-oriented terminal.

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::command::{Command, parse_command};
use crate::error::CliError;
use crate::game::{Game, GameStatus};

const INPUT_HINT: &str =
    "Input the column you want to place your piece in and press enter, or exit to quit the current game.";

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The game reached a result.
    Finished(GameStatus),
    /// The human left, or input closed, before the game ended.
    Quit,
}

/// Plays one game, reading human moves from `input` and writing the board,
/// prompts and result to `output`.
pub struct Session<R, W> {
    game: Game,
    input: R,
    output: W,
}

impl Session<io::StdinLock<'static>, io::Stdout> {
    /// Create a session on the process's stdin and stdout.
    pub fn stdio(game: Game) -> Self {
        Self::new(game, io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game: Game, input: R, output: W) -> Self {
        Self { game, input, output }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Play until the game ends or the human quits.
    pub fn run(&mut self) -> Result<Outcome, CliError> {
        info!(
            first = self.game.to_move().id(),
            self_play = self.game.is_self_play(),
            two_player = self.game.is_two_player(),
            "game started"
        );
        if self.game.is_two_player() {
            writeln!(self.output, "Player 1 plays X, player 2 plays O.")?;
        } else if !self.game.is_self_play() {
            writeln!(self.output, "You play X, the computer plays O.")?;
        }

        loop {
            writeln!(self.output, "{}", self.game.board().pretty())?;

            let status = self.game.status();
            if status != GameStatus::InProgress {
                writeln!(self.output, "{}", self.banner(status))?;
                info!(?status, moves = self.game.moves_played(), "game finished");
                return Ok(Outcome::Finished(status));
            }

            if self.game.controller(self.game.to_move()).is_human() {
                if !self.human_turn()? {
                    return Ok(Outcome::Quit);
                }
            } else {
                self.engine_turn()?;
            }
        }
    }

    fn engine_turn(&mut self) -> Result<(), CliError> {
        let player = self.game.to_move();
        writeln!(self.output, "Computer is thinking...")?;
        self.output.flush()?;

        let col = self
            .game
            .engine_move()
            .expect("unfinished board has a legal column");
        self.game.apply(col)?;
        writeln!(self.output, "{player} drops in column {}", col + 1)?;
        Ok(())
    }

    /// Read lines until one is a legal move. Returns `false` if the human quit
    /// or input closed.
    fn human_turn(&mut self) -> Result<bool, CliError> {
        if self.game.is_two_player() {
            let player = self.game.to_move();
            writeln!(self.output, "{player} ({}), your turn:", player.symbol())?;
        } else {
            writeln!(self.output, "Your turn:")?;
        }
        self.output.flush()?;

        loop {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                info!("input closed");
                return Ok(false);
            }

            match parse_command(&line) {
                Ok(Command::Quit) => {
                    writeln!(self.output, "Game over! You quit the game!")?;
                    return Ok(false);
                }
                Ok(Command::Drop(col)) => match self.game.apply(col) {
                    Ok(_) => return Ok(true),
                    Err(CliError::ColumnFull { column }) => {
                        warn!(column, "column is full");
                        writeln!(self.output, "That column is full, try another one!")?;
                    }
                    Err(e) => return Err(e),
                },
                Err(e) => {
                    warn!(error = %e, "rejected input");
                    writeln!(self.output, "{INPUT_HINT}")?;
                }
            }
            self.output.flush()?;
        }
    }

    fn banner(&self, status: GameStatus) -> String {
        let text = match status {
            // Human against engine speaks to the human; otherwise name the winner.
            GameStatus::Won(player) => {
                let winner = self.game.controller(player).is_human();
                let loser = self.game.controller(player.opponent()).is_human();
                match (winner, loser) {
                    (true, false) => "Congratulations! You've won!".to_string(),
                    (false, true) => "Game over! The computer won.".to_string(),
                    _ => format!("{player} ({}) wins!", player.symbol()),
                }
            }
            GameStatus::Draw => "A tie! What a shame...".to_string(),
            GameStatus::InProgress => String::new(),
        };
        framed(&text)
    }
}

/// Surround `text` with a box of `#`.
fn framed(text: &str) -> String {
    let bar = "#".repeat(text.len() + 6);
    let blank = format!("#{}#", " ".repeat(text.len() + 4));
    format!("{bar}\n{blank}\n#  {text}  #\n{blank}\n{bar}")
}
