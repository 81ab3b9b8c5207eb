//! Command-line configuration.

use quattro_core::{Board, Player};
use quattro_engine::{SearchConfig, Searcher};

use crate::difficulty::Difficulty;
use crate::error::CliError;
use crate::game::{Controller, Game};

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Player 1 is human, player 2 an engine.
    #[default]
    HumanVsEngine,
    /// Both sides are human, taking turns at one terminal.
    TwoPlayer,
    /// Both sides are engines; no input is read.
    SelfPlay,
}

impl Mode {
    fn flag(self) -> &'static str {
        match self {
            Mode::HumanVsEngine => "human vs engine",
            Mode::TwoPlayer => "--two-player",
            Mode::SelfPlay => "--self-play",
        }
    }
}

/// Which side moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstPlayer {
    /// Player 1 (the human, or the first engine in self-play).
    Human,
    /// Player 2 (the engine, or the second human in two-player mode).
    Engine,
    /// Decided by a coin flip when the game starts.
    #[default]
    Random,
}

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub difficulty: Difficulty,
    /// Overrides the difficulty's depth when set.
    pub depth: Option<u8>,
    pub threads: usize,
    pub first: FirstPlayer,
    pub mode: Mode,
    /// Starting position; the empty board when unset.
    pub position: Option<Board>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            depth: None,
            threads: 1,
            first: FirstPlayer::default(),
            mode: Mode::default(),
            position: None,
        }
    }
}

impl Config {
    /// Parse flags, not including the program name.
    ///
    /// Supports:
    /// - `--difficulty <1-5>`
    /// - `--depth <plies>`
    /// - `--threads <n>`
    /// - `--first <human|engine|random>`
    /// - `--self-play`
    /// - `--two-player`
    /// - `--position <text>`
    pub fn from_args<I, S>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            match arg {
                "--difficulty" => {
                    config.difficulty = next_value(&mut args, "--difficulty")?.parse()?;
                }
                "--depth" => {
                    config.depth = Some(parse_value(&mut args, "--depth")?);
                }
                "--threads" => {
                    let threads: usize = parse_value(&mut args, "--threads")?;
                    if threads == 0 {
                        return Err(CliError::InvalidValue {
                            flag: "--threads",
                            value: threads.to_string(),
                        });
                    }
                    config.threads = threads;
                }
                "--first" => {
                    let value = next_value(&mut args, "--first")?;
                    config.first = match value.as_str() {
                        "human" => FirstPlayer::Human,
                        "engine" => FirstPlayer::Engine,
                        "random" => FirstPlayer::Random,
                        other => {
                            return Err(CliError::InvalidValue {
                                flag: "--first",
                                value: other.to_string(),
                            });
                        }
                    };
                }
                "--self-play" => config.set_mode(Mode::SelfPlay)?,
                "--two-player" => config.set_mode(Mode::TwoPlayer)?,
                "--position" => {
                    config.position = Some(next_value(&mut args, "--position")?.parse()?);
                }
                _ => {
                    return Err(CliError::UnknownArgument {
                        arg: arg.to_string(),
                    });
                }
            }
        }

        Ok(config)
    }

    fn set_mode(&mut self, mode: Mode) -> Result<(), CliError> {
        if self.mode != Mode::HumanVsEngine && self.mode != mode {
            return Err(CliError::ConflictingFlags {
                first: self.mode.flag(),
                second: mode.flag(),
            });
        }
        self.mode = mode;
        Ok(())
    }

    /// Engine settings derived from this configuration.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth.unwrap_or(self.difficulty.depth()),
            threads: self.threads,
        }
    }

    /// Set up a new game.
    ///
    /// Engine sides search with [`search_config`](Self::search_config).
    pub fn new_game(&self) -> Game {
        let first = match self.first {
            FirstPlayer::Human => Player::One,
            FirstPlayer::Engine => Player::Two,
            FirstPlayer::Random => {
                if rand::random() {
                    Player::One
                } else {
                    Player::Two
                }
            }
        };
        let engine = |player| Controller::Engine(Searcher::with_config(player, self.search_config()));
        let (one, two) = match self.mode {
            Mode::HumanVsEngine => (Controller::Human, engine(Player::Two)),
            Mode::TwoPlayer => (Controller::Human, Controller::Human),
            Mode::SelfPlay => (engine(Player::One), engine(Player::Two)),
        };

        Game::new(self.position.unwrap_or_default(), first, one, two)
    }
}

fn next_value<I, S>(args: &mut I, flag: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    args.next()
        .map(|s| s.as_ref().to_string())
        .ok_or(CliError::MissingValue { flag })
}

fn parse_value<T, I, S>(args: &mut I, flag: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let value = next_value(args, flag)?;
    value.parse().map_err(|_| CliError::InvalidValue { flag, value })
}

#[cfg(test)]
mod tests {
    use quattro_core::{Board, Player};

    use super::{Config, FirstPlayer, Mode};
    use crate::difficulty::Difficulty;
    use crate::error::CliError;
    use crate::game::Controller;

    fn parse(args: &[&str]) -> Result<Config, CliError> {
        Config::from_args(args.iter().copied())
    }

    #[test]
    fn no_args_gives_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.first, FirstPlayer::Random);
        assert_eq!(config.search_config().depth, 4);
        assert_eq!(config.search_config().threads, 1);
    }

    #[test]
    fn parse_all_flags() {
        let config = parse(&[
            "--difficulty",
            "2",
            "--threads",
            "3",
            "--first",
            "engine",
            "--self-play",
            "--position",
            "7/7/7/7/7/3X3",
        ])
        .unwrap();
        assert_eq!(config.difficulty, Difficulty::Easy);
        assert_eq!(config.threads, 3);
        assert_eq!(config.first, FirstPlayer::Engine);
        assert_eq!(config.mode, Mode::SelfPlay);
        assert_eq!(config.position.unwrap().piece_count(), 1);
        assert_eq!(config.search_config().depth, 1);
    }

    #[test]
    fn depth_overrides_difficulty() {
        let config = parse(&["--difficulty", "5", "--depth", "3"]).unwrap();
        assert_eq!(config.search_config().depth, 3);
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(CliError::UnknownArgument { .. })));
        assert!(matches!(parse(&["--depth"]), Err(CliError::MissingValue { flag: "--depth" })));
        assert!(matches!(parse(&["--depth", "x"]), Err(CliError::InvalidValue { .. })));
        assert!(matches!(parse(&["--threads", "0"]), Err(CliError::InvalidValue { .. })));
        assert!(matches!(parse(&["--first", "nobody"]), Err(CliError::InvalidValue { .. })));
        assert!(matches!(parse(&["--difficulty", "9"]), Err(CliError::InvalidDifficulty { .. })));
        assert!(matches!(parse(&["--position", "7/7"]), Err(CliError::BadPosition { .. })));
    }

    #[test]
    fn new_game_assigns_controllers() {
        let config = parse(&["--first", "human", "--position", "7/7/7/7/7/3X3"]).unwrap();
        let game = config.new_game();
        assert_eq!(game.to_move(), Player::One);
        assert!(game.controller(Player::One).is_human());
        assert!(!game.controller(Player::Two).is_human());
        assert_eq!(game.board().piece_count(), 1);

        let game = parse(&["--self-play", "--first", "engine"]).unwrap().new_game();
        assert!(game.is_self_play());
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn two_player_mode_has_no_engine() {
        let config = parse(&["--two-player", "--first", "engine"]).unwrap();
        assert_eq!(config.mode, Mode::TwoPlayer);
        let game = config.new_game();
        assert!(game.is_two_player());
        assert!(!game.is_self_play());
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.engine_move(), None);
    }

    #[test]
    fn modes_cannot_be_combined() {
        assert!(matches!(
            parse(&["--two-player", "--self-play"]),
            Err(CliError::ConflictingFlags { first: "--two-player", second: "--self-play" })
        ));
        // Repeating the same mode is harmless
        assert_eq!(parse(&["--self-play", "--self-play"]).unwrap().mode, Mode::SelfPlay);
    }

    #[test]
    fn engine_sides_use_the_configured_depth() {
        let game = parse(&["--self-play", "--depth", "2"]).unwrap().new_game();
        for player in Player::ALL {
            match game.controller(player) {
                Controller::Engine(searcher) => {
                    assert_eq!(searcher.depth(), 2);
                    assert_eq!(searcher.agent(), player);
                }
                Controller::Human => panic!("self-play has no human side"),
            }
        }
    }
}
