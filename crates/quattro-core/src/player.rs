//! The two sides of a game.

use std::fmt;
use std::ops::Not;

use crate::error::BoardError;

/// One of the two players: One (drops `X`) or Two (drops `O`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Total number of players.
    pub const COUNT: usize = 2;

    /// All players in identifier order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Return the numeric identifier (1 or 2).
    #[inline]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Return the other player.
    #[inline]
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Return the character used for this player's pieces in position text.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }

    /// Parse a piece character from position text.
    pub const fn from_symbol(c: char) -> Option<Player> {
        match c {
            'X' => Some(Player::One),
            'O' => Some(Player::Two),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = BoardError;

    fn try_from(id: u8) -> Result<Player, BoardError> {
        match id {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            _ => Err(BoardError::InvalidPlayer { id }),
        }
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}
