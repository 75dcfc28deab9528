/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Represents one of the three players, and the home section they start in.
///
/// Red always moves first, and turns rotate Red, White, Black.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    #[default]
    Red,
    White,
    Black,
}

impl Player {
    /// Number of players.
    pub const COUNT: usize = 3;

    /// An array of all players, in turn order.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Red, Self::White, Self::Black]
    }

    /// Creates a new [`Player`] from an index in turn order.
    ///
    /// # Example
    /// ```
    /// # use yalta::Player;
    /// assert_eq!(Player::from_index(1).unwrap(), Player::White);
    /// assert!(Player::from_index(3).is_err());
    /// ```
    #[inline(always)]
    pub fn from_index(index: usize) -> Result<Self> {
        match index {
            0 => Ok(Self::Red),
            1 => Ok(Self::White),
            2 => Ok(Self::Black),
            _ => bail!("Invalid index for Player: Must be between [0,2]. Got {index}."),
        }
    }

    /// Creates a new [`Player`] from an index in turn order, ignoring safety checks.
    ///
    /// Indices above `2` map to Black.
    #[inline(always)]
    pub const fn from_index_unchecked(index: usize) -> Self {
        debug_assert!(index < Self::COUNT, "Invalid index for Player");
        match index {
            0 => Self::Red,
            1 => Self::White,
            _ => Self::Black,
        }
    }

    /// Returns this [`Player`] as a `usize`.
    ///
    /// Useful for indexing into lists.
    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// The player whose turn comes after this one.
    ///
    /// # Example
    /// ```
    /// # use yalta::Player;
    /// assert_eq!(Player::Red.next(), Player::White);
    /// assert_eq!(Player::White.next(), Player::Black);
    /// assert_eq!(Player::Black.next(), Player::Red);
    /// ```
    #[inline(always)]
    pub const fn next(&self) -> Self {
        Self::from_index_unchecked((self.index() + 1) % Self::COUNT)
    }

    /// The player whose turn came before this one.
    #[inline(always)]
    pub const fn prev(&self) -> Self {
        Self::from_index_unchecked((self.index() + Self::COUNT - 1) % Self::COUNT)
    }

    /// Creates a new [`Player`] from its notation character.
    ///
    /// # Example
    /// ```
    /// # use yalta::Player;
    /// assert_eq!(Player::from_char('w').unwrap(), Player::White);
    /// assert!(Player::from_char('x').is_err());
    /// ```
    #[inline(always)]
    pub fn from_char(player: char) -> Result<Self> {
        match player {
            'r' | 'R' => Ok(Self::Red),
            'w' | 'W' => Ok(Self::White),
            'b' | 'B' => Ok(Self::Black),
            _ => bail!("Invalid char for Player: Got {player}."),
        }
    }

    /// Notation character of this [`Player`]. Always lowercase.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Red => 'r',
            Self::White => 'w',
            Self::Black => 'b',
        }
    }

    /// Fetches a human-readable name for this [`Player`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Black => "black",
        }
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Ok(Self::Red),
            "w" | "white" => Ok(Self::White),
            "b" | "black" => Ok(Self::Black),
            _ => bail!("Invalid Player: Got {s:?}."),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents the kind (or "role") that a piece can be.
///
/// These have no [`Player`] associated with them. See [`Piece`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Number of piece variants.
    pub const COUNT: usize = 6;

    /// An array of all 6 [`PieceKind`]s.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        use PieceKind::*;
        [Pawn, Knight, Bishop, Rook, Queen, King]
    }

    /// The kinds a pawn may be promoted to.
    #[inline(always)]
    pub const fn promotions() -> [Self; 4] {
        use PieceKind::*;
        [Queen, Rook, Bishop, Knight]
    }

    /// Returns `true` if a pawn may be promoted to this kind.
    ///
    /// # Example
    /// ```
    /// # use yalta::PieceKind;
    /// assert!(PieceKind::Knight.is_promotion_target());
    /// assert!(!PieceKind::King.is_promotion_target());
    /// assert!(!PieceKind::Pawn.is_promotion_target());
    /// ```
    #[inline(always)]
    pub const fn is_promotion_target(&self) -> bool {
        !matches!(self, Self::Pawn | Self::King)
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Creates a new [`PieceKind`] from its notation character.
    ///
    /// # Example
    /// ```
    /// # use yalta::PieceKind;
    /// let queen = PieceKind::from_char('Q');
    /// assert_eq!(queen.unwrap(), PieceKind::Queen);
    /// ```
    #[inline(always)]
    pub fn from_char(kind: char) -> Result<Self> {
        match kind {
            'P' | 'p' => Ok(Self::Pawn),
            'N' | 'n' => Ok(Self::Knight),
            'B' | 'b' => Ok(Self::Bishop),
            'R' | 'r' => Ok(Self::Rook),
            'Q' | 'q' => Ok(Self::Queen),
            'K' | 'k' => Ok(Self::King),
            _ => bail!("Invalid char for PieceKind: Got {kind}."),
        }
    }

    /// Fetches a human-readable name for this [`PieceKind`].
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }

    /// Notation character of this [`PieceKind`]. Always lowercase.
    #[inline(always)]
    pub const fn char(&self) -> char {
        match self {
            Self::Pawn => 'p',
            Self::Knight => 'n',
            Self::Bishop => 'b',
            Self::Rook => 'r',
            Self::Queen => 'q',
            Self::King => 'k',
        }
    }
}

impl FromStr for PieceKind {
    type Err = anyhow::Error;
    /// Parses either a single notation character or a full name, such as `"knight"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if let Some(kind) = Self::all().into_iter().find(|kind| kind.name() == lower) {
            return Ok(kind);
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => bail!("Invalid PieceKind: Got {s:?}."),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

impl fmt::Debug for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Represents a piece on the game board.
///
/// Internally, this is represented as a `u8` with the following bit pattern:
///
/// ```text
///     000 00 000
///      |  |   |
///      |  |   +- Represents the PieceKind.
///      |  +- Represents the Player.
///      +- Unused.
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "PieceRepr", from = "PieceRepr")]
pub struct Piece(u8);

impl Piece {
    /// Start index of player bits.
    const PLAYER_BITS: u8 = 3;
    /// Mask for the kind bits.
    const KIND_MASK: u8 = 0b0000_0111;

    /// Creates a new [`Piece`] from the given [`Player`] and [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, Player, PieceKind};
    /// let knight = Piece::new(Player::White, PieceKind::Knight);
    /// assert_eq!(knight.to_string(), "wn");
    /// ```
    #[inline(always)]
    pub const fn new(player: Player, kind: PieceKind) -> Self {
        Self((player as u8) << Self::PLAYER_BITS | kind as u8)
    }

    /// Fetches the [`Player`] that owns this [`Piece`].
    #[inline(always)]
    pub const fn player(&self) -> Player {
        Player::from_index_unchecked((self.0 >> Self::PLAYER_BITS) as usize)
    }

    /// Fetches the [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn kind(&self) -> PieceKind {
        match self.0 & Self::KIND_MASK {
            0 => PieceKind::Pawn,
            1 => PieceKind::Knight,
            2 => PieceKind::Bishop,
            3 => PieceKind::Rook,
            4 => PieceKind::Queen,
            _ => PieceKind::King,
        }
    }

    /// Fetches the [`Player`] and [`PieceKind`] of this [`Piece`].
    #[inline(always)]
    pub const fn parts(&self) -> (Player, PieceKind) {
        (self.player(), self.kind())
    }

    /// Returns `true` if this [`Piece`] is a Pawn.
    #[inline(always)]
    pub const fn is_pawn(&self) -> bool {
        matches!(self.kind(), PieceKind::Pawn)
    }

    /// Returns `true` if this [`Piece`] is a King.
    #[inline(always)]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// Returns a new [`Piece`] of the same [`Player`], but with the given [`PieceKind`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, Player, PieceKind};
    /// let pawn = Piece::new(Player::Black, PieceKind::Pawn);
    /// let queen = pawn.promoted(PieceKind::Queen);
    /// assert_eq!(queen, Piece::new(Player::Black, PieceKind::Queen));
    /// ```
    #[inline(always)]
    pub const fn promoted(self, kind: PieceKind) -> Self {
        Self::new(self.player(), kind)
    }

    /// Parses a [`Piece`] from its two-character notation: player char, then kind char.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, Player, PieceKind};
    /// let king = Piece::from_notation("bk").unwrap();
    /// assert_eq!(king, Piece::new(Player::Black, PieceKind::King));
    /// ```
    pub fn from_notation(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let player = chars
            .next()
            .context("Invalid Piece: String must not be empty")?;
        let kind = chars
            .next()
            .with_context(|| format!("Invalid Piece: Missing kind in {s:?}"))?;
        if chars.next().is_some() {
            bail!("Invalid Piece: Expected exactly 2 characters. Got {s:?}");
        }

        Ok(Self::new(Player::from_char(player)?, PieceKind::from_char(kind)?))
    }
}

impl FromStr for Piece {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.player().char(), self.kind().char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.player().name(), self.kind().name())
    }
}

/// Serialized form of a [`Piece`].
#[derive(Serialize, Deserialize)]
struct PieceRepr {
    player: Player,
    kind: PieceKind,
}

impl From<Piece> for PieceRepr {
    fn from(piece: Piece) -> Self {
        Self {
            player: piece.player(),
            kind: piece.kind(),
        }
    }
}

impl From<PieceRepr> for Piece {
    fn from(repr: PieceRepr) -> Self {
        Self::new(repr.player, repr.kind)
    }
}
