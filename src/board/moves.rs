/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

use super::{Piece, PieceKind, Player, Position, Square};

/// Represents the different kinds of moves that can be made during a game.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveKind {
    /// A single piece moving from one square to another, without changing the pieces on the board.
    Quiet,

    /// A piece moving onto a square occupied by an opponent's piece, removing it from the board.
    Capture,

    /// A pawn reaching an opponent's back rank and becoming another piece.
    Promotion,

    /// A pawn capturing onto an opponent's back rank, then becoming another piece.
    CaptureAndPromotion,
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Quiet => "Quiet",
            Self::Capture => "Capture",
            Self::Promotion => "Promotion",
            Self::CaptureAndPromotion => "Capture and Promotion",
        };
        write!(f, "{kind}")
    }
}

/// A completed move, as recorded in a game's history.
///
/// Unlike a move in a search engine, this records everything needed to describe the move without the position
/// it was made in: who moved, what moved, and what (if anything) was removed from the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Player that made this move.
    pub player: Player,

    /// Kind of the moving piece, before any promotion.
    pub piece: PieceKind,

    pub from: Square,
    pub to: Square,

    /// Piece that stood on `to` before the move, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Piece>,

    /// Kind the moving pawn became, if this was a promotion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoted_to: Option<PieceKind>,
}

impl Move {
    /// Creates a new [`Move`] without a capture or promotion.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Move, PieceKind, Player, Square};
    /// let mv = Move::new(Player::Red, PieceKind::Pawn, Square::E2, Square::E4);
    /// assert_eq!(mv.to_string(), "E2E4");
    /// assert!(!mv.is_capture());
    /// ```
    #[inline(always)]
    pub const fn new(player: Player, piece: PieceKind, from: Square, to: Square) -> Self {
        Self {
            player,
            piece,
            from,
            to,
            captured: None,
            promoted_to: None,
        }
    }

    /// Returns this move, marked as having captured `piece`.
    #[inline(always)]
    pub const fn with_capture(mut self, piece: Option<Piece>) -> Self {
        self.captured = piece;
        self
    }

    /// Returns this move, marked as having promoted to `kind`.
    #[inline(always)]
    pub const fn with_promotion(mut self, kind: Option<PieceKind>) -> Self {
        self.promoted_to = kind;
        self
    }

    #[inline(always)]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline(always)]
    pub const fn is_promotion(&self) -> bool {
        self.promoted_to.is_some()
    }

    /// Fetches the [`MoveKind`] of this move.
    pub const fn kind(&self) -> MoveKind {
        match (self.is_capture(), self.is_promotion()) {
            (false, false) => MoveKind::Quiet,
            (true, false) => MoveKind::Capture,
            (false, true) => MoveKind::Promotion,
            (true, true) => MoveKind::CaptureAndPromotion,
        }
    }

    /// The piece standing on `to` once this move is complete.
    #[inline(always)]
    pub const fn placed(&self) -> Piece {
        match self.promoted_to {
            Some(kind) => Piece::new(self.player, kind),
            None => Piece::new(self.player, self.piece),
        }
    }

    /// Parses a move in text form (such as `E2E4` or `D7D8q`) as it would be made in `position`.
    ///
    /// The moving piece, any captured piece, and the moving player are read from `position`.
    /// This does not check whether the move is actually possible.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Move, PieceKind, Player, Position, Square};
    /// let position = Position::default();
    /// let mv = Move::from_text(&position, "b1c3").unwrap();
    /// assert_eq!(mv.player, Player::Red);
    /// assert_eq!(mv.piece, PieceKind::Knight);
    /// assert_eq!(mv.to, Square::C3);
    /// ```
    pub fn from_text(position: &Position, text: &str) -> Result<Self> {
        let (from, rest) = split_square(text)?;
        let (to, rest) = split_square(rest)?;

        let mut promotion = rest.chars();
        let promoted_to = match (promotion.next(), promotion.next()) {
            (None, _) => None,
            (Some(c), None) => Some(PieceKind::from_char(c)?),
            _ => bail!("Invalid move {text:?}: trailing characters {rest:?}"),
        };

        let piece = position
            .piece_at(from)
            .ok_or_else(|| anyhow!("Invalid move {text:?}: no piece on {from}"))?;

        Ok(Self::new(piece.player(), piece.kind(), from, to)
            .with_capture(position.piece_at(to))
            .with_promotion(promoted_to))
    }
}

/// Splits a leading square (a file letter and up to two rank digits) off of `text`.
fn split_square(text: &str) -> Result<(Square, &str)> {
    if !text.starts_with(|c: char| c.is_ascii_alphabetic()) {
        bail!("Invalid move text {text:?}: expected a file letter");
    }

    let digits = text
        .char_indices()
        .skip(1)
        .take_while(|(_, c)| c.is_ascii_digit())
        .count();

    let end = 1 + digits;
    if digits == 0 || text.len() < end {
        bail!("Invalid move text {text:?}: expected a square");
    }

    Ok((text[..end].parse()?, &text[end..]))
}

impl fmt::Display for Move {
    /// A move is displayed as its two squares, followed by the promotion (if any).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promoted_to {
            write!(f, "{}", kind.char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {self} ({})", self.player, self.piece.name(), self.kind())
    }
}

impl<T: AsRef<str>> PartialEq<T> for Move {
    fn eq(&self, other: &T) -> bool {
        self.to_string().eq_ignore_ascii_case(other.as_ref())
    }
}
