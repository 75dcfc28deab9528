/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};

use crate::{Move, Piece, Player, Position, Square};

/// A pawn move that reached a promotion square and is waiting for the player to pick a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
    pub player: Player,

    /// Piece that stood on `to` before the pawn arrived.
    pub captured: Option<Piece>,
}

/// Where the interaction protocol currently stands.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum TurnState {
    /// Nothing is selected.
    #[default]
    Idle,

    /// One of the current player's pieces is selected, and any of `destinations` may be picked to move it.
    Selected {
        square: Square,
        destinations: Vec<Square>,
    },

    /// An opponent's piece is being inspected. Its destinations are informational only.
    PreviewOnly {
        square: Square,
        destinations: Vec<Square>,
    },

    /// A pawn has reached a promotion square. Nothing else can happen until a piece is chosen.
    AwaitingPromotion(PendingPromotion),
}

impl TurnState {
    /// The selected or previewed square, if any.
    pub fn selection(&self) -> Option<Square> {
        match self {
            Self::Selected { square, .. } | Self::PreviewOnly { square, .. } => Some(*square),
            _ => None,
        }
    }

    /// The highlighted destinations, tagged with whether they can be acted upon.
    pub fn destinations(&self) -> Option<Destinations<'_>> {
        match self {
            Self::Selected { destinations, .. } => Some(Destinations::Actionable(destinations)),
            Self::PreviewOnly { destinations, .. } => Some(Destinations::Preview(destinations)),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    #[inline(always)]
    pub fn is_awaiting_promotion(&self) -> bool {
        matches!(self, Self::AwaitingPromotion(_))
    }
}

/// Highlighted destination squares, as a front end would draw them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destinations<'a> {
    /// Destinations of the current player's selected piece. Picking one makes the move.
    Actionable(&'a [Square]),

    /// Destinations of an opponent's piece. Shown, never playable.
    Preview(&'a [Square]),
}

impl<'a> Destinations<'a> {
    #[inline(always)]
    pub fn squares(&self) -> &'a [Square] {
        match self {
            Self::Actionable(squares) | Self::Preview(squares) => squares,
        }
    }

    #[inline(always)]
    pub fn is_actionable(&self) -> bool {
        matches!(self, Self::Actionable(_))
    }
}

/// Everything a front end needs to draw the game. Read-only outside of [`crate::Game`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameState {
    pub(crate) position: Position,
    pub(crate) turn: TurnState,
    pub(crate) history: Vec<Move>,
    pub(crate) last_move: Option<(Square, Square)>,
    pub(crate) debug_selection: Option<Square>,
}

impl GameState {
    /// A fresh state around `position`, with nothing selected and no history.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Current occupancy of the board.
    #[inline(always)]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Player whose turn it is.
    #[inline(always)]
    pub fn current_player(&self) -> Player {
        self.position.side_to_move()
    }

    #[inline(always)]
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Every completed move, oldest first.
    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The squares of the most recent piece movement, for highlighting.
    ///
    /// This includes a pawn that is still waiting to be promoted.
    #[inline(always)]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    #[inline(always)]
    pub fn selection(&self) -> Option<Square> {
        self.turn.selection()
    }

    #[inline(always)]
    pub fn destinations(&self) -> Option<Destinations<'_>> {
        self.turn.destinations()
    }

    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        match &self.turn {
            TurnState::AwaitingPromotion(pending) => Some(pending),
            _ => None,
        }
    }

    /// Square picked in debug mode, waiting for a target.
    #[inline(always)]
    pub fn debug_selection(&self) -> Option<Square> {
        self.debug_selection
    }
}
