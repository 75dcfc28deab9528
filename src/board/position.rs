/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{collections::BTreeMap, fmt, ops::Index, str::FromStr};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use super::{Bitboard, Piece, PieceKind, Player, Rank, Square, Table};

/// Pieces along the back rank of every home section, in rank-line order.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Squares per rank.
const RANK_LEN: usize = 8;

/// Represents all pieces and their locations on the board, as well as whose turn it is.
///
/// Internally uses one [`Bitboard`] per player alongside a mailbox, so both "what is on this square?"
/// and "where are this player's pieces?" are cheap.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "PositionRepr", from = "PositionRepr")]
pub struct Position {
    /// All squares occupied by a specific player.
    players: [Bitboard; Player::COUNT],

    /// Occupant of every square.
    mailbox: Table<Option<Piece>>,

    /// Player whose turn it is.
    side_to_move: Player,
}

impl Position {
    /// Creates a new, empty [`Position`] containing no pieces, with Red to move.
    ///
    /// # Example
    /// ```
    /// # use yalta::Position;
    /// let position = Position::empty();
    /// assert_eq!(position.to_notation(), "8/8/8/8/8/8/8/8/8/8/8/8 r");
    /// ```
    #[inline(always)]
    pub const fn empty() -> Self {
        Self {
            players: [Bitboard::EMPTY_BOARD; Player::COUNT],
            mailbox: Table::splat(None),
            side_to_move: Player::Red,
        }
    }

    /// The starting position: every player has their pieces on the two outer ranks of their section, and Red moves first.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, PieceKind, Player, Position, Square};
    /// let position = Position::startpos();
    /// assert_eq!(position.piece_at(Square::I8), Some(Piece::new(Player::White, PieceKind::King)));
    /// assert_eq!(position.piece_at(Square::E12), Some(Piece::new(Player::Black, PieceKind::Queen)));
    /// assert_eq!(position.occupied().population(), 48);
    /// ```
    pub fn startpos() -> Self {
        let mut position = Self::empty();

        for square in Square::iter() {
            let kind = match square.relative_rank() {
                0 => BACK_RANK[square.slot() as usize],
                1 => PieceKind::Pawn,
                _ => continue,
            };

            position.place(Piece::new(square.section(), kind), square);
        }

        position
    }

    /// Parses a [`Position`] from its text notation.
    ///
    /// The notation lists ranks 12 down to 1, separated by `/`. Each rank holds its 8 squares in rank-line order,
    /// where a piece is written as its player's char followed by its kind's char (`rq` is Red's queen) and
    /// a digit stands for that many empty squares. After a space comes the char of the player to move.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, PieceKind, Player, Position, Square};
    /// let position = Position::from_notation("8/8/8/8/8/8/8/8/8/8/8/3bk4 w").unwrap();
    /// assert_eq!(position.piece_at(Square::D1), Some(Piece::new(Player::Black, PieceKind::King)));
    /// assert_eq!(position.side_to_move(), Player::White);
    /// ```
    pub fn from_notation(notation: &str) -> Result<Self> {
        let mut parts = notation.split_whitespace();
        let (Some(placements), Some(side), None) = (parts.next(), parts.next(), parts.next()) else {
            bail!("Notation must be piece placements followed by the side to move. Got {notation:?}");
        };

        let ranks = placements.split('/').collect::<Vec<_>>();
        if ranks.len() != Rank::COUNT {
            bail!(
                "Notation must have piece placements for all {} ranks. Got {}",
                Rank::COUNT,
                ranks.len()
            );
        }

        let mut position = Self::empty();

        for (rank, placements) in Rank::iter().rev().zip(ranks) {
            let squares = rank_squares(rank);
            let mut slot = 0;
            let mut chars = placements.chars();

            while let Some(c) = chars.next() {
                if let Some(empty) = c.to_digit(10) {
                    if empty == 0 {
                        bail!("Empty square counts must be positive on rank {rank}");
                    }
                    slot += empty as usize;
                    continue;
                }

                let Some(kind) = chars.next() else {
                    bail!("Missing piece kind after {c:?} on rank {rank}");
                };
                let piece = Piece::new(Player::from_char(c)?, PieceKind::from_char(kind)?);

                let Some(&square) = squares.get(slot) else {
                    bail!("Too many squares on rank {rank}: {placements:?}");
                };
                position.place(piece, square);
                slot += 1;
            }

            if slot != RANK_LEN {
                bail!("Rank {rank} must describe {RANK_LEN} squares. Got {slot} in {placements:?}");
            }
        }

        let mut side = side.chars();
        let (Some(side), None) = (side.next(), side.next()) else {
            bail!("Side to move must be a single char");
        };
        position.side_to_move = Player::from_char(side).context("Invalid side to move")?;

        Ok(position)
    }

    /// Generates the text notation of this [`Position`]. See [`Position::from_notation`].
    ///
    /// # Example
    /// ```
    /// # use yalta::{Position, STARTPOS};
    /// assert_eq!(Position::startpos().to_notation(), STARTPOS);
    /// ```
    pub fn to_notation(&self) -> String {
        let ranks = Rank::iter()
            .rev()
            .map(|rank| {
                let mut placements = String::with_capacity(2 * RANK_LEN);
                let mut empty_spaces = 0;

                for square in rank_squares(rank) {
                    if let Some(piece) = self.piece_at(square) {
                        if empty_spaces != 0 {
                            placements += &empty_spaces.to_string();
                            empty_spaces = 0;
                        }
                        placements += &piece.to_string();
                    } else {
                        empty_spaces += 1;
                    }
                }

                if empty_spaces != 0 {
                    placements += &empty_spaces.to_string();
                }
                placements
            })
            .collect::<Vec<_>>();

        format!("{} {}", ranks.join("/"), self.side_to_move.char())
    }

    /// Serializes this [`Position`] to JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize position")
    }

    /// Deserializes a [`Position`] from JSON produced by [`Position::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse position JSON")
    }

    /// Fetches the [`Piece`] on the provided [`Square`], if there is one.
    #[inline(always)]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.mailbox[square]
    }

    /// Returns `true` if there is a piece on the given [`Square`].
    #[inline(always)]
    pub fn has(&self, square: Square) -> bool {
        self.mailbox[square].is_some()
    }

    /// Places `piece` on `square`, returning whatever piece was there before.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Piece, PieceKind, Player, Position, Square};
    /// let mut position = Position::empty();
    /// let knight = Piece::new(Player::White, PieceKind::Knight);
    /// assert_eq!(position.place(knight, Square::J6), None);
    /// assert_eq!(position.place(knight, Square::J6), Some(knight));
    /// ```
    pub fn place(&mut self, piece: Piece, square: Square) -> Option<Piece> {
        let previous = self.take(square);
        self.players[piece.player().index()].set(square);
        self.mailbox[square] = Some(piece);
        previous
    }

    /// Takes the [`Piece`] from a given [`Square`], if there is one present.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        let piece = self.mailbox[square].take()?;
        self.players[piece.player().index()].clear(square);
        Some(piece)
    }

    /// Removes every piece from the board.
    #[inline(always)]
    pub fn clear_all(&mut self) {
        self.players = [Bitboard::EMPTY_BOARD; Player::COUNT];
        self.mailbox = Table::splat(None);
    }

    /// All occupied squares.
    #[inline(always)]
    pub fn occupied(&self) -> Bitboard {
        self.players
            .iter()
            .fold(Bitboard::EMPTY_BOARD, |acc, &bb| acc | bb)
    }

    /// All squares occupied by `player`'s pieces.
    #[inline(always)]
    pub const fn player_squares(&self, player: Player) -> Bitboard {
        self.players[player.index()]
    }

    /// Where `player`'s king stands, if they have one.
    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.player_squares(player)
            .into_iter()
            .find(|&square| self.mailbox[square].is_some_and(|piece| piece.is_king()))
    }

    #[inline(always)]
    pub const fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline(always)]
    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    /// Hands the turn to the next player in Red, White, Black order.
    #[inline(always)]
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.next();
    }

    /// Iterates over every occupied square and its piece, in square order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .into_iter()
            .filter_map(|square| self.mailbox[square].map(|piece| (square, piece)))
    }
}

/// The 8 squares of `rank`, in rank-line order.
fn rank_squares(rank: Rank) -> Vec<Square> {
    Square::iter().filter(|square| square.rank() == rank).collect()
}

impl Default for Position {
    #[inline(always)]
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;
    #[inline(always)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl Index<Square> for Position {
    type Output = Option<Piece>;
    #[inline(always)]
    fn index(&self, index: Square) -> &Self::Output {
        &self.mailbox[index]
    }
}

impl fmt::Display for Position {
    /// Draws the board one section at a time, from Black's section at the top down to Red's.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut board = String::with_capacity(512);

        for section in Player::all().into_iter().rev() {
            let mut files = Vec::new();

            for rank in Rank::iter().rev() {
                let squares = rank_squares(rank);
                if squares.first().map(|square| square.section()) != Some(section) {
                    continue;
                }

                board += &format!("{rank:>2}| ");
                for &square in &squares {
                    match self.piece_at(square) {
                        Some(piece) => board += &format!("{piece} "),
                        None => board += ".  ",
                    }
                }
                board += "\n";
                files = squares;
            }

            board += "  +";
            board += &"---".repeat(RANK_LEN);
            board += "\n    ";
            for square in files {
                board += &format!("{}  ", square.file());
            }
            board += "\n";
        }

        board += &format!("{} to move", self.side_to_move);
        write!(f, "{board}")
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({})", self.to_notation())
    }
}

/// Serialized form of a [`Position`]: the side to move and a map of occupied squares.
#[derive(Serialize, Deserialize)]
struct PositionRepr {
    side_to_move: Player,
    pieces: BTreeMap<Square, Piece>,
}

impl From<Position> for PositionRepr {
    fn from(value: Position) -> Self {
        Self {
            side_to_move: value.side_to_move,
            pieces: value.pieces().collect(),
        }
    }
}

impl From<PositionRepr> for Position {
    fn from(value: PositionRepr) -> Self {
        let mut position = Self::empty();
        for (square, piece) in value.pieces {
            position.place(piece, square);
        }
        position.side_to_move = value.side_to_move;
        position
    }
}
