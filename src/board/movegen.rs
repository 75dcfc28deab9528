/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{
    Bitboard, EdgeKind, File, Piece, PieceKind, Player, Position, Ray, RaySystem, Square,
};

/// Rank within a home section that touches the center.
const INNER_RANK: u8 = 3;

/// Whether a king may step along a file directly between the center squares of two different sections.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KingCenterRule {
    /// The king moves like any other square's neighbour would allow.
    #[default]
    Open,

    /// The king may not cross D4-D5, E4-E9, or I5-I9.
    Blocked,
}

/// Optional rules that vary between rule sets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    pub king_center: KingCenterRule,
}

/// Computes destination squares for pieces, given a [`Position`].
///
/// Never modifies the position. Destinations are pseudo-legal: a move that leaves the mover's own king
/// attacked is still generated.
#[derive(Clone, Copy, Debug)]
pub struct MoveGenerator {
    rays: &'static RaySystem,
    rules: Rules,
}

impl MoveGenerator {
    /// Creates a new [`MoveGenerator`] over the shared ray tables.
    pub fn new(rules: Rules) -> Self {
        Self::with_rays(RaySystem::global(), rules)
    }

    /// Creates a new [`MoveGenerator`] over the provided ray tables.
    pub fn with_rays(rays: &'static RaySystem, rules: Rules) -> Self {
        Self { rays, rules }
    }

    #[inline(always)]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    #[inline(always)]
    pub fn rays(&self) -> &'static RaySystem {
        self.rays
    }

    /// Destinations of whatever piece stands on `square`, regardless of whose turn it is.
    ///
    /// An empty square has no destinations.
    ///
    /// # Example
    /// ```
    /// # use yalta::{MoveGenerator, Position, Rules, Square};
    /// let movegen = MoveGenerator::new(Rules::default());
    /// let position = Position::default();
    /// assert_eq!(movegen.destinations(&position, Square::E2), [Square::E3, Square::E4]);
    /// assert!(movegen.destinations(&position, Square::E4).is_empty());
    /// ```
    pub fn destinations(&self, position: &Position, square: Square) -> Vec<Square> {
        match position.piece_at(square) {
            Some(piece) => self.destinations_for(position, square, piece),
            None => Vec::new(),
        }
    }

    /// Destinations of `piece` as if it stood on `square`.
    pub fn destinations_for(&self, position: &Position, square: Square, piece: Piece) -> Vec<Square> {
        let player = piece.player();
        let destinations = match piece.kind() {
            PieceKind::Pawn => self.pawn(position, square, player),
            PieceKind::Knight => self.knight(position, square, player),
            PieceKind::Bishop => self.slide(position, self.rays.bishop_rays(square), player),
            PieceKind::Rook => self.slide(position, self.rays.rook_rays(square), player),
            PieceKind::Queen => {
                let mut moves = self.slide(position, self.rays.rook_rays(square), player);
                moves.extend(self.slide(position, self.rays.bishop_rays(square), player));
                dedup(moves)
            }
            PieceKind::King => self.king(position, square, player),
        };

        trace!(%square, ?piece, count = destinations.len(), "generated destinations");
        destinations
    }

    /// Walks each ray, stopping before a friendly piece or on an enemy one.
    fn slide(&self, position: &Position, rays: &[Ray], player: Player) -> Vec<Square> {
        let mut moves = Vec::new();

        for ray in rays {
            for &square in ray {
                match position.piece_at(square) {
                    None => moves.push(square),
                    Some(occupant) => {
                        if occupant.player() != player {
                            moves.push(square);
                        }
                        break;
                    }
                }
            }
        }

        // Rays that split at the center share their first squares
        dedup(moves)
    }

    fn knight(&self, position: &Position, square: Square, player: Player) -> Vec<Square> {
        let targets = self.rays.knight_targets(square) & !position.player_squares(player);
        targets.iter().collect()
    }

    fn king(&self, position: &Position, square: Square, player: Player) -> Vec<Square> {
        let graph = self.rays.graph();
        let own = position.player_squares(player);

        graph
            .all_neighbors(square)
            .filter(|&(to, _)| !own.contains(to))
            .filter(|&(to, kind)| !self.crosses_center(square, to, kind))
            .map(|(to, _)| to)
            .collect()
    }

    /// Returns `true` if a king step from `from` to `to` is forbidden by [`KingCenterRule::Blocked`].
    fn crosses_center(&self, from: Square, to: Square, kind: EdgeKind) -> bool {
        self.rules.king_center == KingCenterRule::Blocked
            && kind == EdgeKind::File
            && from.is_center()
            && to.is_center()
            && from.section() != to.section()
    }

    fn pawn(&self, position: &Position, square: Square, player: Player) -> Vec<Square> {
        let mut moves = Vec::with_capacity(4);
        let Some(forward) = self.pawn_forward(square, player) else {
            return moves;
        };

        if position.piece_at(forward).is_none() {
            moves.push(forward);

            if square.section() == player && square.relative_rank() == 1 {
                if let Some(double) = self.pawn_forward(forward, player) {
                    if position.piece_at(double).is_none() {
                        moves.push(double);
                    }
                }
            }
        }

        let enemies = position.occupied() & !position.player_squares(player);
        moves.extend((self.pawn_attacks(square, player) & enemies).iter());

        moves
    }

    /// The square directly in front of a pawn of `player` standing on `square`, if there is one.
    ///
    /// "Forward" depends on where the pawn is: in its own section it heads towards the center and then
    /// across it, while in another player's section it heads towards that player's back rank.
    ///
    /// # Example
    /// ```
    /// # use yalta::{MoveGenerator, Player, Rules, Square};
    /// let movegen = MoveGenerator::new(Rules::default());
    /// assert_eq!(movegen.pawn_forward(Square::E2, Player::Red), Some(Square::E3));
    /// // Crossing the center from Red's E file lands in Black's section
    /// assert_eq!(movegen.pawn_forward(Square::E4, Player::Red), Some(Square::E9));
    /// assert_eq!(movegen.pawn_forward(Square::E9, Player::Red), Some(Square::E10));
    /// assert_eq!(movegen.pawn_forward(Square::I5, Player::White), Some(Square::I9));
    /// assert_eq!(movegen.pawn_forward(Square::E12, Player::Red), None);
    /// ```
    pub fn pawn_forward(&self, square: Square, player: Player) -> Option<Square> {
        let section = square.section();
        let rank = square.relative_rank();
        let files = self.rays.graph().neighbors(square, EdgeKind::File);

        let wanted = |n: &&Square| {
            if section != player {
                rank > 0 && n.section() == section && n.relative_rank() == rank - 1
            } else if rank < INNER_RANK {
                n.section() == section && n.relative_rank() == rank + 1
            } else {
                n.section() != section
            }
        };

        files.iter().find(wanted).copied()
    }

    /// Squares a pawn of `player` on `square` could capture on: beside the square in front of it.
    pub fn pawn_attacks(&self, square: Square, player: Player) -> Bitboard {
        self.pawn_forward(square, player)
            .map(|forward| {
                self.rays
                    .graph()
                    .neighbors(forward, EdgeKind::Rank)
                    .iter()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns `true` if a pawn of `player` reaching `square` must promote.
    ///
    /// That is the case on the back rank of either opponent's section, and on the outer file facing `player`'s
    /// own back rank (see [`MoveGenerator::promotion_file`]).
    ///
    /// # Example
    /// ```
    /// # use yalta::{MoveGenerator, Player, Square};
    /// assert!(MoveGenerator::is_promotion_square(Square::A8, Player::Red));
    /// assert!(MoveGenerator::is_promotion_square(Square::H12, Player::Red));
    /// assert!(MoveGenerator::is_promotion_square(Square::L6, Player::Red));
    /// assert!(!MoveGenerator::is_promotion_square(Square::A1, Player::Red));
    /// assert!(MoveGenerator::is_promotion_square(Square::A1, Player::Black));
    /// assert!(MoveGenerator::is_promotion_square(Square::A7, Player::Black));
    /// assert!(!MoveGenerator::is_promotion_square(Square::B7, Player::Black));
    /// ```
    #[inline(always)]
    pub const fn is_promotion_square(square: Square, player: Player) -> bool {
        let back_rank =
            square.section().index() != player.index() && square.relative_rank() == 0;

        back_rank || square.file().inner() == Self::promotion_file(player).inner()
    }

    /// The outer file opposite `player`'s own back rank, on which its pawns also promote.
    #[inline(always)]
    pub const fn promotion_file(player: Player) -> File {
        match player {
            Player::Red => File::L,
            Player::White => File::H,
            Player::Black => File::A,
        }
    }

    /// Every square `player` currently attacks or defends.
    pub fn attacked_by(&self, position: &Position, player: Player) -> Bitboard {
        let mut attacked = Bitboard::EMPTY_BOARD;

        for square in position.player_squares(player) {
            let Some(piece) = position.piece_at(square) else {
                continue;
            };

            if piece.is_pawn() {
                attacked |= self.pawn_attacks(square, player);
            } else {
                attacked |= self
                    .destinations_for(position, square, piece)
                    .into_iter()
                    .collect::<Bitboard>();
            }
        }

        attacked
    }

    /// Returns `true` if any opponent of `player` attacks `player`'s king.
    ///
    /// A player without a king is never in check.
    pub fn in_check(&self, position: &Position, player: Player) -> bool {
        let Some(king) = position.king_square(player) else {
            return false;
        };

        Player::all()
            .into_iter()
            .filter(|&opponent| opponent != player)
            .any(|opponent| self.attacked_by(position, opponent).contains(king))
    }

    /// Returns `true` if `player` is in check and no destination of any of their pieces gets them out of it.
    ///
    /// Each candidate move is tried on a copy of `position`.
    pub fn is_checkmate(&self, position: &Position, player: Player) -> bool {
        if !self.in_check(position, player) {
            return false;
        }

        position.player_squares(player).into_iter().all(|from| {
            self.destinations(position, from).into_iter().all(|to| {
                let mut after = *position;
                if let Some(piece) = after.take(from) {
                    after.place(piece, to);
                }
                self.in_check(&after, player)
            })
        })
    }
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

/// Removes repeated squares, keeping the first occurrence.
fn dedup(moves: Vec<Square>) -> Vec<Square> {
    let mut seen = Bitboard::EMPTY_BOARD;
    moves
        .into_iter()
        .filter(|&square| {
            let fresh = !seen.contains(square);
            seen.set(square);
            fresh
        })
        .collect()
}
