/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Sets of squares, packed into bits.
mod bitboard;

/// Adjacency of the 96 squares.
mod graph;

/// Destination generation for every kind of piece.
mod movegen;

/// Completed moves, as recorded in a game's history.
mod moves;

/// Players, piece kinds, and pieces.
mod piece;

/// Occupancy of the board and whose turn it is.
mod position;

/// Precomputed rook rays, bishop rays, and knight targets.
mod rays;

/// Squares, files, and ranks.
mod square;

/// One value per square.
mod table;

/// Notation constants.
mod utils;

pub use bitboard::*;
pub use graph::*;
pub use movegen::*;
pub use moves::*;
pub use piece::*;
pub use position::*;
pub use rays::*;
pub use square::*;
pub use table::*;
pub use utils::*;
