/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{File, Player, Rank, Square, Table};

/// Order in which files are met walking along a rank of each home section.
const RANK_LINE_FILES: [[File; 8]; Player::COUNT] = [
    [File::A, File::B, File::C, File::D, File::E, File::F, File::G, File::H],
    [File::A, File::B, File::C, File::D, File::I, File::J, File::K, File::L],
    [File::H, File::G, File::F, File::E, File::I, File::J, File::K, File::L],
];

/// Order in which ranks are met walking along each file, for files A-D, E-H, and I-L.
///
/// Files E-H jump from rank 4 to rank 9, and files I-L run down from rank 8 before jumping from rank 5 to rank 9.
const FILE_LINE_RANKS: [[Rank; 8]; 3] = [
    [
        Rank::ONE,
        Rank::TWO,
        Rank::THREE,
        Rank::FOUR,
        Rank::FIVE,
        Rank::SIX,
        Rank::SEVEN,
        Rank::EIGHT,
    ],
    [
        Rank::ONE,
        Rank::TWO,
        Rank::THREE,
        Rank::FOUR,
        Rank::NINE,
        Rank::TEN,
        Rank::ELEVEN,
        Rank::TWELVE,
    ],
    [
        Rank::EIGHT,
        Rank::SEVEN,
        Rank::SIX,
        Rank::FIVE,
        Rank::NINE,
        Rank::TEN,
        Rank::ELEVEN,
        Rank::TWELVE,
    ],
];

/// The single, process-wide board graph.
static GRAPH: Lazy<BoardGraph> = Lazy::new(BoardGraph::new);

/// The three categories of adjacency between squares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EdgeKind {
    Rank,
    File,
    Diagonal,
}

impl EdgeKind {
    pub const COUNT: usize = 3;

    /// All edge kinds, orthogonal kinds first.
    #[inline(always)]
    pub const fn all() -> [Self; Self::COUNT] {
        [Self::Rank, Self::File, Self::Diagonal]
    }

    /// The other orthogonal kind. Diagonal edges have no perpendicular.
    #[inline(always)]
    pub const fn perpendicular(&self) -> Option<Self> {
        match self {
            Self::Rank => Some(Self::File),
            Self::File => Some(Self::Rank),
            Self::Diagonal => None,
        }
    }

    #[inline(always)]
    const fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rank => "rank",
            Self::File => "file",
            Self::Diagonal => "diagonal",
        };
        write!(f, "{name}")
    }
}

/// Connectivity of the 96 squares of the board.
///
/// Every square has at most two rank neighbours and at most two file neighbours.
/// Rank and file lines cross from one home section into another at the seams,
/// which is what bends the board into its hexagonal shape.
/// Diagonal neighbours are derived: one rank step followed by one file step.
#[derive(Clone, Debug)]
pub struct BoardGraph {
    /// Neighbours of every square, one list per [`EdgeKind`], in the order the edges were added.
    adjacency: Table<[Vec<Square>; EdgeKind::COUNT]>,
}

impl BoardGraph {
    /// Builds the graph from scratch.
    ///
    /// Prefer [`BoardGraph::global`], which is built once and shared.
    pub fn new() -> Self {
        let mut graph = Self {
            adjacency: Table::default(),
        };

        // Ranks: consecutive squares along every rank line
        for rank in Rank::iter() {
            let section = Player::from_index_unchecked(rank.index() / 4);
            let line = RANK_LINE_FILES[section.index()].map(|file| Square::new_unchecked(file, rank));
            graph.link_line(&line, EdgeKind::Rank);
        }

        // Files: consecutive squares along every file line, including the jumps across the center
        for file in File::iter() {
            let ranks = FILE_LINE_RANKS[file.index() / 4];
            let line = ranks.map(|rank| Square::new_unchecked(file, rank));
            graph.link_line(&line, EdgeKind::File);
        }

        // Diagonals: a rank step, then a file step
        for square in Square::iter() {
            let corners = graph
                .neighbors(square, EdgeKind::Rank)
                .iter()
                .flat_map(|&r| graph.neighbors(r, EdgeKind::File).iter().copied())
                .filter(|&d| d != square)
                .collect::<Vec<_>>();

            for corner in corners {
                graph.link(square, corner, EdgeKind::Diagonal);
            }
        }

        debug!(
            rank = graph.edge_count(EdgeKind::Rank),
            file = graph.edge_count(EdgeKind::File),
            diagonal = graph.edge_count(EdgeKind::Diagonal),
            "built board graph"
        );

        graph
    }

    /// Fetches the shared, immutable [`BoardGraph`].
    #[inline(always)]
    pub fn global() -> &'static Self {
        &GRAPH
    }

    /// Connects every pair of consecutive squares in `line`.
    fn link_line(&mut self, line: &[Square], kind: EdgeKind) {
        for pair in line.windows(2) {
            self.link(pair[0], pair[1], kind);
        }
    }

    /// Adds an edge in both directions, ignoring duplicates.
    fn link(&mut self, a: Square, b: Square, kind: EdgeKind) {
        for (from, to) in [(a, b), (b, a)] {
            let neighbors = &mut self.adjacency[from][kind.index()];
            if !neighbors.contains(&to) {
                neighbors.push(to);
            }
        }
    }

    /// Returns `true` if the grid cell at `file` and `rank` is a square of this graph.
    ///
    /// # Example
    /// ```
    /// # use yalta::{BoardGraph, File, Rank};
    /// let graph = BoardGraph::global();
    /// assert!(graph.has_square(File::L, Rank::TWELVE));
    /// assert!(!graph.has_square(File::L, Rank::ONE));
    /// ```
    #[inline(always)]
    pub fn has_square(&self, file: File, rank: Rank) -> bool {
        Square::exists(file, rank)
    }

    /// Fetches the neighbours of `square` along edges of `kind`.
    ///
    /// # Example
    /// ```
    /// # use yalta::{BoardGraph, EdgeKind, Square};
    /// let graph = BoardGraph::global();
    /// // Files E-H jump from rank 4 straight to rank 9
    /// assert_eq!(graph.neighbors(Square::E4, EdgeKind::File), [Square::E3, Square::E9]);
    /// ```
    #[inline(always)]
    pub fn neighbors(&self, square: Square, kind: EdgeKind) -> &[Square] {
        &self.adjacency[square][kind.index()]
    }

    /// Iterates over every neighbour of `square`, of every kind.
    pub fn all_neighbors(&self, square: Square) -> impl Iterator<Item = (Square, EdgeKind)> + '_ {
        EdgeKind::all().into_iter().flat_map(move |kind| {
            self.neighbors(square, kind)
                .iter()
                .map(move |&neighbor| (neighbor, kind))
        })
    }

    /// Returns `true` if `a` and `b` are connected by an edge of `kind`.
    #[inline(always)]
    pub fn is_adjacent(&self, a: Square, b: Square, kind: EdgeKind) -> bool {
        self.neighbors(a, kind).contains(&b)
    }

    /// The kind of edge connecting `a` and `b`, if they are neighbours.
    pub fn edge_between(&self, a: Square, b: Square) -> Option<EdgeKind> {
        EdgeKind::all()
            .into_iter()
            .find(|&kind| self.is_adjacent(a, b, kind))
    }

    /// The neighbour of `to` along `kind` that continues the line coming from `from`.
    ///
    /// Since every square has at most two neighbours of each orthogonal kind,
    /// the continuation is the one that is not `from`.
    ///
    /// # Example
    /// ```
    /// # use yalta::{BoardGraph, EdgeKind, Square};
    /// let graph = BoardGraph::global();
    /// assert_eq!(graph.continuation(Square::I6, Square::I5, EdgeKind::File), Some(Square::I9));
    /// assert_eq!(graph.continuation(Square::A2, Square::A1, EdgeKind::File), None);
    /// ```
    pub fn continuation(&self, from: Square, to: Square, kind: EdgeKind) -> Option<Square> {
        let mut next = self.neighbors(to, kind).iter().filter(|&&n| n != from);
        match (next.next(), next.next()) {
            (Some(&n), None) => Some(n),
            _ => None,
        }
    }

    /// Iterates over all squares of the board.
    #[inline(always)]
    pub fn squares(&self) -> impl ExactSizeIterator<Item = Square> {
        Square::iter()
    }

    /// Total number of undirected edges of `kind`.
    pub fn edge_count(&self, kind: EdgeKind) -> usize {
        self.squares()
            .map(|square| self.neighbors(square, kind).len())
            .sum::<usize>()
            / 2
    }
}

impl Default for BoardGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(squares: &[Square]) -> Vec<Square> {
        let mut squares = squares.to_vec();
        squares.sort();
        squares
    }

    #[test]
    fn test_edge_counts() {
        let graph = BoardGraph::new();
        assert_eq!(graph.edge_count(EdgeKind::Rank), 84);
        assert_eq!(graph.edge_count(EdgeKind::File), 84);
        assert_eq!(graph.edge_count(EdgeKind::Diagonal), 150);
    }

    #[test]
    fn test_orthogonal_degree() {
        let graph = BoardGraph::global();
        for square in graph.squares() {
            assert!(graph.neighbors(square, EdgeKind::Rank).len() <= 2, "{square}");
            assert!(graph.neighbors(square, EdgeKind::File).len() <= 2, "{square}");
            assert!(!graph.neighbors(square, EdgeKind::Diagonal).contains(&square));
        }
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = BoardGraph::global();
        for square in graph.squares() {
            for (neighbor, kind) in graph.all_neighbors(square) {
                assert!(
                    graph.is_adjacent(neighbor, square, kind),
                    "{square} -> {neighbor} ({kind}) has no reverse edge"
                );
            }
        }
    }

    #[test]
    fn test_seams() {
        let graph = BoardGraph::global();
        assert_eq!(
            sorted(graph.neighbors(Square::E9, EdgeKind::Rank)),
            [Square::F9, Square::I9]
        );
        assert_eq!(
            sorted(graph.neighbors(Square::I5, EdgeKind::File)),
            [Square::I6, Square::I9]
        );
        assert_eq!(
            sorted(graph.neighbors(Square::D4, EdgeKind::File)),
            [Square::D3, Square::D5]
        );
        assert_eq!(
            sorted(graph.neighbors(Square::D5, EdgeKind::Rank)),
            [Square::C5, Square::I5]
        );
        assert_eq!(graph.edge_between(Square::E4, Square::E9), Some(EdgeKind::File));
        assert_eq!(graph.edge_between(Square::E4, Square::F9), Some(EdgeKind::Diagonal));
        assert_eq!(graph.edge_between(Square::E4, Square::E10), None);
    }

    #[test]
    fn test_derived_diagonals() {
        let graph = BoardGraph::global();
        assert_eq!(
            sorted(graph.neighbors(Square::D4, EdgeKind::Diagonal)),
            sorted(&[Square::C3, Square::C5, Square::E3, Square::E9, Square::I5])
        );
        assert_eq!(
            sorted(graph.neighbors(Square::J10, EdgeKind::Diagonal)),
            sorted(&[Square::I11, Square::I9, Square::K11, Square::K9])
        );
        assert_eq!(graph.neighbors(Square::A1, EdgeKind::Diagonal), [Square::B2]);
    }
}
