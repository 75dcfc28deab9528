/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use super::{Bitboard, BoardGraph, EdgeKind, Square, Table};

/// An ordered sequence of squares reachable from an origin by repeated steps in one direction, nearest first.
pub type Ray = Vec<Square>;

/// The single, process-wide ray tables.
static RAYS: Lazy<RaySystem> = Lazy::new(|| RaySystem::new(BoardGraph::global()));

/// Known-good bishop rays for the squares touching the center, where diagonal lines split in two.
///
/// Derived bishop rays are checked against these when the tables are built.
#[rustfmt::skip]
const CENTER_BISHOP_RAYS: [(Square, &[&[Square]]); 6] = [
    (
        Square::D4,
        &[
            &[Square::C3, Square::B2, Square::A1],
            &[Square::C5, Square::B6, Square::A7],
            &[Square::E3, Square::F2, Square::G1],
            &[Square::I5, Square::J6, Square::K7, Square::L8],
            &[Square::E9, Square::F10, Square::G11, Square::H12],
        ],
    ),
    (
        Square::E4,
        &[
            &[Square::D3, Square::C2, Square::B1],
            &[Square::D5, Square::C6, Square::B7, Square::A8],
            &[Square::F3, Square::G2, Square::H1],
            &[Square::F9, Square::G10, Square::H11],
            &[Square::I9, Square::J10, Square::K11, Square::L12],
        ],
    ),
    (
        Square::D5,
        &[
            &[Square::C4, Square::B3, Square::A2],
            &[Square::C6, Square::B7, Square::A8],
            &[Square::E4, Square::F3, Square::G2, Square::H1],
            &[Square::I6, Square::J7, Square::K8],
            &[Square::I9, Square::J10, Square::K11, Square::L12],
        ],
    ),
    (
        Square::I5,
        &[
            &[Square::J6, Square::K7, Square::L8],
            &[Square::D6, Square::C7, Square::B8],
            &[Square::J9, Square::K10, Square::L11],
            &[Square::E9, Square::F10, Square::G11, Square::H12],
            &[Square::D4, Square::C3, Square::B2, Square::A1],
        ],
    ),
    (
        Square::E9,
        &[
            &[Square::D4, Square::C3, Square::B2, Square::A1],
            &[Square::F4, Square::G3, Square::H2],
            &[Square::F10, Square::G11, Square::H12],
            &[Square::I10, Square::J11, Square::K12],
            &[Square::I5, Square::J6, Square::K7, Square::L8],
        ],
    ),
    (
        Square::I9,
        &[
            &[Square::J5, Square::K6, Square::L7],
            &[Square::D5, Square::C6, Square::B7, Square::A8],
            &[Square::J10, Square::K11, Square::L12],
            &[Square::E10, Square::F11, Square::G12],
            &[Square::E4, Square::F3, Square::G2, Square::H1],
        ],
    ),
];

/// Precomputed movement geometry for every square: sliding rays and knight leaps.
///
/// Built once from a [`BoardGraph`] and never modified afterwards.
#[derive(Clone, Debug)]
pub struct RaySystem {
    graph: &'static BoardGraph,
    rook: Table<Vec<Ray>>,
    bishop: Table<Vec<Ray>>,
    knight: Table<Bitboard>,
}

impl RaySystem {
    /// Computes every table from `graph`.
    ///
    /// Prefer [`RaySystem::global`], which is built once and shared.
    pub fn new(graph: &'static BoardGraph) -> Self {
        let rook = Table::from_fn(|square| rook_rays(graph, square));
        let mut bishop = Table::from_fn(|square| bishop_rays(graph, square));
        let knight = Table::from_fn(|square| knight_targets(graph, square));

        for (square, fixture) in CENTER_BISHOP_RAYS {
            let expected = fixture.iter().map(|ray| ray.to_vec()).collect::<Vec<_>>();
            if !same_rays(&bishop[square], &expected) {
                warn!(
                    %square,
                    derived = ?bishop[square],
                    "derived bishop rays disagree with the center table, using the table"
                );
                bishop[square] = expected;
            }
        }

        debug!("built ray tables");

        Self {
            graph,
            rook,
            bishop,
            knight,
        }
    }

    /// Fetches the shared, immutable [`RaySystem`].
    #[inline(always)]
    pub fn global() -> &'static Self {
        &RAYS
    }

    /// The [`BoardGraph`] these tables were computed from.
    #[inline(always)]
    pub fn graph(&self) -> &'static BoardGraph {
        self.graph
    }

    /// Rays along ranks and files starting next to `square`, one per direction.
    ///
    /// # Example
    /// ```
    /// # use yalta::{RaySystem, Square};
    /// let rays = RaySystem::global().rook_rays(Square::E4);
    /// // Heading up the E file crosses straight into Black's section
    /// assert!(rays.contains(&vec![Square::E9, Square::E10, Square::E11, Square::E12]));
    /// ```
    #[inline(always)]
    pub fn rook_rays(&self, square: Square) -> &[Ray] {
        &self.rook[square]
    }

    /// Diagonal rays starting next to `square`.
    ///
    /// A diagonal that runs into the center splits into two rays, one on either side of the center point.
    ///
    /// # Example
    /// ```
    /// # use yalta::{RaySystem, Square};
    /// let rays = RaySystem::global().bishop_rays(Square::C3);
    /// assert!(rays.contains(&vec![Square::D4, Square::E9, Square::F10, Square::G11, Square::H12]));
    /// assert!(rays.contains(&vec![Square::D4, Square::I5, Square::J6, Square::K7, Square::L8]));
    /// ```
    #[inline(always)]
    pub fn bishop_rays(&self, square: Square) -> &[Ray] {
        &self.bishop[square]
    }

    /// All squares a knight on `square` can leap to.
    ///
    /// # Example
    /// ```
    /// # use yalta::{RaySystem, Square};
    /// let targets = RaySystem::global().knight_targets(Square::B1);
    /// assert_eq!(targets.iter().collect::<Vec<_>>(), [Square::D2, Square::A3, Square::C3]);
    /// ```
    #[inline(always)]
    pub fn knight_targets(&self, square: Square) -> Bitboard {
        self.knight[square]
    }
}

/// Returns `true` if both lists hold the same rays, in any order.
fn same_rays(a: &[Ray], b: &[Ray]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}

/// Walks from `square` along every rank and file direction until the line ends.
fn rook_rays(graph: &BoardGraph, square: Square) -> Vec<Ray> {
    let mut rays = Vec::with_capacity(4);

    for kind in [EdgeKind::Rank, EdgeKind::File] {
        for &first in graph.neighbors(square, kind) {
            let mut ray = vec![first];
            let mut prev = square;
            let mut current = first;

            while let Some(next) = graph.continuation(prev, current, kind) {
                // Cycle guard
                if next == square || ray.contains(&next) {
                    break;
                }
                ray.push(next);
                prev = current;
                current = next;
            }

            rays.push(ray);
        }
    }

    rays
}

/// Squares that are two steps of `kind` away from `square` along a straight line.
fn two_steps(graph: &BoardGraph, square: Square, kind: EdgeKind) -> Bitboard {
    graph
        .neighbors(square, kind)
        .iter()
        .filter_map(|&one| graph.continuation(square, one, kind))
        .collect()
}

/// The only neighbour of `square` along `kind` that is `other_kind`-adjacent to `target`.
fn unique_neighbor_towards(
    graph: &BoardGraph,
    square: Square,
    kind: EdgeKind,
    target: Square,
    other_kind: EdgeKind,
) -> Option<Square> {
    let mut matches = graph
        .neighbors(square, kind)
        .iter()
        .filter(|&&n| graph.is_adjacent(n, target, other_kind));

    match (matches.next(), matches.next()) {
        (Some(&n), None) => Some(n),
        _ => None,
    }
}

/// Squares that continue a diagonal line after its step from `prev` to `current`.
///
/// A diagonal step is one rank step plus one file step. The line goes straight on when the next step keeps
/// both the rank direction and the file direction of the previous one. Across a seam one of the two
/// corners of the previous step may be missing, in which case its direction is carried over through the
/// corner that exists. At the center no square keeps both directions, and the line splits into the
/// squares that keep either one.
fn diagonal_continuations(graph: &BoardGraph, prev: Square, current: Square) -> Bitboard {
    use EdgeKind::*;

    // prev -rank- via_rank -file- current
    let via_rank = graph
        .neighbors(prev, Rank)
        .iter()
        .copied()
        .find(|&r| graph.is_adjacent(r, current, File));
    // prev -file- via_file -rank- current
    let via_file = graph
        .neighbors(prev, File)
        .iter()
        .copied()
        .find(|&q| graph.is_adjacent(q, current, Rank));

    // Rank neighbour of `current` in the direction of travel
    let rank_step = match (via_file, via_rank) {
        (Some(q), _) => graph.continuation(q, current, Rank),
        (None, Some(r)) => graph
            .continuation(prev, r, Rank)
            .and_then(|beyond| unique_neighbor_towards(graph, current, Rank, beyond, File)),
        (None, None) => None,
    };

    // File neighbour of `current` in the direction of travel
    let file_step = match (via_rank, via_file) {
        (Some(r), _) => graph.continuation(r, current, File),
        (None, Some(q)) => graph
            .continuation(prev, q, File)
            .and_then(|beyond| unique_neighbor_towards(graph, current, File, beyond, Rank)),
        (None, None) => None,
    };

    let keeps_rank: Option<Bitboard> =
        rank_step.map(|g| graph.neighbors(g, File).iter().collect());
    let keeps_file: Option<Bitboard> =
        file_step.map(|f| graph.neighbors(f, Rank).iter().collect());

    let candidates = match (keeps_rank, keeps_file) {
        (Some(a), Some(b)) if a.intersects(b) => a & b,
        (Some(a), Some(b)) => a | b,
        (Some(a), None) => a,
        (None, Some(b)) => b,
        (None, None) => Bitboard::EMPTY_BOARD,
    };

    let diagonals: Bitboard = graph.neighbors(current, Diagonal).iter().collect();
    let turns = two_steps(graph, prev, Rank) | two_steps(graph, prev, File) | prev;

    candidates & diagonals & !turns
}

/// Extends the diagonal `path` (origin first) in every way it continues, collecting each finished ray.
fn extend_diagonal(graph: &BoardGraph, path: &mut Vec<Square>, rays: &mut Vec<Ray>) {
    let n = path.len();
    let (prev, current) = (path[n - 2], path[n - 1]);

    let mut next = diagonal_continuations(graph, prev, current);
    for square in path.iter() {
        next.clear(*square);
    }

    if next.is_empty() {
        rays.push(path[1..].to_vec());
        return;
    }

    for square in next {
        path.push(square);
        extend_diagonal(graph, path, rays);
        path.pop();
    }
}

/// Walks every diagonal line leaving `square`.
fn bishop_rays(graph: &BoardGraph, square: Square) -> Vec<Ray> {
    let mut rays = Vec::new();
    for &first in graph.neighbors(square, EdgeKind::Diagonal) {
        let mut path = vec![square, first];
        extend_diagonal(graph, &mut path, &mut rays);
    }
    rays
}

/// Two steps along one orthogonal kind and one along the other, in either order, never stepping back.
fn knight_targets(graph: &BoardGraph, square: Square) -> Bitboard {
    let mut targets = Bitboard::EMPTY_BOARD;

    for kind in [EdgeKind::Rank, EdgeKind::File] {
        let Some(cross) = kind.perpendicular() else {
            continue;
        };

        for &one in graph.neighbors(square, kind) {
            // Two steps along `kind`, then one across
            for &two in graph.neighbors(one, kind).iter().filter(|&&n| n != square) {
                for &target in graph.neighbors(two, cross).iter().filter(|&&n| n != one) {
                    targets.set(target);
                }
            }

            // One step along `kind`, then two across
            for &turn in graph.neighbors(one, cross).iter().filter(|&&n| n != square) {
                for &target in graph.neighbors(turn, cross).iter().filter(|&&n| n != one) {
                    targets.set(target);
                }
            }
        }
    }

    targets.clear(square);
    targets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(squares: impl IntoIterator<Item = Square>) -> Vec<Square> {
        let mut squares = squares.into_iter().collect::<Vec<_>>();
        squares.sort();
        squares
    }

    #[test]
    fn test_center_table_matches_derivation() {
        let graph = BoardGraph::global();
        for (square, fixture) in CENTER_BISHOP_RAYS {
            let expected = fixture.iter().map(|ray| ray.to_vec()).collect::<Vec<_>>();
            assert!(
                same_rays(&bishop_rays(graph, square), &expected),
                "bishop rays of {square} differ from the center table"
            );
        }
    }

    #[test]
    fn test_rays_never_repeat_or_contain_origin() {
        let rays = RaySystem::global();
        for square in Square::iter() {
            for ray in rays.rook_rays(square).iter().chain(rays.bishop_rays(square)) {
                assert!(!ray.is_empty());
                assert!(!ray.contains(&square), "ray {ray:?} of {square} contains its origin");
                let unique: Bitboard = ray.iter().collect();
                assert_eq!(unique.population() as usize, ray.len(), "ray {ray:?} of {square} repeats");
            }
        }
    }

    #[test]
    fn test_rays_follow_edges() {
        let rays = RaySystem::global();
        let graph = rays.graph();
        for square in Square::iter() {
            for ray in rays.bishop_rays(square) {
                let mut prev = square;
                for &next in ray {
                    assert!(graph.is_adjacent(prev, next, EdgeKind::Diagonal));
                    prev = next;
                }
            }
            for ray in rays.rook_rays(square) {
                let kind = graph.edge_between(square, ray[0]).unwrap();
                assert_ne!(kind, EdgeKind::Diagonal);
            }
        }
    }

    #[test]
    fn test_rook_rays_cross_seams() {
        let rays = RaySystem::global();
        assert_eq!(
            sorted(rays.rook_rays(Square::I5).iter().flatten().copied()),
            sorted([
                Square::D5,
                Square::C5,
                Square::B5,
                Square::A5,
                Square::J5,
                Square::K5,
                Square::L5,
                Square::I6,
                Square::I7,
                Square::I8,
                Square::I9,
                Square::I10,
                Square::I11,
                Square::I12,
            ])
        );
        assert_eq!(rays.rook_rays(Square::A1).len(), 2);
        assert_eq!(rays.rook_rays(Square::A1)[1].last(), Some(&Square::A8));
    }

    #[test]
    fn test_bishop_reach_is_symmetric() {
        let rays = RaySystem::global();
        let reach = |square: Square| -> Bitboard { rays.bishop_rays(square).iter().flatten().collect() };
        for a in Square::iter() {
            for b in reach(a) {
                assert!(reach(b).contains(a), "{a} reaches {b} but not the reverse");
            }
        }
    }

    #[test]
    fn test_knight_targets() {
        let rays = RaySystem::global();
        assert_eq!(
            sorted(rays.knight_targets(Square::E4)),
            sorted([
                Square::C3,
                Square::C5,
                Square::D2,
                Square::D6,
                Square::F10,
                Square::F2,
                Square::G3,
                Square::G9,
                Square::I10,
                Square::J9,
            ])
        );
        assert_eq!(
            sorted(rays.knight_targets(Square::K12)),
            sorted([Square::I11, Square::J10, Square::L10])
        );
        assert_eq!(
            sorted(rays.knight_targets(Square::I8)),
            sorted([Square::C7, Square::D6, Square::J6, Square::K7])
        );
    }
}
