/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Notation for the starting position: each player's back rank and pawns on the outer ranks of their section.
pub const STARTPOS: &str = "brbnbbbqbkbbbnbr/bpbpbpbpbpbpbpbp/8/8/wrwnwbwqwkwbwnwr/wpwpwpwpwpwpwpwp/8/8/8/8/rprprprprprprprp/rrrnrbrqrkrbrnrr r";

/// A position for debugging play through the center: a king in the middle of every section's inner ranks.
pub const CENTER_KINGS: &str = "8/8/8/3bk4/8/8/8/4wk3/3rk4/8/8/8 r";
