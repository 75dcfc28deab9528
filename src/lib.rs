/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Board geometry, pieces, positions, and move generation.
mod board;

/// Command-line and interactive command definitions.
mod cli;

/// The interactive front end: reads commands and drives a [`Game`].
mod engine;

/// Game sessions and the selection protocol.
mod game;

pub use board::*;
pub use cli::*;
pub use engine::*;
pub use game::*;
