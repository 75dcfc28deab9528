/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// The [`Game`] session and its selection protocol.
mod controller;

/// Free piece relocation, outside the rules of play.
mod debug;

/// Observable game state: selection, pending promotion, history.
mod state;

pub use controller::*;
pub use state::*;
