/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use tracing::debug;

use super::{Game, TurnState};
use crate::Square;

impl Game {
    /// Picks a square in debug mode, which moves pieces anywhere without regard for the rules.
    ///
    /// The first pick selects a piece (an empty square is ignored). Picking the same square again drops the
    /// selection, and picking any other square moves the piece there, replacing whatever stood on it.
    ///
    /// Debug moves are not recorded and do not change whose turn it is. Any normal selection is cleared.
    /// Does nothing while a promotion is pending.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Game, Player, Square};
    /// let mut game = Game::default();
    /// game.select_square_debug(Square::D1);
    /// game.select_square_debug(Square::J6);
    /// assert!(game.position().piece_at(Square::D1).is_none());
    /// assert!(game.position().piece_at(Square::J6).is_some());
    /// assert_eq!(game.current_player(), Player::Red);
    /// assert!(game.history().is_empty());
    /// ```
    pub fn select_square_debug(&mut self, square: Square) {
        if self.state().turn().is_awaiting_promotion() {
            return;
        }

        let state = self.state_mut();
        state.turn = TurnState::Idle;

        match state.debug_selection.take() {
            None => {
                if state.position.has(square) {
                    debug!(%square, "debug selection");
                    state.debug_selection = Some(square);
                }
            }

            Some(from) if from == square => debug!(%square, "dropped debug selection"),

            Some(from) => {
                if let Some(piece) = state.position.take(from) {
                    let replaced = state.position.place(piece, square);
                    debug!(%from, to = %square, ?piece, ?replaced, "debug relocation");
                }
            }
        }
    }
}
