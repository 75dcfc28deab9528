/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use anyhow::{bail, Context, Result};
use tracing::{debug, trace};

use super::{GameState, PendingPromotion, TurnState};
use crate::{Move, MoveGenerator, Piece, PieceKind, Player, Position, Rules, Square};

/// A single game session: the board, whose turn it is, and the selection protocol that drives moves.
///
/// All interaction happens through [`Game::select_square`] and [`Game::promote`].
/// Invalid requests never fail; they simply leave the game unchanged or clear the selection.
///
/// # Example
/// ```
/// # use yalta::{Game, Player, Square};
/// let mut game = Game::default();
/// game.select_square(Square::E2);
/// game.select_square(Square::E4);
/// assert_eq!(game.current_player(), Player::White);
/// assert_eq!(game.history()[0], "E2E4");
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    /// Destination generation, under this game's rules.
    movegen: MoveGenerator,

    /// The observable state.
    state: GameState,

    /// Positions before every completed move, for [`Game::undo`].
    archive: Vec<Position>,
}

impl Game {
    /// Starts a new game from the initial layout.
    pub fn new(rules: Rules) -> Self {
        Self::from_position(rules, Position::startpos())
    }

    /// Starts a game from an arbitrary position, with no history.
    pub fn from_position(rules: Rules, position: Position) -> Self {
        Self {
            movegen: MoveGenerator::new(rules),
            state: GameState::new(position),
            archive: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `moves` from the initial layout.
    ///
    /// Each move must be playable by the player whose turn it is, and promotions must name their piece.
    /// The mover, moving piece, and captured piece of each move must match what is actually on the board.
    ///
    /// # Example
    /// ```
    /// # use yalta::{Game, Player, Rules};
    /// let mut game = Game::default();
    /// game.play_text("B1C3").unwrap();
    /// game.play_text("I7I6").unwrap();
    ///
    /// let replayed = Game::replay(Rules::default(), game.history()).unwrap();
    /// assert_eq!(replayed.position(), game.position());
    /// assert_eq!(replayed.current_player(), Player::Black);
    /// ```
    pub fn replay<'a>(rules: Rules, moves: impl IntoIterator<Item = &'a Move>) -> Result<Self> {
        let mut game = Self::new(rules);
        for (i, mv) in moves.into_iter().enumerate() {
            game.play(mv.from, mv.to, mv.promoted_to)
                .with_context(|| format!("Failed to replay move #{} ({mv})", i + 1))?;

            if let Some(played) = game.history().last().filter(|&played| played != mv) {
                bail!(
                    "Failed to replay move #{}: recorded as {mv:?}, but played as {played:?}",
                    i + 1
                );
            }
        }
        Ok(game)
    }

    /// Plays a move given in text form, such as `E2E4` or `D7D8q`.
    pub fn play_text(&mut self, text: &str) -> Result<()> {
        let mv = Move::from_text(&self.state.position, text)?;
        self.play(mv.from, mv.to, mv.promoted_to)
    }

    /// Plays a move through the selection protocol, failing if it would not be accepted.
    pub fn play(&mut self, from: Square, to: Square, promotion: Option<PieceKind>) -> Result<()> {
        if self.state.turn.is_awaiting_promotion() {
            bail!("A promotion is pending");
        }

        let player = self.current_player();
        match self.state.position.piece_at(from) {
            Some(piece) if piece.player() == player => {}
            Some(piece) => bail!("{from} holds {piece:?}, but it is {player}'s turn"),
            None => bail!("There is no piece on {from}"),
        }

        if !self.destinations_from(from).contains(&to) {
            bail!("{from} cannot move to {to}");
        }

        self.select_square(from);
        self.select_square(to);

        if self.state.turn.is_awaiting_promotion() {
            let Some(kind) = promotion.filter(PieceKind::is_promotion_target) else {
                self.undo_pending();
                bail!("Moving to {to} requires a promotion to a knight, bishop, rook, or queen");
            };
            self.promote(kind);
        }

        Ok(())
    }

    /// Reverts a pawn move that is still waiting for its promotion.
    fn undo_pending(&mut self) {
        if let Some(position) = self.archive.pop() {
            self.state.position = position;
            self.state.turn = TurnState::Idle;
            self.state.last_move = self.state.history.last().map(|mv| (mv.from, mv.to));
        }
    }

    /// Advances the interaction protocol with a picked square.
    ///
    /// * Picking one of the current player's pieces selects it and highlights where it can go.
    /// * Picking a highlighted destination of the selected piece moves it there, capturing any opponent.
    /// * Picking an opponent's piece that is not a capture shows its destinations as a preview.
    /// * Anything else clears the selection.
    ///
    /// Does nothing while a promotion is pending.
    pub fn select_square(&mut self, square: Square) {
        if self.state.turn.is_awaiting_promotion() {
            trace!(%square, "ignoring selection while a promotion is pending");
            return;
        }

        self.state.debug_selection = None;

        let selected = match &self.state.turn {
            TurnState::Selected {
                square: from,
                destinations,
            } if destinations.contains(&square) => Some(*from),
            _ => None,
        };

        let current = self.current_player();
        match (self.state.position.piece_at(square), selected) {
            // Moves and captures
            (None, Some(from)) => self.make_move(from, square),
            (Some(piece), Some(from)) if piece.player() != current => self.make_move(from, square),

            (Some(piece), _) => {
                let destinations = self.movegen.destinations(&self.state.position, square);
                debug!(%square, ?piece, count = destinations.len(), "selected");

                self.state.turn = if piece.player() == current {
                    TurnState::Selected {
                        square,
                        destinations,
                    }
                } else {
                    TurnState::PreviewOnly {
                        square,
                        destinations,
                    }
                };
            }

            (None, None) => {
                trace!(%square, "cleared selection");
                self.state.turn = TurnState::Idle;
            }
        }
    }

    /// Moves the piece on `from` to `to`, which must be one of its destinations.
    fn make_move(&mut self, from: Square, to: Square) {
        let position = self.state.position;
        let Some(piece) = self.state.position.take(from) else {
            return;
        };

        self.archive.push(position);
        let captured = self.state.position.place(piece, to);
        self.state.last_move = Some((from, to));

        let player = piece.player();
        if piece.is_pawn() && MoveGenerator::is_promotion_square(to, player) {
            debug!(%from, %to, %player, "pawn awaiting promotion");
            self.state.turn = TurnState::AwaitingPromotion(PendingPromotion {
                from,
                to,
                player,
                captured,
            });
            return;
        }

        let mv = Move::new(player, piece.kind(), from, to).with_capture(captured);
        self.finish_move(mv);
    }

    /// Records a completed move and hands the turn over.
    fn finish_move(&mut self, mv: Move) {
        debug!(?mv, "move complete");
        self.state.history.push(mv);
        self.state.position.pass_turn();
        self.state.turn = TurnState::Idle;
    }

    /// Resolves a pending promotion by replacing the pawn with a piece of `kind`.
    ///
    /// Does nothing if no promotion is pending, or if `kind` is not a knight, bishop, rook, or queen.
    pub fn promote(&mut self, kind: PieceKind) {
        let TurnState::AwaitingPromotion(pending) = self.state.turn else {
            trace!(?kind, "no promotion pending");
            return;
        };

        if !kind.is_promotion_target() {
            debug!(?kind, "cannot promote to this piece");
            return;
        }

        self.state
            .position
            .place(Piece::new(pending.player, kind), pending.to);

        let mv = Move::new(pending.player, PieceKind::Pawn, pending.from, pending.to)
            .with_capture(pending.captured)
            .with_promotion(Some(kind));
        self.finish_move(mv);
    }

    /// Takes back the last completed move.
    ///
    /// Does nothing if there is no history, or while a promotion is pending.
    /// Debug relocations made since that move are discarded with it.
    pub fn undo(&mut self) -> Option<Move> {
        if self.state.turn.is_awaiting_promotion() {
            return None;
        }

        let mv = self.state.history.pop()?;
        if let Some(position) = self.archive.pop() {
            self.state.position = position;
        }

        self.state.turn = TurnState::Idle;
        self.state.debug_selection = None;
        self.state.last_move = self.state.history.last().map(|mv| (mv.from, mv.to));

        debug!(?mv, "undid move");
        Some(mv)
    }

    /// Text notation of the board and the player to move. See [`Position::to_notation`].
    pub fn export(&self) -> String {
        self.state.position.to_notation()
    }

    /// Replaces the board and the player to move with an imported position.
    ///
    /// History, selection, and the last move are reset.
    pub fn import(&mut self, notation: &str) -> Result<()> {
        let position = Position::from_notation(notation)?;
        self.reset(position);
        Ok(())
    }

    /// Starts over from `position`, keeping the rules.
    pub fn reset(&mut self, position: Position) {
        self.state = GameState::new(position);
        self.archive.clear();
    }

    /// Destinations of the piece on `square`, whoever owns it.
    pub fn destinations_from(&self, square: Square) -> Vec<Square> {
        self.movegen.destinations(&self.state.position, square)
    }

    /// Returns `true` if any opponent attacks `player`'s king.
    pub fn in_check(&self, player: Player) -> bool {
        self.movegen.in_check(&self.state.position, player)
    }

    /// Returns `true` if `player` is in check and cannot get out of it.
    pub fn is_checkmate(&self, player: Player) -> bool {
        self.movegen.is_checkmate(&self.state.position, player)
    }

    #[inline(always)]
    pub fn rules(&self) -> Rules {
        self.movegen.rules()
    }

    #[inline(always)]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline(always)]
    pub(super) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[inline(always)]
    pub fn position(&self) -> &Position {
        self.state.position()
    }

    #[inline(always)]
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    #[inline(always)]
    pub fn history(&self) -> &[Move] {
        self.state.history()
    }

    #[inline(always)]
    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.state.last_move()
    }

    #[inline(always)]
    pub fn pending_promotion(&self) -> Option<&PendingPromotion> {
        self.state.pending_promotion()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Destinations;

    #[test]
    fn first_pawn_step() {
        let mut game = Game::default();

        game.select_square(Square::A2);
        assert_eq!(
            game.state().destinations(),
            Some(Destinations::Actionable(&[Square::A3, Square::A4]))
        );

        game.select_square(Square::A3);
        assert!(game.position().piece_at(Square::A2).is_none());
        assert_eq!(
            game.position().piece_at(Square::A3),
            Some(Piece::new(Player::Red, PieceKind::Pawn))
        );
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.last_move(), Some((Square::A2, Square::A3)));
        assert!(game.state().turn().is_idle());
    }

    #[test]
    fn opponent_piece_is_preview_only() {
        let mut game = Game::default();
        let before = *game.position();

        game.select_square(Square::A7);
        assert_eq!(
            game.state().destinations(),
            Some(Destinations::Preview(&[Square::A6, Square::A5]))
        );

        game.select_square(Square::A6);
        assert_eq!(*game.position(), before);
        assert_eq!(game.current_player(), Player::Red);
        assert!(game.state().turn().is_idle());
        assert!(game.history().is_empty());
    }

    #[test]
    fn reselecting_and_deselecting() {
        let mut game = Game::default();

        game.select_square(Square::B1);
        game.select_square(Square::G1);
        assert_eq!(game.state().selection(), Some(Square::G1));

        // Not a destination
        game.select_square(Square::E3);
        assert!(game.state().turn().is_idle());
        assert_eq!(game.current_player(), Player::Red);
    }

    #[test]
    fn capture_records_victim() {
        let notation = "8/8/8/8/8/8/8/8/8/8/8/rr2wn4 r";
        let mut game = Game::default();
        game.import(notation).unwrap();

        game.select_square(Square::A1);
        game.select_square(Square::D1);

        let mv = game.history()[0];
        assert_eq!(mv.captured, Some(Piece::new(Player::White, PieceKind::Knight)));
        assert_eq!(
            game.position().piece_at(Square::D1),
            Some(Piece::new(Player::Red, PieceKind::Rook))
        );
    }

    #[test]
    fn turns_cycle_through_all_players() {
        let mut game = Game::default();
        for (from, to, next) in [
            (Square::E2, Square::E3, Player::White),
            (Square::I7, Square::I6, Player::Black),
            (Square::I11, Square::I10, Player::Red),
        ] {
            game.select_square(from);
            game.select_square(to);
            assert_eq!(game.current_player(), next);
        }
        assert_eq!(game.history().len(), 3);
    }

    #[test]
    fn promotion_waits_for_choice() {
        let mut game = Game::default();
        game.import("8/8/8/8/8/rp7/8/8/8/8/8/8 r").unwrap();

        game.select_square(Square::A7);
        game.select_square(Square::A8);

        let pending = *game.pending_promotion().unwrap();
        assert_eq!(pending.to, Square::A8);
        assert_eq!(game.current_player(), Player::Red);
        assert_eq!(game.last_move(), Some((Square::A7, Square::A8)));
        assert!(game.history().is_empty());

        // Everything but a valid promotion is ignored
        game.select_square(Square::A8);
        game.promote(PieceKind::King);
        game.promote(PieceKind::Pawn);
        assert!(game.pending_promotion().is_some());
        assert!(game.undo().is_none());

        game.promote(PieceKind::Queen);
        assert_eq!(
            game.position().piece_at(Square::A8),
            Some(Piece::new(Player::Red, PieceKind::Queen))
        );
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.history()[0].promoted_to, Some(PieceKind::Queen));
        assert!(game.state().turn().is_idle());

        // Outside a pending promotion, this does nothing
        game.promote(PieceKind::Rook);
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn undo_restores_previous_position() {
        let mut game = Game::default();
        let start = *game.position();

        game.play_text("D2D4").unwrap();
        game.play_text("C7C5").unwrap();
        assert_eq!(game.undo().unwrap(), "C7C5");
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.last_move(), Some((Square::D2, Square::D4)));

        game.undo();
        assert_eq!(*game.position(), start);
        assert!(game.undo().is_none());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn play_rejects_illegal_moves() {
        let mut game = Game::default();
        assert!(game.play_text("A7A6").is_err());
        assert!(game.play_text("A2A5").is_err());
        assert!(game.play_text("A3A4").is_err());
        assert!(game.play_text("A1A2").is_err());
        assert!(game.history().is_empty());
        assert!(game.state().turn().is_idle());

        game.import("8/8/8/8/8/rp7/8/8/8/8/8/8 r").unwrap();
        assert!(game.play_text("A7A8").is_err());
        assert!(game.pending_promotion().is_none());
        assert!(game.position().piece_at(Square::A7).is_some());
        assert!(game.play_text("A7A8n").is_ok());
    }

    #[test]
    fn replay_reports_first_bad_move() {
        let mut game = Game::default();
        game.play_text("E2E4").unwrap();
        let mut moves = game.history().to_vec();
        moves.push(Move::new(Player::White, PieceKind::Pawn, Square::A7, Square::A3));

        let err = Game::replay(Rules::default(), &moves).unwrap_err();
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn replay_rejects_mismatched_records() {
        let mut game = Game::default();
        game.play_text("B1C3").unwrap();
        game.play_text("I7I6").unwrap();

        let mut wrong_capture = game.history().to_vec();
        wrong_capture[1].captured = Some(Piece::new(Player::Red, PieceKind::Knight));
        let err = Game::replay(Rules::default(), &wrong_capture).unwrap_err();
        assert!(err.to_string().contains("#2"));

        let mut wrong_piece = game.history().to_vec();
        wrong_piece[0].piece = PieceKind::Bishop;
        let err = Game::replay(Rules::default(), &wrong_piece).unwrap_err();
        assert!(err.to_string().contains("#1"));

        let mut wrong_player = game.history().to_vec();
        wrong_player[1].player = Player::Black;
        assert!(Game::replay(Rules::default(), &wrong_player).is_err());
    }

    fn game_with(pieces: &[(Square, Player, PieceKind)], to_move: Player) -> Game {
        let mut position = Position::empty();
        for &(square, player, kind) in pieces {
            position.place(Piece::new(player, kind), square);
        }
        position.set_side_to_move(to_move);
        Game::from_position(Rules::default(), position)
    }

    #[test]
    fn promotion_on_outer_file() {
        // A plain step along file L
        let mut game = game_with(&[(Square::L10, Player::Red, PieceKind::Pawn)], Player::Red);
        game.select_square(Square::L10);
        game.select_square(Square::L11);
        assert_eq!(game.pending_promotion().unwrap().to, Square::L11);
        assert_eq!(game.current_player(), Player::Red);
        game.promote(PieceKind::Rook);
        assert_eq!(
            game.position().piece_at(Square::L11),
            Some(Piece::new(Player::Red, PieceKind::Rook))
        );
        assert_eq!(game.current_player(), Player::White);

        // A capture onto file L
        let mut game = game_with(
            &[
                (Square::K10, Player::Red, PieceKind::Pawn),
                (Square::L11, Player::Black, PieceKind::Knight),
            ],
            Player::Red,
        );
        game.select_square(Square::K10);
        game.select_square(Square::L11);
        let pending = *game.pending_promotion().unwrap();
        assert_eq!(pending.captured, Some(Piece::new(Player::Black, PieceKind::Knight)));
        assert_eq!(game.current_player(), Player::Red);
        game.promote(PieceKind::Queen);
        assert_eq!(game.history()[0].kind(), crate::MoveKind::CaptureAndPromotion);

        // A Black pawn capturing onto file A
        let mut game = game_with(
            &[
                (Square::B3, Player::Black, PieceKind::Pawn),
                (Square::A2, Player::Red, PieceKind::Pawn),
            ],
            Player::Black,
        );
        assert!(game.play_text("B3A2").is_err());
        assert!(game.play_text("B3A2n").is_ok());
        assert_eq!(
            game.position().piece_at(Square::A2),
            Some(Piece::new(Player::Black, PieceKind::Knight))
        );
    }

    #[test]
    fn checkmate_is_reported() {
        let game = game_with(
            &[
                (Square::A1, Player::Red, PieceKind::King),
                (Square::A8, Player::White, PieceKind::Rook),
                (Square::B8, Player::White, PieceKind::Rook),
            ],
            Player::Red,
        );
        assert!(game.in_check(Player::Red));
        assert!(game.is_checkmate(Player::Red));
        assert!(!Game::default().is_checkmate(Player::Red));
    }
}
