//! Live game: board, side to move, and the click-driven selection machine.
//!
//! The engine owns the only mutable board. Human input arrives as `select`
//! calls; automated turns hand the board to an `Engine` and adopt the
//! returned successor wholesale.

use std::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::engines::engine_trait::Engine;
use crate::game_state::board_state::BoardState;
use crate::game_state::checkers_types::*;
use crate::move_generation::legal_moves::{legal_moves, side_has_any_move};
use crate::move_generation::move_generator::apply_candidate;

/// A move made through `select`/`try_move`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
    pub promoted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A piece of the side to move is now selected.
    Selected(Position),
    /// The selected piece moved; the turn has passed.
    Moved(MoveRecord),
    /// Nothing changed (empty cell or opponent piece with no selection).
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineTurn {
    Played { score: Option<f64> },
    /// The engine found no successor; its side has lost.
    NoMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    NoPiecesLeft,
    NoLegalMoves,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Side,
    pub reason: WinReason,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (winner, loser) = (self.winner, self.winner.opposite());
        match self.reason {
            WinReason::NoPiecesLeft => write!(f, "{winner} wins: {loser} has no pieces left"),
            WinReason::NoLegalMoves => write!(f, "{winner} wins: {loser} has no legal moves"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameEngine {
    board: BoardState,
    turn: Side,
    selected: Option<Position>,
}

impl GameEngine {
    /// Start from `board` with Bottom to move.
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            turn: Side::Bottom,
            selected: None,
        }
    }

    pub fn new_game<R: Rng>(rng: &mut R) -> Self {
        Self::new(BoardState::new_game(rng))
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<&Piece> {
        self.selected.and_then(|pos| self.board.piece_at(pos))
    }

    /// Handle a click on `(row, col)`.
    ///
    /// With nothing selected, a piece of the side to move becomes selected.
    /// With a selection active, the click is tried as a destination; if that
    /// fails the selection is dropped and the click is reinterpreted as a fresh
    /// selection.
    pub fn select(&mut self, row: u8, col: u8) -> SelectOutcome {
        if self.selected.is_some() {
            if let Some(record) = self.try_move(row, col) {
                return SelectOutcome::Moved(record);
            }
            self.selected = None;
            return self.select(row, col);
        }

        let pos = Position::new(row, col);
        match self.board.piece_at(pos) {
            Some(piece) if piece.side == self.turn => {
                self.selected = Some(pos);
                trace!("selected {:?} piece at {:?}", piece.element, pos);
                SelectOutcome::Selected(pos)
            }
            _ => SelectOutcome::Ignored,
        }
    }

    /// Move the selected piece to `(row, col)` if that is one of its legal
    /// destinations. Resolves any capture, passes the turn, and clears the
    /// selection.
    pub fn try_move(&mut self, row: u8, col: u8) -> Option<MoveRecord> {
        let piece = *self.selected()?;
        let dest = Position::new(row, col);
        let moves = legal_moves(&self.board, &piece);
        let candidate = moves.iter().find(|candidate| candidate.dest == dest)?;

        let (moved, captured) = apply_candidate(&mut self.board, &piece, candidate);
        let record = MoveRecord {
            from: piece.position(),
            to: dest,
            captured,
            promoted: moved.is_king && !piece.is_king,
        };
        debug!("{:?} moved {:?}", self.turn, record);
        self.change_turn();
        Some(record)
    }

    /// Pass the turn and drop any selection.
    pub fn change_turn(&mut self) {
        self.selected = None;
        self.turn = self.turn.opposite();
    }

    /// Adopt a board produced by an engine for the side to move, then pass
    /// the turn.
    pub fn apply_engine_board(&mut self, board: BoardState) {
        self.board = board;
        self.change_turn();
    }

    /// Let `engine` play the side to move.
    pub fn play_engine_turn(&mut self, engine: &mut dyn Engine) -> EngineTurn {
        let output = engine.choose_move(&self.board, self.turn);
        match output.best_board {
            Some(board) => {
                debug!("{} played for {:?}", engine.name(), self.turn);
                self.apply_engine_board(board);
                EngineTurn::Played {
                    score: output.score,
                }
            }
            None => {
                debug!("{} found no move for {:?}", engine.name(), self.turn);
                EngineTurn::NoMove
            }
        }
    }

    /// Terminal check. A side with no pieces, or whose pieces cannot move,
    /// has lost. Bottom is examined first.
    pub fn check_winner(&self) -> Option<GameResult> {
        for side in [Side::Bottom, Side::Top] {
            let reason = if self.board.piece_count(side) == 0 {
                Some(WinReason::NoPiecesLeft)
            } else if !side_has_any_move(&self.board, side) {
                Some(WinReason::NoLegalMoves)
            } else {
                None
            };
            if let Some(reason) = reason {
                return Some(GameResult {
                    winner: side.opposite(),
                    reason,
                });
            }
        }
        None
    }
}
