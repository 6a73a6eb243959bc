use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Color, PieceKind};
use crate::rules::checkmate::{is_checkmate, is_in_check, move_clears_check};
use crate::rules::moves::can_move;

/// Where the turn controller currently is. `MoveProposed` is entered and
/// resolved within a single [`Game::select_square`] call; at rest the
/// machine is always in one of the other three states.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    WaitingForSelection,
    PieceSelected,
    MoveProposed,
    GameOver(Color),
}

/// Derived game status; recomputed on demand, never stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GameStatus {
    InProgress,
    /// The named color is to move and in check.
    Check(Color),
    /// The named color has won.
    Checkmate(Color),
}

/// Per-color capture lists, in capture order.
#[derive(Clone, Debug, Default)]
pub struct CapturedSet {
    taken: [Vec<PieceKind>; 2],
}

impl CapturedSet {
    /// Pieces `color` has taken from the opponent, oldest first.
    pub fn taken_by(&self, color: Color) -> &[PieceKind] {
        &self.taken[color.index()]
    }

    fn push(&mut self, color: Color, kind: PieceKind) {
        self.taken[color.index()].push(kind);
    }

    fn clear(&mut self) {
        self.taken[0].clear();
        self.taken[1].clear();
    }
}

/// Transient selection state, owned by the controller and exposed only for
/// highlighting. Cleared on every resolved move attempt and on defocus.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
struct Selection {
    origin: Option<Coord>,
    target: Option<Coord>,
}

/// The turn controller: orchestrates selection, validation, threat checks,
/// commits, turn alternation and win detection.
///
/// All illegal inputs (empty square, opponent's piece, unreachable
/// destination) are no-ops; the engine raises no errors during play.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    phase: Phase,
    captured: CapturedSet,
    selection: Selection,
}

impl Game {
    /// A fresh game: standard layout, White to move, nothing selected.
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            turn: Color::White,
            phase: Phase::WaitingForSelection,
            captured: CapturedSet::default(),
            selection: Selection::default(),
        }
    }

    /// A game starting from an arbitrary board, for staged positions.
    pub fn with_board(board: Board, to_move: Color) -> Self {
        Self {
            board,
            turn: to_move,
            phase: Phase::WaitingForSelection,
            captured: CapturedSet::default(),
            selection: Selection::default(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Origin square of the current selection, for highlighting.
    #[inline]
    pub fn selected_origin(&self) -> Option<Coord> {
        self.selection.origin
    }

    /// Most recently proposed destination, for highlighting.
    #[inline]
    pub fn selected_target(&self) -> Option<Coord> {
        self.selection.target
    }

    #[inline]
    pub fn captured(&self) -> &CapturedSet {
        &self.captured
    }

    /// Snapshot status, derived from the board and side to move alone; the
    /// stored phase is not consulted, so a staged position reports mate
    /// before any input arrives. The mate probe runs on a clone.
    pub fn status(&self) -> GameStatus {
        if !is_in_check(&self.board, self.turn) {
            return GameStatus::InProgress;
        }
        let mut probe = self.board.clone();
        if is_checkmate(&mut probe, self.turn) {
            GameStatus::Checkmate(self.turn.other())
        } else {
            GameStatus::Check(self.turn)
        }
    }

    /// Primary input on a square.
    ///
    /// With no piece selected this selects an own piece (anything else is a
    /// no-op). With a piece selected, another own piece replaces the
    /// selection; any other square is proposed as the destination and the
    /// attempt resolves immediately.
    pub fn select_square(&mut self, square: Coord) {
        if matches!(self.phase, Phase::GameOver(_)) {
            return;
        }
        if !square.on_board() {
            return;
        }

        match self.selection.origin {
            None => {
                if self
                    .board
                    .piece_at(square)
                    .is_some_and(|p| p.color == self.turn)
                {
                    self.selection = Selection {
                        origin: Some(square),
                        target: None,
                    };
                    self.phase = Phase::PieceSelected;
                }
            }
            Some(origin) => {
                if self
                    .board
                    .piece_at(square)
                    .is_some_and(|p| p.color == self.turn)
                {
                    // Explicit re-selection of another own piece.
                    self.selection = Selection {
                        origin: Some(square),
                        target: None,
                    };
                } else {
                    self.propose(origin, square);
                }
            }
        }
    }

    /// Secondary input: defocus. Clears the selection when the input names
    /// an occupied square and something is selected.
    pub fn select_secondary_square(&mut self, square: Coord) {
        if matches!(self.phase, Phase::GameOver(_)) {
            return;
        }
        if self.selection.origin.is_some() && self.board.is_occupied(square) {
            self.clear_selection();
        }
    }

    /// Start over: standard layout, empty capture lists, White to move.
    /// Honored at any time, idempotent.
    pub fn request_reset(&mut self) {
        self.board = Board::standard();
        self.turn = Color::White;
        self.phase = Phase::WaitingForSelection;
        self.captured.clear();
        self.selection = Selection::default();
    }

    /// Resolve a proposed move. Every path out of here either commits the
    /// move (turn flips exactly once) or leaves the board untouched, and
    /// in both cases the selection is cleared.
    fn propose(&mut self, origin: Coord, target: Coord) {
        self.phase = Phase::MoveProposed;
        self.selection.target = Some(target);

        if !is_in_check(&self.board, self.turn) {
            if target != origin && can_move(&self.board, origin, target) {
                self.commit(origin, target);
            } else {
                self.clear_selection();
            }
        } else {
            // In check: a mated side loses before any move resolves.
            if is_checkmate(&mut self.board, self.turn) {
                let winner = self.turn.other();
                self.clear_selection();
                self.phase = Phase::GameOver(winner);
                return;
            }

            // The proposed move is only accepted if it rescues the king.
            if target != origin
                && can_move(&self.board, origin, target)
                && move_clears_check(&mut self.board, self.turn, origin, target)
            {
                self.commit(origin, target);
            } else {
                self.clear_selection();
            }
        }

        // Corroborating re-check once the attempt resolved, whichever branch
        // handled it: the side now to move may have just been mated.
        if is_in_check(&self.board, self.turn) && is_checkmate(&mut self.board, self.turn) {
            self.phase = Phase::GameOver(self.turn.other());
        }
    }

    /// Apply a validated move: capture bookkeeping, board mutation (the
    /// king cache updates inside), turn flip, selection cleared -- in that
    /// order. The capture is recorded only for the side to move; the flip
    /// happens strictly afterwards.
    fn commit(&mut self, from: Coord, to: Coord) {
        let Some(mover) = self.board.piece_at(from) else {
            return;
        };
        let captured = self.board.apply_move(from, to);
        if let Some(victim) = captured {
            if mover.color == self.turn {
                self.captured.push(self.turn, victim.kind);
            }
        }
        self.turn = self.turn.other();
        self.clear_selection();
    }

    fn clear_selection(&mut self) {
        self.selection = Selection::default();
        if !matches!(self.phase, Phase::GameOver(_)) {
            self.phase = Phase::WaitingForSelection;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
