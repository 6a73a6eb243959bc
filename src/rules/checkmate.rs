use crate::board::Board;
use crate::coord::{all_squares, Coord, KING_STEPS};
use crate::piece::{Color, Piece};

use super::attacks::is_attacked;
use super::moves::can_move;

/// Is `color`'s king attacked on its cached square?
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_attacked(board, color, board.king_square(color))
}

/// Scoped board mutation: lifts one occupant off its square and puts it
/// back on drop, so probing cannot leave the board corrupted on any exit
/// path. The king cache is intentionally left alone.
struct Lifted<'a> {
    board: &'a mut Board,
    square: Coord,
    occupant: Option<Piece>,
}

impl<'a> Lifted<'a> {
    fn new(board: &'a mut Board, square: Coord) -> Self {
        let occupant = board.take_raw(square);
        Self {
            board,
            square,
            occupant,
        }
    }
}

impl Drop for Lifted<'_> {
    fn drop(&mut self) {
        self.board.set_raw(self.square, self.occupant);
    }
}

/// Apply `from -> to`, ask whether `color` is still in check, then restore
/// the two squares and the king cache unconditionally.
///
/// Restoration happens in a drop guard, so an early exit cannot leave the
/// hypothetical move on the board, and a simulated capture never reaches
/// the capture lists.
pub fn move_clears_check(board: &mut Board, color: Color, from: Coord, to: Coord) -> bool {
    struct Undo<'a> {
        board: &'a mut Board,
        from: Coord,
        to: Coord,
        from_occ: Option<Piece>,
        to_occ: Option<Piece>,
        kings: [Coord; 2],
    }

    impl Drop for Undo<'_> {
        fn drop(&mut self) {
            self.board.set_raw(self.from, self.from_occ);
            self.board.set_raw(self.to, self.to_occ);
            self.board.restore_king_cache(self.kings);
        }
    }

    let undo = Undo {
        from_occ: board.piece_at(from),
        to_occ: board.piece_at(to),
        kings: board.king_cache(),
        from,
        to,
        board,
    };

    undo.board.apply_move(from, to);
    !is_in_check(undo.board, color)
}

/// The rescue search: can some piece of `color` contest the king's square?
///
/// Scans in square order for the first own piece with a legal move onto the
/// king's current square, simulates exactly that move, and answers whether
/// it cleared the check. The scan never tries a second candidate, and
/// interpositions on other squares of a slider's ray are not explored; this
/// is a deliberate approximation, kept because checkmate detection
/// corroborates it with the 9-square scan.
///
/// With no candidate at all the answer is `true` -- "vacuously rescuable".
/// The inverted convention is load-bearing: `is_checkmate` requires
/// `!can_be_rescued`, so a position with no contesting piece is never
/// declared mate through this predicate alone.
pub fn can_be_rescued(board: &mut Board, color: Color) -> bool {
    let king_sq = board.king_square(color);
    if !king_sq.on_board() {
        return false;
    }

    for from in all_squares() {
        let Some(piece) = board.piece_at(from) else {
            continue;
        };
        if piece.color != color {
            continue;
        }
        if can_move(board, from, king_sq) {
            return move_clears_check(board, color, from, king_sq);
        }
    }

    true
}

/// Checkmate test for `color`.
///
/// The king is lifted off the board for the duration so that its own
/// shadow does not mask threats along its square, then every square of
/// the 3x3 neighborhood must be unsafe -- attacked, occupied, or off the
/// board -- and the rescue search must fail. Both computations must agree;
/// callers additionally require [`is_in_check`] before declaring mate.
pub fn is_checkmate(board: &mut Board, color: Color) -> bool {
    let king_sq = board.king_square(color);
    let probe = Lifted::new(board, king_sq);

    let all_unsafe = std::iter::once(king_sq)
        .chain(KING_STEPS.iter().map(|&step| king_sq + step))
        .all(|sq| {
            !sq.on_board() || probe.board.is_occupied(sq) || is_attacked(probe.board, color, sq)
        });

    all_unsafe && !can_be_rescued(probe.board, color)
}
