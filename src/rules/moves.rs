use crate::board::Board;
use crate::coord::Coord;
use crate::piece::{Piece, PieceKind};

/// Movement geometry and occupancy for a single piece, ignoring check and
/// ignoring who owns the destination.
///
/// Pure in the board: blocking is read from live occupancy, so this must be
/// queried before a hypothetical move is applied, never after. Zero
/// displacement is always false.
pub fn pseudo_legal(board: &Board, piece: Piece, from: Coord, to: Coord) -> bool {
    let d = to - from;
    if d.file == 0 && d.rank == 0 {
        return false;
    }

    use PieceKind::*;
    match piece.kind {
        Pawn => pawn_move(board, piece, from, to),
        Rook => {
            (d.file == 0 || d.rank == 0) && ray_clear(board, from, to)
        }
        Knight => {
            let af = d.file.abs();
            let ar = d.rank.abs();
            (af == 1 && ar == 2) || (af == 2 && ar == 1)
        }
        Bishop => d.file.abs() == d.rank.abs() && ray_clear(board, from, to),
        Queen => {
            (d.file == 0 || d.rank == 0 || d.file.abs() == d.rank.abs())
                && ray_clear(board, from, to)
        }
        King => d.chebyshev_norm() == 1,
    }
}

/// Pawns are the only directional piece: they advance toward the opponent's
/// back rank, capture one step diagonally ahead onto an occupied square,
/// and may open with a double step from their starting rank.
///
/// En passant is not represented; the board does not remember the previous
/// move, which that rule would need.
fn pawn_move(board: &Board, piece: Piece, from: Coord, to: Coord) -> bool {
    let dir = piece.color.advance_dir();

    // Diagonal capture.
    if to.rank == from.rank + dir && (to.file - from.file).abs() == 1 && board.is_occupied(to) {
        return true;
    }

    if to.file != from.file {
        return false;
    }

    // Single advance, onto an empty square only.
    if to.rank == from.rank + dir {
        return !board.is_occupied(to);
    }

    // Double advance from the pawn rank, both squares empty.
    if to.rank == from.rank + 2 * dir && from.rank == piece.color.pawn_rank() {
        let between = Coord::new(from.file, from.rank + dir);
        return !board.is_occupied(between) && !board.is_occupied(to);
    }

    false
}

/// True iff every square strictly between `from` and `to` is empty.
///
/// Callers guarantee the two squares are aligned along a rank, file or
/// diagonal; the step is derived from the displacement's signum.
fn ray_clear(board: &Board, from: Coord, to: Coord) -> bool {
    let step = (to - from).signum();
    let mut cur = from + step;
    while cur != to {
        if board.is_occupied(cur) {
            return false;
        }
        cur += step;
    }
    true
}

/// Full single-ply legality, ignoring check: the mover's geometry accepts
/// the destination and the destination is not held by the mover's own
/// color. An empty origin is simply illegal.
pub fn can_move(board: &Board, from: Coord, to: Coord) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if !to.on_board() {
        return false;
    }
    if !pseudo_legal(board, piece, from, to) {
        return false;
    }
    match board.piece_at(to) {
        Some(occupant) => occupant.color != piece.color,
        None => true,
    }
}
