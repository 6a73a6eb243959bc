use crate::board::Board;
use crate::coord::Coord;
use crate::piece::Color;

use super::moves::pseudo_legal;

/// True iff `target` is reachable by a pseudo-legal move of some piece not
/// of `target_color`, right now. Single-ply threat only: whether the
/// attacker would expose its own king is deliberately ignored.
///
/// Brute force over all 64 squares. Off-board targets are never attacked.
/// An attacker identical (kind and color) to the occupant of `target` is
/// skipped, so a piece never counts as threatening its own square.
pub fn is_attacked(board: &Board, target_color: Color, target: Coord) -> bool {
    if !target.on_board() {
        return false;
    }

    let target_piece = board.piece_at(target);

    for (from, piece) in board.pieces() {
        if piece.color == target_color {
            continue;
        }
        if Some(piece) == target_piece {
            continue;
        }
        if pseudo_legal(board, piece, from, target) {
            return true;
        }
    }

    false
}
