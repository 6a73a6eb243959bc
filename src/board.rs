use thiserror::Error;

use crate::coord::{all_squares, Coord, BOARD_SIZE};
use crate::piece::{Color, Piece, PieceKind};

/// Errors raised while constructing a position.
///
/// These are startup-configuration failures and are distinct from in-game
/// illegal moves, which the engine treats as silent no-ops.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SetupError {
    #[error("square {0} is off the board")]
    OffBoard(Coord),

    #[error("square {0} is already occupied")]
    SquareOccupied(Coord),

    #[error("{} has no king", .0.name())]
    MissingKing(Color),

    #[error("{} has more than one king", .0.name())]
    DuplicateKing(Color),
}

/// The 8x8 occupancy grid, plus a cached king square per color.
///
/// Invariant: each color has exactly one king on the board and the cache
/// names the square holding it. Normal play goes through [`Board::apply_move`],
/// which keeps the cache current; check detection uses the raw accessors and
/// restores whatever it touched before returning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    kings: [Coord; 2],
}

impl Board {
    /// The standard 32-piece opening position.
    pub fn standard() -> Self {
        let mut grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        let mut kings = [Coord::new(0, 0); 2];

        use PieceKind::*;
        let back: [PieceKind; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];

        for color in [Color::White, Color::Black] {
            for (file, &kind) in back.iter().enumerate() {
                grid[file][color.back_rank() as usize] = Some(Piece::new(kind, color));
            }
            for file in 0..BOARD_SIZE as usize {
                grid[file][color.pawn_rank() as usize] = Some(Piece::new(Pawn, color));
            }
            kings[color.index()] = Coord::new(4, color.back_rank());
        }

        Self { grid, kings }
    }

    /// Build an arbitrary position.
    ///
    /// Every placement must be on the board and on a distinct square, and
    /// each color must contribute exactly one king.
    pub fn from_pieces(placements: &[(Coord, Piece)]) -> Result<Self, SetupError> {
        let mut grid = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        let mut kings: [Option<Coord>; 2] = [None, None];

        for &(at, piece) in placements {
            if !at.on_board() {
                return Err(SetupError::OffBoard(at));
            }
            let slot = &mut grid[at.file as usize][at.rank as usize];
            if slot.is_some() {
                return Err(SetupError::SquareOccupied(at));
            }
            *slot = Some(piece);

            if piece.kind == PieceKind::King {
                let cached = &mut kings[piece.color.index()];
                if cached.is_some() {
                    return Err(SetupError::DuplicateKing(piece.color));
                }
                *cached = Some(at);
            }
        }

        let white_king = kings[Color::White.index()].ok_or(SetupError::MissingKing(Color::White))?;
        let black_king = kings[Color::Black.index()].ok_or(SetupError::MissingKing(Color::Black))?;

        Ok(Self {
            grid,
            kings: [white_king, black_king],
        })
    }

    /// Occupant of `at`, or `None` when empty or off the board.
    #[inline]
    pub fn piece_at(&self, at: Coord) -> Option<Piece> {
        if at.on_board() {
            self.grid[at.file as usize][at.rank as usize]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_occupied(&self, at: Coord) -> bool {
        self.piece_at(at).is_some()
    }

    /// Cached square of `color`'s king.
    #[inline]
    pub fn king_square(&self, color: Color) -> Coord {
        self.kings[color.index()]
    }

    /// Non-empty squares in scan order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        all_squares().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Move the occupant of `from` onto `to`, returning whatever was
    /// captured. Updates the king cache when a king moves. Does nothing
    /// (and captures nothing) when `from` is empty.
    pub fn apply_move(&mut self, from: Coord, to: Coord) -> Option<Piece> {
        debug_assert!(from.on_board() && to.on_board());
        let Some(mover) = self.take_raw(from) else {
            return None;
        };
        let captured = self.set_raw(to, Some(mover));
        if mover.kind == PieceKind::King {
            self.kings[mover.color.index()] = to;
        }
        captured
    }

    /// Replace the occupant of `at` without touching the king cache.
    pub(crate) fn set_raw(&mut self, at: Coord, occupant: Option<Piece>) -> Option<Piece> {
        std::mem::replace(&mut self.grid[at.file as usize][at.rank as usize], occupant)
    }

    /// Remove and return the occupant of `at` without touching the king cache.
    pub(crate) fn take_raw(&mut self, at: Coord) -> Option<Piece> {
        self.set_raw(at, None)
    }

    pub(crate) fn king_cache(&self) -> [Coord; 2] {
        self.kings
    }

    pub(crate) fn restore_king_cache(&mut self, kings: [Coord; 2]) {
        self.kings = kings;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_has_32_pieces_and_kings_cached() {
        let board = Board::standard();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.king_square(Color::White), Coord::new(4, 7));
        assert_eq!(board.king_square(Color::Black), Coord::new(4, 0));
        assert_eq!(
            board.piece_at(Coord::new(4, 6)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
    }

    #[test]
    fn from_pieces_rejects_bad_placements() {
        let king = |color| Piece::new(PieceKind::King, color);

        let err = Board::from_pieces(&[(Coord::new(8, 0), king(Color::White))]);
        assert_eq!(err.unwrap_err(), SetupError::OffBoard(Coord::new(8, 0)));

        let err = Board::from_pieces(&[
            (Coord::new(0, 0), king(Color::White)),
            (Coord::new(0, 0), king(Color::Black)),
        ]);
        assert_eq!(err.unwrap_err(), SetupError::SquareOccupied(Coord::new(0, 0)));

        let err = Board::from_pieces(&[(Coord::new(0, 0), king(Color::White))]);
        assert_eq!(err.unwrap_err(), SetupError::MissingKing(Color::Black));

        let err = Board::from_pieces(&[
            (Coord::new(0, 0), king(Color::White)),
            (Coord::new(1, 0), king(Color::White)),
            (Coord::new(7, 7), king(Color::Black)),
        ]);
        assert_eq!(err.unwrap_err(), SetupError::DuplicateKing(Color::White));
    }
}
