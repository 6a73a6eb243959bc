use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Number of files and ranks of the board.
pub const BOARD_SIZE: i32 = 8;

/// A board coordinate: `file` runs left to right, `rank` top to bottom.
///
/// Rank 0 is Black's back rank, rank 7 is White's. A coordinate is also
/// used as a displacement between squares, so both fields may leave
/// `[0, BOARD_SIZE)`; use [`Coord::on_board`] before indexing.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Coord {
    pub file: i32,
    pub rank: i32,
}

impl Coord {
    #[inline]
    pub const fn new(file: i32, rank: i32) -> Self {
        Self { file, rank }
    }

    #[inline]
    pub fn on_board(self) -> bool {
        self.file >= 0 && self.file < BOARD_SIZE && self.rank >= 0 && self.rank < BOARD_SIZE
    }

    /// Chebyshev norm; 1 for every king step.
    #[inline]
    pub fn chebyshev_norm(self) -> i32 {
        self.file.abs().max(self.rank.abs())
    }

    /// Unit step of this displacement along each axis.
    #[inline]
    pub fn signum(self) -> Coord {
        Coord::new(self.file.signum(), self.rank.signum())
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Coord {
        Coord::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl AddAssign for Coord {
    #[inline]
    fn add_assign(&mut self, rhs: Coord) {
        self.file += rhs.file;
        self.rank += rhs.rank;
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Coord {
        Coord::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// The 8 king steps / neighbor offsets.
pub const KING_STEPS: [Coord; 8] = [
    Coord { file: -1, rank: -1 },
    Coord { file: -1, rank: 0 },
    Coord { file: -1, rank: 1 },
    Coord { file: 0, rank: -1 },
    Coord { file: 0, rank: 1 },
    Coord { file: 1, rank: -1 },
    Coord { file: 1, rank: 0 },
    Coord { file: 1, rank: 1 },
];

/// All squares in scan order (file-major), the order every brute-force
/// board scan in the engine uses.
pub fn all_squares() -> impl Iterator<Item = Coord> {
    (0..BOARD_SIZE).flat_map(|file| (0..BOARD_SIZE).map(move |rank| Coord::new(file, rank)))
}
