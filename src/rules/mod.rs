pub mod moves;
pub mod attacks;
pub mod checkmate;
