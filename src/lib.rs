//! Rule engine for a two-player game of chess on a standard 8x8 board.
//!
//! The engine owns the board, validates and applies moves, tracks captures
//! and decides check / checkmate. Presentation (input mapping, drawing) is
//! an external collaborator that feeds square selections in and renders the
//! read-only view exposed by [`game::Game`].

pub mod coord;
pub mod piece;
pub mod board;
pub mod rules;
pub mod game;
