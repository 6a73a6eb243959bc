use std::io::{self, Write};

use classic_chess::coord::{Coord, BOARD_SIZE};
use classic_chess::game::{Game, GameStatus};
use classic_chess::piece::{Color, Piece, PieceKind};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        eprintln!("Usage: console");
        eprintln!("Moves are entered as two squares, e.g. 'e2 e4'.");
        eprintln!("Commands: new (restart), quit");
        std::process::exit(2);
    }

    let mut game = Game::new();
    let stdin = io::stdin();

    loop {
        print_board(&game);
        print_state(&game);

        print!("{}> ", game.turn().name());
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        match words.as_slice() {
            [] => {}
            ["quit"] | ["exit"] => break,
            ["new"] => game.request_reset(),
            [from, to] => match (parse_square(from), parse_square(to)) {
                (Some(from), Some(to)) => {
                    game.select_square(from);
                    game.select_square(to);
                }
                _ => println!("Squares are a1..h8, e.g. 'e2 e4'."),
            },
            _ => println!("Enter a move as two squares ('e2 e4'), 'new' or 'quit'."),
        }
    }
}

/// Algebraic square: file a..h, rank 1..8 with rank 1 on White's side.
fn parse_square(word: &str) -> Option<Coord> {
    let mut chars = word.chars();
    let file = chars.next()?;
    let rank = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let file = (file as i32) - ('a' as i32);
    let rank = BOARD_SIZE - (rank.to_digit(10)? as i32);

    let sq = Coord::new(file, rank);
    sq.on_board().then_some(sq)
}

fn glyph(piece: Piece) -> char {
    let c = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}

fn print_board(game: &Game) {
    println!();
    for rank in 0..BOARD_SIZE {
        print!("{} ", BOARD_SIZE - rank);
        for file in 0..BOARD_SIZE {
            match game.board().piece_at(Coord::new(file, rank)) {
                Some(piece) => print!(" {}", glyph(piece)),
                None => print!(" ."),
            }
        }
        println!();
    }
    println!("   a b c d e f g h");
}

fn print_state(game: &Game) {
    for color in [Color::White, Color::Black] {
        let taken = game.captured().taken_by(color);
        if !taken.is_empty() {
            let names: Vec<&str> = taken.iter().map(|k| k.name()).collect();
            println!("{} has taken: {}", color.name(), names.join(", "));
        }
    }

    match game.status() {
        GameStatus::InProgress => {}
        GameStatus::Check(color) => println!("{} is in check", color.name()),
        GameStatus::Checkmate(winner) => {
            println!("Game over, {} wins", winner.name());
            println!("Type 'new' to restart");
        }
    }
}
