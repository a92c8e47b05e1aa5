use signboard::board::{Board, CastlingState, Color};
use signboard::logger::{DEFAULT_FILTER, init_logging};
use signboard::moves::execute::all_legal_moves;
use signboard::moves::square_control::is_king_attacked;
use signboard::session::Session;
use std::error::Error;
use std::io::{self, BufRead, Write};

type CliResult<T = ()> = Result<T, Box<dyn Error>>;

const LOG_PATH: &str = "logs/signboard.log";

fn main() {
    if let Err(err) = init_logging(LOG_PATH, DEFAULT_FILTER) {
        eprintln!("warning: logging disabled ({err})");
    }

    let mut session = Session::new();
    println!("{}", session.board());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };

        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let command = parts[0];

        let result = match command {
            "quit" | "exit" => break,
            "d" | "display" => {
                println!("{}", session.board());
                println!("to move: {}", session.player());
                Ok(())
            }
            "new" => {
                session = Session::new();
                println!("{}", session.board());
                Ok(())
            }
            "fen" => handle_fen(&parts, &mut session),
            "moves" => handle_moves(&parts, &session),
            "all" => handle_all(&session),
            "play" => handle_play(&parts, &mut session),
            "check" => handle_check(&parts, &session),
            "rotate" => {
                session.rotate();
                println!("{}", session.board());
                println!("to move: {}", session.player());
                Ok(())
            }
            "castling" => {
                println!("{:?}", session.castling());
                Ok(())
            }
            "help" => {
                print_help();
                Ok(())
            }
            other => {
                println!("unknown command '{other}' (try 'help')");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("error: {err}");
        }
        let _ = io::stdout().flush();
    }
}

fn print_help() {
    println!("d | display               show the board");
    println!("new                       reset to the starting position");
    println!("fen <placement> [color]   load a position, color at the bottom");
    println!("moves <row> <cell>        legal destinations of a piece");
    println!("all                       every legal move for the side to move");
    println!("play <r> <c> <r> <c>      make a move");
    println!("check <white|black>       is that king attacked?");
    println!("rotate                    flip the board and the side to move");
    println!("castling                  show castling rights");
    println!("quit");
}

fn coord(parts: &[&str], idx: usize) -> CliResult<i32> {
    let raw = parts
        .get(idx)
        .ok_or_else(|| format!("missing argument {idx}"))?;
    Ok(raw.parse::<i32>()?)
}

fn handle_fen(parts: &[&str], session: &mut Session) -> CliResult {
    let placement = parts.get(1).ok_or("missing placement")?;
    let board: Board = placement.parse()?;
    let player = match parts.get(2) {
        Some(c) => c.parse::<Color>()?,
        None => Color::White,
    };
    *session = Session::from_board(board, CastlingState::none(), player)?;
    println!("{}", session.board());
    Ok(())
}

fn handle_moves(parts: &[&str], session: &Session) -> CliResult {
    let moves = session.legal_moves_from(coord(parts, 1)?, coord(parts, 2)?)?;
    let list: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
    println!("{} move(s): {}", moves.len(), list.join(" "));
    Ok(())
}

fn handle_all(session: &Session) -> CliResult {
    let moves = all_legal_moves(session.player(), session.board(), session.castling())?;
    for (piece, to) in &moves {
        println!("{piece} -> {to}");
    }
    println!("Total: {}", moves.len());
    Ok(())
}

fn handle_play(parts: &[&str], session: &mut Session) -> CliResult {
    let from = (coord(parts, 1)?, coord(parts, 2)?);
    let to = (coord(parts, 3)?, coord(parts, 4)?);
    let played = session.play(from, to)?;
    println!("{played:#}");
    if session.under_check().get(played.piece.color.opposite()) {
        if let Some(entry) = session.logs().last() {
            println!("{entry}");
        }
    }
    println!("{}", session.board());
    Ok(())
}

fn handle_check(parts: &[&str], session: &Session) -> CliResult {
    let color = match parts.get(1) {
        Some(c) => c.parse::<Color>()?,
        None => session.player(),
    };
    let attacked = is_king_attacked(color, session.board())?;
    println!("{color} king attacked: {attacked}");
    Ok(())
}
