use anyhow::{Context, Result};
use chess_rules::session::{ClickOutcome, Session};
use chess_rules::{is_in_check, legal_moves, Board, Color, Piece, Square};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect positions and move pieces with the chess_rules engine", long_about = None)]
struct Args {
    /// Starting position as FEN (the placement field is enough)
    #[arg(long, global = true)]
    fen: Option<String>,

    /// Starting position as a JSON board snapshot
    #[arg(long, global = true)]
    position: Option<PathBuf>,

    /// Draw pieces with Unicode glyphs
    #[arg(long, global = true)]
    unicode: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive session: type a square name to click it
    Play,
    /// List the legal destinations of the piece on SQUARE
    Moves {
        square: Square,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Report whether COLOR's king is in check
    Check { color: Color },
}

#[derive(Serialize)]
struct MovesReport {
    origin: Square,
    piece: Option<Piece>,
    destinations: Vec<Square>,
}

fn load_board(args: &Args) -> Result<Board> {
    match (&args.fen, &args.position) {
        (Some(_), Some(_)) => anyhow::bail!("use either --fen or --position, not both"),
        (Some(fen), None) => Ok(Board::from_fen(fen)?),
        (None, Some(path)) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&text).with_context(|| format!("parsing board snapshot {}", path.display()))
        }
        (None, None) => Ok(Board::standard()),
    }
}

fn save_board(board: &Board, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(board)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))
}

fn print_help() {
    println!("Commands:");
    println!("  <square>      click a square, e.g. e2 (select, then click a destination)");
    println!("  board         print the board");
    println!("  save <file>   write the board as a JSON snapshot");
    println!("  help          show this help");
    println!("  quit          leave");
}

fn play(board: Board, unicode: bool) -> Result<()> {
    let mut session = Session::new(board);
    println!("{}", session.board().render(unicode));
    print_help();
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 { break; }
        let line = line.trim();
        if line.is_empty() { continue; }
        match line {
            "quit" | "exit" => break,
            "help" => { print_help(); continue; }
            "board" => { println!("{}", session.board().render(unicode)); continue; }
            _ => {}
        }
        if let Some(path) = line.strip_prefix("save ") {
            match save_board(session.board(), Path::new(path.trim())) {
                Ok(()) => println!("Saved to {}", path.trim()),
                Err(e) => println!("Save failed: {e:#}"),
            }
            continue;
        }
        let sq: Square = match line.parse() {
            Ok(sq) => sq,
            Err(e) => { println!("{e}"); continue; }
        };
        match session.click(sq) {
            ClickOutcome::Selected(moves) => {
                let dests: Vec<String> = moves.iter().map(|d| d.to_string()).collect();
                if dests.is_empty() {
                    println!("{sq} selected: no legal moves");
                } else {
                    println!("{sq} selected: {}", dests.join(" "));
                }
            }
            ClickOutcome::Ignored => println!("{sq} is empty"),
            ClickOutcome::Moved { mv, captured } => {
                match captured {
                    Some(p) => println!("{mv} (captures {p})"),
                    None => println!("{mv}"),
                }
                println!("{}", session.board().render(unicode));
                for color in [Color::White, Color::Black] {
                    if is_in_check(session.board(), color) { println!("{color} is in check"); }
                }
            }
            ClickOutcome::Cancelled => println!("Selection cleared"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let board = load_board(&args)?;

    match args.command.unwrap_or(Command::Play) {
        Command::Play => play(board, args.unicode)?,
        Command::Moves { square, json } => {
            let moves = legal_moves(&board, square);
            if json {
                let report = MovesReport { origin: square, piece: moves.piece(), destinations: moves.iter().collect() };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", board.render(args.unicode));
                match moves.piece() {
                    None => println!("{square} is empty"),
                    Some(p) => {
                        let dests: Vec<String> = moves.iter().map(|d| d.to_string()).collect();
                        println!("{p} on {square}: {} legal move(s) {}", moves.len(), dests.join(" "));
                    }
                }
            }
        }
        Command::Check { color } => {
            println!("{}", if is_in_check(&board, color) { "check" } else { "not in check" });
        }
    }
    Ok(())
}
