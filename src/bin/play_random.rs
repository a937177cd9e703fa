use chess_rules::engine::all_legal_moves;
use chess_rules::{is_in_check, Board, Color};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "play_random", about = "Play random legal moves, alternating colors")]
struct Args {
    /// Maximum number of plies
    #[arg(long, default_value_t = 40)]
    plies: usize,
    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Starting FEN placement (default: standard setup)
    #[arg(long)]
    fen: Option<String>,
    /// Color to move first
    #[arg(long, default_value = "white")]
    color: Color,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let mut board = match &args.fen {
        Some(fen) => Board::from_fen(fen)?,
        None => Board::standard(),
    };
    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut color = args.color;

    println!("{board}\n");
    for ply in 0..args.plies {
        let moves = all_legal_moves(&board, color);
        let Some(mv) = moves.choose(&mut rng).copied() else {
            println!("{color} has no legal moves after {ply} plies");
            break;
        };
        let captured = board.apply(mv.from, mv.to)?;
        match captured {
            Some(p) => println!("{:>3}. {color} {mv} x{p}", ply + 1),
            None => println!("{:>3}. {color} {mv}", ply + 1),
        }
        if is_in_check(&board, color.opponent()) { println!("     {} is in check", color.opponent()); }
        color = color.opponent();
    }
    println!("\n{board}");
    Ok(())
}
