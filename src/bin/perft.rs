use chess_rules::engine::all_legal_moves;
use chess_rules::perft::perft;
use chess_rules::{Board, Color};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for chess_rules")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// FEN placement or "startpos"
    #[arg(value_name = "FEN", default_value = "startpos")]
    fen: String,
    /// Color to move first
    #[arg(long, default_value = "white")]
    color: Color,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let base = if args.fen == "startpos" { Board::standard() } else { Board::from_fen(&args.fen)? };
    let depth = args.depth;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (nodes, dt) = pool.install(|| {
        let t0 = Instant::now();
        let nodes = if args.threads <= 1 || depth <= 1 {
            perft(&base, args.color, depth)
        } else {
            all_legal_moves(&base, args.color).par_iter().map(|mv| {
                let mut b = base;
                match b.apply(mv.from, mv.to) {
                    Ok(_) => perft(&b, args.color.opponent(), depth - 1),
                    Err(_) => 0,
                }
            }).sum()
        };
        (nodes, t0.elapsed().as_secs_f64())
    });

    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
