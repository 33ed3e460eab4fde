use clap::Parser;
use duel::{FixedBoard, Mark, SearchEngine, SearchStatistics};
use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use simple_logger::SimpleLogger;
use std::error::Error;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(author, version, about = "Times serial against root-parallel minimax search", long_about = None)]
struct Args {
    /// Number of random opening positions searched after the empty board (default: 20)
    #[arg(long, default_value_t = 20)]
    rounds: usize,

    /// Marks placed at random in each opening position (default: 2)
    #[arg(long, default_value_t = 2)]
    opening_marks: usize,

    /// Threads for the parallel search (default: number of logical CPUs)
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,

    /// Seed for the opening generator (default: 7)
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Print per-search debug output
    #[arg(long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init()?;

    println!("board-duel - Minimax Benchmark");
    println!("==============================");
    println!("Rounds: {}", args.rounds);
    println!("Opening marks: {}", args.opening_marks);
    println!("Parallel Threads: {}", args.threads);
    println!("Seed: {}", args.seed);
    println!("------------------------------");

    #[cfg(debug_assertions)]
    println!("WARNING: Running in debug mode. Performance will be significantly lower.\nUse --release for accurate benchmarks.\n");

    let serial = SearchEngine::new();
    let parallel = SearchEngine::with_threads(args.threads)?;

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(args.seed);
    let mut positions = vec![FixedBoard::new()];
    positions.extend((0..args.rounds).map(|_| random_opening(&mut rng, args.opening_marks)));

    let serial_total = run("Serial", &serial, &mut positions)?;
    let parallel_total = run("Parallel", &parallel, &mut positions)?;

    if serial_total.moves != parallel_total.moves {
        return Err("serial and parallel search disagree on a move".into());
    }

    println!("\nSpeedup: {:.2}x", serial_total.elapsed.as_secs_f64() / parallel_total.elapsed.as_secs_f64().max(f64::EPSILON));
    Ok(())
}

struct RunTotals {
    moves: Vec<usize>,
    elapsed: Duration,
}

fn run(label: &str, engine: &SearchEngine, positions: &mut [FixedBoard]) -> Result<RunTotals, Box<dyn Error>> {
    println!("\nRunning {label} search ({} thread(s))...", engine.num_threads());
    let start = Instant::now();
    let mut moves = Vec::with_capacity(positions.len());
    let mut nodes = 0;
    let mut first: Option<SearchStatistics> = None;

    for board in positions.iter_mut() {
        let (cell, stats) = engine.search(board, Mark::Ai, Mark::Human);
        nodes += stats.nodes;
        moves.push(cell);
        first.get_or_insert(stats);
    }
    let elapsed = start.elapsed();

    if let Some(stats) = &first {
        println!("Empty board: cell {} in {:?} ({} nodes)", moves[0], stats.elapsed, stats.nodes);
    }
    print_stats(label, nodes, positions.len(), elapsed);
    Ok(RunTotals { moves, elapsed })
}

fn print_stats(label: &str, nodes: u64, searches: usize, duration: Duration) {
    let secs = duration.as_secs_f64();
    println!("{} Results:", label);
    println!("  Searches: {}", searches);
    println!("  Total Nodes: {}", nodes);
    println!("  Time: {:.3}s", secs);
    if secs > 0.0 {
        println!("  Nodes/sec: {:.0}", nodes as f64 / secs);
    }
}

/// Places up to `marks` alternating marks (human first) on random empty cells,
/// stopping early so the position is never finished.
fn random_opening(rng: &mut Xoshiro256PlusPlus, marks: usize) -> FixedBoard {
    let mut board = FixedBoard::new();
    let mut mark = Mark::Human;
    for _ in 0..marks.min(8) {
        let empty: Vec<usize> = board.empty_cells().collect();
        let cell = empty[(rng.next_u64() % empty.len() as u64) as usize];
        let mut next = board;
        if next.place(cell, mark).is_err() || next.winner().is_some() || next.is_full() {
            break;
        }
        board = next;
        mark = mark.opponent();
    }
    board
}
