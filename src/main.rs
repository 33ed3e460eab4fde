//! # board-duel terminal front end
//!
//! Plays either game in the terminal, one move per line on stdin:
//!
//! - `play connect4`: two humans share the keyboard, or `--vs-random` lets a
//!   seeded random dropper take player B
//! - `play tictactoe`: the human plays X against the minimax AI
//!
//! At any prompt `q` quits, `r` restarts and `h` prints the move history.

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use duel::render::{render, RenderOptions};
use duel::{Connect4Match, GameStatus, Mark, Player, SearchEngine, TicTacToeMatch};
use log::LevelFilter;
use rand_xoshiro::rand_core::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use simple_logger::SimpleLogger;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log verbosity written to stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Connect 4 on a gravity board
    Connect4 {
        /// Number of rows (default: 6)
        #[arg(long, default_value_t = 6)]
        rows: usize,

        /// Number of columns (default: 7)
        #[arg(long, default_value_t = 7)]
        cols: usize,

        /// Let a random dropper play the second player
        #[arg(long, default_value_t = false)]
        vs_random: bool,

        /// Seed for the random dropper; taken from the clock if omitted
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Tic-tac-toe against the minimax AI
    Tictactoe {
        /// Let the AI make the first move
        #[arg(long, default_value_t = false)]
        ai_first: bool,

        /// Threads for the root-parallel search (1 = single-threaded, 0 = all cores)
        #[arg(long, default_value_t = 1)]
        threads: usize,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// A line typed at the prompt
enum Input {
    Quit,
    Restart,
    History,
    Move(String),
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    SimpleLogger::new().with_level(args.log_level.into()).init()?;

    match args.command {
        Command::Connect4 {
            rows,
            cols,
            vs_random,
            seed,
        } => play_connect4(rows, cols, vs_random, seed),
        Command::Tictactoe { ai_first, threads } => play_tictactoe(ai_first, threads),
    }
}

fn play_connect4(rows: usize, cols: usize, vs_random: bool, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    if rows == 0 || cols == 0 {
        return Err(format!("board dimensions must be non-zero, got {rows}x{cols}").into());
    }
    let seed = seed.unwrap_or_else(clock_seed);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut game = Connect4Match::new(rows, cols);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    if vs_random {
        println!("Random opponent seed: {seed}");
    }

    loop {
        let options = RenderOptions {
            column_header: true,
            highlight: game.board().last_drop(),
            ..Default::default()
        };
        println!("\n{}", render(game.board(), &options));

        if game.is_game_over() {
            match game.status() {
                GameStatus::Win(winner) => println!("{}", format!("{winner} wins!").green().bold()),
                _ => println!("{}", "Draw!".bold()),
            }
            match read_input(&mut lines, "r to restart, h for history, q to quit")? {
                Input::Quit => return Ok(()),
                Input::History => println!("{}", game.format_history()),
                Input::Restart | Input::Move(_) => game.reset(),
            }
            continue;
        }

        if vs_random && game.to_move() == Player::B {
            let moves = game.legal_moves();
            let pick = moves[(rng.next_u64() % moves.len() as u64) as usize];
            let report = game.play(pick)?;
            println!("Random player drops into column {}", report.column);
            continue;
        }

        let prompt = format!("{} ({}) column", game.to_move(), game.to_move().symbol());
        match read_input(&mut lines, &prompt)? {
            Input::Quit => return Ok(()),
            Input::Restart => game.reset(),
            Input::History => println!("{}", game.format_history()),
            Input::Move(text) => {
                if let Err(e) = game.play_str(&text) {
                    println!("{}", e.to_string().red());
                }
            }
        }
    }
}

fn play_tictactoe(ai_first: bool, threads: usize) -> Result<(), Box<dyn Error>> {
    let engine = if threads == 1 {
        SearchEngine::new()
    } else {
        SearchEngine::with_threads(threads)?
    };
    let mut game = TicTacToeMatch::with_engine(engine, ai_first);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You are {} - enter a cell number to place your mark.", Mark::Human.symbol());

    loop {
        let options = RenderOptions {
            index_empty_cells: true,
            ..Default::default()
        };
        println!("\n{}", render(game.board(), &options));

        if game.is_game_over() {
            match game.status() {
                GameStatus::Win(Mark::Human) => println!("{}", "You win!".green().bold()),
                GameStatus::Win(_) => println!("{}", "The AI wins!".red().bold()),
                _ => println!("{}", "Draw!".bold()),
            }
            match read_input(&mut lines, "r to restart, h for history, q to quit")? {
                Input::Quit => return Ok(()),
                Input::History => println!("{}", game.format_history()),
                Input::Restart | Input::Move(_) => game.reset(),
            }
            continue;
        }

        match read_input(&mut lines, "cell")? {
            Input::Quit => return Ok(()),
            Input::Restart => game.reset(),
            Input::History => println!("{}", game.format_history()),
            Input::Move(text) => match game.human_move_str(&text) {
                Ok(report) => {
                    if let Some(reply) = report.ai_reply {
                        println!("AI plays cell {}", reply.0);
                    }
                }
                Err(e) => println!("{}", e.to_string().red()),
            },
        }
    }
}

/// Prompts and reads one line; end of input counts as quitting.
fn read_input<B: BufRead>(lines: &mut io::Lines<B>, prompt: &str) -> io::Result<Input> {
    print!("{prompt}> ");
    io::stdout().flush()?;

    let Some(line) = lines.next().transpose()? else {
        return Ok(Input::Quit);
    };
    Ok(match line.trim() {
        "q" | "quit" => Input::Quit,
        "r" | "restart" => Input::Restart,
        "h" | "history" => Input::History,
        other => Input::Move(other.to_string()),
    })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
