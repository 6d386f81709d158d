//! Survey how often each solution concept exists in random games.
//!
//! Usage:
//!   cargo run --release --bin survey -- [OPTIONS]
//!
//! Options:
//!   --games <N>          Number of random games (default: 10000)
//!   --shape <LIST>       Strategy counts, comma separated (default: 2,2)
//!   --max-payoff <N>     Payoffs drawn from [-N, N] (default: 5)
//!   --seed <N>           Base random seed (optional)
//!   --threads <N>        Number of threads (default: auto)
//!   --config <FILE>      Solver configuration JSON file (optional)

use std::env;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use strategic_solver::games::random::seeded_table;
use strategic_solver::nfg::{GameAnalysis, SolverConfig};

/// What was found in one game.
#[derive(Debug, Default, Clone, Copy)]
struct Tally {
    games: u64,
    failed: u64,
    pure_nash: u64,
    multiple_nash: u64,
    strict_dominance: u64,
    weak_dominance: u64,
    mixed: u64,
    zero_sum_value: u64,
}

impl Tally {
    fn of(report: &GameAnalysis) -> Self {
        Self {
            games: 1,
            failed: 0,
            pure_nash: (!report.pure_nash.is_empty()) as u64,
            multiple_nash: (report.pure_nash.len() > 1) as u64,
            strict_dominance: report.dominance.iter().any(|d| d.is_strict()) as u64,
            weak_dominance: report.dominance.iter().any(|d| d.is_weak()) as u64,
            mixed: report.mixed.is_some() as u64,
            zero_sum_value: report.game_value().is_some() as u64,
        }
    }

    fn failure() -> Self {
        Self {
            games: 1,
            failed: 1,
            ..Self::default()
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            games: self.games + other.games,
            failed: self.failed + other.failed,
            pure_nash: self.pure_nash + other.pure_nash,
            multiple_nash: self.multiple_nash + other.multiple_nash,
            strict_dominance: self.strict_dominance + other.strict_dominance,
            weak_dominance: self.weak_dominance + other.weak_dominance,
            mixed: self.mixed + other.mixed,
            zero_sum_value: self.zero_sum_value + other.zero_sum_value,
        }
    }

    fn percent(&self, count: u64) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            count as f64 / self.games as f64 * 100.0
        }
    }
}

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut num_games: u64 = 10_000;
    let mut shape: Vec<usize> = vec![2, 2];
    let mut max_payoff: i64 = 5;
    let mut seed: Option<u64> = None;
    let mut threads: usize = 0;
    let mut config_file: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--games" | "-n" => {
                i += 1;
                if i < args.len() {
                    num_games = args[i].parse().unwrap_or(num_games);
                }
            }
            "--shape" => {
                i += 1;
                if i < args.len() {
                    match parse_shape(&args[i]) {
                        Some(parsed) => shape = parsed,
                        None => {
                            eprintln!("Invalid shape: {}", args[i]);
                            return;
                        }
                    }
                }
            }
            "--max-payoff" => {
                i += 1;
                if i < args.len() {
                    max_payoff = args[i].parse().unwrap_or(max_payoff);
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
                }
            }
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    let mut config = match &config_file {
        Some(path) => match SolverConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                return;
            }
        },
        None => SolverConfig::default(),
    };
    if threads > 0 {
        config = config.with_threads(threads);
    }
    if let Some(s) = seed {
        config = config.with_seed(s);
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return;
    }

    if let Some(n) = config.num_threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(n).build_global() {
            eprintln!("Could not configure thread pool: {}", e);
        }
    }

    println!("=== Random Game Survey ===");
    println!("Games: {} | Shape: {:?} | Payoffs: [-{}, {}]", num_games, shape, max_payoff, max_payoff);
    println!(
        "Threads: {}",
        config.num_threads.map_or("auto".to_string(), |n| n.to_string())
    );
    if let Some(s) = config.seed {
        println!("Seed: {}", s);
    }
    println!();

    let progress = ProgressBar::new(num_games);
    if let Ok(style) = ProgressStyle::with_template(
        "{elapsed_precise} [{bar:40}] {pos}/{len} games ({per_sec}, eta {eta})",
    ) {
        progress.set_style(style);
    }

    let start = Instant::now();
    let base_seed = config.seed;
    let tally = (0..num_games)
        .into_par_iter()
        .map(|game| {
            // each game gets its own stream so results don't depend on scheduling
            let game_seed = base_seed.map(|s| s.wrapping_add(game));
            let tally = match seeded_table(game_seed, &shape, max_payoff) {
                Ok(table) => match GameAnalysis::run(&table, &config) {
                    Ok(report) => Tally::of(&report),
                    Err(e) => {
                        log::warn!("game {} failed: {}", game, e);
                        Tally::failure()
                    }
                },
                Err(e) => {
                    log::warn!("game {} could not be generated: {}", game, e);
                    Tally::failure()
                }
            };
            progress.inc(1);
            tally
        })
        .reduce(Tally::default, Tally::merge);
    progress.finish();

    let elapsed = start.elapsed().as_secs_f64();
    println!();
    println!("Solved {} games in {:.2}s ({:.0} games/s)", tally.games, elapsed, tally.games as f64 / elapsed.max(1e-9));
    println!();
    println!("{:<28} {:>10} {:>8}", "Concept", "Games", "Share");
    for (label, count) in [
        ("Pure Nash equilibrium", tally.pure_nash),
        ("Several pure equilibria", tally.multiple_nash),
        ("Strictly dominant strategy", tally.strict_dominance),
        ("Weakly dominant strategy", tally.weak_dominance),
        ("Mixed equilibrium found", tally.mixed),
        ("Zero-sum value", tally.zero_sum_value),
    ] {
        println!("{:<28} {:>10} {:>7.1}%", label, count, tally.percent(count));
    }
    if tally.failed > 0 {
        println!("{:<28} {:>10} {:>7.1}%", "Failed", tally.failed, tally.percent(tally.failed));
    }
}

fn parse_shape(text: &str) -> Option<Vec<usize>> {
    let shape: Vec<usize> = text
        .split(',')
        .map(|s| s.trim().parse().ok())
        .collect::<Option<_>>()?;
    if shape.is_empty() || shape.contains(&0) {
        None
    } else {
        Some(shape)
    }
}

fn print_help() {
    println!("Random Game Survey");
    println!();
    println!("Usage: survey [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --games <N>          Number of random games (default: 10000)");
    println!("  --shape <LIST>           Strategy counts, e.g. 3,3 or 2,2,2 (default: 2,2)");
    println!("  --max-payoff <N>         Payoffs drawn from [-N, N] (default: 5)");
    println!("  -s, --seed <N>           Base random seed");
    println!("  -t, --threads <N>        Number of threads (default: auto)");
    println!("  -c, --config <FILE>      Solver configuration JSON file");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  survey --shape 3,3 --games 100000 --seed 1");
    println!("  survey --shape 2,2,2 --max-payoff 2");
}
