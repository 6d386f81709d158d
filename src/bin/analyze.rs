//! Analyze a single payoff table.
//!
//! Usage:
//!   cargo run --release --bin analyze -- <TABLE> [OPTIONS]
//!
//! Options:
//!   --config <FILE>      Solver configuration JSON file (optional)
//!   --tolerance <VALUE>  Mixed-solver tolerance (default: 1e-9)
//!   --parallel           Compute best responses in parallel
//!   --threads <N>        Number of threads (default: auto)
//!   --output <FILE>      Also write the report as JSON
//!   --game <NAME>        Analyze a built-in game instead of a file

use std::env;
use std::time::Instant;

use strategic_solver::games::classic;
use strategic_solver::nfg::{GameAnalysis, PayoffTable, SolverConfig};

fn main() {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    let mut table_file: Option<String> = None;
    let mut config_file: Option<String> = None;
    let mut tolerance: Option<f64> = None;
    let mut parallel = false;
    let mut threads: usize = 0;
    let mut output_file: Option<String> = None;
    let mut game_name: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--tolerance" => {
                i += 1;
                if i < args.len() {
                    tolerance = args[i].parse().ok();
                }
            }
            "--parallel" | "-p" => {
                parallel = true;
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = Some(args[i].clone());
                }
            }
            "--game" | "-g" => {
                i += 1;
                if i < args.len() {
                    game_name = Some(args[i].clone());
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            arg if !arg.starts_with('-') && table_file.is_none() => {
                table_file = Some(arg.to_string());
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    // Load or create configuration
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
    if let Some(tol) = tolerance {
        config = config.with_tolerance(tol);
    }
    if parallel {
        config = config.with_parallel(true);
    }
    if threads > 0 {
        config = config.with_threads(threads);
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

    let (table, source) = match (&game_name, &table_file) {
        (Some(name), _) => match builtin(name) {
            Some(table) => (table, format!("built-in game '{}'", name)),
            None => {
                eprintln!("Unknown game: {}", name);
                print_help();
                return;
            }
        },
        (None, Some(path)) => match PayoffTable::from_file(path) {
            Ok(table) => (table, path.clone()),
            Err(e) => {
                eprintln!("Error loading table {}: {}", path, e);
                return;
            }
        },
        (None, None) => {
            print_help();
            return;
        }
    };

    println!("=================================================");
    println!("  Strategic-Form Game Analysis");
    println!("=================================================");
    println!();
    println!("Source: {}", source);
    println!("Players: {}", table.num_players());
    println!("Profiles listed: {}", table.rows().len());
    println!("Tolerance: {:e}", config.tolerance);
    println!("Parallel: {}", config.parallel);
    println!();

    let start = Instant::now();
    let report = match GameAnalysis::run(&table, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Analysis failed: {}", e);
            return;
        }
    };
    let elapsed = start.elapsed();

    print!("{}", report);
    println!();
    println!("Analysis time: {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = output_file {
        println!("Exporting results to {}...", path);
        match report.save_json(&path) {
            Ok(_) => println!("Results saved successfully!"),
            Err(e) => eprintln!("Error saving results: {}", e),
        }
    }
}

fn builtin(name: &str) -> Option<PayoffTable> {
    match name {
        "prisoners" | "pd" => Some(classic::prisoners_dilemma()),
        "pennies" | "mp" => Some(classic::matching_pennies()),
        "rps" => Some(classic::rock_paper_scissors()),
        "bos" => Some(classic::battle_of_the_sexes()),
        "stag" => Some(classic::stag_hunt()),
        "coordination3" => Some(classic::three_way_coordination()),
        _ => None,
    }
}

fn print_help() {
    println!("Strategic-Form Game Analyzer");
    println!();
    println!("Usage: analyze <TABLE> [OPTIONS]");
    println!("       analyze --game <NAME> [OPTIONS]");
    println!();
    println!("TABLE is a CSV file (one row per line) or a .json file.");
    println!("Row 0 lists each player's strategy count, every further row is");
    println!("a profile followed by one payoff per player.");
    println!();
    println!("Options:");
    println!("  -c, --config <FILE>      Solver configuration JSON file");
    println!("  --tolerance <VALUE>      Mixed-solver tolerance (default: 1e-9)");
    println!("  -p, --parallel           Compute best responses in parallel");
    println!("  -t, --threads <N>        Number of threads (default: auto)");
    println!("  -o, --output <FILE>      Write the report as JSON");
    println!("  -g, --game <NAME>        Built-in game: pd, mp, rps, bos, stag, coordination3");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  analyze games/prisoners.csv");
    println!("  analyze --game rps --output rps.json");
    println!("  RUST_LOG=debug analyze table.json --parallel");
}
