//! Pig optimal-play solver binary.
//!
//! Usage:
//!   cargo run --release --bin solve_pig -- [OPTIONS]
//!
//! Options:
//!   --goal <N>          Winning score (default: 100)
//!   --epsilon <X>       Convergence threshold (default: 1e-9)
//!   --max-sweeps <N>    Sweep cap (default: unlimited)
//!   --config <FILE>     Configuration JSON file (flags override it)
//!   --table <FILE>      Write the full hold-threshold table ('-' for stdout)
//!   --simulate <N>      Play N validation games after solving
//!   --versus <SPEC>     Validation opponent: 'optimal' or 'hold:N'
//!   --seed <N>          Random seed for validation games
//!   --quiet             Suppress per-sweep progress

use std::env;

use pig_solver::sim::{run_match_seeded, Strategy};
use pig_solver::solver::{HoldTable, PigSolver, SolveConfig, SweepProgress};

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse arguments
    let mut config_file: Option<String> = None;
    let mut goal: Option<usize> = None;
    let mut epsilon: Option<f64> = None;
    let mut max_sweeps: Option<u64> = None;
    let mut table_file: Option<String> = None;
    let mut simulate: u64 = 0;
    let mut versus = "hold:20".to_string();
    let mut seed: Option<u64> = None;
    let mut quiet = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                i += 1;
                if i < args.len() {
                    config_file = Some(args[i].clone());
                }
            }
            "--goal" | "-g" => {
                i += 1;
                if i < args.len() {
                    goal = args[i].parse().ok();
                }
            }
            "--epsilon" | "-e" => {
                i += 1;
                if i < args.len() {
                    epsilon = args[i].parse().ok();
                }
            }
            "--max-sweeps" => {
                i += 1;
                if i < args.len() {
                    max_sweeps = args[i].parse().ok();
                }
            }
            "--table" | "-t" => {
                i += 1;
                if i < args.len() {
                    table_file = Some(args[i].clone());
                }
            }
            "--simulate" => {
                i += 1;
                if i < args.len() {
                    simulate = args[i].parse().unwrap_or(0);
                }
            }
            "--versus" => {
                i += 1;
                if i < args.len() {
                    versus = args[i].clone();
                }
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().ok();
                }
            }
            "--quiet" | "-q" => {
                quiet = true;
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

    println!("=================================================");
    println!("  Pig Optimal-Play Solver");
    println!("=================================================");
    println!();

    // Load or create configuration
    let mut config = if let Some(path) = &config_file {
        println!("Loading configuration from: {}", path);
        match SolveConfig::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        SolveConfig::default()
    };

    // Explicit flags override the file
    if let Some(goal) = goal {
        config = config.with_goal(goal);
    }
    if let Some(epsilon) = epsilon {
        config = config.with_epsilon(epsilon);
    }
    if let Some(cap) = max_sweeps {
        config = config.with_max_sweeps(cap);
    }

    println!("Goal: {}", config.goal);
    println!("Epsilon: {:e}", config.epsilon);
    match config.max_sweeps {
        Some(cap) => println!("Max sweeps: {}", cap),
        None => println!("Max sweeps: unlimited"),
    }
    println!();
    println!("Solving...");
    println!();

    let result = if quiet {
        PigSolver::solve(config)
    } else {
        PigSolver::solve_with_progress(
            config,
            Some(|progress: &SweepProgress| {
                println!(
                    "Sweep {:>5} | Max change: {:>12.3e} | Elapsed: {:>6.2}s",
                    progress.sweep, progress.max_change, progress.elapsed_seconds
                );
            }),
        )
    };

    let solver = match result {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Solve failed: {}", e);
            std::process::exit(1);
        }
    };

    let stats = solver.stats();
    println!();
    println!("Converged after {} sweeps", stats.sweeps);
    println!("Final max change: {:.3e}", stats.final_change);
    println!("Stored states: {}", stats.stored_states);
    println!("Total time: {:.2}s", stats.elapsed_seconds);
    println!("Speed: {:.0} state updates/second", stats.updates_per_second);
    println!();
    println!("Win probability at start: {:.6}", solver.p_win(0, 0, 0));

    let table = HoldTable::from_solver(&solver);
    match &table_file {
        Some(path) if path == "-" => {
            println!();
            let mut stdout = std::io::stdout();
            if let Err(e) = table.write_text(&mut stdout) {
                eprintln!("Error writing table: {}", e);
            }
        }
        Some(path) => match table.save_text(path) {
            Ok(_) => println!("Hold-threshold table written to {}", path),
            Err(e) => eprintln!("Error writing table: {}", e),
        },
        None => print_table_corner(&table),
    }

    if simulate > 0 {
        run_validation(&solver, simulate, &versus, seed);
    }

    println!();
    println!("Done!");
}

/// Print a strided sample of the threshold grid.
fn print_table_corner(table: &HoldTable) {
    let goal = table.goal();
    let step = (goal / 10).max(1);

    println!();
    println!("=== Hold thresholds (scores every {} points) ===", step);
    println!();

    print!("  i\\j ");
    let mut j = 0;
    while j < goal {
        print!("{:>4}", j);
        j += step;
    }
    println!();

    let mut i = 0;
    while i < goal {
        print!("{:>5} ", i);
        let mut j = 0;
        while j < goal {
            print!("{:>4}", table.threshold(i, j));
            j += step;
        }
        println!();
        i += step;
    }
}

/// Play validation games of the solved policy against an opponent spec.
fn run_validation(solver: &PigSolver, games: u64, versus: &str, seed: Option<u64>) {
    println!();
    println!("=== Validation playouts ===");
    println!();

    let optimal = Strategy::Optimal(solver);
    let opponent = match Strategy::from_spec(versus, solver) {
        Ok(strategy) => strategy,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!(
        "Playing {} games: optimal (first) vs {}",
        games,
        opponent.name()
    );

    let stats = run_match_seeded(&optimal, &opponent, solver.goal(), games, seed);

    println!(
        "First-mover win rate: {:.4} ({} of {} games, {:.1} turns/game)",
        stats.win_rate(),
        stats.first_wins,
        stats.games,
        stats.mean_turns()
    );
    println!("Solved start value:   {:.4}", solver.p_win(0, 0, 0));
}

fn print_help() {
    println!("Pig Optimal-Play Solver");
    println!();
    println!("Usage: solve_pig [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -g, --goal <N>           Winning score (default: 100)");
    println!("  -e, --epsilon <X>        Convergence threshold (default: 1e-9)");
    println!("  --max-sweeps <N>         Fail instead of sweeping past N (default: unlimited)");
    println!("  -c, --config <FILE>      Configuration JSON file (flags override it)");
    println!("  -t, --table <FILE>       Write the full hold-threshold table ('-' for stdout)");
    println!("  --simulate <N>           Play N validation games after solving");
    println!("  --versus <SPEC>          Validation opponent: 'optimal' or 'hold:N' (default: hold:20)");
    println!("  -s, --seed <N>           Random seed for validation games");
    println!("  -q, --quiet              Suppress per-sweep progress");
    println!("  -h, --help               Show this help");
    println!();
    println!("Examples:");
    println!("  # Standard game to 100, nine-digit convergence");
    println!("  solve_pig");
    println!();
    println!("  # Short game, looser convergence, full table to a file");
    println!("  solve_pig --goal 25 --epsilon 1e-6 --table thresholds.txt");
    println!();
    println!("  # Check the solved policy against hold-at-20 over 100k games");
    println!("  solve_pig --simulate 100000 --seed 42");
    println!();
    println!("  # Load settings from JSON");
    println!("  solve_pig --config pig.json");
}
