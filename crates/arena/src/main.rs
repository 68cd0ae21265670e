//! Arena CLI
//!
//! Run matches between heuristics, single games, or a full round-robin.

use std::env;
use std::path::Path;
use std::process::ExitCode;

use arena::{
    play_out, ArenaConfig, ArenaError, ArenaResults, MatchConfig, MatchRunner, RunSettings,
};
use mcts_engine::{MctsConfig, MctsPlayer};
use minimax_engine::{Heuristic, MinimaxPlayer, SearchConfig};
use othello_core::{Board, Player, Side};
use random_engine::RandomPlayer;

fn print_usage() {
    println!("Othello Heuristic Arena");
    println!();
    println!("Usage:");
    println!("  arena match <h1> <h2> [--games N] [--depth D] [--no-pruning] [--opening P]");
    println!("  arena roundrobin [--games N] [--depth D] [--out FILE] [--config FILE]");
    println!("  arena play <p1> <p2> [--depth D] [--verbose]");
    println!();
    println!("Heuristics:");
    println!("  parity        - Disk-count differential");
    println!("  mobility      - Actual + potential mobility");
    println!("  corners       - Corner control");
    println!("  stability     - Stable/unstable disk contrast");
    println!("  hybrid        - Weighted blend of the above");
    println!();
    println!("Players (play command): any heuristic above, plus:");
    println!("  random        - Uniform random legal moves");
    println!("  mcts          - Monte Carlo tree search");
    println!();
    println!("Examples:");
    println!("  arena match hybrid corners --games 20 --depth 4");
    println!("  arena roundrobin --games 10 --out arena_results.json");
}

/// Shared flag parsing for all subcommands.
struct CliOptions {
    config: MatchConfig,
    out: Option<String>,
}

impl CliOptions {
    fn parse(args: &[String], base: MatchConfig) -> Result<Self, String> {
        let mut config = base;
        let mut out = None;

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--games" | "-g" => {
                    config.num_games = Self::value(args, &mut i)?;
                }
                "--depth" | "-d" => {
                    config.depth = Self::value(args, &mut i)?;
                }
                "--opening" => {
                    config.random_opening_plies = Self::value(args, &mut i)?;
                }
                "--no-pruning" => {
                    config.pruning = false;
                }
                "--verbose" | "-v" => {
                    config.verbose = true;
                }
                "--quiet" | "-q" => {
                    config.verbose = false;
                }
                "--out" | "-o" => {
                    i += 1;
                    out = Some(
                        args.get(i)
                            .ok_or_else(|| "--out requires a file path".to_string())?
                            .clone(),
                    );
                }
                "--config" | "-c" => {
                    i += 1;
                    let path = args
                        .get(i)
                        .ok_or_else(|| "--config requires a file path".to_string())?;
                    let file = ArenaConfig::load(Path::new(path)).map_err(|e| e.to_string())?;
                    // Earlier flags are overwritten; later flags win again.
                    config = file.into_match_config();
                }
                other => return Err(format!("unknown option: {other}")),
            }
            i += 1;
        }

        if config.depth == 0 {
            return Err("depth must be at least 1".to_string());
        }
        if config.num_games == 0 {
            return Err("games must be at least 1".to_string());
        }
        Ok(Self { config, out })
    }

    fn value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
        let flag = args[*i].clone();
        *i += 1;
        args.get(*i)
            .ok_or_else(|| format!("{flag} requires a value"))?
            .parse()
            .map_err(|_| format!("invalid value for {flag}"))
    }
}

fn parse_heuristic(name: &str) -> Result<Heuristic, String> {
    name.parse()
        .map_err(|e: othello_core::InvalidConfigurationError| e.to_string())
}

fn run_match(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("match requires two heuristic names".to_string());
    }
    let a = parse_heuristic(&args[0])?;
    let b = parse_heuristic(&args[1])?;
    let opts = CliOptions::parse(&args[2..], MatchConfig::default())?;

    println!("=== Match: {} vs {} ===", a, b);
    println!(
        "Games: {}, Depth: {}, Pruning: {}",
        opts.config.num_games, opts.config.depth, opts.config.pruning
    );
    println!();

    let runner = MatchRunner::new(opts.config.clone());
    let result = runner.run_match(a, b).map_err(|e: ArenaError| e.to_string())?;

    println!();
    println!("=== Final Result ===");
    println!(
        "{}: {} wins, {} losses, {} draws",
        a, result.wins, result.losses, result.draws
    );
    println!("Score: {:.1}%", result.score() * 100.0);
    Ok(())
}

fn run_roundrobin(args: &[String]) -> Result<(), String> {
    let base = MatchConfig {
        verbose: false,
        ..Default::default()
    };
    let opts = CliOptions::parse(args, base)?;

    let participants: Vec<String> = Heuristic::ALL.iter().map(|h| h.to_string()).collect();
    let mut results = ArenaResults::new(
        "heuristic round-robin",
        participants,
        RunSettings {
            games_per_match: opts.config.num_games,
            search_depth: opts.config.depth,
            random_opening_plies: opts.config.random_opening_plies,
        },
    );

    let runner = MatchRunner::new(opts.config.clone());
    for (i, &a) in Heuristic::ALL.iter().enumerate() {
        for &b in &Heuristic::ALL[i + 1..] {
            println!(
                "Playing {} games: {} vs {}",
                opts.config.num_games, a, b
            );
            let result = runner.run_match(a, b).map_err(|e: ArenaError| e.to_string())?;
            results.add_match(a.name(), b.name(), result);
        }
    }

    println!();
    results.print_report();

    if let Some(out) = opts.out {
        results.save(Path::new(&out))?;
        println!("Results written to {out}");
    }
    Ok(())
}

/// Resolve a player name: a heuristic selector gives a minimax player at
/// the configured depth; `random` and `mcts` give the other engines.
fn build_player(name: &str, side: Side, config: &MatchConfig) -> Result<Box<dyn Player>, String> {
    match name {
        "random" => Ok(Box::new(RandomPlayer::new(side))),
        "mcts" => Ok(Box::new(MctsPlayer::new(side, MctsConfig::default()))),
        _ => {
            let heuristic = parse_heuristic(name)?;
            let cfg = SearchConfig::new(config.depth, config.pruning, heuristic)
                .map_err(|e| e.to_string())?;
            Ok(Box::new(MinimaxPlayer::new(side, cfg)))
        }
    }
}

fn run_play(args: &[String]) -> Result<(), String> {
    if args.len() < 2 {
        return Err("play requires two player names".to_string());
    }
    let opts = CliOptions::parse(&args[2..], MatchConfig::default())?;

    let mut black = build_player(&args[0], Side::Black, &opts.config)?;
    let mut white = build_player(&args[1], Side::White, &opts.config)?;

    println!("{} (Black) vs {} (White)", black.name(), white.name());
    let board = play_out(&mut *black, &mut *white, Board::initial()).map_err(|e| e.to_string())?;

    println!("{board}");
    match board.winner() {
        Some(side) => println!("{side} wins!"),
        None => println!("It's a draw!"),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let outcome = match args[1].as_str() {
        "match" => run_match(&args[2..]),
        "roundrobin" | "rr" => run_roundrobin(&args[2..]),
        "play" => run_play(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => Err(format!("unknown command: {other}")),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {msg}");
            eprintln!("Run 'arena help' for usage.");
            ExitCode::FAILURE
        }
    }
}
