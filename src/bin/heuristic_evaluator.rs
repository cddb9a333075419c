use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use slide_search::engine::Board;
use slide_search::heuristics::HeuristicKind;
use slide_search::informed::a_star_search;
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare A* heuristics on seeded scrambles", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(short, long, default_value_t = 20)]
    boards: usize,

    /// Seed of the first board; board i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Random moves applied to the solved board
    #[clap(long, default_value_t = 40)]
    scramble: usize,

    #[clap(long, default_value_t = 3)]
    rows: usize,

    #[clap(long, default_value_t = 3)]
    cols: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let goal = Board::solved(args.rows, args.cols)?;

    let mut expansions: HashMap<HeuristicKind, Vec<usize>> = HashMap::new();

    println!(
        "Starting heuristic evaluation for {} boards ({}x{}, {} scramble moves)...",
        args.boards, args.rows, args.cols, args.scramble
    );

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let initial = Board::scrambled(args.rows, args.cols, args.scramble, current_seed)?;
        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        let mut costs = Vec::new();
        for kind in HeuristicKind::ALL {
            match a_star_search(&initial, &goal, &kind) {
                Ok(solution) => {
                    println!(
                        "  Heuristic: {:<10}, Steps: {:<4}, Expanded: {}",
                        kind.name(),
                        solution.cost(),
                        solution.stats.expanded
                    );
                    costs.push(solution.cost());
                    expansions.entry(kind).or_default().push(solution.stats.expanded);
                }
                Err(err) => warn!("{} failed on seed {}: {}", kind.name(), current_seed, err),
            }
        }
        if costs.windows(2).any(|pair| pair[0] != pair[1]) {
            warn!("heuristics disagree on the optimal cost for seed {}: {:?}", current_seed, costs);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("--- Average Expanded States ---");

    let mut averages: Vec<(&str, f64)> = HeuristicKind::ALL
        .iter()
        .filter_map(|kind| {
            let counts = expansions.get(kind)?;
            if counts.is_empty() {
                return None;
            }
            let total: usize = counts.iter().sum();
            Some((kind.name(), total as f64 / counts.len() as f64))
        })
        .collect();
    averages.sort_by(|a, b| a.1.total_cmp(&b.1));

    for (name, avg) in averages {
        println!("Heuristic {:<10}: Average Expanded = {:.2}", name, avg);
    }
    info!("evaluated {} boards", args.boards);
    Ok(())
}
