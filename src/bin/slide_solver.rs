use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use slide_search::engine::Board;
use slide_search::heuristics::HeuristicKind;
use slide_search::solver::DEFAULT_MAX_DEPTH;
use slide_search::utils::board_from_str;
use slide_search::{a_star_search, breadth_first_search, iterative_deepening_search};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Breadth-first search
    Bfs,
    /// Iterative deepening depth-first search
    Ids,
    /// A* with the chosen heuristic
    Astar,
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve a sliding-tile puzzle", long_about = None)]
struct Args {
    /// Search algorithm
    #[clap(short, long, value_enum, default_value_t = Algorithm::Astar)]
    algorithm: Algorithm,

    /// Heuristic used by A*
    #[clap(long, value_enum, default_value_t = HeuristicKind::Manhattan)]
    heuristic: HeuristicKind,

    /// Depth ceiling for iterative deepening
    #[clap(short = 'd', long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Grid rows (inferred from the tile count when omitted)
    #[clap(long, requires = "cols")]
    rows: Option<usize>,

    /// Grid columns (inferred from the tile count when omitted)
    #[clap(long, requires = "rows")]
    cols: Option<usize>,

    /// Start tiles in row-major order, 0 for the blank, e.g. "4,1,0,2,5,3"
    initial: String,

    /// Goal tiles; defaults to 1..N-1 followed by the blank
    goal: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let initial = board_from_str(&args.initial, args.rows.zip(args.cols))
        .with_context(|| format!("invalid start board '{}'", args.initial))?;
    let goal = match &args.goal {
        Some(text) => board_from_str(text, Some((initial.rows(), initial.cols())))
            .with_context(|| format!("invalid goal board '{}'", text))?,
        None => Board::solved(initial.rows(), initial.cols())?,
    };

    println!("Initial board:\n{}\n", initial);
    println!("Goal board:\n{}\n", goal);
    if !initial.is_solvable_towards(&goal) {
        warn!("start and goal differ in permutation parity; no sequence of moves connects them");
    }

    let started = Instant::now();
    let result = match args.algorithm {
        Algorithm::Bfs => breadth_first_search(&initial, &goal),
        Algorithm::Ids => iterative_deepening_search(&initial, &goal, args.max_depth),
        Algorithm::Astar => a_star_search(&initial, &goal, &args.heuristic),
    };
    let elapsed = started.elapsed();

    match result {
        Ok(solution) => {
            let moves: Vec<String> = solution.moves.iter().map(|mv| mv.to_string()).collect();
            println!("Sequence of moves ({:?}): {}", args.algorithm, moves.join(" "));
            println!("No. of steps: {}", solution.cost());
            info!(
                "expanded {} states, generated {}, peak frontier {}",
                solution.stats.expanded, solution.stats.generated, solution.stats.peak_frontier
            );
        }
        Err(err) => println!("No solution: {}", err),
    }
    info!("search took {:?}", elapsed);
    Ok(())
}
