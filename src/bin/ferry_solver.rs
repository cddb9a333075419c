use anyhow::Result;
use clap::Parser;
use log::info;
use slide_search::ferry::FerryPuzzle;
use slide_search::solver::bfs;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solve the missionaries-and-cannibals river crossing", long_about = None)]
struct Args {
    /// Missionaries, and separately cannibals, on the origin bank
    #[clap(short, long, default_value_t = 3)]
    population: u8,

    /// Seats in the boat
    #[clap(short, long, default_value_t = 2)]
    capacity: u8,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    let puzzle = FerryPuzzle::new(args.population, args.capacity);
    let start = puzzle.start();

    match bfs(&puzzle, &start) {
        Ok(solution) => {
            println!("{}", start);
            let mut state = start;
            for crossing in &solution.moves {
                if let Some(next) = puzzle.cross(&state, *crossing) {
                    println!("  --{}--> {}", crossing, next);
                    state = next;
                }
            }
            println!("No. of crossings: {}", solution.cost());
            info!("expanded {} states", solution.stats.expanded);
        }
        Err(err) => println!("No solution: {}", err),
    }
    Ok(())
}
