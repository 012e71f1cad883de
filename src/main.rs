use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize as _};
use thiserror::Error;

use mazepath::{
    core::{Dims, Error as MazeError},
    grid::PassabilityMatrix,
    logging,
    maze::{
        algorithms::{random_from_seed, DepthFirstSearch, MazeAlgorithm as _},
        export, Maze,
    },
    pathfinder::{NodeGrid, NodeState, PathResult},
    settings::{LoadError, Settings},
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazepath")]
struct Cli {
    #[clap(long, global = true, help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[clap(short, long, global = true, action = clap::ArgAction::Count, help = "Log more, repeat for even more")]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a maze and print it
    Generate {
        #[clap(flatten)]
        maze: MazeArgs,
        #[clap(long, action, help = "Also save the maze as an SVG drawing")]
        svg: bool,
        #[clap(long, action, help = "Print the passability matrix as 0s and 1s")]
        matrix: bool,
    },
    /// Generate a maze and find the shortest path between two points of it
    Solve {
        #[clap(flatten)]
        maze: MazeArgs,
        #[clap(long, value_parser = parse_pos, help = "Start as ROW,COL of the passability matrix")]
        from: Dims,
        #[clap(long, value_parser = parse_pos, help = "End as ROW,COL of the passability matrix")]
        to: Dims,
        #[clap(long = "wall", value_parser = parse_pos, help = "Extra wall as ROW,COL, repeatable")]
        walls: Vec<Dims>,
    },
}

#[derive(Args, Debug)]
struct MazeArgs {
    #[clap(short, long, help = "Number of maze rows")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of maze columns")]
    columns: Option<usize>,
    #[clap(long, help = "Row of the cell the carving starts from")]
    start_x: Option<i32>,
    #[clap(long, help = "Column of the cell the carving starts from")]
    start_y: Option<i32>,
    #[clap(short, long, help = "Seed for a reproducible maze")]
    seed: Option<u64>,
}

#[derive(Error, Debug)]
enum AppError {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error("Couldn't load settings; {0}")]
    Settings(#[from] LoadError),
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
}

fn parse_pos(s: &str) -> Result<Dims, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got '{}'", s))?;
    let x = x.trim().parse().map_err(|e| format!("invalid row: {}", e))?;
    let y = y.trim().parse().map_err(|e| format!("invalid column: {}", e))?;
    Ok(Dims(x, y))
}

fn build_maze(args: &MazeArgs, settings: &Settings) -> Result<Maze, AppError> {
    let rows = args.rows.unwrap_or(settings.get_rows());
    let columns = args.columns.unwrap_or(settings.get_columns());
    let (sx, sy) = settings.get_start();
    let start = Dims(args.start_x.unwrap_or(sx), args.start_y.unwrap_or(sy));

    let (mut rng, seed) = random_from_seed(args.seed.or(settings.get_seed()));
    let mut maze = Maze::new(rows, columns)?;
    DepthFirstSearch::generate(&mut maze, start, &mut rng)?;

    log::info!("Generated {}x{} maze, seed {}", rows, columns, seed);
    Ok(maze)
}

fn tile(wall: bool) -> ColoredString {
    if wall {
        "  ".on_red()
    } else {
        "  ".on_green()
    }
}

fn print_matrix(matrix: &PassabilityMatrix) {
    for row in matrix.to_rows() {
        let line: String = row.into_iter().map(|wall| tile(wall).to_string()).collect();
        println!("{}", line);
    }
}

fn print_nodes(grid: &NodeGrid) {
    for x in 0..grid.nodes().rows() {
        let Some(row) = grid.nodes().row(x) else {
            continue;
        };
        let line: String = row
            .iter()
            .map(|node| {
                let colored = match node.state() {
                    NodeState::Empty => tile(false),
                    NodeState::Wall => tile(true),
                    NodeState::Open => "  ".on_cyan(),
                    NodeState::Closed => "  ".on_blue(),
                    NodeState::Start => "  ".on_yellow(),
                    NodeState::End => "  ".on_magenta(),
                    NodeState::Path => "  ".on_white(),
                };
                colored.to_string()
            })
            .collect();
        println!("{}", line);
    }
}

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();
    better_panic::install();
    logging::init(logging::level_from_verbosity(cli.verbose));

    let settings = Settings::load(cli.config.unwrap_or_else(Settings::default_path))?;

    match cli.command {
        Command::Generate { maze, svg, matrix } => {
            let maze = build_maze(&maze, &settings)?;
            let passability = PassabilityMatrix::from_maze(&maze);
            print_matrix(&passability);

            if matrix {
                for row in passability.to_rows() {
                    let line: String = row.iter().map(|&w| if w { '1' } else { '0' }).collect();
                    println!("{}", line);
                }
            }

            if svg {
                let export_settings = settings.get_export();
                let path = export::save_svg(
                    &maze,
                    &export_settings.options(),
                    &export_settings.output_dir,
                )?;
                println!("Saved to {}", path.display());
            }
        }
        Command::Solve {
            maze,
            from,
            to,
            walls,
        } => {
            let maze = build_maze(&maze, &settings)?;
            let mut grid = NodeGrid::new(PassabilityMatrix::from_maze(&maze));

            for wall in walls {
                grid.set_wall(wall)?;
            }
            grid.set_start(from)?;
            grid.set_end(to)?;

            let result = grid.solve()?;
            print_nodes(&grid);
            match result {
                PathResult::Found(path) => println!("Path length: {}", path.len()),
                PathResult::NotFound => {
                    log::warn!("No path between {} and {}", from, to);
                    println!("Path not found");
                }
            }
        }
    }

    Ok(())
}
