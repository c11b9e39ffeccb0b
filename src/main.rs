mod error;
mod game;
mod logging;
mod renderer;
mod settings;
mod ui;

use clap::{Parser, ValueEnum};
use labcore::algorithms::Algorithm;

use crate::{
    error::GameError,
    game::{render::maze_lines, Game, GameOptions},
    settings::Settings,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum AlgorithmArg {
    FrontierGrowth,
    #[value(name = "depth-first")]
    DepthFirst,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::FrontierGrowth => Algorithm::FrontierGrowth,
            AlgorithmArg::DepthFirst => Algorithm::DepthFirstSearch,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of rows, columns default to the same
    #[arg(long)]
    rows: Option<i32>,
    /// Number of columns, rows default to the same
    #[arg(long)]
    columns: Option<i32>,
    /// Square maze of this size
    #[arg(short, long, conflicts_with_all = ["rows", "columns"])]
    size: Option<i32>,
    /// Generation algorithm, defaults to the one in settings
    #[arg(short, long, value_enum)]
    algorithm: Option<AlgorithmArg>,
    /// Seed of the first maze
    #[arg(long)]
    seed: Option<u64>,
    /// Print the maze as text and exit
    #[arg(short, long)]
    print: bool,
    /// Generate the maze at once
    #[arg(long)]
    no_animation: bool,
    /// Show debug logs
    #[arg(short, long)]
    verbose: bool,
    /// Print the settings file path and exit
    #[arg(long)]
    show_config_path: bool,
    /// Overwrite the settings file with the default one
    #[arg(long)]
    reset_config: bool,
}

impl Args {
    fn maze_size(&self) -> Option<(i32, i32)> {
        match (self.size, self.rows, self.columns) {
            (Some(size), _, _) => Some((size, size)),
            (None, Some(rows), Some(columns)) => Some((rows, columns)),
            (None, Some(rows), None) => Some((rows, rows)),
            (None, None, Some(columns)) => Some((columns, columns)),
            (None, None, None) => None,
        }
    }

    fn options(&self, settings: &Settings) -> GameOptions {
        let mut options = GameOptions::from_settings(settings);
        options.size = self.maze_size();
        options.seed = self.seed;
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm.into();
        }
        if self.no_animation {
            options.animate = false;
        }
        options
    }
}

fn print_maze(options: &GameOptions, settings: &Settings) -> Result<(), GameError> {
    let (rows, columns) = options.size_or_default(settings);
    let grid = options.generate(rows, columns)?;

    for line in maze_lines(&grid, Some(grid.start())) {
        println!("{}", line);
    }

    for message in logging::get_logger().get_logs() {
        eprintln!("{}", message.line());
    }

    Ok(())
}

fn main() -> Result<(), GameError> {
    better_panic::install();

    let args = Args::parse();
    logging::init(args.verbose)?;

    let path = Settings::default_path()?;
    if args.show_config_path {
        println!("{}", path.display());
        return Ok(());
    }

    let settings = if args.reset_config {
        Settings::reset(path)?
    } else {
        Settings::load(path)?
    };
    let options = args.options(&settings);

    if args.print {
        return print_maze(&options, &settings);
    }

    Game::new(settings, options)?.run()
}
