use clap::{CommandFactory, Parser, error::ErrorKind};
use labyrinth::{
    config::Config,
    generators::generate_maze,
    logging,
    render::{self, Theme},
    solvers::solve,
};

fn main() -> std::io::Result<()> {
    let config = Config::parse();
    if let Err(err) = config.validate() {
        Config::command().error(ErrorKind::ValueValidation, err).exit();
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = match config.log_config() {
        Some(log_config) => {
            std::fs::create_dir_all(&log_config.dir)?;
            logging::init(&log_config)
        }
        None => None,
    };
    tracing::info!("Starting with {:?}", config);

    let maze =
        generate_maze(config.width, config.height, config.seed).map_err(std::io::Error::other)?;

    let solution = if config.show_solution {
        Some(solve(&maze).map_err(std::io::Error::other)?)
    } else {
        None
    };

    let theme: Theme = config.theme.theme();
    println!("{}", render::draw(&maze, solution.as_ref(), None, &theme));

    match solution {
        Some(solution) => println!(
            "Maze {}x{} ({} theme) solved in {} steps.",
            maze.width(),
            maze.height(),
            config.theme,
            solution.len() - 1
        ),
        None => println!(
            "Maze {}x{} ({} theme). Pass --solve to show the way out.",
            maze.width(),
            maze.height(),
            config.theme
        ),
    }

    tracing::info!("Exiting");
    Ok(())
}
