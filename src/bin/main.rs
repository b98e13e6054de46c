use goscaffold::{create_project, GitInit};

use std::{path::Path, process::exit};

use clap::Parser;
use log::{error, LevelFilter};
use simple_logger::{set_up_color_terminal, SimpleLogger};

#[derive(Debug, Parser, Clone)]
#[command(
    name = "goscaffold",
    version,
    about = "Creates a new Go service project layout"
)]
struct Cli {
    /// Name of the project directory and Go module
    project_name: String,
}

fn main() {
    set_up_color_terminal();
    let logger = SimpleLogger::new()
        .without_timestamps()
        .with_level(LevelFilter::Info)
        .env();
    let max_level = logger.max_level();

    log::set_max_level(max_level);
    if let Err(err) = log::set_boxed_logger(Box::new(logger)) {
        eprintln!("failed to set up logging: {}", err);
    }

    let args = Cli::parse();

    if let Err(err) = create_project(Path::new("."), &args.project_name, &GitInit::new()) {
        error!("{}", err);
        exit(1)
    }

    println!(
        "Project {} has been created successfully!",
        args.project_name
    );
}
