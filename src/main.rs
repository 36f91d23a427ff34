mod cli;
mod config;
mod error;
mod frontend;
mod output;
mod record;
mod utils;

use clap::Parser;
use tracing::debug;

use cli::Cli;
use config::Config;
use frontend::{FRONTEND_ENV, Frontend};

fn main() {
    utils::init_tracing();

    let cli = Cli::parse();
    let config = Config::load();
    let cli = cli.with_config(&config);

    if cli.demo {
        debug!("--demo accepted; it has no effect");
    }

    let out = cli.output_path();

    // The form harness marks the process via the environment
    let marker = std::env::var(FRONTEND_ENV).ok();
    let preference = frontend::resolve_preference(marker.as_deref(), config.frontend);
    let frontend = Frontend::select(frontend::form_available(), preference);
    debug!(?frontend, path = %out.display(), "starting");

    if let Err(e) = frontend::run(frontend, &out) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
