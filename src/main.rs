// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use lower_body_shade::cli::args::{Cli, Commands};
use lower_body_shade::cli::shade::run_shade;

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Shade(args) => run_shade(args),
    }
}
