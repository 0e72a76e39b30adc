use std::io;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

mod analyze;
mod cli;
mod generate;
mod parsers;
mod util;

fn main() -> Result<()> {
    env_logger::init();

    let args = Cli::parse();

    match &args.command {
        Command::Analyze { minutes, dir } => {
            let minutes = parsers::parse_minutes(minutes)?;

            println!("========== Processing log data ==========\n");
            let summary =
                analyze::analyze_dir(dir, minutes, &mut io::stdout().lock())?;
            log::debug!(
                "{} records inside the window, {} skipped",
                summary.printed,
                summary.skipped
            );
            println!("\n========== End of processing ==========");
        }

        Command::Generate { dir, files, lines } => {
            println!("Generating log data...");
            generate::generate_dir(dir, *files, *lines)?;
            println!("Log data has been generated");
        }
    }

    Ok(())
}
