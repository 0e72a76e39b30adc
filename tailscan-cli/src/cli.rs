use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(name = "tailscan")]
#[clap(
    about = "Show the log records from the trailing minutes of a log directory",
    long_about = None
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the records of the last `-t` minutes, newest first
    Analyze {
        #[clap(
            short = 't',
            long = "time",
            help = "Time window in minutes, e.g. `10m`"
        )]
        minutes: String,

        #[clap(
            short = 'd',
            long = "dir",
            help = "Directory containing the log files"
        )]
        dir: PathBuf,
    },

    /// Write sample access-log files for trying out `analyze`
    Generate {
        #[clap(
            short = 'd',
            long = "dir",
            help = "Directory to write the log files into"
        )]
        dir: PathBuf,

        #[clap(long, default_value_t = 10, help = "Number of log files")]
        files: usize,

        #[clap(long, default_value_t = 100_000, help = "Records per file")]
        lines: usize,
    },
}
