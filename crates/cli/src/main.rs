use std::process::ExitCode;

use clap::Parser;

mod commands;
mod printer;

use commands::Command;
use scour_runtime::logging;

#[derive(Debug, Parser)]
#[command(name = "scour", version, about = "IT-Relevant Filesystem Scanner")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn main() -> ExitCode {
    logging::init().ok();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan(args) => commands::scan::run(args),
        Command::History(args) => commands::history::run(args),
    }
}
