use std::process::ExitCode;

use clap::Args;
use log::{error, info};
use scour_runtime::history::HistoryStore;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// Number of entries to display
    #[arg(long, short = 'n', default_value = "20")]
    pub limit: usize,

    /// Clear all history
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: HistoryArgs) -> ExitCode {
    let store = match HistoryStore::new() {
        Some(s) => s,
        None => {
            info!("[info] History is currently disabled");
            return ExitCode::from(0);
        }
    };

    if args.clear {
        match store.clear() {
            Ok(_) => {
                println!("History cleared");
                return ExitCode::from(0);
            }
            Err(e) => {
                error!("[error] Failed to clear history: {}", e);
                return ExitCode::from(1);
            }
        }
    }

    let scans = store.recent_scans(args.limit);

    if scans.is_empty() {
        println!("No history yet.");
        return ExitCode::from(0);
    }

    // Print header
    println!(
        "{:<20}  {:>7}  {:>6}  {:>12}  {:>8}  ROOT",
        "TIMESTAMP", "FILES", "DIRS", "BYTES", "TIME"
    );
    println!("{}", "-".repeat(80));

    for scan in scans {
        let ts = scan.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();

        println!(
            "{:<20}  {:>7}  {:>6}  {:>12}  {:>6}ms  {}",
            ts, scan.files, scan.dirs, scan.total_size, scan.duration_ms, scan.root
        );
    }

    let total = store.count();
    if total > args.limit {
        println!(
            "\n({} more entries, use --limit to show more)",
            total - args.limit
        );
    }

    ExitCode::from(0)
}
