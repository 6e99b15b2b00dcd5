pub mod history;
pub mod scan;

use clap::Subcommand;
pub use history::HistoryArgs;
pub use scan::ScanArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a directory tree for IT-relevant files.
    ///
    /// Example:
    ///   scour scan /srv/projects
    ///   scour scan --max-depth 2 --stats /etc
    Scan(ScanArgs),

    /// Show past scans.
    History(HistoryArgs),
}
