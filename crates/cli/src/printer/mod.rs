use std::io::{self, Write};
use std::path::Path;

use scour_scan::{EntryKind, ScanEntry, ScanIssue, ScanStatistics};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable output with optional colors.
    #[default]
    Human,
    /// NDJSON (newline-delimited JSON) for machine consumption.
    Json,
}

/// Color handling strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Automatically detect TTY and enable colors if appropriate.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Configuration for printing scan results.
#[derive(Debug, Clone, Default)]
pub struct PrinterConfig {
    pub format: OutputFormat,
    pub color: ColorChoice,
}

/// Static context about a print run.
#[derive(Debug)]
pub struct ScanPrintContext<'a> {
    /// Scan root, already normalized.
    pub root: &'a Path,
    /// Aggregate summary, present when the caller asked for statistics.
    pub statistics: Option<&'a ScanStatistics>,
    /// Non-fatal issues hit during the walk.
    pub issues: &'a [ScanIssue],
}

/// Trait for printing scan results.
///
/// Implementations receive the entry stream and context, and are responsible
/// for formatting and outputting them appropriately.
pub trait EntryPrinter {
    /// Called once before any entries are printed.
    fn begin(&mut self, ctx: &ScanPrintContext) -> io::Result<()>;

    /// Called for each recorded entry, in result-list order.
    fn print_entry(&mut self, entry: &ScanEntry, ctx: &ScanPrintContext) -> io::Result<()>;

    /// Called once after all entries. Summaries and issue counts go here.
    fn finish(&mut self, ctx: &ScanPrintContext) -> io::Result<()>;
}

/// Human-readable printer with optional color support.
pub struct HumanPrinter<W: Write, E: Write> {
    out: W,
    err: E,
    use_color: bool,
}

impl<W: Write, E: Write> HumanPrinter<W, E> {
    pub fn new(out: W, err: E, cfg: PrinterConfig) -> Self {
        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            // Generic writers carry no TTY information; stay plain unless
            // the caller opted in explicitly.
            ColorChoice::Auto => false,
        };

        Self {
            out,
            err,
            use_color,
        }
    }

    /// Create a printer that writes to stdout and stderr with TTY detection.
    pub fn stdout(cfg: PrinterConfig) -> HumanPrinter<io::Stdout, io::Stderr> {
        use std::io::IsTerminal;

        let use_color = match cfg.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => io::stdout().is_terminal(),
        };

        HumanPrinter {
            out: io::stdout(),
            err: io::stderr(),
            use_color,
        }
    }

    #[inline]
    fn format_path(&self, path: &str) -> String {
        if self.use_color {
            format!("\x1b[32m{}\x1b[0m", path)
        } else {
            path.to_owned()
        }
    }
}

impl<W: Write, E: Write> EntryPrinter for HumanPrinter<W, E> {
    fn begin(&mut self, _ctx: &ScanPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_entry(&mut self, entry: &ScanEntry, _ctx: &ScanPrintContext) -> io::Result<()> {
        let path = self.format_path(&entry.path.to_string_lossy());

        match entry.entry_kind {
            EntryKind::Directory => {
                writeln!(self.out, "{:>10}  {:<14}  {}", "-", "dir", path)
            }
            EntryKind::File => {
                let size = entry.size.unwrap_or(0);
                let category = entry
                    .category
                    .map(|c| c.as_str())
                    .unwrap_or("other");
                writeln!(self.out, "{:>10}  {:<14}  {}", size, category, path)
            }
        }
    }

    fn finish(&mut self, ctx: &ScanPrintContext) -> io::Result<()> {
        if let Some(stats) = ctx.statistics {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "{} files, {} directories, {} bytes",
                stats.total_files, stats.total_directories, stats.total_size
            )?;

            let mut categories: Vec<_> = stats.categories.iter().collect();
            categories.sort_by_key(|(category, _)| category.as_str());
            for (category, count) in categories {
                writeln!(self.out, "  {:<16} {}", category.as_str(), count)?;
            }
        }

        if !ctx.issues.is_empty() {
            writeln!(
                self.err,
                "[scan] {} path(s) could not be read, see log for details",
                ctx.issues.len()
            )?;
        }

        Ok(())
    }
}

pub struct JsonPrinter<W: Write, E: Write> {
    out: W,
    err: E,
}

impl<W: Write, E: Write> JsonPrinter<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self { out, err }
    }

    /// Create a printer that writes to stdout and stderr.
    pub fn stdout() -> JsonPrinter<io::Stdout, io::Stderr> {
        JsonPrinter {
            out: io::stdout(),
            err: io::stderr(),
        }
    }
}

impl<W: Write, E: Write> EntryPrinter for JsonPrinter<W, E> {
    fn begin(&mut self, _ctx: &ScanPrintContext) -> io::Result<()> {
        Ok(())
    }

    fn print_entry(&mut self, entry: &ScanEntry, _ctx: &ScanPrintContext) -> io::Result<()> {
        let line = serde_json::to_string(entry).map_err(io::Error::other)?;
        writeln!(self.out, "{}", line)
    }

    fn finish(&mut self, ctx: &ScanPrintContext) -> io::Result<()> {
        if let Some(stats) = ctx.statistics {
            let obj = serde_json::json!({
                "type": "summary",
                "root": ctx.root.to_string_lossy(),
                "statistics": stats,
            });
            writeln!(self.out, "{}", obj)?;
        }

        for issue in ctx.issues {
            let obj = serde_json::json!({
                "type": "issue",
                "path": issue.path.to_string_lossy(),
                "detail": issue.detail,
            });
            writeln!(self.err, "{}", obj)?;
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "printer_tests.rs"]
mod tests;
