use std::io::{Stderr, Stdout};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use clap::Args;
use log::error;

use scour_protocol::{ScanReport, ScanRequest};
use scour_runtime::history::{HistoryStore, ScanEvent};
use scour_scan::{CollectSink, aggregate, normalize_root, walk, walk_parallel};

use crate::printer::{
    ColorChoice, EntryPrinter, HumanPrinter, JsonPrinter, OutputFormat, PrinterConfig,
    ScanPrintContext,
};

#[derive(Debug, Args)]
pub struct OutputOptions {
    /// Output entries as NDJSON (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// When to use colors: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: String,
}

impl OutputOptions {
    /// Create a printer based on the output options.
    pub fn make_printer(&self) -> Box<dyn EntryPrinter> {
        let format = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        };

        let color = match self.color.as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        };

        match format {
            OutputFormat::Human => {
                let cfg = PrinterConfig { format, color };
                Box::new(HumanPrinter::<Stdout, Stderr>::stdout(cfg))
            }
            OutputFormat::Json => Box::new(JsonPrinter::<Stdout, Stderr>::stdout()),
        }
    }
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan
    pub path: String,

    /// Depth bound; 0 scans only the root itself
    #[arg(long, short = 'd')]
    pub max_depth: Option<usize>,

    /// Override the extension allow-list (repeatable), e.g. -e .py -e .md
    #[arg(long = "ext", short = 'e', value_name = "EXT")]
    pub include_extensions: Vec<String>,

    /// Override the exclusion substrings (repeatable)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude_patterns: Vec<String>,

    /// Follow symbolic links
    #[arg(long)]
    pub follow_symlinks: bool,

    /// Compute and print aggregate statistics
    #[arg(long)]
    pub stats: bool,

    /// Worker threads for the walk; 1 keeps strict listing order
    #[arg(long, short = 'j', default_value = "1")]
    pub jobs: usize,

    /// Output formatting options
    #[command(flatten)]
    pub output: OutputOptions,
}

impl ScanArgs {
    fn to_request(&self) -> ScanRequest {
        let mut request = ScanRequest::new(self.path.clone());
        request.max_depth = self.max_depth;
        if !self.include_extensions.is_empty() {
            request.include_extensions = Some(self.include_extensions.clone());
        }
        if !self.exclude_patterns.is_empty() {
            request.exclude_patterns = Some(self.exclude_patterns.clone());
        }
        if self.follow_symlinks {
            request.follow_symlinks = Some(true);
        }
        request.include_statistics = self.stats;
        request
    }
}

pub fn run(args: ScanArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[error] {e}");
            eprintln!("[scan] {e}");
            ExitCode::from(2)
        }
    }
}

fn execute(args: ScanArgs) -> Result<ExitCode> {
    let request = args.to_request();
    let options = request.to_options();

    let started = Instant::now();
    let root = normalize_root(&request.path)?;

    let mut sink = CollectSink::new();
    let entries = if args.jobs > 1 {
        walk_parallel(&root, &options, &mut sink, args.jobs)?
    } else {
        walk(&root, &options, &mut sink)?
    };

    // The summary feeds the history log even when --stats was not given.
    let summary = aggregate(&entries);
    let duration_ms = u32::try_from(started.elapsed().as_millis()).unwrap_or(u32::MAX);

    if let Some(store) = HistoryStore::new() {
        store.log_scan(ScanEvent::new(
            root.display().to_string(),
            summary.total_files,
            summary.total_directories,
            summary.total_size,
            duration_ms,
        ));
    }

    let report = ScanReport {
        entries,
        statistics: request.include_statistics.then_some(summary),
        issues: sink.into_issues(),
    };

    let ctx = ScanPrintContext {
        root: &root,
        statistics: report.statistics.as_ref(),
        issues: &report.issues,
    };

    let mut printer = args.output.make_printer();
    printer.begin(&ctx)?;
    for entry in &report.entries {
        printer.print_entry(entry, &ctx)?;
    }
    printer.finish(&ctx)?;

    Ok(ExitCode::from(0))
}
