use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    thread,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use crossbeam::channel::{self, RecvTimeoutError, Sender};
use log::debug;

use crate::{
    categorize::categorize,
    config::BATCH_SIZE,
    diag::{DiagnosticSink, ScanIssue},
    entry::ScanEntry,
    error::ScanError,
    filter::{ExclusionMatcher, RelevanceClassifier},
    normalize::normalize_root,
    options::ScanOptions,
};

/// Filtering state consulted at every visited entry.
pub struct WalkContext {
    pub excludes: ExclusionMatcher,
    pub relevance: RelevanceClassifier,
    pub max_depth: usize,
    pub follow_symlinks: bool,
}

impl WalkContext {
    pub fn new(options: &ScanOptions) -> Self {
        WalkContext {
            excludes: ExclusionMatcher::from_options(options),
            relevance: RelevanceClassifier::from_options(options),
            max_depth: options.max_depth,
            follow_symlinks: options.follow_symlinks,
        }
    }
}

/// Outcome of inspecting a single path.
enum Visit {
    /// Nothing recorded: symlink policy, exclusion, irrelevant file, or a
    /// special file type (socket, FIFO, device).
    Skip,
    /// Entry recorded; `descend` is set for directories.
    Keep { entry: ScanEntry, descend: bool },
    /// Stat failed. Recoverable; the caller reports and moves on.
    Failed(ScanIssue),
}

/// Normalize a caller-supplied path string, then walk it.
pub fn scan(
    path: &str,
    options: &ScanOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<ScanEntry>, ScanError> {
    let root = normalize_root(path)?;
    walk(&root, options, sink)
}

/// Depth-bounded pre-order walk rooted at `root`.
///
/// Runs on an explicit `(path, depth)` stack so adversarially deep trees
/// cannot overflow the call stack. A directory's own entry is always emitted
/// before anything nested under it. Per-entry failures go to `sink` and
/// never abort the walk; only an unreadable root is fatal.
pub fn walk(
    root: &Path,
    options: &ScanOptions,
    sink: &mut dyn DiagnosticSink,
) -> Result<Vec<ScanEntry>, ScanError> {
    let ctx = WalkContext::new(options);

    if let Err(e) = fs::symlink_metadata(root) {
        return Err(ScanError::RootUnreadable(root.to_path_buf(), e));
    }

    let mut entries = Vec::new();
    // Canonical paths of expanded directories; only consulted when symlinks
    // are followed, which is the only way a cycle can form.
    let mut visited: HashSet<PathBuf> = HashSet::new();
    let mut stack: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((path, depth)) = stack.pop() {
        match visit_path(&path, &ctx) {
            Visit::Skip => {}
            Visit::Failed(issue) => sink.report(issue),
            Visit::Keep { entry, descend } => {
                entries.push(entry);

                if !descend || depth >= ctx.max_depth {
                    continue;
                }
                if ctx.follow_symlinks && !guard_cycle(&path, &mut visited, sink) {
                    continue;
                }

                match fs::read_dir(&path) {
                    Ok(rd) => {
                        let mut children = Vec::new();
                        for entry_res in rd {
                            match entry_res {
                                Ok(child) => children.push(child.path()),
                                Err(e) => sink.report(ScanIssue::new(
                                    &path,
                                    format!("error reading entry: {e}"),
                                )),
                            }
                        }
                        // LIFO stack: push in reverse so children pop in
                        // listing order.
                        for child in children.into_iter().rev() {
                            stack.push((child, depth + 1));
                        }
                    }
                    Err(e) if depth == 0 => {
                        // A root that cannot be listed fails the whole scan.
                        return Err(ScanError::RootUnreadable(path, e));
                    }
                    Err(e) => {
                        sink.report(ScanIssue::new(&path, format!("read_dir failed: {e}")));
                    }
                }
            }
        }
    }

    Ok(entries)
}

fn visit_path(path: &Path, ctx: &WalkContext) -> Visit {
    let lmeta = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) => return Visit::Failed(ScanIssue::new(path, format!("stat failed: {e}"))),
    };

    let meta = if lmeta.file_type().is_symlink() {
        if !ctx.follow_symlinks {
            debug!("[walk] skipping symlink {:?}", path);
            return Visit::Skip;
        }
        // Resolve the target; a dangling link is a recoverable failure.
        match fs::metadata(path) {
            Ok(m) => m,
            Err(e) => return Visit::Failed(ScanIssue::new(path, format!("broken symlink: {e}"))),
        }
    } else {
        lmeta
    };

    let Some(name) = utf8_name(path) else {
        debug!("[walk] skipping non-UTF-8 entry name under {:?}", path.parent());
        return Visit::Skip;
    };

    if ctx.excludes.is_excluded(&name) {
        debug!("[walk] excluded {:?}", path);
        return Visit::Skip;
    }

    if meta.is_dir() {
        let entry = ScanEntry::directory(
            path.to_path_buf(),
            name,
            to_unix_secs(meta.modified().ok()),
        );
        return Visit::Keep {
            entry,
            descend: true,
        };
    }

    if meta.is_file() {
        let extension = extension_of(path);
        if !ctx.relevance.is_relevant(&name, &extension) {
            return Visit::Skip;
        }
        let category = categorize(&extension, &name);
        let entry = ScanEntry::file(
            path.to_path_buf(),
            name,
            meta.len(),
            extension,
            category,
            to_unix_secs(meta.modified().ok()),
        );
        return Visit::Keep {
            entry,
            descend: false,
        };
    }

    debug!("[walk] skipping special file {:?}", path);
    Visit::Skip
}

/// Returns false (and reports) when the directory was already expanded
/// through another path, which only happens via symlinks.
fn guard_cycle(path: &Path, visited: &mut HashSet<PathBuf>, sink: &mut dyn DiagnosticSink) -> bool {
    match path.canonicalize() {
        Ok(real) => {
            if visited.insert(real) {
                true
            } else {
                sink.report(ScanIssue::new(
                    path,
                    "directory already visited, not descending".to_string(),
                ));
                false
            }
        }
        Err(e) => {
            sink.report(ScanIssue::new(path, format!("canonicalize failed: {e}")));
            false
        }
    }
}

fn utf8_name(path: &Path) -> Option<String> {
    match path.file_name() {
        Some(os) => os.to_str().map(|s| s.to_owned()),
        // Roots like "/" have no final segment; fall back to the whole path.
        None => path.to_str().map(|s| s.to_owned()),
    }
}

/// Lowercase extension with leading dot, or empty string for names without
/// one (`Dockerfile`, `.gitignore`).
fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|os| os.to_str())
        .map(|s| format!(".{}", s.to_ascii_lowercase()))
        .unwrap_or_default()
}

fn to_unix_secs(t: Option<SystemTime>) -> u64 {
    t.and_then(|tt| tt.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

enum WalkMessage {
    Batch(Vec<ScanEntry>),
    Issue(ScanIssue),
}

/// Sink used inside workers; issues travel over the message channel and are
/// forwarded to the caller's sink after the workers finish.
struct ChannelSink {
    tx: Sender<WalkMessage>,
}

impl DiagnosticSink for ChannelSink {
    fn report(&mut self, issue: ScanIssue) {
        let _ = self.tx.send(WalkMessage::Issue(issue));
    }
}

/// Multi-threaded walk using crossbeam workers.
///
/// Workers pull `(dir, depth)` jobs from a shared queue; each job lists one
/// directory, records its children in batches, and enqueues kept
/// subdirectories. The merged list is sorted by path before returning, which
/// keeps every ancestor ahead of its descendants, so consumers observe the
/// same pre-order contract as the sequential walk. Filtering, depth bounds,
/// and failure isolation are shared with `walk` down to the same functions.
pub fn walk_parallel(
    root: &Path,
    options: &ScanOptions,
    sink: &mut dyn DiagnosticSink,
    num_threads: usize,
) -> Result<Vec<ScanEntry>, ScanError> {
    if num_threads <= 1 {
        return walk(root, options, sink);
    }

    let ctx = WalkContext::new(options);

    if let Err(e) = fs::symlink_metadata(root) {
        return Err(ScanError::RootUnreadable(root.to_path_buf(), e));
    }

    let mut entries = Vec::new();
    let visited: Mutex<HashSet<PathBuf>> = Mutex::new(HashSet::new());

    // The root entry is recorded up front; workers only ever expand
    // directories whose own entry is already out.
    let mut root_descend = false;
    match visit_path(root, &ctx) {
        Visit::Skip => {}
        Visit::Failed(issue) => sink.report(issue),
        Visit::Keep { entry, descend } => {
            root_descend = descend && ctx.max_depth > 0;
            entries.push(entry);
        }
    }

    if root_descend {
        // An unlistable root fails the scan here, exactly as in `walk`;
        // workers treat the same failure on inner directories as an issue.
        if let Err(e) = fs::read_dir(root) {
            return Err(ScanError::RootUnreadable(root.to_path_buf(), e));
        }
        if ctx.follow_symlinks {
            let mut set = visited.lock().expect("cycle set lock poisoned");
            root_descend = guard_cycle(root, &mut set, sink);
        }
    }

    let (msg_tx, msg_rx) = channel::unbounded::<WalkMessage>();
    let (work_tx, work_rx) = channel::unbounded::<(PathBuf, usize)>();
    let pending = AtomicUsize::new(0);

    if root_descend {
        pending.store(1, Ordering::Release);
        let _ = work_tx.send((root.to_path_buf(), 0));
    }

    debug!("[walk_parallel] starting with {} threads", num_threads);

    thread::scope(|s| {
        for _thread_id in 0..num_threads {
            let work_rx = work_rx.clone();
            let work_tx = work_tx.clone();
            let msg_tx = msg_tx.clone();
            let ctx = &ctx;
            let pending = &pending;
            let visited = &visited;

            s.spawn(move || {
                worker_loop(work_rx, work_tx, msg_tx, ctx, pending, visited);
            });
        }
    });

    drop(msg_tx);
    drop(work_tx);

    while let Ok(msg) = msg_rx.try_recv() {
        match msg {
            WalkMessage::Batch(batch) => entries.extend(batch),
            WalkMessage::Issue(issue) => sink.report(issue),
        }
    }

    entries.sort_by(|a, b| a.path.cmp(&b.path));

    Ok(entries)
}

/// Worker loop for parallel walking. Each worker expands directories from
/// the work queue and sends batched entries.
fn worker_loop(
    work_rx: channel::Receiver<(PathBuf, usize)>,
    work_tx: channel::Sender<(PathBuf, usize)>,
    msg_tx: Sender<WalkMessage>,
    ctx: &WalkContext,
    pending: &AtomicUsize,
    visited: &Mutex<HashSet<PathBuf>>,
) {
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    loop {
        // Use a timeout to periodically check whether all work is done.
        match work_rx.recv_timeout(Duration::from_millis(50)) {
            Ok((dir, depth)) => {
                expand_dir(&dir, depth, &work_tx, &msg_tx, &mut batch, ctx, pending, visited);

                if batch.len() >= BATCH_SIZE {
                    let to_send = std::mem::take(&mut batch);
                    if msg_tx.send(WalkMessage::Batch(to_send)).is_err() {
                        return;
                    }
                }

                // Decrement after the directory is fully expanded.
                if pending.fetch_sub(1, Ordering::AcqRel) == 1 {
                    break;
                }
            }
            Err(RecvTimeoutError::Timeout) => {
                if pending.load(Ordering::Acquire) == 0 {
                    break;
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                break;
            }
        }
    }

    if !batch.is_empty() {
        let _ = msg_tx.send(WalkMessage::Batch(batch));
    }
}

/// List one directory, record its children, and enqueue kept subdirectories.
fn expand_dir(
    dir: &Path,
    depth: usize,
    work_tx: &channel::Sender<(PathBuf, usize)>,
    msg_tx: &Sender<WalkMessage>,
    batch: &mut Vec<ScanEntry>,
    ctx: &WalkContext,
    pending: &AtomicUsize,
    visited: &Mutex<HashSet<PathBuf>>,
) {
    let rd = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) => {
            let _ = msg_tx.send(WalkMessage::Issue(ScanIssue::new(
                dir,
                format!("read_dir failed: {e}"),
            )));
            return;
        }
    };

    for entry_res in rd {
        let child = match entry_res {
            Ok(c) => c.path(),
            Err(e) => {
                let _ = msg_tx.send(WalkMessage::Issue(ScanIssue::new(
                    dir,
                    format!("error reading entry: {e}"),
                )));
                continue;
            }
        };

        match visit_path(&child, ctx) {
            Visit::Skip => {}
            Visit::Failed(issue) => {
                let _ = msg_tx.send(WalkMessage::Issue(issue));
            }
            Visit::Keep { entry, descend } => {
                let child_depth = depth + 1;
                if descend && child_depth < ctx.max_depth {
                    let mut expand = true;
                    if ctx.follow_symlinks {
                        let mut chan_sink = ChannelSink { tx: msg_tx.clone() };
                        let mut set = visited.lock().expect("cycle set lock poisoned");
                        expand = guard_cycle(&child, &mut set, &mut chan_sink);
                    }
                    if expand {
                        pending.fetch_add(1, Ordering::AcqRel);
                        let _ = work_tx.send((child.clone(), child_depth));
                    }
                }
                batch.push(entry);
            }
        }
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
