//! Watch command — re-analyze a document on every save.
//!
//! The watcher subscribes to filesystem events for the document's
//! parent directory and runs one analysis pass per coalesced change.
//! Passes are strictly sequential: while a pass runs, further events
//! queue in the channel and collapse into at most one follow-up pass,
//! so rapid successive saves never overlap analyses. A failed pass is
//! logged and the loop keeps watching; the next save is the retry.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tracing::{debug, error, info, instrument, warn};
use wordwatch_core::{Config, analysis};

use crate::publish::{ReportSink, sink_for};

use super::ListArgs;

/// Arguments for the `watch` subcommand.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Document to watch (.txt/.md, .docx, or .pdf).
    pub file: Utf8PathBuf,

    /// Publish endpoint URL (overrides config; omit for stdout)
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Debounce window for rapid saves, in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// How many interesting words to report.
    #[arg(long)]
    pub top: Option<usize>,

    #[command(flatten)]
    pub lists: ListArgs,
}

/// Watch a document and publish a statistics report on every change.
#[instrument(name = "cmd_watch", skip_all, fields(file = %args.file))]
pub fn cmd_watch(args: WatchArgs, config: &Config) -> anyhow::Result<()> {
    let list_paths = args.lists.resolve(config)?;
    let top_n = args.top.unwrap_or(config.interesting_words);
    let debounce = Duration::from_millis(args.debounce_ms.unwrap_or(config.debounce_ms));
    let endpoint = args.endpoint.clone().or_else(|| config.endpoint.clone());
    let sink = sink_for(endpoint.as_deref())?;

    let document = absolutize(&args.file)?;
    let watcher = DocumentWatcher::new(&document, debounce)?;

    watcher.run(|path| {
        match analysis::run_pass(path, &list_paths, top_n) {
            Ok(report) => {
                debug!(total_words = report.total_words, "pass complete");
                if let Err(err) = sink.publish(&report) {
                    // Transmission is the sink's concern; keep watching.
                    warn!(error = %err, "failed to publish report");
                }
            }
            Err(err) => {
                error!(document = %path, stage = err.stage(), error = %err, "analysis pass failed");
            }
        }
    });

    Ok(())
}

/// Resolve a possibly-relative path against the working directory.
fn absolutize(path: &Utf8Path) -> anyhow::Result<Utf8PathBuf> {
    let absolute = std::path::absolute(path.as_std_path())
        .with_context(|| format!("failed to resolve {path}"))?;
    Utf8PathBuf::from_path_buf(absolute)
        .map_err(|p| anyhow::anyhow!("path is not valid UTF-8: {}", p.display()))
}

/// Watches one document file and delivers coalesced change triggers.
///
/// The parent directory is watched non-recursively; events for
/// anything but the target document are dropped. The notify watcher
/// must stay alive for the subscription to hold, so it lives in a
/// struct field.
pub struct DocumentWatcher {
    /// Absolute path of the watched document.
    document: Utf8PathBuf,
    /// How long to keep draining events before running a pass.
    debounce: Duration,
    /// Channel receiver for file events.
    event_rx: mpsc::Receiver<notify::Result<Event>>,
    /// The actual file watcher (kept alive by storing it).
    _watcher: notify::RecommendedWatcher,
    /// True while the watch loop is running.
    active: Arc<AtomicBool>,
}

impl DocumentWatcher {
    /// Set up a watch on the document's parent directory.
    pub fn new(document: &Utf8Path, debounce: Duration) -> anyhow::Result<Self> {
        let parent = document
            .parent()
            .with_context(|| format!("{document} has no parent directory"))?;

        let (tx, event_rx) = mpsc::channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            let _ = tx.send(res);
        })
        .context("failed to create file watcher")?;
        watcher
            .watch(parent.as_std_path(), RecursiveMode::NonRecursive)
            .with_context(|| format!("failed to watch {parent}"))?;

        Ok(Self {
            document: document.to_path_buf(),
            debounce,
            event_rx,
            _watcher: watcher,
            active: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Liveness flag: true from loop start until shutdown.
    pub fn liveness(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.active)
    }

    /// Run the watch loop, invoking `on_change` once per coalesced
    /// trigger. Returns when the event channel disconnects, which is
    /// the normal shutdown path.
    pub fn run<F>(self, mut on_change: F)
    where
        F: FnMut(&Utf8Path),
    {
        self.active.store(true, Ordering::SeqCst);
        info!(document = %self.document, "watching for changes");

        while let Ok(result) = self.event_rx.recv() {
            match result {
                Ok(event) if is_change_for(&event, &self.document) => {}
                Ok(_) => continue,
                Err(err) => {
                    warn!(error = %err, "watch error");
                    continue;
                }
            }

            // Coalesce the burst: editors often emit several events per
            // save. Drain until the document has been quiet for the
            // debounce window, then run exactly one pass.
            loop {
                match self.event_rx.recv_timeout(self.debounce) {
                    Ok(_) => continue,
                    Err(RecvTimeoutError::Timeout) => break,
                    Err(RecvTimeoutError::Disconnected) => break,
                }
            }

            debug!(document = %self.document, "change detected");
            on_change(&self.document);
        }

        self.active.store(false, Ordering::SeqCst);
        info!(document = %self.document, "watcher stopped");
    }
}

/// Whether an event is a create/modify touching the watched document.
fn is_change_for(event: &Event, document: &Utf8Path) -> bool {
    matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_))
        && event
            .paths
            .iter()
            .any(|p| p.as_path() == document.as_std_path())
}
