use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};
use veil_common::{ConfigError, Event, EventBus};

/// Quiet period before a burst of file events is reported as one change.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Publishes [`Event::StoreFileChanged`] when the store file is written.
pub struct StoreWatcher {
    path: PathBuf,
    debounce: Duration,
}

impl StoreWatcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !path.exists() {
            warn!(
                "store file {} does not exist yet, will watch for creation",
                path.display()
            );
        }
        Self {
            path,
            debounce: DEFAULT_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the bus has no way to be notified any more.
    ///
    /// Editors and our own atomic writes produce several events per save
    /// (write tmp, rename), so events are coalesced within the debounce
    /// window.
    pub async fn watch(&self, bus: Arc<EventBus>) -> Result<(), ConfigError> {
        let watch_dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();

        info!("watching store file {}", self.path.display());

        // Bridge the sync notify callback into async.
        let (change_tx, mut change_rx) = tokio::sync::mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<notify::Event, notify::Error>| match result {
                Ok(event) => {
                    if is_store_write(&event, &file_name) {
                        debug!(kind = ?event.kind, "store file event");
                        let _ = change_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        while change_rx.recv().await.is_some() {
            let quiet = tokio::time::sleep(self.debounce);
            tokio::pin!(quiet);

            loop {
                tokio::select! {
                    _ = &mut quiet => break,
                    more = change_rx.recv() => {
                        if more.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("store file changed");
            if bus.publish(Event::StoreFileChanged) == 0 {
                debug!("no subscribers for store change");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// Whether `event` creates or modifies the file named `file_name`.
pub(crate) fn is_store_write(event: &notify::Event, file_name: &OsString) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name().is_some_and(|n| n == file_name.as_os_str()))
}
