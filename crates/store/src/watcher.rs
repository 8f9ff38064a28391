use hw_core::Message;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// Watches a shared container directory and sends [`Message::StoreChanged`]
/// whenever a stored document is written.
///
/// Bursts are coalesced: while one notification is still unread, further
/// changes are dropped.
///
/// # Example
/// ```no_run
/// # async fn demo() {
/// let (_, mut rx) = hw_store::StoreWatcher::spawn("/tmp/containers/group.example");
/// while rx.recv().await.is_some() {
///     println!("container changed, re-rendering");
/// }
/// # }
/// ```
pub struct StoreWatcher {
    dir: PathBuf,
}

impl StoreWatcher {
    /// Spawn a filesystem watcher for `dir`.  Must be called inside a Tokio
    /// runtime.  Returns the watcher handle and a receiver that fires on every
    /// detected change.
    pub fn spawn(dir: impl AsRef<Path>) -> (Self, mpsc::Receiver<Message>) {
        let (tx, rx) = mpsc::channel(1);
        let dir = dir.as_ref().to_path_buf();
        let watcher = Self { dir: dir.clone() };

        tokio::spawn(watch_loop(dir, tx));

        (watcher, rx)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

async fn watch_loop(dir: PathBuf, tx: mpsc::Sender<Message>) {
    use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};
    use std::time::Duration;

    let (sync_tx, mut sync_rx) = mpsc::channel::<notify::Result<Event>>(16);

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = sync_tx.blocking_send(res);
        },
        Config::default().with_poll_interval(Duration::from_secs(2)),
    ) {
        Ok(w) => w,
        Err(e) => {
            error!("Failed to create filesystem watcher: {e}");
            return;
        }
    };

    if let Err(e) = watcher.watch(&dir, RecursiveMode::NonRecursive) {
        error!("Failed to watch '{}': {e}", dir.display());
        return;
    }

    info!("Watching shared container: {}", dir.display());

    while let Some(event) = sync_rx.recv().await {
        match event {
            Ok(e) => {
                use notify::EventKind::*;
                if matches!(e.kind, Modify(_) | Create(_)) && e.paths.iter().any(|p| is_document(p)) {
                    match tx.try_send(Message::StoreChanged) {
                        Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                        Err(mpsc::error::TrySendError::Closed(_)) => break, // receiver dropped
                    }
                }
            }
            Err(e) => warn!("Watcher error: {e}"),
        }
    }
}

/// Stored documents are `<key>.json`; temporary write files are ignored.
fn is_document(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
        && !path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{FileStore, SharedStore, WIDGET_DATA_KEY};
    use std::time::Duration;
    use tokio::time::{sleep, timeout};

    /// Give the notify backend time to register the directory.
    const SETTLE: Duration = Duration::from_millis(300);

    #[tokio::test(flavor = "multi_thread")]
    async fn store_write_fires_change() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();
        let (watcher, mut rx) = StoreWatcher::spawn(store.dir());
        assert_eq!(watcher.dir(), dir.path());
        sleep(SETTLE).await;

        store.set(WIDGET_DATA_KEY, b"{}").unwrap();

        let change = timeout(Duration::from_secs(5), rx.recv()).await;
        assert_eq!(change.ok().flatten(), Some(Message::StoreChanged));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn temp_and_foreign_files_stay_silent() {
        let dir = tempfile::tempdir().unwrap();
        let (_watcher, mut rx) = StoreWatcher::spawn(dir.path());
        sleep(SETTLE).await;

        std::fs::write(dir.path().join(".widgetData.json.tmp"), b"{}").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"hello").unwrap();

        assert!(timeout(Duration::from_millis(800), rx.recv()).await.is_err());
    }

    #[test]
    fn temp_files_are_not_documents() {
        assert!(is_document(Path::new("/c/widgetData.json")));
        assert!(!is_document(Path::new("/c/.widgetData.json.tmp")));
        assert!(!is_document(Path::new("/c/notes.txt")));
    }
}
