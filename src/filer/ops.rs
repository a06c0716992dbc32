// file: src/filer/ops.rs
// description: async filesystem wrappers routed through the shared logger
// reference: https://docs.rs/tokio/latest/tokio/fs

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use tokio::fs;

use crate::error::{DaylogError, Result};
use crate::logger::Logger;

/// Conventional staleness threshold for `refresh`: one week.
pub const STALE_AFTER: Duration = Duration::from_secs(604_800);

/// Stateless facade over common file operations. Failures are reported
/// through `Logger::global()` and swallowed, except for `stats`, which
/// propagates to the caller.
pub struct Filer;

impl Filer {
    /// True iff the path is accessible. No-access and not-exist both yield
    /// false.
    pub async fn exists(path: impl AsRef<Path>) -> bool {
        fs::metadata(path).await.is_ok()
    }

    /// File contents as text, or `None` after logging the failure (missing
    /// file, permission denied, non-UTF-8 content).
    pub async fn read(path: impl AsRef<Path>) -> Option<String> {
        let path = path.as_ref();
        match fs::read_to_string(path).await {
            Ok(content) => Some(content),
            Err(e) => {
                Logger::global().error(&format!("Failed to read {}: {}", path.display(), e));
                None
            }
        }
    }

    /// The one operation that surfaces its failure to the caller instead of
    /// swallowing it.
    pub async fn stats(path: impl AsRef<Path>) -> Result<std::fs::Metadata> {
        let path = path.as_ref();
        fs::metadata(path)
            .await
            .map_err(|source| DaylogError::FileOperation {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Best-effort delete; the outcome is logged either way.
    pub async fn remove(path: impl AsRef<Path>) {
        let path = path.as_ref();
        match fs::remove_file(path).await {
            Ok(()) => Logger::global().log(&format!("Removed {}", path.display())),
            Err(e) => {
                Logger::global().error(&format!("Failed to remove {}: {}", path.display(), e));
            }
        }
    }

    /// Truncating overwrite; the outcome is logged either way.
    pub async fn write(content: &str, path: impl AsRef<Path>) {
        let path = path.as_ref();
        match fs::write(path, content).await {
            Ok(()) => Logger::global().log(&format!("Wrote {}", path.display())),
            Err(e) => {
                Logger::global().error(&format!("Failed to write {}: {}", path.display(), e));
            }
        }
    }

    /// `refresh_with` writing empty content.
    pub async fn refresh(path: impl AsRef<Path>, max_age: Duration) {
        Self::refresh_with(path, max_age, || async { String::new() }).await;
    }

    /// Regenerates the file unless it exists and its last-modified age is
    /// below `max_age`. The generator is only awaited when a write is due.
    /// Failures during the age check count as stale; write failures are
    /// logged, not propagated.
    pub async fn refresh_with<F, Fut>(path: impl AsRef<Path>, max_age: Duration, generator: F)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = String>,
    {
        let path = path.as_ref();

        if let Some(age) = Self::age_of(path).await
            && age < max_age
        {
            return;
        }

        let content = generator().await;
        Self::write(&content, path).await;
    }

    async fn age_of(path: &Path) -> Option<Duration> {
        let meta = fs::metadata(path).await.ok()?;
        let modified = meta.modified().ok()?;
        modified.elapsed().ok()
    }
}
