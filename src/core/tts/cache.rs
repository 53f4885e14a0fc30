//! Cache artifact paths and all-or-nothing writes.
//!
//! Successful audio lands at `<dir>/<stem>.<ext>`. Bytes are first written to a
//! sibling `.part` file and renamed into place, so a failed write never leaves a
//! truncated artifact at the final path.

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

use super::error::{TTSError, TTSResult};

/// Default artifact directory, relative to the working directory.
pub const DEFAULT_CACHE_DIR: &str = "cache";

/// Suffix appended to the artifact path while it is being written.
const PARTIAL_SUFFIX: &str = "part";

/// Allocates the output path for one synthesis request.
pub trait CacheFileAllocator: Send + Sync {
    /// Path for an artifact named from `stem`, or a generated name when absent.
    fn allocate(&self, stem: Option<&str>, extension: &str) -> PathBuf;
}

/// Places artifacts in one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryCacheAllocator {
    dir: PathBuf,
}

impl DirectoryCacheAllocator {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Default for DirectoryCacheAllocator {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_DIR)
    }
}

impl CacheFileAllocator for DirectoryCacheAllocator {
    fn allocate(&self, stem: Option<&str>, extension: &str) -> PathBuf {
        let stem = match stem.map(str::trim) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => format!("temp-{}", Uuid::new_v4()),
        };
        self.dir.join(format!("{stem}.{extension}"))
    }
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(PARTIAL_SUFFIX);
    PathBuf::from(name)
}

fn write_error(path: &Path, error: std::io::Error) -> TTSError {
    TTSError::WriteError(format!(
        "Failed writing audio file '{}': {error}",
        path.display()
    ))
}

/// Writes `audio` to `path`, creating the parent directory when needed.
///
/// Any failure is a [`TTSError::WriteError`]; the partial file is removed.
pub async fn write_artifact(path: &Path, audio: &[u8]) -> TTSResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| write_error(path, e))?;
    }

    let partial = partial_path(path);
    if let Err(e) = fs::write(&partial, audio).await {
        let _ = fs::remove_file(&partial).await;
        return Err(write_error(path, e));
    }
    if let Err(e) = fs::rename(&partial, path).await {
        let _ = fs::remove_file(&partial).await;
        return Err(write_error(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_allocate_with_stem() {
        let allocator = DirectoryCacheAllocator::new("/tmp/tts");
        assert_eq!(
            allocator.allocate(Some("reply-42"), "wav"),
            PathBuf::from("/tmp/tts/reply-42.wav")
        );
    }

    #[test]
    fn test_allocate_without_stem_is_unique() {
        let allocator = DirectoryCacheAllocator::default();
        let first = allocator.allocate(None, "wav");
        let second = allocator.allocate(Some("  "), "wav");

        assert_ne!(first, second);
        assert!(first.starts_with(DEFAULT_CACHE_DIR));
        let name = first.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("temp-"));
        assert!(name.ends_with(".wav"));
    }

    #[test]
    fn test_partial_path() {
        assert_eq!(
            partial_path(Path::new("cache/a.wav")),
            PathBuf::from("cache/a.wav.part")
        );
    }

    #[tokio::test]
    async fn test_write_artifact_creates_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("out.wav");

        write_artifact(&path, b"RIFF").await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"RIFF");
        assert!(!partial_path(&path).exists());
    }

    #[tokio::test]
    async fn test_write_artifact_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.wav");
        std::fs::write(&path, b"old audio bytes").unwrap();

        write_artifact(&path, b"new").await.unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_write_artifact_failure_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, b"file").unwrap();
        let path = blocker.join("out.wav");

        let err = write_artifact(&path, b"RIFF").await.unwrap_err();

        assert!(err.is_fatal());
        assert!(err.detail().starts_with("Failed writing audio file '"));
        assert!(!path.exists());
    }
}
