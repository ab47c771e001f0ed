use std::path::{Path, PathBuf};

use tracing::{debug, warn};

/// On-disk home for uploaded resumes. Files keep their uploaded name, so a
/// later upload with the same name replaces the earlier one.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Creates the upload directory if it does not exist yet.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Writes `bytes` under the base name of `file_name` and returns the path.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        let base = stored_name(file_name).ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("'{file_name}' has no usable file name"),
            )
        })?;

        self.ensure_dir().await?;
        let path = self.dir.join(base);
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size = bytes.len(), "Saved upload");
        Ok(path)
    }

    /// Deletes a saved upload. Failures are logged and otherwise ignored.
    pub async fn remove(&self, path: &Path) {
        if let Err(e) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), "Failed to remove upload: {e}");
        }
    }
}

/// Last path component of an uploaded filename; both `/` and `\` separate.
/// `None` when nothing usable remains, e.g. for `dir/` or `..`.
pub fn stored_name(file_name: &str) -> Option<&str> {
    file_name
        .rsplit(['/', '\\'])
        .next()
        .filter(|name| !name.is_empty() && *name != "." && *name != "..")
}
