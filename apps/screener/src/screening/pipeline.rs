//! Request pipeline: save, extract and screen each uploaded file.
//!
//! Files are saved in upload order so that name collisions resolve the same
//! way every time. Extraction and screening then run as independent tasks,
//! and results are put back into upload order before returning.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tokio::task::JoinSet;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::{self, DocumentKind, ExtractedDocument};
use crate::screening::profile::ScreeningProfile;
use crate::screening::result::CandidateResult;
use crate::uploads::{stored_name, UploadStore};

/// One file slot from the upload form.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[cfg(test)]
impl UploadedFile {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Bytes>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            bytes: bytes.into(),
        }
    }
}

/// Screens every named file in `files`. Slots without a filename, or whose
/// filename has no usable base name, are skipped.
///
/// Only storage failures abort the batch; unreadable resumes come back as
/// rejected candidates.
pub async fn screen_batch(
    store: &UploadStore,
    profile: Arc<ScreeningProfile>,
    files: Vec<UploadedFile>,
    keep_uploads: bool,
) -> Result<Vec<CandidateResult>, AppError> {
    let mut tasks = JoinSet::new();

    for (index, UploadedFile { file_name, bytes }) in files.into_iter().enumerate() {
        let Some(file_name) = file_name.filter(|name| !name.is_empty()) else {
            debug!(slot = index, "Skipping upload slot without a filename");
            continue;
        };
        if stored_name(&file_name).is_none() {
            debug!(slot = index, file = %file_name, "Skipping upload without a usable file name");
            continue;
        }

        let path = store.save(&file_name, &bytes).await?;
        let kind = DocumentKind::from_file_name(&file_name);
        let profile = Arc::clone(&profile);
        let store = store.clone();

        tasks.spawn(async move {
            let outcome = extraction::extract(bytes, kind, &file_name).await;
            let document = ExtractedDocument { path, kind, outcome };
            let result = profile.screen(candidate_name(&file_name), &document.outcome);

            info!(
                candidate = %result.name,
                kind = ?document.kind,
                score = result.score,
                status = %result.status,
                "Screened resume"
            );

            if !keep_uploads {
                store.remove(&document.path).await;
            }
            (index, result)
        });
    }

    let mut results = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let (index, result) = joined.map_err(|e| AppError::Internal(e.into()))?;
        results.push((index, result));
    }
    results.sort_by_key(|(index, _)| *index);

    Ok(results.into_iter().map(|(_, result)| result).collect())
}

/// Display name for a candidate: the uploaded filename minus its last extension.
pub fn candidate_name(file_name: &str) -> String {
    let path = Path::new(file_name);
    if path.extension().is_some() {
        path.with_extension("").to_string_lossy().into_owned()
    } else {
        file_name.to_string()
    }
}
