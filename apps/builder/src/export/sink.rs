//! Delivery of the finished document and its filename.

use std::io::Write;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tempfile::NamedTempFile;
use tracing::info;

use crate::export::ExportError;

pub const FALLBACK_FILENAME: &str = "resume.pdf";

/// Characters that are unsafe in a filename on at least one common platform.
const RESERVED: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Builds `<name>.pdf` from the subject's name.
///
/// Reserved and control characters are dropped, whitespace runs become a
/// single `_`, and leading dots are stripped. An empty result falls back to
/// `resume.pdf`.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !c.is_control() && !RESERVED.contains(c))
        .collect();
    let stem = cleaned.split_whitespace().collect::<Vec<_>>().join("_");
    let stem = stem.trim_start_matches('.');

    if stem.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        format!("{stem}.pdf")
    }
}

/// Receives the finished blob. Returns a host-meaningful location.
#[async_trait]
pub trait DownloadSink: Send + Sync {
    async fn download(&self, blob: Bytes, filename: &str) -> Result<String, ExportError>;
}

/// Writes into a directory via a temp file renamed into place, so a reader
/// never sees a partially written document.
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

#[async_trait]
impl DownloadSink for FileSink {
    async fn download(&self, blob: Bytes, filename: &str) -> Result<String, ExportError> {
        let dir = self.dir.clone();
        let target = dir.join(filename);
        let dest = target.clone();

        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = NamedTempFile::new_in(&dir)?;
            tmp.write_all(&blob)?;
            tmp.as_file().sync_all()?;
            tmp.persist(&dest).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| ExportError::Download(std::io::Error::other(e)))??;

        info!(path = %target.display(), "document written");
        Ok(target.display().to_string())
    }
}
