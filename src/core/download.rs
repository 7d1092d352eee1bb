use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs as async_fs;

pub const CV_FILE_NAME: &str = "Muhammad_Anas_Naeem_CV.pdf";

/// A one-shot request to hand the CV to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvDownload {
    pub source: PathBuf,
    pub file_name: String,
}

impl CvDownload {
    pub fn from_assets<P: AsRef<Path>>(assets_dir: P) -> Self {
        Self {
            source: assets_dir.as_ref().join(CV_FILE_NAME),
            file_name: CV_FILE_NAME.to_string(),
        }
    }

    /// Copy the asset to `destination`, returning the number of bytes written.
    pub async fn deliver<P: AsRef<Path>>(&self, destination: P) -> anyhow::Result<u64> {
        let destination = destination.as_ref();
        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            async_fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create download directory {:?}", parent))?;
        }
        let bytes = async_fs::copy(&self.source, destination)
            .await
            .with_context(|| {
                format!(
                    "Failed to copy CV from {:?} to {:?}",
                    self.source, destination
                )
            })?;
        tracing::info!(?destination, bytes, "CV delivered");
        Ok(bytes)
    }
}
