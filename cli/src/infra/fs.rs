//! Filesystem infrastructure: implements `ArtifactWriter`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::ArtifactWriter;

/// Production filesystem implementation of `ArtifactWriter`.
pub struct LocalFs;

impl ArtifactWriter for LocalFs {
    async fn write_artifacts(&self, dir: &Path, files: &[(&str, &str)]) -> Result<()> {
        let dir = dir.to_path_buf();
        let files: Vec<(String, String)> = files
            .iter()
            .map(|(name, content)| ((*name).to_string(), (*content).to_string()))
            .collect();
        tokio::task::spawn_blocking(move || {
            for (name, content) in &files {
                let path = dir.join(name);
                std::fs::write(&path, content)
                    .with_context(|| format!("writing {}", path.display()))?;
                tracing::debug!(path = %path.display(), bytes = content.len(), "wrote artifact");
            }
            Ok::<(), anyhow::Error>(())
        })
        .await
        .context("spawn_blocking for write_artifacts")??;
        Ok(())
    }
}
