use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use hadath_persistence_contracts::preferences::{PreferenceRepository, StoredPreferences};
use hadath_utils::trace_instrument;
use tracing::trace;

/// Stores the preferences as a single JSON document, e.g.
/// `{"theme":"dark","language":"ar"}`.
#[derive(Debug, Clone)]
pub struct FilePreferenceRepository {
    path: Arc<PathBuf>,
}

impl FilePreferenceRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceRepository for FilePreferenceRepository {
    #[trace_instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> anyhow::Result<StoredPreferences> {
        let content = match tokio::fs::read(&*self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                trace!("no preferences stored yet");
                return Ok(StoredPreferences::default());
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("Failed to read preferences from {}", self.path.display())
                })
            }
        };

        serde_json::from_slice(&content)
            .with_context(|| format!("Failed to parse preferences in {}", self.path.display()))
    }

    #[trace_instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self, preferences: StoredPreferences) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let content =
            serde_json::to_vec(&preferences).context("Failed to serialize preferences")?;
        tokio::fs::write(&*self.path, content)
            .await
            .with_context(|| format!("Failed to write preferences to {}", self.path.display()))
    }
}
