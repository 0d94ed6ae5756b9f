use std::future::Future;

use hadath_models::{language::Language, preferences::Theme};
use serde::{Deserialize, Serialize};

/// Preferences as found in the store. A field is `None` if it has never been
/// saved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PreferenceRepository: Send + Sync + 'static {
    /// Return the stored preferences, or empty preferences if nothing has
    /// been stored yet.
    fn load(&self) -> impl Future<Output = anyhow::Result<StoredPreferences>> + Send;

    /// Replace the stored preferences.
    fn save(
        &self,
        preferences: StoredPreferences,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockPreferenceRepository {
    pub fn with_load(mut self, result: StoredPreferences) -> Self {
        self.expect_load()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_save(mut self, preferences: StoredPreferences) -> Self {
        self.expect_save()
            .once()
            .with(mockall::predicate::eq(preferences))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }
}
