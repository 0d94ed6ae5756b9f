use std::future::Future;

use hadath_models::{language::Language, preferences::Preferences};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait PreferencesFeatureService: Send + Sync + 'static {
    /// Return the current preferences.
    ///
    /// On first use they are read from the store. Missing values fall back to
    /// their defaults and a missing theme is stored immediately.
    fn get(&self) -> impl Future<Output = anyhow::Result<Preferences>> + Send;

    /// Switch the language and store it.
    fn set_language(
        &self,
        language: Language,
    ) -> impl Future<Output = anyhow::Result<Preferences>> + Send;

    /// Switch between the dark and the light theme and store the result.
    fn toggle_theme(&self) -> impl Future<Output = anyhow::Result<Preferences>> + Send;
}

#[cfg(feature = "mock")]
impl MockPreferencesFeatureService {
    pub fn with_get(mut self, result: Preferences) -> Self {
        self.expect_get()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_set_language(mut self, language: Language, result: Preferences) -> Self {
        self.expect_set_language()
            .once()
            .with(mockall::predicate::eq(language))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_toggle_theme(mut self, result: Preferences) -> Self {
        self.expect_toggle_theme()
            .once()
            .return_once(move || Box::pin(std::future::ready(Ok(result))));
        self
    }
}
