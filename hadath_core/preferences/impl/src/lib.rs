use std::sync::Arc;

use anyhow::Context;
use hadath_core_preferences_contracts::PreferencesFeatureService;
use hadath_di::Build;
use hadath_models::{language::Language, preferences::Preferences};
use hadath_persistence_contracts::preferences::{PreferenceRepository, StoredPreferences};
use hadath_utils::trace_instrument;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Debug, Clone, Build)]
pub struct PreferencesFeatureServiceImpl<PreferenceRepo> {
    preference_repo: PreferenceRepo,
    #[state]
    current: Arc<Mutex<Option<Preferences>>>,
}

impl<PreferenceRepo> PreferencesFeatureService for PreferencesFeatureServiceImpl<PreferenceRepo>
where
    PreferenceRepo: PreferenceRepository,
{
    #[trace_instrument(skip(self))]
    async fn get(&self) -> anyhow::Result<Preferences> {
        let mut current = self.current.lock().await;
        self.init(&mut current).await
    }

    #[trace_instrument(skip(self))]
    async fn set_language(&self, language: Language) -> anyhow::Result<Preferences> {
        self.update(|preferences| preferences.language = language).await
    }

    #[trace_instrument(skip(self))]
    async fn toggle_theme(&self) -> anyhow::Result<Preferences> {
        self.update(|preferences| preferences.theme = preferences.theme.toggled())
            .await
    }
}

impl<PreferenceRepo> PreferencesFeatureServiceImpl<PreferenceRepo>
where
    PreferenceRepo: PreferenceRepository,
{
    async fn init(&self, current: &mut Option<Preferences>) -> anyhow::Result<Preferences> {
        if let Some(preferences) = *current {
            return Ok(preferences);
        }

        let stored = self
            .preference_repo
            .load()
            .await
            .context("Failed to load preferences")?;

        let preferences = Preferences {
            language: stored.language.unwrap_or_default(),
            theme: stored.theme.unwrap_or_default(),
        };

        if stored.theme.is_none() {
            debug!(theme = %preferences.theme, "storing default theme");
            self.preference_repo
                .save(StoredPreferences {
                    theme: Some(preferences.theme),
                    ..stored
                })
                .await
                .context("Failed to store default theme")?;
        }

        *current = Some(preferences);
        Ok(preferences)
    }

    async fn update(
        &self,
        f: impl FnOnce(&mut Preferences) + Send,
    ) -> anyhow::Result<Preferences> {
        let mut current = self.current.lock().await;
        let mut preferences = self.init(&mut current).await?;
        f(&mut preferences);

        self.preference_repo
            .save(StoredPreferences {
                theme: Some(preferences.theme),
                language: Some(preferences.language),
            })
            .await
            .context("Failed to store preferences")?;

        *current = Some(preferences);
        Ok(preferences)
    }
}

#[cfg(test)]
mod tests {
    use hadath_models::preferences::Theme;
    use hadath_persistence_contracts::preferences::MockPreferenceRepository;
    use pretty_assertions::assert_eq;

    use super::*;

    type Sut = PreferencesFeatureServiceImpl<MockPreferenceRepository>;

    fn sut(preference_repo: MockPreferenceRepository) -> Sut {
        PreferencesFeatureServiceImpl {
            preference_repo,
            current: Default::default(),
        }
    }

    #[tokio::test]
    async fn get_stores_default_theme() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(StoredPreferences::default())
            .with_save(StoredPreferences {
                theme: Some(Theme::Dark),
                language: None,
            });
        let sut = sut(preference_repo);

        // Act
        let result = sut.get().await;

        // Assert
        assert_eq!(
            result.unwrap(),
            Preferences {
                language: Language::En,
                theme: Theme::Dark,
            }
        );
    }

    #[tokio::test]
    async fn get_reads_store_once() {
        // Arrange
        let stored = StoredPreferences {
            theme: Some(Theme::Light),
            language: Some(Language::Ar),
        };
        let preference_repo = MockPreferenceRepository::new().with_load(stored);
        let sut = sut(preference_repo);
        let expected = Preferences {
            language: Language::Ar,
            theme: Theme::Light,
        };

        // Act
        let first = sut.get().await.unwrap();
        let second = sut.get().await.unwrap();

        // Assert
        assert_eq!(first, expected);
        assert_eq!(second, expected);
    }

    #[tokio::test]
    async fn toggle_theme() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(StoredPreferences {
                theme: Some(Theme::Dark),
                language: None,
            })
            .with_save(StoredPreferences {
                theme: Some(Theme::Light),
                language: Some(Language::En),
            });
        let sut = sut(preference_repo);

        // Act
        let result = sut.toggle_theme().await;

        // Assert
        assert_eq!(result.unwrap().theme, Theme::Light);
        assert_eq!(sut.get().await.unwrap().theme, Theme::Light);
    }

    #[tokio::test]
    async fn set_language() {
        // Arrange
        let preference_repo = MockPreferenceRepository::new()
            .with_load(StoredPreferences {
                theme: Some(Theme::Light),
                language: Some(Language::En),
            })
            .with_save(StoredPreferences {
                theme: Some(Theme::Light),
                language: Some(Language::Ar),
            });
        let sut = sut(preference_repo);

        // Act
        let result = sut.set_language(Language::Ar).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            Preferences {
                language: Language::Ar,
                theme: Theme::Light,
            }
        );
    }

    #[tokio::test]
    async fn load_failed() {
        // Arrange
        let mut preference_repo = MockPreferenceRepository::new();
        preference_repo
            .expect_load()
            .once()
            .return_once(|| Box::pin(std::future::ready(Err(anyhow::anyhow!("disk full")))));
        let sut = sut(preference_repo);

        // Act
        let result = sut.get().await;

        // Assert
        assert!(result.is_err());
    }
}
