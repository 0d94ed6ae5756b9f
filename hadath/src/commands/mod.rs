use hadath_core_preferences_contracts::PreferencesFeatureService;
use hadath_di::Provide;
use hadath_models::language::Language;

use crate::environment::{types::PreferencesFeature, Provider};

pub mod catalog;
pub mod prefs;
pub mod serve;
pub mod submit;

/// Returns the explicitly requested language or the stored preference.
async fn resolve_language(
    provider: &mut Provider,
    language: Option<Language>,
) -> anyhow::Result<Language> {
    match language {
        Some(language) => Ok(language),
        None => {
            let preferences: PreferencesFeature = provider.provide();
            Ok(preferences.get().await?.language)
        }
    }
}
