use clap::Subcommand;
use hadath_config::Config;
use hadath_core_preferences_contracts::PreferencesFeatureService;
use hadath_di::Provide;
use hadath_models::{language::Language, preferences::Preferences};

use crate::environment::{types::PreferencesFeature, Provider};

#[derive(Debug, Subcommand)]
pub enum PrefsCommand {
    /// Print the current language and theme
    #[command(aliases(["s", "get"]))]
    Show,
    /// Switch between the dark and the light theme
    #[command(aliases(["t", "theme"]))]
    ToggleTheme,
    /// Switch the language of all texts
    #[command(aliases(["l", "lang"]))]
    SetLanguage {
        /// `en` or `ar`
        language: Language,
    },
}

impl PrefsCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut provider = Provider::new(&config)?;
        let preferences: PreferencesFeature = provider.provide();

        let current = match self {
            PrefsCommand::Show => preferences.get().await?,
            PrefsCommand::ToggleTheme => preferences.toggle_theme().await?,
            PrefsCommand::SetLanguage { language } => preferences.set_language(language).await?,
        };
        print(current);

        Ok(())
    }
}

fn print(preferences: Preferences) {
    let Preferences { language, theme } = preferences;
    println!("language: {language} ({})", language.direction().as_str());
    println!("theme: {theme}");
}
