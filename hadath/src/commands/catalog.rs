use hadath_config::Config;
use hadath_models::{country::Country, event_type::EventType, language::Language};

use super::resolve_language;
use crate::environment::Provider;

pub async fn countries(config: Config, language: Option<Language>) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let language = resolve_language(&mut provider, language).await?;

    for country in Country::ALL {
        println!(
            "{}\t{}\t{}",
            country.iso_code(),
            country.calling_code(),
            country.name(language)
        );
    }

    Ok(())
}

pub async fn event_types(config: Config, language: Option<Language>) -> anyhow::Result<()> {
    let mut provider = Provider::new(&config)?;
    let language = resolve_language(&mut provider, language).await?;

    for event_type in EventType::ALL {
        println!("{event_type}\t{}", event_type.label(language));
    }

    Ok(())
}
