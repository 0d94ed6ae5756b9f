use hadath_config::Config;
use hadath_di::provider;
use hadath_extern_impl::contact_messages::ContactMessagesApiServiceConfig;
use types::PreferenceRepo;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        preference_repo: PreferenceRepo,
        ..config: ConfigProvider {
            ContactMessagesApiServiceConfig,
        }
    }
}

impl Provider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Ok(Self {
            _cache: Default::default(),
            preference_repo: PreferenceRepo::new(&config.preferences.path),
            config: ConfigProvider::new(config)?,
        })
    }
}

provider! {
    /// Reduced provider, capable of providing services that only depend on the configuration
    pub ConfigProvider {
        contact_messages_api_service_config: ContactMessagesApiServiceConfig,
    }
}

impl ConfigProvider {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let contact_messages_api_service_config = ContactMessagesApiServiceConfig::new(
            config.supabase.url.clone(),
            config.supabase.anon_key.clone(),
            &config.supabase.table,
        )?;

        Ok(Self {
            _cache: Default::default(),
            contact_messages_api_service_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use hadath_di::Provide;

    use super::{types::*, *};

    #[test]
    fn provide_everything() {
        let config = hadath_config::load_from(&[] as &[&Path], Some(Default::default())).unwrap();
        let mut provider = Provider::new(&config).unwrap();

        let _: RestServer = provider.provide();
        let _: ContactFeature = provider.provide();
        let _: PreferencesFeature = provider.provide();
    }
}
