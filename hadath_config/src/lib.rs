use std::{
    collections::HashMap,
    net::IpAddr,
    path::{Path, PathBuf},
};

use anyhow::Context;
use config::{Environment, File, FileFormat};
use serde::Deserialize;
use url::Url;

pub use duration::Duration;

mod duration;

/// Configuration compiled into the binary. Every other source overrides it.
pub const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

/// Environment variable holding a colon separated list of extra config files.
pub const CONFIG_PATHS_VAR: &str = "HADATH_CONFIG";

const ENV_PREFIX: &str = "HADATH";
const ENV_SEPARATOR: &str = "__";

/// Loads the configuration from the embedded defaults, the files listed in
/// `HADATH_CONFIG` and `HADATH__<SECTION>__<KEY>` environment variables.
pub fn load() -> anyhow::Result<Config> {
    let paths = std::env::var_os(CONFIG_PATHS_VAR)
        .map(|paths| std::env::split_paths(&paths).collect::<Vec<_>>())
        .unwrap_or_default();
    load_from(&paths, None)
}

/// Loads the configuration from the embedded defaults and `paths` (later files
/// win). Environment overrides are read from `env` if given, otherwise from the
/// process environment.
pub fn load_from(
    paths: &[impl AsRef<Path>],
    env: Option<HashMap<String, String>>,
) -> anyhow::Result<Config> {
    let builder = config::Config::builder()
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

    let builder = paths.iter().try_fold(builder, |builder, path| {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file at {}", path.display()))?;
        let source = File::from_str(&content, FileFormat::Toml);
        anyhow::Ok(builder.add_source(source))
    })?;

    builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(env),
        )
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub supabase: SupabaseConfig,
    pub contact: ContactConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct SupabaseConfig {
    pub url: Option<Url>,
    pub anon_key: Option<String>,
    pub table: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub status_dismiss_after: Duration,
}

#[derive(Debug, Deserialize)]
pub struct PreferencesConfig {
    pub path: PathBuf,
}
