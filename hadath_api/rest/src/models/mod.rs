use hadath_models::language::Language;
use serde::{Deserialize, Serialize};

pub mod contact;

#[derive(Serialize)]
pub struct ApiError {
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ApiLanguageQuery {
    #[serde(default)]
    pub lang: Language,
}
