use std::{fmt, str::FromStr};

use phonenumber::country::Id;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::Language;

/// Countries offered by the phone number country selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "IQ")]
    Iraq,
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "GB")]
    UnitedKingdom,
    #[serde(rename = "AE")]
    UnitedArabEmirates,
    #[serde(rename = "SA")]
    SaudiArabia,
    #[serde(rename = "KW")]
    Kuwait,
    #[serde(rename = "BH")]
    Bahrain,
    #[serde(rename = "QA")]
    Qatar,
    #[serde(rename = "OM")]
    Oman,
    #[serde(rename = "JO")]
    Jordan,
    #[serde(rename = "LB")]
    Lebanon,
    #[serde(rename = "SY")]
    Syria,
}

impl Country {
    pub const ALL: [Self; 12] = [
        Self::Iraq,
        Self::UnitedStates,
        Self::UnitedKingdom,
        Self::UnitedArabEmirates,
        Self::SaudiArabia,
        Self::Kuwait,
        Self::Bahrain,
        Self::Qatar,
        Self::Oman,
        Self::Jordan,
        Self::Lebanon,
        Self::Syria,
    ];

    /// International calling code including the leading `+`.
    pub fn calling_code(self) -> &'static str {
        match self {
            Self::Iraq => "+964",
            Self::UnitedStates => "+1",
            Self::UnitedKingdom => "+44",
            Self::UnitedArabEmirates => "+971",
            Self::SaudiArabia => "+966",
            Self::Kuwait => "+965",
            Self::Bahrain => "+973",
            Self::Qatar => "+974",
            Self::Oman => "+968",
            Self::Jordan => "+962",
            Self::Lebanon => "+961",
            Self::Syria => "+963",
        }
    }

    /// Region whose numbering plan numbers for this country must follow.
    pub fn region(self) -> Id {
        match self {
            Self::Iraq => Id::IQ,
            Self::UnitedStates => Id::US,
            Self::UnitedKingdom => Id::GB,
            Self::UnitedArabEmirates => Id::AE,
            Self::SaudiArabia => Id::SA,
            Self::Kuwait => Id::KW,
            Self::Bahrain => Id::BH,
            Self::Qatar => Id::QA,
            Self::Oman => Id::OM,
            Self::Jordan => Id::JO,
            Self::Lebanon => Id::LB,
            Self::Syria => Id::SY,
        }
    }

    /// ISO 3166-1 alpha-2 code.
    pub fn iso_code(self) -> &'static str {
        match self {
            Self::Iraq => "IQ",
            Self::UnitedStates => "US",
            Self::UnitedKingdom => "GB",
            Self::UnitedArabEmirates => "AE",
            Self::SaudiArabia => "SA",
            Self::Kuwait => "KW",
            Self::Bahrain => "BH",
            Self::Qatar => "QA",
            Self::Oman => "OM",
            Self::Jordan => "JO",
            Self::Lebanon => "LB",
            Self::Syria => "SY",
        }
    }

    pub fn name(self, language: Language) -> &'static str {
        match self {
            Self::Iraq => language.pick("Iraq", "العراق"),
            Self::UnitedStates => language.pick("United States", "الولايات المتحدة"),
            Self::UnitedKingdom => language.pick("United Kingdom", "المملكة المتحدة"),
            Self::UnitedArabEmirates => language.pick("UAE", "الإمارات"),
            Self::SaudiArabia => language.pick("Saudi Arabia", "السعودية"),
            Self::Kuwait => language.pick("Kuwait", "الكويت"),
            Self::Bahrain => language.pick("Bahrain", "البحرين"),
            Self::Qatar => language.pick("Qatar", "قطر"),
            Self::Oman => language.pick("Oman", "عُمان"),
            Self::Jordan => language.pick("Jordan", "الأردن"),
            Self::Lebanon => language.pick("Lebanon", "لبنان"),
            Self::Syria => language.pick("Syria", "سوريا"),
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.iso_code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unsupported country: {0}")]
pub struct UnsupportedCountry(pub String);

impl FromStr for Country {
    type Err = UnsupportedCountry;

    /// Accepts the iso code (`IQ`) or the calling code (`+964`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|country| country.iso_code().eq_ignore_ascii_case(s) || country.calling_code() == s)
            .ok_or_else(|| UnsupportedCountry(s.into()))
    }
}
