//! Language tags accepted by the `language` and `searchLanguage` parameters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Localization for names, descriptions and other display strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "es-419")]
    SpanishLatinAmerica,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "it")]
    Italian,
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "ko")]
    Korean,
    #[serde(rename = "pl")]
    Polish,
    #[serde(rename = "pt-BR")]
    PortugueseBrazil,
    #[serde(rename = "ru")]
    Russian,
    #[serde(rename = "th")]
    Thai,
    #[serde(rename = "tr")]
    Turkish,
    #[serde(rename = "vi")]
    Vietnamese,
    #[serde(rename = "zh-CN")]
    ChineseSimplified,
    #[serde(rename = "zh-Hant")]
    ChineseTraditional,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 18] = [
        Self::Arabic,
        Self::German,
        Self::English,
        Self::Spanish,
        Self::SpanishLatinAmerica,
        Self::French,
        Self::Indonesian,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Polish,
        Self::PortugueseBrazil,
        Self::Russian,
        Self::Thai,
        Self::Turkish,
        Self::Vietnamese,
        Self::ChineseSimplified,
        Self::ChineseTraditional,
    ];

    /// Tag sent on the wire
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Arabic => "ar",
            Self::German => "de",
            Self::English => "en",
            Self::Spanish => "es",
            Self::SpanishLatinAmerica => "es-419",
            Self::French => "fr",
            Self::Indonesian => "id",
            Self::Italian => "it",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::Polish => "pl",
            Self::PortugueseBrazil => "pt-BR",
            Self::Russian => "ru",
            Self::Thai => "th",
            Self::Turkish => "tr",
            Self::Vietnamese => "vi",
            Self::ChineseSimplified => "zh-CN",
            Self::ChineseTraditional => "zh-Hant",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_tag_matches_as_str() {
        for lang in Language::ALL {
            let json = serde_json::to_value(lang).unwrap();
            assert_eq!(json, serde_json::Value::String(lang.as_str().to_string()));
        }
    }

    #[test]
    fn test_parse_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.as_str().parse::<Language>().unwrap(), lang);
        }
        assert_eq!("PT-br".parse::<Language>().unwrap(), Language::PortugueseBrazil);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert!(matches!(err, Error::InvalidLanguage(tag) if tag == "klingon"));
    }
}
