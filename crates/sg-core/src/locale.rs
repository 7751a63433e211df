use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ScaffoldError;

/// Language and optional country, rendered as `en_US`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    pub language: String,
    pub country: Option<String>,
}

impl Locale {
    pub fn new(language: impl Into<String>, country: Option<&str>) -> Self {
        Self {
            language: language.into().to_ascii_lowercase(),
            country: country.map(str::to_ascii_uppercase),
        }
    }

    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = ScaffoldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.trim().split(['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next();

        let valid_language =
            (2..=3).contains(&language.len()) && language.chars().all(|ch| ch.is_ascii_alphabetic());
        let valid_country = country.map_or(true, |value| {
            value.len() == 2 && value.chars().all(|ch| ch.is_ascii_alphabetic())
        });
        if !valid_language || !valid_country || parts.next().is_some() {
            return Err(ScaffoldError::new(
                "LOCALE_INVALID",
                format!("Unsupported locale \"{}\".", raw),
            ));
        }

        Ok(Self::new(language, country))
    }
}

impl TryFrom<String> for Locale {
    type Error = ScaffoldError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(value: Locale) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod locale_tests {
    use super::*;

    #[test]
    fn parse_accepts_underscore_and_dash_forms() {
        assert_eq!("en_US".parse::<Locale>().expect("locale"), Locale::en_us());
        assert_eq!("en-us".parse::<Locale>().expect("locale"), Locale::en_us());
        let bare = "de".parse::<Locale>().expect("locale");
        assert_eq!(bare.country, None);
        assert_eq!(bare.to_string(), "de");
    }

    #[test]
    fn parse_rejects_malformed_values() {
        for raw in ["", "e", "english", "en_USA", "en_US_x", "1n_US"] {
            let error = raw.parse::<Locale>().expect_err("locale should be rejected");
            assert_eq!(error.code, "LOCALE_INVALID");
        }
    }

    #[test]
    fn serde_uses_display_form() {
        let json = serde_json::to_string(&Locale::new("en", Some("gb"))).expect("serialize");
        assert_eq!(json, "\"en_GB\"");
        let back: Locale = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.country.as_deref(), Some("GB"));
    }
}
