//! Supported locales and bilingual text pairs.
//!
//! Every user-facing string in the catalog carries both translations.
//! Missing or empty translations are caught at catalog load time instead
//! of surfacing as blank text in a rendered page.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Zh,
}

impl Locale {
    /// Locale used for the fallback document when no localized one exists.
    pub const DEFAULT: Locale = Locale::En;

    pub const ALL: [Locale; 2] = [Locale::En, Locale::Zh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Zh => "zh",
        }
    }

    /// Parse the two-letter locale segment that prefixes every page route.
    /// Anything other than a supported locale is a page-level not-found.
    pub fn from_segment(segment: &str) -> Result<Self, CatalogError> {
        match segment {
            "en" => Ok(Locale::En),
            "zh" => Ok(Locale::Zh),
            other => Err(CatalogError::LookupMiss {
                kind: "locale",
                id: other.to_string(),
            }),
        }
    }
}

/// A text pair with a required translation per supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub zh: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Zh => &self.zh,
        }
    }

    /// Both sides present and non-blank.
    pub fn is_complete(&self) -> bool {
        !self.en.trim().is_empty() && !self.zh.trim().is_empty()
    }
}
