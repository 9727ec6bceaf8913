use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Languages the quotes and notification title are available in.
///
/// The declaration order is the cycling order used by [`Language::next`] and
/// the deterministic order for text fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh-Hans")]
    SimplifiedChinese,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "ja")]
    Japanese,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown language code {0}")]
pub struct UnknownLanguage(pub String);

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::SimplifiedChinese,
        Language::Spanish,
        Language::Japanese,
    ];

    /// Language used when a quote has no text for the requested one.
    pub const FALLBACK: Language = Language::English;

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::SimplifiedChinese => "zh-Hans",
            Language::Spanish => "es",
            Language::Japanese => "ja",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::SimplifiedChinese => "简体中文",
            Language::Spanish => "Español",
            Language::Japanese => "日本語",
        }
    }

    pub fn notification_title(self) -> &'static str {
        match self {
            Language::English => "Time to slack off",
            Language::SimplifiedChinese => "摸鱼时间到",
            Language::Spanish => "Hora de holgazanear",
            Language::Japanese => "サボりの時間だ",
        }
    }

    /// Next language in the fixed order, wrapping after the last one.
    pub fn next(self) -> Language {
        let index = Self::ALL
            .iter()
            .position(|language| *language == self)
            .unwrap_or(0);

        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Picks the first supported language out of the user's preferred locale
    /// identifiers, e.g. `["de-DE", "ja-JP", "en-US"]` resolves to Japanese.
    pub fn resolve_preferred<S: AsRef<str>>(preferred: &[S]) -> Language {
        preferred
            .iter()
            .find_map(|identifier| {
                let lowercased = identifier.as_ref().to_lowercase();
                if lowercased.contains("zh") {
                    Some(Language::SimplifiedChinese)
                } else if lowercased.contains("es") {
                    Some(Language::Spanish)
                } else if lowercased.contains("ja") {
                    Some(Language::Japanese)
                } else if lowercased.contains("en") {
                    Some(Language::English)
                } else {
                    None
                }
            })
            .unwrap_or(Language::FALLBACK)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|language| language.code() == s)
            .ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}
