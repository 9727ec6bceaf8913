use std::collections::BTreeMap;

use crate::language::Language;

pub type QuoteId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quote {
    pub id: QuoteId,
    texts: BTreeMap<Language, String>,
}

impl Quote {
    pub fn new<I, S>(id: QuoteId, texts: I) -> Self
    where
        I: IntoIterator<Item = (Language, S)>,
        S: Into<String>,
    {
        let texts = texts
            .into_iter()
            .map(|(language, text)| (language, text.into()))
            .collect();

        Self { id, texts }
    }

    /// Resolves the text for `language`, falling back to [`Language::FALLBACK`]
    /// and then to the first text in language order.
    ///
    /// Returns `None` only for a quote that carries no text at all.
    pub fn resolve_text(&self, language: Language) -> Option<&str> {
        self.texts
            .get(&language)
            .or_else(|| self.texts.get(&Language::FALLBACK))
            .or_else(|| self.texts.values().next())
            .map(String::as_str)
    }

    /// Same as [`Quote::resolve_text`], with an empty string for a quote
    /// without any text.
    pub fn text(&self, language: Language) -> &str {
        self.resolve_text(language).unwrap_or_default()
    }

    pub fn has_text(&self, language: Language) -> bool {
        self.texts.contains_key(&language)
    }
}
