mod corpus;
mod provider;

pub use corpus::{CorpusError, QuoteCorpus};
pub use provider::{DailyQuoteProvider, default_anchor_date};
