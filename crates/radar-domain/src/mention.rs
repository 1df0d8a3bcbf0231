//! Mention module - individual media/social mentions of a politician

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Polarity assigned to a single mention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    /// Favourable
    Positive,
    /// Neither
    Neutral,
    /// Unfavourable
    Negative,
}

impl Sentiment {
    /// Get the sentiment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }
}

/// A mention of a politician in an external source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Unique identifier
    pub id: String,
    /// Politician mentioned (not enforced)
    pub politician_id: String,
    /// Outlet or network, e.g. "twitter", "folha"
    pub source: String,
    /// Polarity
    pub sentiment: Sentiment,
    /// Excerpt
    pub text: String,
    /// Publication time
    pub published_at: DateTime<Utc>,
}
