//! Emerging narrative module
//!
//! Narratives are trending topics detected by the upstream sentiment analysis.
//! They are display-only; ranking happens in [`crate::insights`].

use serde::{Deserialize, Serialize};

/// Overall polarity of a narrative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSentiment {
    /// Favourable
    Positive,
    /// Unfavourable
    Negative,
    /// Split opinion
    Mixed,
}

impl NarrativeSentiment {
    /// Get the sentiment name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeSentiment::Positive => "positive",
            NarrativeSentiment::Negative => "negative",
            NarrativeSentiment::Mixed => "mixed",
        }
    }

    /// Parse a sentiment from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Some(NarrativeSentiment::Positive),
            "negative" => Some(NarrativeSentiment::Negative),
            "mixed" => Some(NarrativeSentiment::Mixed),
            _ => None,
        }
    }
}

/// How fast a narrative spreads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Velocity {
    /// Fast
    High,
    /// Steady
    Medium,
    /// Slow
    Low,
}

impl Velocity {
    /// Get the velocity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Velocity::High => "high",
            Velocity::Medium => "medium",
            Velocity::Low => "low",
        }
    }
}

/// Where a narrative is in its life
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeStatus {
    /// Just detected
    Emerging,
    /// Gaining traction
    Trending,
    /// Losing traction
    Declining,
    /// No longer discussed
    Resolved,
}

impl NarrativeStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            NarrativeStatus::Emerging => "emerging",
            NarrativeStatus::Trending => "trending",
            NarrativeStatus::Declining => "declining",
            NarrativeStatus::Resolved => "resolved",
        }
    }

    /// Parse a status from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "emerging" => Some(NarrativeStatus::Emerging),
            "trending" => Some(NarrativeStatus::Trending),
            "declining" => Some(NarrativeStatus::Declining),
            "resolved" => Some(NarrativeStatus::Resolved),
            _ => None,
        }
    }
}

/// A detected topic or trend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergingNarrative {
    /// Unique identifier
    pub id: String,
    /// Topic headline
    pub title: String,
    /// Polarity
    pub sentiment: NarrativeSentiment,
    /// Spread speed
    pub velocity: Velocity,
    /// Lifecycle status
    pub status: NarrativeStatus,
    /// Estimated impact, higher ranks first
    pub impact_score: f64,
    /// Number of mentions observed
    pub mentions: u64,
    /// Mention growth rate as a signed percentage
    #[serde(default)]
    pub growth_rate: f64,
    /// Detection confidence in [0, 1]
    pub confidence: f64,
}

impl EmergingNarrative {
    /// Check the record invariants
    ///
    /// # Errors
    /// Returns error for an empty id or a confidence outside [0, 1]
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Narrative id cannot be empty".to_string());
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(format!(
                "Narrative {} has confidence {} outside [0, 1]",
                self.id, self.confidence
            ));
        }
        Ok(())
    }
}
