//! Activity module - events shown in the dashboard feed

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of feed event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// A sentiment analysis finished
    SentimentAnalysis,
    /// A campaign went live
    CampaignStarted,
    /// A report was generated
    ReportGenerated,
    /// Something needs attention
    Alert,
}

impl ActivityKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::SentimentAnalysis => "sentiment_analysis",
            ActivityKind::CampaignStarted => "campaign_started",
            ActivityKind::ReportGenerated => "report_generated",
            ActivityKind::Alert => "alert",
        }
    }
}

/// A timestamped feed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Unique identifier
    pub id: String,
    /// Event kind
    pub kind: ActivityKind,
    /// Headline
    pub title: String,
    /// Details
    #[serde(default)]
    pub description: String,
    /// Politician the event refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub politician_id: Option<String>,
    /// When it happened
    pub timestamp: DateTime<Utc>,
}
