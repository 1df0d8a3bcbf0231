//! Derived views over narratives, mentions, activity and entity relations
//!
//! Relations between entities are plain id equality. A reference to a
//! politician that does not exist simply matches nothing.

use crate::{
    Activity, Campaign, CrmPipelineCard, EmergingNarrative, Mention, NarrativeSentiment,
    NarrativeStatus, Sentiment,
};

/// Optional constraints on the narrative list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NarrativeFilter {
    /// Only narratives in this lifecycle status
    pub status: Option<NarrativeStatus>,
    /// Only narratives with this polarity
    pub sentiment: Option<NarrativeSentiment>,
}

impl NarrativeFilter {
    /// Whether a narrative passes the filter
    pub fn matches(&self, narrative: &EmergingNarrative) -> bool {
        self.status.is_none_or(|s| s == narrative.status)
            && self.sentiment.is_none_or(|s| s == narrative.sentiment)
    }
}

/// Rank narratives by impact score, highest first
///
/// Equal scores keep collection order.
pub fn rank_narratives<'a>(
    narratives: &'a [EmergingNarrative],
    filter: &NarrativeFilter,
) -> Vec<&'a EmergingNarrative> {
    let mut ranked: Vec<_> = narratives.iter().filter(|n| filter.matches(n)).collect();
    ranked.sort_by(|a, b| b.impact_score.total_cmp(&a.impact_score));
    ranked
}

/// Mention counts for one politician
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentBreakdown {
    /// Positive mentions
    pub positive: usize,
    /// Neutral mentions
    pub neutral: usize,
    /// Negative mentions
    pub negative: usize,
}

impl SentimentBreakdown {
    /// All mentions counted
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }

    /// Percentage of mentions with the given polarity
    ///
    /// `None` when there are no mentions.
    pub fn share(&self, sentiment: Sentiment) -> Option<f64> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let count = match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        };
        Some(count as f64 / total as f64 * 100.0)
    }

    /// Positive share minus negative share, in percentage points
    pub fn net(&self) -> Option<f64> {
        Some(self.share(Sentiment::Positive)? - self.share(Sentiment::Negative)?)
    }
}

/// Count a politician's mentions by polarity
pub fn sentiment_breakdown(mentions: &[Mention], politician_id: &str) -> SentimentBreakdown {
    mentions_for(mentions, politician_id)
        .into_iter()
        .fold(SentimentBreakdown::default(), |mut acc, mention| {
            match mention.sentiment {
                Sentiment::Positive => acc.positive += 1,
                Sentiment::Neutral => acc.neutral += 1,
                Sentiment::Negative => acc.negative += 1,
            }
            acc
        })
}

/// Newest activity first, at most `limit` entries
pub fn activity_feed(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    let mut feed: Vec<_> = activities.iter().collect();
    feed.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    feed.truncate(limit);
    feed
}

/// Campaigns run for a politician
pub fn campaigns_for<'a>(campaigns: &'a [Campaign], politician_id: &str) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|c| c.politician_id == politician_id)
        .collect()
}

/// Pipeline cards referring to a politician
pub fn cards_for<'a>(cards: &'a [CrmPipelineCard], politician_id: &str) -> Vec<&'a CrmPipelineCard> {
    cards
        .iter()
        .filter(|c| c.politician_id.as_deref() == Some(politician_id))
        .collect()
}

/// Mentions of a politician
pub fn mentions_for<'a>(mentions: &'a [Mention], politician_id: &str) -> Vec<&'a Mention> {
    mentions
        .iter()
        .filter(|m| m.politician_id == politician_id)
        .collect()
}
