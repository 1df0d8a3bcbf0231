//! Campaign module

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// Being planned
    Draft,
    /// Running
    Active,
    /// Temporarily halted
    Paused,
    /// Finished
    Completed,
}

impl CampaignStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Draft => "draft",
            CampaignStatus::Active => "active",
            CampaignStatus::Paused => "paused",
            CampaignStatus::Completed => "completed",
        }
    }
}

/// A communication campaign run for a politician
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Unique identifier
    pub id: String,
    /// Politician the campaign is run for (not enforced)
    pub politician_id: String,
    /// Campaign name
    pub name: String,
    /// Lifecycle status
    pub status: CampaignStatus,
    /// Budget in BRL
    pub budget: f64,
    /// Amount spent so far in BRL
    #[serde(default)]
    pub spent: f64,
    /// Estimated audience reached
    #[serde(default)]
    pub reach: u64,
    /// First day
    pub start_date: NaiveDate,
    /// Last day, open-ended when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Campaign {
    /// Fraction of the budget already spent
    ///
    /// `None` when the budget is zero.
    pub fn budget_usage(&self) -> Option<f64> {
        if self.budget > 0.0 {
            Some(self.spent / self.budget)
        } else {
            None
        }
    }
}
