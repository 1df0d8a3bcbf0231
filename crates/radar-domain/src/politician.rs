//! Politician module - the monitored public figures on the roster

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lower bound of the perception score scale
pub const MIN_SCORE: f64 = 0.0;

/// Upper bound of the perception score scale
pub const MAX_SCORE: f64 = 100.0;

/// Standing of a politician on the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoliticianStatus {
    /// Currently monitored
    Active,
    /// Monitoring paused
    Inactive,
    /// Contract suspended
    Suspended,
}

impl PoliticianStatus {
    /// All statuses in display order
    pub const ALL: [PoliticianStatus; 3] = [
        PoliticianStatus::Active,
        PoliticianStatus::Inactive,
        PoliticianStatus::Suspended,
    ];

    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PoliticianStatus::Active => "active",
            PoliticianStatus::Inactive => "inactive",
            PoliticianStatus::Suspended => "suspended",
        }
    }

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            PoliticianStatus::Active => "Ativo",
            PoliticianStatus::Inactive => "Inativo",
            PoliticianStatus::Suspended => "Suspenso",
        }
    }

    /// Parse a status from a string, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "active" => Some(PoliticianStatus::Active),
            "inactive" => Some(PoliticianStatus::Inactive),
            "suspended" => Some(PoliticianStatus::Suspended),
            _ => None,
        }
    }
}

impl std::str::FromStr for PoliticianStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

/// Subscription plan of a monitoring contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanTier {
    /// Entry plan
    Basic,
    /// Mid-range plan
    Professional,
    /// Full-service plan
    Enterprise,
}

impl PlanTier {
    /// Get the plan name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Professional => "professional",
            PlanTier::Enterprise => "enterprise",
        }
    }
}

/// Contract metadata for a monitored politician
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Subscribed plan
    pub plan: PlanTier,
    /// First day of the contract
    pub start_date: NaiveDate,
}

/// A politician on the roster
///
/// Read-only within the dashboard core; records come from the fixture seed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Politician {
    /// Unique identifier
    pub id: String,

    /// Full name
    pub name: String,

    /// Party acronym (e.g. "PT", "PSDB")
    pub party: String,

    /// Office held or sought
    pub position: String,

    /// Roster standing
    pub status: PoliticianStatus,

    /// Perception score in [0, 100]
    pub score: f64,

    /// Signed percentage delta of the score since the previous analysis
    #[serde(default)]
    pub trend: f64,

    /// Contract metadata, absent for prospects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract: Option<Contract>,

    /// When the last sentiment analysis ran
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analysis: Option<DateTime<Utc>>,
}

impl Politician {
    /// Create a politician without contract or analysis metadata
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        party: impl Into<String>,
        position: impl Into<String>,
        status: PoliticianStatus,
        score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            party: party.into(),
            position: position.into(),
            status,
            score,
            trend: 0.0,
            contract: None,
            last_analysis: None,
        }
    }

    /// Check the record invariants
    ///
    /// # Errors
    /// Returns error if the id is empty or the score is outside [0, 100]
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Politician id cannot be empty".to_string());
        }
        if !(MIN_SCORE..=MAX_SCORE).contains(&self.score) {
            return Err(format!(
                "Politician {} has score {} outside [0, 100]",
                self.id, self.score
            ));
        }
        Ok(())
    }

    /// Whether the politician is actively monitored
    pub fn is_active(&self) -> bool {
        self.status == PoliticianStatus::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse() {
        assert_eq!(PoliticianStatus::parse("Active"), Some(PoliticianStatus::Active));
        assert_eq!(PoliticianStatus::parse(" suspended "), Some(PoliticianStatus::Suspended));
        assert_eq!(PoliticianStatus::parse("retired"), None);
        assert!("inactive".parse::<PoliticianStatus>().is_ok());
    }

    #[test]
    fn test_validate_score_bounds() {
        let mut p = Politician::new("p1", "Ana Silva", "PT", "Senadora", PoliticianStatus::Active, 82.0);
        assert!(p.validate().is_ok());

        p.score = 100.5;
        assert!(p.validate().is_err());

        p.score = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_serde_representation() {
        let json = r#"{
            "id": "p1",
            "name": "Ana Silva",
            "party": "PT",
            "position": "Senadora",
            "status": "suspended",
            "score": 82,
            "contract": { "plan": "enterprise", "start_date": "2024-03-01" }
        }"#;
        let p: Politician = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, PoliticianStatus::Suspended);
        assert_eq!(p.trend, 0.0);
        assert_eq!(p.contract.unwrap().plan, PlanTier::Enterprise);
        assert!(p.last_analysis.is_none());
    }
}
