//! CRM pipeline card module

use crate::Stage;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Follow-up scheduled for a prospect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextAction {
    /// What has to happen
    pub description: String,
    /// When it is due
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
}

/// A prospect card on the CRM pipeline board
///
/// A card occupies exactly one stage at a time. Cards are never destroyed
/// by the dashboard core; they only move between stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmPipelineCard {
    /// Unique identifier
    pub id: String,

    /// Politician this prospect refers to (not enforced)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub politician_id: Option<String>,

    /// Prospect name
    pub name: String,

    /// Prospect party acronym
    pub party: String,

    /// Prospect office
    pub position: String,

    /// Current pipeline stage
    pub stage: Stage,

    /// Proposal value in BRL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposal_value: Option<f64>,

    /// Win probability in [0, 100]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub probability: Option<f64>,

    /// Next scheduled follow-up
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_action: Option<NextAction>,

    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CrmPipelineCard {
    /// Create a card with no value, probability or follow-up
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        party: impl Into<String>,
        position: impl Into<String>,
        stage: Stage,
    ) -> Self {
        Self {
            id: id.into(),
            politician_id: None,
            name: name.into(),
            party: party.into(),
            position: position.into(),
            stage,
            proposal_value: None,
            probability: None,
            next_action: None,
            notes: None,
        }
    }

    /// Set the proposal value
    pub fn with_value(mut self, value: f64) -> Self {
        self.proposal_value = Some(value);
        self
    }

    /// Set the win probability
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = Some(probability);
        self
    }

    /// Proposal value, with a missing value counted as zero
    pub fn value_or_zero(&self) -> f64 {
        self.proposal_value.unwrap_or(0.0)
    }

    /// Proposal value scaled by win probability
    ///
    /// Missing value or probability counts as zero.
    pub fn weighted_value(&self) -> f64 {
        self.value_or_zero() * self.probability.unwrap_or(0.0) / 100.0
    }

    /// Check the record invariants
    ///
    /// # Errors
    /// Returns error for an empty id, a negative proposal value or a
    /// probability outside [0, 100]
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Card id cannot be empty".to_string());
        }
        if let Some(value) = self.proposal_value {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("Card {} has invalid proposal value {}", self.id, value));
            }
        }
        if let Some(probability) = self.probability {
            if !(0.0..=100.0).contains(&probability) {
                return Err(format!(
                    "Card {} has probability {} outside [0, 100]",
                    self.id, probability
                ));
            }
        }
        Ok(())
    }
}

/// Partial update for a card (`updateCard(id, partialFields)`)
///
/// `None` leaves a field untouched. For optional card fields the inner
/// option is the new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardPatch {
    /// New stage
    #[serde(default)]
    pub stage: Option<Stage>,
    /// New proposal value
    #[serde(default)]
    pub proposal_value: Option<Option<f64>>,
    /// New win probability
    #[serde(default)]
    pub probability: Option<Option<f64>>,
    /// New follow-up
    #[serde(default)]
    pub next_action: Option<Option<NextAction>>,
    /// New notes
    #[serde(default)]
    pub notes: Option<Option<String>>,
}

impl CardPatch {
    /// Patch that only changes the stage
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.stage.is_none()
            && self.proposal_value.is_none()
            && self.probability.is_none()
            && self.next_action.is_none()
            && self.notes.is_none()
    }

    /// Apply the patch to a card in place
    pub fn apply(&self, card: &mut CrmPipelineCard) {
        if let Some(stage) = self.stage {
            card.stage = stage;
        }
        if let Some(value) = self.proposal_value {
            card.proposal_value = value;
        }
        if let Some(probability) = self.probability {
            card.probability = probability;
        }
        if let Some(next_action) = &self.next_action {
            card.next_action = next_action.clone();
        }
        if let Some(notes) = &self.notes {
            card.notes = notes.clone();
        }
    }
}
