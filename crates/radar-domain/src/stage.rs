//! Stage module - the eight columns of the CRM pipeline

use serde::{Deserialize, Serialize};

/// Stage of a prospect card in the CRM pipeline
///
/// Variants are declared in conventional funnel order, so the derived `Ord`
/// sorts columns the way the board presents them:
/// lead → qualification → proposal_sent → negotiation → document_collection
/// → implementation → active_client, with `lost` as a side-state.
///
/// The order is presentational only. Any stage can be reached from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// First contact
    Lead,
    /// Fit being assessed
    Qualification,
    /// Proposal delivered
    ProposalSent,
    /// Terms under discussion
    Negotiation,
    /// Paperwork being gathered
    DocumentCollection,
    /// Onboarding in progress
    Implementation,
    /// Signed and running
    ActiveClient,
    /// Prospect dropped out
    Lost,
}

impl Stage {
    /// Every stage, in funnel order
    pub const ALL: [Stage; 8] = [
        Stage::Lead,
        Stage::Qualification,
        Stage::ProposalSent,
        Stage::Negotiation,
        Stage::DocumentCollection,
        Stage::Implementation,
        Stage::ActiveClient,
        Stage::Lost,
    ];

    /// Get the stage name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Lead => "lead",
            Stage::Qualification => "qualification",
            Stage::ProposalSent => "proposal_sent",
            Stage::Negotiation => "negotiation",
            Stage::DocumentCollection => "document_collection",
            Stage::Implementation => "implementation",
            Stage::ActiveClient => "active_client",
            Stage::Lost => "lost",
        }
    }

    /// Column title shown on the board (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Lead => "Lead",
            Stage::Qualification => "Qualificação",
            Stage::ProposalSent => "Proposta Enviada",
            Stage::Negotiation => "Negociação",
            Stage::DocumentCollection => "Coleta de Documentos",
            Stage::Implementation => "Implementação",
            Stage::ActiveClient => "Cliente Ativo",
            Stage::Lost => "Perdido",
        }
    }

    /// Parse a stage from its exact snake_case name
    ///
    /// Only the eight names returned by [`Stage::as_str`] are accepted.
    /// Anything else yields `None`; callers treat that as a no-op.
    pub fn parse(s: &str) -> Option<Self> {
        Stage::ALL.iter().copied().find(|stage| stage.as_str() == s)
    }

    /// Whether cards in this stage are still being worked
    ///
    /// `active_client` (won) and `lost` are closed.
    pub fn is_open(&self) -> bool {
        !matches!(self, Stage::ActiveClient | Stage::Lost)
    }
}

impl std::str::FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid stage: {}", s))
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exactly_eight_stages_in_funnel_order() {
        assert_eq!(Stage::ALL.len(), 8);
        let mut sorted = Stage::ALL;
        sorted.sort();
        assert_eq!(sorted, Stage::ALL);
        assert_eq!(Stage::ALL[0], Stage::Lead);
        assert_eq!(Stage::ALL[7], Stage::Lost);
    }

    #[test]
    fn test_parse_round_trip_names() {
        for stage in Stage::ALL {
            assert_eq!(Stage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(Stage::parse("unknown_stage"), None);
        assert_eq!(Stage::parse(""), None);
    }

    #[test]
    fn test_parse_rejects_near_misses() {
        assert_eq!(Stage::parse("LEAD"), None);
        assert_eq!(Stage::parse("Proposal-Sent"), None);
        assert_eq!(Stage::parse("active-client"), None);
        assert_eq!(Stage::parse("  lost "), None);
    }

    #[test]
    fn test_open_stages() {
        assert!(Stage::Lead.is_open());
        assert!(Stage::Implementation.is_open());
        assert!(!Stage::ActiveClient.is_open());
        assert!(!Stage::Lost.is_open());
    }
}
