//! Fixture documents: the serialized form of every entity collection

use crate::StoreError;
use radar_domain::{
    Activity, Campaign, CrmPipelineCard, EmergingNarrative, Mention, Politician,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Built-in demo seed, compiled into the binary
const DEMO: &str = include_str!("../fixtures/demo.json");

/// All entity collections as they appear in a fixture file
///
/// Every collection is optional in the file; missing ones load as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Fixtures {
    /// Politician roster
    #[serde(default)]
    pub politicians: Vec<Politician>,
    /// Campaigns
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    /// CRM pipeline cards
    #[serde(default)]
    pub cards: Vec<CrmPipelineCard>,
    /// Emerging narratives
    #[serde(default)]
    pub narratives: Vec<EmergingNarrative>,
    /// Activity feed
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Mentions
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

impl Fixtures {
    /// Parse fixtures from a JSON document
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON fixture file
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The built-in demo seed
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_json(DEMO)
    }

    /// Check every record's invariants and id uniqueness per collection
    ///
    /// References between collections are not checked.
    pub fn validate(&self) -> Result<(), StoreError> {
        for politician in &self.politicians {
            politician.validate().map_err(StoreError::InvalidData)?;
        }
        for card in &self.cards {
            card.validate().map_err(StoreError::InvalidData)?;
        }
        for narrative in &self.narratives {
            narrative.validate().map_err(StoreError::InvalidData)?;
        }

        unique_ids("politician", self.politicians.iter().map(|p| p.id.as_str()))?;
        unique_ids("campaign", self.campaigns.iter().map(|c| c.id.as_str()))?;
        unique_ids("card", self.cards.iter().map(|c| c.id.as_str()))?;
        unique_ids("narrative", self.narratives.iter().map(|n| n.id.as_str()))?;
        unique_ids("activity", self.activities.iter().map(|a| a.id.as_str()))?;
        unique_ids("mention", self.mentions.iter().map(|m| m.id.as_str()))?;
        Ok(())
    }

    /// Count references to politician ids that are not on the roster
    pub fn dangling_references(&self) -> usize {
        let known: HashSet<&str> = self.politicians.iter().map(|p| p.id.as_str()).collect();
        let referenced = self
            .campaigns
            .iter()
            .map(|c| c.politician_id.as_str())
            .chain(self.cards.iter().filter_map(|c| c.politician_id.as_deref()))
            .chain(self.mentions.iter().map(|m| m.politician_id.as_str()))
            .chain(self.activities.iter().filter_map(|a| a.politician_id.as_deref()));
        referenced.filter(|id| !known.contains(id)).count()
    }
}

fn unique_ids<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StoreError::Duplicate(format!("{} {}", kind, id)));
        }
    }
    Ok(())
}
