//! Radar Storage Layer
//!
//! Implements the `DashboardStore` trait with an in-memory entity collection.
//!
//! # Architecture
//!
//! - Every collection is held as an `Arc<Vec<T>>` snapshot
//! - Mutations build a new vector and swap the `Arc`, so snapshots already
//!   handed to readers never change underneath them
//! - A revision counter tells views when to recompute
//! - Data comes from a JSON fixture file or the built-in demo seed; nothing
//!   is written back
//!
//! # Examples
//!
//! ```
//! use radar_domain::DashboardStore;
//! use radar_store::MemoryStore;
//!
//! let mut store = MemoryStore::demo().unwrap();
//! let outcome = store.on_reorder_requested("card-1", "qualification");
//! assert!(outcome.is_moved());
//! ```

#![warn(missing_docs)]

mod fixtures;

pub use fixtures::Fixtures;

use radar_domain::pipeline::{self, MoveOutcome};
use radar_domain::{
    Activity, Campaign, CardPatch, CrmPipelineCard, DashboardStore, EmergingNarrative, Mention,
    Politician, Snapshot,
};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Fixture file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Fixture document is not valid JSON for the entity model
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Entity not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Entity violates a domain invariant
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Two entities of the same kind share an id
    #[error("Duplicate id: {0}")]
    Duplicate(String),
}

/// In-memory implementation of `DashboardStore`
///
/// Owns the single entity collection of a dashboard session.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    politicians: Snapshot<Politician>,
    campaigns: Snapshot<Campaign>,
    cards: Snapshot<CrmPipelineCard>,
    narratives: Snapshot<EmergingNarrative>,
    activities: Snapshot<Activity>,
    mentions: Snapshot<Mention>,
    revision: u64,
}

impl MemoryStore {
    /// Create a store from validated fixtures
    ///
    /// # Errors
    /// Returns `InvalidData` or `Duplicate` if any record breaks an invariant
    pub fn from_fixtures(fixtures: Fixtures) -> Result<Self, StoreError> {
        fixtures.validate()?;

        let dangling = fixtures.dangling_references();
        if dangling > 0 {
            debug!(dangling, "fixtures reference unknown politicians");
        }

        info!(
            politicians = fixtures.politicians.len(),
            campaigns = fixtures.campaigns.len(),
            cards = fixtures.cards.len(),
            narratives = fixtures.narratives.len(),
            activities = fixtures.activities.len(),
            mentions = fixtures.mentions.len(),
            "entity store loaded"
        );

        Ok(Self {
            politicians: Arc::new(fixtures.politicians),
            campaigns: Arc::new(fixtures.campaigns),
            cards: Arc::new(fixtures.cards),
            narratives: Arc::new(fixtures.narratives),
            activities: Arc::new(fixtures.activities),
            mentions: Arc::new(fixtures.mentions),
            revision: 0,
        })
    }

    /// Load a store from a JSON fixture file
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use radar_store::MemoryStore;
    ///
    /// let store = MemoryStore::load("fixtures/dashboard.json").unwrap();
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading fixtures");
        Self::from_fixtures(Fixtures::read(path)?)
    }

    /// Load the built-in demo seed
    pub fn demo() -> Result<Self, StoreError> {
        Self::from_fixtures(Fixtures::demo()?)
    }

    /// Look up a politician by id
    pub fn politician(&self, id: &str) -> Option<Politician> {
        self.politicians.iter().find(|p| p.id == id).cloned()
    }

    /// Look up a card by id
    pub fn card(&self, id: &str) -> Option<CrmPipelineCard> {
        self.cards.iter().find(|c| c.id == id).cloned()
    }

    fn replace_cards(&mut self, cards: Vec<CrmPipelineCard>) {
        self.cards = Arc::new(cards);
        self.revision += 1;
    }
}

impl DashboardStore for MemoryStore {
    type Error = StoreError;

    fn politicians(&self) -> Snapshot<Politician> {
        Arc::clone(&self.politicians)
    }

    fn campaigns(&self) -> Snapshot<Campaign> {
        Arc::clone(&self.campaigns)
    }

    fn cards(&self) -> Snapshot<CrmPipelineCard> {
        Arc::clone(&self.cards)
    }

    fn narratives(&self) -> Snapshot<EmergingNarrative> {
        Arc::clone(&self.narratives)
    }

    fn activities(&self) -> Snapshot<Activity> {
        Arc::clone(&self.activities)
    }

    fn mentions(&self) -> Snapshot<Mention> {
        Arc::clone(&self.mentions)
    }

    fn update_card(&mut self, id: &str, patch: CardPatch) -> Result<CrmPipelineCard, Self::Error> {
        let mut next = self.cards.to_vec();
        let updated = pipeline::apply_patch(&mut next, id, &patch)
            .ok_or_else(|| StoreError::NotFound(format!("card {}", id)))?;
        updated.validate().map_err(StoreError::InvalidData)?;

        if patch.is_empty() {
            return Ok(updated);
        }

        self.replace_cards(next);
        info!(card = id, stage = %updated.stage, revision = self.revision, "card updated");
        Ok(updated)
    }

    fn on_reorder_requested(&mut self, item_id: &str, destination_group_id: &str) -> MoveOutcome {
        let mut next = self.cards.to_vec();
        let outcome = pipeline::apply_move(&mut next, item_id, destination_group_id);

        match &outcome {
            MoveOutcome::Moved { from, to } => {
                self.replace_cards(next);
                info!(card = item_id, %from, %to, revision = self.revision, "card moved");
            }
            MoveOutcome::Unchanged(stage) => {
                debug!(card = item_id, %stage, "card already in stage");
            }
            MoveOutcome::UnknownCard => {
                warn!(card = item_id, "move ignored: unknown card");
            }
            MoveOutcome::UnknownStage(stage) => {
                warn!(card = item_id, stage = %stage, "move ignored: unknown stage");
            }
        }
        outcome
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
