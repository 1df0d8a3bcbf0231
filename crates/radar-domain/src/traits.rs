//! Trait definitions for external interactions
//!
//! The entity collection is injected into the engines through this trait
//! instead of living in ambient global state. Implementations live in other
//! crates (radar-store).

use crate::pipeline::MoveOutcome;
use crate::{
    Activity, Campaign, CardPatch, CrmPipelineCard, EmergingNarrative, Mention, Politician,
};
use std::sync::Arc;

/// Immutable view of one entity collection
///
/// A snapshot never changes after it is handed out; mutations replace the
/// whole collection instead.
pub type Snapshot<T> = Arc<Vec<T>>;

/// Read/write access to the dashboard's entity collections
///
/// Implemented by the infrastructure layer (radar-store)
pub trait DashboardStore {
    /// Error type for store operations
    type Error;

    /// Current politician roster
    fn politicians(&self) -> Snapshot<Politician>;

    /// Current campaigns
    fn campaigns(&self) -> Snapshot<Campaign>;

    /// Current CRM pipeline cards
    fn cards(&self) -> Snapshot<CrmPipelineCard>;

    /// Current emerging narratives
    fn narratives(&self) -> Snapshot<EmergingNarrative>;

    /// Current activity feed entries
    fn activities(&self) -> Snapshot<Activity>;

    /// Current mentions
    fn mentions(&self) -> Snapshot<Mention>;

    /// Apply a partial update to one card
    ///
    /// Returns the updated card.
    fn update_card(&mut self, id: &str, patch: CardPatch) -> Result<CrmPipelineCard, Self::Error>;

    /// Handle a completed drag: move `item_id` into the column `destination_group_id`
    ///
    /// Unknown destinations and unknown items are no-ops, reported through
    /// the returned outcome rather than an error.
    fn on_reorder_requested(&mut self, item_id: &str, destination_group_id: &str) -> MoveOutcome;

    /// Counter bumped by every effective mutation
    ///
    /// Views compare it with the value they last rendered to know when to
    /// recompute.
    fn revision(&self) -> u64;
}
