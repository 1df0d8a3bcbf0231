//! Radar Domain Layer
//!
//! This crate contains the domain model and derived-view logic for the Radar
//! campaign-intelligence dashboard. It performs no I/O and defines the
//! entity types, the engines that turn entity collections into views, and the
//! store trait that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Roster**: the full collection of monitored politicians
//! - **Perception score**: a 0–100 reputation metric per politician
//! - **Stage**: one of eight CRM pipeline columns a prospect card occupies
//! - **Narrative**: a trending topic detected by sentiment analysis
//!
//! ## Engines
//!
//! - [`roster`]: filter / sort / summarize the roster
//! - [`pipeline`]: group cards by stage, aggregate columns, apply moves
//! - [`insights`]: narrative ranking, sentiment breakdown, activity feed
//! - [`format`]: pt-BR display strings and semantic tones
//!
//! ## Architecture
//!
//! - Dependencies limited to `chrono` (dates) and `serde` (fixture format)
//! - Every engine is a pure function of its inputs
//! - Storage implementations live in other crates behind [`traits::DashboardStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod activity;
pub mod campaign;
pub mod card;
pub mod format;
pub mod insights;
pub mod mention;
pub mod narrative;
pub mod pipeline;
pub mod politician;
pub mod roster;
pub mod stage;
pub mod traits;

// Re-exports for convenience
pub use activity::{Activity, ActivityKind};
pub use campaign::{Campaign, CampaignStatus};
pub use card::{CardPatch, CrmPipelineCard, NextAction};
pub use mention::{Mention, Sentiment};
pub use narrative::{EmergingNarrative, NarrativeSentiment, NarrativeStatus, Velocity};
pub use pipeline::MoveOutcome;
pub use politician::{Contract, PlanTier, Politician, PoliticianStatus};
pub use stage::Stage;
pub use traits::{DashboardStore, Snapshot};
