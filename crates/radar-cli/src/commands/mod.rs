//! Command implementations.

pub mod activity;
pub mod campaigns;
pub mod config;
pub mod move_card;
pub mod narratives;
pub mod pipeline;
pub mod roster;
pub mod sentiment;

pub use self::activity::execute_activity;
pub use self::campaigns::execute_campaigns;
pub use self::config::execute_config;
pub use self::move_card::execute_move;
pub use self::narratives::execute_narratives;
pub use self::pipeline::execute_pipeline;
pub use self::roster::execute_roster;
pub use self::sentiment::execute_sentiment;

use crate::error::Result;
use radar_store::MemoryStore;
use std::path::Path;
use tracing::debug;

/// Open the entity store from a fixture file, or the demo seed when none is given.
pub fn open_store(fixtures: Option<&Path>) -> Result<MemoryStore> {
    match fixtures {
        Some(path) => {
            debug!(path = %path.display(), "loading fixtures");
            Ok(MemoryStore::load(path)?)
        }
        None => {
            debug!("loading demo seed");
            Ok(MemoryStore::demo()?)
        }
    }
}

/// Normalize a stage typed on the command line to its canonical name.
///
/// The store only accepts exact snake_case names; users may type
/// `Active-Client` or `NEGOTIATION`.
pub fn stage_name(input: &str) -> String {
    input.trim().to_lowercase().replace('-', "_")
}
