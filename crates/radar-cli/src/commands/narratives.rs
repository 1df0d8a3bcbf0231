//! Narratives command implementation.

use crate::cli::NarrativesArgs;
use crate::error::Result;
use crate::output::Formatter;
use radar_domain::insights::{self, NarrativeFilter};
use radar_domain::DashboardStore;
use radar_store::MemoryStore;

/// Render narratives ranked by impact.
pub fn render_narratives(args: &NarrativesArgs, store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let filter = NarrativeFilter {
        status: args.status.map(Into::into),
        sentiment: args.sentiment.map(Into::into),
    };

    let narratives = store.narratives();
    let mut ranked = insights::rank_narratives(&narratives, &filter);
    if let Some(limit) = args.limit {
        ranked.truncate(limit);
    }

    formatter.format_narratives(&ranked)
}

/// Execute the narratives command.
pub fn execute_narratives(args: NarrativesArgs, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    println!("{}", render_narratives(&args, store, formatter)?);
    Ok(())
}
