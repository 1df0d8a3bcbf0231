//! Pipeline board command implementation.

use crate::cli::PipelineArgs;
use crate::commands::stage_name;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use radar_domain::{insights, pipeline, CrmPipelineCard, DashboardStore, Stage};
use radar_store::MemoryStore;

/// Render the board, or a single column when a stage is given.
///
/// With a politician id only the cards linked to that politician are shown.
pub fn render_pipeline(args: &PipelineArgs, store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let snapshot = store.cards();
    let cards: Vec<CrmPipelineCard> = match &args.politician {
        Some(id) => insights::cards_for(&snapshot, id).into_iter().cloned().collect(),
        None => snapshot.to_vec(),
    };
    let columns = pipeline::board(&cards);

    match &args.stage {
        Some(name) => {
            let stage = Stage::parse(&stage_name(name))
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown stage: {}", name)))?;
            let column = columns
                .iter()
                .find(|c| c.stage == stage)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown stage: {}", name)))?;
            formatter.format_stage(column)
        }
        None => formatter.format_board(&columns, &pipeline::summarize(&cards)),
    }
}

/// Execute the pipeline command.
pub fn execute_pipeline(args: PipelineArgs, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    println!("{}", render_pipeline(&args, store, formatter)?);
    Ok(())
}
