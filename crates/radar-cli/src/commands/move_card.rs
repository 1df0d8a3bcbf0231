//! Move command implementation.

use crate::cli::{MoveArgs, PipelineArgs};
use crate::commands::pipeline::render_pipeline;
use crate::commands::stage_name;
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::Formatter;
use radar_domain::{DashboardStore, MoveOutcome};
use radar_store::MemoryStore;

/// Request a stage transition and render its outcome.
///
/// Unknown cards and stages are reported, not treated as errors; the store
/// is left untouched in both cases. In table format a successful move is
/// followed by the updated board.
pub fn render_move(args: &MoveArgs, store: &mut MemoryStore, formatter: &Formatter) -> Result<(MoveOutcome, String)> {
    let outcome = store.on_reorder_requested(&args.card_id, &stage_name(&args.stage));
    let mut message = formatter.format_move(&args.card_id, &outcome)?;

    if outcome.is_moved() && formatter.format() == OutputFormat::Table {
        let board = render_pipeline(&PipelineArgs::default(), store, formatter)?;
        message = format!("{}\n{}", message, board);
    }
    Ok((outcome, message))
}

/// Execute the move command.
pub fn execute_move(args: MoveArgs, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    let (_, message) = render_move(&args, store, formatter)?;
    println!("{}", message);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use radar_domain::Stage;

    fn args(card_id: &str, stage: &str) -> MoveArgs {
        MoveArgs {
            card_id: card_id.to_string(),
            stage: stage.to_string(),
        }
    }

    #[test]
    fn test_move_updates_store() {
        let mut store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let (outcome, message) = render_move(&args("card-3", "proposal_sent"), &mut store, &formatter).unwrap();
        assert!(outcome.is_moved());
        assert!(message.starts_with("✓ card-3: Qualificação → Proposta Enviada\n"));
        assert!(message.contains("Coleta de Documentos"));
        assert_eq!(store.card("card-3").unwrap().stage, Stage::ProposalSent);
    }

    #[test]
    fn test_typed_stage_is_normalized() {
        let mut store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let (outcome, _) = render_move(&args("card-1", "Active-Client"), &mut store, &formatter).unwrap();
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Stage::Lead,
                to: Stage::ActiveClient
            }
        );
    }

    #[test]
    fn test_unknown_stage_reported() {
        let mut store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let (outcome, message) = render_move(&args("card-3", "closed"), &mut store, &formatter).unwrap();
        assert_eq!(outcome, MoveOutcome::UnknownStage("closed".to_string()));
        assert!(message.contains("Unknown stage"));
        assert_eq!(store.revision(), 0);
    }
}
