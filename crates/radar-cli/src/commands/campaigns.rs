//! Campaigns command implementation.

use crate::cli::CampaignsArgs;
use crate::error::Result;
use crate::output::Formatter;
use radar_domain::{insights, DashboardStore};
use radar_store::MemoryStore;

/// Render campaigns, optionally for one politician.
pub fn render_campaigns(args: &CampaignsArgs, store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let campaigns = store.campaigns();
    let selected = match &args.politician {
        Some(id) => insights::campaigns_for(&campaigns, id),
        None => campaigns.iter().collect(),
    };
    formatter.format_campaigns(&selected)
}

/// Execute the campaigns command.
pub fn execute_campaigns(args: CampaignsArgs, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    println!("{}", render_campaigns(&args, store, formatter)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_filter_by_politician() {
        let store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = CampaignsArgs {
            politician: Some("pol-3".to_string()),
        };
        assert_eq!(render_campaigns(&args, &store, &formatter).unwrap(), "camp-2");
    }

    #[test]
    fn test_table_shows_budget_usage() {
        let store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = render_campaigns(&CampaignsArgs::default(), &store, &formatter).unwrap();
        assert!(output.contains("Saúde em Primeiro Lugar"));
        assert!(output.contains("R$ 62.000,00 (41.3%)"));
        assert!(output.contains("desde 01/08/2025"));
        assert!(output.contains("paused"));
    }
}
