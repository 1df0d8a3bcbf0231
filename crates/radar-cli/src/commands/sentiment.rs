//! Sentiment command implementation.

use crate::cli::SentimentArgs;
use crate::error::Result;
use crate::output::Formatter;
use radar_domain::{insights, DashboardStore};
use radar_store::MemoryStore;

/// Render the mention breakdown for one politician.
///
/// Ids that are not on the roster are shown as-is; mentions may refer to them.
pub fn render_sentiment(args: &SentimentArgs, store: &MemoryStore, formatter: &Formatter) -> Result<String> {
    let subject = store
        .politician(&args.politician_id)
        .map_or_else(|| args.politician_id.clone(), |p| p.name);
    let breakdown = insights::sentiment_breakdown(&store.mentions(), &args.politician_id);
    formatter.format_sentiment(&subject, &breakdown)
}

/// Execute the sentiment command.
pub fn execute_sentiment(args: SentimentArgs, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    println!("{}", render_sentiment(&args, store, formatter)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_breakdown_for_known_politician() {
        let store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let args = SentimentArgs {
            politician_id: "pol-1".to_string(),
        };
        let output = render_sentiment(&args, &store, &formatter).unwrap();
        assert!(output.contains("Ana Silva · 4 menções"));
        assert!(output.contains("+25.0%"));
    }

    #[test]
    fn test_unknown_politician_has_no_mentions() {
        let store = MemoryStore::demo().unwrap();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let args = SentimentArgs {
            politician_id: "pol-404".to_string(),
        };
        assert_eq!(render_sentiment(&args, &store, &formatter).unwrap(), "0\t0\t0");
    }
}
