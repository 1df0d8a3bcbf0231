//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use radar_domain::roster::StatusFilter;
use radar_domain::{NarrativeSentiment, NarrativeStatus, PoliticianStatus};
use std::path::PathBuf;

/// Radar CLI - Campaign intelligence dashboard in the terminal.
#[derive(Debug, Parser)]
#[command(name = "radar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// JSON fixture file to load instead of the configured one
    #[arg(long, global = true, env = "RADAR_FIXTURES")]
    pub fixtures: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the politician roster
    Roster(RosterArgs),

    /// Show the CRM pipeline board
    Pipeline(PipelineArgs),

    /// Move a pipeline card to another stage
    Move(MoveArgs),

    /// Rank emerging narratives by impact
    Narratives(NarrativesArgs),

    /// Show the recent activity feed
    Activity(ActivityArgs),

    /// Break down a politician's mentions by sentiment
    Sentiment(SentimentArgs),

    /// List campaigns
    Campaigns(CampaignsArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the roster command.
#[derive(Debug, Clone, Default, Parser)]
pub struct RosterArgs {
    /// Case-insensitive text matched against name, position and party
    #[arg(short, long)]
    pub search: Option<String>,

    /// Filter by status
    #[arg(long, value_enum, default_value = "all")]
    pub status: StatusArg,

    /// Filter by party acronym (exact match, "all" for any)
    #[arg(short, long)]
    pub party: Option<String>,

    /// Sort field (name, party, position, status, score, trend, plan, contract_start, last_analysis)
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Layout of the roster
    #[arg(short, long, value_enum, default_value = "table")]
    pub view: ViewArg,

    /// Page to show (1-based)
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Rows per page (0 shows everything)
    #[arg(long)]
    pub page_size: Option<usize>,
}

/// Arguments for the pipeline command.
#[derive(Debug, Clone, Default, Parser)]
pub struct PipelineArgs {
    /// List the cards of a single stage
    #[arg(short, long)]
    pub stage: Option<String>,

    /// Only cards linked to this politician id
    #[arg(short, long)]
    pub politician: Option<String>,
}

/// Arguments for the move command.
#[derive(Debug, Clone, Parser)]
pub struct MoveArgs {
    /// Card to move
    pub card_id: String,

    /// Destination stage (e.g. lead, negotiation, active_client)
    pub stage: String,
}

/// Arguments for the narratives command.
#[derive(Debug, Clone, Default, Parser)]
pub struct NarrativesArgs {
    /// Filter by lifecycle status
    #[arg(long, value_enum)]
    pub status: Option<NarrativeStatusArg>,

    /// Filter by sentiment
    #[arg(long, value_enum)]
    pub sentiment: Option<NarrativeSentimentArg>,

    /// Maximum number of results
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the activity command.
#[derive(Debug, Clone, Parser)]
pub struct ActivityArgs {
    /// Maximum number of entries
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Arguments for the sentiment command.
#[derive(Debug, Clone, Parser)]
pub struct SentimentArgs {
    /// Politician id
    pub politician_id: String,
}

/// Arguments for the campaigns command.
#[derive(Debug, Clone, Default, Parser)]
pub struct CampaignsArgs {
    /// Only campaigns for this politician id
    #[arg(short, long)]
    pub politician: Option<String>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Write the default configuration file
    Init,

    /// Change one setting
    Set {
        /// Setting name (color, format, history_size, page_size, fixtures)
        key: String,
        /// New value
        value: String,
    },
}

/// Roster status argument.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum StatusArg {
    /// Any status
    #[default]
    All,
    /// Active politicians
    Active,
    /// Inactive politicians
    Inactive,
    /// Suspended politicians
    Suspended,
}

/// Roster layout argument.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewArg {
    /// One row per politician
    #[default]
    Table,
    /// One card per politician
    Grid,
}

/// Narrative status argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum NarrativeStatusArg {
    /// Just detected
    Emerging,
    /// Gaining traction
    Trending,
    /// Losing traction
    Declining,
    /// No longer discussed
    Resolved,
}

/// Narrative sentiment argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum NarrativeSentimentArg {
    /// Favourable
    Positive,
    /// Unfavourable
    Negative,
    /// Split opinion
    Mixed,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<StatusArg> for StatusFilter {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::All => StatusFilter::All,
            StatusArg::Active => StatusFilter::Only(PoliticianStatus::Active),
            StatusArg::Inactive => StatusFilter::Only(PoliticianStatus::Inactive),
            StatusArg::Suspended => StatusFilter::Only(PoliticianStatus::Suspended),
        }
    }
}

impl From<NarrativeStatusArg> for NarrativeStatus {
    fn from(status: NarrativeStatusArg) -> Self {
        match status {
            NarrativeStatusArg::Emerging => NarrativeStatus::Emerging,
            NarrativeStatusArg::Trending => NarrativeStatus::Trending,
            NarrativeStatusArg::Declining => NarrativeStatus::Declining,
            NarrativeStatusArg::Resolved => NarrativeStatus::Resolved,
        }
    }
}

impl From<NarrativeSentimentArg> for NarrativeSentiment {
    fn from(sentiment: NarrativeSentimentArg) -> Self {
        match sentiment {
            NarrativeSentimentArg::Positive => NarrativeSentiment::Positive,
            NarrativeSentimentArg::Negative => NarrativeSentiment::Negative,
            NarrativeSentimentArg::Mixed => NarrativeSentiment::Mixed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::parse_from(["radar"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_roster_command() {
        let cli = Cli::parse_from([
            "radar", "roster", "--search", "ana", "--status", "active", "--sort", "score", "--desc",
        ]);
        match cli.command {
            Some(Command::Roster(args)) => {
                assert_eq!(args.search.as_deref(), Some("ana"));
                assert!(matches!(args.status, StatusArg::Active));
                assert_eq!(args.sort.as_deref(), Some("score"));
                assert!(args.desc);
                assert_eq!(args.view, ViewArg::Table);
                assert_eq!(args.page, 1);
            }
            _ => panic!("Expected Roster command"),
        }
    }

    #[test]
    fn test_move_command() {
        let cli = Cli::parse_from(["radar", "--format", "json", "move", "card-1", "negotiation"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Some(Command::Move(args)) => {
                assert_eq!(args.card_id, "card-1");
                assert_eq!(args.stage, "negotiation");
            }
            _ => panic!("Expected Move command"),
        }
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(Cli::try_parse_from(["radar", "roster", "--status", "retired"]).is_err());
    }

    #[test]
    fn test_status_conversion() {
        let filter: StatusFilter = StatusArg::Suspended.into();
        assert_eq!(filter, StatusFilter::Only(PoliticianStatus::Suspended));
        assert_eq!(StatusFilter::from(StatusArg::All), StatusFilter::All);
    }
}
