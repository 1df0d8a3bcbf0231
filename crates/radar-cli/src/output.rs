//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use chrono::{DateTime, Utc};
use colored::*;
use radar_domain::format::{self, Tone, EMPTY_VALUE};
use radar_domain::insights::SentimentBreakdown;
use radar_domain::pipeline::{PipelineSummary, StageColumn};
use radar_domain::roster::{Page, RosterSummary};
use radar_domain::{
    Activity, Campaign, CrmPipelineCard, EmergingNarrative, MoveOutcome, Politician, Sentiment,
};
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format one page of the roster with the summary of the whole view.
    pub fn format_roster(
        &self,
        page: &Page<&Politician>,
        summary: &RosterSummary,
        grid: bool,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "politicians": page.items,
                "page": page.page,
                "total_pages": page.total_pages,
                "summary": {
                    "total": summary.total,
                    "active": summary.active,
                    "average_score": summary.average_score,
                    "average_trend": summary.average_trend,
                },
            }))?),
            OutputFormat::Quiet => Ok(ids(page.items.iter().map(|p| p.id.as_str()))),
            OutputFormat::Table => {
                if page.items.is_empty() {
                    return Ok(self.colorize("No politicians found.", "yellow"));
                }
                let body = if grid {
                    self.roster_grid(&page.items)
                } else {
                    roster_table(&page.items)
                };
                Ok(format!("{}\n{}", body, self.roster_footer(page, summary)))
            }
        }
    }

    fn roster_grid(&self, politicians: &[&Politician]) -> String {
        politicians
            .iter()
            .map(|p| {
                let contract = match &p.contract {
                    Some(c) => format!("{} desde {}", c.plan.as_str(), format::format_date(c.start_date)),
                    None => "sem contrato".to_string(),
                };
                format!(
                    "{} ({}) · {}\n  {}  Score {}  {}\n  {}  Última análise: {}",
                    self.colorize(&p.name, "cyan"),
                    p.party,
                    p.position,
                    self.tone(p.status.label(), format::status_tone(p.status)),
                    self.tone(&format!("{:.1}", p.score), format::score_tone(p.score)),
                    self.tone(&format::format_percentage(p.trend, true), format::trend_tone(p.trend)),
                    contract,
                    p.last_analysis.map_or_else(|| EMPTY_VALUE.to_string(), format::format_date_time),
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn roster_footer(&self, page: &Page<&Politician>, summary: &RosterSummary) -> String {
        let average_score = summary
            .average_score
            .map_or_else(|| EMPTY_VALUE.to_string(), |s| format!("{:.1}", s));
        let average_trend = summary
            .average_trend
            .map_or_else(|| EMPTY_VALUE.to_string(), |t| format::format_percentage(t, true));
        self.info(&format!(
            "Página {} de {} · {} políticos · {} ativos · score médio {} · tendência média {}",
            page.page, page.total_pages, summary.total, summary.active, average_score, average_trend
        ))
    }

    /// Format the full pipeline board.
    pub fn format_board(&self, columns: &[StageColumn<'_>], summary: &PipelineSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let stages: Vec<_> = columns
                    .iter()
                    .map(|c| {
                        json!({
                            "stage": c.stage,
                            "label": c.stage.label(),
                            "count": c.count(),
                            "total": c.total,
                            "weighted": c.weighted,
                            "cards": c.cards,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json!({
                    "stages": stages,
                    "summary": {
                        "open_cards": summary.open_cards,
                        "open_value": summary.open_value,
                        "weighted_forecast": summary.weighted_forecast,
                        "won_cards": summary.won_cards,
                        "won_value": summary.won_value,
                        "lost_cards": summary.lost_cards,
                        "win_rate": summary.win_rate(),
                    },
                }))?)
            }
            OutputFormat::Quiet => Ok(columns
                .iter()
                .map(|c| format!("{}\t{}", c.stage.as_str(), c.count()))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Etapa", "Cards", "Total", "Ponderado"]);
                for column in columns {
                    builder.push_record([
                        column.stage.label().to_string(),
                        column.count().to_string(),
                        format::format_currency(column.total),
                        format::format_currency(column.weighted),
                    ]);
                }
                let win_rate = summary
                    .win_rate()
                    .map_or_else(|| EMPTY_VALUE.to_string(), |r| format::format_percentage(r, false));
                Ok(format!(
                    "{}\n{}",
                    styled(builder),
                    self.info(&format!(
                        "Em aberto: {} cards · {} · previsão {} | Clientes: {} · {} | Perdidos: {} | Conversão: {}",
                        summary.open_cards,
                        format::format_currency(summary.open_value),
                        format::format_currency(summary.weighted_forecast),
                        summary.won_cards,
                        format::format_currency(summary.won_value),
                        summary.lost_cards,
                        win_rate,
                    ))
                ))
            }
        }
    }

    /// Format the cards of a single stage column.
    pub fn format_stage(&self, column: &StageColumn<'_>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&column.cards)?),
            OutputFormat::Quiet => Ok(ids(column.cards.iter().map(|c| c.id.as_str()))),
            OutputFormat::Table => {
                let heading = format!(
                    "{} · {} cards · {}",
                    column.stage.label(),
                    column.count(),
                    format::format_currency(column.total)
                );
                if column.cards.is_empty() {
                    return Ok(format!("{}\n{}", self.info(&heading), self.colorize("No cards in this stage.", "yellow")));
                }
                Ok(format!("{}\n{}", self.info(&heading), cards_table(&column.cards)))
            }
        }
    }

    /// Format the result of a stage move.
    pub fn format_move(&self, card_id: &str, outcome: &MoveOutcome) -> Result<String> {
        if let OutputFormat::Json = self.format {
            let value = match outcome {
                MoveOutcome::Moved { from, to } => {
                    json!({ "card": card_id, "outcome": "moved", "from": from, "to": to })
                }
                MoveOutcome::Unchanged(stage) => {
                    json!({ "card": card_id, "outcome": "unchanged", "stage": stage })
                }
                MoveOutcome::UnknownCard => json!({ "card": card_id, "outcome": "unknown_card" }),
                MoveOutcome::UnknownStage(stage) => {
                    json!({ "card": card_id, "outcome": "unknown_stage", "stage": stage })
                }
            };
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(match outcome {
            MoveOutcome::Moved { from, to } => {
                self.success(&format!("{}: {} → {}", card_id, from.label(), to.label()))
            }
            MoveOutcome::Unchanged(stage) => {
                self.info(&format!("{} already in {}", card_id, stage.label()))
            }
            MoveOutcome::UnknownCard => self.warning(&format!("Unknown card: {}", card_id)),
            MoveOutcome::UnknownStage(stage) => self.warning(&format!("Unknown stage: {}", stage)),
        })
    }

    /// Format ranked narratives.
    pub fn format_narratives(&self, narratives: &[&EmergingNarrative]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(narratives)?),
            OutputFormat::Quiet => Ok(ids(narratives.iter().map(|n| n.id.as_str()))),
            OutputFormat::Table => {
                if narratives.is_empty() {
                    return Ok(self.colorize("No narratives found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["Impacto", "Narrativa", "Sentimento", "Status", "Velocidade", "Menções", "Crescimento", "Confiança"]);
                for n in narratives {
                    builder.push_record([
                        format!("{:.0}", n.impact_score),
                        n.title.clone(),
                        n.sentiment.as_str().to_string(),
                        n.status.as_str().to_string(),
                        n.velocity.as_str().to_string(),
                        format::format_number(n.mentions as f64),
                        format::format_percentage(n.growth_rate, true),
                        format::format_percentage(n.confidence * 100.0, false),
                    ]);
                }
                Ok(styled(builder))
            }
        }
    }

    /// Format the activity feed relative to `now`.
    pub fn format_activity(&self, feed: &[&Activity], now: DateTime<Utc>) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(feed)?),
            OutputFormat::Quiet => Ok(ids(feed.iter().map(|a| a.id.as_str()))),
            OutputFormat::Table => {
                if feed.is_empty() {
                    return Ok(self.colorize("No recent activity.", "yellow"));
                }
                Ok(feed
                    .iter()
                    .map(|a| {
                        let marker = match a.kind {
                            radar_domain::ActivityKind::Alert => self.colorize("!", "red"),
                            _ => self.colorize("•", "cyan"),
                        };
                        format!(
                            "{} {}  {}\n  {}",
                            marker,
                            a.title,
                            self.colorize(&format::format_relative_time(a.timestamp, now), "magenta"),
                            a.description
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

    /// Format a mention sentiment breakdown.
    pub fn format_sentiment(&self, subject: &str, breakdown: &SentimentBreakdown) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&json!({
                "politician": subject,
                "positive": breakdown.positive,
                "neutral": breakdown.neutral,
                "negative": breakdown.negative,
                "total": breakdown.total(),
                "net": breakdown.net(),
            }))?),
            OutputFormat::Quiet => Ok(format!(
                "{}\t{}\t{}",
                breakdown.positive, breakdown.neutral, breakdown.negative
            )),
            OutputFormat::Table => {
                if breakdown.total() == 0 {
                    return Ok(self.colorize(&format!("No mentions for {}.", subject), "yellow"));
                }
                let mut lines = vec![self.info(&format!("{} · {} menções", subject, breakdown.total()))];
                for (label, sentiment, count) in [
                    ("Positivas", Sentiment::Positive, breakdown.positive),
                    ("Neutras", Sentiment::Neutral, breakdown.neutral),
                    ("Negativas", Sentiment::Negative, breakdown.negative),
                ] {
                    let share = breakdown
                        .share(sentiment)
                        .map_or_else(|| EMPTY_VALUE.to_string(), |s| format::format_percentage(s, false));
                    lines.push(format!(
                        "  {:<10} {:>3}  {}",
                        label,
                        count,
                        self.tone(&share, format::sentiment_tone(sentiment))
                    ));
                }
                if let Some(net) = breakdown.net() {
                    let tone = format::trend_tone(net);
                    lines.push(format!("  Saldo      {}", self.tone(&format::format_percentage(net, true), tone)));
                }
                Ok(lines.join("\n"))
            }
        }
    }

    /// Format campaigns.
    pub fn format_campaigns(&self, campaigns: &[&Campaign]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(campaigns)?),
            OutputFormat::Quiet => Ok(ids(campaigns.iter().map(|c| c.id.as_str()))),
            OutputFormat::Table => {
                if campaigns.is_empty() {
                    return Ok(self.colorize("No campaigns found.", "yellow"));
                }
                let mut builder = Builder::default();
                builder.push_record(["ID", "Campanha", "Político", "Status", "Orçamento", "Gasto", "Alcance", "Período"]);
                for c in campaigns {
                    let usage = c
                        .budget_usage()
                        .map_or_else(|| EMPTY_VALUE.to_string(), |u| format::format_percentage(u * 100.0, false));
                    let period = match c.end_date {
                        Some(end) => format!("{} a {}", format::format_date(c.start_date), format::format_date(end)),
                        None => format!("desde {}", format::format_date(c.start_date)),
                    };
                    builder.push_record([
                        c.id.clone(),
                        c.name.clone(),
                        c.politician_id.clone(),
                        self.tone(c.status.as_str(), format::campaign_status_tone(c.status)),
                        format::format_currency(c.budget),
                        format!("{} ({})", format::format_currency(c.spent), usage),
                        format::format_number(c.reach as f64),
                        period,
                    ]);
                }
                Ok(styled(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text by semantic tone.
    pub fn tone(&self, text: &str, tone: Tone) -> String {
        let color = match tone {
            Tone::Positive => "green",
            Tone::Warning => "yellow",
            Tone::Negative => "red",
            Tone::Neutral => "",
        };
        self.colorize(text, color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

fn roster_table(politicians: &[&Politician]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Nome", "Partido", "Cargo", "Status", "Score", "Tendência", "Plano", "Última análise"]);

    for p in politicians {
        builder.push_record([
            p.id.clone(),
            p.name.clone(),
            p.party.clone(),
            p.position.clone(),
            p.status.label().to_string(),
            format!("{:.1}", p.score),
            format::format_percentage(p.trend, true),
            p.contract
                .as_ref()
                .map_or_else(|| EMPTY_VALUE.to_string(), |c| c.plan.as_str().to_string()),
            p.last_analysis
                .map_or_else(|| EMPTY_VALUE.to_string(), format::format_date_time),
        ]);
    }

    styled(builder)
}

fn cards_table(cards: &[&CrmPipelineCard]) -> String {
    let mut builder = Builder::default();
    builder.push_record(["ID", "Nome", "Partido", "Cargo", "Valor", "Prob.", "Próxima ação"]);

    for card in cards {
        let next = card.next_action.as_ref().map_or_else(
            || EMPTY_VALUE.to_string(),
            |a| match a.due_date {
                Some(due) => format!("{} ({})", a.description, format::format_date(due)),
                None => a.description.clone(),
            },
        );
        builder.push_record([
            card.id.clone(),
            card.name.clone(),
            card.party.clone(),
            card.position.clone(),
            card.proposal_value
                .map_or_else(|| EMPTY_VALUE.to_string(), format::format_currency),
            card.probability
                .map_or_else(|| EMPTY_VALUE.to_string(), |p| format::format_percentage(p, false)),
            next,
        ]);
    }

    styled(builder)
}

fn styled(builder: Builder) -> String {
    let mut table = builder.build();
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

fn ids<'a>(ids: impl Iterator<Item = &'a str>) -> String {
    ids.collect::<Vec<_>>().join("\n")
}
