//! Display formatting for the pt-BR dashboard
//!
//! Pure, stateless helpers that turn raw values into display strings and
//! semantic tones. The locale is fixed (pt-BR, BRL); there is no
//! configuration.

use crate::{CampaignStatus, NarrativeSentiment, PoliticianStatus, Sentiment};
use chrono::{DateTime, NaiveDate, Utc};

/// Relative-time bucket limits, in seconds
const MINUTE: i64 = 60;
const HOUR: i64 = 3_600;
const DAY: i64 = 86_400;
const THIRTY_DAYS: i64 = 2_592_000;

/// Placeholder for values that cannot be shown
pub const EMPTY_VALUE: &str = "—";

/// Largest amount of cents an `f64` holds exactly (2^53)
const MAX_CENTS: f64 = 9_007_199_254_740_992.0;

/// Format an amount of BRL, e.g. `1234.5` → `"R$ 1.234,50"`
///
/// Negative amounts are prefixed with `-`. Non-finite values, and amounts
/// beyond roughly R$ 90 trillion, render as "—".
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round();
    if !cents.is_finite() || cents > MAX_CENTS {
        return EMPTY_VALUE.to_string();
    }
    let cents = cents as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Format a percentage with one decimal
///
/// Positive values get a leading `+` only when `show_sign` is set;
/// negative values always carry their `-`.
pub fn format_percentage(value: f64, show_sign: bool) -> String {
    let sign = if show_sign && value > 0.0 { "+" } else { "" };
    format!("{}{:.1}%", sign, value)
}

/// Abbreviate large numbers: `2500000` → `"2.5M"`
///
/// Thresholds are 10^3 (K), 10^6 (M) and 10^9 (B) with one decimal.
/// Values below 1000 are printed unchanged.
pub fn format_number(value: f64) -> String {
    if value >= 1e9 {
        format!("{:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("{:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("{:.1}K", value / 1e3)
    } else {
        format!("{}", value)
    }
}

/// Format a calendar date as `dd/mm/yyyy`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a timestamp as `dd/mm/yyyy HH:MM` (UTC)
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y %H:%M").to_string()
}

/// Describe how long ago `then` was, relative to `now`
///
/// Buckets: under a minute is "agora mesmo", then minutes, hours and days;
/// from 30 days on the absolute date is shown. Timestamps in the future
/// also read "agora mesmo".
pub fn format_relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds();

    if elapsed < MINUTE {
        "agora mesmo".to_string()
    } else if elapsed < HOUR {
        ago(elapsed / MINUTE, "minuto", "minutos")
    } else if elapsed < DAY {
        ago(elapsed / HOUR, "hora", "horas")
    } else if elapsed < THIRTY_DAYS {
        ago(elapsed / DAY, "dia", "dias")
    } else {
        format_date(then.date_naive())
    }
}

fn ago(count: i64, singular: &str, plural: &str) -> String {
    let unit = if count == 1 { singular } else { plural };
    format!("há {} {}", count, unit)
}

fn group_thousands(mut value: u64) -> String {
    let mut groups = Vec::new();
    loop {
        if value < 1000 {
            groups.push(value.to_string());
            break;
        }
        groups.push(format!("{:03}", value % 1000));
        value /= 1000;
    }
    groups.reverse();
    groups.join(".")
}

/// Semantic colour classification of a displayed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Good news (green)
    Positive,
    /// Needs watching (yellow)
    Warning,
    /// Bad news (red)
    Negative,
    /// Nothing to flag (grey)
    Neutral,
}

impl Tone {
    /// Get the tone name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Warning => "warning",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }
}

/// Score at or above which a perception score reads as healthy
pub const HEALTHY_SCORE: f64 = 70.0;

/// Score at or above which a perception score reads as a warning
pub const WARNING_SCORE: f64 = 50.0;

/// Classify a perception score
pub fn score_tone(score: f64) -> Tone {
    if score >= HEALTHY_SCORE {
        Tone::Positive
    } else if score >= WARNING_SCORE {
        Tone::Warning
    } else {
        Tone::Negative
    }
}

/// Classify a signed trend
pub fn trend_tone(delta: f64) -> Tone {
    if delta > 0.0 {
        Tone::Positive
    } else if delta < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

/// Classify a mention sentiment
pub fn sentiment_tone(sentiment: Sentiment) -> Tone {
    match sentiment {
        Sentiment::Positive => Tone::Positive,
        Sentiment::Neutral => Tone::Neutral,
        Sentiment::Negative => Tone::Negative,
    }
}

/// Classify a narrative sentiment
pub fn narrative_sentiment_tone(sentiment: NarrativeSentiment) -> Tone {
    match sentiment {
        NarrativeSentiment::Positive => Tone::Positive,
        NarrativeSentiment::Mixed => Tone::Warning,
        NarrativeSentiment::Negative => Tone::Negative,
    }
}

/// Classify a roster status badge
pub fn status_tone(status: PoliticianStatus) -> Tone {
    match status {
        PoliticianStatus::Active => Tone::Positive,
        PoliticianStatus::Inactive => Tone::Neutral,
        PoliticianStatus::Suspended => Tone::Negative,
    }
}

/// Classify a campaign status badge
pub fn campaign_status_tone(status: CampaignStatus) -> Tone {
    match status {
        CampaignStatus::Active => Tone::Positive,
        CampaignStatus::Paused => Tone::Warning,
        CampaignStatus::Draft | CampaignStatus::Completed => Tone::Neutral,
    }
}
