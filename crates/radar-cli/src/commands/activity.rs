//! Activity feed command implementation.

use crate::cli::ActivityArgs;
use crate::error::Result;
use crate::output::Formatter;
use chrono::{DateTime, Utc};
use radar_domain::{insights, DashboardStore};
use radar_store::MemoryStore;

/// Render the newest activity, with times relative to `now`.
pub fn render_activity(
    args: &ActivityArgs,
    store: &MemoryStore,
    now: DateTime<Utc>,
    formatter: &Formatter,
) -> Result<String> {
    let activities = store.activities();
    let feed = insights::activity_feed(&activities, args.limit);
    formatter.format_activity(&feed, now)
}

/// Execute the activity command.
pub fn execute_activity(args: ActivityArgs, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    println!("{}", render_activity(&args, store, Utc::now(), formatter)?);
    Ok(())
}
