//! Roster command implementation.

use crate::cli::{RosterArgs, ViewArg};
use crate::error::Result;
use crate::output::Formatter;
use radar_domain::roster::{self, PartyFilter, RosterQuery, SortDirection, SortKey};
use radar_domain::DashboardStore;
use radar_store::MemoryStore;
use tracing::warn;

/// Build the roster query described by the arguments.
pub fn build_query(args: &RosterArgs) -> RosterQuery {
    let mut query = RosterQuery::new().status(args.status.into());

    if let Some(search) = &args.search {
        query = query.search(search.as_str());
    }

    if let Some(party) = &args.party {
        query = query.party(PartyFilter::parse(party));
    }

    if let Some(field) = &args.sort {
        let direction = if args.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        if SortKey::parse(field).is_none() {
            warn!(field = %field, "unknown sort field, keeping roster order");
        }
        query = query.sorted_by_field(field, direction);
    }

    query
}

/// The requested party when it is not on the roster.
pub fn unknown_party<'a>(query: &'a RosterQuery, known: &[String]) -> Option<&'a str> {
    match &query.party {
        PartyFilter::Only(party) if !known.contains(party) => Some(party.as_str()),
        _ => None,
    }
}

/// Render the roster view.
pub fn render_roster(
    args: &RosterArgs,
    store: &MemoryStore,
    page_size: usize,
    formatter: &Formatter,
) -> Result<String> {
    let politicians = store.politicians();
    let query = build_query(args);
    let known = roster::parties(&politicians);
    if let Some(party) = unknown_party(&query, &known) {
        warn!(party = %party, known = %known.join(", "), "party not on the roster");
    }
    let view = roster::query(&politicians, &query);
    let summary = roster::summarize(&view);
    let page = roster::paginate(&view, args.page, args.page_size.unwrap_or(page_size));

    formatter.format_roster(&page, &summary, args.view == ViewArg::Grid)
}

/// Execute the roster command.
pub fn execute_roster(
    args: RosterArgs,
    store: &MemoryStore,
    page_size: usize,
    formatter: &Formatter,
) -> Result<()> {
    println!("{}", render_roster(&args, store, page_size, formatter)?);
    Ok(())
}
