//! Roster query engine
//!
//! Derives the filtered, ordered view of the politician roster shown by the
//! table and grid views, plus the summary statistics over that view.
//!
//! Everything here is a pure function of its inputs. The view is recomputed
//! from the full roster whenever the query parameters change.

use crate::{Politician, PoliticianStatus};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    /// Smallest first
    #[default]
    Asc,
    /// Largest first
    Desc,
}

/// Field the roster can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Full name
    Name,
    /// Party acronym
    Party,
    /// Office
    Position,
    /// Roster status
    Status,
    /// Perception score
    Score,
    /// Score trend
    Trend,
    /// Contract plan (absent for prospects)
    Plan,
    /// Contract start date (absent for prospects)
    ContractStart,
    /// Last analysis timestamp (absent when never analysed)
    LastAnalysis,
}

impl SortKey {
    /// Get the field name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Party => "party",
            SortKey::Position => "position",
            SortKey::Status => "status",
            SortKey::Score => "score",
            SortKey::Trend => "trend",
            SortKey::Plan => "plan",
            SortKey::ContractStart => "contract_start",
            SortKey::LastAnalysis => "last_analysis",
        }
    }

    /// Parse a field name; unknown fields yield `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "name" => Some(SortKey::Name),
            "party" => Some(SortKey::Party),
            "position" => Some(SortKey::Position),
            "status" => Some(SortKey::Status),
            "score" => Some(SortKey::Score),
            "trend" => Some(SortKey::Trend),
            "plan" => Some(SortKey::Plan),
            "contract_start" => Some(SortKey::ContractStart),
            "last_analysis" => Some(SortKey::LastAnalysis),
            _ => None,
        }
    }
}

/// Status constraint; `All` is the "no constraint" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Any status
    #[default]
    All,
    /// Only this status
    Only(PoliticianStatus),
}

impl StatusFilter {
    /// Parse `"all"` or a status name
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Some(StatusFilter::All);
        }
        PoliticianStatus::parse(s).map(StatusFilter::Only)
    }

    fn matches(&self, status: PoliticianStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

/// Party constraint; `All` is the "no constraint" sentinel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PartyFilter {
    /// Any party
    #[default]
    All,
    /// Exactly this party acronym
    Only(String),
}

impl PartyFilter {
    /// Parse `"all"` or a party acronym
    pub fn parse(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("all") {
            PartyFilter::All
        } else {
            PartyFilter::Only(s.trim().to_string())
        }
    }

    fn matches(&self, party: &str) -> bool {
        match self {
            PartyFilter::All => true,
            PartyFilter::Only(expected) => expected == party,
        }
    }
}

/// Query parameters held by a roster view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RosterQuery {
    /// Case-insensitive substring matched against name, position or party
    pub search: String,
    /// Status constraint
    pub status: StatusFilter,
    /// Party constraint
    pub party: PartyFilter,
    /// Sort field; `None` keeps roster order
    pub sort: Option<SortKey>,
    /// Sort direction
    pub direction: SortDirection,
}

impl RosterQuery {
    /// Create an unconstrained, unsorted query
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    /// Set the status filter
    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Set the party filter
    pub fn party(mut self, party: PartyFilter) -> Self {
        self.party = party;
        self
    }

    /// Sort by a known field
    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort = Some(key);
        self.direction = direction;
        self
    }

    /// Sort by a field name
    ///
    /// Unknown names clear the sort so the view keeps roster order.
    pub fn sorted_by_field(mut self, field: &str, direction: SortDirection) -> Self {
        self.sort = SortKey::parse(field);
        self.direction = direction;
        self
    }

    /// Whether a politician satisfies every active filter
    pub fn matches(&self, politician: &Politician) -> bool {
        self.matches_search(politician)
            && self.status.matches(politician.status)
            && self.party.matches(&politician.party)
    }

    fn matches_search(&self, politician: &Politician) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&politician.name, &politician.position, &politician.party]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Run a query against the roster
///
/// Returns the matching politicians ordered by the query's sort key.
/// The sort is stable: politicians with equal keys keep roster order.
pub fn query<'a>(roster: &'a [Politician], query: &RosterQuery) -> Vec<&'a Politician> {
    let mut view: Vec<&Politician> = roster.iter().filter(|p| query.matches(p)).collect();
    if let Some(key) = query.sort {
        sort_view(&mut view, key, query.direction);
    }
    view
}

/// Order a view in place by one field
///
/// Absent values go last in both directions.
pub fn sort_view(view: &mut [&Politician], key: SortKey, direction: SortDirection) {
    view.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(a: &Politician, b: &Politician, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::Name => nulls_last(Some(a.name.to_lowercase()), Some(b.name.to_lowercase()), direction),
        SortKey::Party => nulls_last(Some(a.party.to_lowercase()), Some(b.party.to_lowercase()), direction),
        SortKey::Position => nulls_last(
            Some(a.position.to_lowercase()),
            Some(b.position.to_lowercase()),
            direction,
        ),
        SortKey::Status => nulls_last(Some(a.status), Some(b.status), direction),
        SortKey::Score => nulls_last(number(a.score), number(b.score), direction),
        SortKey::Trend => nulls_last(number(a.trend), number(b.trend), direction),
        SortKey::Plan => nulls_last(
            a.contract.as_ref().map(|c| c.plan),
            b.contract.as_ref().map(|c| c.plan),
            direction,
        ),
        SortKey::ContractStart => nulls_last(
            a.contract.as_ref().map(|c| c.start_date),
            b.contract.as_ref().map(|c| c.start_date),
            direction,
        ),
        SortKey::LastAnalysis => nulls_last(a.last_analysis, b.last_analysis, direction),
    }
}

/// NaN sorts with the absent values so the comparator stays a total order
fn number(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

fn nulls_last<T: PartialOrd>(a: Option<T>, b: Option<T>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => {
            let ordering = a.partial_cmp(&b).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Summary statistics over a (filtered) roster view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RosterSummary {
    /// Politicians in the view
    pub total: usize,
    /// Politicians with `active` status
    pub active: usize,
    /// Mean perception score; `None` for an empty view
    pub average_score: Option<f64>,
    /// Mean score trend; `None` for an empty view
    pub average_trend: Option<f64>,
}

/// Reduce a view to its summary statistics
///
/// Operates on the filtered view, not the full roster.
pub fn summarize(view: &[&Politician]) -> RosterSummary {
    let total = view.len();
    let active = view.iter().filter(|p| p.is_active()).count();
    let mean = |sum: f64| (total > 0).then(|| sum / total as f64);

    RosterSummary {
        total,
        active,
        average_score: mean(view.iter().map(|p| p.score).sum()),
        average_trend: mean(view.iter().map(|p| p.trend).sum()),
    }
}

/// Distinct party acronyms on the roster, sorted
pub fn parties(roster: &[Politician]) -> Vec<String> {
    roster
        .iter()
        .map(|p| p.party.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// One page of a view
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// 1-based page number actually served
    pub page: usize,
    /// Requested page size (0 = everything on one page)
    pub page_size: usize,
    /// Items across all pages
    pub total_items: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
}

/// Cut one page out of a view
///
/// Pages are 1-based. Out-of-range page numbers are clamped to the first or
/// last page; a page size of 0 puts everything on a single page.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = items.len();
    if page_size == 0 {
        return Page {
            items: items.to_vec(),
            page: 1,
            page_size,
            total_items,
            total_pages: 1,
        };
    }

    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        page,
        page_size,
        total_items,
        total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::politician::{Contract, PlanTier};
    use chrono::NaiveDate;

    fn scenario_roster() -> Vec<Politician> {
        vec![
            Politician::new("1", "Ana Silva", "PT", "Senadora", PoliticianStatus::Active, 82.0),
            Politician::new("2", "Carlos Souza", "PSDB", "Deputado Federal", PoliticianStatus::Active, 58.0),
        ]
    }

    fn wider_roster() -> Vec<Politician> {
        let mut roster = scenario_roster();
        let mut marina = Politician::new("3", "Mariana Costa", "MDB", "Prefeita", PoliticianStatus::Suspended, 71.0);
        marina.contract = Some(Contract {
            plan: PlanTier::Basic,
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        });
        roster[0].contract = Some(Contract {
            plan: PlanTier::Enterprise,
            start_date: NaiveDate::from_ymd_opt(2023, 2, 10).unwrap(),
        });
        roster.push(marina);
        roster.push(Politician::new("4", "João Pereira", "PT", "Vereador", PoliticianStatus::Inactive, 58.0));
        roster
    }

    fn ids(view: &[&Politician]) -> Vec<String> {
        view.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_search_scenario() {
        let roster = scenario_roster();
        let view = query(&roster, &RosterQuery::new().search("ana"));
        assert_eq!(ids(&view), vec!["1"]);
    }

    #[test]
    fn test_sort_score_desc_scenario() {
        let roster = scenario_roster();
        let view = query(&roster, &RosterQuery::new().sorted_by(SortKey::Score, SortDirection::Desc));
        assert_eq!(ids(&view), vec!["1", "2"]);
    }

    #[test]
    fn test_search_matches_position_and_party() {
        let roster = wider_roster();
        assert_eq!(ids(&query(&roster, &RosterQuery::new().search("DEPUTADO"))), vec!["2"]);
        assert_eq!(ids(&query(&roster, &RosterQuery::new().search("psdb"))), vec!["2"]);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let roster = wider_roster();
        let q = RosterQuery::new()
            .party(PartyFilter::Only("PT".to_string()))
            .status(StatusFilter::Only(PoliticianStatus::Active));
        assert_eq!(ids(&query(&roster, &q)), vec!["1"]);

        let q = RosterQuery::new()
            .party(PartyFilter::parse("all"))
            .status(StatusFilter::parse("ALL").unwrap());
        assert_eq!(query(&roster, &q).len(), 4);
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let roster = wider_roster();
        assert!(query(&roster, &RosterQuery::new().search("zzz")).is_empty());
    }

    #[test]
    fn test_equal_keys_keep_roster_order() {
        let roster = wider_roster();
        // Carlos and João both score 58
        let asc = query(&roster, &RosterQuery::new().sorted_by(SortKey::Score, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["2", "4", "3", "1"]);
        let desc = query(&roster, &RosterQuery::new().sorted_by(SortKey::Score, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["1", "3", "2", "4"]);
    }

    #[test]
    fn test_absent_values_sort_last_both_directions() {
        let roster = wider_roster();
        let asc = query(&roster, &RosterQuery::new().sorted_by(SortKey::ContractStart, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["1", "3", "2", "4"]);
        let desc = query(&roster, &RosterQuery::new().sorted_by(SortKey::ContractStart, SortDirection::Desc));
        assert_eq!(ids(&desc), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_plan_sorts_by_tier_not_name() {
        let mut roster = wider_roster();
        roster[1].contract = Some(Contract {
            plan: PlanTier::Professional,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        });
        let asc = query(&roster, &RosterQuery::new().sorted_by(SortKey::Plan, SortDirection::Asc));
        assert_eq!(ids(&asc), vec!["3", "2", "1", "4"]);
    }

    #[test]
    fn test_unknown_sort_field_keeps_order() {
        let roster = wider_roster();
        let q = RosterQuery::new().sorted_by_field("shoe_size", SortDirection::Desc);
        assert!(q.sort.is_none());
        assert_eq!(ids(&query(&roster, &q)), vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let roster = vec![
            Politician::new("a", "bruno", "PT", "x", PoliticianStatus::Active, 1.0),
            Politician::new("b", "Alice", "PT", "x", PoliticianStatus::Active, 1.0),
        ];
        let view = query(&roster, &RosterQuery::new().sorted_by(SortKey::Name, SortDirection::Asc));
        assert_eq!(ids(&view), vec!["b", "a"]);
    }

    #[test]
    fn test_summary_over_filtered_view() {
        let roster = wider_roster();
        let view = query(&roster, &RosterQuery::new().party(PartyFilter::Only("PT".to_string())));
        let summary = summarize(&view);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.active, 1);
        assert_eq!(summary.average_score, Some(70.0));
    }

    #[test]
    fn test_summary_of_empty_view() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.active, 0);
        assert_eq!(summary.average_score, None);
        assert_eq!(summary.average_trend, None);
    }

    #[test]
    fn test_parties_sorted_distinct() {
        assert_eq!(parties(&wider_roster()), vec!["MDB", "PSDB", "PT"]);
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=7).collect();
        let page = paginate(&items, 2, 3);
        assert_eq!(page.items, vec![4, 5, 6]);
        assert_eq!(page.total_pages, 3);

        let last = paginate(&items, 99, 3);
        assert_eq!(last.page, 3);
        assert_eq!(last.items, vec![7]);

        let first = paginate(&items, 0, 3);
        assert_eq!(first.page, 1);

        let empty = paginate::<u32>(&[], 1, 10);
        assert_eq!(empty.total_pages, 1);
        assert!(empty.items.is_empty());

        let all = paginate(&items, 5, 0);
        assert_eq!(all.items.len(), 7);
    }

    #[test]
    fn test_nan_trends_sort_with_absent_values() {
        let roster: Vec<Politician> = (0..40)
            .map(|i| {
                let mut p = Politician::new(&i.to_string(), "P", "PT", "x", PoliticianStatus::Active, 50.0);
                p.trend = if i % 3 == 0 { f64::NAN } else { i as f64 };
                p
            })
            .collect();
        let nan_ids: Vec<String> = (0..40).filter(|i| i % 3 == 0).map(|i| i.to_string()).collect();

        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let view = query(&roster, &RosterQuery::new().sorted_by(SortKey::Trend, direction));
            assert_eq!(view.len(), 40);
            let (numbers, nans) = view.split_at(40 - nan_ids.len());
            assert!(numbers.iter().all(|p| !p.trend.is_nan()));
            assert_eq!(ids(nans), nan_ids);
            let trends: Vec<f64> = numbers.iter().map(|p| p.trend).collect();
            let ordered = match direction {
                SortDirection::Asc => trends.windows(2).all(|w| w[0] <= w[1]),
                SortDirection::Desc => trends.windows(2).all(|w| w[0] >= w[1]),
            };
            assert!(ordered);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    const PARTIES: [&str; 4] = ["PT", "PSDB", "MDB", "PL"];
    const NAMES: [&str; 5] = ["Ana", "Carlos", "Mariana", "João", "Beatriz"];

    fn politician_strategy() -> impl Strategy<Value = Politician> {
        (0usize..5, 0usize..4, 0usize..3, 0.0f64..=100.0, -10.0f64..10.0).prop_map(
            |(name, party, status, score, trend)| {
                let mut p = Politician::new(
                    format!("{}-{}", NAMES[name], score),
                    NAMES[name],
                    PARTIES[party],
                    "Deputado",
                    PoliticianStatus::ALL[status],
                    score,
                );
                p.trend = trend;
                p
            },
        )
    }

    fn query_strategy() -> impl Strategy<Value = RosterQuery> {
        (
            prop::sample::select(vec!["", "a", "an", "PS", "deputado", "xyz"]),
            prop::option::of(0usize..3),
            prop::option::of(0usize..4),
            prop::option::of(prop::sample::select(vec![
                SortKey::Name,
                SortKey::Party,
                SortKey::Score,
                SortKey::Trend,
                SortKey::Status,
            ])),
            any::<bool>(),
        )
            .prop_map(|(search, status, party, sort, desc)| RosterQuery {
                search: search.to_string(),
                status: status.map_or(StatusFilter::All, |i| StatusFilter::Only(PoliticianStatus::ALL[i])),
                party: party.map_or(PartyFilter::All, |i| PartyFilter::Only(PARTIES[i].to_string())),
                sort,
                direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
            })
    }

    proptest! {
        /// Property: the view is a subset of the roster and every item passes every filter
        #[test]
        fn test_query_is_filtered_subset(
            roster in prop::collection::vec(politician_strategy(), 0..20),
            q in query_strategy(),
        ) {
            let view = query(&roster, &q);
            prop_assert!(view.len() <= roster.len());
            for p in &view {
                prop_assert!(roster.iter().any(|r| std::ptr::eq(r, *p)));
                prop_assert!(q.matches(p));
            }
            let expected = roster.iter().filter(|p| q.matches(p)).count();
            prop_assert_eq!(view.len(), expected);
        }

        /// Property: sorting an already sorted view changes nothing
        #[test]
        fn test_sort_is_idempotent(
            roster in prop::collection::vec(politician_strategy(), 0..20),
            q in query_strategy(),
        ) {
            let once = query(&roster, &q);
            let mut twice = once.clone();
            if let Some(key) = q.sort {
                sort_view(&mut twice, key, q.direction);
            }
            let once_ids: Vec<_> = once.iter().map(|p| p.id.clone()).collect();
            let twice_ids: Vec<_> = twice.iter().map(|p| p.id.clone()).collect();
            prop_assert_eq!(once_ids, twice_ids);
        }

        /// Property: summary totals agree with the view
        #[test]
        fn test_summary_consistent(
            roster in prop::collection::vec(politician_strategy(), 0..20),
        ) {
            let view = query(&roster, &RosterQuery::new());
            let summary = summarize(&view);
            prop_assert_eq!(summary.total, roster.len());
            prop_assert!(summary.active <= summary.total);
            match summary.average_score {
                Some(avg) => prop_assert!((0.0..=100.0).contains(&avg)),
                None => prop_assert!(roster.is_empty()),
            }
        }
    }
}
