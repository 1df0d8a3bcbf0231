//! Pipeline stage engine
//!
//! Groups CRM cards into the eight board columns, aggregates each column and
//! applies stage transitions requested by the board (drag completion) or by
//! explicit edits.
//!
//! Transitions form a free graph: any stage can be reached from any other.
//! The funnel order of [`Stage`] is presentational only.

use crate::{CardPatch, CrmPipelineCard, Stage};
use std::collections::BTreeMap;

/// Group cards by stage
///
/// Always returns all eight stages; empty stages map to an empty list.
/// Within a stage, cards keep collection order.
pub fn group_by_stage(cards: &[CrmPipelineCard]) -> BTreeMap<Stage, Vec<&CrmPipelineCard>> {
    let mut groups: BTreeMap<Stage, Vec<&CrmPipelineCard>> =
        Stage::ALL.iter().map(|stage| (*stage, Vec::new())).collect();
    for card in cards {
        groups.entry(card.stage).or_default().push(card);
    }
    groups
}

/// Sum of proposal values, with missing values counted as zero
pub fn stage_total<'a>(cards: impl IntoIterator<Item = &'a CrmPipelineCard>) -> f64 {
    cards.into_iter().map(CrmPipelineCard::value_or_zero).sum()
}

/// Sum of probability-weighted proposal values
pub fn weighted_total<'a>(cards: impl IntoIterator<Item = &'a CrmPipelineCard>) -> f64 {
    cards.into_iter().map(CrmPipelineCard::weighted_value).sum()
}

/// One column of the board
#[derive(Debug, Clone, PartialEq)]
pub struct StageColumn<'a> {
    /// Column stage
    pub stage: Stage,
    /// Cards in collection order
    pub cards: Vec<&'a CrmPipelineCard>,
    /// Proposal value total
    pub total: f64,
    /// Probability-weighted total
    pub weighted: f64,
}

impl StageColumn<'_> {
    /// Number of cards in the column
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Build the board: one column per stage, in funnel order
pub fn board(cards: &[CrmPipelineCard]) -> Vec<StageColumn<'_>> {
    group_by_stage(cards)
        .into_iter()
        .map(|(stage, cards)| StageColumn {
            stage,
            total: stage_total(cards.iter().copied()),
            weighted: weighted_total(cards.iter().copied()),
            cards,
        })
        .collect()
}

/// Result of a stage-transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The card changed stage
    Moved {
        /// Stage before the move
        from: Stage,
        /// Stage after the move
        to: Stage,
    },
    /// The card was already in the requested stage
    Unchanged(Stage),
    /// No card has the requested id
    UnknownCard,
    /// The requested destination is not one of the eight stages
    UnknownStage(String),
}

impl MoveOutcome {
    /// Whether the collection changed
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

/// Apply a stage-transition request in place
///
/// Unknown stages and unknown card ids are no-ops. A moved card is relocated
/// to the end of the collection so it lands last in its destination column;
/// every other card keeps its relative order.
pub fn apply_move(cards: &mut Vec<CrmPipelineCard>, card_id: &str, target: &str) -> MoveOutcome {
    let Some(stage) = Stage::parse(target) else {
        return MoveOutcome::UnknownStage(target.to_string());
    };
    move_to_stage(cards, card_id, stage)
}

/// Typed variant of [`apply_move`]
pub fn move_to_stage(cards: &mut Vec<CrmPipelineCard>, card_id: &str, stage: Stage) -> MoveOutcome {
    let Some(current) = cards.iter().find(|c| c.id == card_id).map(|c| c.stage) else {
        return MoveOutcome::UnknownCard;
    };
    if current == stage {
        return MoveOutcome::Unchanged(current);
    }
    apply_patch(cards, card_id, &CardPatch::stage(stage));
    MoveOutcome::Moved {
        from: current,
        to: stage,
    }
}

/// Pure form of [`apply_move`]: returns the updated collection
pub fn move_card(cards: &[CrmPipelineCard], card_id: &str, target: &str) -> Vec<CrmPipelineCard> {
    let mut next = cards.to_vec();
    apply_move(&mut next, card_id, target);
    next
}

/// Apply a partial update to one card in place
///
/// Returns the updated card, or `None` when no card has the id. When the
/// patch changes the stage the card is relocated to the end of the collection.
pub fn apply_patch(
    cards: &mut Vec<CrmPipelineCard>,
    card_id: &str,
    patch: &CardPatch,
) -> Option<CrmPipelineCard> {
    let index = cards.iter().position(|c| c.id == card_id)?;
    let stage_changes = patch.stage.is_some_and(|stage| stage != cards[index].stage);

    if stage_changes {
        let mut card = cards.remove(index);
        patch.apply(&mut card);
        cards.push(card.clone());
        Some(card)
    } else {
        patch.apply(&mut cards[index]);
        Some(cards[index].clone())
    }
}

/// Headline numbers for the whole pipeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PipelineSummary {
    /// Cards in open stages
    pub open_cards: usize,
    /// Proposal value of open cards
    pub open_value: f64,
    /// Probability-weighted value of open cards
    pub weighted_forecast: f64,
    /// Cards that became clients
    pub won_cards: usize,
    /// Proposal value of clients
    pub won_value: f64,
    /// Cards marked lost
    pub lost_cards: usize,
}

impl PipelineSummary {
    /// Share of closed cards that were won, `None` when nothing closed yet
    pub fn win_rate(&self) -> Option<f64> {
        let closed = self.won_cards + self.lost_cards;
        (closed > 0).then(|| self.won_cards as f64 / closed as f64 * 100.0)
    }
}

/// Summarize the pipeline
pub fn summarize(cards: &[CrmPipelineCard]) -> PipelineSummary {
    let mut summary = PipelineSummary::default();
    for card in cards {
        if card.stage.is_open() {
            summary.open_cards += 1;
            summary.open_value += card.value_or_zero();
            summary.weighted_forecast += card.weighted_value();
        } else if card.stage == Stage::ActiveClient {
            summary.won_cards += 1;
            summary.won_value += card.value_or_zero();
        } else {
            summary.lost_cards += 1;
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards() -> Vec<CrmPipelineCard> {
        vec![
            CrmPipelineCard::new("card-1", "Ana Silva", "PT", "Senadora", Stage::Lead).with_value(10_000.0),
            CrmPipelineCard::new("card-2", "Carlos Souza", "PSDB", "Deputado", Stage::Lead),
            CrmPipelineCard::new("card-3", "Mariana Costa", "MDB", "Prefeita", Stage::Negotiation)
                .with_value(40_000.0)
                .with_probability(50.0),
            CrmPipelineCard::new("card-4", "João Pereira", "PT", "Vereador", Stage::ActiveClient)
                .with_value(25_000.0),
        ]
    }

    fn ids(cards: &[&CrmPipelineCard]) -> Vec<String> {
        cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_group_by_stage_has_all_stages() {
        let cards = cards();
        let groups = group_by_stage(&cards);
        assert_eq!(groups.len(), 8);
        assert_eq!(ids(&groups[&Stage::Lead]), vec!["card-1", "card-2"]);
        assert!(groups[&Stage::Lost].is_empty());

        let empty = group_by_stage(&[]);
        assert_eq!(empty.len(), 8);
        assert!(empty.values().all(Vec::is_empty));
    }

    #[test]
    fn test_stage_total_missing_values_are_zero() {
        let cards = cards();
        let groups = group_by_stage(&cards);
        assert_eq!(stage_total(groups[&Stage::Lead].iter().copied()), 10_000.0);
        let none: Vec<CrmPipelineCard> = Vec::new();
        assert_eq!(stage_total(&none), 0.0);
    }

    #[test]
    fn test_board_in_funnel_order() {
        let cards = cards();
        let columns = board(&cards);
        let stages: Vec<Stage> = columns.iter().map(|c| c.stage).collect();
        assert_eq!(stages, Stage::ALL.to_vec());
        assert_eq!(columns[3].count(), 1);
        assert_eq!(columns[3].total, 40_000.0);
        assert_eq!(columns[3].weighted, 20_000.0);
    }

    #[test]
    fn test_move_appends_to_destination() {
        let mut cards = cards();
        let outcome = apply_move(&mut cards, "card-1", "active_client");
        assert_eq!(
            outcome,
            MoveOutcome::Moved {
                from: Stage::Lead,
                to: Stage::ActiveClient
            }
        );
        let groups = group_by_stage(&cards);
        assert_eq!(ids(&groups[&Stage::ActiveClient]), vec!["card-4", "card-1"]);
        assert_eq!(ids(&groups[&Stage::Lead]), vec!["card-2"]);
        assert_eq!(cards.len(), 4);
    }

    #[test]
    fn test_last_write_wins() {
        let cards = cards();
        let once = move_card(&cards, "card-1", "active_client");
        let twice = move_card(&once, "card-1", "lead");
        assert_eq!(twice.len(), cards.len());
        let moved: Vec<_> = twice.iter().filter(|c| c.id == "card-1").collect();
        assert_eq!(moved.len(), 1);
        assert_eq!(moved[0].stage, Stage::Lead);
    }

    #[test]
    fn test_unknown_stage_is_noop() {
        let mut cards = cards();
        let before = cards.clone();
        let outcome = apply_move(&mut cards, "card-1", "unknown_stage");
        assert_eq!(outcome, MoveOutcome::UnknownStage("unknown_stage".to_string()));
        assert_eq!(cards, before);
    }

    #[test]
    fn test_stage_names_must_match_exactly() {
        let mut cards = cards();
        let before = cards.clone();
        for target in ["LEAD", "ACTIVE-CLIENT", "Active_Client", "  lost "] {
            assert_eq!(
                apply_move(&mut cards, "card-1", target),
                MoveOutcome::UnknownStage(target.to_string())
            );
        }
        assert_eq!(cards, before);
    }

    #[test]
    fn test_unknown_card_and_same_stage_are_noops() {
        let mut cards = cards();
        let before = cards.clone();
        assert_eq!(apply_move(&mut cards, "card-99", "lead"), MoveOutcome::UnknownCard);
        assert_eq!(apply_move(&mut cards, "card-2", "lead"), MoveOutcome::Unchanged(Stage::Lead));
        assert_eq!(cards, before);
    }

    #[test]
    fn test_backward_and_skipping_moves_allowed() {
        let mut cards = cards();
        assert!(apply_move(&mut cards, "card-4", "lead").is_moved());
        assert!(apply_move(&mut cards, "card-2", "implementation").is_moved());
        assert!(apply_move(&mut cards, "card-3", "lost").is_moved());
        assert!(apply_move(&mut cards, "card-3", "qualification").is_moved());
    }

    #[test]
    fn test_patch_without_stage_keeps_position() {
        let mut cards = cards();
        let patch = CardPatch {
            probability: Some(Some(80.0)),
            ..Default::default()
        };
        let updated = apply_patch(&mut cards, "card-1", &patch).unwrap();
        assert_eq!(updated.probability, Some(80.0));
        assert_eq!(cards[0].id, "card-1");
        assert!(apply_patch(&mut cards, "missing", &patch).is_none());
    }

    #[test]
    fn test_summary() {
        let mut cards = cards();
        cards.push(CrmPipelineCard::new("card-5", "Paula Lima", "PL", "Governadora", Stage::Lost).with_value(9_000.0));
        let summary = summarize(&cards);
        assert_eq!(summary.open_cards, 3);
        assert_eq!(summary.open_value, 50_000.0);
        assert_eq!(summary.weighted_forecast, 20_000.0);
        assert_eq!(summary.won_cards, 1);
        assert_eq!(summary.won_value, 25_000.0);
        assert_eq!(summary.lost_cards, 1);
        assert_eq!(summary.win_rate(), Some(50.0));
        assert_eq!(PipelineSummary::default().win_rate(), None);
    }
}
