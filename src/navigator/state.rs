use crate::flow::{Outcome, OutcomeKind, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of an outcome chosen during the walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathEntry {
    pub step_id: String,
    pub step_title: String,
    pub outcome_id: String,
    pub outcome_label: String,
    pub outcome_kind: OutcomeKind,
    pub timestamp: DateTime<Utc>,
}

impl PathEntry {
    pub(crate) fn record(step: &Step, outcome: &Outcome, timestamp: DateTime<Utc>) -> Self {
        Self {
            step_id: step.id.clone(),
            step_title: step.title.clone(),
            outcome_id: outcome.id.clone(),
            outcome_label: outcome.label.clone(),
            outcome_kind: outcome.kind,
            timestamp,
        }
    }
}

/// Mutable position and history for the active flow. Reset whenever the
/// selected flow changes.
///
/// `current_step_index` is always a valid position into the active flow's
/// step list, or 0 when the list is empty.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub current_step_index: usize,
    pub path_history: Vec<PathEntry>,
    pub selected_outcome: Option<Outcome>,
}

impl NavigationState {
    pub(crate) fn reset(&mut self) {
        self.current_step_index = 0;
        self.path_history.clear();
        self.selected_outcome = None;
    }
}
