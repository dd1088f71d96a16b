use crate::flow::{Outcome, StateMap, Step};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record in the simulated-state audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    pub step_id: String,
    pub step_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outcome_label: Option<String>,
    /// Full snapshot after the delta was applied.
    pub state: StateMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<StateMap>,
    pub timestamp: DateTime<Utc>,
}

/// Folds per-outcome state deltas into one running snapshot plus an
/// append-only audit trail.
///
/// The running state always equals the recorded `changes` objects folded
/// in history order over the seed.
#[derive(Debug, Clone, Default)]
pub struct StateAccumulator {
    current: StateMap,
    history: Vec<StateRecord>,
}

impl StateAccumulator {
    /// Replaces the running state with the flow's initial state, seeding
    /// the history with a "Flow Start" entry when one is present.
    pub(crate) fn seed(&mut self, initial: Option<&StateMap>) {
        self.current = initial.cloned().unwrap_or_default();
        self.history.clear();
        if initial.is_some() {
            self.history.push(StateRecord {
                step_id: "initial".to_string(),
                step_title: "Flow Start".to_string(),
                outcome_label: None,
                state: self.current.clone(),
                changes: None,
                timestamp: Utc::now(),
            });
        }
    }

    /// Shallow-merges the outcome's state changes into the running state.
    /// Later keys overwrite earlier ones; a missing delta is a no-op.
    pub(crate) fn apply(&mut self, step: &Step, outcome: &Outcome, timestamp: DateTime<Utc>) {
        let Some(changes) = &outcome.state_changes else {
            return;
        };
        for (key, value) in changes {
            self.current.insert(key.clone(), value.clone());
        }
        self.history.push(StateRecord {
            step_id: step.id.clone(),
            step_title: step.title.clone(),
            outcome_label: Some(outcome.label.clone()),
            state: self.current.clone(),
            changes: Some(changes.clone()),
            timestamp,
        });
    }

    /// The running simulated-state snapshot.
    pub fn current(&self) -> &StateMap {
        &self.current
    }

    /// Every transition recorded since the flow was selected.
    pub fn history(&self) -> &[StateRecord] {
        &self.history
    }
}
