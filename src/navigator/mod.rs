pub mod accumulator;
pub mod state;

pub use accumulator::*;
pub use state::*;

use crate::error::NavigatorError;
use crate::flow::{Flow, FlowCatalog, StateMap, Step};
use chrono::Utc;
use tracing::debug;

/// The flow playback state machine.
///
/// Owns the current flow selection, the clamped step pointer, the
/// append-only path history, and the simulated-state accumulator. The
/// catalog is injected at construction and never mutated.
#[derive(Debug)]
pub struct FlowNavigator {
    catalog: FlowCatalog,
    active: Option<String>,
    nav: NavigationState,
    state: StateAccumulator,
}

impl FlowNavigator {
    pub fn new(catalog: FlowCatalog) -> Self {
        Self {
            catalog,
            active: None,
            nav: NavigationState::default(),
            state: StateAccumulator::default(),
        }
    }

    /// Selects a flow, resetting position and history and re-seeding the
    /// simulated state from the flow's initial state.
    ///
    /// An unknown id is an error and leaves the machine untouched.
    pub fn select_flow(&mut self, flow_id: &str) -> Result<(), NavigatorError> {
        let flow = self
            .catalog
            .get(flow_id)
            .ok_or_else(|| NavigatorError::UnknownFlow(flow_id.to_string()))?;
        self.nav.reset();
        self.state.seed(flow.initial_state());
        self.active = Some(flow_id.to_string());
        Ok(())
    }

    /// Advances one step, clamped to the end of the flow. A manual override
    /// that is always legal, whatever the outcome graph says.
    pub fn step_forward(&mut self) {
        let Some(flow) = self.active_flow() else { return };
        let len = flow.steps().len();
        if len == 0 {
            return;
        }
        self.nav.current_step_index = (self.nav.current_step_index + 1).min(len - 1);
    }

    /// Retreats one step, clamped to the start of the flow.
    pub fn step_backward(&mut self) {
        if self.active.is_none() {
            return;
        }
        self.nav.current_step_index = self.nav.current_step_index.saturating_sub(1);
    }

    /// Takes a branching transition. Effects, in order: the outcome's state
    /// delta is applied, a path-history entry is appended, the outcome
    /// becomes the selected one, and the position jumps iff `next_step_id`
    /// resolves to a step of the active flow.
    ///
    /// The outcome is looked up on the step under the position at call
    /// time. A target that does not resolve holds the position; the history
    /// entry is appended either way.
    pub fn choose_outcome(&mut self, outcome_id: &str) -> Result<(), NavigatorError> {
        let flow_id = self.active.as_deref().ok_or(NavigatorError::NoActiveFlow)?;
        let flow = self
            .catalog
            .get(flow_id)
            .ok_or_else(|| NavigatorError::UnknownFlow(flow_id.to_string()))?;
        let step = flow
            .steps()
            .get(self.nav.current_step_index)
            .ok_or_else(|| NavigatorError::EmptyFlow(flow.id.clone()))?;
        let outcome = step
            .outcome(outcome_id)
            .ok_or_else(|| NavigatorError::OutcomeNotFound {
                step_id: step.id.clone(),
                outcome_id: outcome_id.to_string(),
            })?
            .clone();

        let timestamp = Utc::now();
        self.state.apply(step, &outcome, timestamp);
        self.nav
            .path_history
            .push(PathEntry::record(step, &outcome, timestamp));
        self.nav.selected_outcome = Some(outcome.clone());
        if let Some(next) = outcome.next_step_id.as_deref() {
            match flow.step_index(next) {
                Some(position) => self.nav.current_step_index = position,
                None => debug!(
                    step_id = %step.id,
                    target = %next,
                    "outcome target does not resolve, holding position"
                ),
            }
        }
        Ok(())
    }

    /// Returns to the first step, clearing the history and re-seeding the
    /// simulated state. A no-op when nothing is selected.
    pub fn reset(&mut self) {
        let Some(flow_id) = self.active.as_deref() else { return };
        let Some(flow) = self.catalog.get(flow_id) else { return };
        self.nav.reset();
        self.state.seed(flow.initial_state());
    }

    /// The currently selected flow, if any.
    pub fn active_flow(&self) -> Option<&Flow> {
        self.catalog.get(self.active.as_deref()?)
    }

    /// The step under the navigator's position. `None` when no flow is
    /// selected or the selected flow is empty.
    pub fn current_step(&self) -> Option<&Step> {
        self.active_flow()?.steps().get(self.nav.current_step_index)
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.nav
    }

    /// The running simulated-state snapshot.
    pub fn simulated_state(&self) -> &StateMap {
        self.state.current()
    }

    /// Every state transition recorded since the flow was selected.
    pub fn state_history(&self) -> &[StateRecord] {
        self.state.history()
    }

    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }
}
