pub mod export;
pub mod preferences;
pub mod surface;

pub use export::*;
pub use preferences::*;
pub use surface::*;

use crate::error::NavigatorError;
use crate::navigator::FlowNavigator;
use crate::projection::{HighlightProjector, RecentQueries, SearchProjector};
use crate::topology::TopologyStore;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Advisory layout hint carried for the presentation surface. The engine
/// never consults it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutAlgorithm {
    #[default]
    Layered,
    Force,
    Grid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutOrientation {
    #[default]
    LeftRight,
    TopBottom,
}

/// One discrete user intent. Intents run to completion in arrival order;
/// none is dropped or coalesced.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    SelectFlow(String),
    StepForward,
    StepBackward,
    ChooseOutcome(String),
    Reset,
    Search(String),
    FilterLayer(Option<String>),
    SetLayout(LayoutAlgorithm, LayoutOrientation),
    ToggleAlternates(bool),
}

/// Synchronous driver tying the read-only topology, the navigator, and the
/// presentation surface together.
pub struct Session<S: PresentationSurface> {
    topology: TopologyStore,
    navigator: FlowNavigator,
    surface: S,
    search_query: Option<String>,
    recent_queries: RecentQueries,
    filter_layer: Option<String>,
    layout_algorithm: LayoutAlgorithm,
    layout_orientation: LayoutOrientation,
    show_alternates: bool,
}

impl<S: PresentationSurface> Session<S> {
    pub fn new(topology: TopologyStore, navigator: FlowNavigator, surface: S) -> Self {
        Self {
            topology,
            navigator,
            surface,
            search_query: None,
            recent_queries: RecentQueries::new(),
            filter_layer: None,
            layout_algorithm: LayoutAlgorithm::default(),
            layout_orientation: LayoutOrientation::default(),
            show_alternates: false,
        }
    }

    /// Restores layout and search preferences saved by an earlier session.
    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.recent_queries = RecentQueries::from_entries(preferences.recent_searches);
        self.layout_algorithm = preferences.layout_algorithm;
        self.layout_orientation = preferences.layout_orientation;
        self
    }

    /// Processes one intent to completion, then repaints the surface.
    ///
    /// A failed intent leaves the engine state untouched; the repaint still
    /// runs so the surface stays consistent with that state.
    pub fn handle(&mut self, intent: Intent) -> Result<(), NavigatorError> {
        let focus_after = matches!(&intent, Intent::ChooseOutcome(_));
        let result = match intent {
            Intent::SelectFlow(flow_id) => self.navigator.select_flow(&flow_id),
            Intent::StepForward => {
                self.navigator.step_forward();
                Ok(())
            }
            Intent::StepBackward => {
                self.navigator.step_backward();
                Ok(())
            }
            Intent::ChooseOutcome(outcome_id) => self.navigator.choose_outcome(&outcome_id),
            Intent::Reset => {
                self.navigator.reset();
                Ok(())
            }
            Intent::Search(query) => {
                self.recent_queries.record(&query);
                self.search_query = if query.trim().is_empty() {
                    None
                } else {
                    Some(query)
                };
                Ok(())
            }
            Intent::FilterLayer(layer) => {
                self.filter_layer = layer;
                Ok(())
            }
            Intent::SetLayout(algorithm, orientation) => {
                self.layout_algorithm = algorithm;
                self.layout_orientation = orientation;
                Ok(())
            }
            Intent::ToggleAlternates(show) => {
                self.show_alternates = show;
                Ok(())
            }
        };

        self.repaint();
        if result.is_ok() && focus_after {
            if let Some(edge_id) = self
                .navigator
                .current_step()
                .and_then(|step| step.edge_id.clone())
            {
                self.surface.focus(&[edge_id]);
            }
        }
        result
    }

    /// Recomputes the projection for the current position and pushes it to
    /// the surface.
    fn repaint(&mut self) {
        let steps = self
            .navigator
            .active_flow()
            .map(|flow| flow.steps())
            .unwrap_or(&[]);
        let categories = HighlightProjector::project(
            &self.topology,
            steps,
            self.navigator.navigation().current_step_index,
            self.show_alternates,
        );
        self.surface.apply_categories(&categories);
    }

    /// The schema shown for a node at the current position: the step's
    /// override wins over the flow's, which wins over the node's own
    /// schema.
    pub fn node_schema(&self, node_id: &str) -> Option<&Value> {
        if let Some(value) = self
            .navigator
            .current_step()
            .and_then(|step| step.node_schema(node_id))
        {
            return Some(value);
        }
        if let Some(value) = self
            .navigator
            .active_flow()
            .and_then(|flow| flow.node_schema(node_id))
        {
            return Some(value);
        }
        self.topology.node(node_id).map(|node| &node.schema)
    }

    /// Node ids matching the current search query.
    pub fn search_matches(&self) -> Vec<String> {
        match self.search_query.as_deref() {
            Some(query) => SearchProjector::matched_ids(&self.topology, query),
            None => Vec::new(),
        }
    }

    /// Node ids selected by the active layer filter, if one is set.
    pub fn filtered_node_ids(&self) -> Vec<String> {
        match self.filter_layer.as_deref() {
            Some(layer) => self
                .topology
                .nodes_in_layer(layer)
                .map(|node| node.id.clone())
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn recent_queries(&self) -> &[String] {
        self.recent_queries.entries()
    }

    /// Serializes the whole session into its canonical snapshot document.
    pub fn snapshot(&self) -> SessionSnapshot {
        let nav = self.navigator.navigation();
        SessionSnapshot {
            timestamp: Utc::now(),
            selected_flow_id: self.navigator.active_flow().map(|flow| flow.id.clone()),
            current_step_index: nav.current_step_index,
            flow_path_history: nav.path_history.clone(),
            flow_state: self.navigator.simulated_state().clone(),
            state_history: self.navigator.state_history().to_vec(),
            search_query: self.search_query.clone(),
            filter_layer: self.filter_layer.clone(),
            layout_algorithm: self.layout_algorithm,
            layout_orientation: self.layout_orientation,
        }
    }

    /// The preferences document to persist for the next session.
    pub fn preferences(&self) -> Preferences {
        Preferences {
            recent_searches: self.recent_queries.entries().to_vec(),
            layout_algorithm: self.layout_algorithm,
            layout_orientation: self.layout_orientation,
        }
    }

    pub fn navigator(&self) -> &FlowNavigator {
        &self.navigator
    }

    pub fn topology(&self) -> &TopologyStore {
        &self.topology
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
