use crate::flow::{Step, StepKind};
use crate::topology::TopologyStore;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Visual category assigned to every topology element for one navigation
/// position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    OffFlow,
    Done,
    Current,
    Upcoming,
    Alternate,
}

/// Mapping from element id (node or edge) to its category. Total over the
/// topology: every element id appears exactly once.
pub type CategoryMap = AHashMap<String, Category>;

/// Derives the visual partition of the whole topology for one position in
/// a flow's step list.
///
/// Done/current/upcoming are computed purely from array position. An
/// outcome jump can move the position non-monotonically while everything
/// before the new index still reads as done; that mirrors the behavior of
/// the system this engine replays.
pub struct HighlightProjector;

impl HighlightProjector {
    /// Assigns exactly one category to every node and edge id.
    ///
    /// Steps without an edge id do not occupy a position. Edge ids that do
    /// not resolve in the topology are left out of every category set. The
    /// write order is done, upcoming, current, then alternates, so the
    /// current step wins over earlier categories on shared nodes and
    /// alternates win over everything.
    pub fn project(
        topology: &TopologyStore,
        steps: &[Step],
        current_index: usize,
        show_alternates: bool,
    ) -> CategoryMap {
        let mut categories: CategoryMap =
            AHashMap::with_capacity(topology.nodes().len() + topology.edges().len());
        for node in topology.nodes() {
            categories.insert(node.id.clone(), Category::OffFlow);
        }
        for edge in topology.edges() {
            categories.insert(edge.id.clone(), Category::OffFlow);
        }

        let positions: Vec<(&Step, &str)> = steps
            .iter()
            .filter_map(|step| {
                // Every step kind projects through its edge id.
                let edge_id = match &step.kind {
                    StepKind::Standard
                    | StepKind::Conditional { .. }
                    | StepKind::Retry { .. }
                    | StepKind::Synthesized => step.edge_id.as_deref()?,
                };
                Some((step, edge_id))
            })
            .collect();
        if positions.is_empty() {
            return categories;
        }
        let index = current_index.min(positions.len() - 1);

        for (_, edge_id) in &positions[..index] {
            Self::paint(topology, &mut categories, edge_id, Category::Done);
        }
        for (_, edge_id) in &positions[index + 1..] {
            Self::paint(topology, &mut categories, edge_id, Category::Upcoming);
        }
        let (current_step, current_edge) = positions[index];
        Self::paint(topology, &mut categories, current_edge, Category::Current);

        if show_alternates {
            for alternate in &current_step.alternates {
                Self::paint(topology, &mut categories, &alternate.edge_id, Category::Alternate);
            }
        }

        categories
    }

    /// Writes a category over an edge and the nodes it touches. Unresolved
    /// edge ids are skipped.
    fn paint(
        topology: &TopologyStore,
        categories: &mut CategoryMap,
        edge_id: &str,
        category: Category,
    ) {
        let Some(edge) = topology.edge(edge_id) else {
            return;
        };
        categories.insert(edge.id.clone(), category);
        categories.insert(edge.source.clone(), category);
        categories.insert(edge.target.clone(), category);
    }
}
