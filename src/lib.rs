//! # Keiro - Flow Playback over Topology Graphs
//!
//! **Keiro** walks named, multi-step API flows across an infrastructure
//! topology graph. A flow is an ordered sequence of steps with branching
//! success/failure outcomes; walking it accumulates timestamped simulated
//! state, and every position yields a total partition of the graph into
//! visual categories (off-flow, done, current, upcoming, alternate) ready
//! for a rendering surface.
//!
//! ## Core Workflow
//!
//! The engine is format-tolerant on input and rendering-agnostic on output:
//!
//! 1.  **Load the topology**: two JSON collections (nodes, edges) become a
//!     read-only [`TopologyStore`](topology::TopologyStore). Edge endpoints
//!     are integrity-checked at load time.
//! 2.  **Load the flows**: a JSON array of flow records, in the modern
//!     (`steps`) or legacy (`edges`-only) shape, becomes an immutable
//!     [`FlowCatalog`](flow::FlowCatalog). Malformed records are dropped
//!     with a warning, never fatally.
//! 3.  **Navigate**: a [`FlowNavigator`](navigator::FlowNavigator) owns the
//!     current selection, the clamped step pointer, the append-only path
//!     history, and the simulated-state accumulator.
//! 4.  **Project**: [`HighlightProjector`](projection::HighlightProjector)
//!     turns the navigator's position into a category per graph element;
//!     [`SearchProjector`](projection::SearchProjector) answers free-text
//!     lookups independently of the walk.
//! 5.  **Drive a surface**: a [`Session`](session::Session) processes user
//!     intents strictly in arrival order and pushes each new partition
//!     through the narrow
//!     [`PresentationSurface`](session::PresentationSurface) trait.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let nodes_json = std::fs::read_to_string("data/nodes.json")?;
//!     let edges_json = std::fs::read_to_string("data/edges.json")?;
//!     let flows_json = std::fs::read_to_string("data/flows.json")?;
//!
//!     let topology = TopologyStore::from_json(&nodes_json, &edges_json)?;
//!     let catalog = FlowCatalog::from_json(&flows_json)?;
//!     let mut navigator = FlowNavigator::new(catalog);
//!
//!     // Walk a flow: select it, then branch through an outcome.
//!     navigator.select_flow("order-write-path")?;
//!     navigator.choose_outcome("payment-accepted")?;
//!
//!     // Derive the visual partition for the new position.
//!     let steps = navigator.active_flow().map(|f| f.steps()).unwrap_or(&[]);
//!     let categories = HighlightProjector::project(
//!         &topology,
//!         steps,
//!         navigator.navigation().current_step_index,
//!         false,
//!     );
//!     for (element_id, category) in categories.iter() {
//!         println!("{element_id}: {category:?}");
//!     }
//!
//!     println!("simulated state: {:?}", navigator.simulated_state());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod flow;
pub mod navigator;
pub mod prelude;
pub mod projection;
pub mod session;
pub mod topology;
