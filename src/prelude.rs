//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the keiro crate so callers
//! can pull in the core surface with a single `use`.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let nodes_json = std::fs::read_to_string("data/nodes.json")?;
//! let edges_json = std::fs::read_to_string("data/edges.json")?;
//! let flows_json = std::fs::read_to_string("data/flows.json")?;
//!
//! let topology = TopologyStore::from_json(&nodes_json, &edges_json)?;
//! let catalog = FlowCatalog::from_json(&flows_json)?;
//! let mut navigator = FlowNavigator::new(catalog);
//!
//! navigator.select_flow("order-write-path")?;
//! # Ok(())
//! # }
//! ```

// Topology store and element model
pub use crate::topology::{
    ApiEndpoint, ApiSurface, Dependencies, Direction, Edge, Node, NodeKind, TopologyStore,
};

// Flow catalog, raw definitions, and the resolved model
pub use crate::flow::{
    AlternateEdge, Flow, FlowCatalog, FlowDefinition, Outcome, OutcomeDefinition, OutcomeKind,
    RetryPolicy, SchemaMap, StateMap, Step, StepDefinition, StepKind, StepTypeTag,
};

// Playback state machine
pub use crate::navigator::{
    FlowNavigator, NavigationState, PathEntry, StateAccumulator, StateRecord,
};

// Projections
pub use crate::projection::{
    Category, CategoryMap, HighlightProjector, RecentQueries, SearchProjector,
};

// Session layer
pub use crate::session::{
    Intent, LayoutAlgorithm, LayoutOrientation, Preferences, PresentationSurface, Session,
    SessionSnapshot,
};

// Error types
pub use crate::error::{CatalogError, NavigatorError, SnapshotError, TopologyError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
