use thiserror::Error;

/// Errors that can occur while loading the topology collections.
#[derive(Error, Debug, Clone)]
pub enum TopologyError {
    #[error("Failed to parse topology JSON: {0}")]
    JsonParse(String),

    #[error("Edge '{edge_id}' references node '{node_id}', which is not in the topology")]
    DanglingEndpoint { edge_id: String, node_id: String },
}

/// Errors that can occur while validating a flow definition.
///
/// A definition that fails validation is dropped from the catalog with a
/// warning; these never abort a load.
#[derive(Error, Debug, Clone)]
pub enum CatalogError {
    #[error("Failed to parse flow catalog JSON: {0}")]
    JsonParse(String),

    #[error("Flow definition with label '{label}' has an empty id")]
    MissingFlowId { label: String },

    #[error("Flow '{0}' has an empty label")]
    MissingFlowLabel(String),

    #[error("Flow '{flow_id}': step at position {position} has an empty id")]
    MissingStepId { flow_id: String, position: usize },

    #[error("Flow '{flow_id}': step '{step_id}' outcome at position {position} has an empty id")]
    MissingOutcomeId {
        flow_id: String,
        step_id: String,
        position: usize,
    },

    #[error("Flow '{flow_id}': step '{step_id}' outcome '{outcome_id}' has an empty label")]
    MissingOutcomeLabel {
        flow_id: String,
        step_id: String,
        outcome_id: String,
    },

    #[error("Flow '{flow_id}': legacy edge reference at position {position} is empty")]
    EmptyLegacyEdge { flow_id: String, position: usize },
}

/// Errors that can occur while driving the navigator.
#[derive(Error, Debug, Clone)]
pub enum NavigatorError {
    #[error("Flow '{0}' is not in the catalog")]
    UnknownFlow(String),

    #[error("No flow is currently selected")]
    NoActiveFlow,

    #[error("Flow '{0}' has no steps to choose an outcome on")]
    EmptyFlow(String),

    #[error("Step '{step_id}' has no outcome '{outcome_id}'")]
    OutcomeNotFound { step_id: String, outcome_id: String },
}

/// Errors that can occur while exporting or persisting session documents.
#[derive(Error, Debug, Clone)]
pub enum SnapshotError {
    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error("Could not access '{path}': {message}")]
    Io { path: String, message: String },
}
