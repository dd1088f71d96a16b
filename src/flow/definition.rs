use super::model::{AlternateEdge, OutcomeKind, RetryPolicy, SchemaMap, StateMap};
use serde::Deserialize;
use serde_json::Value;

/// One flow record as stored in the catalog JSON.
///
/// Either `steps` (modern form) or `edges` (legacy form) describes the
/// walk; the modern form wins when both are present and non-empty. Scalar
/// fields default so that a structurally readable record always parses and
/// validation can decide whether to keep it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "initialState")]
    pub initial_state: Option<StateMap>,
    #[serde(default, alias = "nodeSchemas")]
    pub node_schemas: Option<SchemaMap>,
    #[serde(default)]
    pub steps: Vec<StepDefinition>,
    #[serde(default)]
    pub edges: Vec<String>,
}

/// Declared type tag on a step record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepTypeTag {
    #[default]
    Standard,
    Conditional,
    Retry,
}

/// One step record in a modern-form flow.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "edgeId")]
    pub edge_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: StepTypeTag,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default, alias = "retryPolicy")]
    pub retry_policy: Option<RetryPolicy>,
    #[serde(default)]
    pub outcomes: Vec<OutcomeDefinition>,
    #[serde(default)]
    pub unhappy: Vec<AlternateEdge>,
    #[serde(default, alias = "nodeSchemas")]
    pub node_schemas: Option<SchemaMap>,
}

/// One outcome record on a step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutcomeDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: OutcomeKind,
    #[serde(default, alias = "nextStepId")]
    pub next_step_id: Option<String>,
    #[serde(default, alias = "stateChanges")]
    pub state_changes: Option<StateMap>,
    #[serde(default)]
    pub request: Option<Value>,
    #[serde(default)]
    pub response: Option<Value>,
}
