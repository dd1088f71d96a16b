use super::definition::{FlowDefinition, OutcomeDefinition, StepDefinition, StepTypeTag};
use crate::error::CatalogError;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Object type used for initial state and state-change payloads.
pub type StateMap = serde_json::Map<String, Value>;

/// Per-node schema overrides, keyed by node id.
pub type SchemaMap = AHashMap<String, Value>;

/// How a step participates in the walk.
///
/// The discriminant is explicit so call sites have to handle every kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StepKind {
    Standard,
    Conditional { condition: Option<String> },
    Retry { policy: RetryPolicy },
    /// Built from a legacy edges-only flow; never carries outcomes.
    Synthesized,
}

/// Branch classification for an outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    #[default]
    Happy,
    Unhappy,
    Recovery,
    Terminal,
}

/// Descriptive retry metadata displayed alongside a step. Never executed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RetryPolicy {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, alias = "maxAttempts")]
    pub max_attempts: u32,
    #[serde(default, alias = "backoffMs")]
    pub backoff_ms: Vec<u64>,
    #[serde(default, alias = "retryOn")]
    pub retry_on: Vec<String>,
}

/// Advisory alternate edge carried over from the old flow format. Shown
/// dimmed-differently; no state semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateEdge {
    #[serde(alias = "edgeId")]
    pub edge_id: String,
    #[serde(default)]
    pub title: Option<String>,
}

/// A branch that can be taken at a step. Outcomes are the only transition
/// mechanism besides the linear manual override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: OutcomeKind,
    pub next_step_id: Option<String>,
    pub state_changes: Option<StateMap>,
    pub request: Option<Value>,
    pub response: Option<Value>,
}

impl Outcome {
    /// A terminal outcome presents no further forward transition.
    pub fn is_terminal(&self) -> bool {
        self.kind == OutcomeKind::Terminal || self.next_step_id.is_none()
    }
}

/// The atomic unit of navigation: one position in a flow, tied to at most
/// one topology edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub edge_id: Option<String>,
    pub description: Option<String>,
    pub kind: StepKind,
    pub outcomes: Vec<Outcome>,
    pub alternates: Vec<AlternateEdge>,
    pub node_schemas: Option<SchemaMap>,
}

impl Step {
    /// Looks up an outcome on this step by id.
    pub fn outcome(&self, outcome_id: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|outcome| outcome.id == outcome_id)
    }

    /// The schema override this step declares for a node, if any.
    pub fn node_schema(&self, node_id: &str) -> Option<&Value> {
        self.node_schemas.as_ref().and_then(|schemas| schemas.get(node_id))
    }

    /// Short display text derived from the step kind.
    pub fn annotation(&self) -> Option<String> {
        match &self.kind {
            StepKind::Standard => None,
            StepKind::Conditional { condition } => condition.clone(),
            StepKind::Retry { policy } => {
                Some(format!("retries up to {} times", policy.max_attempts))
            }
            StepKind::Synthesized => None,
        }
    }

    fn from_definition(
        flow_id: &str,
        position: usize,
        def: StepDefinition,
    ) -> Result<Self, CatalogError> {
        if def.id.trim().is_empty() {
            return Err(CatalogError::MissingStepId {
                flow_id: flow_id.to_string(),
                position,
            });
        }

        let kind = match def.kind {
            StepTypeTag::Standard => StepKind::Standard,
            StepTypeTag::Conditional => StepKind::Conditional {
                condition: def.condition,
            },
            StepTypeTag::Retry => StepKind::Retry {
                policy: def.retry_policy.unwrap_or_default(),
            },
        };

        let outcomes = def
            .outcomes
            .into_iter()
            .enumerate()
            .map(|(i, outcome)| Outcome::from_definition(flow_id, &def.id, i, outcome))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id: def.id,
            title: def.title,
            edge_id: def.edge_id.filter(|edge_id| !edge_id.trim().is_empty()),
            description: def.description,
            kind,
            outcomes,
            alternates: def.unhappy,
            node_schemas: def.node_schemas,
        })
    }

    /// One synthesized step per legacy edge id. The edge id doubles as the
    /// title since the old format carries none.
    fn synthesized(flow_id: &str, position: usize, edge_id: &str) -> Result<Self, CatalogError> {
        if edge_id.trim().is_empty() {
            return Err(CatalogError::EmptyLegacyEdge {
                flow_id: flow_id.to_string(),
                position,
            });
        }
        Ok(Self {
            id: format!("step-{}", position + 1),
            title: edge_id.to_string(),
            edge_id: Some(edge_id.to_string()),
            description: None,
            kind: StepKind::Synthesized,
            outcomes: Vec::new(),
            alternates: Vec::new(),
            node_schemas: None,
        })
    }
}

impl Outcome {
    fn from_definition(
        flow_id: &str,
        step_id: &str,
        position: usize,
        def: OutcomeDefinition,
    ) -> Result<Self, CatalogError> {
        if def.id.trim().is_empty() {
            return Err(CatalogError::MissingOutcomeId {
                flow_id: flow_id.to_string(),
                step_id: step_id.to_string(),
                position,
            });
        }
        if def.label.trim().is_empty() {
            return Err(CatalogError::MissingOutcomeLabel {
                flow_id: flow_id.to_string(),
                step_id: step_id.to_string(),
                outcome_id: def.id,
            });
        }
        Ok(Self {
            id: def.id,
            label: def.label,
            description: def.description,
            kind: def.kind,
            next_step_id: def.next_step_id,
            state_changes: def.state_changes,
            request: def.request,
            response: def.response,
        })
    }
}

/// A named, fully resolved walk through the topology.
#[derive(Debug, Clone)]
pub struct Flow {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    initial_state: Option<StateMap>,
    node_schemas: Option<SchemaMap>,
    steps: Vec<Step>,
    index: AHashMap<String, usize>,
}

impl Flow {
    /// Normalizes a stored definition into a single ordered step sequence,
    /// whichever of the two source formats produced it.
    pub fn from_definition(def: FlowDefinition) -> Result<Self, CatalogError> {
        let FlowDefinition {
            id,
            label,
            description,
            initial_state,
            node_schemas,
            steps,
            edges,
        } = def;

        if id.trim().is_empty() {
            return Err(CatalogError::MissingFlowId { label });
        }
        if label.trim().is_empty() {
            return Err(CatalogError::MissingFlowLabel(id));
        }

        let steps = if !steps.is_empty() {
            steps
                .into_iter()
                .enumerate()
                .map(|(position, step)| Step::from_definition(&id, position, step))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            edges
                .iter()
                .enumerate()
                .map(|(position, edge_id)| Step::synthesized(&id, position, edge_id))
                .collect::<Result<Vec<_>, _>>()?
        };

        // First occurrence wins on duplicate step ids.
        let mut index = AHashMap::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            index.entry(step.id.clone()).or_insert(position);
        }

        Ok(Self {
            id,
            label,
            description,
            initial_state,
            node_schemas,
            steps,
            index,
        })
    }

    /// The resolved, ordered step sequence.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Position of a step by id, backing `next_step_id` jumps.
    pub fn step_index(&self, step_id: &str) -> Option<usize> {
        self.index.get(step_id).copied()
    }

    pub fn initial_state(&self) -> Option<&StateMap> {
        self.initial_state.as_ref()
    }

    /// The schema override this flow declares for a node, if any.
    pub fn node_schema(&self, node_id: &str) -> Option<&Value> {
        self.node_schemas.as_ref().and_then(|schemas| schemas.get(node_id))
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
