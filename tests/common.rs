//! Common test utilities for building topologies and flow definitions.
use keiro::prelude::*;
use serde_json::json;

/// Builds the five-node topology used across the suites.
///
/// `gw --e1--> api --e2--> db`, `api --e3--> jobs`, `db --e4--> api`
/// (read-back edge), and `cdn` standing apart, never touched by a flow.
#[allow(dead_code)]
pub fn sample_topology() -> TopologyStore {
    TopologyStore::new(sample_nodes(), sample_edges()).expect("sample topology is consistent")
}

#[allow(dead_code)]
pub fn sample_nodes() -> Vec<Node> {
    let mut nodes = vec![
        node("gw", "Edge Gateway", NodeKind::Gateway, Some("edge")),
        node("api", "Order API", NodeKind::Compute, Some("core")),
        node("db", "Orders DB", NodeKind::Database, Some("data")),
        node("jobs", "Job Queue", NodeKind::Queue, Some("core")),
        node("cdn", "Asset CDN", NodeKind::Cdn, Some("edge")),
    ];
    nodes[1].api = Some(ApiSurface {
        description: Some("REST order management endpoints".to_string()),
        endpoints: vec![ApiEndpoint {
            method: "POST".to_string(),
            path: "/orders".to_string(),
            summary: None,
        }],
    });
    nodes
}

#[allow(dead_code)]
pub fn sample_edges() -> Vec<Edge> {
    vec![
        edge("e1", "gw", "api", "ingest"),
        edge("e2", "api", "db", "write"),
        edge("e3", "api", "jobs", "enqueue"),
        edge("e4", "db", "api", "read"),
    ]
}

#[allow(dead_code)]
pub fn node(id: &str, label: &str, kind: NodeKind, layer: Option<&str>) -> Node {
    Node {
        id: id.to_string(),
        label: label.to_string(),
        kind,
        layer: layer.map(str::to_string),
        schema: json!({ "service": label }),
        dependencies: None,
        api: None,
    }
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str, label: &str) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        label: label.to_string(),
        dir: Direction::Forward,
    }
}

#[allow(dead_code)]
pub fn state_map(pairs: &[(&str, serde_json::Value)]) -> StateMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[allow(dead_code)]
pub fn schema_map(pairs: &[(&str, serde_json::Value)]) -> SchemaMap {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

/// A modern-form flow with branching outcomes, a recovery loop, a terminal
/// step, and a dangling jump target.
///
/// `s1` (ingest, e1) branches to `s2` (persist, e2, retry) on `o1` or to
/// `s3` (requeue, e3, conditional) on `o2`; `s3` loops back to `s1` via
/// `o4`; `s2` ends on the terminal `o3` or points nowhere via `o-dangling`.
#[allow(dead_code)]
pub fn branching_flow() -> FlowDefinition {
    FlowDefinition {
        id: "order-write-path".to_string(),
        label: "Order write path".to_string(),
        description: Some("Ingest, persist, and recover an order".to_string()),
        initial_state: Some(state_map(&[("orderCount", json!(0))])),
        node_schemas: Some(schema_map(&[("db", json!({ "table": "orders" }))])),
        steps: vec![
            StepDefinition {
                id: "s1".to_string(),
                title: "Ingest order".to_string(),
                edge_id: Some("e1".to_string()),
                outcomes: vec![
                    OutcomeDefinition {
                        id: "o1".to_string(),
                        label: "Accepted".to_string(),
                        kind: OutcomeKind::Happy,
                        next_step_id: Some("s2".to_string()),
                        state_changes: Some(state_map(&[("validated", json!(true))])),
                        ..Default::default()
                    },
                    OutcomeDefinition {
                        id: "o2".to_string(),
                        label: "Rejected".to_string(),
                        kind: OutcomeKind::Unhappy,
                        next_step_id: Some("s3".to_string()),
                        state_changes: Some(state_map(&[
                            ("validated", json!(false)),
                            ("error", json!("bad-request")),
                        ])),
                        ..Default::default()
                    },
                ],
                unhappy: vec![AlternateEdge {
                    edge_id: "e4".to_string(),
                    title: Some("fallback read".to_string()),
                }],
                ..Default::default()
            },
            StepDefinition {
                id: "s2".to_string(),
                title: "Persist order".to_string(),
                edge_id: Some("e2".to_string()),
                kind: StepTypeTag::Retry,
                retry_policy: Some(RetryPolicy {
                    enabled: true,
                    max_attempts: 3,
                    backoff_ms: vec![100, 500, 2500],
                    retry_on: vec!["timeout".to_string()],
                }),
                node_schemas: Some(schema_map(&[(
                    "db",
                    json!({ "table": "orders", "lock": "row" }),
                )])),
                outcomes: vec![
                    OutcomeDefinition {
                        id: "o3".to_string(),
                        label: "Stored".to_string(),
                        kind: OutcomeKind::Terminal,
                        state_changes: Some(state_map(&[("persisted", json!(true))])),
                        ..Default::default()
                    },
                    OutcomeDefinition {
                        id: "o-dangling".to_string(),
                        label: "Ghost target".to_string(),
                        kind: OutcomeKind::Happy,
                        next_step_id: Some("does-not-exist".to_string()),
                        ..Default::default()
                    },
                ],
                ..Default::default()
            },
            StepDefinition {
                id: "s3".to_string(),
                title: "Requeue order".to_string(),
                edge_id: Some("e3".to_string()),
                kind: StepTypeTag::Conditional,
                condition: Some("attempts < 3".to_string()),
                outcomes: vec![OutcomeDefinition {
                    id: "o4".to_string(),
                    label: "Requeued".to_string(),
                    kind: OutcomeKind::Recovery,
                    next_step_id: Some("s1".to_string()),
                    state_changes: Some(state_map(&[("requeued", json!(true))])),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
        ..Default::default()
    }
}

/// An old-format flow carrying only an edge id list.
#[allow(dead_code)]
pub fn legacy_flow() -> FlowDefinition {
    FlowDefinition {
        id: "db-read-path".to_string(),
        label: "DB read path".to_string(),
        edges: vec!["e1".to_string(), "e2".to_string()],
        ..Default::default()
    }
}

#[allow(dead_code)]
pub fn sample_catalog() -> FlowCatalog {
    FlowCatalog::from_definitions(vec![branching_flow(), legacy_flow()])
}

#[allow(dead_code)]
pub fn sample_navigator() -> FlowNavigator {
    FlowNavigator::new(sample_catalog())
}

/// Surface double that records every paint and focus call.
#[derive(Debug, Default)]
#[allow(dead_code)]
pub struct RecordingSurface {
    pub painted: Vec<CategoryMap>,
    pub focused: Vec<Vec<String>>,
}

impl PresentationSurface for RecordingSurface {
    fn apply_categories(&mut self, categories: &CategoryMap) {
        self.painted.push(categories.clone());
    }

    fn focus(&mut self, element_ids: &[String]) {
        self.focused.push(element_ids.to_vec());
    }
}
