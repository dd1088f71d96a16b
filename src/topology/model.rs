use serde::{Deserialize, Serialize};

/// Classification tag for a topology node.
///
/// The set is open-ended: tags the viewer does not know about round-trip
/// through the `Other` variant unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Queue,
    Database,
    Compute,
    Cdn,
    Cache,
    Gateway,
    Scheduler,
    External,
    #[serde(untagged)]
    Other(String),
}

/// Advisory direction tag on an edge. Never consulted by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Reference lists naming what a node depends on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dependencies {
    #[serde(default)]
    pub internal: Vec<String>,
    #[serde(default)]
    pub external: Vec<String>,
    #[serde(default)]
    pub databases: Vec<String>,
}

/// Description of the endpoints a node exposes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiSurface {
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub endpoints: Vec<ApiEndpoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEndpoint {
    pub method: String,
    pub path: String,
    #[serde(default)]
    pub summary: Option<String>,
}

/// A single element of the infrastructure graph. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(default)]
    pub layer: Option<String>,
    #[serde(default)]
    pub schema: serde_json::Value,
    #[serde(default)]
    pub dependencies: Option<Dependencies>,
    #[serde(default)]
    pub api: Option<ApiSurface>,
}

/// A directed connection between two nodes. Immutable once loaded; both
/// endpoints must resolve at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    #[serde(default)]
    pub dir: Direction,
}
