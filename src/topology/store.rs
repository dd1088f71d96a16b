use super::model::{Edge, Node};
use crate::error::TopologyError;
use ahash::AHashMap;
use itertools::Itertools;

/// The deduplicated, deterministically ordered topology graph.
///
/// Built once at startup and read-only afterwards; the rest of the crate
/// only ever consumes it.
#[derive(Debug)]
pub struct TopologyStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: AHashMap<String, usize>,
    edge_index: AHashMap<String, usize>,
}

impl TopologyStore {
    /// Builds a store from raw collections.
    ///
    /// Duplicate ids keep their first occurrence. An edge whose endpoint
    /// does not resolve to a node is a load-time integrity error.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, TopologyError> {
        let nodes: Vec<Node> = nodes.into_iter().unique_by(|n| n.id.clone()).collect();
        let edges: Vec<Edge> = edges.into_iter().unique_by(|e| e.id.clone()).collect();

        let node_index: AHashMap<String, usize> = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.id.clone(), position))
            .collect();
        let edge_index: AHashMap<String, usize> = edges
            .iter()
            .enumerate()
            .map(|(position, edge)| (edge.id.clone(), position))
            .collect();

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !node_index.contains_key(endpoint) {
                    return Err(TopologyError::DanglingEndpoint {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }

        Ok(Self {
            nodes,
            edges,
            node_index,
            edge_index,
        })
    }

    /// Parses the two topology collections from their JSON documents.
    pub fn from_json(nodes_json: &str, edges_json: &str) -> Result<Self, TopologyError> {
        let nodes: Vec<Node> = serde_json::from_str(nodes_json)
            .map_err(|e| TopologyError::JsonParse(e.to_string()))?;
        let edges: Vec<Edge> = serde_json::from_str(edges_json)
            .map_err(|e| TopologyError::JsonParse(e.to_string()))?;
        Self::new(nodes, edges)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.node_index.get(id).map(|position| &self.nodes[*position])
    }

    /// Looks up an edge by id.
    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index.get(id).map(|position| &self.edges[*position])
    }

    /// All nodes carrying the given layer tag.
    pub fn nodes_in_layer<'a>(&'a self, layer: &'a str) -> impl Iterator<Item = &'a Node> {
        self.nodes
            .iter()
            .filter(move |node| node.layer.as_deref() == Some(layer))
    }
}
