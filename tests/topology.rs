//! Topology store: dedup, integrity checks, and lookups.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn duplicate_ids_keep_their_first_occurrence() {
    let mut nodes = sample_nodes();
    nodes.push(node("gw", "Impostor Gateway", NodeKind::Compute, None));
    let mut edges = sample_edges();
    edges.push(edge("e1", "db", "jobs", "impostor"));
    let store = TopologyStore::new(nodes, edges).unwrap();
    assert_eq!(store.nodes().len(), 5);
    assert_eq!(store.edges().len(), 4);
    assert_eq!(store.node("gw").unwrap().label, "Edge Gateway");
    assert_eq!(store.edge("e1").unwrap().target, "api");
}

#[test]
fn dangling_edge_endpoint_is_a_load_time_error() {
    let nodes = sample_nodes();
    let mut edges = sample_edges();
    edges.push(edge("e9", "gw", "missing", "broken"));
    let err = TopologyStore::new(nodes, edges).unwrap_err();
    match err {
        TopologyError::DanglingEndpoint { edge_id, node_id } => {
            assert_eq!(edge_id, "e9");
            assert_eq!(node_id, "missing");
        }
        other => panic!("expected dangling endpoint, got {other}"),
    }
}

#[test]
fn from_json_parses_both_collections() {
    let nodes_json = r#"[
        {"id": "a", "label": "Service A", "type": "compute", "layer": "core"},
        {"id": "b", "label": "Store B", "type": "database", "schema": {"engine": "postgres"}},
        {"id": "c", "label": "Custom C", "type": "feature-store"}
    ]"#;
    let edges_json = r#"[
        {"id": "x", "source": "a", "target": "b", "label": "write", "dir": "forward"},
        {"id": "y", "source": "b", "target": "a", "label": "read", "dir": "backward"}
    ]"#;
    let store = TopologyStore::from_json(nodes_json, edges_json).unwrap();
    assert_eq!(store.nodes().len(), 3);
    assert_eq!(store.edges().len(), 2);
    assert_eq!(store.node("b").unwrap().schema["engine"], "postgres");
    assert_eq!(
        store.node("c").unwrap().kind,
        NodeKind::Other("feature-store".to_string())
    );
    assert_eq!(store.edge("y").unwrap().dir, Direction::Backward);
}

#[test]
fn from_json_surfaces_parse_failures() {
    let err = TopologyStore::from_json("not json", "[]").unwrap_err();
    assert!(matches!(err, TopologyError::JsonParse(_)));
}

#[test]
fn lookups_miss_cleanly() {
    let store = sample_topology();
    assert!(store.node("nope").is_none());
    assert!(store.edge("nope").is_none());
}

#[test]
fn layer_lookup_filters_nodes() {
    let store = sample_topology();
    let mut ids: Vec<&str> = store.nodes_in_layer("edge").map(|n| n.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["cdn", "gw"]);
    assert_eq!(store.nodes_in_layer("nope").count(), 0);
}

#[test]
fn edge_direction_defaults_to_forward() {
    let edges_json = r#"[{"id": "x", "source": "gw", "target": "api", "label": "plain"}]"#;
    let nodes_json = serde_json::to_string(&sample_nodes()).unwrap();
    let store = TopologyStore::from_json(&nodes_json, edges_json).unwrap();
    assert_eq!(store.edge("x").unwrap().dir, Direction::Forward);
}
