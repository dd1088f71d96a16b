use crate::topology::{Node, TopologyStore};

/// Free-text lookup over the topology, independent of flow highlighting.
pub struct SearchProjector;

impl SearchProjector {
    /// Nodes whose id, label, layer tag, or api description contains the
    /// query, case-insensitively. Blank queries match nothing.
    pub fn matches<'a>(topology: &'a TopologyStore, query: &str) -> Vec<&'a Node> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        topology
            .nodes()
            .iter()
            .filter(|node| Self::node_matches(node, &needle))
            .collect()
    }

    /// Ids of matching nodes, ready to hand to a presentation surface as
    /// its own "matched" styling pass.
    pub fn matched_ids(topology: &TopologyStore, query: &str) -> Vec<String> {
        Self::matches(topology, query)
            .into_iter()
            .map(|node| node.id.clone())
            .collect()
    }

    fn node_matches(node: &Node, needle: &str) -> bool {
        if node.id.to_lowercase().contains(needle) || node.label.to_lowercase().contains(needle) {
            return true;
        }
        if node
            .layer
            .as_deref()
            .is_some_and(|layer| layer.to_lowercase().contains(needle))
        {
            return true;
        }
        node.api
            .as_ref()
            .and_then(|api| api.description.as_deref())
            .is_some_and(|text| text.to_lowercase().contains(needle))
    }
}

/// The last few search queries, most recent first, without duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecentQueries {
    entries: Vec<String>,
}

impl RecentQueries {
    pub const CAPACITY: usize = 5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the list from persisted preferences, trimming to capacity.
    pub fn from_entries(entries: Vec<String>) -> Self {
        let mut recent = Self::default();
        for query in entries.into_iter().rev() {
            recent.record(&query);
        }
        recent
    }

    /// Records a query, moving an existing entry to the front.
    pub fn record(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        self.entries.retain(|entry| entry != query);
        self.entries.insert(0, query.to_string());
        self.entries.truncate(Self::CAPACITY);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}
