use super::definition::FlowDefinition;
use super::model::Flow;
use crate::error::CatalogError;
use ahash::AHashMap;
use tracing::warn;

/// The immutable set of flows available for playback.
///
/// Built once and handed to the navigator at construction. Malformed
/// definitions are dropped here with a warning rather than failing the
/// load.
#[derive(Debug, Default)]
pub struct FlowCatalog {
    flows: Vec<Flow>,
    index: AHashMap<String, usize>,
}

impl FlowCatalog {
    pub fn from_definitions(definitions: Vec<FlowDefinition>) -> Self {
        let mut flows: Vec<Flow> = Vec::with_capacity(definitions.len());
        let mut index = AHashMap::new();
        for def in definitions {
            match Flow::from_definition(def) {
                Ok(flow) => {
                    if index.contains_key(&flow.id) {
                        warn!(flow_id = %flow.id, "duplicate flow id, keeping the first definition");
                        continue;
                    }
                    index.insert(flow.id.clone(), flows.len());
                    flows.push(flow);
                }
                Err(err) => warn!(%err, "dropping malformed flow definition"),
            }
        }
        Self { flows, index }
    }

    /// Parses a JSON array of flow records, modern or legacy shape, without
    /// the caller declaring which is in use.
    ///
    /// Records that do not deserialize are dropped with a warning; only a
    /// document that is not a JSON array at all is an error.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(|e| CatalogError::JsonParse(e.to_string()))?;
        let definitions = raw
            .into_iter()
            .filter_map(|value| match serde_json::from_value::<FlowDefinition>(value) {
                Ok(def) => Some(def),
                Err(err) => {
                    warn!(%err, "dropping unreadable flow record");
                    None
                }
            })
            .collect();
        Ok(Self::from_definitions(definitions))
    }

    /// Looks up a flow by id.
    pub fn get(&self, flow_id: &str) -> Option<&Flow> {
        self.index.get(flow_id).map(|position| &self.flows[*position])
    }

    pub fn flows(&self) -> &[Flow] {
        &self.flows
    }

    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }
}
