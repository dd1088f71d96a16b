use super::{LayoutAlgorithm, LayoutOrientation};
use crate::error::SnapshotError;
use crate::flow::StateMap;
use crate::navigator::{PathEntry, StateRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

/// The canonical state document for session replay and debugging.
///
/// Round-trips losslessly through [`to_json`](Self::to_json) /
/// [`from_json`](Self::from_json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub timestamp: DateTime<Utc>,
    pub selected_flow_id: Option<String>,
    pub current_step_index: usize,
    pub flow_path_history: Vec<PathEntry>,
    pub flow_state: StateMap,
    pub state_history: Vec<StateRecord>,
    pub search_query: Option<String>,
    pub filter_layer: Option<String>,
    pub layout_algorithm: LayoutAlgorithm,
    pub layout_orientation: LayoutOrientation,
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Writes the snapshot to a file as JSON.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads a snapshot previously written with [`save`](Self::save).
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&json)
    }
}
