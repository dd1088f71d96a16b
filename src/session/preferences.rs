use super::{LayoutAlgorithm, LayoutOrientation};
use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The small set of user choices that survive a session, stored as one
/// JSON object under fixed keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default)]
    pub recent_searches: Vec<String>,
    #[serde(default)]
    pub layout_algorithm: LayoutAlgorithm,
    #[serde(default)]
    pub layout_orientation: LayoutOrientation,
}

impl Preferences {
    /// Writes the preferences to a file as JSON.
    pub fn save(&self, path: &str) -> Result<(), SnapshotError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;
        fs::write(path, json).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Loads preferences previously written with [`save`](Self::save).
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let json = fs::read_to_string(path).map_err(|e| SnapshotError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        serde_json::from_str(&json).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }
}
