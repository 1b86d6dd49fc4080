use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

/// Saved user edits: canonical unit prices and parameter values.
///
/// Nothing here is trusted on load; see `CostStateManager::restore`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Canonical unit price keyed by ingredient name.
    #[serde(default)]
    pub prices: BTreeMap<String, f64>,

    /// Parameter value keyed by parameter name.
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

/// Load a session from a JSON file.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<SessionSnapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot: SessionSnapshot = serde_json::from_str(&content)?;
    Ok(snapshot)
}

/// Save a session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, snapshot: &SessionSnapshot) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path.as_ref(), json)?;
    info!(path = %path.as_ref().display(), "session saved");
    Ok(())
}
