//! Snapshot Output
//!
//! Writes snapshots as pretty JSON for tools that poll a file.

use std::fs;
use std::path::Path;

use nightwatch_events::SimulationSnapshot;

/// Pretty JSON for one snapshot.
pub fn snapshot_json(snapshot: &SimulationSnapshot) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshot)
}

/// Write snapshot to a JSON file, replacing any previous one
pub fn write_snapshot(snapshot: &SimulationSnapshot, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = snapshot_json(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}
