//! Output (display) descriptions.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rectangle, WorkspaceState};

/// Snapshot of a single output, in the exact shape clients receive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDescription {
    /// Stable output id.
    pub id: u64,
    /// Connector name, e.g. `DP-1`.
    pub name: String,
    /// Position and size within the global layout.
    pub geometry: Rectangle,
    /// Usable area after panel/exclusive-zone reservations.
    pub workarea: Rectangle,
    /// Index of the workspace set shown on this output.
    #[serde(rename = "wset-index")]
    pub wset_index: u64,
    /// Current workspace and grid size.
    pub workspace: WorkspaceState,
}
