//! Workspace-set descriptions.

use serde::{Deserialize, Serialize};

use crate::geometry::WorkspaceState;

/// Snapshot of a workspace set, in the exact shape clients receive.
///
/// A workspace set may be detached from any output (for example after its
/// output was unplugged); `output-id` is then `-1` and `output-name` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WsetDescription {
    /// Stable index clients use to refer to this set.
    pub index: u64,
    /// Human-readable name.
    pub name: String,
    /// Id of the output the set is attached to, `-1` when detached.
    #[serde(rename = "output-id")]
    pub output_id: i64,
    /// Name of the output the set is attached to, empty when detached.
    #[serde(rename = "output-name")]
    pub output_name: String,
    /// Current workspace and grid size.
    pub workspace: WorkspaceState,
}
