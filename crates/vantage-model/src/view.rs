//! View (window) descriptions and their classification enums.

use serde::{Deserialize, Serialize};

use crate::geometry::{Dimensions, Rectangle};

/// Scene-graph role of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewRole {
    /// A regular application window.
    Toplevel,
    /// A surface the compositor does not manage (e.g. override-redirect).
    Unmanaged,
    /// A shell component such as a panel or background.
    DesktopEnvironment,
    /// Role could not be determined.
    Unknown,
}

/// Scene-graph layer a view is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewLayer {
    /// Background layer.
    Background,
    /// Bottom layer, above the background.
    Bottom,
    /// The regular workspace layer.
    Workspace,
    /// Top layer, above regular windows.
    Top,
    /// Unmanaged surfaces.
    Unmanaged,
    /// Overlay layer.
    Overlay,
    /// Session-lock layer.
    Lock,
    /// Desktop-widget layer.
    Dew,
    /// The view is not attached to any layer.
    None,
}

/// Client-facing view category, combining role and layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewType {
    /// A regular application window.
    Toplevel,
    /// An X11 override-redirect surface.
    XOr,
    /// An unmanaged non-X11 surface.
    Unmanaged,
    /// A background or bottom-layer surface.
    Background,
    /// A top-layer surface such as a panel.
    Panel,
    /// An overlay-layer surface.
    Overlay,
    /// Category could not be determined.
    Unknown,
}

/// Snapshot of a single view, in the exact shape clients receive.
///
/// Integer reference fields (`parent`, `output-id`, `wset-index`) use `-1`
/// as the "not present" sentinel rather than `null`, matching the wire
/// contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewDescription {
    /// Stable view id.
    pub id: u64,
    /// Process id of the owning client, `-1` when unknown.
    pub pid: i64,
    /// Window title.
    pub title: String,
    /// Application id (or X11 class).
    #[serde(rename = "app-id")]
    pub app_id: String,
    /// Geometry of the main surface, excluding decorations.
    #[serde(rename = "base-geometry")]
    pub base_geometry: Rectangle,
    /// Id of the parent view, `-1` for top-level views.
    pub parent: i64,
    /// Target geometry, including pending resizes.
    pub geometry: Rectangle,
    /// Bounding box including decorations and subsurfaces.
    pub bbox: Rectangle,
    /// Id of the output the view is on, `-1` when detached.
    #[serde(rename = "output-id")]
    pub output_id: i64,
    /// Name of the output the view is on.
    #[serde(rename = "output-name")]
    pub output_name: String,
    /// Timestamp of the last keyboard-focus grab.
    #[serde(rename = "last-focus-timestamp")]
    pub last_focus_timestamp: i64,
    /// Scene-graph role.
    pub role: ViewRole,
    /// Whether the view currently has a mapped surface.
    pub mapped: bool,
    /// Scene-graph layer.
    pub layer: ViewLayer,
    /// Bitmask of the edges the view is tiled to, `0` when floating.
    #[serde(rename = "tiled-edges")]
    pub tiled_edges: u32,
    /// Whether the view is fullscreen.
    pub fullscreen: bool,
    /// Whether the view is minimized.
    pub minimized: bool,
    /// Whether the view is the active (keyboard-focused) toplevel.
    pub activated: bool,
    /// Whether the view is visible on all workspaces.
    pub sticky: bool,
    /// Index of the workspace set the view belongs to, `-1` when none.
    #[serde(rename = "wset-index")]
    pub wset_index: i64,
    /// Minimum size requested by the client.
    #[serde(rename = "min-size")]
    pub min_size: Dimensions,
    /// Maximum size requested by the client.
    #[serde(rename = "max-size")]
    pub max_size: Dimensions,
    /// Whether the view accepts keyboard focus.
    pub focusable: bool,
    /// Client-facing category.
    #[serde(rename = "type")]
    pub kind: ViewType,
}

impl ViewDescription {
    /// Returns `true` when the view is a regular application window.
    ///
    /// Focus and configure requests are only valid for toplevels.
    #[must_use]
    pub fn is_toplevel(&self) -> bool {
        self.role == ViewRole::Toplevel
    }
}
