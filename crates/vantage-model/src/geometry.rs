//! Geometry primitives shared by entity descriptions and event payloads.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in compositor layout coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal position of the top-left corner.
    pub x: i32,
    /// Vertical position of the top-left corner.
    pub y: i32,
    /// Width in logical pixels.
    pub width: i32,
    /// Height in logical pixels.
    pub height: i32,
}

/// A point in workspace-grid or layout coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
}

/// A width/height pair, used for view size constraints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in logical pixels.
    pub width: i32,
    /// Height in logical pixels.
    pub height: i32,
}

/// Current workspace position and grid size of a workspace set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceState {
    /// Horizontal workspace coordinate.
    pub x: i32,
    /// Vertical workspace coordinate.
    pub y: i32,
    /// Number of workspace columns.
    pub grid_width: i32,
    /// Number of workspace rows.
    pub grid_height: i32,
}

impl Rectangle {
    /// Creates a rectangle from position and size.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
