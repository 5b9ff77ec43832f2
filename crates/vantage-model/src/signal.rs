//! Raw notifications the host delivers into the event pipeline.

use crate::geometry::{Point, Rectangle};
use crate::output::OutputDescription;
use crate::view::ViewDescription;
use crate::wset::WsetDescription;

/// A single host-internal notification, snapshotted at signal time.
///
/// The host's event loop constructs one of these whenever an internal
/// signal fires for an event source the core has attached to, and hands it
/// to the core for rendering and fan-out. Every variant carries owned
/// description snapshots rather than ids, so rendering an event payload
/// never has to consult the object model, whose state may already have
/// moved on (an unmapped view is gone by the time the notification is
/// processed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSignal {
    /// A view's surface became mapped.
    ViewMapped {
        /// The mapped view.
        view: ViewDescription,
    },
    /// A view's surface was unmapped.
    ViewUnmapped {
        /// The unmapped view, snapshotted before teardown.
        view: ViewDescription,
    },
    /// A view was minimized or restored.
    ViewMinimized {
        /// The affected view, reflecting the new state.
        view: ViewDescription,
    },
    /// A view entered or left fullscreen.
    ViewFullscreen {
        /// The affected view, reflecting the new state.
        view: ViewDescription,
    },
    /// A view's sticky flag changed.
    ViewSticky {
        /// The affected view, reflecting the new state.
        view: ViewDescription,
    },
    /// A view's title changed.
    ViewTitleChanged {
        /// The affected view, carrying the new title.
        view: ViewDescription,
    },
    /// A view's application id changed.
    ViewAppIdChanged {
        /// The affected view, carrying the new application id.
        view: ViewDescription,
    },
    /// A view's tiled edges changed.
    ViewTiled {
        /// The affected view.
        view: ViewDescription,
        /// Edge bitmask before the change.
        old_edges: u32,
        /// Edge bitmask after the change.
        new_edges: u32,
    },
    /// A view moved to a different output.
    ViewSetOutput {
        /// The affected view.
        view: ViewDescription,
        /// The new output, when the view landed on one.
        output: Option<OutputDescription>,
    },
    /// A view's geometry changed.
    ViewGeometryChanged {
        /// The affected view, carrying the new geometry.
        view: ViewDescription,
        /// Geometry before the change.
        old_geometry: Rectangle,
    },
    /// A view moved between workspace sets.
    ViewWsetChanged {
        /// The affected view.
        view: ViewDescription,
        /// The set the view left, when it was in one.
        old_wset: Option<WsetDescription>,
        /// The set the view joined, when it joined one.
        new_wset: Option<WsetDescription>,
    },
    /// A view moved between workspaces within its set.
    ViewWorkspaceChanged {
        /// The affected view.
        view: ViewDescription,
        /// Workspace coordinates before the move.
        from: Point,
        /// Workspace coordinates after the move.
        to: Point,
    },
    /// Keyboard focus moved to a view, or to nothing.
    ViewFocused {
        /// The newly focused view, `None` when focus was cleared.
        view: Option<ViewDescription>,
    },
    /// An output gained seat focus.
    OutputGainFocus {
        /// The focused output.
        output: OutputDescription,
    },
    /// The workspace set shown on an output changed.
    OutputWsetChanged {
        /// The affected output, when still present.
        output: Option<OutputDescription>,
        /// The set now shown on the output.
        new_wset: Option<WsetDescription>,
    },
    /// A workspace set switched its visible workspace.
    WsetWorkspaceChanged {
        /// The output showing the set, when attached.
        output: Option<OutputDescription>,
        /// The affected workspace set.
        wset: Option<WsetDescription>,
        /// Workspace coordinates before the switch.
        previous: Point,
        /// Workspace coordinates after the switch.
        new: Point,
    },
    /// A plugin was activated or deactivated on an output.
    PluginActivationChanged {
        /// Name of the plugin.
        plugin: String,
        /// `true` when activated, `false` when deactivated.
        state: bool,
        /// The output the plugin state changed on.
        output: Option<OutputDescription>,
    },
}
