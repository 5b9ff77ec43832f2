//! The read/mutate interface between the control surface and the host.

use crate::config::HostConfiguration;
use crate::geometry::Rectangle;
use crate::input::InputDeviceDescription;
use crate::output::OutputDescription;
use crate::view::ViewDescription;
use crate::wset::WsetDescription;

/// Narrow interface over the host's live object model.
///
/// Command handlers receive an implementation of this trait and never reach
/// into host internals directly. Read methods return owned snapshots so
/// results can be serialized after the call without borrowing host state.
///
/// Mutators take entity ids and assume the entity exists: handlers resolve
/// entities through the read methods first, and the single-threaded
/// execution model guarantees nothing disappears in between. A mutation on
/// an id that was never resolved is a handler bug, and implementations are
/// free to ignore such calls.
pub trait HostModel {
    /// Static build and configuration information.
    fn configuration(&self) -> HostConfiguration;

    /// Snapshots of all views, in stacking order.
    fn views(&self) -> Vec<ViewDescription>;

    /// Snapshot of a single view.
    fn view(&self, id: u64) -> Option<ViewDescription>;

    /// Snapshots of all outputs, in layout order.
    fn outputs(&self) -> Vec<OutputDescription>;

    /// Snapshot of a single output.
    fn output(&self, id: u64) -> Option<OutputDescription>;

    /// Snapshots of all workspace sets, attached or not.
    fn workspace_sets(&self) -> Vec<WsetDescription>;

    /// Snapshot of a single workspace set, by index.
    fn workspace_set(&self, index: u64) -> Option<WsetDescription>;

    /// The view currently holding keyboard focus.
    fn focused_view(&self) -> Option<ViewDescription>;

    /// The output currently holding seat focus.
    fn focused_output(&self) -> Option<OutputDescription>;

    /// Snapshots of all input devices.
    fn input_devices(&self) -> Vec<InputDeviceDescription>;

    /// Enables or disables an input device.
    ///
    /// Returns `false` when no device with the given id exists.
    fn set_device_enabled(&mut self, id: u64, enabled: bool) -> bool;

    /// Requests keyboard focus for a toplevel view.
    fn focus_view(&mut self, id: u64);

    /// Asks the view's client to close it.
    fn close_view(&mut self, id: u64);

    /// Moves a view to another output.
    ///
    /// When `reposition` is set the view is also placed onto the target
    /// output's visible workspace; callers pass `false` when an explicit
    /// geometry follows.
    fn move_view_to_output(&mut self, view: u64, output: u64, reposition: bool);

    /// Sets the target geometry of a toplevel view.
    fn set_view_geometry(&mut self, view: u64, geometry: Rectangle);

    /// Makes a view visible on all workspaces, or pins it back to one.
    fn set_view_sticky(&mut self, view: u64, sticky: bool);
}
