//! The fixed catalog of event names clients can watch.
//!
//! Each entry pairs a stable wire name with the way its underlying source
//! is attached. The catalog never changes at runtime; subscription state
//! and the watch handler both index into it by name.

use std::collections::BTreeMap;

/// Wire name of the `view-mapped` event.
pub const VIEW_MAPPED: &str = "view-mapped";
/// Wire name of the `view-unmapped` event.
pub const VIEW_UNMAPPED: &str = "view-unmapped";
/// Wire name of the `view-set-output` event.
pub const VIEW_SET_OUTPUT: &str = "view-set-output";
/// Wire name of the `view-geometry-changed` event.
pub const VIEW_GEOMETRY_CHANGED: &str = "view-geometry-changed";
/// Wire name of the `view-wset-changed` event.
pub const VIEW_WSET_CHANGED: &str = "view-wset-changed";
/// Wire name of the `view-focused` event.
pub const VIEW_FOCUSED: &str = "view-focused";
/// Wire name of the `view-title-changed` event.
pub const VIEW_TITLE_CHANGED: &str = "view-title-changed";
/// Wire name of the `view-app-id-changed` event.
pub const VIEW_APP_ID_CHANGED: &str = "view-app-id-changed";
/// Wire name of the `plugin-activation-state-changed` event.
pub const PLUGIN_ACTIVATION_STATE_CHANGED: &str = "plugin-activation-state-changed";
/// Wire name of the `output-gain-focus` event.
pub const OUTPUT_GAIN_FOCUS: &str = "output-gain-focus";
/// Wire name of the `view-tiled` event.
pub const VIEW_TILED: &str = "view-tiled";
/// Wire name of the `view-minimized` event.
pub const VIEW_MINIMIZED: &str = "view-minimized";
/// Wire name of the `view-fullscreen` event.
pub const VIEW_FULLSCREEN: &str = "view-fullscreen";
/// Wire name of the `view-sticky` event.
pub const VIEW_STICKY: &str = "view-sticky";
/// Wire name of the `view-workspace-changed` event.
pub const VIEW_WORKSPACE_CHANGED: &str = "view-workspace-changed";
/// Wire name of the `output-wset-changed` event.
pub const OUTPUT_WSET_CHANGED: &str = "output-wset-changed";
/// Wire name of the `wset-workspace-changed` event.
pub const WSET_WORKSPACE_CHANGED: &str = "wset-workspace-changed";
/// Wire name of the `output-added` event.
pub const OUTPUT_ADDED: &str = "output-added";
/// Wire name of the `output-removed` event.
pub const OUTPUT_REMOVED: &str = "output-removed";

/// How an event's underlying source is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceBinding {
    /// One attachment at the global scope while anyone is subscribed.
    Core,
    /// One attachment per existing output while anyone is subscribed,
    /// replayed to outputs that appear later.
    PerOutput,
    /// No attachment: the event is emitted from the output-lifecycle
    /// callbacks the host always invokes.
    Lifecycle,
}

/// One catalog entry: a wire name and its source binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDescriptor {
    /// Stable wire name clients subscribe with.
    pub name: &'static str,
    /// How the underlying source is attached.
    pub binding: SourceBinding,
}

const fn core(name: &'static str) -> EventDescriptor {
    EventDescriptor {
        name,
        binding: SourceBinding::Core,
    }
}

const fn per_output(name: &'static str) -> EventDescriptor {
    EventDescriptor {
        name,
        binding: SourceBinding::PerOutput,
    }
}

const fn lifecycle(name: &'static str) -> EventDescriptor {
    EventDescriptor {
        name,
        binding: SourceBinding::Lifecycle,
    }
}

/// Every event the control surface can emit.
pub const CATALOG: &[EventDescriptor] = &[
    core(VIEW_MAPPED),
    core(VIEW_UNMAPPED),
    core(VIEW_SET_OUTPUT),
    core(VIEW_GEOMETRY_CHANGED),
    core(VIEW_WSET_CHANGED),
    core(VIEW_FOCUSED),
    core(VIEW_TITLE_CHANGED),
    core(VIEW_APP_ID_CHANGED),
    core(PLUGIN_ACTIVATION_STATE_CHANGED),
    core(OUTPUT_GAIN_FOCUS),
    per_output(VIEW_TILED),
    per_output(VIEW_MINIMIZED),
    per_output(VIEW_FULLSCREEN),
    per_output(VIEW_STICKY),
    per_output(VIEW_WORKSPACE_CHANGED),
    per_output(OUTPUT_WSET_CHANGED),
    per_output(WSET_WORKSPACE_CHANGED),
    lifecycle(OUTPUT_ADDED),
    lifecycle(OUTPUT_REMOVED),
];

/// Name-indexed view over [`CATALOG`].
#[derive(Debug)]
pub struct EventCatalog {
    index: BTreeMap<&'static str, &'static EventDescriptor>,
}

impl EventCatalog {
    /// Builds the index over the static catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: CATALOG.iter().map(|entry| (entry.name, entry)).collect(),
        }
    }

    /// Returns `true` when `name` is a known event.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a descriptor by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static EventDescriptor> {
        self.index.get(name).copied()
    }

    /// Iterates over every event name, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.index.keys().copied()
    }

    /// Iterates over every descriptor, in lexical name order.
    pub fn entries(&self) -> impl Iterator<Item = &'static EventDescriptor> + '_ {
        self.index.values().copied()
    }

    /// Number of catalog entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when the catalog is empty (never, in practice).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::new()
    }
}
