//! Rendering of host signals into wire event payloads.
//!
//! Each [`HostSignal`] maps to exactly one catalog event. Rendering is a
//! pure function of the snapshot data carried in the signal; it never
//! consults the object model, so payloads stay correct even when the
//! entity is already gone (e.g. an unmapped view).

use serde_json::{Value, json};

use vantage_model::{HostSignal, OutputDescription, WsetDescription};

use crate::catalog;

/// A rendered event: the catalog name and the complete wire body.
///
/// The body already carries the `"event"` field; fan-out filters on
/// `name` and sends the body unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct EventPayload {
    /// Catalog name of the event.
    pub name: &'static str,
    /// Complete message body, including the `"event"` field.
    pub body: Value,
}

/// Integer reference to an output, `-1` when absent.
fn output_ref(output: Option<&OutputDescription>) -> i64 {
    output.map_or(-1, |o| i64::try_from(o.id).unwrap_or(-1))
}

/// Integer reference to a workspace set (by index), `-1` when absent.
fn wset_ref(wset: Option<&WsetDescription>) -> i64 {
    wset.map_or(-1, |w| i64::try_from(w.index).unwrap_or(-1))
}

/// Renders a host signal into its wire event.
#[must_use]
pub fn render(signal: &HostSignal) -> EventPayload {
    match signal {
        HostSignal::ViewMapped { view } => EventPayload {
            name: catalog::VIEW_MAPPED,
            body: json!({"event": catalog::VIEW_MAPPED, "view": view}),
        },
        HostSignal::ViewUnmapped { view } => EventPayload {
            name: catalog::VIEW_UNMAPPED,
            body: json!({"event": catalog::VIEW_UNMAPPED, "view": view}),
        },
        HostSignal::ViewMinimized { view } => EventPayload {
            name: catalog::VIEW_MINIMIZED,
            body: json!({"event": catalog::VIEW_MINIMIZED, "view": view}),
        },
        HostSignal::ViewFullscreen { view } => EventPayload {
            name: catalog::VIEW_FULLSCREEN,
            body: json!({"event": catalog::VIEW_FULLSCREEN, "view": view}),
        },
        HostSignal::ViewSticky { view } => EventPayload {
            name: catalog::VIEW_STICKY,
            body: json!({"event": catalog::VIEW_STICKY, "view": view}),
        },
        HostSignal::ViewTitleChanged { view } => EventPayload {
            name: catalog::VIEW_TITLE_CHANGED,
            body: json!({"event": catalog::VIEW_TITLE_CHANGED, "view": view}),
        },
        HostSignal::ViewAppIdChanged { view } => EventPayload {
            name: catalog::VIEW_APP_ID_CHANGED,
            body: json!({"event": catalog::VIEW_APP_ID_CHANGED, "view": view}),
        },
        HostSignal::ViewTiled {
            view,
            old_edges,
            new_edges,
        } => EventPayload {
            name: catalog::VIEW_TILED,
            body: json!({
                "event": catalog::VIEW_TILED,
                "old-edges": old_edges,
                "new-edges": new_edges,
                "view": view,
            }),
        },
        HostSignal::ViewSetOutput { view, output } => EventPayload {
            name: catalog::VIEW_SET_OUTPUT,
            body: json!({
                "event": catalog::VIEW_SET_OUTPUT,
                "output": output,
                "view": view,
            }),
        },
        HostSignal::ViewGeometryChanged { view, old_geometry } => EventPayload {
            name: catalog::VIEW_GEOMETRY_CHANGED,
            body: json!({
                "event": catalog::VIEW_GEOMETRY_CHANGED,
                "old-geometry": old_geometry,
                "view": view,
            }),
        },
        HostSignal::ViewWsetChanged {
            view,
            old_wset,
            new_wset,
        } => EventPayload {
            name: catalog::VIEW_WSET_CHANGED,
            body: json!({
                "event": catalog::VIEW_WSET_CHANGED,
                "old-wset": old_wset,
                "new-wset": new_wset,
                "view": view,
            }),
        },
        HostSignal::ViewWorkspaceChanged { view, from, to } => EventPayload {
            name: catalog::VIEW_WORKSPACE_CHANGED,
            body: json!({
                "event": catalog::VIEW_WORKSPACE_CHANGED,
                "from": from,
                "to": to,
                "view": view,
            }),
        },
        HostSignal::ViewFocused { view } => EventPayload {
            name: catalog::VIEW_FOCUSED,
            body: json!({"event": catalog::VIEW_FOCUSED, "view": view}),
        },
        HostSignal::OutputGainFocus { output } => EventPayload {
            name: catalog::OUTPUT_GAIN_FOCUS,
            body: json!({"event": catalog::OUTPUT_GAIN_FOCUS, "output": output}),
        },
        HostSignal::OutputWsetChanged { output, new_wset } => EventPayload {
            name: catalog::OUTPUT_WSET_CHANGED,
            body: json!({
                "event": catalog::OUTPUT_WSET_CHANGED,
                "new-wset": wset_ref(new_wset.as_ref()),
                "output": output_ref(output.as_ref()),
                "new-wset-data": new_wset,
                "output-data": output,
            }),
        },
        HostSignal::WsetWorkspaceChanged {
            output,
            wset,
            previous,
            new,
        } => EventPayload {
            name: catalog::WSET_WORKSPACE_CHANGED,
            body: json!({
                "event": catalog::WSET_WORKSPACE_CHANGED,
                "previous-workspace": previous,
                "new-workspace": new,
                "output": output_ref(output.as_ref()),
                "wset": wset_ref(wset.as_ref()),
                "output-data": output,
                "wset-data": wset,
            }),
        },
        HostSignal::PluginActivationChanged {
            plugin,
            state,
            output,
        } => EventPayload {
            name: catalog::PLUGIN_ACTIVATION_STATE_CHANGED,
            body: json!({
                "event": catalog::PLUGIN_ACTIVATION_STATE_CHANGED,
                "plugin": plugin,
                "state": state,
                "output": output_ref(output.as_ref()),
                "output-data": output,
            }),
        },
    }
}

/// Renders the `output-added` lifecycle event.
#[must_use]
pub fn output_added(output: &OutputDescription) -> EventPayload {
    EventPayload {
        name: catalog::OUTPUT_ADDED,
        body: json!({"event": catalog::OUTPUT_ADDED, "output": output}),
    }
}

/// Renders the `output-removed` lifecycle event.
#[must_use]
pub fn output_removed(output: &OutputDescription) -> EventPayload {
    EventPayload {
        name: catalog::OUTPUT_REMOVED,
        body: json!({"event": catalog::OUTPUT_REMOVED, "output": output}),
    }
}

#[cfg(test)]
mod tests {
    use vantage_model::{Point, Rectangle};

    use crate::tests::support::{make_output, make_view, make_wset};

    use super::*;

    #[test]
    fn view_event_wraps_view_snapshot() {
        let payload = render(&HostSignal::ViewMapped {
            view: make_view(7),
        });
        assert_eq!(payload.name, "view-mapped");
        assert_eq!(
            payload.body.get("event"),
            Some(&serde_json::json!("view-mapped"))
        );
        assert_eq!(
            payload.body.get("view").and_then(|v| v.get("id")),
            Some(&serde_json::json!(7))
        );
    }

    #[test]
    fn tiled_event_carries_edge_masks() {
        let payload = render(&HostSignal::ViewTiled {
            view: make_view(7),
            old_edges: 0,
            new_edges: 0b1111,
        });
        assert_eq!(payload.body.get("old-edges"), Some(&serde_json::json!(0)));
        assert_eq!(payload.body.get("new-edges"), Some(&serde_json::json!(15)));
    }

    #[test]
    fn focus_cleared_renders_null_view() {
        let payload = render(&HostSignal::ViewFocused { view: None });
        assert_eq!(payload.body.get("view"), Some(&Value::Null));
    }

    #[test]
    fn geometry_change_carries_old_geometry() {
        let payload = render(&HostSignal::ViewGeometryChanged {
            view: make_view(7),
            old_geometry: Rectangle::new(0, 0, 100, 100),
        });
        assert_eq!(
            payload.body.get("old-geometry"),
            Some(&serde_json::json!({"x": 0, "y": 0, "width": 100, "height": 100}))
        );
    }

    #[test]
    fn wset_workspace_change_uses_integer_references() {
        let payload = render(&HostSignal::WsetWorkspaceChanged {
            output: Some(make_output(2)),
            wset: Some(make_wset(3)),
            previous: Point { x: 0, y: 0 },
            new: Point { x: 1, y: 0 },
        });
        assert_eq!(payload.body.get("output"), Some(&serde_json::json!(2)));
        assert_eq!(payload.body.get("wset"), Some(&serde_json::json!(3)));
        assert_eq!(
            payload.body.get("new-workspace"),
            Some(&serde_json::json!({"x": 1, "y": 0}))
        );
    }

    #[test]
    fn detached_references_render_minus_one_and_null() {
        let payload = render(&HostSignal::OutputWsetChanged {
            output: None,
            new_wset: None,
        });
        assert_eq!(payload.body.get("output"), Some(&serde_json::json!(-1)));
        assert_eq!(payload.body.get("new-wset"), Some(&serde_json::json!(-1)));
        assert_eq!(payload.body.get("output-data"), Some(&Value::Null));
        assert_eq!(payload.body.get("new-wset-data"), Some(&Value::Null));
    }

    #[test]
    fn lifecycle_events_wrap_output_snapshot() {
        let added = output_added(&make_output(1));
        assert_eq!(added.name, "output-added");
        let removed = output_removed(&make_output(1));
        assert_eq!(
            removed.body.get("event"),
            Some(&serde_json::json!("output-removed"))
        );
    }
}
