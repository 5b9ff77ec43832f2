//! Shared fakes for behaviour tests: a stateful object model, a recording
//! source adapter, and collecting client sinks, all journaling into one
//! shared trace so tests can assert cross-component ordering.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::io;
use std::rc::Rc;

use serde_json::Value;

use vantage_model::{
    DeviceType, Dimensions, HostConfiguration, HostModel, InputDeviceDescription,
    OutputDescription, Rectangle, ViewDescription, ViewLayer, ViewRole, ViewType, WorkspaceState,
    WsetDescription,
};

use crate::clients::{ClientId, ClientSink};
use crate::core::ControlCore;
use crate::envelope::Request;
use crate::source::{AttachToken, SourceAdapter};

/// Shared, ordered trace of adapter and sink activity.
#[derive(Debug, Clone, Default)]
pub(crate) struct Journal(Rc<RefCell<Vec<String>>>);

impl Journal {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&self, entry: impl Into<String>) {
        self.0.borrow_mut().push(entry.into());
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.borrow().clone()
    }

    pub(crate) fn position(&self, entry: &str) -> Option<usize> {
        self.0.borrow().iter().position(|e| e == entry)
    }
}

fn describe(op: &str, event: &str, scope: Option<u64>) -> String {
    scope.map_or_else(
        || format!("{op}:{event}"),
        |s| format!("{op}:{event}@{s}"),
    )
}

/// Source adapter that tracks live attachments and journals every call.
#[derive(Debug)]
pub(crate) struct RecordingAdapter {
    next_token: u64,
    live: BTreeMap<u64, (&'static str, Option<u64>)>,
    journal: Journal,
}

impl RecordingAdapter {
    pub(crate) fn new(journal: Journal) -> Self {
        Self {
            next_token: 0,
            live: BTreeMap::new(),
            journal,
        }
    }

    /// Scopes currently attached for `event` (`None` = global).
    pub(crate) fn live_attachments(&self, event: &str) -> Vec<Option<u64>> {
        self.live
            .values()
            .filter(|(name, _)| *name == event)
            .map(|(_, scope)| *scope)
            .collect()
    }

    /// Total number of live attachments across all events.
    pub(crate) fn live_count(&self) -> usize {
        self.live.len()
    }
}

impl SourceAdapter for RecordingAdapter {
    fn attach(&mut self, event: &'static str, scope: Option<u64>) -> AttachToken {
        self.next_token += 1;
        self.journal.record(describe("attach", event, scope));
        self.live.insert(self.next_token, (event, scope));
        AttachToken::new(self.next_token)
    }

    fn detach(&mut self, token: AttachToken) {
        let (event, scope) = self
            .live
            .remove(&token.raw())
            .expect("detach of a token that was never attached");
        self.journal.record(describe("detach", event, scope));
    }
}

/// Sink that stores every delivered payload and journals the event name.
pub(crate) struct CollectingSink {
    received: Rc<RefCell<Vec<Value>>>,
    journal: Journal,
}

impl ClientSink for CollectingSink {
    fn send(&mut self, payload: &Value) -> io::Result<()> {
        let name = payload
            .get("event")
            .and_then(Value::as_str)
            .unwrap_or("?")
            .to_owned();
        self.journal.record(format!("send:{name}"));
        self.received.borrow_mut().push(payload.clone());
        Ok(())
    }
}

/// Sink that refuses every delivery, as a vanished transport would.
pub(crate) struct FailingSink;

impl ClientSink for FailingSink {
    fn send(&mut self, _payload: &Value) -> io::Result<()> {
        Err(io::Error::from(io::ErrorKind::BrokenPipe))
    }
}

/// What a handler asked the host to change, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mutation {
    DeviceEnabled { id: u64, enabled: bool },
    Focus { id: u64 },
    Close { id: u64 },
    MoveToOutput { view: u64, output: u64, reposition: bool },
    SetGeometry { view: u64, geometry: Rectangle },
    SetSticky { view: u64, sticky: bool },
}

/// In-memory object model with a mutation log.
#[derive(Debug, Default)]
pub(crate) struct FakeModel {
    pub(crate) configuration: HostConfiguration,
    pub(crate) views: BTreeMap<u64, ViewDescription>,
    pub(crate) outputs: BTreeMap<u64, OutputDescription>,
    pub(crate) wsets: BTreeMap<u64, WsetDescription>,
    pub(crate) devices: BTreeMap<u64, InputDeviceDescription>,
    pub(crate) focused_view: Option<u64>,
    pub(crate) focused_output: Option<u64>,
    pub(crate) mutations: Vec<Mutation>,
}

impl HostModel for FakeModel {
    fn configuration(&self) -> HostConfiguration {
        self.configuration.clone()
    }

    fn views(&self) -> Vec<ViewDescription> {
        self.views.values().cloned().collect()
    }

    fn view(&self, id: u64) -> Option<ViewDescription> {
        self.views.get(&id).cloned()
    }

    fn outputs(&self) -> Vec<OutputDescription> {
        self.outputs.values().cloned().collect()
    }

    fn output(&self, id: u64) -> Option<OutputDescription> {
        self.outputs.get(&id).cloned()
    }

    fn workspace_sets(&self) -> Vec<WsetDescription> {
        self.wsets.values().cloned().collect()
    }

    fn workspace_set(&self, index: u64) -> Option<WsetDescription> {
        self.wsets.get(&index).cloned()
    }

    fn focused_view(&self) -> Option<ViewDescription> {
        self.focused_view.and_then(|id| self.view(id))
    }

    fn focused_output(&self) -> Option<OutputDescription> {
        self.focused_output.and_then(|id| self.output(id))
    }

    fn input_devices(&self) -> Vec<InputDeviceDescription> {
        self.devices.values().cloned().collect()
    }

    fn set_device_enabled(&mut self, id: u64, enabled: bool) -> bool {
        let Some(device) = self.devices.get_mut(&id) else {
            return false;
        };
        device.enabled = enabled;
        self.mutations.push(Mutation::DeviceEnabled { id, enabled });
        true
    }

    fn focus_view(&mut self, id: u64) {
        self.focused_view = Some(id);
        self.mutations.push(Mutation::Focus { id });
    }

    fn close_view(&mut self, id: u64) {
        self.mutations.push(Mutation::Close { id });
    }

    fn move_view_to_output(&mut self, view: u64, output: u64, reposition: bool) {
        self.mutations.push(Mutation::MoveToOutput {
            view,
            output,
            reposition,
        });
    }

    fn set_view_geometry(&mut self, view: u64, geometry: Rectangle) {
        if let Some(entry) = self.views.get_mut(&view) {
            entry.geometry = geometry;
        }
        self.mutations.push(Mutation::SetGeometry { view, geometry });
    }

    fn set_view_sticky(&mut self, view: u64, sticky: bool) {
        if let Some(entry) = self.views.get_mut(&view) {
            entry.sticky = sticky;
        }
        self.mutations.push(Mutation::SetSticky { view, sticky });
    }
}

/// A toplevel, mapped view on output 1.
pub(crate) fn make_view(id: u64) -> ViewDescription {
    ViewDescription {
        id,
        pid: 1000,
        title: format!("view-{id}"),
        app_id: "org.example.app".into(),
        base_geometry: Rectangle::new(0, 0, 800, 600),
        parent: -1,
        geometry: Rectangle::new(0, 0, 800, 600),
        bbox: Rectangle::new(0, 0, 800, 600),
        output_id: 1,
        output_name: "DP-1".into(),
        last_focus_timestamp: 0,
        role: ViewRole::Toplevel,
        mapped: true,
        layer: ViewLayer::Workspace,
        tiled_edges: 0,
        fullscreen: false,
        minimized: false,
        activated: false,
        sticky: false,
        wset_index: 1,
        min_size: Dimensions::default(),
        max_size: Dimensions::default(),
        focusable: true,
        kind: ViewType::Toplevel,
    }
}

/// An unmanaged (non-toplevel) view.
pub(crate) fn make_unmanaged_view(id: u64) -> ViewDescription {
    ViewDescription {
        role: ViewRole::Unmanaged,
        layer: ViewLayer::Unmanaged,
        focusable: false,
        kind: ViewType::Unmanaged,
        ..make_view(id)
    }
}

pub(crate) fn make_output(id: u64) -> OutputDescription {
    OutputDescription {
        id,
        name: format!("DP-{id}"),
        geometry: Rectangle::new(0, 0, 1920, 1080),
        workarea: Rectangle::new(0, 30, 1920, 1050),
        wset_index: id,
        workspace: WorkspaceState {
            x: 0,
            y: 0,
            grid_width: 3,
            grid_height: 3,
        },
    }
}

pub(crate) fn make_wset(index: u64) -> WsetDescription {
    WsetDescription {
        index,
        name: format!("workspace set {index}"),
        output_id: 1,
        output_name: "DP-1".into(),
        workspace: WorkspaceState {
            x: 0,
            y: 0,
            grid_width: 3,
            grid_height: 3,
        },
    }
}

pub(crate) fn make_device(id: u64) -> InputDeviceDescription {
    InputDeviceDescription {
        id,
        name: "AT Translated Set 2 keyboard".into(),
        vendor: 1,
        product: 1,
        kind: DeviceType::Keyboard,
        enabled: true,
    }
}

/// Fully wired core plus fakes, driven the way a host event loop would.
pub(crate) struct CoreWorld {
    pub(crate) core: ControlCore,
    pub(crate) model: FakeModel,
    pub(crate) adapter: RecordingAdapter,
    pub(crate) journal: Journal,
}

impl CoreWorld {
    pub(crate) fn new() -> Self {
        let journal = Journal::new();
        Self {
            core: ControlCore::new().expect("build control core"),
            model: FakeModel::default(),
            adapter: RecordingAdapter::new(journal.clone()),
            journal,
        }
    }

    /// World with one view (id 7), one output (id 1), one wset (index 1)
    /// and one input device (id 3).
    pub(crate) fn with_basic_scene() -> Self {
        let mut world = Self::new();
        world.model.views.insert(7, make_view(7));
        world.model.outputs.insert(1, make_output(1));
        world.model.wsets.insert(1, make_wset(1));
        world.model.devices.insert(3, make_device(3));
        world
    }

    /// Connects a collecting client; returns its handle and received
    /// payloads.
    pub(crate) fn connect(&mut self) -> (ClientId, Rc<RefCell<Vec<Value>>>) {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = CollectingSink {
            received: Rc::clone(&received),
            journal: self.journal.clone(),
        };
        (self.core.client_connected(Box::new(sink)), received)
    }

    /// Connects a client whose transport is already gone.
    pub(crate) fn connect_failing(&mut self) -> ClientId {
        self.core.client_connected(Box::new(FailingSink))
    }

    /// Dispatches one request, panicking on programmer-error conditions.
    pub(crate) fn request(&mut self, client: ClientId, method: &str, data: Value) -> Value {
        let request = Request {
            method: method.to_owned(),
            data,
        };
        self.core
            .handle_request(&mut self.adapter, &mut self.model, client, &request)
            .expect("request must not raise a core error")
    }

    pub(crate) fn disconnect(&mut self, client: ClientId) {
        self.core
            .client_disconnected(&mut self.adapter, client)
            .expect("disconnect must not raise a core error");
    }

    /// Adds an output to the model and announces it to the core.
    pub(crate) fn announce_output(&mut self, output: OutputDescription) {
        self.model.outputs.insert(output.id, output.clone());
        self.core.output_added(&mut self.adapter, &output);
    }

    /// Removes an output from the model and announces the removal.
    pub(crate) fn remove_output(&mut self, id: u64) {
        if let Some(output) = self.model.outputs.remove(&id) {
            self.core.output_removed(&mut self.adapter, &output);
        }
    }
}
