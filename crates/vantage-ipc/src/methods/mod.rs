//! The built-in command handlers.
//!
//! One module per entity family, mirroring the command namespace. Every
//! handler is a plain function over [`MethodCtx`]; registration and
//! teardown walk the same name list so init and fini stay in sync.

mod host;
mod input;
mod outputs;
mod views;
mod watch;
mod wsets;

use serde::Serialize;
use serde_json::Value;

use crate::dispatch::MethodRepository;
use crate::errors::{CoreError, DispatchError};

/// Method name: static build/config info.
pub const HOST_CONFIGURATION: &str = "host/configuration";
/// Method name: enumerate input devices.
pub const INPUT_LIST_DEVICES: &str = "input/list-devices";
/// Method name: enable/disable an input device.
pub const INPUT_CONFIGURE_DEVICE: &str = "input/configure-device";
/// Method name: replace the issuing client's subscription set.
pub const EVENTS_WATCH: &str = "events/watch";
/// Method name: enumerate all views.
pub const LIST_VIEWS: &str = "entities/list-views";
/// Method name: enumerate all outputs.
pub const LIST_OUTPUTS: &str = "entities/list-outputs";
/// Method name: enumerate all workspace sets.
pub const LIST_WSETS: &str = "entities/list-wsets";
/// Method name: describe one view.
pub const VIEW_INFO: &str = "entities/view-info";
/// Method name: describe one output.
pub const OUTPUT_INFO: &str = "entities/output-info";
/// Method name: describe one workspace set.
pub const WSET_INFO: &str = "entities/wset-info";
/// Method name: apply mutations to a view.
pub const CONFIGURE_VIEW: &str = "entities/configure-view";
/// Method name: request keyboard focus for a view.
pub const FOCUS_VIEW: &str = "entities/focus-view";
/// Method name: describe the focused view.
pub const GET_FOCUSED_VIEW: &str = "entities/get-focused-view";
/// Method name: describe the focused output.
pub const GET_FOCUSED_OUTPUT: &str = "entities/get-focused-output";
/// Method name: ask a view's client to close it.
pub const CLOSE_VIEW: &str = "entities/close-view";

/// Every built-in method name, in registration order.
pub const ALL: &[&str] = &[
    HOST_CONFIGURATION,
    INPUT_LIST_DEVICES,
    INPUT_CONFIGURE_DEVICE,
    EVENTS_WATCH,
    LIST_VIEWS,
    LIST_OUTPUTS,
    LIST_WSETS,
    VIEW_INFO,
    OUTPUT_INFO,
    WSET_INFO,
    CONFIGURE_VIEW,
    FOCUS_VIEW,
    GET_FOCUSED_VIEW,
    GET_FOCUSED_OUTPUT,
    CLOSE_VIEW,
];

/// Registers every built-in method.
///
/// # Errors
///
/// Returns [`CoreError::DuplicateMethod`] when any name is already taken,
/// which means the repository was initialised twice.
pub fn register_all(repository: &mut MethodRepository) -> Result<(), CoreError> {
    repository.register(HOST_CONFIGURATION, host::configuration)?;
    repository.register(INPUT_LIST_DEVICES, input::list_devices)?;
    repository.register(INPUT_CONFIGURE_DEVICE, input::configure_device)?;
    repository.register(EVENTS_WATCH, watch::watch)?;
    repository.register(LIST_VIEWS, views::list_views)?;
    repository.register(LIST_OUTPUTS, outputs::list_outputs)?;
    repository.register(LIST_WSETS, wsets::list_wsets)?;
    repository.register(VIEW_INFO, views::view_info)?;
    repository.register(OUTPUT_INFO, outputs::output_info)?;
    repository.register(WSET_INFO, wsets::wset_info)?;
    repository.register(CONFIGURE_VIEW, views::configure_view)?;
    repository.register(FOCUS_VIEW, views::focus_view)?;
    repository.register(GET_FOCUSED_VIEW, views::get_focused_view)?;
    repository.register(GET_FOCUSED_OUTPUT, outputs::get_focused_output)?;
    repository.register(CLOSE_VIEW, views::close_view)?;
    Ok(())
}

/// Unregisters every built-in method. Idempotent.
pub fn unregister_all(repository: &mut MethodRepository) {
    for name in ALL {
        repository.unregister(name);
    }
}

/// Serializes a handler result, mapping failure to a fatal core error.
fn to_json<T: Serialize>(value: &T) -> Result<Value, DispatchError> {
    serde_json::to_value(value)
        .map_err(|error| DispatchError::Core(CoreError::SerializeResponse(error)))
}
