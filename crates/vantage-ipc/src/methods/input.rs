//! The `input/*` commands.

use serde_json::Value;

use crate::dispatch::{MethodCtx, required_bool, required_u64};
use crate::envelope;
use crate::errors::{DispatchError, MethodError};

use super::to_json;

/// Enumerates all input devices as a bare array.
pub(crate) fn list_devices(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    to_json(&ctx.model.input_devices())
}

/// Enables or disables one input device.
pub(crate) fn configure_device(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    let enabled = required_bool(ctx.data, "enabled")?;

    if ctx.model.set_device_enabled(id, enabled) {
        Ok(envelope::ok())
    } else {
        Err(MethodError::not_found("Unknown input device!").into())
    }
}
