//! The `entities/*` output commands.

use serde_json::Value;

use crate::dispatch::{MethodCtx, required_u64};
use crate::envelope;
use crate::errors::{DispatchError, MethodError};

use super::to_json;

/// Enumerates all outputs as a bare array.
pub(crate) fn list_outputs(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    to_json(&ctx.model.outputs())
}

/// Describes one output as a bare object.
pub(crate) fn output_info(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    match ctx.model.output(id) {
        Some(output) => to_json(&output),
        None => Err(MethodError::not_found("output not found").into()),
    }
}

/// Describes the focused output, `null` when none holds focus.
pub(crate) fn get_focused_output(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    Ok(envelope::ok_with(
        "info",
        to_json(&ctx.model.focused_output())?,
    ))
}
