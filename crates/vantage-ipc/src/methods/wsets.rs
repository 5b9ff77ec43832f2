//! The `entities/*` workspace-set commands.

use serde_json::Value;

use crate::dispatch::{MethodCtx, required_u64};
use crate::errors::{DispatchError, MethodError};

use super::to_json;

/// Enumerates all workspace sets as a bare array.
pub(crate) fn list_wsets(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    to_json(&ctx.model.workspace_sets())
}

/// Describes one workspace set (by index) as a bare object.
pub(crate) fn wset_info(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let index = required_u64(ctx.data, "id")?;
    match ctx.model.workspace_set(index) {
        Some(wset) => to_json(&wset),
        None => Err(MethodError::not_found("workspace set not found").into()),
    }
}
