//! The `host/configuration` command.

use serde_json::Value;

use crate::dispatch::MethodCtx;
use crate::errors::DispatchError;

use super::to_json;

/// Returns static build and configuration information.
pub(crate) fn configuration(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    to_json(&ctx.model.configuration())
}
