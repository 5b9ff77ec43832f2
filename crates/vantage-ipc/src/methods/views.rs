//! The `entities/*` view commands.

use serde_json::Value;

use vantage_model::Rectangle;

use crate::dispatch::{MethodCtx, optional_bool, optional_object, optional_u64, required_u64};
use crate::envelope;
use crate::errors::{DispatchError, MethodError};

use super::to_json;

/// Enumerates all views as a bare array.
pub(crate) fn list_views(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    to_json(&ctx.model.views())
}

/// Describes one view, wrapped in a success envelope.
pub(crate) fn view_info(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    match ctx.model.view(id) {
        Some(view) => Ok(envelope::ok_with("info", to_json(&view)?)),
        None => Err(MethodError::not_found("no such view").into()),
    }
}

/// Describes the focused view, `null` when nothing is focused.
pub(crate) fn get_focused_view(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    Ok(envelope::ok_with("info", to_json(&ctx.model.focused_view())?))
}

/// Requests keyboard focus for a toplevel view.
pub(crate) fn focus_view(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    let view = ctx
        .model
        .view(id)
        .ok_or_else(|| MethodError::not_found("no such view"))?;
    if !view.is_toplevel() {
        return Err(MethodError::unsupported("view is not toplevel").into());
    }

    ctx.model.focus_view(id);
    Ok(envelope::ok())
}

/// Asks a view's client to close it.
pub(crate) fn close_view(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    if ctx.model.view(id).is_none() {
        return Err(MethodError::not_found("no such view").into());
    }

    ctx.model.close_view(id);
    Ok(envelope::ok())
}

/// Applies the provided mutations to a toplevel view.
///
/// All parameters are type-checked and resolved before the first mutation:
/// a malformed geometry or an unknown target output rejects the whole
/// request with the view untouched. When both an output move and a
/// geometry are given, the move skips repositioning and lets the explicit
/// geometry place the view.
pub(crate) fn configure_view(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let id = required_u64(ctx.data, "id")?;
    let output_id = optional_u64(ctx.data, "output_id")?;
    let geometry_object = optional_object(ctx.data, "geometry")?;
    let sticky = optional_bool(ctx.data, "sticky")?;

    let view = ctx
        .model
        .view(id)
        .ok_or_else(|| MethodError::not_found("view not found"))?;
    if !view.is_toplevel() {
        return Err(MethodError::unsupported("view is not toplevel").into());
    }

    let target_output = match output_id {
        Some(output) => {
            if ctx.model.output(output).is_none() {
                return Err(MethodError::not_found("output not found").into());
            }
            Some(output)
        }
        None => None,
    };
    let geometry = match geometry_object {
        Some(object) => Some(
            serde_json::from_value::<Rectangle>(Value::Object(object.clone()))
                .map_err(|_| MethodError::invalid_parameter("invalid geometry"))?,
        ),
        None => None,
    };

    if let Some(output) = target_output {
        ctx.model.move_view_to_output(id, output, geometry.is_none());
    }
    if let Some(rect) = geometry {
        ctx.model.set_view_geometry(id, rect);
    }
    if let Some(flag) = sticky {
        ctx.model.set_view_sticky(id, flag);
    }
    Ok(envelope::ok())
}
