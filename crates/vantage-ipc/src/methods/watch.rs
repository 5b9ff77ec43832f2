//! The `events/watch` command, the only mutator of subscription state.

use std::collections::BTreeSet;

use serde_json::Value;

use crate::catalog::EventCatalog;
use crate::dispatch::{MethodCtx, optional_array};
use crate::envelope;
use crate::errors::{CoreError, DispatchError, MethodError};

/// Replaces the issuing client's subscription set.
///
/// The optional `events` array selects event names; unknown names are
/// dropped silently (best-effort semantics). An absent field or an
/// explicitly empty list selects the full catalog. Watch calls are
/// replacing, not additive: the previous set is fully decremented before
/// the new one is incremented, so ref counts stay exact across any
/// sequence of re-watches.
pub(crate) fn watch(ctx: &mut MethodCtx<'_>) -> Result<Value, DispatchError> {
    let entries = optional_array(ctx.data, "events")?;
    let resolved = resolve_selection(ctx.catalog, entries)?;

    let previous = ctx
        .clients
        .replace_subscriptions(ctx.client, resolved.clone())
        .ok_or(CoreError::UnknownClient { client: ctx.client })?;

    for name in &previous {
        ctx.multiplexer.decrement(ctx.adapter, name)?;
    }
    for name in &resolved {
        ctx.multiplexer.increment(ctx.adapter, name)?;
    }
    Ok(envelope::ok())
}

/// Resolves the requested selection against the catalog.
///
/// Validation happens before any state change: a non-string entry rejects
/// the whole request and leaves the previous subscription intact.
fn resolve_selection(
    catalog: &EventCatalog,
    entries: Option<&Vec<Value>>,
) -> Result<BTreeSet<String>, MethodError> {
    let Some(list) = entries else {
        return Ok(full_catalog(catalog));
    };
    if list.is_empty() {
        return Ok(full_catalog(catalog));
    }

    let mut selected = BTreeSet::new();
    for entry in list {
        let name = entry.as_str().ok_or_else(|| {
            MethodError::invalid_parameter("Event list contains non-string entries!")
        })?;
        if catalog.contains(name) {
            selected.insert(name.to_owned());
        }
    }
    Ok(selected)
}

fn full_catalog(catalog: &EventCatalog) -> BTreeSet<String> {
    catalog.names().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::catalog;

    use super::*;

    fn selection(data: &Value) -> Result<BTreeSet<String>, MethodError> {
        let entries = optional_array(data, "events").expect("events field is an array");
        resolve_selection(&EventCatalog::new(), entries)
    }

    #[test]
    fn absent_field_selects_the_full_catalog() {
        let resolved = selection(&json!({})).expect("resolve");
        assert_eq!(resolved.len(), EventCatalog::new().len());
    }

    #[test]
    fn empty_list_selects_the_full_catalog() {
        let resolved = selection(&json!({"events": []})).expect("resolve");
        assert_eq!(resolved.len(), EventCatalog::new().len());
    }

    #[test]
    fn unknown_names_are_dropped_silently() {
        let resolved =
            selection(&json!({"events": ["view-mapped", "view-exploded"]})).expect("resolve");
        assert_eq!(resolved.len(), 1);
        assert!(resolved.contains(catalog::VIEW_MAPPED));
    }

    #[test]
    fn only_unknown_names_resolve_to_nothing() {
        let resolved = selection(&json!({"events": ["view-exploded"]})).expect("resolve");
        assert!(resolved.is_empty());
    }

    #[test]
    fn non_string_entries_are_rejected() {
        let error = selection(&json!({"events": ["view-mapped", 7]})).expect_err("reject");
        assert_eq!(error.to_string(), "Event list contains non-string entries!");
    }
}
