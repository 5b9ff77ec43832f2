//! Reference-counted lazy attachment of event sources.
//!
//! The multiplexer owns one [`SubscriptionState`] per catalog entry and is
//! the only mutator of attachment state. Sources are attached exactly when
//! an event's subscriber count crosses 0 to 1 and detached when it returns
//! to 0, so any number of interested clients costs one underlying
//! attachment. Per-output events additionally track the set of outputs
//! known to the host: while live, their attachment is replayed onto every
//! output that appears and released for every output that disappears.

use std::collections::{BTreeMap, BTreeSet};
use std::mem;

use tracing::debug;

use crate::catalog::{EventCatalog, EventDescriptor, SourceBinding};
use crate::errors::CoreError;
use crate::source::{AttachToken, SourceAdapter};

/// Tracing target for subscription lifecycle transitions.
pub(crate) const SUBSCRIPTION_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::subscriptions");

/// Attachment state for a single catalog entry.
#[derive(Debug)]
struct SubscriptionState {
    descriptor: &'static EventDescriptor,
    ref_count: u32,
    global_token: Option<AttachToken>,
    scope_tokens: BTreeMap<u64, AttachToken>,
}

impl SubscriptionState {
    const fn new(descriptor: &'static EventDescriptor) -> Self {
        Self {
            descriptor,
            ref_count: 0,
            global_token: None,
            scope_tokens: BTreeMap::new(),
        }
    }
}

/// Per-event subscriber counting and source attachment.
#[derive(Debug)]
pub struct SubscriptionMultiplexer {
    states: BTreeMap<&'static str, SubscriptionState>,
    scopes: BTreeSet<u64>,
}

impl SubscriptionMultiplexer {
    /// Creates one idle state per catalog entry.
    #[must_use]
    pub fn new(catalog: &EventCatalog) -> Self {
        Self {
            states: catalog
                .entries()
                .map(|descriptor| (descriptor.name, SubscriptionState::new(descriptor)))
                .collect(),
            scopes: BTreeSet::new(),
        }
    }

    /// Records one more subscriber for `name`, attaching the underlying
    /// source when this is the first.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownEvent`] for a name outside the catalog;
    /// callers are expected to have filtered against it.
    pub fn increment(
        &mut self,
        adapter: &mut dyn SourceAdapter,
        name: &str,
    ) -> Result<(), CoreError> {
        let scopes = &self.scopes;
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| CoreError::unknown_event(name))?;

        state.ref_count += 1;
        if state.ref_count > 1 {
            return Ok(());
        }

        debug!(
            target: SUBSCRIPTION_TARGET,
            event = state.descriptor.name,
            "attaching event source"
        );
        match state.descriptor.binding {
            SourceBinding::Core => {
                state.global_token = Some(adapter.attach(state.descriptor.name, None));
            }
            SourceBinding::PerOutput => {
                for scope in scopes {
                    let token = adapter.attach(state.descriptor.name, Some(*scope));
                    state.scope_tokens.insert(*scope, token);
                }
            }
            SourceBinding::Lifecycle => {}
        }
        Ok(())
    }

    /// Records one less subscriber for `name`, detaching every stored
    /// token when this was the last.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownEvent`] for a name outside the catalog
    /// and [`CoreError::RefCountUnderflow`] when there is no matching
    /// increment; both indicate a bug in the caller, not bad client input.
    pub fn decrement(
        &mut self,
        adapter: &mut dyn SourceAdapter,
        name: &str,
    ) -> Result<(), CoreError> {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| CoreError::unknown_event(name))?;

        state.ref_count = state
            .ref_count
            .checked_sub(1)
            .ok_or_else(|| CoreError::ref_count_underflow(name))?;
        if state.ref_count > 0 {
            return Ok(());
        }

        debug!(
            target: SUBSCRIPTION_TARGET,
            event = state.descriptor.name,
            "detaching event source"
        );
        if let Some(token) = state.global_token.take() {
            adapter.detach(token);
        }
        for (_, token) in mem::take(&mut state.scope_tokens) {
            adapter.detach(token);
        }
        Ok(())
    }

    /// Registers a newly-appeared output and replays the attachment of
    /// every live per-output event onto it.
    pub fn output_created(&mut self, adapter: &mut dyn SourceAdapter, scope: u64) {
        if !self.scopes.insert(scope) {
            return;
        }
        for state in self.states.values_mut() {
            if state.descriptor.binding == SourceBinding::PerOutput && state.ref_count > 0 {
                let token = adapter.attach(state.descriptor.name, Some(scope));
                state.scope_tokens.insert(scope, token);
            }
        }
    }

    /// Releases every attachment held against a disappearing output and
    /// forgets the scope.
    ///
    /// Callers deliver the corresponding removal event to subscribers
    /// *before* invoking this; tokens are detached explicitly so adapters
    /// that require detach-before-destroy are satisfied.
    pub fn output_destroyed(&mut self, adapter: &mut dyn SourceAdapter, scope: u64) {
        for state in self.states.values_mut() {
            if let Some(token) = state.scope_tokens.remove(&scope) {
                adapter.detach(token);
            }
        }
        self.scopes.remove(&scope);
    }

    /// Current subscriber count for `name`, `0` for unknown names.
    #[must_use]
    pub fn ref_count(&self, name: &str) -> u32 {
        self.states.get(name).map_or(0, |state| state.ref_count)
    }

    /// Returns `true` while `name` has at least one subscriber.
    #[must_use]
    pub fn is_live(&self, name: &str) -> bool {
        self.ref_count(name) > 0
    }
}
