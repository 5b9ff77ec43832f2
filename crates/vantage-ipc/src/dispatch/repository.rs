//! Name-to-handler table for command dispatch.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::errors::{CoreError, DispatchError};

use super::MethodCtx;

/// A command handler.
///
/// Returns the JSON value to send verbatim on success; a
/// [`MethodError`](crate::errors::MethodError) becomes the error envelope,
/// while a [`CoreError`] aborts dispatch and is propagated to the host.
pub type MethodHandler = fn(&mut MethodCtx<'_>) -> Result<Value, DispatchError>;

/// Registry of dispatchable methods.
///
/// Methods are registered at plugin init and unregistered at teardown;
/// registering the same name twice is a programmer error.
#[derive(Debug, Default)]
pub struct MethodRepository {
    handlers: BTreeMap<String, MethodHandler>,
}

impl MethodRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateMethod`] when the name is already
    /// taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: MethodHandler,
    ) -> Result<(), CoreError> {
        let name = name.into();
        if self.handlers.contains_key(&name) {
            return Err(CoreError::duplicate_method(name));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    /// Removes the handler registered under `name`.
    ///
    /// Removing an absent name is a no-op, so teardown paths can run
    /// unconditionally.
    pub fn unregister(&mut self, name: &str) {
        self.handlers.remove(name);
    }

    /// Looks up the handler for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MethodHandler> {
        self.handlers.get(name).copied()
    }

    /// Returns `true` when `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Number of registered methods.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
