//! Connected-client bookkeeping.
//!
//! Each transport session is assigned a small stable [`ClientId`] at
//! connect time; all per-client state (the push sink and the resolved
//! subscription set) lives in one registry entry keyed by that handle and
//! is dropped in one step on disconnect.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::io;

use serde_json::Value;

/// Stable handle identifying one connected client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientId(u64);

impl ClientId {
    /// Returns the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Transport-supplied capability for pushing one JSON message to a client.
///
/// Implementations must not block; a client that cannot currently accept
/// data should fail the send and let the transport's disconnect path clean
/// up.
#[cfg_attr(test, mockall::automock)]
pub trait ClientSink {
    /// Pushes one JSON message to the client.
    ///
    /// # Errors
    ///
    /// Returns the transport's I/O error when the client is unreachable.
    fn send(&mut self, payload: &Value) -> io::Result<()>;
}

struct ClientEntry {
    sink: Box<dyn ClientSink>,
    subscriptions: BTreeSet<String>,
}

impl fmt::Debug for ClientEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientEntry")
            .field("subscriptions", &self.subscriptions)
            .finish_non_exhaustive()
    }
}

/// Registry of connected clients and their subscription sets.
///
/// Subscription sets stored here are already resolved: the "all events"
/// request form is expanded to the full catalog by the watch handler, so
/// disconnect can decrement each held name exactly once.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    next_id: u64,
    clients: BTreeMap<ClientId, ClientEntry>,
}

impl ClientRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new client and returns its handle.
    ///
    /// Clients start with an empty subscription set and receive no events
    /// until they issue a watch request.
    pub fn connect(&mut self, sink: Box<dyn ClientSink>) -> ClientId {
        self.next_id += 1;
        let id = ClientId(self.next_id);
        self.clients.insert(
            id,
            ClientEntry {
                sink,
                subscriptions: BTreeSet::new(),
            },
        );
        id
    }

    /// Removes a client, returning the subscription set it held.
    ///
    /// Returns `None` when the handle was not connected.
    pub fn disconnect(&mut self, id: ClientId) -> Option<BTreeSet<String>> {
        self.clients.remove(&id).map(|entry| entry.subscriptions)
    }

    /// Replaces a client's subscription set, returning the previous one.
    ///
    /// Returns `None` when the handle was not connected.
    pub fn replace_subscriptions(
        &mut self,
        id: ClientId,
        subscriptions: BTreeSet<String>,
    ) -> Option<BTreeSet<String>> {
        self.clients
            .get_mut(&id)
            .map(|entry| std::mem::replace(&mut entry.subscriptions, subscriptions))
    }

    /// The subscription set currently stored for a client.
    #[must_use]
    pub fn subscriptions(&self, id: ClientId) -> Option<&BTreeSet<String>> {
        self.clients.get(&id).map(|entry| &entry.subscriptions)
    }

    /// Returns `true` when the handle is connected.
    #[must_use]
    pub fn contains(&self, id: ClientId) -> bool {
        self.clients.contains_key(&id)
    }

    /// Number of connected clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` when no clients are connected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    /// Iterates over every client's subscription set and sink.
    pub(crate) fn entries_mut(
        &mut self,
    ) -> impl Iterator<Item = (ClientId, &BTreeSet<String>, &mut (dyn ClientSink + 'static))> + '_ {
        self.clients.iter_mut().map(|(id, entry)| {
            let ClientEntry {
                sink,
                subscriptions,
            } = entry;
            (*id, &*subscriptions, sink.as_mut())
        })
    }
}
