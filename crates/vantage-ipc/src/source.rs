//! The attach/detach seam between the core and the host's signal plumbing.

/// Opaque handle to one live attachment, issued by the adapter.
///
/// Each token is owned by exactly one subscription-state entry at a time
/// and is returned to the adapter on detach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttachToken(u64);

impl AttachToken {
    /// Wraps a raw adapter-assigned token value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Host-supplied hookup for the compositor's internal signals.
///
/// The multiplexer calls [`attach`](SourceAdapter::attach) when an event
/// gains its first subscriber and [`detach`](SourceAdapter::detach) when
/// the last one leaves. `scope` is `None` for globally-bound events and
/// the output id for per-output events. Both calls must be synchronous and
/// non-blocking; the core invokes them from the host's event loop.
#[cfg_attr(test, mockall::automock)]
pub trait SourceAdapter {
    /// Connects the named event's underlying signal, returning a token for
    /// the new attachment.
    fn attach(&mut self, event: &'static str, scope: Option<u64>) -> AttachToken;

    /// Disconnects a previously-attached signal.
    fn detach(&mut self, token: AttachToken);
}
