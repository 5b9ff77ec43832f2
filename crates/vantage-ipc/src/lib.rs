//! Control and introspection surface for a compositor host.
//!
//! External clients issue request/response commands against live host
//! state (enumerate views, outputs, workspace sets, and input devices;
//! mutate them) and subscribe to a fixed catalog of host events, delivered
//! as push messages over the same channel. The host supplies the object
//! model ([`vantage_model::HostModel`]), the signal hookup
//! ([`SourceAdapter`]), and per-client send capabilities ([`ClientSink`]);
//! this crate supplies everything between them.
//!
//! ## Subscription multiplexing
//!
//! Any number of clients may watch overlapping subsets of the event
//! catalog, but the core attaches to each underlying host signal at most
//! once, lazily, when an event gains its first subscriber, and detaches
//! the moment the last subscriber leaves. Per-output events are attached
//! once per display and replayed onto displays that appear while live.
//!
//! ## Dispatch
//!
//! Requests are JSON envelopes (`{"method": ..., "data": {...}}`) resolved
//! through a name-to-handler table. Handlers are plain functions over an
//! explicit [`dispatch::MethodCtx`]; validation failures, unknown
//! entities, and unsupported operations are rendered into
//! `{"result":"error","error":...}` envelopes for the requesting client
//! and never disturb other clients or the process.
//!
//! ## Threading
//!
//! Single logical thread: the host's event loop drives requests, signals,
//! and lifecycle callbacks, and every core operation runs to completion
//! before the next begins. The core never spawns threads, blocks, or
//! locks.

pub mod catalog;
mod clients;
mod core;
pub mod dispatch;
pub mod envelope;
mod errors;
pub mod events;
mod fanout;
pub mod methods;
mod source;
mod subscriptions;

pub use clients::{ClientId, ClientRegistry, ClientSink};
pub use crate::core::ControlCore;
pub use envelope::Request;
pub use errors::{CoreError, DispatchError, EnvelopeError, MethodError};
pub use events::EventPayload;
pub use fanout::publish;
pub use source::{AttachToken, SourceAdapter};
pub use subscriptions::SubscriptionMultiplexer;

#[cfg(test)]
mod tests;
