//! Delivery of one event to every subscribed client.

use serde_json::Value;
use tracing::warn;

use crate::clients::ClientRegistry;

/// Tracing target for event delivery.
pub(crate) const FANOUT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::fanout");

/// Pushes `payload` to every client whose subscription set contains
/// `name`.
///
/// Stored sets are already resolved (the watch handler expands the "all
/// events" form to the full catalog), so membership is the whole test: a
/// client that never watched holds the empty set and receives nothing.
///
/// Delivery order across clients is unspecified. A failing sink is logged
/// and skipped; it never aborts delivery to the remaining clients, and
/// cleanup of the broken client is left to the transport's disconnect
/// path.
pub fn publish(clients: &mut ClientRegistry, name: &str, payload: &Value) {
    for (id, subscriptions, sink) in clients.entries_mut() {
        if !subscriptions.contains(name) {
            continue;
        }
        if let Err(error) = sink.send(payload) {
            warn!(
                target: FANOUT_TARGET,
                client = %id,
                event = name,
                %error,
                "failed to deliver event"
            );
        }
    }
}
