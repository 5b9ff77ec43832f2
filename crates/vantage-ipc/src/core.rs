//! The assembled control surface, driven by the host's event loop.

use serde_json::Value;
use tracing::debug;

use vantage_model::{HostModel, HostSignal, OutputDescription};

use crate::catalog::EventCatalog;
use crate::clients::{ClientId, ClientRegistry, ClientSink};
use crate::dispatch::{MethodCtx, MethodRepository};
use crate::envelope::{self, Request};
use crate::errors::{CoreError, DispatchError, MethodError};
use crate::events;
use crate::fanout;
use crate::methods;
use crate::source::SourceAdapter;
use crate::subscriptions::SubscriptionMultiplexer;

/// Tracing target for request dispatch.
pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");

/// The control surface: dispatcher, subscription multiplexer, client
/// registry, and event catalog wired together.
///
/// The host owns the object model and the signal adapter and passes them
/// in per call; the core owns everything else. All methods run to
/// completion on the host's single logical thread, so no operation ever
/// observes another in progress.
#[derive(Debug)]
pub struct ControlCore {
    catalog: EventCatalog,
    methods: MethodRepository,
    multiplexer: SubscriptionMultiplexer,
    clients: ClientRegistry,
}

impl ControlCore {
    /// Builds the core and registers the built-in command catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DuplicateMethod`] when the built-in names
    /// collide, which indicates double initialisation.
    pub fn new() -> Result<Self, CoreError> {
        let catalog = EventCatalog::new();
        let multiplexer = SubscriptionMultiplexer::new(&catalog);
        let mut repository = MethodRepository::new();
        methods::register_all(&mut repository)?;
        Ok(Self {
            catalog,
            methods: repository,
            multiplexer,
            clients: ClientRegistry::new(),
        })
    }

    /// Registers a newly connected client and returns its handle.
    pub fn client_connected(&mut self, sink: Box<dyn ClientSink>) -> ClientId {
        let id = self.clients.connect(sink);
        debug!(target: DISPATCH_TARGET, client = %id, "client connected");
        id
    }

    /// Removes a disconnected client, releasing every subscription it held
    /// exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RefCountUnderflow`] when bookkeeping was
    /// corrupted, which cannot happen unless the registry and multiplexer
    /// were driven out of sync by the host.
    pub fn client_disconnected(
        &mut self,
        adapter: &mut dyn SourceAdapter,
        id: ClientId,
    ) -> Result<(), CoreError> {
        let Some(held) = self.clients.disconnect(id) else {
            return Ok(());
        };
        debug!(target: DISPATCH_TARGET, client = %id, "client disconnected");
        for name in &held {
            self.multiplexer.decrement(adapter, name)?;
        }
        Ok(())
    }

    /// Dispatches one request and returns the response envelope.
    ///
    /// Unknown methods and handler-level failures become error envelopes
    /// for the requesting client; only programmer-error conditions
    /// propagate as [`CoreError`].
    ///
    /// # Errors
    ///
    /// Returns the fatal [`CoreError`] a handler surfaced, never a
    /// client-input problem.
    pub fn handle_request(
        &mut self,
        adapter: &mut dyn SourceAdapter,
        model: &mut dyn HostModel,
        client: ClientId,
        request: &Request,
    ) -> Result<Value, CoreError> {
        debug!(
            target: DISPATCH_TARGET,
            client = %client,
            method = request.method.as_str(),
            "dispatching request"
        );
        let Some(handler) = self.methods.get(request.method.as_str()) else {
            return Ok(envelope::error(MethodError::method_not_found(
                request.method.as_str(),
            )));
        };

        let mut ctx = MethodCtx {
            model,
            adapter,
            catalog: &self.catalog,
            multiplexer: &mut self.multiplexer,
            clients: &mut self.clients,
            client,
            data: &request.data,
        };
        match handler(&mut ctx) {
            Ok(value) => Ok(value),
            Err(DispatchError::Method(error)) => Ok(envelope::error(error)),
            Err(DispatchError::Core(error)) => Err(error),
        }
    }

    /// Renders a host signal and fans it out to subscribers.
    pub fn deliver(&mut self, signal: &HostSignal) {
        let payload = events::render(signal);
        fanout::publish(&mut self.clients, payload.name, &payload.body);
    }

    /// Reacts to a new output: replays live per-output attachments onto
    /// it, then announces it to subscribers.
    pub fn output_added(&mut self, adapter: &mut dyn SourceAdapter, output: &OutputDescription) {
        self.multiplexer.output_created(adapter, output.id);
        let payload = events::output_added(output);
        fanout::publish(&mut self.clients, payload.name, &payload.body);
    }

    /// Reacts to a disappearing output: announces the removal to
    /// subscribers first, then releases the scope's attachments.
    pub fn output_removed(&mut self, adapter: &mut dyn SourceAdapter, output: &OutputDescription) {
        let payload = events::output_removed(output);
        fanout::publish(&mut self.clients, payload.name, &payload.body);
        self.multiplexer.output_destroyed(adapter, output.id);
    }

    /// Current subscriber count for an event name.
    #[must_use]
    pub fn subscription_count(&self, name: &str) -> u32 {
        self.multiplexer.ref_count(name)
    }

    /// Returns `true` while the named event's source is attached.
    #[must_use]
    pub fn is_live(&self, name: &str) -> bool {
        self.multiplexer.is_live(name)
    }

    /// Number of connected clients.
    #[must_use]
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// The fixed event catalog.
    #[must_use]
    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }
}
