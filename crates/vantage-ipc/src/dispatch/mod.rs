//! Request dispatch: the method repository and handler calling convention.
//!
//! Handlers are plain function pointers receiving the core's state through
//! an explicit [`MethodCtx`]: no captured state, so the ref-count and
//! fan-out logic stays unit-testable without a live host. Dispatch itself
//! lives on [`ControlCore`](crate::ControlCore), which owns the repository
//! and constructs the context per request.

mod params;
mod repository;

pub use repository::{MethodHandler, MethodRepository};

pub(crate) use params::{
    optional_array, optional_bool, optional_object, optional_u64, required_bool, required_u64,
};

use serde_json::Value;

use vantage_model::HostModel;

use crate::catalog::EventCatalog;
use crate::clients::{ClientId, ClientRegistry};
use crate::source::SourceAdapter;
use crate::subscriptions::SubscriptionMultiplexer;

/// Everything a method handler may touch, borrowed for one request.
pub struct MethodCtx<'a> {
    /// The host's object model.
    pub model: &'a mut dyn HostModel,
    /// The host's signal hookup, for watch-driven attach/detach.
    pub adapter: &'a mut dyn SourceAdapter,
    /// The fixed event catalog.
    pub catalog: &'a EventCatalog,
    /// Subscription ref counts and attachments.
    pub multiplexer: &'a mut SubscriptionMultiplexer,
    /// Connected clients and their subscription sets.
    pub clients: &'a mut ClientRegistry,
    /// The client issuing this request.
    pub client: ClientId,
    /// The request's `data` object.
    pub data: &'a Value,
}
