//! Object-model boundary for the vantage control surface.
//!
//! The compositor host owns the actual scene graph; this crate defines the
//! narrow interface through which the control surface observes and mutates
//! it. It contains three kinds of items:
//!
//! - **Entity descriptions** ([`ViewDescription`], [`OutputDescription`],
//!   [`WsetDescription`], [`InputDeviceDescription`],
//!   [`HostConfiguration`]): plain serde records whose serialized field
//!   names are a wire contract shared with external clients.
//! - **The [`HostModel`] trait**: the read/mutate seam the command handlers
//!   call into. Implemented by the host, faked in tests.
//! - **[`HostSignal`]**: the raw notification payloads the host delivers
//!   into the core's event pipeline, carrying description snapshots taken
//!   at signal time.
//!
//! Nothing in this crate performs I/O or holds references into host
//! internals; descriptions are owned snapshots so the core can serialize
//! them at any later point without lifetime entanglement.

mod config;
mod geometry;
mod input;
mod model;
mod output;
mod signal;
mod view;
mod wset;

pub use config::HostConfiguration;
pub use geometry::{Dimensions, Point, Rectangle, WorkspaceState};
pub use input::{DeviceType, InputDeviceDescription};
pub use model::HostModel;
pub use output::OutputDescription;
pub use signal::HostSignal;
pub use view::{ViewDescription, ViewLayer, ViewRole, ViewType};
pub use wset::WsetDescription;
