//! Test suites for the control core.

pub(crate) mod support;
