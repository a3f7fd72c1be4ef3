//! Adapter utilities for the `pullrefresh` crate.
//!
//! The `pullrefresh` crate is UI-agnostic and focuses on the state machine and math. This crate
//! wires those pieces into the component a UI layer actually mounts around its list:
//!
//! - A [`Controller`] that routes scroll and gesture events, owns the refresh/feedback handlers,
//!   and is ticked once per frame
//! - A [`FrameSampler`] that render threads use to read [`SurfaceFrame`]s without touching the
//!   controller
//!
//! This crate is intentionally framework-agnostic (no bindings to any toolkit).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod surface;

#[cfg(test)]
mod tests;

pub use controller::{Controller, GestureResponse};
pub use surface::{FrameSampler, SurfaceFrame};
