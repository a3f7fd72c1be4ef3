//! A headless pull-to-refresh engine.
//!
//! For a ready-made controller that wires these pieces to gesture input and refresh handlers,
//! see the `pullrefresh-adapter` crate.
//!
//! This crate focuses on the state machine behind a pull-to-refresh list: gating a touch gesture
//! against the list's scroll position, mapping drag distance to an animated indicator with a
//! ready threshold, and coordinating the release/refresh/completion protocol with an external
//! refresh operation.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the list's scroll offset
//! - gesture events carrying the vertical displacement since the gesture started
//! - a monotonic millisecond clock for ticking animations
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod completion;
mod error;
mod gesture;
mod options;
mod orchestrator;
mod progress;
mod ready;
mod store;
mod tween;
mod types;


pub use completion::CompletionHandle;
pub use error::{FeedbackError, OptionsError};
pub use gesture::{GestureRecognizer, MoveUpdate, Release, clamp_pull_distance};
pub use options::{
    CIRCLE_LENGTH, MAX_DRAG_DISTANCE, PROGRESS_DOMAIN_END, PROGRESS_SCALE,
    READY_THRESHOLD_FRACTION, REST_DISPLAY_DISTANCE, RefreshOptions, SETTLE_DURATION_MS,
};
pub use orchestrator::{Feedback, NoFeedback, RefreshHandler, RefreshOrchestrator};
pub use progress::{Extrapolation, ProgressMapper, interpolate};
pub use ready::ReadyState;
pub use store::{AnimatedState, ScrollSink, StateReader};
pub use tween::{Easing, Tween};
pub use types::{GestureEvent, GesturePhase, IndicatorFrame, PullSnapshot, RefreshPhase};
