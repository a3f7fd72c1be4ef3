use alloc::sync::Arc;
use core::fmt;
use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use crate::PullSnapshot;

/// An `f32` cell with last-write-wins semantics.
#[derive(Default)]
struct AtomicF32(AtomicU32);

impl AtomicF32 {
    fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

struct Cells {
    scroll_position: AtomicF32,
    pull_distance: AtomicF32,
    is_ready: AtomicBool,
    interaction_enabled: AtomicBool,
}

impl Default for Cells {
    fn default() -> Self {
        Self {
            scroll_position: AtomicF32::default(),
            pull_distance: AtomicF32::default(),
            is_ready: AtomicBool::new(false),
            interaction_enabled: AtomicBool::new(true),
        }
    }
}

impl Cells {
    fn snapshot(&self) -> PullSnapshot {
        PullSnapshot {
            scroll_position: self.scroll_position.load(),
            pull_distance: self.pull_distance.load(),
            is_ready: self.is_ready.load(Ordering::Relaxed),
        }
    }
}

/// The values shared between the gesture layer and the per-frame render layer.
///
/// Every field is an independent atomic cell: writers never block readers, readers never block
/// writers, and there is no cross-field consistency. A frame may observe a pull distance one
/// write newer than the ready flag; renderers are expected to tolerate that.
///
/// The owner handle is not `Clone`, and its setters take `&mut self`. Whoever holds it mutably
/// (the driver of the gesture recognizer and the refresh orchestrator) is the only writer of the
/// pull distance, the ready flag and the interaction flag. Hand out [`StateReader`]s to render
/// threads and a [`ScrollSink`] to the scroll event source.
///
/// A shared borrow cannot write:
///
/// ```compile_fail
/// let state = pullrefresh::AnimatedState::new();
/// let shared: &pullrefresh::AnimatedState = &state;
/// shared.set_pull_distance(33.0);
/// ```
///
/// Neither can a reader:
///
/// ```compile_fail
/// let state = pullrefresh::AnimatedState::new();
/// state.reader().set_ready(true);
/// ```
#[derive(Default)]
pub struct AnimatedState {
    cells: Arc<Cells>,
}

impl AnimatedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reader(&self) -> StateReader {
        StateReader {
            cells: Arc::clone(&self.cells),
        }
    }

    pub fn scroll_sink(&self) -> ScrollSink {
        ScrollSink {
            cells: Arc::clone(&self.cells),
        }
    }

    pub fn scroll_position(&self) -> f32 {
        self.cells.scroll_position.load()
    }

    pub fn pull_distance(&self) -> f32 {
        self.cells.pull_distance.load()
    }

    pub fn is_ready(&self) -> bool {
        self.cells.is_ready.load(Ordering::Relaxed)
    }

    pub fn interaction_enabled(&self) -> bool {
        self.cells.interaction_enabled.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> PullSnapshot {
        self.cells.snapshot()
    }

    pub fn set_pull_distance(&mut self, pull_distance: f32) {
        self.cells.pull_distance.store(pull_distance);
    }

    pub fn set_ready(&mut self, is_ready: bool) {
        self.cells.is_ready.store(is_ready, Ordering::Relaxed);
    }

    pub fn set_interaction_enabled(&mut self, enabled: bool) {
        self.cells
            .interaction_enabled
            .store(enabled, Ordering::Relaxed);
    }

    /// Records a scroll event on the owner's thread. Equivalent to [`ScrollSink::on_scroll`].
    pub fn on_scroll(&self, scroll_position: f32) {
        self.cells.scroll_position.store(scroll_position);
    }
}

impl fmt::Debug for AnimatedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimatedState")
            .field("snapshot", &self.snapshot())
            .field("interaction_enabled", &self.interaction_enabled())
            .finish()
    }
}

/// A read-only view of an [`AnimatedState`], safe to move to a render thread.
#[derive(Clone)]
pub struct StateReader {
    cells: Arc<Cells>,
}

impl StateReader {
    pub fn scroll_position(&self) -> f32 {
        self.cells.scroll_position.load()
    }

    pub fn pull_distance(&self) -> f32 {
        self.cells.pull_distance.load()
    }

    pub fn is_ready(&self) -> bool {
        self.cells.is_ready.load(Ordering::Relaxed)
    }

    pub fn interaction_enabled(&self) -> bool {
        self.cells.interaction_enabled.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> PullSnapshot {
        self.cells.snapshot()
    }
}

impl fmt::Debug for StateReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StateReader").field(&self.snapshot()).finish()
    }
}

/// The write side for scroll events. It can only update the scroll position.
#[derive(Clone)]
pub struct ScrollSink {
    cells: Arc<Cells>,
}

impl ScrollSink {
    pub fn on_scroll(&self, scroll_position: f32) {
        self.cells.scroll_position.store(scroll_position);
    }
}

impl fmt::Debug for ScrollSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSink")
            .field("scroll_position", &self.cells.scroll_position.load())
            .finish()
    }
}
