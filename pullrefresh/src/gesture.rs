use crate::{ReadyState, RefreshOptions};

/// Clamps a raw vertical displacement into `[0, max_distance]`. NaN maps to 0.
pub fn clamp_pull_distance(dy: f32, max_distance: f32) -> f32 {
    if dy.is_nan() {
        return 0.0;
    }
    dy.min(max_distance).max(0.0)
}

/// Result of feeding a move event to an active gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveUpdate {
    pub pull_distance: f32,
    /// `Some` when the ready flag flipped on this move.
    pub ready_changed: Option<ReadyState>,
}

/// What a release asks the orchestrator to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Release {
    /// The ready threshold was crossed: settle at the rest distance and refresh.
    Commit,
    /// Settle back to 0 without refreshing.
    Cancel,
}

/// Tracks one exclusive pull gesture at a time.
///
/// The recognizer is pure bookkeeping: it decides, but the caller writes the results into the
/// [`crate::AnimatedState`] so that the drag is visible on the very next frame.
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    max_distance: f32,
    threshold: f32,
    active: bool,
    ready: ReadyState,
    pull_distance: f32,
}

impl GestureRecognizer {
    pub fn new(options: &RefreshOptions) -> Self {
        Self {
            max_distance: options.max_drag_distance,
            threshold: options.ready_threshold(),
            active: false,
            ready: ReadyState::Below,
            pull_distance: 0.0,
        }
    }

    /// A gesture may be claimed only while the list sits at (or above) its top and the initial
    /// motion is not upward.
    pub fn should_capture(scroll_position: f32, dy: f32) -> bool {
        scroll_position <= 0.0 && dy >= 0.0
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn ready(&self) -> ReadyState {
        self.ready
    }

    pub fn pull_distance(&self) -> f32 {
        self.pull_distance
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Claims a new gesture.
    pub fn begin(&mut self) {
        debug_assert!(!self.active, "GestureRecognizer::begin while a gesture is active");
        self.active = true;
        self.ready.reset();
        self.pull_distance = 0.0;
        ptrace!("gesture claimed");
    }

    pub fn on_move(&mut self, dy: f32) -> MoveUpdate {
        debug_assert!(self.active, "GestureRecognizer::on_move without an active gesture");
        let pull_distance = clamp_pull_distance(dy, self.max_distance);
        self.pull_distance = pull_distance;
        let ready_changed = self.ready.update(pull_distance, self.threshold);
        #[cfg(feature = "tracing")]
        if let Some(ready) = ready_changed {
            ptrace!(pull_distance, ?ready, "ready threshold crossed");
        }
        MoveUpdate {
            pull_distance,
            ready_changed,
        }
    }

    /// Ends the gesture (normal release or forced termination) and clears the ready flag.
    pub fn release(&mut self) -> Release {
        debug_assert!(self.active, "GestureRecognizer::release without an active gesture");
        self.active = false;
        let release = if self.ready.is_ready() {
            Release::Commit
        } else {
            Release::Cancel
        };
        self.ready.reset();
        ptrace!(pull_distance = self.pull_distance, ?release, "gesture released");
        release
    }
}
