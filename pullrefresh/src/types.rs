#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    Start,
    Move,
    End,
    /// The hosting surface took the gesture away (e.g. a parent scroll view claimed it).
    Terminated,
}

impl GesturePhase {
    /// `End` and `Terminated` are handled identically.
    pub fn is_release(self) -> bool {
        matches!(self, Self::End | Self::Terminated)
    }
}

/// A touch event routed to the pull-to-refresh layer.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureEvent {
    pub phase: GesturePhase,
    /// Cumulative vertical displacement since the gesture started (positive = downward).
    pub dy: f32,
}

impl GestureEvent {
    pub fn start() -> Self {
        Self {
            phase: GesturePhase::Start,
            dy: 0.0,
        }
    }

    pub fn moved(dy: f32) -> Self {
        Self {
            phase: GesturePhase::Move,
            dy,
        }
    }

    pub fn end(dy: f32) -> Self {
        Self {
            phase: GesturePhase::End,
            dy,
        }
    }

    pub fn terminated(dy: f32) -> Self {
        Self {
            phase: GesturePhase::Terminated,
            dy,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RefreshPhase {
    #[default]
    Idle,
    Committed,
    AwaitingCompletion,
    Settling,
}

impl RefreshPhase {
    /// Whether a refresh session is in flight (from commit until the reset animation finishes).
    pub fn is_refreshing(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether the wrapped list should accept touch input.
    pub fn interaction_enabled(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// A copyable snapshot of the animated state, as seen by one frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PullSnapshot {
    pub scroll_position: f32,
    pub pull_distance: f32,
    pub is_ready: bool,
}

/// Visual state of the progress indicator for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndicatorFrame {
    /// Ring completion in `[0, 1]`.
    pub progress: f32,
    /// Stroke dash offset of the ring arc: the full circle length when empty, 0 when complete.
    pub stroke_offset: f32,
    /// Opacity of the indicator container in `[0, 1]`.
    pub opacity: f32,
    /// Height of the indicator container (mirrors the pull distance).
    pub container_height: f32,
}
