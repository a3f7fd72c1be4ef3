use crate::{Easing, OptionsError};

/// Drag distance at which the pull is clamped.
pub const MAX_DRAG_DISTANCE: f32 = 80.0;
/// Fraction of [`MAX_DRAG_DISTANCE`] past which a release triggers a refresh.
pub const READY_THRESHOLD_FRACTION: f32 = 0.5;
/// Pull distance held while the refresh operation runs.
pub const REST_DISPLAY_DISTANCE: f32 = 75.0;
/// Duration of every settle animation.
pub const SETTLE_DURATION_MS: u64 = 180;
/// Multiplier applied to the pull distance before mapping it onto the ring.
pub const PROGRESS_SCALE: f32 = 6.0;
/// End of the ring's input domain (`[0, PROGRESS_DOMAIN_END]`).
pub const PROGRESS_DOMAIN_END: f32 = 420.0;
/// Length of the full progress ring stroke.
pub const CIRCLE_LENGTH: f32 = 100.0;

/// Configuration for the pull-to-refresh engine.
///
/// `Default` yields the stock behavior (80 drag clamp, ready at half of it, 75 rest distance,
/// 180ms settles). With `feature = "serde"`, missing fields deserialize to those defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RefreshOptions {
    pub max_drag_distance: f32,
    pub ready_threshold_fraction: f32,
    pub rest_display_distance: f32,
    pub settle_duration_ms: u64,
    pub settle_easing: Easing,
    pub progress_scale: f32,
    pub progress_domain_end: f32,
    pub circle_length: f32,
}

impl Default for RefreshOptions {
    fn default() -> Self {
        Self {
            max_drag_distance: MAX_DRAG_DISTANCE,
            ready_threshold_fraction: READY_THRESHOLD_FRACTION,
            rest_display_distance: REST_DISPLAY_DISTANCE,
            settle_duration_ms: SETTLE_DURATION_MS,
            settle_easing: Easing::default(),
            progress_scale: PROGRESS_SCALE,
            progress_domain_end: PROGRESS_DOMAIN_END,
            circle_length: CIRCLE_LENGTH,
        }
    }
}

impl RefreshOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pull distance at which the ready flag flips.
    pub fn ready_threshold(&self) -> f32 {
        self.max_drag_distance * self.ready_threshold_fraction
    }

    /// Pull distance at which the progress ring is fully drawn.
    pub fn reveal_distance(&self) -> f32 {
        self.progress_domain_end / self.progress_scale
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(self.max_drag_distance) {
            return Err(OptionsError::MaxDragDistance(self.max_drag_distance));
        }
        let fraction = self.ready_threshold_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
            return Err(OptionsError::ReadyThresholdFraction(fraction));
        }
        let rest = self.rest_display_distance;
        if !(rest.is_finite() && rest >= 0.0) {
            return Err(OptionsError::RestDisplayDistance(rest));
        }
        if !positive(self.progress_scale) {
            return Err(OptionsError::ProgressScale(self.progress_scale));
        }
        if !positive(self.progress_domain_end) {
            return Err(OptionsError::ProgressDomainEnd(self.progress_domain_end));
        }
        if !positive(self.circle_length) {
            return Err(OptionsError::CircleLength(self.circle_length));
        }
        Ok(())
    }

    pub fn with_max_drag_distance(mut self, max_drag_distance: f32) -> Self {
        self.max_drag_distance = max_drag_distance;
        self
    }

    pub fn with_ready_threshold_fraction(mut self, fraction: f32) -> Self {
        self.ready_threshold_fraction = fraction;
        self
    }

    pub fn with_rest_display_distance(mut self, rest_display_distance: f32) -> Self {
        self.rest_display_distance = rest_display_distance;
        self
    }

    pub fn with_settle(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.settle_duration_ms = duration_ms;
        self.settle_easing = easing;
        self
    }

    /// Sets how the pull distance maps onto the ring: `distance * scale` over
    /// `[0, domain_end]`.
    pub fn with_progress_mapping(mut self, scale: f32, domain_end: f32) -> Self {
        self.progress_scale = scale;
        self.progress_domain_end = domain_end;
        self
    }

    pub fn with_circle_length(mut self, circle_length: f32) -> Self {
        self.circle_length = circle_length;
        self
    }
}
