use alloc::string::String;

/// A [`crate::RefreshOptions`] value that the engine cannot work with.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum OptionsError {
    #[error("max_drag_distance must be positive and finite (got {0})")]
    MaxDragDistance(f32),
    #[error("ready_threshold_fraction must be in (0, 1] (got {0})")]
    ReadyThresholdFraction(f32),
    #[error("rest_display_distance must be non-negative and finite (got {0})")]
    RestDisplayDistance(f32),
    #[error("progress_scale must be positive and finite (got {0})")]
    ProgressScale(f32),
    #[error("progress_domain_end must be positive and finite (got {0})")]
    ProgressDomainEnd(f32),
    #[error("circle_length must be positive and finite (got {0})")]
    CircleLength(f32),
}

/// Failure reported by a haptic feedback implementation.
///
/// Feedback is best-effort: the engine logs these and carries on with the refresh.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackError {
    #[error("haptic feedback is not available on this platform")]
    Unsupported,
    #[error("haptic feedback failed: {0}")]
    Failed(String),
}
