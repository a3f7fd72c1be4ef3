use alloc::sync::Arc;

use crate::completion::CompletionSignal;
use crate::{
    AnimatedState, CompletionHandle, Easing, FeedbackError, RefreshOptions, RefreshPhase, Tween,
};

/// The external refresh operation.
///
/// `on_refresh` is called once per refresh session. The implementation must eventually call
/// [`CompletionHandle::complete`]; there is no timeout, so a handler that never completes leaves
/// the indicator at its rest position indefinitely.
pub trait RefreshHandler {
    fn on_refresh(&mut self, done: CompletionHandle);
}

impl<F: FnMut(CompletionHandle)> RefreshHandler for F {
    fn on_refresh(&mut self, done: CompletionHandle) {
        self(done)
    }
}

/// Best-effort haptic feedback, fired when a refresh is committed.
pub trait Feedback {
    fn impact(&mut self) -> Result<(), FeedbackError>;
}

impl<F: FnMut() -> Result<(), FeedbackError>> Feedback for F {
    fn impact(&mut self) -> Result<(), FeedbackError> {
        self()
    }
}

/// A [`Feedback`] that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoFeedback;

impl Feedback for NoFeedback {
    fn impact(&mut self) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Drives the settle/refresh/reset sequence:
/// `Idle -> Committed -> AwaitingCompletion -> Settling -> Idle`.
///
/// All animation is tick-driven: call [`RefreshOrchestrator::tick`] once per frame with a
/// monotonic clock. Completion signals may arrive from any thread; they are observed on the
/// next tick.
#[derive(Debug)]
pub struct RefreshOrchestrator {
    phase: RefreshPhase,
    tween: Option<Tween>,
    signal: Option<Arc<CompletionSignal>>,
    sessions_started: u64,
    rest_display_distance: f32,
    settle_duration_ms: u64,
    settle_easing: Easing,
}

impl RefreshOrchestrator {
    pub fn new(options: &RefreshOptions) -> Self {
        Self {
            phase: RefreshPhase::Idle,
            tween: None,
            signal: None,
            sessions_started: 0,
            rest_display_distance: options.rest_display_distance,
            settle_duration_ms: options.settle_duration_ms,
            settle_easing: options.settle_easing,
        }
    }

    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Where the running transition is heading, if any.
    pub fn target(&self) -> Option<f32> {
        self.tween.map(|t| t.to)
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Whether the current session's completion callback has fired. Cleared once a tick starts
    /// the reset animation.
    pub fn completion_received(&self) -> bool {
        self.signal.as_ref().is_some_and(|s| s.is_fired())
    }

    fn set_phase(&mut self, phase: RefreshPhase, state: &mut AnimatedState) {
        if self.phase == phase {
            return;
        }
        pdebug!(from = ?self.phase, to = ?phase, "refresh phase");
        self.phase = phase;
        state.set_interaction_enabled(phase.interaction_enabled());
    }

    fn start_tween(&mut self, state: &AnimatedState, to: f32, now_ms: u64) {
        match &mut self.tween {
            Some(t) => t.retarget(now_ms, to, self.settle_duration_ms),
            None => {
                self.tween = Some(Tween::new(
                    state.pull_distance(),
                    to,
                    now_ms,
                    self.settle_duration_ms,
                    self.settle_easing,
                ));
            }
        }
    }

    /// Commits a ready release: settles toward the rest distance and invokes `refresh` once.
    ///
    /// Returns the new session number, or `None` if a session is already in flight.
    pub fn commit(
        &mut self,
        state: &mut AnimatedState,
        now_ms: u64,
        refresh: &mut dyn RefreshHandler,
        feedback: &mut dyn Feedback,
    ) -> Option<u64> {
        if self.phase != RefreshPhase::Idle {
            pwarn!(phase = ?self.phase, "commit while a refresh session is in flight; ignored");
            return None;
        }

        state.set_ready(false);
        self.set_phase(RefreshPhase::Committed, state);

        if let Err(_err) = feedback.impact() {
            pwarn!(err = %_err, "haptic feedback failed");
        }

        self.start_tween(state, self.rest_display_distance, now_ms);

        self.sessions_started = self.sessions_started.saturating_add(1);
        let session = self.sessions_started;
        let signal = Arc::new(CompletionSignal::new(session));
        let done = CompletionHandle::new(&signal);
        self.signal = Some(signal);

        pdebug!(session, "refresh session started");
        refresh.on_refresh(done);
        self.set_phase(RefreshPhase::AwaitingCompletion, state);
        Some(session)
    }

    /// Settles a non-ready release back to 0. No refresh is triggered.
    pub fn cancel(&mut self, state: &mut AnimatedState, now_ms: u64) {
        if self.phase != RefreshPhase::Idle {
            pwarn!(phase = ?self.phase, "cancel while a refresh session is in flight; ignored");
            return;
        }
        state.set_ready(false);
        self.start_tween(state, 0.0, now_ms);
    }

    /// Drops an in-flight idle transition so a new drag can write the distance directly.
    ///
    /// Returns `true` if a transition was interrupted. Transitions belonging to a refresh session
    /// are never interrupted.
    pub fn interrupt(&mut self) -> bool {
        if self.phase != RefreshPhase::Idle || self.tween.is_none() {
            return false;
        }
        self.tween = None;
        ptrace!("idle transition interrupted by drag");
        true
    }

    /// Advances the running transition and observes completion.
    ///
    /// Returns the pull distance written this tick, or `None` when nothing is animating.
    pub fn tick(&mut self, state: &mut AnimatedState, now_ms: u64) -> Option<f32> {
        if self.phase == RefreshPhase::AwaitingCompletion && self.completion_received() {
            // Ending the session here makes later completions of the same handle no-ops.
            self.signal = None;
            self.start_tween(state, 0.0, now_ms);
            self.set_phase(RefreshPhase::Settling, state);
        }

        let tween = self.tween?;
        let pull_distance = tween.sample(now_ms);
        state.set_pull_distance(pull_distance);

        if tween.is_done(now_ms) {
            self.tween = None;
            if self.phase == RefreshPhase::Settling {
                self.set_phase(RefreshPhase::Idle, state);
                pdebug!(session = self.sessions_started, "refresh session finished");
            }
        }

        Some(pull_distance)
    }
}
