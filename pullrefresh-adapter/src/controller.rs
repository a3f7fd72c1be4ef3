use alloc::boxed::Box;
use core::fmt;

use pullrefresh::{
    AnimatedState, Feedback, GestureEvent, GesturePhase, GestureRecognizer, NoFeedback,
    OptionsError, ProgressMapper, RefreshHandler, RefreshOptions, RefreshOrchestrator,
    RefreshPhase, Release, ScrollSink, StateReader,
};

use crate::{FrameSampler, SurfaceFrame};

/// How the controller handled a gesture event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureResponse {
    /// The pull-to-refresh layer owns this gesture; do not forward it to the list.
    Claimed,
    /// Not ours: forward the event to the underlying scrollable list.
    PassThrough,
    /// A refresh session is in flight and the list rejects touch input.
    Blocked,
}

/// A framework-neutral pull-to-refresh controller for one mounted list.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_scroll` when the list reports a scroll offset (or hand a [`ScrollSink`] to the scroll
///   source)
/// - `on_gesture(event, now_ms)` for every touch event on the list surface
/// - `tick(now_ms)` each frame/timer tick (for settle animations and refresh completion)
///
/// Rendering reads the shared state through [`FrameSampler`], which can live on another thread.
pub struct Controller {
    options: RefreshOptions,
    state: AnimatedState,
    recognizer: GestureRecognizer,
    orchestrator: RefreshOrchestrator,
    mapper: ProgressMapper,
    refresh: Box<dyn RefreshHandler + Send>,
    feedback: Box<dyn Feedback + Send>,
}

impl Controller {
    /// Creates a controller that calls `refresh` every time a ready pull is released.
    pub fn new(
        options: RefreshOptions,
        refresh: impl RefreshHandler + Send + 'static,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        adebug!(?options, "Controller::new");
        Ok(Self {
            options,
            state: AnimatedState::new(),
            recognizer: GestureRecognizer::new(&options),
            orchestrator: RefreshOrchestrator::new(&options),
            mapper: ProgressMapper::new(&options),
            refresh: Box::new(refresh),
            feedback: Box::new(NoFeedback),
        })
    }

    /// Sets the haptic feedback fired when a refresh is committed.
    pub fn with_feedback(mut self, feedback: impl Feedback + Send + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    pub fn options(&self) -> &RefreshOptions {
        &self.options
    }

    pub fn reader(&self) -> StateReader {
        self.state.reader()
    }

    pub fn scroll_sink(&self) -> ScrollSink {
        self.state.scroll_sink()
    }

    pub fn sampler(&self) -> FrameSampler {
        FrameSampler::new(self.state.reader(), self.mapper)
    }

    pub fn phase(&self) -> RefreshPhase {
        self.orchestrator.phase()
    }

    pub fn sessions_started(&self) -> u64 {
        self.orchestrator.sessions_started()
    }

    pub fn is_refreshing(&self) -> bool {
        self.orchestrator.phase().is_refreshing()
    }

    pub fn is_dragging(&self) -> bool {
        self.recognizer.is_active()
    }

    pub fn is_animating(&self) -> bool {
        self.orchestrator.is_animating()
    }

    pub fn interaction_enabled(&self) -> bool {
        self.orchestrator.phase().interaction_enabled()
    }

    /// Target of the running settle animation, if any.
    pub fn settle_target(&self) -> Option<f32> {
        self.orchestrator.target()
    }

    pub fn on_scroll(&self, scroll_position: f32) {
        self.state.on_scroll(scroll_position);
    }

    /// Routes one touch event. `End` and `Terminated` are handled identically.
    ///
    /// While a refresh session is in flight every phase is `Blocked`, releases included.
    pub fn on_gesture(&mut self, event: GestureEvent, now_ms: u64) -> GestureResponse {
        if !self.interaction_enabled() {
            atrace!(phase = ?self.phase(), ?event, "gesture blocked during refresh");
            return GestureResponse::Blocked;
        }
        if !self.recognizer.is_active() {
            if event.phase.is_release() {
                return GestureResponse::PassThrough;
            }
            let response = self.try_capture(event.dy);
            if response == GestureResponse::Claimed && event.phase == GesturePhase::Move {
                self.apply_move(event.dy);
            }
            return response;
        }

        match event.phase {
            GesturePhase::Start | GesturePhase::Move => self.apply_move(event.dy),
            GesturePhase::End | GesturePhase::Terminated => self.release(now_ms),
        }
        GestureResponse::Claimed
    }

    fn try_capture(&mut self, dy: f32) -> GestureResponse {
        let scroll_position = self.state.scroll_position();
        if !GestureRecognizer::should_capture(scroll_position, dy) {
            atrace!(scroll_position, dy, "gesture passed through");
            return GestureResponse::PassThrough;
        }
        // Drag wins over an in-flight settle.
        self.orchestrator.interrupt();
        self.recognizer.begin();
        GestureResponse::Claimed
    }

    fn apply_move(&mut self, dy: f32) {
        let update = self.recognizer.on_move(dy);
        self.state.set_pull_distance(update.pull_distance);
        if let Some(ready) = update.ready_changed {
            self.state.set_ready(ready.is_ready());
        }
    }

    fn release(&mut self, now_ms: u64) {
        match self.recognizer.release() {
            Release::Commit => {
                let session = self.orchestrator.commit(
                    &mut self.state,
                    now_ms,
                    &mut *self.refresh,
                    &mut *self.feedback,
                );
                if session.is_none() {
                    awarn!("ready release dropped: a refresh session is already in flight");
                }
            }
            Release::Cancel => self.orchestrator.cancel(&mut self.state, now_ms),
        }
    }

    /// Advances settle animations and observes refresh completion.
    ///
    /// Returns the pull distance written this tick, or `None` when nothing is animating.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        self.orchestrator.tick(&mut self.state, now_ms)
    }

    /// Samples the current frame on the controller's thread.
    pub fn frame(&self) -> SurfaceFrame {
        self.sampler().sample()
    }
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("options", &self.options)
            .field("state", &self.state)
            .field("recognizer", &self.recognizer)
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}
