use crate::*;

use alloc::string::ToString;
use alloc::vec::Vec;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pullrefresh::{
    CompletionHandle, FeedbackError, GestureEvent, OptionsError, RefreshOptions, RefreshPhase,
};

/// A refresh handler that parks every completion handle for the test to fire later.
#[derive(Clone, Default)]
struct Pending(Arc<Mutex<Vec<CompletionHandle>>>);

impl Pending {
    fn count(&self) -> usize {
        self.0.lock().unwrap().len()
    }

    fn last(&self) -> CompletionHandle {
        self.0.lock().unwrap().last().cloned().unwrap()
    }
}

fn controller() -> (Controller, Pending) {
    let pending = Pending::default();
    let sink = pending.clone();
    let c = Controller::new(RefreshOptions::default(), move |done: CompletionHandle| {
        sink.0.lock().unwrap().push(done);
    })
    .unwrap();
    (c, pending)
}

fn drag(c: &mut Controller, path: &[f32], now_ms: u64) -> GestureResponse {
    let first = c.on_gesture(GestureEvent::start(), now_ms);
    if first != GestureResponse::Claimed {
        return first;
    }
    for &dy in path {
        assert_eq!(c.on_gesture(GestureEvent::moved(dy), now_ms), GestureResponse::Claimed);
    }
    first
}

fn release(c: &mut Controller, now_ms: u64) -> GestureResponse {
    c.on_gesture(GestureEvent::end(0.0), now_ms)
}

#[test]
fn invalid_options_are_rejected() {
    let err = Controller::new(
        RefreshOptions::default().with_ready_threshold_fraction(0.0),
        |_done: CompletionHandle| {},
    )
    .unwrap_err();
    assert_eq!(err, OptionsError::ReadyThresholdFraction(0.0));
}

#[test]
fn drag_back_below_threshold_then_release_does_not_refresh() {
    let (mut c, pending) = controller();
    c.on_scroll(0.0);

    drag(&mut c, &[25.0, 50.0], 0);
    assert!(c.reader().is_ready());
    drag_more(&mut c, 20.0);
    assert!(!c.reader().is_ready());

    assert_eq!(release(&mut c, 100), GestureResponse::Claimed);
    assert_eq!(pending.count(), 0);
    assert_eq!(c.settle_target(), Some(0.0));
    assert!(c.interaction_enabled());

    c.tick(280);
    assert_eq!(c.reader().pull_distance(), 0.0);
    assert!(!c.is_animating());
}

fn drag_more(c: &mut Controller, dy: f32) {
    assert_eq!(c.on_gesture(GestureEvent::moved(dy), 0), GestureResponse::Claimed);
}

#[test]
fn ready_release_refreshes_once_and_resets_after_completion() {
    let (mut c, pending) = controller();
    let sampler = c.sampler();

    drag(&mut c, &[30.0, 60.0], 0);
    assert_eq!(c.reader().pull_distance(), 60.0);
    release(&mut c, 1_000);

    assert_eq!(pending.count(), 1);
    assert_eq!(c.settle_target(), Some(75.0));
    assert_eq!(c.phase(), RefreshPhase::AwaitingCompletion);
    assert!(!sampler.sample().interaction_enabled);

    c.tick(1_180);
    let frame = sampler.sample();
    assert_eq!(frame.translate_y, 75.0);
    assert_eq!(frame.indicator.stroke_offset, 0.0);
    assert!(!frame.interaction_enabled);

    let done = pending.last();
    assert!(done.complete());
    c.tick(2_000);
    assert_eq!(c.phase(), RefreshPhase::Settling);
    assert_eq!(c.settle_target(), Some(0.0));

    c.tick(2_090);
    assert!(c.is_refreshing());
    c.tick(2_180);
    assert_eq!(c.phase(), RefreshPhase::Idle);
    assert_eq!(sampler.sample().translate_y, 0.0);
    assert!(sampler.sample().interaction_enabled);

    assert!(!done.complete());
    assert_eq!(c.tick(2_200), None);
    assert!(!c.is_animating());
    assert_eq!(pending.count(), 1);
    assert_eq!(c.sessions_started(), 1);
}

#[test]
fn raw_displacement_is_clamped_during_drag() {
    let (mut c, _pending) = controller();
    drag(&mut c, &[45.0, 90.0], 0);
    assert_eq!(c.reader().pull_distance(), 80.0);
    assert_eq!(c.frame().indicator.opacity, 1.0);

    drag_more(&mut c, 500.0);
    assert_eq!(c.reader().pull_distance(), 80.0);
}

#[test]
fn gesture_passes_through_when_scrolled_down() {
    let (mut c, pending) = controller();
    c.on_scroll(12.0);

    assert_eq!(
        c.on_gesture(GestureEvent::moved(30.0), 0),
        GestureResponse::PassThrough
    );
    assert!(!c.is_dragging());
    assert_eq!(c.reader().pull_distance(), 0.0);
    assert_eq!(release(&mut c, 10), GestureResponse::PassThrough);
    assert_eq!(pending.count(), 0);
}

#[test]
fn upward_motion_is_not_claimed() {
    let (mut c, _pending) = controller();
    assert_eq!(
        c.on_gesture(GestureEvent::moved(-4.0), 0),
        GestureResponse::PassThrough
    );

    // Claiming on the first move event (no explicit start) applies the displacement at once.
    assert_eq!(
        c.on_gesture(GestureEvent::moved(12.0), 0),
        GestureResponse::Claimed
    );
    assert_eq!(c.reader().pull_distance(), 12.0);
}

#[test]
fn termination_is_treated_as_release() {
    let (mut c, pending) = controller();
    drag(&mut c, &[70.0], 0);
    assert_eq!(
        c.on_gesture(GestureEvent::terminated(70.0), 50),
        GestureResponse::Claimed
    );
    assert_eq!(pending.count(), 1);
    assert_eq!(c.settle_target(), Some(75.0));
}

#[test]
fn gestures_are_blocked_while_refreshing() {
    let (mut c, pending) = controller();
    drag(&mut c, &[60.0], 0);
    release(&mut c, 0);

    assert_eq!(
        c.on_gesture(GestureEvent::start(), 100),
        GestureResponse::Blocked
    );
    assert_eq!(
        c.on_gesture(GestureEvent::moved(80.0), 100),
        GestureResponse::Blocked
    );
    // Releases of a touch that began during the session are not forwarded to the list either.
    assert_eq!(
        c.on_gesture(GestureEvent::end(10.0), 120),
        GestureResponse::Blocked
    );
    assert_eq!(
        c.on_gesture(GestureEvent::terminated(10.0), 120),
        GestureResponse::Blocked
    );
    assert_eq!(c.phase(), RefreshPhase::AwaitingCompletion);
    assert_eq!(pending.count(), 1);

    pending.last().complete();
    c.tick(200);
    assert_eq!(
        c.on_gesture(GestureEvent::start(), 250),
        GestureResponse::Blocked
    );
    c.tick(380);
    assert_eq!(
        c.on_gesture(GestureEvent::start(), 400),
        GestureResponse::Claimed
    );
}

#[test]
fn micro_crossings_near_threshold_each_toggle_ready() {
    let (mut c, pending) = controller();
    let reader = c.reader();
    drag(&mut c, &[], 0);

    for i in 0..50 {
        let above = i % 2 == 0;
        drag_more(&mut c, if above { 40.0 } else { 39.9 });
        assert_eq!(reader.is_ready(), above, "move {i}");
    }

    release(&mut c, 0);
    assert_eq!(pending.count(), 0);
    assert_eq!(c.settle_target(), Some(0.0));
}

#[test]
fn shared_controller_hands_out_read_and_scroll_handles_only() {
    let (mut c, pending) = controller();
    drag(&mut c, &[50.0], 0);

    let shared: &Controller = &c;
    let reader = shared.reader();
    shared.scroll_sink().on_scroll(200.0);
    shared.on_scroll(0.0);
    let _ = shared.frame();

    assert_eq!(reader.pull_distance(), 50.0);
    assert!(reader.is_ready());
    assert!(reader.interaction_enabled());

    release(&mut c, 0);
    assert_eq!(pending.count(), 1);
    assert!(!reader.is_ready());
    assert!(!reader.interaction_enabled());
}

#[test]
fn drag_interrupts_idle_settle() {
    let (mut c, pending) = controller();
    drag(&mut c, &[30.0], 0);
    release(&mut c, 0);
    c.tick(90);
    assert!(c.is_animating());

    drag(&mut c, &[55.0], 100);
    assert!(!c.is_animating());
    assert_eq!(c.reader().pull_distance(), 55.0);
    // The abandoned settle no longer writes.
    assert_eq!(c.tick(150), None);
    assert_eq!(c.reader().pull_distance(), 55.0);

    release(&mut c, 200);
    assert_eq!(pending.count(), 1);
}

#[test]
fn haptic_feedback_fires_on_commit_only() {
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let mut c = Controller::new(RefreshOptions::default(), |done: CompletionHandle| {
        done.complete();
    })
    .unwrap()
    .with_feedback(move || -> Result<(), FeedbackError> {
        counter.fetch_add(1, Ordering::Relaxed);
        Err(FeedbackError::Unsupported)
    });

    drag(&mut c, &[20.0], 0);
    release(&mut c, 0);
    assert_eq!(fired.load(Ordering::Relaxed), 0);

    c.tick(500);
    drag(&mut c, &[65.0], 600);
    release(&mut c, 600);
    assert_eq!(fired.load(Ordering::Relaxed), 1);
    assert_eq!(c.sessions_started(), 1);
    assert!(FeedbackError::Unsupported.to_string().contains("not available"));
}

#[test]
fn completion_after_controller_dropped_is_harmless() {
    let (mut c, pending) = controller();
    drag(&mut c, &[60.0], 0);
    release(&mut c, 0);
    let done = pending.last();
    drop(c);
    assert!(!done.complete());
    assert!(!done.complete());
}

#[test]
fn render_thread_samples_without_the_controller() {
    let (mut c, pending) = controller();
    let sampler = c.sampler();
    let stop = Arc::new(AtomicBool::new(false));

    let render = {
        let stop = Arc::clone(&stop);
        std::thread::spawn(move || {
            let mut frames = 0usize;
            loop {
                let f = sampler.sample();
                assert!(f.translate_y >= 0.0 && f.translate_y <= 80.0);
                assert!((0.0..=1.0).contains(&f.indicator.opacity));
                frames += 1;
                if stop.load(Ordering::Relaxed) {
                    break frames;
                }
                std::thread::yield_now();
            }
        })
    };

    for step in 0..200u32 {
        let dy = (step % 100) as f32;
        if step == 0 {
            drag(&mut c, &[dy], 0);
        } else {
            drag_more(&mut c, dy);
        }
    }
    release(&mut c, 0);
    for now_ms in (0..=200).step_by(16) {
        c.tick(now_ms);
    }

    stop.store(true, Ordering::Relaxed);
    assert!(render.join().unwrap() > 0);
    // The last move (99) was past the threshold.
    assert_eq!(pending.count(), 1);
}

#[test]
fn scroll_sink_updates_capture_gate_from_another_thread() {
    let (mut c, _pending) = controller();
    let sink = c.scroll_sink();
    std::thread::spawn(move || sink.on_scroll(300.0))
        .join()
        .unwrap();

    assert_eq!(c.reader().scroll_position(), 300.0);
    assert_eq!(
        c.on_gesture(GestureEvent::start(), 0),
        GestureResponse::PassThrough
    );

    c.on_scroll(0.0);
    assert_eq!(
        c.on_gesture(GestureEvent::start(), 0),
        GestureResponse::Claimed
    );
}

#[test]
fn refresh_completed_from_worker_thread() {
    let mut c = Controller::new(RefreshOptions::default(), |done: CompletionHandle| {
        std::thread::spawn(move || {
            done.complete();
        });
    })
    .unwrap();

    drag(&mut c, &[60.0], 0);
    release(&mut c, 0);

    let mut now_ms = 0;
    while c.phase() != RefreshPhase::Idle {
        now_ms += 16;
        c.tick(now_ms);
        std::thread::yield_now();
        assert!(now_ms < 60_000, "refresh never settled");
    }
    assert_eq!(c.reader().pull_distance(), 0.0);
}
