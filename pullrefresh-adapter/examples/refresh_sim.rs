// Example: a simulated list with 20 cards, pulled past the threshold and refreshed by a worker
// thread that takes 1.5s. Run with `--features tracing` and `RUST_LOG=trace` to see the engine's
// own logs.
use std::thread;
use std::time::{Duration, Instant};

use pullrefresh::{CompletionHandle, FeedbackError, GestureEvent, RefreshOptions};
use pullrefresh_adapter::Controller;
use tracing_subscriber::EnvFilter;

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let items: Vec<u32> = (0..20).collect();
    println!("list mounted with {} cards", items.len());

    let mut c = Controller::new(RefreshOptions::default(), |done: CompletionHandle| {
        println!("refresh #{} started", done.session());
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(1_500));
            done.complete();
        });
    })
    .expect("default options are valid")
    .with_feedback(|| -> Result<(), FeedbackError> {
        println!("*tap* (haptic)");
        Ok(())
    });

    let sampler = c.sampler();
    let epoch = Instant::now();
    let now_ms = || epoch.elapsed().as_millis() as u64;

    // The list sits at its top.
    c.on_scroll(0.0);

    // Drag down 6 units per frame up to a raw 90, then let go.
    println!("response: {:?}", c.on_gesture(GestureEvent::start(), now_ms()));
    for dy in (0..=90).step_by(6) {
        c.on_gesture(GestureEvent::moved(dy as f32), now_ms());
        let f = sampler.sample();
        println!(
            "drag dy={dy:>2} pull={:>5.1} ready={} ring={:.2} opacity={:.2}",
            f.translate_y,
            sampler.reader().is_ready(),
            f.indicator.progress,
            f.indicator.opacity
        );
        thread::sleep(FRAME);
    }
    c.on_gesture(GestureEvent::end(90.0), now_ms());

    // Frame loop until the session is over.
    let mut frame = 0u64;
    while c.is_refreshing() || c.is_animating() {
        c.tick(now_ms());
        if frame % 10 == 0 {
            let f = sampler.sample();
            println!(
                "t={:>5}ms phase={:?} pull={:>5.1} interaction={}",
                now_ms(),
                c.phase(),
                f.translate_y,
                f.interaction_enabled
            );
        }
        frame += 1;
        thread::sleep(FRAME);
    }

    println!(
        "done: sessions={} frame={:?}",
        c.sessions_started(),
        sampler.sample()
    );
}
