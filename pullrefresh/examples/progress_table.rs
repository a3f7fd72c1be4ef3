// Example: how the indicator channels follow the pull distance.
use pullrefresh::{ProgressMapper, RefreshOptions};

fn main() {
    let options = RefreshOptions::default();
    let mapper = ProgressMapper::new(&options);

    println!(
        "ready at {} / ring full at {} / drag clamp {} / ring radius {:.2}",
        options.ready_threshold(),
        mapper.reveal_distance(),
        options.max_drag_distance,
        mapper.ring_radius()
    );

    for d in (0..=80).step_by(10) {
        let f = mapper.map(d as f32);
        println!(
            "d={d:>2} progress={:.2} stroke_offset={:>6.2} opacity={:.2}",
            f.progress, f.stroke_offset, f.opacity
        );
    }
}
