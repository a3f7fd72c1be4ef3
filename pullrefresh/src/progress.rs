use core::f32::consts::PI;

use crate::{IndicatorFrame, RefreshOptions};

/// How [`interpolate`] treats inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Pin to the nearest output edge.
    #[default]
    Clamp,
    /// Keep following the line through the two output points.
    Extend,
    /// Return the input unchanged.
    Identity,
}

/// Linearly maps `value` from `input` onto `output`.
///
/// A degenerate input range (`input.0 == input.1`) yields `output.0`.
pub fn interpolate(
    value: f32,
    input: (f32, f32),
    output: (f32, f32),
    extrapolation: Extrapolation,
) -> f32 {
    let (lo, hi) = if input.0 <= input.1 {
        (input.0, input.1)
    } else {
        (input.1, input.0)
    };
    if value < lo || value > hi {
        match extrapolation {
            Extrapolation::Identity => return value,
            Extrapolation::Clamp => {
                let edge = if value < lo { lo } else { hi };
                return interpolate(edge, input, output, Extrapolation::Extend);
            }
            Extrapolation::Extend => {}
        }
    }
    let span = input.1 - input.0;
    if span == 0.0 {
        return output.0;
    }
    let t = (value - input.0) / span;
    output.0 + (output.1 - output.0) * t
}

/// Maps a pull distance to the indicator's visual channels.
///
/// Pure and allocation-free; meant to be evaluated once per rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProgressMapper {
    circle_length: f32,
    progress_scale: f32,
    progress_domain_end: f32,
    max_drag_distance: f32,
}

impl ProgressMapper {
    pub fn new(options: &RefreshOptions) -> Self {
        Self {
            circle_length: options.circle_length,
            progress_scale: options.progress_scale,
            progress_domain_end: options.progress_domain_end,
            max_drag_distance: options.max_drag_distance,
        }
    }

    pub fn circle_length(&self) -> f32 {
        self.circle_length
    }

    /// Radius of a ring whose circumference is the circle length.
    pub fn ring_radius(&self) -> f32 {
        self.circle_length / (2.0 * PI)
    }

    /// Pull distance at which the ring is fully drawn.
    pub fn reveal_distance(&self) -> f32 {
        self.progress_domain_end / self.progress_scale
    }

    pub fn stroke_offset(&self, pull_distance: f32) -> f32 {
        interpolate(
            pull_distance * self.progress_scale,
            (0.0, self.progress_domain_end),
            (self.circle_length, 0.0),
            Extrapolation::Clamp,
        )
    }

    pub fn progress(&self, pull_distance: f32) -> f32 {
        1.0 - self.stroke_offset(pull_distance) / self.circle_length
    }

    pub fn opacity(&self, pull_distance: f32) -> f32 {
        interpolate(
            pull_distance,
            (0.0, self.max_drag_distance),
            (0.0, 1.0),
            Extrapolation::Clamp,
        )
    }

    pub fn map(&self, pull_distance: f32) -> IndicatorFrame {
        IndicatorFrame {
            progress: self.progress(pull_distance),
            stroke_offset: self.stroke_offset(pull_distance),
            opacity: self.opacity(pull_distance),
            container_height: pull_distance.max(0.0),
        }
    }
}

impl Default for ProgressMapper {
    fn default() -> Self {
        Self::new(&RefreshOptions::default())
    }
}
