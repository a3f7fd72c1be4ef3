use pullrefresh::{IndicatorFrame, ProgressMapper, StateReader};

/// Everything a renderer needs to draw the wrapped list for one frame.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceFrame {
    /// Whether the list accepts touch input (false while a refresh session is in flight).
    pub interaction_enabled: bool,
    /// Vertical offset applied to the list container; mirrors the pull distance.
    pub translate_y: f32,
    pub indicator: IndicatorFrame,
}

/// Samples [`SurfaceFrame`]s from the shared state.
///
/// `Clone + Send + Sync`: move one into the render loop and call [`FrameSampler::sample`] once
/// per frame. Sampling never waits on gesture processing.
#[derive(Clone, Debug)]
pub struct FrameSampler {
    reader: StateReader,
    mapper: ProgressMapper,
}

impl FrameSampler {
    pub fn new(reader: StateReader, mapper: ProgressMapper) -> Self {
        Self { reader, mapper }
    }

    pub fn reader(&self) -> &StateReader {
        &self.reader
    }

    pub fn mapper(&self) -> &ProgressMapper {
        &self.mapper
    }

    pub fn sample(&self) -> SurfaceFrame {
        let pull_distance = self.reader.pull_distance();
        SurfaceFrame {
            interaction_enabled: self.reader.interaction_enabled(),
            translate_y: pull_distance,
            indicator: self.mapper.map(pull_distance),
        }
    }
}
