/// Which side of the ready threshold the current gesture is on.
///
/// The flag only changes on a crossing: `Below -> Above` when the distance reaches the threshold,
/// `Above -> Below` when it drops under it. Dithering right at the threshold toggles on every
/// crossing; nothing is debounced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReadyState {
    #[default]
    Below,
    Above,
}

impl ReadyState {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Above)
    }

    /// Feeds a new distance. Returns the new state when a crossing happened.
    pub fn update(&mut self, distance: f32, threshold: f32) -> Option<ReadyState> {
        let next = match *self {
            Self::Below if distance >= threshold => Self::Above,
            Self::Above if distance < threshold => Self::Below,
            _ => return None,
        };
        *self = next;
        Some(next)
    }

    pub fn reset(&mut self) {
        *self = Self::Below;
    }
}
