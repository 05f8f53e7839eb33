use crate::constants::FADED_OPACITY;

/// Pointer phase over one of the carousel controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Over,
    Out,
}

impl HoverPhase {
    /// Opacity applied to the controls that are *not* under the pointer.
    pub fn sibling_opacity(self) -> f32 {
        match self {
            HoverPhase::Over => FADED_OPACITY,
            HoverPhase::Out => 1.0,
        }
    }
}

