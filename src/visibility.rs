//! Reactions to a target entering or leaving the viewport.
//!
//! [`OnceVisible`] fires a single time, the first time its target is seen,
//! and ignores every later notification. [`VisibilityToggle`] follows the
//! target's visibility on every change.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OnceVisible {
    fired: bool,
}

impl OnceVisible {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once: on the first notification where
    /// `visible` holds. The caller performs the effect when it does.
    pub fn notify(&mut self, visible: bool) -> bool {
        if self.fired || !visible {
            return false;
        }
        self.fired = true;
        true
    }

    #[cfg(test)]
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggle {
    shown: bool,
}

impl VisibilityToggle {
    pub fn new(shown: bool) -> Self {
        Self { shown }
    }

    /// Records the target's visibility. Returns the new display state when
    /// it changed.
    pub fn notify(&mut self, visible: bool) -> Option<bool> {
        if self.shown == visible {
            return None;
        }
        self.shown = visible;
        Some(visible)
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}
