use tracing::{debug, error};
use crate::error::{Result, SlideError};
use crate::input::{Command, Direction};
use crate::surface::RenderSurface;

/// Track offset, in percent of the viewport width, of slide `ordinal` while
/// slide `index` is shown.
pub fn slide_offset(ordinal: usize, index: usize) -> i64 {
    100 * (ordinal as i64 - index as i64)
}

/// Owns the current slide index and keeps the surface's track offsets and
/// indicator highlight in sync with it.
///
/// The slide count is read once from the surface at construction. With zero
/// slides the controller is inert and every operation is a no-op.
pub struct SlideController<S: RenderSurface> {
    surface: S,
    len: usize,
    current_index: usize,
}

impl<S: RenderSurface> SlideController<S> {
    pub fn new(surface: S) -> Self {
        let len = surface.slide_count();
        Self {
            surface,
            len,
            current_index: 0,
        }
    }

    /// Creates one indicator per slide and shows the first slide.
    pub fn init(&mut self) {
        if self.is_empty() {
            debug!("No slides, carousel stays inert");
            return;
        }
        for tag in 0..self.len {
            self.surface.append_indicator(tag);
        }
        self.apply(0);
    }

    pub fn go_to_slide(&mut self, index: usize) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }
        if index >= self.len {
            let err = SlideError::InvalidIndex { index, len: self.len };
            error!("{}", err);
            return Err(err);
        }
        self.apply(index);
        Ok(())
    }

    pub fn advance(&mut self, direction: Direction) {
        if self.is_empty() {
            return;
        }
        let next = match direction {
            Direction::Forward => (self.current_index + 1) % self.len,
            Direction::Backward => (self.current_index + self.len - 1) % self.len,
        };
        self.apply(next);
    }

    pub fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Advance(direction) => {
                self.advance(direction);
                Ok(())
            }
            Command::JumpTo(index) => self.go_to_slide(index),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    // `index` is already known to be < len.
    fn apply(&mut self, index: usize) {
        for ordinal in 0..self.len {
            self.surface.set_slide_offset(ordinal, slide_offset(ordinal, index));
        }
        self.surface.activate_indicator(index);
        debug!(from = self.current_index, to = index, "Slide transition");
        self.current_index = index;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct FakeSurface {
        offsets: Vec<i64>,
        // (tag, active)
        indicators: Vec<(usize, bool)>,
    }

    impl FakeSurface {
        fn with_slides(count: usize) -> Self {
            Self {
                offsets: vec![i64::MIN; count],
                indicators: Vec::new(),
            }
        }

        fn active_tags(&self) -> Vec<usize> {
            self.indicators
                .iter()
                .filter(|(_, active)| *active)
                .map(|(tag, _)| *tag)
                .collect()
        }
    }

    impl RenderSurface for FakeSurface {
        fn slide_count(&self) -> usize {
            self.offsets.len()
        }

        fn set_slide_offset(&mut self, ordinal: usize, percent: i64) {
            self.offsets[ordinal] = percent;
        }

        fn append_indicator(&mut self, tag: usize) {
            self.indicators.push((tag, false));
        }

        fn activate_indicator(&mut self, tag: usize) {
            for (t, active) in self.indicators.iter_mut() {
                *active = *t == tag;
            }
        }
    }

    fn controller(count: usize) -> SlideController<FakeSurface> {
        let mut controller = SlideController::new(FakeSurface::with_slides(count));
        controller.init();
        controller
    }

    fn assert_consistent(controller: &SlideController<FakeSurface>) {
        assert_eq!(
            controller.surface().active_tags(),
            vec![controller.current_index()]
        );
    }

    #[test]
    fn test_init_shows_first_slide() {
        let c = controller(3);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.surface().offsets, vec![0, 100, 200]);
        let tags: Vec<usize> = c.surface().indicators.iter().map(|(t, _)| *t).collect();
        assert_eq!(tags, vec![0, 1, 2]);
        assert_consistent(&c);
    }

    #[test]
    fn test_end_to_end_cycle() {
        let mut c = controller(3);
        c.advance(Direction::Forward);
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().offsets, vec![-100, 0, 100]);
        assert_consistent(&c);

        c.advance(Direction::Forward);
        assert_eq!(c.current_index(), 2);
        c.advance(Direction::Forward);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.surface().offsets, vec![0, 100, 200]);
        assert_consistent(&c);
    }

    #[test]
    fn test_wraparound_both_ways() {
        let mut c = controller(4);
        c.advance(Direction::Backward);
        assert_eq!(c.current_index(), 3);
        assert_consistent(&c);

        c.advance(Direction::Forward);
        assert_eq!(c.current_index(), 0);
        assert_consistent(&c);
    }

    #[test]
    fn test_bounds_hold_for_any_sequence() {
        let mut c = controller(5);
        let pattern = [
            Direction::Backward,
            Direction::Backward,
            Direction::Forward,
            Direction::Backward,
            Direction::Forward,
            Direction::Forward,
        ];
        for step in 0..200 {
            c.advance(pattern[step % pattern.len()]);
            assert!(c.current_index() < c.len());
            assert_consistent(&c);
        }
    }

    #[test]
    fn test_offset_formula() {
        let mut c = controller(4);
        c.go_to_slide(2).unwrap();
        assert_eq!(c.surface().offsets, vec![200, 100, 0, -100]);
        assert_consistent(&c);
    }

    #[test]
    fn test_slide_offset_large_indices() {
        assert_eq!(slide_offset(0, 0), 0);
        assert_eq!(slide_offset(3, 1), 200);
        let far = 30_000_000;
        assert_eq!(slide_offset(far, 0), 3_000_000_000);
        assert_eq!(slide_offset(0, far), -3_000_000_000);
    }

    #[test]
    fn test_go_to_slide_is_idempotent() {
        let mut c = controller(4);
        c.go_to_slide(3).unwrap();
        let offsets = c.surface().offsets.clone();
        let indicators = c.surface().indicators.clone();

        c.go_to_slide(3).unwrap();
        assert_eq!(c.surface().offsets, offsets);
        assert_eq!(c.surface().indicators, indicators);
        assert_eq!(c.current_index(), 3);
    }

    #[test]
    fn test_direct_jump() {
        let mut c = controller(5);
        c.dispatch(Command::JumpTo(4)).unwrap();
        assert_eq!(c.current_index(), 4);
        assert_eq!(c.surface().active_tags(), vec![4]);
        assert_eq!(c.surface().offsets, vec![400, 300, 200, 100, 0]);
    }

    #[test]
    fn test_invalid_index_rejected_without_change() {
        let mut c = controller(3);
        c.advance(Direction::Forward);
        let offsets = c.surface().offsets.clone();

        assert_eq!(
            c.go_to_slide(3),
            Err(SlideError::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(c.current_index(), 1);
        assert_eq!(c.surface().offsets, offsets);
        assert_consistent(&c);
    }

    #[test]
    fn test_dispatch_advance() {
        let mut c = controller(2);
        c.dispatch(Command::Advance(Direction::Backward)).unwrap();
        assert_eq!(c.current_index(), 1);
        c.dispatch(Command::Advance(Direction::Backward)).unwrap();
        assert_eq!(c.current_index(), 0);
    }

    #[test]
    fn test_single_slide_stays_put() {
        let mut c = controller(1);
        c.advance(Direction::Forward);
        c.advance(Direction::Backward);
        assert_eq!(c.current_index(), 0);
        assert_eq!(c.surface().offsets, vec![0]);
        assert_consistent(&c);
    }

    #[test]
    fn test_empty_controller_is_inert() {
        let mut c = controller(0);
        assert!(c.is_empty());
        assert!(c.surface().indicators.is_empty());

        c.advance(Direction::Forward);
        assert_eq!(c.go_to_slide(0), Ok(()));
        assert_eq!(c.current_index(), 0);
        assert!(c.surface().indicators.is_empty());
    }
}
