/// Rendering surface driven by the slide controller.
///
/// Slides are addressed by ordinal, indicators by the integer tag they were
/// appended with. The controller never reads anything back except the slide
/// count, which must not change after construction.
pub trait RenderSurface {
    fn slide_count(&self) -> usize;

    /// Horizontal offset in percent of the viewport width.
    fn set_slide_offset(&mut self, ordinal: usize, percent: i64);

    fn append_indicator(&mut self, tag: usize);

    /// Marks the indicator carrying `tag` active and every other one inactive.
    fn activate_indicator(&mut self, tag: usize);
}
