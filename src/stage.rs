use std::path::PathBuf;
use raylib::prelude::*;
use tracing::debug;
use crate::constants::*;
use crate::fade::HoverPhase;
use crate::input::Control;
use crate::slide::Slide;
use crate::surface::RenderSurface;
use crate::visibility::VisibilityToggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dot {
    tag: usize,
    active: bool,
}

/// Center of the dot carrying `tag` in a row of `count` dots.
pub fn dot_center(tag: usize, count: usize) -> Vector2 {
    let row_offset = tag as f32 - (count as f32 - 1.0) / 2.0;
    Vector2::new(
        RENDER_WIDTH as f32 / 2.0 + row_offset * DOT_SPACING,
        RENDER_HEIGHT as f32 - DOT_MARGIN_BOTTOM,
    )
}

pub fn button_center(control: Control) -> Option<Vector2> {
    let y = RENDER_HEIGHT as f32 / 2.0;
    match control {
        Control::Previous => Some(Vector2::new(BUTTON_MARGIN, y)),
        Control::Next => Some(Vector2::new(RENDER_WIDTH as f32 - BUTTON_MARGIN, y)),
        Control::Indicator(_) => None,
    }
}

fn within(point: Vector2, center: Vector2, radius: f32) -> bool {
    let dx = point.x - center.x;
    let dy = point.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

fn with_opacity(color: Color, opacity: f32) -> Color {
    Color::new(color.r, color.g, color.b, (color.a as f32 * opacity) as u8)
}

/// Raylib-backed carousel: the slide filmstrip plus its buttons and dots.
pub struct Stage {
    slides: Vec<Slide>,
    dots: Vec<Dot>,
    hovered: Option<Control>,
    controls: VisibilityToggle,
}

impl Stage {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            slides: paths.into_iter().map(Slide::new).collect(),
            dots: Vec::new(),
            hovered: None,
            controls: VisibilityToggle::new(true),
        }
    }

    #[cfg(test)]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn active_indicator(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.tag)
    }

    #[cfg(test)]
    pub fn indicator_tags(&self) -> Vec<usize> {
        self.dots.iter().map(|dot| dot.tag).collect()
    }

    pub fn controls_shown(&self) -> bool {
        self.controls.is_shown()
    }

    pub fn hovered(&self) -> Option<Control> {
        self.hovered
    }

    /// Control under a point in render space.
    pub fn hit_test(&self, point: Vector2) -> Option<Control> {
        for control in [Control::Previous, Control::Next] {
            if let Some(center) = button_center(control) {
                if within(point, center, BUTTON_RADIUS) {
                    return Some(control);
                }
            }
        }
        let count = self.dots.len();
        self.dots
            .iter()
            .find(|dot| within(point, dot_center(dot.tag, count), DOT_RADIUS * 1.5))
            .map(|dot| Control::Indicator(dot.tag))
    }

    /// Pointer position in render space, `None` when it left the window.
    pub fn set_pointer(&mut self, point: Option<Vector2>) {
        if let Some(shown) = self.controls.notify(point.is_some()) {
            debug!(shown, "Carousel controls visibility changed");
        }
        self.hovered = point.and_then(|p| self.hit_test(p));
    }

    pub fn update(&mut self, dt: f32) {
        for slide in self.slides.iter_mut() {
            slide.update(dt);
        }
    }

    /// Finishes every running offset animation at once.
    pub fn settle(&mut self) {
        for slide in self.slides.iter_mut() {
            slide.settle();
        }
    }

    pub fn load_visible(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for slide in self.slides.iter_mut() {
            slide.load_if_visible(rl, thread);
        }
    }

    pub fn load_all(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        for slide in self.slides.iter_mut() {
            slide.load_now(rl, thread);
        }
    }

    fn control_opacity(&self, control: Control) -> f32 {
        if self.hovered() == Some(control) {
            return 1.0;
        }
        let phase = if self.hovered().is_some() { HoverPhase::Over } else { HoverPhase::Out };
        phase.sibling_opacity()
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for slide in self.slides.iter() {
            slide.draw(d);
        }

        if !self.controls_shown() {
            return;
        }

        for (control, label) in [(Control::Previous, "<"), (Control::Next, ">")] {
            if let Some(center) = button_center(control) {
                let opacity = self.control_opacity(control);
                d.draw_circle_v(center, BUTTON_RADIUS, with_opacity(Color::WHITE, 0.7 * opacity));
                d.draw_text(
                    label,
                    (center.x - 10.0) as i32,
                    (center.y - 20.0) as i32,
                    40,
                    with_opacity(Color::BLACK, opacity),
                );
            }
        }

        let count = self.dots.len();
        for dot in self.dots.iter() {
            let opacity = self.control_opacity(Control::Indicator(dot.tag));
            let (radius, color) = if dot.active {
                (DOT_RADIUS, Color::WHITE)
            } else {
                (DOT_RADIUS * 0.7, Color::LIGHTGRAY)
            };
            d.draw_circle_v(dot_center(dot.tag, count), radius, with_opacity(color, opacity));
        }
    }
}

impl RenderSurface for Stage {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_offset(&mut self, ordinal: usize, percent: i64) {
        if let Some(slide) = self.slides.get_mut(ordinal) {
            slide.set_offset(percent);
        }
    }

    fn append_indicator(&mut self, tag: usize) {
        self.dots.push(Dot { tag, active: false });
    }

    fn activate_indicator(&mut self, tag: usize) {
        for dot in self.dots.iter_mut() {
            dot.active = dot.tag == tag;
        }
    }
}
