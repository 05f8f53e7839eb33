use std::path::PathBuf;
use raylib::prelude::*;
use tracing::{debug, warn};
use crate::constants::*;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::visibility::OnceVisible;

/// Scale that makes an image of the given size fit the render target.
pub fn fit_scale(width: f32, height: f32) -> f32 {
    if width > height {
        if width > RENDER_WIDTH as f32 * FIT_RATIO {
            (RENDER_WIDTH as f32 * FIT_RATIO) / width
        } else {
            1.0
        }
    } else if height > RENDER_HEIGHT as f32 * FIT_RATIO {
        (RENDER_HEIGHT as f32 * FIT_RATIO) / height
    } else {
        1.0
    }
}

/// One panel of the filmstrip. The texture is loaded the first time the
/// slide comes near the viewport.
pub struct Slide {
    path: PathBuf,
    image: Option<Texture2D>,
    lazy_load: OnceVisible,

    placed: bool,
    offset: f32,
    target_offset: f32,

    animation_timer: f32,
    pub is_animating: bool,
    tween: Option<ease::Tween>,
}

impl Slide {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            image: None,
            lazy_load: OnceVisible::new(),
            placed: false,
            offset: 0.0,
            target_offset: 0.0,
            animation_timer: 0.0,
            is_animating: false,
            tween: None,
        }
    }

    /// Current horizontal offset in percent of the screen width.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[cfg(test)]
    pub fn target_offset(&self) -> f32 {
        self.target_offset
    }

    #[cfg(test)]
    pub fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    /// Moves the slide to `percent`. The first placement is immediate, later
    /// ones animate from wherever the slide currently is.
    pub fn set_offset(&mut self, percent: i64) {
        let target = percent as f32;
        if !self.placed {
            self.placed = true;
            self.offset = target;
            self.target_offset = target;
            return;
        }
        if target == self.target_offset {
            return;
        }

        self.target_offset = target;
        self.tween = Some(ease::Tween::new(ease::cubic_out, self.offset, target, ANIMATION_DURATION));
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    /// Jumps to the current target, dropping any running animation.
    pub fn settle(&mut self) {
        self.offset = self.target_offset;
        self.animation_timer = 0.0;
        self.is_animating = false;
        self.tween = None;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }

        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt);
        }

        self.animation_timer += dt;
        if self.animation_timer >= ANIMATION_DURATION {
            self.is_animating = false;
            self.offset = self.target_offset;
            self.tween = None;
        }
    }

    /// On screen now, or heading to a spot next to the viewport.
    pub fn is_near_viewport(&self) -> bool {
        self.offset.abs() < 100.0 || self.target_offset.abs() <= LAZY_LOAD_MARGIN as f32
    }

    /// Loads the texture the first time the slide is near the viewport.
    pub fn load_if_visible(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        let visible = self.is_near_viewport();
        if self.lazy_load.notify(visible) {
            self.load(rl, thread);
        }
    }

    /// Loads the texture regardless of position, unless it was already attempted.
    pub fn load_now(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        if self.lazy_load.notify(true) {
            self.load(rl, thread);
        }
    }

    fn load(&mut self, rl: &mut RaylibHandle, thread: &RaylibThread) {
        match load_texture_with_exif_rotation(rl, thread, &self.path) {
            Ok(texture) => {
                debug!(path = %self.path.display(), "Texture loaded");
                self.image = Some(texture);
            }
            Err(e) => {
                warn!("Failed to load slide {}: {:#}", self.path.display(), e);
            }
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        // Fully outside the screen.
        if self.offset.abs() >= 100.0 {
            return;
        }

        let screen_width = RENDER_WIDTH as f32;
        let screen_height = RENDER_HEIGHT as f32;
        let center = Vector2::new(
            screen_width * (0.5 + self.offset / 100.0),
            screen_height * 0.5,
        );

        match &self.image {
            Some(image) => {
                let tex_width = image.width() as f32;
                let tex_height = image.height() as f32;
                let scale = fit_scale(tex_width, tex_height);

                let scaled_width = tex_width * scale;
                let scaled_height = tex_height * scale;
                let origin = Vector2::new(scaled_width / 2.0, scaled_height / 2.0);

                d.draw_texture_pro(
                    image,
                    Rectangle::new(0.0, 0.0, tex_width, tex_height),
                    Rectangle::new(center.x, center.y, scaled_width, scaled_height),
                    origin,
                    0.0,
                    Color::WHITE,
                );
            }
            None => {
                let width = screen_width * FIT_RATIO;
                let height = screen_height * FIT_RATIO;
                d.draw_rectangle(
                    (center.x - width / 2.0) as i32,
                    (center.y - height / 2.0) as i32,
                    width as i32,
                    height as i32,
                    Color::DARKGRAY,
                );
            }
        }
    }
}
