use std::path::PathBuf;
use anyhow::{anyhow, Result};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod constants;
mod controller;
mod error;
mod fade;
mod input;
mod slide;
mod stage;
mod surface;
mod texture_loader;
mod visibility;

use crate::constants::*;
use crate::controller::SlideController;
use crate::input::{InputEvent, SlideIndex, NAVIGATION_KEYS};
use crate::stage::Stage;
use crate::texture_loader::load_sorted_image_paths;

#[derive(Parser)]
#[command(name = "carousel")]
#[command(version, about = "Image carousel with dot indicators and keyboard navigation")]
struct Cli {
    /// Directory containing the slide images
    image_directory: PathBuf,

    /// Show the slides in random order
    #[arg(long)]
    shuffle: bool,

    /// Slide shown first (0-based)
    #[arg(long, value_name = "INDEX")]
    start: Option<String>,

    /// Load every texture at startup instead of when a slide comes near the screen
    #[arg(long)]
    eager: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    let mut image_paths = load_sorted_image_paths(&cli.image_directory)?;
    if cli.shuffle {
        image_paths.shuffle(&mut rand::rng());
    }
    info!("Loaded {} slides from {}", image_paths.len(), cli.image_directory.display());

    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH / 2, RENDER_HEIGHT / 2)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut carousel = SlideController::new(Stage::new(image_paths));
    carousel.init();

    if let Some(raw) = cli.start.as_deref() {
        let index = SlideIndex::parse(raw, carousel.len())?;
        carousel.dispatch(index.into())?;
        // Open directly on the requested slide
        carousel.surface_mut().settle();
    }
    if cli.eager {
        carousel.surface_mut().load_all(&mut rl, &thread);
    }

    let mut framebuffer = rl.load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("Failed to create render texture: {}", e))?;

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // Pointer position in render space
        let sw = rl.get_screen_width() as f32;
        let sh = rl.get_screen_height() as f32;
        let pointer = if rl.is_cursor_on_screen() {
            let mouse = rl.get_mouse_position();
            Some(Vector2::new(
                mouse.x * RENDER_WIDTH as f32 / sw,
                mouse.y * RENDER_HEIGHT as f32 / sh,
            ))
        } else {
            None
        };
        carousel.surface_mut().set_pointer(pointer);

        let mut events = Vec::new();
        while let Some(key) = rl.get_key_pressed() {
            events.push(InputEvent::KeyPressed(key));
        }
        // Held arrows keep advancing
        for key in NAVIGATION_KEYS {
            if rl.is_key_pressed_repeat(key) {
                events.push(InputEvent::KeyPressed(key));
            }
        }
        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(control) = pointer.and_then(|p| carousel.surface().hit_test(p)) {
                events.push(InputEvent::Click(control));
            }
        }
        for event in events {
            if let Some(command) = event.command() {
                carousel.dispatch(command)?;
                debug!(?event, indicator = ?carousel.surface().active_indicator(), "Input handled");
            }
        }

        carousel.surface_mut().update(dt);
        carousel.surface_mut().load_visible(&mut rl, &thread);

        let stage = carousel.surface();
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            stage.draw(&mut d);
        });

        // Render textures are stored upside down
        let mut d = rl.begin_drawing(&thread);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            Rectangle::new(0.0, 0.0, sw, sh),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Window closed on slide {}", carousel.current_index());
    Ok(())
}
