pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Frames per second

pub const ANIMATION_DURATION: f32 = 0.5;      // Duration of a slide offset transition (seconds)
pub const FIT_RATIO: f32 = 0.9;               // Largest share of the screen an image may cover

pub const DOT_RADIUS: f32 = 9.0;
pub const DOT_SPACING: f32 = 36.0;            // Distance between dot centers
pub const DOT_MARGIN_BOTTOM: f32 = 48.0;      // Distance from the bottom edge to the dot row
pub const BUTTON_RADIUS: f32 = 40.0;
pub const BUTTON_MARGIN: f32 = 80.0;          // Distance from the side edge to a button center

pub const FADED_OPACITY: f32 = 0.5;           // Opacity of controls not under the pointer
pub const LAZY_LOAD_MARGIN: i32 = 100;        // Offset (percent) within which textures get loaded
