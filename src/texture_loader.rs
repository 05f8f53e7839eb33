use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use raylib::prelude::*;
use exif::{Reader, Tag, Value, In};
use tracing::{debug, warn};

const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Quarter turns needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    Half,
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    // Mirrored orientations (2, 4, 5, 7) are shown as stored.
    pub fn from_exif_orientation(orientation: u16) -> Self {
        match orientation {
            3 => Rotation::Half,
            6 => Rotation::Clockwise,
            8 => Rotation::CounterClockwise,
            _ => Rotation::None,
        }
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn load_sorted_image_paths(dir_path: &Path) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let entries = fs::read_dir(dir_path)
        .with_context(|| format!("Failed to read directory {}", dir_path.display()))?;

    for entry in entries {
        let path = entry.context("Failed to read directory entry")?.path();
        if path.is_file() && is_supported_image(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    if paths.is_empty() {
        bail!("No image files found in directory: {}", dir_path.display());
    }
    Ok(paths)
}

fn exif_orientation(image_path: &Path, file_bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(file_bytes)) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| match &field.value {
                Value::Short(values) => values.first().copied(),
                _ => None,
            })
            .unwrap_or(1),
        Err(e) => {
            // Non fatal, the image is shown as stored.
            warn!("Could not read EXIF data for {}: {}", image_path.display(), e);
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .with_context(|| format!("Failed to read file {}", image_path.display()))?;

    let extension = image_path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase();

    // EXIF is only read reliably from JPEG
    let rotation = if extension == "jpg" || extension == "jpeg" {
        Rotation::from_exif_orientation(exif_orientation(image_path, &file_bytes))
    } else {
        Rotation::None
    };

    let mut image = Image::load_image_from_mem(&(".".to_string() + &extension), &file_bytes)
        .map_err(|e| anyhow::anyhow!("Failed to load image data for {}: {}", image_path.display(), e))?;

    match rotation {
        Rotation::Half => {
            image.rotate_cw();
            image.rotate_cw();
        }
        Rotation::Clockwise => image.rotate_cw(),
        Rotation::CounterClockwise => image.rotate_ccw(),
        Rotation::None => {}
    }
    if rotation != Rotation::None {
        debug!(?rotation, path = %image_path.display(), "Applied EXIF rotation");
    }

    let texture = rl.load_texture_from_image(thread, &image)
        .map_err(|e| anyhow::anyhow!("Failed to create texture for {}: {}", image_path.display(), e))?;

    // Free the CPU copy
    drop(image);

    Ok(texture)
}
