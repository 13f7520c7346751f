//! Image helpers for the window.

use slint::SharedPixelBuffer;
use std::path::Path;

/// Create a gray checkerboard standing in for images that cannot be shown
pub fn placeholder_image(width: u32, height: u32) -> slint::Image {
    let mut buffer = SharedPixelBuffer::new(width, height);
    let data = buffer.make_mut_bytes();
    for y in 0..height {
        for x in 0..width {
            let v = if (x / 40 + y / 40) % 2 == 0 { 204 } else { 221 };
            let i = ((y * width + x) * 3) as usize;
            data[i] = v;
            data[i + 1] = v;
            data[i + 2] = v;
        }
    }
    slint::Image::from_rgb8(buffer)
}

fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Resolve an image source to something displayable.
///
/// Remote sources are not fetched; they and unreadable files fall back to the
/// placeholder. The second element describes what happened for the status line.
pub fn load_image_source(source: &str) -> (slint::Image, String) {
    if is_remote(source) {
        log::info!("Remote image {source} is not fetched; showing placeholder");
        return (placeholder_image(800, 600), format!("Placeholder for {source}"));
    }

    match slint::Image::load_from_path(Path::new(source)) {
        Ok(image) => {
            log::info!("Loaded image {source}");
            (image, format!("Loaded {source}"))
        }
        Err(_) => {
            log::warn!("Image not found: {source}");
            (placeholder_image(800, 600), format!("Image not found: {source}"))
        }
    }
}
