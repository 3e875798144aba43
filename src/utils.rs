//! Utility functions

use crate::constants::APP_NAME;
use std::path::PathBuf;

// Shield with check mark, square viewBox for window/taskbar icons and the header logo
pub const SHIELD_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><path fill="#2dd4bf" d="M32 3 8 12v18c0 15.5 10.2 27.6 24 31 13.8-3.4 24-15.5 24-31V12L32 3z"/><path fill="#09090b" d="M32 9.4 14 16.2V30c0 12 7.6 21.8 18 24.9C42.4 51.8 50 42 50 30V16.2L32 9.4z"/><path fill="none" stroke="#2dd4bf" stroke-width="5" stroke-linecap="round" stroke-linejoin="round" d="m22 32 7 7 13-14"/></svg>"##;

/// Rasterize the shield to a square straight-alpha RGBA image.
pub fn rasterize_shield(size: u32) -> Option<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(SHIELD_SVG, &resvg::usvg::Options::default()).ok()?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory (logs only; nothing else is written)
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}
