//! Synthetic rasters for tests
//!
//! Tests build their inputs in memory instead of loading image files.

use resemble_core::{Pix, color};

/// Build an image by evaluating `f(x, y) -> (r, g, b, a)` for every pixel.
///
/// # Panics
///
/// Panics if either dimension is 0.
pub fn image_from_fn<F>(width: u32, height: u32, mut f: F) -> Pix
where
    F: FnMut(u32, u32) -> (u8, u8, u8, u8),
{
    let mut pm = Pix::new(width, height)
        .expect("fixture dimensions must be non-zero")
        .to_mut();
    for y in 0..height {
        for x in 0..width {
            let (r, g, b, a) = f(x, y);
            pm.set_pixel_unchecked(x, y, color::compose_rgba(r, g, b, a));
        }
    }
    pm.into()
}

/// A single-color image.
pub fn uniform_image(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> Pix {
    image_from_fn(width, height, |_, _| (r, g, b, a))
}

/// A checkerboard of `cell`-sized squares alternating between two colors.
pub fn checkerboard(
    width: u32,
    height: u32,
    cell: u32,
    even: (u8, u8, u8, u8),
    odd: (u8, u8, u8, u8),
) -> Pix {
    let cell = cell.max(1);
    image_from_fn(width, height, |x, y| {
        if (x / cell + y / cell) % 2 == 0 {
            even
        } else {
            odd
        }
    })
}

/// A copy of `pix` with the rectangle `[x0, x0 + w) x [y0, y0 + h)` painted.
///
/// Parts of the rectangle outside the image are ignored.
pub fn with_rect(pix: &Pix, x0: u32, y0: u32, w: u32, h: u32, rgba: (u8, u8, u8, u8)) -> Pix {
    let mut pm = pix.to_mut();
    let value = color::compose_rgba(rgba.0, rgba.1, rgba.2, rgba.3);
    for y in y0..y0.saturating_add(h).min(pix.height()) {
        for x in x0..x0.saturating_add(w).min(pix.width()) {
            pm.set_pixel_unchecked(x, y, value);
        }
    }
    pm.into()
}
