// --- WINDOW ICON ---
// Drawn at startup instead of shipping an asset: three list rows with
// the middle one highlighted, echoing the nav panel.

use eframe::egui;
use image::{ImageBuffer, Rgba};

pub fn window_icon(dark: bool) -> egui::IconData {
    let width = 32;
    let height = 32;
    let mut img = ImageBuffer::new(width, height);

    let background = if dark {
        Rgba([30, 30, 34, 255])
    } else {
        Rgba([235, 235, 240, 255])
    };
    let row = if dark {
        Rgba([140, 140, 150, 255])
    } else {
        Rgba([110, 110, 120, 255])
    };
    let highlight = Rgba([250, 210, 50, 255]);

    for (_x, _y, pixel) in img.enumerate_pixels_mut() {
        *pixel = background;
    }

    // Three rows; the middle one carries the active-section tint.
    for (top, color) in [(7u32, row), (14, highlight), (21, row)] {
        for x in 6..26u32 {
            for y in top..top + 4 {
                img.put_pixel(x, y, color);
            }
        }
    }

    egui::IconData {
        rgba: img.into_raw(),
        width,
        height,
    }
}
