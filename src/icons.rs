//! Procedural placeholder images.
//!
//! Used by the demo and by tests when no real artwork is around.

use crate::strip::IconImage;
use eframe::egui;

/// Placeholder icon size in pixels.
pub const ICON_SIZE: usize = 48;

/// Palette cycled through by [`placeholder_icon`].
const PALETTE: [(u8, u8, u8); 6] = [
    (0, 120, 212),
    (16, 185, 129),
    (245, 158, 11),
    (239, 68, 68),
    (139, 92, 246),
    (236, 72, 153),
];

/// A filled circle with a white ring marker, colored by `index`.
pub fn placeholder_icon(index: usize) -> IconImage {
    let (r, g, b) = PALETTE[index % PALETTE.len()];
    let size = ICON_SIZE;
    let mut image = egui::ColorImage::new([size, size], egui::Color32::TRANSPARENT);

    let center = size as f32 / 2.0;
    let radius = size as f32 / 2.0 - 3.0;
    let ring = radius * 0.45;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            let pixel = if (dist - ring).abs() < 1.5 {
                egui::Color32::WHITE
            } else if dist < radius {
                egui::Color32::from_rgb(r, g, b)
            } else if dist < radius + 1.0 {
                // Anti-aliased edge
                let alpha = ((radius + 1.0 - dist) * 255.0) as u8;
                egui::Color32::from_rgba_unmultiplied(r, g, b, alpha)
            } else {
                continue;
            };
            image[(x, y)] = pixel;
        }
    }

    IconImage::from_color_image(format!("placeholder-{}", index % PALETTE.len()), image)
}

/// A single-color tile, stretched over a slot at paint time.
pub fn solid_background(name: &str, color: egui::Color32) -> IconImage {
    IconImage::from_color_image(name, egui::ColorImage::new([4, 4], color))
}

/// A rounded white bar for the selection indicator.
pub fn indicator_bar() -> IconImage {
    let (width, height) = (24, 4);
    let mut image = egui::ColorImage::new([width, height], egui::Color32::WHITE);

    // Knock out the corners
    for (x, y) in [(0, 0), (width - 1, 0), (0, height - 1), (width - 1, height - 1)] {
        image[(x, y)] = egui::Color32::TRANSPARENT;
    }

    IconImage::from_color_image("indicator-bar", image)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_icon_is_square_and_opaque_in_center() {
        let icon = placeholder_icon(0);
        assert_eq!(icon.size(), [ICON_SIZE, ICON_SIZE]);

        let center = icon.pixels()[(ICON_SIZE / 2, ICON_SIZE / 2)];
        assert_eq!(center, egui::Color32::from_rgb(0, 120, 212));
        assert_eq!(icon.pixels()[(0, 0)], egui::Color32::TRANSPARENT);
    }

    #[test]
    fn test_placeholder_names_repeat_with_palette() {
        assert_eq!(placeholder_icon(1).name(), placeholder_icon(7).name());
        assert_ne!(placeholder_icon(1).name(), placeholder_icon(2).name());
        assert_eq!(placeholder_icon(1), placeholder_icon(7));
    }

    #[test]
    fn test_indicator_bar_corners() {
        let bar = indicator_bar();
        assert_eq!(bar.pixels()[(0, 0)], egui::Color32::TRANSPARENT);
        assert_eq!(bar.pixels()[(5, 2)], egui::Color32::WHITE);
    }
}
