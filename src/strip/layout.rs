//! Index-based strip geometry.
//!
//! All rectangles are in content coordinates: x runs along the scrollable
//! content starting at 0, y runs from the top of the strip. Subtract the
//! scroll offset from x to get strip-local coordinates.

use super::config::IconStripConfig;
use eframe::egui;

/// Slot layout derived from an [`IconStripConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripLayout {
    slot_width: f32,
    spacing: f32,
    padding: f32,
    icon_size: egui::Vec2,
    title_height: f32,
    indicator_size: egui::Vec2,
}

impl StripLayout {
    pub fn new(config: &IconStripConfig) -> Self {
        Self {
            slot_width: config.icon_size.x.max(1.0),
            spacing: config.spacing,
            padding: config.padding,
            icon_size: config.icon_size,
            title_height: config.title_height,
            indicator_size: config.indicator_size,
        }
    }

    /// Distance between the left edges of adjacent slots.
    fn stride(&self) -> f32 {
        self.slot_width + self.spacing
    }

    /// Width of the scrollable content for `count` icons.
    pub fn content_width(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        2.0 * self.padding + count as f32 * self.slot_width + (count - 1) as f32 * self.spacing
    }

    /// Largest valid scroll offset.
    pub fn max_scroll(&self, count: usize, viewport_width: f32) -> f32 {
        (self.content_width(count) - viewport_width).max(0.0)
    }

    /// Clamp an offset into `[0, max_scroll]`.
    pub fn clamp_scroll(&self, offset: f32, count: usize, viewport_width: f32) -> f32 {
        offset.clamp(0.0, self.max_scroll(count, viewport_width))
    }

    /// Slot occupied by the icon at `index`, spanning the strip's height.
    pub fn slot_rect(&self, index: usize, height: f32) -> egui::Rect {
        let left = self.padding + index as f32 * self.stride();
        egui::Rect::from_min_size(egui::pos2(left, 0.0), egui::vec2(self.slot_width, height))
    }

    /// Image area inside a slot, centered above the title and scaled.
    pub fn image_rect(&self, slot: egui::Rect, scale_factor: f32) -> egui::Rect {
        let area = egui::Rect::from_min_max(
            slot.min,
            egui::pos2(slot.max.x, (slot.max.y - self.title_height).max(slot.min.y)),
        );
        egui::Rect::from_center_size(area.center(), self.icon_size * scale_factor)
    }

    /// Title band at the bottom of a slot.
    pub fn title_rect(&self, slot: egui::Rect) -> egui::Rect {
        egui::Rect::from_min_max(
            egui::pos2(slot.min.x, (slot.max.y - self.title_height).max(slot.min.y)),
            slot.max,
        )
    }

    /// Indicator rectangle for the icon at `index`: centered under its slot
    /// and resting on the bottom edge of the strip.
    pub fn indicator_rect(&self, index: usize, height: f32) -> egui::Rect {
        let slot = self.slot_rect(index, height);
        let size = self.indicator_size;
        egui::Rect::from_min_size(
            egui::pos2(slot.center().x - size.x / 2.0, height - size.y),
            size,
        )
    }

    /// Offset that centers the icon at `index` in the viewport, clamped.
    pub fn centered_offset(&self, index: usize, count: usize, viewport_width: f32) -> f32 {
        let center = self.slot_rect(index, 0.0).center().x;
        self.clamp_scroll(center - viewport_width / 2.0, count, viewport_width)
    }

    /// Icon under content x coordinate `x`, if any. Gaps and padding miss.
    pub fn index_at(&self, x: f32, count: usize) -> Option<usize> {
        let local = x - self.padding;
        if count == 0 || local < 0.0 {
            return None;
        }
        let index = (local / self.stride()).floor() as usize;
        let within = local - index as f32 * self.stride();
        (index < count && within < self.slot_width).then_some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> StripLayout {
        StripLayout::new(
            &IconStripConfig::new()
                .with_icon_size(egui::vec2(50.0, 50.0))
                .with_spacing(10.0)
                .with_padding(5.0)
                .with_indicator_size(egui::vec2(20.0, 4.0)),
        )
    }

    #[test]
    fn test_content_width() {
        let layout = layout();
        assert_eq!(layout.content_width(0), 0.0);
        assert_eq!(layout.content_width(1), 60.0);
        assert_eq!(layout.content_width(3), 5.0 + 50.0 * 3.0 + 10.0 * 2.0 + 5.0);
    }

    #[test]
    fn test_empty_strip_does_not_scroll() {
        let layout = layout();
        assert_eq!(layout.max_scroll(0, 200.0), 0.0);
        assert_eq!(layout.clamp_scroll(40.0, 0, 200.0), 0.0);
    }

    #[test]
    fn test_slots_are_left_to_right() {
        let layout = layout();
        let first = layout.slot_rect(0, 80.0);
        let second = layout.slot_rect(1, 80.0);
        assert_eq!(first.min.x, 5.0);
        assert_eq!(second.min.x, first.max.x + 10.0);
        assert_eq!(second.height(), 80.0);
    }

    #[test]
    fn test_indicator_centered_under_slot() {
        let layout = layout();
        for index in 0..4 {
            let slot = layout.slot_rect(index, 80.0);
            let indicator = layout.indicator_rect(index, 80.0);
            assert_eq!(indicator.center().x, slot.center().x);
            assert_eq!(indicator.max.y, 80.0);
        }
    }

    #[test]
    fn test_centered_offset_clamps_at_edges() {
        let layout = layout();
        // 10 icons -> content width 600
        assert_eq!(layout.centered_offset(0, 10, 200.0), 0.0);
        assert_eq!(layout.centered_offset(9, 10, 200.0), 400.0);

        let middle = layout.centered_offset(5, 10, 200.0);
        let slot = layout.slot_rect(5, 0.0);
        assert_eq!(slot.center().x - middle, 100.0);
    }

    #[test]
    fn test_index_at() {
        let layout = layout();
        assert_eq!(layout.index_at(2.0, 3), None); // padding
        assert_eq!(layout.index_at(5.0, 3), Some(0));
        assert_eq!(layout.index_at(57.0, 3), None); // gap
        assert_eq!(layout.index_at(70.0, 3), Some(1));
        assert_eq!(layout.index_at(190.0, 3), None); // past last
        assert_eq!(layout.index_at(30.0, 0), None);
    }

    #[test]
    fn test_image_rect_scales_around_center() {
        let layout = layout();
        let slot = layout.slot_rect(0, 86.0);
        let normal = layout.image_rect(slot, 1.0);
        let half = layout.image_rect(slot, 0.5);
        assert_eq!(normal.size(), egui::vec2(50.0, 50.0));
        assert_eq!(half.size(), egui::vec2(25.0, 25.0));
        assert_eq!(normal.center(), half.center());
        assert!(normal.max.y <= layout.title_rect(slot).min.y);
    }
}
