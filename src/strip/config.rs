//! Strip configuration.
//!
//! Sizes are in egui points, durations in seconds.

use eframe::egui;

/// Tunable geometry and timing for an [`IconStrip`](super::IconStrip).
#[derive(Debug, Clone, PartialEq)]
pub struct IconStripConfig {
    /// Unscaled size of each icon image; its width is also the slot width
    pub icon_size: egui::Vec2,

    /// Gap between adjacent slots
    pub spacing: f32,

    /// Inset before the first and after the last slot
    pub padding: f32,

    /// Height reserved under the image for the title
    pub title_height: f32,

    /// Size of the selection indicator
    pub indicator_size: egui::Vec2,

    /// Duration of indicator moves and programmatic scrolls
    pub move_duration: f32,

    /// Duration of show/hide slides
    pub slide_duration: f32,

    /// Start parked at the off-screen frame
    pub start_hidden: bool,
}

impl IconStripConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self {
            icon_size: egui::vec2(64.0, 64.0),
            spacing: 12.0,
            padding: 16.0,
            title_height: 18.0,
            indicator_size: egui::vec2(48.0, 6.0),
            move_duration: 0.25,
            slide_duration: 0.3,
            start_hidden: false,
        }
    }

    pub fn with_icon_size(mut self, icon_size: egui::Vec2) -> Self {
        self.icon_size = icon_size;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    pub fn with_indicator_size(mut self, indicator_size: egui::Vec2) -> Self {
        self.indicator_size = indicator_size;
        self
    }

    /// Set both animation durations; zero disables animation entirely.
    pub fn with_durations(mut self, move_duration: f32, slide_duration: f32) -> Self {
        self.move_duration = move_duration.max(0.0);
        self.slide_duration = slide_duration.max(0.0);
        self
    }

    pub fn with_start_hidden(mut self, start_hidden: bool) -> Self {
        self.start_hidden = start_hidden;
        self
    }
}

impl Default for IconStripConfig {
    fn default() -> Self {
        Self::new()
    }
}
