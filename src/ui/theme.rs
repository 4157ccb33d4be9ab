//! Strip styling and theme colors.
//!
//! Provides the colors the renderer paints with, plus a matching egui style.

use eframe::egui;

/// Icon strip theme colors.
#[derive(Debug, Clone, PartialEq)]
pub struct StripTheme {
    /// Fill behind the whole strip
    pub background: egui::Color32,

    /// Tint applied to slot background images
    pub slot_tint: egui::Color32,

    /// Tint applied to the indicator image
    pub indicator: egui::Color32,

    /// Title color for unselected icons
    pub title: egui::Color32,

    /// Title color for the selected icon
    pub title_selected: egui::Color32,

    /// Top border line
    pub border: egui::Color32,

    /// Corner rounding of the strip and slots
    pub rounding: f32,
}

impl StripTheme {
    /// Create a dark theme.
    pub fn dark() -> Self {
        Self {
            background: egui::Color32::from_rgb(32, 32, 32),
            slot_tint: egui::Color32::from_rgb(255, 255, 255),
            indicator: egui::Color32::from_rgb(0, 120, 212),
            title: egui::Color32::from_rgb(180, 180, 180),
            title_selected: egui::Color32::from_rgb(255, 255, 255),
            border: egui::Color32::from_rgb(60, 60, 60),
            rounding: 6.0,
        }
    }

    /// Create a light theme.
    pub fn light() -> Self {
        Self {
            background: egui::Color32::from_rgb(243, 243, 243),
            slot_tint: egui::Color32::from_rgb(255, 255, 255),
            indicator: egui::Color32::from_rgb(0, 120, 212),
            title: egui::Color32::from_rgb(96, 96, 96),
            title_selected: egui::Color32::from_rgb(0, 0, 0),
            border: egui::Color32::from_rgb(220, 220, 220),
            rounding: 6.0,
        }
    }

    /// Title color for an icon.
    pub fn title_color(&self, selected: bool) -> egui::Color32 {
        if selected {
            self.title_selected
        } else {
            self.title
        }
    }

    /// Apply matching panel colors to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        style.visuals.panel_fill = self.background;
        style.visuals.window_fill = self.background;
        style.visuals.selection.bg_fill = self.indicator;
        style.visuals.widgets.noninteractive.fg_stroke.color = self.title_selected;
        style.visuals.window_rounding = egui::Rounding::same(self.rounding);

        ctx.set_style(style);
    }
}

impl Default for StripTheme {
    fn default() -> Self {
        Self::dark()
    }
}
