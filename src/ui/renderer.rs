//! egui rendering of an [`IconStrip`].
//!
//! The renderer owns textures and colors only. All geometry comes from the
//! strip; pointer input is fed back into it as drags, wheel scrolls and taps.

use crate::strip::{IconImage, IconStrip, TapOutcome};
use crate::ui::theme::StripTheme;
use eframe::egui;
use std::collections::{HashMap, HashSet};

fn full_uv() -> egui::Rect {
    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
}

/// GPU textures keyed by image name.
#[derive(Default)]
pub struct TextureCache {
    textures: HashMap<String, egui::TextureHandle>,
}

impl TextureCache {
    /// Texture for `image`, uploading it on first use.
    pub fn texture_id(&mut self, ctx: &egui::Context, image: &IconImage) -> egui::TextureId {
        self.textures
            .entry(image.name().to_string())
            .or_insert_with(|| {
                ctx.load_texture(
                    image.name(),
                    (**image.pixels()).clone(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .id()
    }

    /// Drop every texture the strip no longer references.
    pub fn retain_for(&mut self, strip: &IconStrip) {
        let live: HashSet<&str> = strip
            .icons()
            .iter()
            .flat_map(|icon| [icon.image.name(), icon.background.name()])
            .chain(strip.indicator_image().map(IconImage::name))
            .collect();
        self.textures.retain(|name, _| live.contains(name.as_str()));
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

/// What happened during one rendered frame.
pub struct StripResponse {
    /// Interaction response covering the strip's frame
    pub response: egui::Response,

    /// Outcome of a tap, if one landed this frame
    pub tap: Option<TapOutcome>,
}

/// Paints an icon strip and routes input back into it.
pub struct StripRenderer {
    id: egui::Id,
    theme: StripTheme,
    textures: TextureCache,
    title_font: egui::FontId,
}

impl StripRenderer {
    /// Create a renderer; `id_source` must be unique per strip on screen.
    pub fn new(id_source: impl std::hash::Hash, theme: StripTheme) -> Self {
        Self {
            id: egui::Id::new(id_source),
            theme,
            textures: TextureCache::default(),
            title_font: egui::FontId::proportional(12.0),
        }
    }

    pub fn theme(&self) -> &StripTheme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: StripTheme) {
        self.theme = theme;
    }

    pub fn textures(&self) -> &TextureCache {
        &self.textures
    }

    /// Render the strip at its current (animated) frame.
    pub fn show(&mut self, ctx: &egui::Context, strip: &mut IconStrip) -> StripResponse {
        strip.tick(ctx.input(|i| i.time));
        self.textures.retain_for(strip);

        let frame = strip.current_frame();
        let inner = egui::Area::new(self.id)
            .fixed_pos(frame.min)
            .constrain(false)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(frame.size(), egui::Sense::click_and_drag());
                let tap = self.handle_input(ui, &response, rect, strip);
                self.paint(ui, rect, strip);
                StripResponse { response, tap }
            });

        if strip.is_animating() {
            ctx.request_repaint();
        }

        inner.inner
    }

    fn handle_input(
        &self,
        ui: &egui::Ui,
        response: &egui::Response,
        rect: egui::Rect,
        strip: &mut IconStrip,
    ) -> Option<TapOutcome> {
        if response.drag_started() {
            strip.begin_drag();
        }
        if response.dragged() {
            strip.scroll_by(-response.drag_delta().x);
        }
        if response.drag_stopped() {
            strip.end_drag();
        }

        if response.hovered() {
            let wheel = ui.input(|i| i.smooth_scroll_delta);
            let delta = if wheel.x != 0.0 { wheel.x } else { wheel.y };
            if delta != 0.0 {
                strip.scroll_by(-delta);
            }
        }

        if !response.clicked() {
            return None;
        }
        let pointer = response.interact_pointer_pos()?;
        let local = egui::pos2(pointer.x - rect.min.x, pointer.y - rect.min.y);
        match strip.tap_at(local) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::warn!("Tap could not be delivered: {}", e);
                None
            }
        }
    }

    fn paint(&mut self, ui: &egui::Ui, rect: egui::Rect, strip: &IconStrip) {
        if !ui.is_rect_visible(rect) {
            return;
        }
        let ctx = ui.ctx().clone();
        let painter = ui.painter_at(rect);

        // Strip background and top border
        painter.rect_filled(rect, self.theme.rounding, self.theme.background);
        painter.hline(
            rect.x_range(),
            rect.min.y,
            egui::Stroke::new(1.0, self.theme.border),
        );

        let layout = strip.layout();
        let shift = egui::vec2(rect.min.x - strip.current_scroll_offset(), rect.min.y);
        let selected = strip.selected_index();

        for icon in strip.icons() {
            let slot = layout.slot_rect(icon.index, rect.height()).translate(shift);
            if !slot.intersects(rect) {
                continue;
            }

            let background = self.textures.texture_id(&ctx, &icon.background);
            painter.image(background, slot, full_uv(), self.theme.slot_tint);

            let image = self.textures.texture_id(&ctx, &icon.image);
            let image_rect = layout.image_rect(slot, icon.scale_factor);
            painter.image(image, image_rect, full_uv(), egui::Color32::WHITE);

            painter.text(
                layout.title_rect(slot).center(),
                egui::Align2::CENTER_CENTER,
                &icon.title,
                self.title_font.clone(),
                self.theme.title_color(selected == Some(icon.index)),
            );
        }

        if let (Some(indicator), Some(image)) =
            (strip.current_indicator_frame(), strip.indicator_image())
        {
            let texture = self.textures.texture_id(&ctx, image);
            painter.image(
                texture,
                indicator.translate(shift),
                full_uv(),
                self.theme.indicator,
            );
        }
    }
}
