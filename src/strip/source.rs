//! Collaborator traits for populating the strip and observing it.
//!
//! The strip never owns its collaborators. Callers keep them alive (usually
//! in an `Rc`) and hand the strip a `Weak` reference; once the owner drops
//! them the strip reports them as unavailable.

use super::model::IconImage;
use super::view::IconStrip;

/// Supplies the icons shown by a strip.
///
/// Queried in full on every [`IconStrip::reload_data`]; nothing is cached
/// between reloads.
pub trait IconDataSource {
    /// Number of icons to lay out.
    fn number_of_icons(&self, strip: &IconStrip) -> usize;

    /// Foreground image for the icon at `index`.
    fn image(&self, strip: &IconStrip, index: usize) -> IconImage;

    /// Caption for the icon at `index`.
    fn title(&self, strip: &IconStrip, index: usize) -> String;

    /// Background image for the icon at `index`.
    fn background(&self, strip: &IconStrip, index: usize) -> IconImage;

    /// Image used for the selection indicator.
    fn indicator_image(&self, strip: &IconStrip) -> IconImage;

    /// Size multiplier for the image at `index`.
    fn scale_factor(&self, strip: &IconStrip, index: usize) -> f32 {
        let _ = (strip, index);
        1.0
    }
}

/// Receives selection and scroll notifications from a strip.
pub trait IconStripDelegate {
    /// A tap resolved to the icon at `index`.
    ///
    /// Return `false` to veto the selection; the strip then leaves its
    /// indicator where it was.
    fn did_select_item(&mut self, strip: &IconStrip, index: usize) -> bool;

    /// The content offset changed through user scrolling.
    fn did_scroll(&mut self, strip: &IconStrip, offset: f32) {
        let _ = (strip, offset);
    }

    /// The user started dragging the content.
    fn will_begin_dragging(&mut self, strip: &IconStrip) {
        let _ = strip;
    }

    /// The user released the content after dragging.
    fn did_end_dragging(&mut self, strip: &IconStrip) {
        let _ = strip;
    }
}
