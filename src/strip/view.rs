//! The icon strip control state and its operations.

use super::animation::Tween;
use super::config::IconStripConfig;
use super::layout::StripLayout;
use super::model::{IconDescriptor, IconImage, StripError, TapOutcome, Visibility};
use super::source::{IconDataSource, IconStripDelegate};
use eframe::egui;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// A horizontally scrolling strip of icons with a selection indicator.
///
/// The strip holds non-owning references to its data source and delegate;
/// callers keep them alive. Geometry setters and operations update the
/// target state immediately and animate the displayed state against the
/// clock advanced by [`tick`](Self::tick).
pub struct IconStrip {
    config: IconStripConfig,
    layout: StripLayout,

    data_source: Option<Weak<dyn IconDataSource>>,
    delegate: Option<Weak<RefCell<dyn IconStripDelegate>>>,

    icons: Vec<IconDescriptor>,
    indicator_image: Option<IconImage>,
    selected: Option<usize>,

    visibility: Visibility,
    on_screen_frame: egui::Rect,
    off_screen_frame: egui::Rect,

    frame: Tween<egui::Rect>,
    scroll: Tween<f32>,
    indicator: Tween<egui::Rect>,

    dragging: bool,
    now: f64,
}

impl IconStrip {
    /// Create an empty strip that slides between the two frames.
    pub fn new(
        config: IconStripConfig,
        on_screen_frame: egui::Rect,
        off_screen_frame: egui::Rect,
    ) -> Self {
        let layout = StripLayout::new(&config);
        let visibility = if config.start_hidden {
            Visibility::OffScreen
        } else {
            Visibility::OnScreen
        };
        let initial_frame = match visibility {
            Visibility::OnScreen => on_screen_frame,
            Visibility::OffScreen => off_screen_frame,
        };

        Self {
            config,
            layout,
            data_source: None,
            delegate: None,
            icons: Vec::new(),
            indicator_image: None,
            selected: None,
            visibility,
            on_screen_frame,
            off_screen_frame,
            frame: Tween::settled(initial_frame),
            scroll: Tween::settled(0.0),
            indicator: Tween::settled(layout.indicator_rect(0, initial_frame.height())),
            dragging: false,
            now: 0.0,
        }
    }

    /// Attach the data source. The strip does not keep it alive.
    pub fn set_data_source<S: IconDataSource + 'static>(&mut self, source: &Rc<S>) {
        let source: Rc<dyn IconDataSource> = source.clone();
        self.set_data_source_weak(Rc::downgrade(&source));
    }

    /// Attach an already type-erased data source.
    pub fn set_data_source_weak(&mut self, source: Weak<dyn IconDataSource>) {
        self.data_source = Some(source);
    }

    /// Attach the delegate. The strip does not keep it alive.
    pub fn set_delegate<D: IconStripDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let delegate: Rc<RefCell<dyn IconStripDelegate>> = delegate.clone();
        self.set_delegate_weak(Rc::downgrade(&delegate));
    }

    /// Attach an already type-erased delegate.
    pub fn set_delegate_weak(&mut self, delegate: Weak<RefCell<dyn IconStripDelegate>>) {
        self.delegate = Some(delegate);
    }

    pub fn config(&self) -> &IconStripConfig {
        &self.config
    }

    pub fn layout(&self) -> &StripLayout {
        &self.layout
    }

    fn data_source(&self) -> Result<Rc<dyn IconDataSource>, StripError> {
        self.data_source
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(StripError::DataSourceUnavailable)
    }

    fn delegate(&self) -> Result<Rc<RefCell<dyn IconStripDelegate>>, StripError> {
        self.delegate
            .as_ref()
            .and_then(Weak::upgrade)
            .ok_or(StripError::DelegateUnavailable)
    }

    /// Re-query the data source and lay out every icon from scratch.
    ///
    /// Scroll offset returns to the start. A selection that no longer fits
    /// falls back to the first icon, or to none when the strip is empty.
    pub fn reload_data(&mut self) -> Result<(), StripError> {
        let source = self.data_source()?;
        let strip: &Self = self;

        let count = source.number_of_icons(strip);
        let icons: Vec<IconDescriptor> = (0..count)
            .map(|index| IconDescriptor {
                index,
                image: source.image(strip, index),
                title: source.title(strip, index),
                background: source.background(strip, index),
                scale_factor: sanitize_scale(source.scale_factor(strip, index), index),
            })
            .collect();
        let indicator_image = source.indicator_image(strip);

        tracing::debug!(count, "Reloaded icon strip");

        self.icons = icons;
        self.indicator_image = Some(indicator_image);
        self.scroll.snap(0.0);

        self.selected = match self.selected {
            _ if count == 0 => None,
            Some(index) if index < count => Some(index),
            _ => Some(0),
        };
        if let Some(index) = self.selected {
            let target = self.layout.indicator_rect(index, self.height());
            self.indicator.snap(target);
        }

        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), StripError> {
        if index < self.icons.len() {
            Ok(())
        } else {
            Err(StripError::IndexOutOfRange {
                index,
                count: self.icons.len(),
            })
        }
    }

    /// Scroll so the icon at `index` is centered, as far as the content allows.
    pub fn show_item_at_index(&mut self, index: usize) -> Result<(), StripError> {
        self.check_index(index)?;

        let offset = self
            .layout
            .centered_offset(index, self.count(), self.viewport_width());
        self.scroll
            .retarget(offset, self.now, self.config.move_duration);
        Ok(())
    }

    /// Slide the indicator under the icon at `index` and mark it selected.
    pub fn move_indicator_to_index(&mut self, index: usize) -> Result<(), StripError> {
        self.check_index(index)?;

        let target = self.layout.indicator_rect(index, self.height());
        if self.selected != Some(index) || self.indicator.target() != target {
            self.indicator
                .retarget(target, self.now, self.config.move_duration);
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Move to the on-screen frame.
    pub fn show(&mut self, animated: bool) {
        self.set_visibility(Visibility::OnScreen, animated);
    }

    /// Move to the off-screen frame.
    pub fn hide(&mut self, animated: bool) {
        self.set_visibility(Visibility::OffScreen, animated);
    }

    /// Show when hidden, hide when shown.
    pub fn toggle_hidden(&mut self, animated: bool) {
        self.set_visibility(self.visibility.toggled(), animated);
    }

    /// Whether the strip is (or is moving to) its off-screen frame.
    pub fn is_hidden(&self) -> bool {
        self.visibility == Visibility::OffScreen
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn set_visibility(&mut self, visibility: Visibility, animated: bool) {
        self.visibility = visibility;
        let target = self.frame_for(visibility);
        self.frame
            .set(target, self.now, self.config.slide_duration, animated);
        self.refit(animated, self.config.slide_duration);
        tracing::trace!(?visibility, animated, "Icon strip visibility changed");
    }

    fn frame_for(&self, visibility: Visibility) -> egui::Rect {
        match visibility {
            Visibility::OnScreen => self.on_screen_frame,
            Visibility::OffScreen => self.off_screen_frame,
        }
    }

    pub fn on_screen_frame(&self) -> egui::Rect {
        self.on_screen_frame
    }

    pub fn off_screen_frame(&self) -> egui::Rect {
        self.off_screen_frame
    }

    /// Replace the on-screen frame; snaps there if currently shown.
    pub fn set_on_screen_frame(&mut self, frame: egui::Rect) {
        self.on_screen_frame = frame;
        if self.visibility == Visibility::OnScreen {
            self.frame.snap(frame);
            self.relayout();
        }
    }

    /// Replace the off-screen frame; snaps there if currently hidden.
    pub fn set_off_screen_frame(&mut self, frame: egui::Rect) {
        self.off_screen_frame = frame;
        if self.visibility == Visibility::OffScreen {
            self.frame.snap(frame);
            self.relayout();
        }
    }

    /// Keep scroll and indicator valid after the frame size changed.
    fn relayout(&mut self) {
        self.refit(false, 0.0);
    }

    /// Clamp the scroll offset and re-seat the indicator for the target frame.
    fn refit(&mut self, animated: bool, duration: f32) {
        let clamped = self
            .layout
            .clamp_scroll(self.scroll.target(), self.count(), self.viewport_width());
        if clamped != self.scroll.target() {
            self.scroll.set(clamped, self.now, duration, animated);
        }
        if let Some(index) = self.selected {
            let target = self.layout.indicator_rect(index, self.height());
            if target != self.indicator.target() {
                self.indicator.set(target, self.now, duration, animated);
            }
        }
    }

    /// Resolve a tap at a strip-local point and let the delegate decide.
    pub fn tap_at(&mut self, point: egui::Pos2) -> Result<TapOutcome, StripError> {
        match self.index_at(point) {
            Some(index) => self.tap_item(index),
            None => Ok(TapOutcome::Missed),
        }
    }

    /// Run the selection flow for the icon at `index`.
    ///
    /// The delegate is consulted exactly once. Only an accepted selection
    /// moves the indicator.
    pub fn tap_item(&mut self, index: usize) -> Result<TapOutcome, StripError> {
        self.check_index(index)?;
        let delegate = self.delegate()?;

        let accepted = delegate.borrow_mut().did_select_item(self, index);
        tracing::trace!(index, accepted, "Icon tapped");

        if accepted {
            self.move_indicator_to_index(index)?;
            Ok(TapOutcome::Accepted(index))
        } else {
            Ok(TapOutcome::Rejected(index))
        }
    }

    /// Icon under a strip-local point, as currently displayed.
    pub fn index_at(&self, point: egui::Pos2) -> Option<usize> {
        if point.y < 0.0 || point.y > self.height() {
            return None;
        }
        self.layout
            .index_at(point.x + self.current_scroll_offset(), self.count())
    }

    /// Scroll by `delta` points immediately, clamped to the content.
    ///
    /// Starts from the displayed offset, so a drag interrupts any running
    /// scroll animation. Returns the new offset. The delegate hears about
    /// actual changes only.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        let current = self.current_scroll_offset();
        let offset = self
            .layout
            .clamp_scroll(current + delta, self.count(), self.viewport_width());
        self.scroll.snap(offset);

        if offset != current {
            tracing::trace!(offset, "Icon strip scrolled");
            if let Ok(delegate) = self.delegate() {
                delegate.borrow_mut().did_scroll(self, offset);
            }
        }
        offset
    }

    /// The user started dragging the content.
    pub fn begin_drag(&mut self) {
        if self.dragging {
            return;
        }
        self.dragging = true;
        if let Ok(delegate) = self.delegate() {
            delegate.borrow_mut().will_begin_dragging(self);
        }
    }

    /// The user released the content.
    pub fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        if let Ok(delegate) = self.delegate() {
            delegate.borrow_mut().did_end_dragging(self);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Advance the animation clock (seconds, monotonic).
    pub fn tick(&mut self, now: f64) {
        self.now = self.now.max(now);
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Whether any transition is still playing.
    pub fn is_animating(&self) -> bool {
        self.frame.is_running(self.now)
            || self.scroll.is_running(self.now)
            || self.indicator.is_running(self.now)
    }

    /// Number of icons from the last reload.
    pub fn count(&self) -> usize {
        self.icons.len()
    }

    pub fn icons(&self) -> &[IconDescriptor] {
        &self.icons
    }

    pub fn icon(&self, index: usize) -> Option<&IconDescriptor> {
        self.icons.get(index)
    }

    pub fn indicator_image(&self) -> Option<&IconImage> {
        self.indicator_image.as_ref()
    }

    /// Index under the indicator, if any icon is selected.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Slot of the icon at `index` in content coordinates.
    pub fn icon_frame(&self, index: usize) -> Option<egui::Rect> {
        (index < self.count()).then(|| self.layout.slot_rect(index, self.height()))
    }

    /// Where the indicator rests once its animation finishes, in content
    /// coordinates. `None` while nothing is selected.
    pub fn indicator_frame(&self) -> Option<egui::Rect> {
        self.selected.map(|_| self.indicator.target())
    }

    /// Indicator as currently displayed.
    pub fn current_indicator_frame(&self) -> Option<egui::Rect> {
        self.selected.map(|_| self.indicator.value_at(self.now))
    }

    /// Frame the strip is at, or moving to.
    pub fn frame(&self) -> egui::Rect {
        self.frame.target()
    }

    /// Frame as currently displayed.
    pub fn current_frame(&self) -> egui::Rect {
        self.frame.value_at(self.now)
    }

    /// Content offset the strip is at, or scrolling to.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll.target()
    }

    /// Content offset as currently displayed.
    pub fn current_scroll_offset(&self) -> f32 {
        self.scroll.value_at(self.now)
    }

    pub fn content_width(&self) -> f32 {
        self.layout.content_width(self.count())
    }

    pub fn max_scroll(&self) -> f32 {
        self.layout.max_scroll(self.count(), self.viewport_width())
    }

    fn viewport_width(&self) -> f32 {
        self.frame.target().width()
    }

    fn height(&self) -> f32 {
        self.frame.target().height()
    }
}

fn sanitize_scale(scale: f32, index: usize) -> f32 {
    if scale.is_finite() && scale > 0.0 {
        scale
    } else {
        tracing::warn!(index, scale, "Ignoring invalid icon scale factor");
        1.0
    }
}

impl std::fmt::Debug for IconStrip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IconStrip")
            .field("count", &self.icons.len())
            .field("selected", &self.selected)
            .field("visibility", &self.visibility)
            .field("frame", &self.frame.target())
            .field("scroll_offset", &self.scroll.target())
            .finish_non_exhaustive()
    }
}
