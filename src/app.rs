//! Demo application state and lifecycle.
//!
//! Owns a sample data source and delegate and wires them into a strip
//! docked at the bottom of the window.

use crate::icons;
use crate::strip::{
    IconDataSource, IconImage, IconStrip, IconStripConfig, IconStripDelegate, StripError,
    TapOutcome,
};
use crate::ui::{StripRenderer, StripTheme};
use eframe::egui;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

/// Height of the docked strip.
pub const STRIP_HEIGHT: f32 = 104.0;

/// Icon counts cycled through by [`StripCommand::Reload`].
const RELOAD_COUNTS: [usize; 3] = [12, 5, 0];

const TITLES: [&str; 12] = [
    "Mail", "Photos", "Music", "Maps", "Notes", "Clock", "Camera", "Files", "Store", "News",
    "Books", "Settings",
];

/// Sample data source with a mutable icon count.
pub struct DemoCatalog {
    count: Cell<usize>,
}

impl DemoCatalog {
    pub fn new(count: usize) -> Self {
        Self {
            count: Cell::new(count.min(TITLES.len())),
        }
    }

    pub fn set_count(&self, count: usize) {
        self.count.set(count.min(TITLES.len()));
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl IconDataSource for DemoCatalog {
    fn number_of_icons(&self, _strip: &IconStrip) -> usize {
        self.count.get()
    }

    fn image(&self, _strip: &IconStrip, index: usize) -> IconImage {
        icons::placeholder_icon(index)
    }

    fn title(&self, _strip: &IconStrip, index: usize) -> String {
        TITLES[index % TITLES.len()].to_string()
    }

    fn background(&self, _strip: &IconStrip, index: usize) -> IconImage {
        if index % 2 == 0 {
            icons::solid_background("slot-even", egui::Color32::from_rgb(45, 45, 45))
        } else {
            icons::solid_background("slot-odd", egui::Color32::from_rgb(52, 52, 52))
        }
    }

    fn indicator_image(&self, _strip: &IconStrip) -> IconImage {
        icons::indicator_bar()
    }

    fn scale_factor(&self, _strip: &IconStrip, index: usize) -> f32 {
        // Every fourth icon is drawn a little smaller
        if index % 4 == 3 {
            0.8
        } else {
            1.0
        }
    }
}

/// Sample delegate that vetoes locked icons and records what happened.
#[derive(Debug, Default)]
pub struct SelectionLog {
    /// Icons the delegate refuses to select
    pub locked: HashSet<usize>,

    /// Last accepted selection
    pub last_selected: Option<usize>,

    /// Last vetoed selection
    pub last_rejected: Option<usize>,

    /// Last scroll offset reported by the strip
    pub scroll_offset: f32,

    /// Whether the user is dragging the strip
    pub dragging: bool,
}

impl IconStripDelegate for SelectionLog {
    fn did_select_item(&mut self, _strip: &IconStrip, index: usize) -> bool {
        if self.locked.contains(&index) {
            self.last_rejected = Some(index);
            false
        } else {
            self.last_selected = Some(index);
            true
        }
    }

    fn did_scroll(&mut self, _strip: &IconStrip, offset: f32) {
        self.scroll_offset = offset;
    }

    fn will_begin_dragging(&mut self, _strip: &IconStrip) {
        self.dragging = true;
    }

    fn did_end_dragging(&mut self, _strip: &IconStrip) {
        self.dragging = false;
    }
}

/// Commands the demo maps keys onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripCommand {
    /// Slide the strip in or out
    ToggleHidden,
    /// Select the icon right of the current one
    SelectNext,
    /// Select the icon left of the current one
    SelectPrevious,
    /// Reload with the next sample icon count
    Reload,
}

impl StripCommand {
    /// Commands for keys pressed this frame.
    fn from_input(input: &egui::InputState) -> Vec<Self> {
        [
            (egui::Key::H, StripCommand::ToggleHidden),
            (egui::Key::ArrowRight, StripCommand::SelectNext),
            (egui::Key::ArrowLeft, StripCommand::SelectPrevious),
            (egui::Key::R, StripCommand::Reload),
        ]
        .into_iter()
        .filter(|(key, _)| input.key_pressed(*key))
        .map(|(_, command)| command)
        .collect()
    }
}

/// On-screen and off-screen frames for a strip docked to the bottom of `screen`.
pub fn docked_frames(screen: egui::Rect) -> (egui::Rect, egui::Rect) {
    let on_screen = egui::Rect::from_min_max(
        egui::pos2(screen.min.x, screen.max.y - STRIP_HEIGHT),
        screen.max,
    );
    let off_screen = on_screen.translate(egui::vec2(0.0, STRIP_HEIGHT));
    (on_screen, off_screen)
}

/// Demo application.
pub struct DemoApp {
    /// The control under demonstration
    pub strip: IconStrip,

    /// Data source; the strip only holds a weak reference
    pub catalog: Rc<DemoCatalog>,

    /// Delegate; the strip only holds a weak reference
    pub selections: Rc<RefCell<SelectionLog>>,

    renderer: StripRenderer,
    reloads: usize,

    /// Error state for UI display
    pub error_message: Option<String>,
}

impl DemoApp {
    /// Create the demo for a window covering `screen`.
    pub fn new(screen: egui::Rect) -> Result<Self, StripError> {
        let catalog = Rc::new(DemoCatalog::new(RELOAD_COUNTS[0]));
        let selections = Rc::new(RefCell::new(SelectionLog {
            locked: HashSet::from([5]),
            ..Default::default()
        }));

        let (on_screen, off_screen) = docked_frames(screen);
        let mut strip = IconStrip::new(IconStripConfig::default(), on_screen, off_screen);
        strip.set_data_source(&catalog);
        strip.set_delegate(&selections);
        strip.reload_data()?;

        Ok(Self {
            strip,
            catalog,
            selections,
            renderer: StripRenderer::new("demo_icon_strip", StripTheme::dark()),
            reloads: 0,
            error_message: None,
        })
    }

    /// Apply one command to the strip.
    pub fn handle_command(&mut self, command: StripCommand) -> Result<(), StripError> {
        match command {
            StripCommand::ToggleHidden => {
                self.strip.toggle_hidden(true);
            }
            StripCommand::SelectNext => {
                if let Some(index) = self.neighbour(1) {
                    self.select(index)?;
                }
            }
            StripCommand::SelectPrevious => {
                if let Some(index) = self.neighbour(-1) {
                    self.select(index)?;
                }
            }
            StripCommand::Reload => {
                self.reloads += 1;
                self.catalog
                    .set_count(RELOAD_COUNTS[self.reloads % RELOAD_COUNTS.len()]);
                self.strip.reload_data()?;
                tracing::info!(count = self.strip.count(), "Reloaded demo catalog");
            }
        }
        Ok(())
    }

    /// Index `step` icons away from the selection, clamped to the strip.
    fn neighbour(&self, step: isize) -> Option<usize> {
        let count = self.strip.count();
        if count == 0 {
            return None;
        }
        let current = self.strip.selected_index().unwrap_or(0) as isize;
        Some((current + step).clamp(0, count as isize - 1) as usize)
    }

    /// Select through the delegate, then bring the icon into view.
    fn select(&mut self, index: usize) -> Result<TapOutcome, StripError> {
        let outcome = self.strip.tap_item(index)?;
        if let TapOutcome::Accepted(index) = outcome {
            self.strip.show_item_at_index(index)?;
        }
        Ok(outcome)
    }

    /// Keep the frames docked to the window as it resizes.
    fn sync_frames(&mut self, screen: egui::Rect) {
        let (on_screen, off_screen) = docked_frames(screen);
        if self.strip.on_screen_frame() != on_screen {
            self.strip.set_on_screen_frame(on_screen);
        }
        if self.strip.off_screen_frame() != off_screen {
            self.strip.set_off_screen_frame(off_screen);
        }
    }

    fn status_line(&self) -> String {
        let selections = self.selections.borrow();
        let selected = match self.strip.selected_index() {
            Some(index) => TITLES[index % TITLES.len()].to_string(),
            None => "nothing".to_string(),
        };
        let mut line = format!(
            "{} icons, {} selected, offset {:.0}",
            self.strip.count(),
            selected,
            selections.scroll_offset
        );
        if let Some(index) = selections.last_rejected {
            line.push_str(&format!(", {} is locked", TITLES[index % TITLES.len()]));
        }
        line
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_frames(ctx.screen_rect());

        for command in ctx.input(StripCommand::from_input) {
            if let Err(e) = self.handle_command(command) {
                tracing::warn!("Command {:?} failed: {}", command, e);
                self.error_message = Some(e.to_string());
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Icon Strip");
            ui.label("H: show/hide   \u{2190}/\u{2192}: select   R: reload");
            ui.separator();
            ui.label(self.status_line());

            if let Some(ref error) = self.error_message {
                ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
            }
        });

        if let Some(outcome) = self.renderer.show(ctx, &mut self.strip).tap {
            tracing::debug!(?outcome, "Strip tapped");
            if let TapOutcome::Accepted(_) = outcome {
                self.error_message = None;
            }
        }
    }
}
