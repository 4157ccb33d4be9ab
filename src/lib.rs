//! Icon Strip - Library
//!
//! A horizontally scrolling strip of icons with an animated selection
//! indicator, rendered with egui.
//!
//! ## Features
//!
//! - Data-source trait for icon count, images, titles, backgrounds and
//!   per-icon scale factors
//! - Delegate trait for veto-able selection and scroll/drag notifications
//! - Animated indicator, programmatic scroll-to-item and drag scrolling
//! - Show/hide by sliding between an on-screen and an off-screen frame
//! - Non-owning collaborator references

pub mod app;
pub mod icons;
pub mod strip;
pub mod ui;

pub use app::{DemoApp, StripCommand};
pub use strip::{
    IconDataSource, IconDescriptor, IconImage, IconStrip, IconStripConfig, IconStripDelegate,
    StripError, TapOutcome, Visibility,
};
pub use ui::{StripRenderer, StripTheme};
