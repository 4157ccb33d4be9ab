//! UI module for painting the icon strip.
//!
//! This module provides the egui renderer, its texture cache and the theme.

pub mod renderer;
pub mod theme;

pub use renderer::{StripRenderer, StripResponse, TextureCache};
pub use theme::StripTheme;
