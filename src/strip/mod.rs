//! Icon strip control.
//!
//! This module provides the strip state machine, its collaborator traits,
//! layout geometry and animation primitives. Rendering lives in
//! [`crate::ui`].

pub mod animation;
pub mod config;
pub mod layout;
pub mod model;
pub mod source;
pub mod view;

pub use config::IconStripConfig;
pub use layout::StripLayout;
pub use model::{IconDescriptor, IconImage, StripError, TapOutcome, Visibility};
pub use source::{IconDataSource, IconStripDelegate};
pub use view::IconStrip;
