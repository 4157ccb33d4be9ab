//! Icon strip data models.
//!
//! Defines the images, per-index descriptors, visibility state, tap
//! outcomes and error types shared by the strip and its collaborators.

use eframe::egui;
use std::sync::Arc;
use thiserror::Error;

/// An RGBA image handed to the strip by its data source.
///
/// The name doubles as the texture cache key, so two images with the same
/// name are expected to carry the same pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    name: String,
    pixels: Arc<egui::ColorImage>,
}

impl IconImage {
    /// Create an image from unmultiplied RGBA bytes.
    pub fn from_rgba(
        name: impl Into<String>,
        width: usize,
        height: usize,
        rgba: &[u8],
    ) -> Result<Self, StripError> {
        let name = name.into();
        if width == 0 || height == 0 {
            return Err(StripError::InvalidImage {
                name,
                reason: "image has zero area".to_string(),
            });
        }
        if rgba.len() != width * height * 4 {
            return Err(StripError::InvalidImage {
                reason: format!(
                    "expected {} bytes for {}x{} RGBA, got {}",
                    width * height * 4,
                    width,
                    height,
                    rgba.len()
                ),
                name,
            });
        }

        let pixels = egui::ColorImage::from_rgba_unmultiplied([width, height], rgba);
        Ok(Self {
            name,
            pixels: Arc::new(pixels),
        })
    }

    /// Wrap an already decoded image.
    pub fn from_color_image(name: impl Into<String>, pixels: egui::ColorImage) -> Self {
        Self {
            name: name.into(),
            pixels: Arc::new(pixels),
        }
    }

    /// Decode a PNG-encoded image.
    pub fn from_png_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, StripError> {
        let decoded = image::load_from_memory_with_format(bytes, image::ImageFormat::Png)?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba(name, width as usize, height as usize, rgba.as_raw())
    }

    /// Texture cache key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pixel size as (width, height).
    pub fn size(&self) -> [usize; 2] {
        self.pixels.size
    }

    /// Shared pixel data, ready for texture upload.
    pub fn pixels(&self) -> &Arc<egui::ColorImage> {
        &self.pixels
    }
}

/// Everything the strip learned about one icon during the last reload.
#[derive(Debug, Clone, PartialEq)]
pub struct IconDescriptor {
    /// Position in the strip (0-based, contiguous)
    pub index: usize,

    /// Foreground icon image
    pub image: IconImage,

    /// Caption drawn below the image
    pub title: String,

    /// Image filling the icon's slot behind the foreground
    pub background: IconImage,

    /// Multiplier applied to the configured icon size (1.0 when unsupplied)
    pub scale_factor: f32,
}

/// Whether the strip sits at its on-screen or off-screen frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Strip is at its on-screen frame
    #[default]
    OnScreen,

    /// Strip is parked at its off-screen frame
    OffScreen,
}

impl Visibility {
    /// The opposite state.
    pub fn toggled(self) -> Self {
        match self {
            Visibility::OnScreen => Visibility::OffScreen,
            Visibility::OffScreen => Visibility::OnScreen,
        }
    }
}

/// Result of resolving a tap against the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// The tap did not land on any icon; the delegate was not consulted
    Missed,

    /// The delegate declined the selection; nothing changed
    Rejected(usize),

    /// The delegate accepted the selection and the indicator moved
    Accepted(usize),
}

impl TapOutcome {
    /// Index the tap resolved to, accepted or not.
    pub fn index(&self) -> Option<usize> {
        match self {
            TapOutcome::Missed => None,
            TapOutcome::Rejected(index) | TapOutcome::Accepted(index) => Some(*index),
        }
    }
}

/// Icon strip error types.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("Index {index} out of range for strip with {count} icons")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("No data source attached, or it has been dropped")]
    DataSourceUnavailable,

    #[error("No delegate attached, or it has been dropped")]
    DelegateUnavailable,

    #[error("Failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    #[error("Invalid image {name}: {reason}")]
    InvalidImage { name: String, reason: String },
}
