// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document.rs

use std::path::Path;

use anyhow::Context;
use image::{DynamicImage, GenericImageView, ImageReader};

/// Re-export the image handle type for the view.
pub type ImageHandle = cosmic::iced::widget::image::Handle;

/// Create an iced image handle from a DynamicImage.
pub fn create_image_handle(img: &DynamicImage) -> ImageHandle {
    let (w, h) = img.dimensions();
    let rgba = img.to_rgba8();
    let pixels = rgba.into_raw();
    ImageHandle::from_rgba(w, h, pixels)
}

/// The image currently on screen.
///
/// Only the display handle and the pixel size are kept; export re-reads
/// the file from disk.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: ImageHandle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Load a raster image from disk.
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let image = ImageReader::open(path)
            .with_context(|| format!("failed to open {}", path.display()))?
            .decode()
            .with_context(|| format!("failed to decode {}", path.display()))?;
        let (width, height) = image.dimensions();

        Ok(Self {
            handle: create_image_handle(&image),
            width,
            height,
        })
    }
}
