// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Suffixes of files picked up from the input directory (case-sensitive).
pub const IMAGE_EXTENSIONS: [&str; 2] = [".jpg", ".png"];

/// Extension of exported crop files.
pub const CROP_EXT: &str = "png";

/// Default destination for exported crops.
pub const DEFAULT_OUTPUT_DIR: &str = "./crops";

/// Default side length of a patch in pixels.
pub const DEFAULT_PATCH_SIZE: u32 = 512;

/// Initial window size (width and height) in logical pixels.
pub const WINDOW_SIZE: f32 = 900.0;

/// Window titles.
pub const BBOX_TITLE: &str = "Bounding Box Cropper";
pub const PATCH_TITLE: &str = "Patch Cropper";

/// Overlay colors as RGB in 0.0..=1.0.
pub const CROSSHAIR_COLOR: [f32; 3] = [0.0, 1.0, 1.0];
pub const PREVIEW_COLOR: [f32; 3] = [0.0, 1.0, 0.0];
pub const COMMITTED_COLOR: [f32; 3] = [1.0, 0.0, 0.0];
