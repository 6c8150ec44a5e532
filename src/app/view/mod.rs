// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: image canvas with the region overlay, and the footer.

pub mod canvas;
pub mod footer;
mod overlay;

pub use overlay::region_overlay;
