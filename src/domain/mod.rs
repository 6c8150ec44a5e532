// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Display-independent domain: regions, region lists, files and export.

pub mod export;
pub mod files;
pub mod region;
pub mod regions;

pub use export::{crop_file_name, export_crops};
pub use region::{Point, Region};
pub use regions::RegionList;
