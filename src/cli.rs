// SPDX-License-Identifier: GPL-3.0-or-later
// src/cli.rs
//
// Command line arguments for both tools.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::constant::{DEFAULT_OUTPUT_DIR, DEFAULT_PATCH_SIZE};

/// Options shared by both tools.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// Path to the input images
    #[arg(short = 'i', long = "images-path")]
    pub images_path: PathBuf,

    /// Path where to save the crops
    #[arg(short = 'o', long = "output-path", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_path: PathBuf,
}

/// Draw free-form bounding boxes and export them as crops.
#[derive(Parser, Debug, Clone)]
#[command(name = "bbox-cropper", version, about)]
pub struct BoxArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Stamp fixed-size square patches and export them as crops.
#[derive(Parser, Debug, Clone)]
#[command(name = "patch-cropper", version, about)]
pub struct PatchArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Size of the patches
    #[arg(
        short = 's',
        long = "size",
        default_value_t = DEFAULT_PATCH_SIZE,
        value_parser = clap::value_parser!(u32).range(2..)
    )]
    pub size: u32,
}
