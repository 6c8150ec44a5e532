// SPDX-License-Identifier: GPL-3.0-or-later
// src/bin/bbox-cropper.rs
//
// Bounding-box cropper: two clicks per box, crops exported on demand.

use clap::Parser;
use cropmark::app::tool::ToolKind;
use cropmark::cli::BoxArgs;

fn main() -> anyhow::Result<()> {
    cropmark::init_logging();
    let args = BoxArgs::parse();
    cropmark::launch(args.common, ToolKind::BoundingBox)
}
