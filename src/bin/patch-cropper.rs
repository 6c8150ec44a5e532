// SPDX-License-Identifier: GPL-3.0-or-later
// src/bin/patch-cropper.rs
//
// Patch cropper: one click per fixed-size square, crops exported on demand.

use clap::Parser;
use cropmark::app::tool::ToolKind;
use cropmark::cli::PatchArgs;

fn main() -> anyhow::Result<()> {
    cropmark::init_logging();
    let args = PatchArgs::parse();
    cropmark::launch(args.common, ToolKind::Patch { size: args.size })
}
