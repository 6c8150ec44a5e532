// SPDX-License-Identifier: GPL-3.0-or-later
// src/lib.rs
//
// Cropmark: mark rectangular regions on a directory of images and export
// the enclosed pixels as PNG crops.

pub mod app;
pub mod cli;
pub mod config;
pub mod constant;
pub mod domain;

use std::io;

use crate::app::{AppModel, FatalSlot};
use crate::app::navigator::Navigator;
use crate::app::tool::ToolKind;
use crate::cli::CommonArgs;
use crate::domain::files::{confirm_overwrite, list_images, prepare_output_dir};

/// Install the logger used by both binaries.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

/// Shared startup: output directory gate, image discovery, window.
///
/// Declining the overwrite prompt, an unreadable input directory and an
/// empty one all end the program without an error. An image that fails
/// to decode on display or save ends the session and is returned.
pub fn launch(args: CommonArgs, kind: ToolKind) -> anyhow::Result<()> {
    if prepare_output_dir(&args.output_path)? {
        let stdin = io::stdin();
        if !confirm_overwrite(&mut stdin.lock(), &mut io::stdout())? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let images = match list_images(&args.images_path) {
        Ok(images) => images,
        Err(e) => {
            log::error!("{e:#}");
            println!("Cannot read images from {}: {e:#}", args.images_path.display());
            return Ok(());
        }
    };
    let Some(navigator) = Navigator::new(images) else {
        println!("No images found in the directory.");
        return Ok(());
    };
    log::info!(
        "Found {} image(s) in {}",
        navigator.len(),
        args.images_path.display()
    );

    app::print_instructions(kind);
    let model = AppModel::new(navigator, args.output_path, kind)?;
    let fatal = FatalSlot::default();
    app::run(app::Flags {
        model,
        fatal: fatal.clone(),
    })?;

    let failure = fatal.lock().ok().and_then(|mut slot| slot.take());
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
