// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state and the navigation loop, independent of the window.

use std::path::{Path, PathBuf};

use crate::app::document::LoadedImage;
use crate::app::navigator::{Command, Navigator};
use crate::app::tool::{PointerEvent, Session, ToolKind};
use crate::domain::export_crops;

/// What the window should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Decode failures on display or save are fatal: every fallible method
/// hands the error back to the caller, which ends the session.
#[derive(Debug, Clone)]
pub struct AppModel {
    // Navigation.
    pub navigator: Navigator,
    pub output_dir: PathBuf,

    // Current image.
    pub kind: ToolKind,
    pub image: LoadedImage,
    pub session: Session,

    // UI state.
    pub status: Option<String>,
}

impl AppModel {
    /// Build the model and show the first image.
    pub fn new(navigator: Navigator, output_dir: PathBuf, kind: ToolKind) -> anyhow::Result<Self> {
        let (image, session) = open_current(&navigator, kind)?;
        Ok(Self {
            navigator,
            output_dir,
            kind,
            image,
            session,
            status: None,
        })
    }

    /// Load the current image and start a fresh session on it.
    pub fn display_current(&mut self) -> anyhow::Result<()> {
        let (image, session) = open_current(&self.navigator, self.kind)?;
        self.image = image;
        self.session = session;
        self.status = None;
        Ok(())
    }

    pub fn pointer(&mut self, event: PointerEvent) {
        self.session.dispatch(event);
    }

    pub fn pointer_left(&mut self) {
        self.session.pointer_left();
    }

    pub fn apply(&mut self, command: Command) -> anyhow::Result<Outcome> {
        match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Next => {
                if self.navigator.next() {
                    self.display_current()?;
                }
            }
            Command::Previous => {
                if self.navigator.prev() {
                    self.display_current()?;
                }
            }
            Command::Save => self.save()?,
        }
        Ok(Outcome::Continue)
    }

    fn save(&mut self) -> anyhow::Result<()> {
        let path = self.navigator.current();
        let count = export_crops(path, self.session.regions().as_slice(), &self.output_dir)?;

        let name = file_name(path);
        println!("Number of crops saved for {name}: {count}");
        self.status = Some(format!("Saved {count} crop(s) from {name}"));
        Ok(())
    }

    pub fn region_count(&self) -> usize {
        self.session.regions().len()
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn open_current(navigator: &Navigator, kind: ToolKind) -> anyhow::Result<(LoadedImage, Session)> {
    let path = navigator.current();
    println!(
        "Displaying image {}. ({}/{})",
        path.display(),
        navigator.index() + 1,
        navigator.len()
    );

    let image = LoadedImage::open(path)?;
    log::info!("Displaying {} ({}x{})", path.display(), image.width, image.height);
    let session = Session::new(kind, image.width, image.height);
    Ok((image, session))
}
