// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/navigator.rs
//
// Position within the sorted image list and the command keys.

use std::path::{Path, PathBuf};

/// Keyboard commands of the navigation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Next,
    Previous,
    Save,
}

impl Command {
    /// Map a typed character to a command. Other keys have no effect.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "q" => Some(Command::Quit),
            "d" => Some(Command::Next),
            "a" => Some(Command::Previous),
            "s" => Some(Command::Save),
            _ => None,
        }
    }
}

/// Sorted image files and the index of the one on screen.
///
/// The index is clamped to the list; there is no wraparound.
#[derive(Debug, Clone)]
pub struct Navigator {
    entries: Vec<PathBuf>,
    index: usize,
}

impl Navigator {
    /// `None` when there is nothing to show.
    pub fn new(entries: Vec<PathBuf>) -> Option<Self> {
        if entries.is_empty() {
            None
        } else {
            Some(Self { entries, index: 0 })
        }
    }

    pub fn current(&self) -> &Path {
        &self.entries[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Advance one image. Returns false at the last image.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Go back one image. Returns false at the first image.
    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}
