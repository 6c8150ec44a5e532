// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Interactive annotation application shared by both tools.

pub mod app;
pub mod document;
pub mod message;
pub mod model;
pub mod navigator;
pub mod tool;
pub mod view;

pub use app::{CropperApp, FatalSlot, Flags, print_instructions, run};
pub use message::AppMessage;
pub use model::AppModel;
