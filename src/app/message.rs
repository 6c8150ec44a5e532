// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: pointer input and navigation commands.

use crate::app::navigator::Command;
use crate::app::tool::PointerEvent;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Canvas input, already in image pixel coordinates.
    Pointer(PointerEvent),
    PointerLeft,

    // Keyboard.
    Command(Command),
}
