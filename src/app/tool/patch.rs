// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/tool/patch.rs
//
// Patch tool: every primary click stamps a fixed-size square.

use super::{PointerButton, PointerEvent};
use crate::domain::region::clamp_center;
use crate::domain::{Point, Region, RegionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchTool {
    size: u32,
}

impl PatchTool {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Square centered on the clamped pointer position.
    pub fn square_at(&self, pointer: Point, width: u32, height: u32) -> Region {
        Region::square_around(pointer, self.size, width, height)
    }

    pub fn handle(&mut self, event: PointerEvent, width: u32, height: u32, regions: &mut RegionList) {
        let PointerEvent::Pressed(button, point) = event else {
            return;
        };

        match button {
            PointerButton::Primary => {
                let square = self.square_at(point, width, height);
                // A size below 2 collapses to a single point.
                if square.is_empty() {
                    log::debug!("Discarded empty patch {:?}", square);
                } else {
                    regions.try_add(square);
                }
            }
            PointerButton::Tertiary => {
                regions.remove_at(clamp_center(point, self.size, width, height));
            }
            PointerButton::Secondary => {}
        }
    }
}
