// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/tool/bbox.rs
//
// Bounding-box tool: two clicks fix the opposite corners of a rectangle.

use super::{PointerButton, PointerEvent};
use crate::domain::{Point, Region, RegionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoxState {
    #[default]
    Idle,
    /// First corner fixed, waiting for the second.
    Drawing { anchor: Point },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoxTool {
    state: BoxState,
}

impl BoxTool {
    pub fn state(&self) -> BoxState {
        self.state
    }

    pub fn handle(&mut self, event: PointerEvent, regions: &mut RegionList) {
        let PointerEvent::Pressed(button, point) = event else {
            return;
        };

        match (button, self.state) {
            (PointerButton::Primary, BoxState::Idle) => {
                self.state = BoxState::Drawing { anchor: point };
            }
            (PointerButton::Primary, BoxState::Drawing { anchor }) => {
                let region = Region::from_corners(anchor, point);
                // Zero-area boxes have nothing to crop.
                if region.is_empty() {
                    log::debug!("Discarded empty region {:?}", region);
                } else {
                    regions.try_add(region);
                }
                self.state = BoxState::Idle;
            }
            (PointerButton::Secondary, BoxState::Drawing { .. }) => {
                self.state = BoxState::Idle;
            }
            (PointerButton::Secondary, BoxState::Idle) => {}
            (PointerButton::Tertiary, _) => {
                regions.remove_at(point);
            }
        }
    }

    /// Rectangle from the anchor to `pointer` while drawing.
    pub fn preview(&self, pointer: Point) -> Option<Region> {
        match self.state {
            BoxState::Drawing { anchor } => Some(Region::from_corners(anchor, pointer)),
            BoxState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(tool: &mut BoxTool, regions: &mut RegionList, button: PointerButton, x: u32, y: u32) {
        tool.handle(PointerEvent::Pressed(button, Point::new(x, y)), regions);
    }

    #[test]
    fn two_clicks_commit_a_normalized_box() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();

        press(&mut tool, &mut regions, PointerButton::Primary, 50, 10);
        assert_eq!(tool.state(), BoxState::Drawing { anchor: Point::new(50, 10) });
        press(&mut tool, &mut regions, PointerButton::Primary, 10, 40);

        assert_eq!(tool.state(), BoxState::Idle);
        assert_eq!(
            regions.as_slice(),
            &[Region::from_corners(Point::new(10, 10), Point::new(50, 40))]
        );
    }

    #[test]
    fn overlapping_box_is_dropped_and_tool_returns_to_idle() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();
        regions.try_add(Region::from_corners(Point::new(0, 0), Point::new(20, 20)));

        press(&mut tool, &mut regions, PointerButton::Primary, 10, 10);
        press(&mut tool, &mut regions, PointerButton::Primary, 30, 30);
        assert_eq!(regions.len(), 1);
        assert_eq!(tool.state(), BoxState::Idle);
    }

    #[test]
    fn secondary_click_cancels_drawing() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();

        press(&mut tool, &mut regions, PointerButton::Primary, 10, 10);
        press(&mut tool, &mut regions, PointerButton::Secondary, 40, 40);
        assert_eq!(tool.state(), BoxState::Idle);
        assert_eq!(tool.preview(Point::new(40, 40)), None);

        // The next primary click starts over instead of committing.
        press(&mut tool, &mut regions, PointerButton::Primary, 40, 40);
        assert!(regions.is_empty());
    }

    #[test]
    fn tertiary_click_keeps_drawing_state() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();
        regions.try_add(Region::from_corners(Point::new(0, 0), Point::new(20, 20)));

        press(&mut tool, &mut regions, PointerButton::Primary, 50, 50);
        press(&mut tool, &mut regions, PointerButton::Tertiary, 5, 5);
        assert!(regions.is_empty());
        assert_eq!(tool.state(), BoxState::Drawing { anchor: Point::new(50, 50) });
    }

    #[test]
    fn zero_area_box_is_discarded() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();

        press(&mut tool, &mut regions, PointerButton::Primary, 10, 10);
        press(&mut tool, &mut regions, PointerButton::Primary, 10, 60);
        assert!(regions.is_empty());
        assert_eq!(tool.state(), BoxState::Idle);
    }

    #[test]
    fn motion_does_not_change_state() {
        let mut tool = BoxTool::default();
        let mut regions = RegionList::new();
        tool.handle(PointerEvent::Moved(Point::new(3, 3)), &mut regions);
        assert_eq!(tool.state(), BoxState::Idle);
    }
}
