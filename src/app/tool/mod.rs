// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/tool/mod.rs
//
// Annotation session: pointer events dispatched into the active tool.

mod bbox;
mod patch;

pub use bbox::BoxTool;
pub use patch::PatchTool;

use crate::domain::{Point, Region, RegionList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Add or commit a region.
    Primary,
    /// Cancel the region in progress.
    Secondary,
    /// Delete the region under the pointer.
    Tertiary,
}

/// Input delivered by the display surface, in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Moved(Point),
    Pressed(PointerButton, Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Moved(p) | PointerEvent::Pressed(_, p) => p,
        }
    }
}

/// Which tool a session runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    BoundingBox,
    Patch { size: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    BoundingBox(BoxTool),
    Patch(PatchTool),
}

impl Tool {
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::BoundingBox => Tool::BoundingBox(BoxTool::default()),
            ToolKind::Patch { size } => Tool::Patch(PatchTool::new(size)),
        }
    }
}

/// Per-image interaction state.
///
/// Created fresh for every displayed image, so nothing carries over
/// between images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    tool: Tool,
    regions: RegionList,
    pointer: Option<Point>,
    image_size: (u32, u32),
}

impl Session {
    pub fn new(kind: ToolKind, width: u32, height: u32) -> Self {
        Self {
            tool: Tool::new(kind),
            regions: RegionList::new(),
            pointer: None,
            image_size: (width, height),
        }
    }

    /// Apply one pointer event to the session.
    pub fn dispatch(&mut self, event: PointerEvent) {
        let (width, height) = self.image_size;
        let position = event.position();
        self.pointer = Some(position);

        match &mut self.tool {
            Tool::BoundingBox(tool) => tool.handle(event, &mut self.regions),
            Tool::Patch(tool) => tool.handle(event, width, height, &mut self.regions),
        }
    }

    /// Region currently being drawn or previewed under the pointer.
    pub fn preview(&self) -> Option<Region> {
        let pointer = self.pointer?;
        let (width, height) = self.image_size;
        match &self.tool {
            Tool::BoundingBox(tool) => tool.preview(pointer),
            Tool::Patch(tool) => Some(tool.square_at(pointer, width, height)),
        }
    }

    /// Last pointer position over the image, for the guide lines.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn pointer_left(&mut self) {
        self.pointer = None;
    }

    pub fn regions(&self) -> &RegionList {
        &self.regions
    }

    pub fn image_size(&self) -> (u32, u32) {
        self.image_size
    }
}
