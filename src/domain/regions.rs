// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/regions.rs
//
// Ordered list of regions marked on a single image.

use super::region::{Point, Region};

/// Regions committed on the current image, in insertion order.
///
/// Regions never change once added; they are only appended or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionList {
    regions: Vec<Region>,
}

impl RegionList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `region` unless it overlaps one already in the list.
    ///
    /// Returns whether the region was added.
    pub fn try_add(&mut self, region: Region) -> bool {
        if self.regions.iter().any(|r| r.overlaps(&region)) {
            log::debug!("Rejected overlapping region {:?}", region);
            return false;
        }
        log::debug!("Added region {:?}", region);
        self.regions.push(region);
        true
    }

    /// Index of the first region (insertion order) containing `point`.
    pub fn position_at(&self, point: Point) -> Option<usize> {
        self.regions.iter().position(|r| r.contains(point))
    }

    /// Remove the first region containing `point`, if any.
    pub fn remove_at(&mut self, point: Point) -> Option<Region> {
        let index = self.position_at(point)?;
        let removed = self.regions.remove(index);
        log::debug!("Removed region {:?}", removed);
        Some(removed)
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    pub fn as_slice(&self) -> &[Region] {
        &self.regions
    }
}

impl<'a> IntoIterator for &'a RegionList {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
