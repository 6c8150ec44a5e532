// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export.rs
//
// Crop export: slice each region out of the source image into its own file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use image::{ImageFormat, ImageReader};

use super::region::Region;
use crate::constant::CROP_EXT;

/// Output path for the crop at `index` of `image_path`:
/// `<output_dir>/<stem>_<index>.png`.
pub fn crop_file_name(image_path: &Path, index: usize, output_dir: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{stem}_{index}.{CROP_EXT}"))
}

/// Read `image_path` once and write one PNG per region, in list order.
///
/// Existing files with the same name are overwritten. Returns the number
/// of crops written.
pub fn export_crops(image_path: &Path, regions: &[Region], output_dir: &Path) -> anyhow::Result<usize> {
    let image = ImageReader::open(image_path)
        .with_context(|| format!("failed to open {}", image_path.display()))?
        .decode()
        .with_context(|| format!("failed to decode {}", image_path.display()))?;

    for (index, region) in regions.iter().enumerate() {
        let (x, y, width, height) = region.as_tuple();
        let crop = image.crop_imm(x, y, width, height);
        let target = crop_file_name(image_path, index, output_dir);
        crop.save_with_format(&target, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", target.display()))?;
    }

    log::info!(
        "Exported {} crop(s) from {} to {}",
        regions.len(),
        image_path.display(),
        output_dir.display()
    );
    Ok(regions.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::region::Point;
    use image::{GenericImageView, Rgb, RgbImage};

    fn write_source(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn file_name_uses_stem_and_index() {
        let name = crop_file_name(Path::new("/data/cat.01.jpg"), 3, Path::new("out"));
        assert_eq!(name, PathBuf::from("out/cat.01_3.png"));
    }

    #[test]
    fn exports_one_file_per_region_with_region_size() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let image_path = write_source(src.path(), "photo.png", 100, 100);

        let regions = [
            Region::from_corners(Point::new(10, 10), Point::new(50, 50)),
            Region::from_corners(Point::new(60, 60), Point::new(90, 90)),
        ];
        let count = export_crops(&image_path, &regions, out.path()).unwrap();
        assert_eq!(count, 2);

        let first = image::open(out.path().join("photo_0.png")).unwrap();
        assert_eq!(first.dimensions(), (40, 40));
        assert_eq!(first.to_rgb8().get_pixel(0, 0), &Rgb([10, 10, 0]));

        let second = image::open(out.path().join("photo_1.png")).unwrap();
        assert_eq!(second.dimensions(), (30, 30));

        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 2);
    }

    #[test]
    fn empty_region_list_writes_nothing() {
        let src = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let image_path = write_source(src.path(), "empty.png", 8, 8);

        assert_eq!(export_crops(&image_path, &[], out.path()).unwrap(), 0);
        assert_eq!(std::fs::read_dir(out.path()).unwrap().count(), 0);
    }

    #[test]
    fn unreadable_image_is_an_error() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("missing.png");
        assert!(export_crops(&missing, &[], out.path()).is_err());
    }
}
