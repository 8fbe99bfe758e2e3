/// Colour + depth image sources feeding the export pipeline
use crate::error::{ExportError, ExportResult};
use crate::grid::{ColorGrid, DepthGrid};
use image::imageops::{self, FilterType};
use image::{GrayImage, RgbImage};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Something that can produce aligned colour/depth image pairs.
pub trait DepthSource {
    fn decode(&self) -> ExportResult<Vec<ImagePair>>;
}

/// Colour image with a depth image of identical dimensions.
#[derive(Debug, Clone)]
pub struct ImagePair {
    pub original: RgbImage,
    pub depth: GrayImage,
}

impl ImagePair {
    /// Pair a colour image with a depth map, resizing the depth map to the
    /// colour image's size when they differ.
    pub fn new(original: RgbImage, depth: GrayImage) -> Self {
        let depth = if depth.dimensions() != original.dimensions() {
            debug!(
                from = ?depth.dimensions(),
                to = ?original.dimensions(),
                "Resizing depth image to colour image"
            );
            imageops::resize(
                &depth,
                original.width(),
                original.height(),
                FilterType::CatmullRom,
            )
        } else {
            depth
        };
        Self { original, depth }
    }

    pub fn width(&self) -> u32 {
        self.original.width()
    }

    pub fn height(&self) -> u32 {
        self.original.height()
    }

    /// Crop colour and depth identically.
    pub fn crop(&self, crop: &CropBox) -> ExportResult<ImagePair> {
        crop.check_fits(self.width(), self.height())?;
        Ok(Self {
            original: imageops::crop_imm(&self.original, crop.x, crop.y, crop.width, crop.height)
                .to_image(),
            depth: imageops::crop_imm(&self.depth, crop.x, crop.y, crop.width, crop.height)
                .to_image(),
        })
    }

    pub fn grids(&self) -> (DepthGrid, ColorGrid) {
        (
            DepthGrid::from_luma(&self.depth),
            ColorGrid::from_rgb(&self.original),
        )
    }
}

/// Crop rectangle given as origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropBox {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Corner form `(left, top, right, bottom)`.
    pub fn corners(&self) -> (u32, u32, u32, u32) {
        (
            self.x,
            self.y,
            self.x.saturating_add(self.width),
            self.y.saturating_add(self.height),
        )
    }

    fn check_fits(&self, image_width: u32, image_height: u32) -> ExportResult<()> {
        let (_, _, right, bottom) = self.corners();
        if self.width == 0 || self.height == 0 || right > image_width || bottom > image_height {
            return Err(ExportError::InvalidCrop {
                x: self.x,
                y: self.y,
                width: self.width,
                height: self.height,
                image_width,
                image_height,
            });
        }
        Ok(())
    }
}

/// Colour image on disk plus one or more depth layers for it.
#[derive(Debug, Clone)]
pub struct ImageFileSource {
    original: PathBuf,
    depth_layers: Vec<PathBuf>,
}

impl ImageFileSource {
    pub fn new(original: &Path, depth_layers: &[PathBuf]) -> Self {
        Self {
            original: original.to_path_buf(),
            depth_layers: depth_layers.to_vec(),
        }
    }
}

impl DepthSource for ImageFileSource {
    fn decode(&self) -> ExportResult<Vec<ImagePair>> {
        info!(path = %self.original.display(), "Loading colour image");
        let original = image::open(&self.original)?.to_rgb8();

        self.depth_layers
            .iter()
            .map(|path| {
                info!(path = %path.display(), "Loading depth image");
                let depth = image::open(path)?.to_luma8();
                Ok(ImagePair::new(original.clone(), depth))
            })
            .collect()
    }
}

/// Already decoded pairs, for callers that do their own image loading.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pairs: Vec<ImagePair>,
}

impl MemorySource {
    pub fn new(pairs: Vec<ImagePair>) -> Self {
        Self { pairs }
    }
}

impl DepthSource for MemorySource {
    fn decode(&self) -> ExportResult<Vec<ImagePair>> {
        Ok(self.pairs.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    fn pair(width: u32, height: u32) -> ImagePair {
        let original = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
        let depth = GrayImage::from_fn(width, height, |x, y| Luma([(x + y) as u8]));
        ImagePair::new(original, depth)
    }

    #[test]
    fn depth_is_resized_to_colour_dimensions() {
        let original = RgbImage::new(8, 6);
        let depth = GrayImage::from_pixel(4, 3, Luma([90]));
        let pair = ImagePair::new(original, depth);

        assert_eq!(pair.depth.dimensions(), (8, 6));
        assert!(pair.depth.pixels().all(|p| (89..=91).contains(&p.0[0])));
    }

    #[test]
    fn crop_keeps_buffers_aligned() {
        let cropped = pair(10, 10).crop(&CropBox::new(2, 3, 4, 5)).unwrap();

        assert_eq!(cropped.original.dimensions(), (4, 5));
        assert_eq!(cropped.depth.dimensions(), (4, 5));
        assert_eq!(cropped.original.get_pixel(0, 0).0, [2, 3, 0]);
        assert_eq!(cropped.depth.get_pixel(1, 1).0, [7]);
    }

    #[test]
    fn crop_outside_image_is_rejected() {
        let result = pair(10, 10).crop(&CropBox::new(8, 0, 4, 4));
        assert!(matches!(result, Err(ExportError::InvalidCrop { .. })));

        let result = pair(10, 10).crop(&CropBox::new(0, 0, 0, 4));
        assert!(matches!(result, Err(ExportError::InvalidCrop { .. })));
    }

    #[test]
    fn corners_use_origin_plus_size() {
        assert_eq!(CropBox::new(300, 1500, 3200, 3200).corners(), (300, 1500, 3500, 4700));
    }

    #[test]
    fn grids_mirror_the_buffers() {
        let (depth, colour) = pair(5, 4).grids();
        assert_eq!((depth.width(), depth.height()), (5, 4));
        assert_eq!(depth.depth_at(3, 2), 5);
        assert_eq!(colour.color_at(3, 2), [3, 2, 0]);
    }

    #[test]
    fn memory_source_returns_its_pairs() {
        let source = MemorySource::new(vec![pair(2, 2), pair(3, 3)]);
        assert_eq!(source.decode().unwrap().len(), 2);
    }
}
