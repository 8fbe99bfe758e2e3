/// Immutable depth and colour grids sampled by the export pipeline
use crate::error::{ExportError, ExportResult};
use image::{GrayImage, RgbImage};

/// Row-major grid of integer depth samples.
#[derive(Debug, Clone)]
pub struct DepthGrid {
    width: u32,
    height: u32,
    values: Vec<u16>,
}

impl DepthGrid {
    /// Build a grid from raw row-major values.
    pub fn from_values(width: u32, height: u32, values: Vec<u16>) -> ExportResult<Self> {
        check_len(width, height, values.len())?;
        Ok(Self {
            width,
            height,
            values,
        })
    }

    /// Build a grid from an 8-bit luma depth image.
    pub fn from_luma(image: &GrayImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            values: image.as_raw().iter().map(|&v| v as u16).collect(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn values(&self) -> &[u16] {
        &self.values
    }

    /// Depth at integer pixel coordinates.
    pub fn depth_at(&self, x: u32, y: u32) -> u16 {
        self.values[(y as usize) * (self.width as usize) + x as usize]
    }
}

/// Row-major grid of RGB samples aligned with a `DepthGrid`.
#[derive(Debug, Clone)]
pub struct ColorGrid {
    width: u32,
    pixels: Vec<[u8; 3]>,
}

impl ColorGrid {
    pub fn from_values(width: u32, height: u32, pixels: Vec<[u8; 3]>) -> ExportResult<Self> {
        check_len(width, height, pixels.len())?;
        Ok(Self { width, pixels })
    }

    pub fn from_rgb(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            pixels: image.pixels().map(|p| p.0).collect(),
        }
    }

    /// Colour at integer pixel coordinates, addressed as `y * width + x`.
    pub fn color_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y as usize) * (self.width as usize) + x as usize]
    }
}

fn check_len(width: u32, height: u32, actual: usize) -> ExportResult<()> {
    if (width as usize) * (height as usize) != actual {
        return Err(ExportError::GridSize {
            width,
            height,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn rejects_mismatched_buffer() {
        let result = DepthGrid::from_values(3, 2, vec![0; 5]);
        assert!(matches!(
            result,
            Err(ExportError::GridSize { actual: 5, .. })
        ));
    }

    #[test]
    fn addresses_row_major() {
        let grid = DepthGrid::from_values(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(grid.depth_at(0, 1), 3);
        assert_eq!(grid.depth_at(2, 1), 5);
    }

    #[test]
    fn builds_from_images() {
        let mut depth = GrayImage::new(2, 2);
        depth.put_pixel(1, 0, Luma([200]));
        let mut colour = RgbImage::new(2, 2);
        colour.put_pixel(0, 1, Rgb([10, 20, 30]));

        let depth_grid = DepthGrid::from_luma(&depth);
        let colour_grid = ColorGrid::from_rgb(&colour);

        assert_eq!(depth_grid.depth_at(1, 0), 200);
        assert_eq!(colour_grid.color_at(0, 1), [10, 20, 30]);
        assert_eq!(colour_grid.color_at(1, 1), [0, 0, 0]);
    }
}
