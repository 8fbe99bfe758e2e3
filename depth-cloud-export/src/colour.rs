/// Per-point colour lookup with optional tint and saturation adjustments
use crate::grid::ColorGrid;
use crate::point::{PixelPoint3D, PointColour};
use tracing::info;

/// Colour adjustments applied after the base lookup. Tint always runs before
/// saturation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColourAdjustments {
    pub tint: Option<[u8; 3]>,
    /// 1.0 leaves colours unchanged.
    pub saturation: f64,
}

impl Default for ColourAdjustments {
    fn default() -> Self {
        Self {
            tint: None,
            saturation: 1.0,
        }
    }
}

impl ColourAdjustments {
    /// Apply tint then saturation to every colour in place.
    pub fn apply(&self, colours: &mut [PointColour]) {
        if let Some(tint) = self.tint {
            info!(?tint, "Applied tint colour");
            for colour in colours.iter_mut() {
                *colour = apply_tint(*colour, tint);
            }
        }

        if self.saturation != 1.0 {
            info!(saturation = self.saturation, "Adjusting saturation level");
            for colour in colours.iter_mut() {
                *colour = apply_saturation(*colour, self.saturation);
            }
        }
    }
}

/// Look up the colour under each point's truncated pixel, in point order.
pub fn assign_colours(points: &[PixelPoint3D], grid: &ColorGrid) -> Vec<PointColour> {
    points
        .iter()
        .map(|point| {
            let (x, y) = point.pixel();
            PointColour::from(grid.color_at(x, y))
        })
        .collect()
}

/// Base lookup followed by the configured adjustments.
pub fn assign_adjusted_colours(
    points: &[PixelPoint3D],
    grid: &ColorGrid,
    adjustments: &ColourAdjustments,
) -> Vec<PointColour> {
    let mut colours = assign_colours(points, grid);
    adjustments.apply(&mut colours);
    colours
}

/// Integer average of each channel with the tint channel.
pub fn apply_tint(colour: PointColour, tint: [u8; 3]) -> PointColour {
    let [r, g, b] = colour.channels();
    PointColour::new(
        (r + tint[0] as i32) / 2,
        (g + tint[1] as i32) / 2,
        (b + tint[2] as i32) / 2,
    )
}

/// Push each channel away from (factor > 1) or towards (factor < 1) the
/// channel mean. Results are truncated towards zero and left unclamped.
pub fn apply_saturation(colour: PointColour, factor: f64) -> PointColour {
    let channels = colour.channels();
    let gray = channels.iter().sum::<i32>() / 3;
    PointColour::from_channels(
        channels.map(|c| (gray as f64 + (c - gray) as f64 * factor) as i32),
    )
}
