/// Depth extent of a sampled point set
use crate::point::PixelPoint3D;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBounds {
    pub min_z: f64,
    pub max_z: f64,
}

impl DepthBounds {
    /// Bounds enclosing every point, or `None` for an empty set
    pub fn from_points(points: &[PixelPoint3D]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let mut bounds = Self {
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        };
        for point in points {
            bounds.min_z = bounds.min_z.min(point.z);
            bounds.max_z = bounds.max_z.max(point.z);
        }
        Some(bounds)
    }

    /// Depth midpoint expressed as a fraction of the maximum depth.
    /// Undefined when `max_z` is zero; callers check first.
    pub fn z_centre_offset(&self) -> f64 {
        ((self.max_z + self.min_z) / 2.0) / self.max_z
    }
}
