/// Point and colour types carried through the export pipeline

/// Point in pixel space: continuous image coordinates plus the depth read at
/// the truncated pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PixelPoint3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Integer pixel the point falls in. Sub-pixel position is discarded.
    pub fn pixel(&self) -> (u32, u32) {
        (self.x as u32, self.y as u32)
    }

    pub fn distance(&self, other: &PixelPoint3D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Point in the centred, aspect-correct, Y-up export space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedPoint3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl NormalizedPoint3D {
    /// Distance from the origin in the X/Y plane.
    pub fn planar_radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

/// RGB colour with signed channels. Tint and saturation arithmetic may leave
/// the [0, 255] range; values are only clamped when encoded for output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointColour {
    pub r: i32,
    pub g: i32,
    pub b: i32,
}

impl PointColour {
    pub fn new(r: i32, g: i32, b: i32) -> Self {
        Self { r, g, b }
    }

    pub fn channels(&self) -> [i32; 3] {
        [self.r, self.g, self.b]
    }

    pub fn from_channels([r, g, b]: [i32; 3]) -> Self {
        Self { r, g, b }
    }

    /// Channels clamped into the displayable 8-bit range.
    pub fn clamped(&self) -> [u8; 3] {
        self.channels().map(|c| c.clamp(0, 255) as u8)
    }

    /// `#rrggbb` string of the clamped colour.
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.clamped();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

impl From<[u8; 3]> for PointColour {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r as i32, g as i32, b as i32)
    }
}

/// A point paired with its colour. Pairing by index is kept through every stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPoint<P> {
    pub point: P,
    pub colour: PointColour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_truncates_sub_pixel_position() {
        let point = PixelPoint3D::new(2.99, 0.01, 10.0);
        assert_eq!(point.pixel(), (2, 0));
    }

    #[test]
    fn distance_includes_depth() {
        let a = PixelPoint3D::new(0.0, 0.0, 0.0);
        let b = PixelPoint3D::new(1.0, 2.0, 2.0);
        assert!((a.distance(&b) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn hex_clamps_out_of_range_channels() {
        assert_eq!(PointColour::new(255, 16, 0).to_hex(), "#ff1000");
        assert_eq!(PointColour::new(300, -20, 128).to_hex(), "#ff0080");
    }
}
