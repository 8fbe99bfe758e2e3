/// LAS integer coordinate scale. Normalised coordinates sit around [-0.5, 0.5]
/// so micro-unit precision keeps them lossless enough for rendering.
pub const LAS_COORDINATE_SCALE: f64 = 0.000_001;

/// Widens an 8-bit colour channel to the 16-bit range LAS stores (255 * 257 = 65535)
pub const LAS_COLOUR_SCALE: u16 = 257;
