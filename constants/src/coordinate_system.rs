/// Offset subtracted after scaling pixel coordinates into unit space,
/// placing the image centre at the origin.
pub const NORMALISED_ORIGIN_OFFSET: f64 = 0.5;

/// Image rows grow downwards; the exported cloud is Y-up.
pub const VERTICAL_AXIS_SIGN: f64 = -1.0;
