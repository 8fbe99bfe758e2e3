/// Number of equal-width buckets in the depth histogram
pub const HISTOGRAM_BUCKETS: usize = 20;

/// Depth values are bucketed across [0, HISTOGRAM_DEPTH_RANGE)
pub const HISTOGRAM_DEPTH_RANGE: usize = 256;

/// Width in characters of the fullest histogram bar
pub const HISTOGRAM_BAR_WIDTH: usize = 50;
