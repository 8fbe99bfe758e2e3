/// Maximum number of rejection sampling rounds before giving up on the requested count
pub const SAMPLING_ROUNDS: usize = 10;

/// Minimum distance between accepted points in (x, y, depth) pixel space
pub const MIN_SEPARATION: f64 = 2.0;

/// Number of points requested when no sample count is configured
pub const DEFAULT_SAMPLE_COUNT: usize = 600;

/// Lower bound of the accepted depth range (inclusive)
pub const DEFAULT_MIN_DEPTH: u16 = 0;

/// Upper bound of the accepted depth range (inclusive)
pub const DEFAULT_MAX_DEPTH: u16 = 255;
