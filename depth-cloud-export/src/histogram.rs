/// Diagnostic depth histogram over the raw grid
use crate::grid::DepthGrid;
use constants::histogram::{HISTOGRAM_BAR_WIDTH, HISTOGRAM_BUCKETS, HISTOGRAM_DEPTH_RANGE};
use rayon::prelude::*;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepthHistogram {
    counts: [usize; HISTOGRAM_BUCKETS],
}

impl DepthHistogram {
    /// Count every depth sample of the grid. Reads only; the grid is untouched.
    pub fn from_grid(grid: &DepthGrid) -> Self {
        let counts = grid
            .values()
            .par_chunks(25_000)
            .map(|chunk| {
                let mut local = [0usize; HISTOGRAM_BUCKETS];
                for &value in chunk {
                    local[bucket_index(value)] += 1;
                }
                local
            })
            .reduce(
                || [0usize; HISTOGRAM_BUCKETS],
                |mut a, b| {
                    for (total, count) in a.iter_mut().zip(b) {
                        *total += count;
                    }
                    a
                },
            );

        Self { counts }
    }

    pub fn counts(&self) -> &[usize; HISTOGRAM_BUCKETS] {
        &self.counts
    }

    /// Half-open depth range `[start, end)` covered by a bucket.
    pub fn bucket_range(index: usize) -> (usize, usize) {
        (
            index * HISTOGRAM_DEPTH_RANGE / HISTOGRAM_BUCKETS,
            (index + 1) * HISTOGRAM_DEPTH_RANGE / HISTOGRAM_BUCKETS,
        )
    }
}

/// Bucket for a depth value; anything at or beyond the range lands in the last bucket.
pub fn bucket_index(value: u16) -> usize {
    (value as usize * HISTOGRAM_BUCKETS / HISTOGRAM_DEPTH_RANGE).min(HISTOGRAM_BUCKETS - 1)
}

impl fmt::Display for DepthHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let max_count = self.counts.iter().copied().max().unwrap_or(0);

        writeln!(f, "Depth Histogram:")?;
        for (idx, &count) in self.counts.iter().enumerate() {
            let (start, end) = Self::bucket_range(idx);
            let bar_length = if max_count > 0 {
                count * HISTOGRAM_BAR_WIDTH / max_count
            } else {
                0
            };
            writeln!(
                f,
                "{:3} - {:3}  [{}{}]  {}",
                start,
                end,
                "|".repeat(bar_length),
                " ".repeat(HISTOGRAM_BAR_WIDTH - bar_length),
                count
            )?;
        }
        Ok(())
    }
}

/// Bucket the raw depth grid and render one bar line per bucket.
pub fn render_histogram(grid: &DepthGrid) -> String {
    DepthHistogram::from_grid(grid).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_depth_fills_a_single_bucket() {
        let grid = DepthGrid::from_values(16, 16, vec![128; 256]).unwrap();
        let histogram = DepthHistogram::from_grid(&grid);

        for (idx, &count) in histogram.counts().iter().enumerate() {
            if idx == bucket_index(128) {
                assert_eq!(count, 256);
            } else {
                assert_eq!(count, 0, "bucket {idx}");
            }
        }
        let (start, end) = DepthHistogram::bucket_range(bucket_index(128));
        assert!(start <= 128 && 128 < end);
    }

    #[test]
    fn edge_values_stay_in_range() {
        assert_eq!(bucket_index(0), 0);
        assert_eq!(bucket_index(12), 0);
        assert_eq!(bucket_index(13), 1);
        assert_eq!(bucket_index(255), HISTOGRAM_BUCKETS - 1);
        assert_eq!(bucket_index(u16::MAX), HISTOGRAM_BUCKETS - 1);
    }

    #[test]
    fn counts_large_grids_across_chunks() {
        let values: Vec<u16> = (0..100_000u32).map(|i| (i % 256) as u16).collect();
        let grid = DepthGrid::from_values(1000, 100, values).unwrap();
        let histogram = DepthHistogram::from_grid(&grid);
        assert_eq!(histogram.counts().iter().sum::<usize>(), 100_000);
    }

    #[test]
    fn renders_scaled_bars() {
        let grid = DepthGrid::from_values(3, 1, vec![0, 0, 255]).unwrap();
        let text = render_histogram(&grid);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), HISTOGRAM_BUCKETS + 1);
        assert_eq!(lines[0], "Depth Histogram:");
        assert_eq!(lines[1], format!("  0 -  12  [{}]  2", "|".repeat(50)));
        assert_eq!(
            lines[20],
            format!("243 - 256  [{}{}]  1", "|".repeat(25), " ".repeat(25))
        );
        assert_eq!(lines[2], format!(" 12 -  25  [{}]  0", " ".repeat(50)));
    }

    #[test]
    fn empty_grid_renders_empty_bars() {
        let grid = DepthGrid::from_values(0, 0, Vec::new()).unwrap();
        let text = render_histogram(&grid);
        assert!(text.lines().skip(1).all(|line| !line.contains('|')));
    }
}
