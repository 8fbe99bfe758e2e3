/// Bounded rejection sampling of pixel points from a depth grid.
///
/// Each round draws `target` uniform pixel positions over the whole grid,
/// drops those whose depth falls outside the configured window, keeps at most
/// the number of slots still open and accepts each survivor unless an already
/// accepted point lies closer than the minimum separation. Acceptance is
/// checked against the cumulative accepted set, so earlier candidates in a
/// round shape what later ones may take. The result is order dependent and
/// not a globally optimal packing.
use crate::error::{ExportError, ExportResult};
use crate::grid::DepthGrid;
use crate::point::PixelPoint3D;
use constants::sampling::{MIN_SEPARATION, SAMPLING_ROUNDS};
use indicatif::ProgressBar;
use rand::Rng;
use std::collections::HashMap;
use tracing::debug;

/// Counters describing how a sampling run went.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SamplingReport {
    pub rounds: usize,
    pub candidates_in_range: usize,
    pub rejected_by_separation: usize,
}

#[derive(Debug, Clone)]
pub struct PointSampler {
    min_depth: u16,
    max_depth: u16,
    separation: f64,
    max_rounds: usize,
}

impl PointSampler {
    /// Sampler accepting depths in `[min_depth, max_depth]`.
    pub fn new(min_depth: u16, max_depth: u16) -> ExportResult<Self> {
        if min_depth >= max_depth {
            return Err(ExportError::InvalidDepthRange {
                min: min_depth,
                max: max_depth,
            });
        }
        Ok(Self {
            min_depth,
            max_depth,
            separation: MIN_SEPARATION,
            max_rounds: SAMPLING_ROUNDS,
        })
    }

    fn in_range(&self, depth: u16) -> bool {
        depth >= self.min_depth && depth <= self.max_depth
    }

    /// Draw up to `target` well-separated points from `grid`.
    pub fn sample<R: Rng>(
        &self,
        grid: &DepthGrid,
        target: usize,
        rng: &mut R,
        progress: &ProgressBar,
    ) -> (Vec<PixelPoint3D>, SamplingReport) {
        let mut accepted: Vec<PixelPoint3D> = Vec::with_capacity(target);
        let mut report = SamplingReport::default();

        if grid.width() == 0 || grid.height() == 0 {
            return (accepted, report);
        }

        let mut index = SeparationGrid::new(self.separation);
        let width = grid.width() as f64;
        let height = grid.height() as f64;

        progress.set_length(target as u64);

        while accepted.len() < target && report.rounds < self.max_rounds {
            report.rounds += 1;
            let open_slots = target - accepted.len();

            let candidates: Vec<PixelPoint3D> = (0..target)
                .map(|_| {
                    let x = rng.random_range(0.0..width);
                    let y = rng.random_range(0.0..height);
                    let px = (x as u32).min(grid.width() - 1);
                    let py = (y as u32).min(grid.height() - 1);
                    (x, y, grid.depth_at(px, py))
                })
                .filter(|&(_, _, depth)| self.in_range(depth))
                .take(open_slots)
                .map(|(x, y, depth)| PixelPoint3D::new(x, y, depth as f64))
                .collect();

            report.candidates_in_range += candidates.len();

            let before = accepted.len();
            for candidate in candidates {
                if index.has_close_neighbour(&candidate, &accepted) {
                    report.rejected_by_separation += 1;
                    continue;
                }
                index.insert(&candidate, accepted.len());
                accepted.push(candidate);
            }

            debug!(
                round = report.rounds,
                accepted_this_round = accepted.len() - before,
                total = accepted.len(),
                "Sampling round finished"
            );
            progress.set_position(accepted.len() as u64);
        }

        (accepted, report)
    }
}

/// Sample with a fresh thread-local generator and no progress output.
pub fn sample_points(
    grid: &DepthGrid,
    target: usize,
    min_depth: u16,
    max_depth: u16,
) -> ExportResult<Vec<PixelPoint3D>> {
    let sampler = PointSampler::new(min_depth, max_depth)?;
    let (points, _) = sampler.sample(grid, target, &mut rand::rng(), &ProgressBar::hidden());
    Ok(points)
}

/// Hash grid over (x, y, depth) with cells as wide as the separation distance.
/// Any point closer than one cell edge lives in one of the 27 surrounding
/// cells, so probing those gives the same answer as a scan over every
/// accepted point.
struct SeparationGrid {
    cell_size: f64,
    separation: f64,
    cells: HashMap<(i64, i64, i64), Vec<usize>>,
}

impl SeparationGrid {
    fn new(separation: f64) -> Self {
        Self {
            cell_size: separation,
            separation,
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, point: &PixelPoint3D) -> (i64, i64, i64) {
        (
            (point.x / self.cell_size).floor() as i64,
            (point.y / self.cell_size).floor() as i64,
            (point.z / self.cell_size).floor() as i64,
        )
    }

    fn insert(&mut self, point: &PixelPoint3D, index: usize) {
        let cell = self.cell_of(point);
        self.cells.entry(cell).or_default().push(index);
    }

    /// True when an accepted point lies at a distance in (0, separation).
    /// A coincident point (distance 0) does not count.
    fn has_close_neighbour(&self, candidate: &PixelPoint3D, accepted: &[PixelPoint3D]) -> bool {
        let (cx, cy, cz) = self.cell_of(candidate);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let Some(members) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) else {
                        continue;
                    };
                    let close = members.iter().any(|&i| {
                        let distance = candidate.distance(&accepted[i]);
                        distance > 0.0 && distance < self.separation
                    });
                    if close {
                        return true;
                    }
                }
            }
        }
        false
    }
}
