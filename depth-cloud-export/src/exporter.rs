/// Depth map to coloured point cloud exporter orchestrating the pipeline
use crate::colour::assign_adjusted_colours;
use crate::config::ExportConfig;
use crate::depth_source::{DepthSource, ImageFileSource, ImagePair};
use crate::error::{ExportError, ExportResult};
use crate::export::{ExportSummary, pair_samples, write_samples};
use crate::histogram::DepthHistogram;
use crate::normalizer::normalize;
use crate::point::{NormalizedPoint3D, SampledPoint};
use crate::radial_mask::filter_by_radius;
use crate::sampler::PointSampler;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use tracing::{info, warn};

/// Runs one export: decode, crop, sample, colour, normalise, cut and write.
pub struct DepthCloudExporter {
    config: ExportConfig,
    show_progress: bool,
}

impl DepthCloudExporter {
    /// Validates the configuration up front so nothing is sampled on a bad range.
    pub fn new(config: ExportConfig) -> ExportResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            show_progress: true,
        })
    }

    /// Enable or disable the terminal progress bar.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Export the configured image files to the configured output path.
    pub fn convert(&self) -> ExportResult<ExportSummary> {
        let source = ImageFileSource::new(&self.config.input, &self.config.depth_inputs);
        self.convert_source(&source, &mut rand::rng())
    }

    /// Export from any depth source using the supplied random generator.
    pub fn convert_source<S: DepthSource, R: Rng>(
        &self,
        source: &S,
        rng: &mut R,
    ) -> ExportResult<ExportSummary> {
        let (samples, summary) = self.build_cloud(source, rng)?;
        write_samples(&self.config.output, &samples)?;
        self.print_summary(&summary);
        Ok(summary)
    }

    /// Run the pipeline without writing anything.
    pub fn build_cloud<S: DepthSource, R: Rng>(
        &self,
        source: &S,
        rng: &mut R,
    ) -> ExportResult<(Vec<SampledPoint<NormalizedPoint3D>>, ExportSummary)> {
        let pair = self.select_pair(source)?;
        let pair = match &self.config.crop {
            Some(crop) => {
                info!(corners = ?crop.corners(), "Cropping images to box");
                pair.crop(crop)?
            }
            None => pair,
        };

        let (depth_grid, colour_grid) = pair.grids();
        let (width, height) = (depth_grid.width(), depth_grid.height());

        if self.config.show_histogram {
            print!("{}", DepthHistogram::from_grid(&depth_grid));
        }

        let sampler = PointSampler::new(self.config.min_depth, self.config.max_depth)?;
        let progress = self.create_progress_bar();
        let (points, report) = sampler.sample(&depth_grid, self.config.samples, rng, &progress);
        progress.finish_with_message("Points sampled");

        info!(
            accepted = points.len(),
            requested = self.config.samples,
            rounds = report.rounds,
            rejected = report.rejected_by_separation,
            "Sampling complete"
        );
        if points.len() < self.config.samples {
            warn!(
                missing = self.config.samples - points.len(),
                "Fewer points than requested satisfied the depth window and separation"
            );
        }

        let colours =
            assign_adjusted_colours(&points, &colour_grid, &self.config.colour_adjustments());
        let normalized = normalize(&points, width, height, self.config.z_scale)?;

        let (normalized, colours) = match self.config.active_cut_radius() {
            Some(radius) => {
                info!(radius, "Cutting circle");
                let (kept, kept_colours) = filter_by_radius(&normalized, &colours, radius)?;
                info!(remaining = kept.len(), "Points remaining after cut");
                (kept, kept_colours)
            }
            None => (normalized, colours),
        };

        let samples = pair_samples(normalized, colours)?;
        let summary = ExportSummary {
            requested: self.config.samples,
            accepted: points.len(),
            exported: samples.len(),
            width,
            height,
        };

        Ok((samples, summary))
    }

    /// Only the first depth-bearing image is processed.
    fn select_pair<S: DepthSource>(&self, source: &S) -> ExportResult<ImagePair> {
        let pairs = source.decode()?;
        info!(count = pairs.len(), "Depth images found");

        let mut pairs = pairs.into_iter();
        let first = pairs.next().ok_or(ExportError::NoDepthSource)?;
        info!(skipped = pairs.count(), "Taking the first depth image for processing");
        Ok(first)
    }

    fn create_progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(self.config.samples as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{bar:40.green/blue}] {pos}/{len} points ({percent}%) {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Sampling points");
        pb
    }

    /// Print export statistics for verification.
    fn print_summary(&self, summary: &ExportSummary) {
        info!(
            requested = summary.requested,
            accepted = summary.accepted,
            exported = summary.exported,
            width = summary.width,
            height = summary.height,
            output = %self.config.output.display(),
            "Export complete"
        );
    }
}
