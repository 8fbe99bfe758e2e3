/// Validated configuration for one export run
use crate::colour::ColourAdjustments;
use crate::depth_source::CropBox;
use crate::error::{ExportError, ExportResult};
use constants::sampling::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_DEPTH, DEFAULT_SAMPLE_COUNT};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Colour image path.
    pub input: PathBuf,
    /// Depth layers aligned with `input`; only the first is processed.
    pub depth_inputs: Vec<PathBuf>,
    /// JSON output, or LAS/LAZ when the extension says so.
    pub output: PathBuf,
    pub min_depth: u16,
    pub max_depth: u16,
    pub crop: Option<CropBox>,
    pub samples: usize,
    pub show_histogram: bool,
    pub tint: Option<[u8; 3]>,
    pub saturation: f64,
    /// Radius of the circular cut in normalised space.
    pub cut_radius: Option<f64>,
    pub z_scale: f64,
}

impl ExportConfig {
    pub fn new(input: PathBuf, depth_inputs: Vec<PathBuf>, output: PathBuf) -> Self {
        Self {
            input,
            depth_inputs,
            output,
            min_depth: DEFAULT_MIN_DEPTH,
            max_depth: DEFAULT_MAX_DEPTH,
            crop: None,
            samples: DEFAULT_SAMPLE_COUNT,
            show_histogram: false,
            tint: None,
            saturation: 1.0,
            cut_radius: None,
            z_scale: 1.0,
        }
    }

    /// Check the configuration before any image is touched.
    pub fn validate(&self) -> ExportResult<()> {
        if self.min_depth >= self.max_depth {
            return Err(ExportError::InvalidDepthRange {
                min: self.min_depth,
                max: self.max_depth,
            });
        }
        if !self.saturation.is_finite() {
            return Err(invalid("saturation level", "must be finite"));
        }
        if !self.z_scale.is_finite() {
            return Err(invalid("z scale", "must be finite"));
        }
        if let Some(radius) = self.cut_radius {
            if !radius.is_finite() || radius < 0.0 {
                return Err(invalid("cut radius", "must be a non-negative number"));
            }
        }
        Ok(())
    }

    /// Cut radius to apply, if any. A zero radius counts as no cut.
    pub fn active_cut_radius(&self) -> Option<f64> {
        self.cut_radius.filter(|&radius| radius > 0.0)
    }

    pub fn colour_adjustments(&self) -> ColourAdjustments {
        ColourAdjustments {
            tint: self.tint,
            saturation: self.saturation,
        }
    }
}

fn invalid(name: &'static str, reason: &str) -> ExportError {
    ExportError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}
