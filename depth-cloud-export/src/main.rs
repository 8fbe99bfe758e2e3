/// Depth map to point cloud exporter entry point
use clap::Parser;
use constants::sampling::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_DEPTH, DEFAULT_SAMPLE_COUNT};
use depth_cloud_export::depth_source::CropBox;
use depth_cloud_export::{DepthCloudExporter, ExportConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depth-cloud-export")]
#[command(about = "Extract a sparse coloured 3D point cloud from a depth map and its colour image")]
#[command(version)]
struct Cli {
    /// Colour image file
    #[arg(long)]
    input: PathBuf,

    /// Depth image aligned with the colour image (repeatable; only the first is used)
    #[arg(long = "depth", required = true)]
    depth: Vec<PathBuf>,

    /// Output file (.json, .las or .laz)
    #[arg(long)]
    output: PathBuf,

    /// Minimum depth value to consider
    #[arg(long, default_value_t = DEFAULT_MIN_DEPTH)]
    min_depth: u16,

    /// Maximum depth value to consider
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u16,

    /// Crop box applied to both images before sampling
    #[arg(long, num_args = 4, value_names = ["X", "Y", "WIDTH", "HEIGHT"])]
    crop: Option<Vec<u32>>,

    /// Number of 3D points to sample
    #[arg(long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    samples: usize,

    /// Print a depth histogram before sampling
    #[arg(long)]
    show_histogram: bool,

    /// Tint colour blended into every point
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"])]
    tint_color: Option<Vec<u8>>,

    /// Saturation level for colours
    #[arg(long, default_value_t = 1.0)]
    saturation_level: f64,

    /// Keep only points within this radius of the centre
    #[arg(long)]
    cut_circle: Option<f64>,

    /// Z scale factor
    #[arg(long, default_value_t = 1.0)]
    custom_scale_z: f64,
}

impl Cli {
    fn into_config(self) -> ExportConfig {
        let mut config = ExportConfig::new(self.input, self.depth, self.output);
        config.min_depth = self.min_depth;
        config.max_depth = self.max_depth;
        config.crop = self
            .crop
            .and_then(|c| match c.as_slice() {
                &[x, y, width, height] => Some(CropBox::new(x, y, width, height)),
                _ => None,
            });
        config.samples = self.samples;
        config.show_histogram = self.show_histogram;
        config.tint = self.tint_color.and_then(|c| match c.as_slice() {
            &[r, g, b] => Some([r, g, b]),
            _ => None,
        });
        config.saturation = self.saturation_level;
        config.cut_radius = self.cut_circle;
        config.z_scale = self.custom_scale_z;
        config
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Cli::parse().into_config();
    let exporter = DepthCloudExporter::new(config)?;
    exporter.convert()?;

    Ok(())
}
