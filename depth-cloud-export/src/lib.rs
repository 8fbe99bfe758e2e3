//! Converts a depth map and its aligned colour image into a sparse, coloured,
//! normalised point cloud.
//!
//! Pipeline: [`depth_source`] -> [`sampler`] -> [`colour`] -> [`normalizer`]
//! -> [`radial_mask`] -> [`export`], driven by [`exporter::DepthCloudExporter`].
pub mod bounds;
pub mod colour;
pub mod config;
pub mod depth_source;
pub mod error;
pub mod export;
pub mod exporter;
pub mod grid;
pub mod histogram;
pub mod normalizer;
pub mod point;
pub mod radial_mask;
pub mod sampler;

pub use config::ExportConfig;
pub use error::{ExportError, ExportResult};
pub use exporter::DepthCloudExporter;
