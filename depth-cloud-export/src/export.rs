/// Point cloud output: compact JSON records or a coloured LAS/LAZ file.
use crate::error::{ExportError, ExportResult};
use crate::point::{NormalizedPoint3D, PointColour, SampledPoint};
use constants::export::{LAS_COLOUR_SCALE, LAS_COORDINATE_SCALE};
use las::{Builder, Color, Point, Writer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// One exported point: position plus `#rrggbb` colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointRecord {
    pub p: [f64; 3],
    pub c: String,
}

impl From<&SampledPoint<NormalizedPoint3D>> for PointRecord {
    fn from(sample: &SampledPoint<NormalizedPoint3D>) -> Self {
        Self {
            p: sample.point.to_array(),
            c: sample.colour.to_hex(),
        }
    }
}

/// Output encodings, chosen from the output file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Las { compressed: bool },
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match extension.as_deref() {
            Some("las") => OutputFormat::Las { compressed: false },
            Some("laz") => OutputFormat::Las { compressed: true },
            _ => OutputFormat::Json,
        }
    }
}

/// Zip points with their colours, refusing to pair sequences of different length.
pub fn pair_samples(
    points: Vec<NormalizedPoint3D>,
    colours: Vec<PointColour>,
) -> ExportResult<Vec<SampledPoint<NormalizedPoint3D>>> {
    if points.len() != colours.len() {
        return Err(ExportError::PairingMismatch {
            points: points.len(),
            colours: colours.len(),
        });
    }
    Ok(points
        .into_iter()
        .zip(colours)
        .map(|(point, colour)| SampledPoint { point, colour })
        .collect())
}

/// Write samples in the format implied by `path`.
pub fn write_samples(
    path: &Path,
    samples: &[SampledPoint<NormalizedPoint3D>],
) -> ExportResult<OutputFormat> {
    let format = OutputFormat::from_path(path);
    match format {
        OutputFormat::Json => write_json(path, samples)?,
        OutputFormat::Las { compressed } => write_las(path, samples, compressed)?,
    }
    info!(points = samples.len(), path = %path.display(), ?format, "Exported points");
    Ok(format)
}

/// Single-line JSON array of `{"p": [x, y, z], "c": "#rrggbb"}` records.
pub fn write_json(path: &Path, samples: &[SampledPoint<NormalizedPoint3D>]) -> ExportResult<()> {
    let records: Vec<PointRecord> = samples.iter().map(PointRecord::from).collect();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, &records)?;
    writer.flush()?;
    Ok(())
}

pub fn write_las(
    path: &Path,
    samples: &[SampledPoint<NormalizedPoint3D>],
    compressed: bool,
) -> ExportResult<()> {
    let mut builder = Builder::from((1, 4));
    builder.point_format.has_color = true;
    builder.point_format.is_compressed = compressed;

    let transform = || las::Transform {
        scale: LAS_COORDINATE_SCALE,
        offset: 0.0,
    };
    builder.transforms = las::Vector {
        x: transform(),
        y: transform(),
        z: transform(),
    };

    let header = builder.into_header()?;
    let mut writer = Writer::from_path(path, header)?;

    for sample in samples {
        let [r, g, b] = sample.colour.clamped().map(|c| c as u16 * LAS_COLOUR_SCALE);
        let mut point = Point::default();
        point.x = sample.point.x;
        point.y = sample.point.y;
        point.z = sample.point.z;
        point.color = Some(Color::new(r, g, b));
        writer.write_point(point)?;
    }

    writer.close()?;
    Ok(())
}

/// Counts reported at the end of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub requested: usize,
    pub accepted: usize,
    pub exported: usize,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(x: f64, colour: PointColour) -> SampledPoint<NormalizedPoint3D> {
        SampledPoint {
            point: NormalizedPoint3D { x, y: -x, z: 0.25 },
            colour,
        }
    }

    #[test]
    fn record_serialises_compactly() {
        let record = PointRecord::from(&sample(0.5, PointColour::new(255, 0, 16)));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r##"{"p":[0.5,-0.5,0.25],"c":"#ff0010"}"##);
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("a/cloud.json")), OutputFormat::Json);
        assert_eq!(OutputFormat::from_path(Path::new("cloud")), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_path(Path::new("cloud.LAS")),
            OutputFormat::Las { compressed: false }
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("cloud.laz")),
            OutputFormat::Las { compressed: true }
        );
    }

    #[test]
    fn pairing_requires_equal_lengths() {
        let points = vec![NormalizedPoint3D { x: 0.0, y: 0.0, z: 0.0 }];
        assert!(matches!(
            pair_samples(points.clone(), Vec::new()),
            Err(ExportError::PairingMismatch { points: 1, colours: 0 })
        ));

        let paired = pair_samples(points, vec![PointColour::new(1, 2, 3)]).unwrap();
        assert_eq!(paired[0].colour, PointColour::new(1, 2, 3));
    }
}
