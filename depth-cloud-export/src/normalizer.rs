/// Maps pixel-space samples into the centred, aspect-correct export space.
///
/// Stage order matters: X/Y are scaled first, Z is centred on the sampled
/// depth range, the X/Y centroid is moved to the origin using the scaled
/// values and the vertical axis is flipped last so later radial filtering
/// sees Y-up coordinates.
use crate::bounds::DepthBounds;
use crate::error::{ExportError, ExportResult};
use crate::point::{NormalizedPoint3D, PixelPoint3D};
use constants::coordinate_system::{NORMALISED_ORIGIN_OFFSET, VERTICAL_AXIS_SIGN};

pub fn normalize(
    points: &[PixelPoint3D],
    width: u32,
    height: u32,
    z_scale: f64,
) -> ExportResult<Vec<NormalizedPoint3D>> {
    let Some(bounds) = DepthBounds::from_points(points) else {
        return Ok(Vec::new());
    };

    if width == 0 || height == 0 {
        return Err(ExportError::InvalidParameter {
            name: "image size",
            reason: format!("{}x{} has no area", width, height),
        });
    }
    if bounds.max_z == 0.0 {
        return Err(ExportError::DegenerateDepthRange);
    }

    let width = width as f64;
    let height = height as f64;
    let aspect_ratio = width / height;
    let move_z = bounds.z_centre_offset();

    let mut normalized: Vec<NormalizedPoint3D> = points
        .iter()
        .map(|p| NormalizedPoint3D {
            x: (p.x / width * aspect_ratio) - NORMALISED_ORIGIN_OFFSET,
            y: (p.y / height) - NORMALISED_ORIGIN_OFFSET,
            z: ((p.z / bounds.max_z) - move_z) * z_scale,
        })
        .collect();

    let count = normalized.len() as f64;
    let avg_x = normalized.iter().map(|p| p.x).sum::<f64>() / count;
    let avg_y = normalized.iter().map(|p| p.y).sum::<f64>() / count;

    for point in &mut normalized {
        point.x -= avg_x;
        point.y = (point.y - avg_y) * VERTICAL_AXIS_SIGN;
    }

    Ok(normalized)
}
