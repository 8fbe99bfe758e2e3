/// Circular cut applied to normalised points
use crate::error::{ExportError, ExportResult};
use crate::point::{NormalizedPoint3D, PointColour};

/// Keep points (and their paired colours) whose X/Y distance from the origin
/// is at most `radius`. Relative order of survivors is preserved.
pub fn filter_by_radius(
    points: &[NormalizedPoint3D],
    colours: &[PointColour],
    radius: f64,
) -> ExportResult<(Vec<NormalizedPoint3D>, Vec<PointColour>)> {
    if points.len() != colours.len() {
        return Err(ExportError::PairingMismatch {
            points: points.len(),
            colours: colours.len(),
        });
    }

    Ok(points
        .iter()
        .zip(colours)
        .filter(|(point, _)| point.planar_radius() <= radius)
        .map(|(point, colour)| (*point, *colour))
        .unzip())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(x: f64, y: f64) -> NormalizedPoint3D {
        NormalizedPoint3D { x, y, z: 0.3 }
    }

    #[test]
    fn keeps_only_points_inside_radius() {
        let points = [point(0.0, 0.0), point(0.4, 0.4)];
        let colours = [PointColour::new(1, 2, 3), PointColour::new(4, 5, 6)];

        let (kept, kept_colours) = filter_by_radius(&points, &colours, 0.1).unwrap();

        assert_eq!(kept, vec![point(0.0, 0.0)]);
        assert_eq!(kept_colours, vec![PointColour::new(1, 2, 3)]);
    }

    #[test]
    fn boundary_is_inclusive_and_ignores_z() {
        let points = [
            NormalizedPoint3D { x: 0.375, y: 0.5, z: 9.0 },
            point(-0.2, 0.1),
            point(0.7, 0.0),
        ];
        let colours = [
            PointColour::new(1, 1, 1),
            PointColour::new(2, 2, 2),
            PointColour::new(3, 3, 3),
        ];

        let (kept, kept_colours) = filter_by_radius(&points, &colours, 0.625).unwrap();

        assert_eq!(kept.len(), 2);
        assert_eq!(
            kept_colours,
            vec![PointColour::new(1, 1, 1), PointColour::new(2, 2, 2)]
        );
    }

    #[test]
    fn mismatched_pairing_is_an_error() {
        let result = filter_by_radius(&[point(0.0, 0.0)], &[], 1.0);
        assert!(matches!(
            result,
            Err(ExportError::PairingMismatch { points: 1, colours: 0 })
        ));
    }
}
