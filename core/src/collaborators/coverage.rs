use super::CoverageComputer;
use crate::types::ImageHeader;

/// Scan coverage from per-image slice positions
///
/// Coverage is the distance between the lowest and highest image along
/// the scan axis. Needs at least two positioned images and a positive
/// extent; anything else yields `None`.
///
/// One position source is used for the whole series: the z component of
/// ImagePositionPatient when every positioned image carries it, otherwise
/// SliceLocation. The two are not in the same frame and are never mixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlicePositionCoverage;

impl CoverageComputer for SlicePositionCoverage {
    fn compute_scan_coverage(&self, images: &[ImageHeader]) -> Option<f64> {
        let mut positions = scan_axis_positions(images).into_iter();
        let first = positions.next()?;

        let (min, max, count) = positions.fold((first, first, 1usize), |(lo, hi, n), z| {
            (lo.min(z), hi.max(z), n + 1)
        });

        let extent = max - min;
        if count < 2 || !extent.is_finite() || extent <= 0.0 {
            return None;
        }
        Some(extent)
    }
}

fn scan_axis_positions(images: &[ImageHeader]) -> Vec<f64> {
    let use_image_position = images
        .iter()
        .filter(|image| image.is_positioned())
        .all(|image| image.image_position_patient.is_some());

    images
        .iter()
        .filter_map(|image| {
            if use_image_position {
                image.z_position()
            } else {
                image.slice_location
            }
        })
        .filter(|z| z.is_finite())
        .collect()
}
