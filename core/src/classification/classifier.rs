use super::rules::{
    contrast_for, first_coverage_match, first_match, first_text_match, ANATOMY_COVERAGE_RULES,
    ANATOMY_TEXT_RULES, ORIENTATION_RULES, RECONSTRUCTION_WINDOW_RULES,
};
use crate::collaborators::{
    CoverageComputer, LocalizerDetector, PatternLocalizerDetector, SlicePositionCoverage,
};
use crate::error::{CtClassError, Result};
use crate::types::{
    Acquisition, Anatomy, ClassificationResult, Classifications, ImageHeader, ScanType,
    SeriesHeader, SeriesInfo,
};
use log::debug;

/// Series with fewer images than this are treated as localizers
pub const MIN_SERIES_IMAGES: usize = 10;

/// Classifies a CT series with the default collaborators
///
/// Shorthand for [`CtClassifier::new`] followed by [`CtClassifier::classify`].
pub fn classify_ct(
    images: &[ImageHeader],
    header: &SeriesHeader,
    acquisition: &Acquisition,
) -> Result<ClassificationResult> {
    CtClassifier::new().classify(images, header, acquisition)
}

/// Average distance between slices, rounded to 2 decimals
///
/// Exact halves round to even, so 1.125 becomes 1.12.
pub fn spacing_between_slices(scan_coverage: f64, image_count: usize) -> f64 {
    let spacing = scan_coverage / image_count as f64;
    (spacing * 100.0).round_ties_even() / 100.0
}

/// Rule-based CT series classifier
///
/// Stateless: every call to [`classify`](Self::classify) builds a fresh
/// result from its inputs. The localizer check and the coverage
/// measurement are delegated to `L` and `C`.
///
/// # Example
///
/// ```
/// use ctclass_core::{Acquisition, CtClassifier, ImageHeader, ImageType, SeriesHeader};
///
/// let images: Vec<ImageHeader> = (0..40)
///     .map(|i| ImageHeader {
///         image_position_patient: Some([0.0, 0.0, i as f64 * 25.0]),
///         ..Default::default()
///     })
///     .collect();
/// let header = SeriesHeader::new(
///     Some("Body 5.0".to_string()),
///     ImageType::from_values(&["ORIGINAL", "PRIMARY", "AXIAL"]),
/// );
///
/// let result = CtClassifier::new()
///     .classify(&images, &header, &Acquisition::new("AXIAL w^IV"))
///     .unwrap();
///
/// // 39 gaps of 25mm: chest/abdomen/pelvis coverage
/// assert_eq!(result.info.scan_coverage, Some(975.0));
/// assert_eq!(result.classifications.anatomy.unwrap().len(), 3);
/// assert_eq!(result.classifications.contrast.unwrap().label(), "With Contrast");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CtClassifier<L = PatternLocalizerDetector, C = SlicePositionCoverage> {
    localizer: L,
    coverage: C,
}

impl CtClassifier {
    /// Creates a classifier with the default collaborators
    pub fn new() -> Self {
        Self::default()
    }
}

impl<L: LocalizerDetector, C: CoverageComputer> CtClassifier<L, C> {
    /// Creates a classifier with custom collaborators
    pub fn with_collaborators(localizer: L, coverage: C) -> Self {
        Self {
            localizer,
            coverage,
        }
    }

    /// Classifies one CT series
    ///
    /// Localizers (by name, or with fewer than [`MIN_SERIES_IMAGES`]
    /// images) return immediately with only a scan type. Every other
    /// category is decided independently; undetermined ones stay `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CtClassError::MissingRequiredField`] if a non-localizer
    /// series has no ImageType.
    pub fn classify(
        &self,
        images: &[ImageHeader],
        header: &SeriesHeader,
        acquisition: &Acquisition,
    ) -> Result<ClassificationResult> {
        let label = acquisition.label.as_str();
        let description = header.description();

        if self.is_localizer(images, label, description) {
            return Ok(ClassificationResult {
                classifications: Classifications::localizer(),
                info: SeriesInfo::default(),
            });
        }

        let image_type = header
            .image_type
            .as_ref()
            .ok_or_else(|| CtClassError::MissingRequiredField("ImageType".to_string()))?;

        let mut classifications = Classifications::default();
        let mut info = SeriesInfo::default();

        if image_type.is_derived() {
            classifications.scan_type = Some(ScanType::Derived);
        }

        // Derived series lack the geometry for a meaningful coverage
        let scan_coverage = if image_type.is_original() {
            self.coverage
                .compute_scan_coverage(images)
                .filter(|c| c.is_finite())
        } else {
            None
        };
        // A zero coverage still feeds the anatomy fallback but is not reported
        let reported_coverage = scan_coverage.filter(|c| *c != 0.0);
        info.scan_coverage = reported_coverage;

        info.reconstruction_window = first_match(RECONSTRUCTION_WINDOW_RULES, label);

        let sources = [label, description];
        info.scan_orientation = first_text_match(ORIENTATION_RULES, &sources);

        classifications.anatomy = first_text_match(ANATOMY_TEXT_RULES, &sources)
            .or_else(|| first_coverage_match(ANATOMY_COVERAGE_RULES, scan_coverage))
            .map(<[Anatomy]>::to_vec);

        classifications.contrast = sources.iter().find_map(|text| contrast_for(text));

        info.spacing_between_slices =
            reported_coverage.map(|coverage| spacing_between_slices(coverage, images.len()));

        debug!(
            "Classified series '{}' ({} images): {:?}, {:?}",
            label,
            images.len(),
            classifications,
            info
        );

        Ok(ClassificationResult {
            classifications,
            info,
        })
    }

    fn is_localizer(&self, images: &[ImageHeader], label: &str, description: &str) -> bool {
        if self.localizer.is_localizer(label) || self.localizer.is_localizer(description) {
            debug!("Localizer by name: label='{}' description='{}'", label, description);
            return true;
        }
        if images.len() < MIN_SERIES_IMAGES {
            debug!("Localizer by image count: {}", images.len());
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Contrast, ImageType, ReconstructionWindow, ScanOrientation};
    use rstest::rstest;
    use std::cell::Cell;

    /// Coverage stub returning a fixed value and counting calls
    struct FixedCoverage {
        value: Option<f64>,
        calls: Cell<usize>,
    }

    impl FixedCoverage {
        fn new(value: Option<f64>) -> Self {
            Self {
                value,
                calls: Cell::new(0),
            }
        }
    }

    impl CoverageComputer for FixedCoverage {
        fn compute_scan_coverage(&self, _images: &[ImageHeader]) -> Option<f64> {
            self.calls.set(self.calls.get() + 1);
            self.value
        }
    }

    fn classifier(coverage: Option<f64>) -> CtClassifier<PatternLocalizerDetector, FixedCoverage> {
        CtClassifier::with_collaborators(PatternLocalizerDetector, FixedCoverage::new(coverage))
    }

    fn images(count: usize) -> Vec<ImageHeader> {
        (0..count)
            .map(|i| ImageHeader {
                instance_number: Some(i as i32 + 1),
                ..Default::default()
            })
            .collect()
    }

    fn header(description: &str, pixels: &str) -> SeriesHeader {
        SeriesHeader::new(
            Some(description.to_string()),
            ImageType::from_values(&[pixels, "PRIMARY", "AXIAL"]),
        )
    }

    fn run(
        coverage: Option<f64>,
        count: usize,
        label: &str,
        description: &str,
    ) -> ClassificationResult {
        classifier(coverage)
            .classify(
                &images(count),
                &header(description, "ORIGINAL"),
                &Acquisition::new(label),
            )
            .unwrap()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(9)]
    fn test_too_few_images_is_localizer(#[case] count: usize) {
        let result = run(Some(1000.0), count, "CHEST w^IV ARTERIAL bone window", "AXIAL");
        assert_eq!(result.classifications, Classifications::localizer());
        assert_eq!(result.info, SeriesInfo::default());
    }

    #[test]
    fn test_localizer_by_label_or_description() {
        let by_label = run(Some(1000.0), 50, "Topogram 0.6", "CHEST");
        assert_eq!(by_label.classifications, Classifications::localizer());
        assert!(by_label.info.is_empty());

        let by_description = run(Some(1000.0), 50, "CHEST", "Scout");
        assert_eq!(by_description.classifications, Classifications::localizer());
    }

    #[test]
    fn test_localizer_does_not_need_image_type() {
        let result = classify_ct(
            &images(3),
            &SeriesHeader::default(),
            &Acquisition::default(),
        )
        .unwrap();
        assert_eq!(result.classifications.scan_type, Some(ScanType::Localizer));
    }

    #[test]
    fn test_missing_image_type_is_an_error() {
        let err = classify_ct(
            &images(20),
            &SeriesHeader::new(Some("CHEST".to_string()), None),
            &Acquisition::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CtClassError::MissingRequiredField(ref f) if f == "ImageType"));
    }

    #[test]
    fn test_reference_scenario() {
        let result = run(Some(400.0), 50, "AXIAL CHEST w^IV ARTERIAL", "");
        let map = result.classifications.to_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map[&Category::Anatomy], vec!["Chest"]);
        assert_eq!(map[&Category::Contrast], vec!["Arterial Phase"]);
        assert_eq!(result.info.scan_orientation, Some(ScanOrientation::Axial));
        assert_eq!(result.info.scan_coverage, Some(400.0));
        assert_eq!(result.info.spacing_between_slices, Some(8.0));
        assert_eq!(result.info.reconstruction_window, None);
    }

    #[test]
    fn test_derived_series_has_no_coverage() {
        let coverage = FixedCoverage::new(Some(1000.0));
        let classifier = CtClassifier::with_collaborators(PatternLocalizerDetector, coverage);
        let result = classifier
            .classify(&images(30), &header("", "DERIVED"), &Acquisition::new("MIP"))
            .unwrap();

        assert_eq!(result.classifications.scan_type, Some(ScanType::Derived));
        assert_eq!(result.info.scan_coverage, None);
        assert_eq!(result.info.spacing_between_slices, None);
        // No coverage means no numeric anatomy fallback either
        assert_eq!(result.classifications.anatomy, None);
        assert_eq!(classifier.coverage.calls.get(), 0);
    }

    #[test]
    fn test_other_pixel_values_get_neither_derived_nor_coverage() {
        let result = classifier(Some(1000.0))
            .classify(&images(30), &header("", "UNKNOWN"), &Acquisition::default())
            .unwrap();
        assert_eq!(result.classifications.scan_type, None);
        assert_eq!(result.info.scan_coverage, None);
    }

    #[test]
    fn test_derived_does_not_short_circuit() {
        let result = classifier(None)
            .classify(
                &images(30),
                &header("Sag MPR", "DERIVED"),
                &Acquisition::new("ABD w^o"),
            )
            .unwrap();
        assert_eq!(result.classifications.scan_type, Some(ScanType::Derived));
        assert_eq!(result.classifications.anatomy, Some(vec![Anatomy::Abdomen]));
        assert_eq!(result.classifications.contrast, Some(Contrast::NoContrast));
        assert_eq!(result.info.scan_orientation, Some(ScanOrientation::Sagittal));
    }

    #[test]
    fn test_cap_coverage_gives_three_labels() {
        let result = run(Some(1000.0), 100, "Body 5.0", "");
        assert_eq!(
            result.classifications.anatomy,
            Some(vec![Anatomy::Chest, Anatomy::Abdomen, Anatomy::Pelvis])
        );
        assert_eq!(result.info.spacing_between_slices, Some(10.0));
    }

    #[rstest]
    #[case(Some(250.0))]
    #[case(Some(800.0))]
    #[case(Some(1300.0))]
    #[case(None)]
    fn test_coverage_boundaries_leave_anatomy_undetermined(#[case] coverage: Option<f64>) {
        let result = run(coverage, 40, "Body 5.0", "Routine");
        assert_eq!(result.classifications.anatomy, None);
        assert!(result.classifications.labels(Category::Anatomy).is_none());
    }

    #[rstest]
    #[case(Some(180.0), Anatomy::Head)]
    #[case(Some(1800.0), Anatomy::WholeBody)]
    fn test_coverage_fallback(#[case] coverage: Option<f64>, #[case] expected: Anatomy) {
        let result = run(coverage, 40, "Routine", "");
        assert_eq!(result.classifications.anatomy, Some(vec![expected]));
    }

    #[test]
    fn test_text_anatomy_beats_coverage() {
        let result = run(Some(120.0), 40, "", "Abdomen");
        assert_eq!(result.classifications.anatomy, Some(vec![Anatomy::Abdomen]));
    }

    #[test]
    fn test_label_anatomy_beats_description_anatomy() {
        // Pelvis in the label wins over chest in the description
        let result = run(None, 40, "PELVIS 3mm", "CHEST");
        assert_eq!(result.classifications.anatomy, Some(vec![Anatomy::Pelvis]));
    }

    #[rstest]
    #[case("CT w^IV", "", Contrast::WithContrast)]
    #[case("w^IV ARTERIAL DELAYED", "", Contrast::ArterialPhase)]
    #[case("w^IV DELAYED portal venous", "", Contrast::DelayedPhase)]
    #[case("w^IV portal venous", "", Contrast::PortalVenousPhase)]
    #[case("w^o", "w^IV arterial", Contrast::NoContrast)]
    #[case("routine", "w^IV arterial", Contrast::ArterialPhase)]
    #[case("w^IV", "w^o", Contrast::WithContrast)]
    #[case("arterial", "w^o", Contrast::NoContrast)]
    fn test_contrast_decision(
        #[case] label: &str,
        #[case] description: &str,
        #[case] expected: Contrast,
    ) {
        let result = run(None, 40, label, description);
        assert_eq!(result.classifications.contrast, Some(expected));
    }

    #[test]
    fn test_phase_without_contrast_marker_is_undetermined() {
        let result = run(None, 40, "ARTERIAL", "venous");
        assert_eq!(result.classifications.contrast, None);
    }

    #[rstest]
    #[case("Bone Window", "", Some(ReconstructionWindow::Bone))]
    #[case("lung window bone window", "", Some(ReconstructionWindow::Bone))]
    #[case("Lung Window", "", Some(ReconstructionWindow::Lung))]
    #[case("", "bone window", None)]
    fn test_reconstruction_window_from_label_only(
        #[case] label: &str,
        #[case] description: &str,
        #[case] expected: Option<ReconstructionWindow>,
    ) {
        let result = run(None, 40, label, description);
        assert_eq!(result.info.reconstruction_window, expected);
    }

    #[rstest]
    #[case("Sag", "AXIAL", Some(ScanOrientation::Sagittal))]
    #[case("", "Cor 3mm", Some(ScanOrientation::Coronal))]
    #[case("Trans 1mm", "Sag", Some(ScanOrientation::Axial))]
    #[case("Body", "Routine", None)]
    fn test_orientation_label_before_description(
        #[case] label: &str,
        #[case] description: &str,
        #[case] expected: Option<ScanOrientation>,
    ) {
        let result = run(None, 40, label, description);
        assert_eq!(result.info.scan_orientation, expected);
    }

    #[test]
    fn test_missing_description_is_empty() {
        let result = classifier(None)
            .classify(
                &images(12),
                &SeriesHeader::new(None, ImageType::from_values(&["ORIGINAL"])),
                &Acquisition::default(),
            )
            .unwrap();
        assert!(result.classifications.is_empty());
        assert!(result.info.is_empty());
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = run(Some(950.0), 64, "CHEST w^IV venous", "Cor");
        let second = run(Some(950.0), 64, "CHEST w^IV venous", "Cor");
        assert_eq!(first, second);
    }

    #[rstest]
    #[case(333.0, 7, 47.57)]
    #[case(1000.0, 3, 333.33)]
    #[case(500.0, 200, 2.5)]
    #[case(112.5, 100, 1.12)]
    #[case(262.5, 20, 13.12)]
    #[case(337.5, 100, 3.38)]
    fn test_spacing_between_slices_rounds_to_two_decimals(
        #[case] coverage: f64,
        #[case] count: usize,
        #[case] expected: f64,
    ) {
        assert_eq!(spacing_between_slices(coverage, count), expected);
    }

    #[test]
    fn test_zero_coverage_is_not_reported_but_reaches_anatomy() {
        let result = run(Some(0.0), 20, "Routine", "");
        assert_eq!(result.info.scan_coverage, None);
        assert_eq!(result.info.spacing_between_slices, None);
        assert!(result.info.is_empty());
        assert_eq!(result.classifications.anatomy, Some(vec![Anatomy::Head]));
    }

    #[test]
    fn test_default_coverage_from_positions() {
        let images: Vec<ImageHeader> = (0..11)
            .map(|i| ImageHeader {
                image_position_patient: Some([0.0, 0.0, -(i as f64) * 20.0]),
                ..Default::default()
            })
            .collect();
        let result = classify_ct(&images, &header("", "ORIGINAL"), &Acquisition::default())
            .unwrap();
        assert_eq!(result.info.scan_coverage, Some(200.0));
        assert_eq!(result.info.spacing_between_slices, Some(18.18));
        assert_eq!(result.classifications.anatomy, Some(vec![Anatomy::Head]));
    }
}
