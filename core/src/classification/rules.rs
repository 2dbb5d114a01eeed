//! Ordered rule chains
//!
//! Each chain is a priority-ordered list of (predicate, label) pairs. The
//! first rule whose predicate matches decides the category. Text chains
//! are evaluated against the acquisition label first and the series
//! description second; see [`first_text_match`].

use super::predicates::{
    is_abdomen, is_arterial_phase, is_axial, is_bone_window, is_cap, is_chest, is_contrast,
    is_coronal, is_delayed, is_head, is_lung_window, is_not_contrast, is_pelvis,
    is_portal_venous, is_sagittal, is_whole_body,
};
use crate::types::{Anatomy, Contrast, ReconstructionWindow, ScanOrientation};

/// A label assigned when a text predicate matches
#[derive(Clone, Copy)]
pub struct TextRule<T> {
    pub matches: fn(&str) -> bool,
    pub label: T,
}

/// A label assigned when a coverage predicate matches
#[derive(Clone, Copy)]
pub struct CoverageRule<T> {
    pub matches: fn(Option<f64>) -> bool,
    pub label: T,
}

/// Bone before lung; checked against the acquisition label only
pub const RECONSTRUCTION_WINDOW_RULES: &[TextRule<ReconstructionWindow>] = &[
    TextRule {
        matches: is_bone_window,
        label: ReconstructionWindow::Bone,
    },
    TextRule {
        matches: is_lung_window,
        label: ReconstructionWindow::Lung,
    },
];

pub const ORIENTATION_RULES: &[TextRule<ScanOrientation>] = &[
    TextRule {
        matches: is_axial,
        label: ScanOrientation::Axial,
    },
    TextRule {
        matches: is_coronal,
        label: ScanOrientation::Coronal,
    },
    TextRule {
        matches: is_sagittal,
        label: ScanOrientation::Sagittal,
    },
];

pub const ANATOMY_TEXT_RULES: &[TextRule<&[Anatomy]>] = &[
    TextRule {
        matches: is_chest,
        label: &[Anatomy::Chest],
    },
    TextRule {
        matches: is_abdomen,
        label: &[Anatomy::Abdomen],
    },
    TextRule {
        matches: is_pelvis,
        label: &[Anatomy::Pelvis],
    },
];

/// Only consulted when no anatomy text rule matched in any source
pub const ANATOMY_COVERAGE_RULES: &[CoverageRule<&[Anatomy]>] = &[
    CoverageRule {
        matches: is_head,
        label: &[Anatomy::Head],
    },
    CoverageRule {
        matches: is_whole_body,
        label: &[Anatomy::WholeBody],
    },
    CoverageRule {
        matches: is_cap,
        label: &[Anatomy::Chest, Anatomy::Abdomen, Anatomy::Pelvis],
    },
];

/// Presence of contrast; "w^o" wins over "w^IV" within one source
pub const CONTRAST_PRESENCE_RULES: &[TextRule<bool>] = &[
    TextRule {
        matches: is_not_contrast,
        label: false,
    },
    TextRule {
        matches: is_contrast,
        label: true,
    },
];

/// Phase sub-classification, only applied when contrast is present
///
/// Delayed is checked before portal venous.
pub const CONTRAST_PHASE_RULES: &[TextRule<Contrast>] = &[
    TextRule {
        matches: is_arterial_phase,
        label: Contrast::ArterialPhase,
    },
    TextRule {
        matches: is_delayed,
        label: Contrast::DelayedPhase,
    },
    TextRule {
        matches: is_portal_venous,
        label: Contrast::PortalVenousPhase,
    },
];

/// First matching rule for a single text
pub fn first_match<T: Copy>(rules: &[TextRule<T>], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.matches)(text))
        .map(|rule| rule.label)
}

/// First matching rule across sources, in source order
///
/// Every rule is tried against a source before moving on to the next one,
/// so any match in an earlier source beats all matches in later ones.
pub fn first_text_match<T: Copy>(rules: &[TextRule<T>], sources: &[&str]) -> Option<T> {
    sources.iter().find_map(|text| first_match(rules, text))
}

/// First matching coverage rule
pub fn first_coverage_match<T: Copy>(
    rules: &[CoverageRule<T>],
    scan_coverage: Option<f64>,
) -> Option<T> {
    rules
        .iter()
        .find(|rule| (rule.matches)(scan_coverage))
        .map(|rule| rule.label)
}

/// Contrast decision for one text
///
/// "No contrast" wins outright; otherwise a contrast-present text is
/// narrowed to a phase, falling back to [`Contrast::WithContrast`].
pub fn contrast_for(text: &str) -> Option<Contrast> {
    let enhanced = first_match(CONTRAST_PRESENCE_RULES, text)?;
    if !enhanced {
        return Some(Contrast::NoContrast);
    }
    Some(first_match(CONTRAST_PHASE_RULES, text).unwrap_or(Contrast::WithContrast))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_window_bone_before_lung() {
        assert_eq!(
            first_match(RECONSTRUCTION_WINDOW_RULES, "lung window / bone window"),
            Some(ReconstructionWindow::Bone)
        );
        assert_eq!(
            first_match(RECONSTRUCTION_WINDOW_RULES, "Lung Window"),
            Some(ReconstructionWindow::Lung)
        );
        assert_eq!(first_match(RECONSTRUCTION_WINDOW_RULES, "Soft Tissue"), None);
    }

    #[test]
    fn test_orientation_axial_before_coronal() {
        assert_eq!(
            first_match(ORIENTATION_RULES, "coronal and axial"),
            Some(ScanOrientation::Axial)
        );
    }

    #[test]
    fn test_earlier_source_wins_over_higher_priority_rule() {
        // Sagittal in the first source beats axial in the second
        assert_eq!(
            first_text_match(ORIENTATION_RULES, &["SAG", "AXIAL"]),
            Some(ScanOrientation::Sagittal)
        );
        assert_eq!(
            first_text_match(ORIENTATION_RULES, &["", "AXIAL"]),
            Some(ScanOrientation::Axial)
        );
        assert_eq!(first_text_match(ORIENTATION_RULES, &["", ""]), None);
    }

    #[test]
    fn test_anatomy_chest_before_abdomen() {
        let labels = first_match(ANATOMY_TEXT_RULES, "CHEST ABD PELVIS").unwrap();
        assert_eq!(labels, [Anatomy::Chest]);
    }

    #[rstest]
    #[case(Some(100.0), Some(vec![Anatomy::Head]))]
    #[case(Some(1500.0), Some(vec![Anatomy::WholeBody]))]
    #[case(Some(1000.0), Some(vec![Anatomy::Chest, Anatomy::Abdomen, Anatomy::Pelvis]))]
    #[case(Some(250.0), None)]
    #[case(Some(800.0), None)]
    #[case(Some(1300.0), None)]
    #[case(Some(600.0), None)]
    #[case(None, None)]
    fn test_anatomy_coverage_rules(
        #[case] coverage: Option<f64>,
        #[case] expected: Option<Vec<Anatomy>>,
    ) {
        assert_eq!(
            first_coverage_match(ANATOMY_COVERAGE_RULES, coverage).map(<[Anatomy]>::to_vec),
            expected
        );
    }

    #[rstest]
    #[case("CT w^o", Some(Contrast::NoContrast))]
    #[case("CT w^o w^IV arterial", Some(Contrast::NoContrast))]
    #[case("CT w^IV", Some(Contrast::WithContrast))]
    #[case("w^IV arterial delayed", Some(Contrast::ArterialPhase))]
    #[case("w^IV venous delayed", Some(Contrast::DelayedPhase))]
    #[case("w^IV portal venous", Some(Contrast::PortalVenousPhase))]
    #[case("arterial", None)]
    #[case("", None)]
    fn test_contrast_for(#[case] text: &str, #[case] expected: Option<Contrast>) {
        assert_eq!(contrast_for(text), expected);
    }
}
