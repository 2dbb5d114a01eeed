use std::fmt;

/// Classification category axes
///
/// Each axis is decided independently; a category missing from a
/// [`Classifications`](super::Classifications) means "undetermined".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    ScanType,
    Anatomy,
    Contrast,
}

impl Category {
    /// Returns the category key used in classification output
    pub fn label(&self) -> &'static str {
        match self {
            Category::ScanType => "Scan Type",
            Category::Anatomy => "Anatomy",
            Category::Contrast => "Contrast",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scan type labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum ScanType {
    /// Planning scan, or a series too short to be diagnostic
    Localizer,
    /// ImageType marks the pixels as DERIVED
    Derived,
}

impl ScanType {
    /// Returns the output label
    pub fn label(&self) -> &'static str {
        match self {
            ScanType::Localizer => "Localizer",
            ScanType::Derived => "Derived",
        }
    }
}

impl fmt::Display for ScanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Anatomy labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Anatomy {
    Chest,
    Abdomen,
    Pelvis,
    Head,
    #[cfg_attr(feature = "json", serde(rename = "Whole Body"))]
    WholeBody,
}

impl Anatomy {
    /// Returns the output label
    pub fn label(&self) -> &'static str {
        match self {
            Anatomy::Chest => "Chest",
            Anatomy::Abdomen => "Abdomen",
            Anatomy::Pelvis => "Pelvis",
            Anatomy::Head => "Head",
            Anatomy::WholeBody => "Whole Body",
        }
    }
}

impl fmt::Display for Anatomy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Contrast labels
///
/// The phase variants are only assigned once contrast is known to be
/// present; `WithContrast` is the fallback when no phase keyword matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum Contrast {
    #[cfg_attr(feature = "json", serde(rename = "No Contrast"))]
    NoContrast,
    #[cfg_attr(feature = "json", serde(rename = "With Contrast"))]
    WithContrast,
    #[cfg_attr(feature = "json", serde(rename = "Arterial Phase"))]
    ArterialPhase,
    #[cfg_attr(feature = "json", serde(rename = "Portal Venous Phase"))]
    PortalVenousPhase,
    #[cfg_attr(feature = "json", serde(rename = "Delayed Phase"))]
    DelayedPhase,
}

impl Contrast {
    /// Returns the output label
    pub fn label(&self) -> &'static str {
        match self {
            Contrast::NoContrast => "No Contrast",
            Contrast::WithContrast => "With Contrast",
            Contrast::ArterialPhase => "Arterial Phase",
            Contrast::PortalVenousPhase => "Portal Venous Phase",
            Contrast::DelayedPhase => "Delayed Phase",
        }
    }
}

impl fmt::Display for Contrast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Reconstruction window (kernel) advertised in the acquisition label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub enum ReconstructionWindow {
    Bone,
    Lung,
}

impl ReconstructionWindow {
    /// Returns the output label
    pub fn label(&self) -> &'static str {
        match self {
            ReconstructionWindow::Bone => "Bone",
            ReconstructionWindow::Lung => "Lung",
        }
    }
}

impl fmt::Display for ReconstructionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Scan plane orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "lowercase"))]
pub enum ScanOrientation {
    Axial,
    Coronal,
    Sagittal,
}

impl ScanOrientation {
    /// Returns the output label
    pub fn label(&self) -> &'static str {
        match self {
            ScanOrientation::Axial => "axial",
            ScanOrientation::Coronal => "coronal",
            ScanOrientation::Sagittal => "sagittal",
        }
    }
}

impl fmt::Display for ScanOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::ScanType.label(), "Scan Type");
        assert_eq!(Category::Anatomy.to_string(), "Anatomy");
        assert_eq!(Category::Contrast.to_string(), "Contrast");
    }

    #[test]
    fn test_category_ordering() {
        assert!(Category::ScanType < Category::Anatomy);
        assert!(Category::Anatomy < Category::Contrast);
    }

    #[test]
    fn test_anatomy_labels() {
        assert_eq!(Anatomy::WholeBody.to_string(), "Whole Body");
        assert_eq!(Anatomy::Chest.label(), "Chest");
    }

    #[test]
    fn test_contrast_labels() {
        assert_eq!(Contrast::NoContrast.label(), "No Contrast");
        assert_eq!(Contrast::PortalVenousPhase.label(), "Portal Venous Phase");
    }

    #[test]
    fn test_orientation_labels_lowercase() {
        assert_eq!(ScanOrientation::Axial.to_string(), "axial");
        assert_eq!(ScanOrientation::Sagittal.to_string(), "sagittal");
        assert_eq!(ReconstructionWindow::Bone.to_string(), "Bone");
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_serialized_labels_match_display() {
        assert_eq!(
            serde_json::to_string(&Contrast::ArterialPhase).unwrap(),
            "\"Arterial Phase\""
        );
        assert_eq!(
            serde_json::to_string(&Anatomy::WholeBody).unwrap(),
            "\"Whole Body\""
        );
        assert_eq!(
            serde_json::to_string(&ScanOrientation::Coronal).unwrap(),
            "\"coronal\""
        );
    }
}
