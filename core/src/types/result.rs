use super::{Anatomy, Category, Contrast, ReconstructionWindow, ScanOrientation, ScanType};
use std::collections::BTreeMap;

/// Labels assigned to a series, per category
///
/// Every field is optional: `None` means the category is undetermined,
/// never negative. A present anatomy list is never empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Classifications {
    #[cfg_attr(
        feature = "json",
        serde(
            rename = "Scan Type",
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_as_list"
        )
    )]
    pub scan_type: Option<ScanType>,

    #[cfg_attr(
        feature = "json",
        serde(rename = "Anatomy", skip_serializing_if = "Option::is_none")
    )]
    pub anatomy: Option<Vec<Anatomy>>,

    #[cfg_attr(
        feature = "json",
        serde(
            rename = "Contrast",
            skip_serializing_if = "Option::is_none",
            serialize_with = "serialize_as_list"
        )
    )]
    pub contrast: Option<Contrast>,
}

impl Classifications {
    /// Classifications for a localizer series: scan type only
    pub fn localizer() -> Self {
        Self {
            scan_type: Some(ScanType::Localizer),
            ..Default::default()
        }
    }

    /// Returns the labels for one category, if determined
    pub fn labels(&self, category: Category) -> Option<Vec<&'static str>> {
        match category {
            Category::ScanType => self.scan_type.map(|s| vec![s.label()]),
            Category::Anatomy => self
                .anatomy
                .as_ref()
                .filter(|a| !a.is_empty())
                .map(|a| a.iter().map(Anatomy::label).collect()),
            Category::Contrast => self.contrast.map(|c| vec![c.label()]),
        }
    }

    /// Sparse category -> labels mapping
    ///
    /// Only determined categories appear as keys.
    pub fn to_map(&self) -> BTreeMap<Category, Vec<&'static str>> {
        [Category::ScanType, Category::Anatomy, Category::Contrast]
            .into_iter()
            .filter_map(|category| self.labels(category).map(|labels| (category, labels)))
            .collect()
    }

    /// True when no category was determined
    pub fn is_empty(&self) -> bool {
        self.to_map().is_empty()
    }
}

#[cfg(feature = "json")]
fn serialize_as_list<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: serde::Serialize,
    S: serde::Serializer,
{
    use serde::Serialize;

    match value {
        Some(v) => [v].serialize(serializer),
        None => serializer.serialize_none(),
    }
}

/// Informational attributes derived for a series
///
/// Like [`Classifications`], absent fields mean undetermined.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
#[cfg_attr(feature = "json", serde(rename_all = "PascalCase"))]
pub struct SeriesInfo {
    /// Extent of the scan along the body axis, in mm
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub scan_coverage: Option<f64>,

    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub reconstruction_window: Option<ReconstructionWindow>,

    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub scan_orientation: Option<ScanOrientation>,

    /// Scan coverage divided by image count, rounded to 2 decimals
    #[cfg_attr(feature = "json", serde(skip_serializing_if = "Option::is_none"))]
    pub spacing_between_slices: Option<f64>,
}

impl SeriesInfo {
    /// True when no attribute was determined
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Output of a single classification call
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ClassificationResult {
    pub classifications: Classifications,
    pub info: SeriesInfo,
}
