use super::ImageType;

/// Per-image header record
///
/// One row of the image-header table for a series. Only the fields needed
/// to order the images and measure scan coverage are kept.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageHeader {
    /// SOP Instance UID
    pub sop_instance_uid: Option<String>,

    /// Series Instance UID
    pub series_instance_uid: Option<String>,

    /// Instance number within the series
    pub instance_number: Option<i32>,

    /// ImagePositionPatient (x, y, z) in mm
    pub image_position_patient: Option<[f64; 3]>,

    /// SliceLocation in mm
    pub slice_location: Option<f64>,
}

impl ImageHeader {
    /// z component of ImagePositionPatient
    pub fn z_position(&self) -> Option<f64> {
        self.image_position_patient.map(|pos| pos[2])
    }

    /// True when either ImagePositionPatient or SliceLocation is present
    pub fn is_positioned(&self) -> bool {
        self.image_position_patient.is_some() || self.slice_location.is_some()
    }
}

/// Representative header of a series
///
/// Taken from a single image; carries the fields the classifier reads.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct SeriesHeader {
    /// SeriesDescription
    pub series_description: Option<String>,

    /// Parsed ImageType; required by the classifier
    pub image_type: Option<ImageType>,

    /// Modality
    pub modality: Option<String>,
}

impl SeriesHeader {
    /// Creates a header with the two fields the classifier inspects
    pub fn new(series_description: Option<String>, image_type: Option<ImageType>) -> Self {
        Self {
            series_description,
            image_type,
            ..Default::default()
        }
    }

    /// Series description normalized to an empty string when absent
    pub fn description(&self) -> &str {
        self.series_description.as_deref().unwrap_or("")
    }
}

/// Acquisition descriptor
///
/// The acquisition label is a short identifier assigned to the series by
/// the scanner or archive, distinct from the free-text series description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct Acquisition {
    pub label: String,
}

impl Acquisition {
    /// Creates a new Acquisition
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}
