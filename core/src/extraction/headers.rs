use crate::types::{ImageHeader, ImageType, SeriesHeader};
use dicom_object::InMemDicomObject;

use super::tags::{
    get_float_value, get_float_values, get_int_value, get_multi_string_value, get_string_value,
    IMAGE_POSITION_PATIENT, IMAGE_TYPE, INSTANCE_NUMBER, MODALITY,
    SERIES_DESCRIPTION, SERIES_INSTANCE_UID, SLICE_LOCATION, SOP_INSTANCE_UID,
};

/// Extracts ImageType structure from DICOM file
///
/// Returns `None` when the tag is absent or has no first value.
pub fn extract_image_type(dcm: &InMemDicomObject) -> Option<ImageType> {
    get_multi_string_value(dcm, IMAGE_TYPE).and_then(|values| ImageType::from_values(&values))
}

/// Extracts the per-image header row
///
/// Never fails; unreadable tags are left as `None`.
pub fn extract_image_header(dcm: &InMemDicomObject) -> ImageHeader {
    let image_position_patient = get_float_values(dcm, IMAGE_POSITION_PATIENT)
        .filter(|values| values.len() == 3)
        .map(|values| [values[0], values[1], values[2]]);

    ImageHeader {
        sop_instance_uid: get_string_value(dcm, SOP_INSTANCE_UID),
        series_instance_uid: get_string_value(dcm, SERIES_INSTANCE_UID),
        instance_number: get_int_value(dcm, INSTANCE_NUMBER),
        image_position_patient,
        slice_location: get_float_value(dcm, SLICE_LOCATION),
    }
}

/// Extracts the series-level fields the classifier reads
///
/// Empty strings are treated as absent.
pub fn extract_series_header(dcm: &InMemDicomObject) -> SeriesHeader {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);

    SeriesHeader {
        series_description: get_string_value(dcm, SERIES_DESCRIPTION).and_then(non_empty),
        image_type: extract_image_type(dcm),
        modality: get_string_value(dcm, MODALITY).and_then(non_empty),
    }
}
