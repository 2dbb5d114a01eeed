use dicom_core::Tag;
use dicom_object::InMemDicomObject;

// Core Image Tags
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
pub const MODALITY: Tag = Tag(0x0008, 0x0060);

// Image Geometry Tags
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Series/Instance Identification Tags
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);

// Description Tags
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

/// Helper to get string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to string
pub fn get_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<String> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_str().ok())
        .map(|s| s.trim().to_string())
}

/// Helper to get integer value from DICOM tag
pub fn get_int_value(dcm: &InMemDicomObject, tag: Tag) -> Option<i32> {
    dcm.element(tag)
        .ok()
        .and_then(|elem| elem.to_int::<i32>().ok())
}

/// Helper to get a single floating point value from DICOM tag
pub fn get_float_value(dcm: &InMemDicomObject, tag: Tag) -> Option<f64> {
    get_float_values(dcm, tag).and_then(|values| values.first().copied())
}

/// Helper to get multi-valued floating point data from DICOM tag
///
/// Decimal strings that the value conversion rejects are split on
/// backslashes and parsed one by one.
pub fn get_float_values(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<f64>> {
    let elem = dcm.element(tag).ok()?;
    if let Ok(values) = elem.to_multi_float64() {
        return Some(values);
    }
    let text = elem.to_str().ok()?;
    text.split('\\')
        .map(|part| part.trim().parse::<f64>().ok())
        .collect()
}

/// Helper to get multi-string value from DICOM tag
///
/// Returns `None` if the tag is not present or cannot be converted to Vec<String>
pub fn get_multi_string_value(dcm: &InMemDicomObject, tag: Tag) -> Option<Vec<String>> {
    dcm.element(tag).ok().and_then(|elem| {
        if let Ok(strs) = elem.to_multi_str() {
            Some(strs.iter().map(|s| s.trim().to_string()).collect())
        } else {
            // Fallback: try to get as single string and split by backslash
            elem.to_str()
                .ok()
                .map(|s| s.split('\\').map(|part| part.trim().to_string()).collect())
        }
    })
}
