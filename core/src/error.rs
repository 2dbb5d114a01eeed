use thiserror::Error;

/// Result type for ctclass operations
pub type Result<T> = std::result::Result<T, CtClassError>;

/// Error types for ctclass operations
#[derive(Error, Debug)]
pub enum CtClassError {
    /// DICOM reading error
    #[error("DICOM error: {0}")]
    DicomError(String),

    /// A field the classifier cannot proceed without is missing
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Invalid tag value
    #[error("Invalid tag value: {0}")]
    InvalidValue(String),

    /// No readable images were supplied for a series
    #[error("No images found: {0}")]
    NoImages(String),

    /// I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// Convert dicom-object errors
impl From<dicom_object::ReadError> for CtClassError {
    fn from(e: dicom_object::ReadError) -> Self {
        CtClassError::DicomError(format!("{}", e))
    }
}
