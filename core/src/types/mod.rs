//! Core type definitions for CT series classification
//!
//! - [`ImageType`]: Decomposed DICOM ImageType field
//! - [`ImageHeader`], [`SeriesHeader`], [`Acquisition`]: classifier inputs
//! - [`ScanType`], [`Anatomy`], [`Contrast`]: classification labels
//! - [`ReconstructionWindow`], [`ScanOrientation`]: informational attributes
//! - [`ClassificationResult`]: sparse output of a classification call

mod enums;
mod header;
mod image_type;
mod result;

pub use enums::{Anatomy, Category, Contrast, ReconstructionWindow, ScanOrientation, ScanType};
pub use header::{Acquisition, ImageHeader, SeriesHeader};
pub use image_type::ImageType;
pub use result::{ClassificationResult, Classifications, SeriesInfo};
