//! Loading a CT series into classifier inputs

use crate::classification::classify_ct;
use crate::error::{CtClassError, Result};
use crate::extraction::{extract_image_header, extract_series_header};
use crate::types::{Acquisition, ClassificationResult, ImageHeader, SeriesHeader};
use dicom::object::{open_file, InMemDicomObject};
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// One CT series: the image-header table and a representative header
///
/// Images are ordered by InstanceNumber (unnumbered images last, in load
/// order); the representative header comes from the first image.
#[derive(Debug, Clone, PartialEq)]
pub struct CtSeries {
    pub images: Vec<ImageHeader>,
    pub header: SeriesHeader,
}

impl CtSeries {
    /// Loads every DICOM file in a directory as one series
    pub fn from_directory(directory: &Path) -> Result<Self> {
        Self::from_directory_with_options(directory, false)
    }

    /// Loads a directory, optionally accepting non-CT modalities
    pub fn from_directory_with_options(directory: &Path, ignore_modality: bool) -> Result<Self> {
        let files = collect_dicom_files(directory)?;
        debug!("Found {} DICOM files in {}", files.len(), directory.display());
        Self::from_files(&files, ignore_modality)
    }

    /// Loads the given files as one series
    ///
    /// Files that cannot be read are skipped with a warning.
    pub fn from_files(paths: &[PathBuf], ignore_modality: bool) -> Result<Self> {
        let mut objects = Vec::with_capacity(paths.len());
        for path in paths {
            match open_file(path) {
                Ok(obj) => objects.push(obj),
                Err(e) => warn!("Skipping {}: {}", path.display(), e),
            }
        }
        Self::from_objects(objects.iter().map(|obj| &**obj), ignore_modality)
    }

    /// Builds a series from already-opened DICOM objects
    ///
    /// # Errors
    ///
    /// - [`CtClassError::NoImages`] if there are no objects
    /// - [`CtClassError::InvalidValue`] if the modality is present and not
    ///   "CT", unless `ignore_modality` is set
    pub fn from_objects<'a, I>(objects: I, ignore_modality: bool) -> Result<Self>
    where
        I: IntoIterator<Item = &'a InMemDicomObject>,
    {
        let mut rows: Vec<(ImageHeader, &InMemDicomObject)> = objects
            .into_iter()
            .map(|obj| (extract_image_header(obj), obj))
            .collect();

        // SOPInstanceUID breaks ties so the representative header is stable
        rows.sort_by(|(a, _), (b, _)| {
            (a.instance_number.is_none(), a.instance_number, a.sop_instance_uid.as_deref()).cmp(&(
                b.instance_number.is_none(),
                b.instance_number,
                b.sop_instance_uid.as_deref(),
            ))
        });

        let representative = rows
            .first()
            .map(|(_, obj)| *obj)
            .ok_or_else(|| CtClassError::NoImages("series has no readable images".to_string()))?;
        let header = extract_series_header(representative);

        if !ignore_modality {
            if let Some(modality) = header.modality.as_deref() {
                if modality != "CT" {
                    return Err(CtClassError::InvalidValue(format!(
                        "Expected modality=CT, found {}",
                        modality
                    )));
                }
            }
        }

        let images: Vec<ImageHeader> = rows.into_iter().map(|(image, _)| image).collect();

        let series_uids: BTreeSet<&str> = images
            .iter()
            .filter_map(|image| image.series_instance_uid.as_deref())
            .collect();
        if series_uids.len() > 1 {
            warn!(
                "Images span {} SeriesInstanceUIDs; classifying them as one series",
                series_uids.len()
            );
        }

        Ok(Self { images, header })
    }

    /// Number of images in the series
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// True if the series has no images
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Acquisition descriptor labelled with the series description
    ///
    /// Used when no archive-assigned label is available.
    pub fn default_acquisition(&self) -> Acquisition {
        Acquisition::new(self.header.description())
    }

    /// Classifies this series
    pub fn classify(&self, acquisition: &Acquisition) -> Result<ClassificationResult> {
        classify_ct(&self.images, &self.header, acquisition)
    }
}

/// Collects DICOM files from a directory (non-recursive)
///
/// Accepts `.dcm`/`.dicom` extensions (any case) and extensionless files
/// that carry the DICOM magic.
pub fn collect_dicom_files(directory: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        match path.extension() {
            Some(ext) => {
                if ext.eq_ignore_ascii_case("dcm") || ext.eq_ignore_ascii_case("dicom") {
                    files.push(path);
                }
            }
            None => {
                if is_dicom_file(&path) {
                    debug!("Found headerless DICOM file: {}", path.display());
                    files.push(path);
                }
            }
        }
    }

    files.sort();
    Ok(files)
}

/// Checks for the "DICM" magic after the 128-byte preamble
pub fn is_dicom_file(path: &Path) -> bool {
    let mut file = match File::open(path) {
        Ok(f) => f,
        Err(_) => return false,
    };

    let mut buffer = [0u8; 132];
    match file.read_exact(&mut buffer) {
        Ok(()) => &buffer[128..132] == b"DICM",
        Err(_) => false,
    }
}
