use crate::types::{Category, ClassificationResult, ImageType};
use std::fmt;

/// Text report formatter for a classification result
pub struct TextReport<'a> {
    label: &'a str,
    image_count: usize,
    image_type: Option<&'a ImageType>,
    result: &'a ClassificationResult,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(label: &'a str, image_count: usize, result: &'a ClassificationResult) -> Self {
        Self {
            label,
            image_count,
            image_type: None,
            result,
        }
    }

    /// Adds the series ImageType to the header block
    pub fn with_image_type(mut self, image_type: Option<&'a ImageType>) -> Self {
        self.image_type = image_type;
        self
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CT Series Classification")?;
        writeln!(f, "========================")?;
        writeln!(f)?;
        writeln!(f, "Acquisition:    {}", self.label)?;
        writeln!(f, "Images:         {}", self.image_count)?;
        match self.image_type {
            Some(image_type) => writeln!(f, "Image Type:     {}", image_type)?,
            None => writeln!(f, "Image Type:     unknown")?,
        }
        writeln!(f)?;

        writeln!(f, "Classifications")?;
        writeln!(f, "---------------")?;
        for category in [Category::ScanType, Category::Anatomy, Category::Contrast] {
            let labels = self
                .result
                .classifications
                .labels(category)
                .map(|l| l.join(", "))
                .unwrap_or_else(|| "undetermined".to_string());
            writeln!(f, "{:<15} {}", format!("{}:", category), labels)?;
        }
        writeln!(f)?;

        let info = &self.result.info;
        writeln!(f, "Info")?;
        writeln!(f, "----")?;
        if let Some(coverage) = info.scan_coverage {
            writeln!(f, "Scan Coverage:  {} mm", coverage)?;
        }
        if let Some(window) = info.reconstruction_window {
            writeln!(f, "Recon Window:   {}", window)?;
        }
        if let Some(orientation) = info.scan_orientation {
            writeln!(f, "Orientation:    {}", orientation)?;
        }
        if let Some(spacing) = info.spacing_between_slices {
            writeln!(f, "Slice Spacing:  {} mm", spacing)?;
        }
        if info.is_empty() {
            writeln!(f, "(none)")?;
        }

        Ok(())
    }
}
