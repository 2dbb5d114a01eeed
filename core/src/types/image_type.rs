use std::fmt;

/// DICOM ImageType field decomposed into its components
///
/// - `pixels`: first value, "ORIGINAL" or "DERIVED"
/// - `exam`: second value (e.g., "PRIMARY", "SECONDARY")
/// - `flavor`: third value (e.g., "AXIAL", "LOCALIZER")
/// - `extras`: anything beyond the first three
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct ImageType {
    pub pixels: String,
    pub exam: String,
    pub flavor: Option<String>,
    pub extras: Option<Vec<String>>,
}

impl ImageType {
    /// Creates a new ImageType
    pub fn new(
        pixels: String,
        exam: String,
        flavor: Option<String>,
        extras: Option<Vec<String>>,
    ) -> Self {
        Self {
            pixels,
            exam,
            flavor,
            extras,
        }
    }

    /// Builds an ImageType from the raw multi-valued tag contents
    ///
    /// Returns `None` when there is no first value to inspect.
    pub fn from_values<S: AsRef<str>>(values: &[S]) -> Option<Self> {
        let mut values = values.iter().map(|v| v.as_ref().trim().to_string());
        let pixels = values.next().filter(|p| !p.is_empty())?;
        let exam = values.next().unwrap_or_default();
        let flavor = values.next();
        let extras: Vec<String> = values.collect();

        Some(Self::new(
            pixels,
            exam,
            flavor,
            (!extras.is_empty()).then_some(extras),
        ))
    }

    /// True when the first value is exactly "ORIGINAL"
    pub fn is_original(&self) -> bool {
        self.pixels == "ORIGINAL"
    }

    /// True when the first value is exactly "DERIVED"
    pub fn is_derived(&self) -> bool {
        self.pixels == "DERIVED"
    }

    /// Returns a simple string representation
    ///
    /// Format: "pixels|exam|flavor|extra1|extra2|..."
    /// Empty flavor is represented as ''
    pub fn simple_repr(&self) -> String {
        let mut parts = vec![self.pixels.clone(), self.exam.clone()];

        if let Some(ref flavor) = self.flavor {
            parts.push(if flavor.is_empty() {
                "''".to_string()
            } else {
                flavor.clone()
            });
        }

        if let Some(ref extras) = self.extras {
            parts.extend(extras.iter().filter(|e| !e.is_empty()).cloned());
        }

        parts.join("|")
    }
}

impl fmt::Display for ImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.simple_repr())
    }
}
