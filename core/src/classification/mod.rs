//! CT series classification
//!
//! [`predicates`] holds the individual label tests, [`rules`] orders them
//! into per-category priority chains, and [`classifier`] runs the chains
//! in sequence for one series.

pub mod classifier;
pub mod predicates;
pub mod rules;

pub use classifier::{classify_ct, spacing_between_slices, CtClassifier, MIN_SERIES_IMAGES};
