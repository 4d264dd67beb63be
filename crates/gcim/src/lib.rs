//! Data model for the Poseidon ground-motion selector.
//!
//! This crate defines the two structures the selection engine consumes —
//! the GCIM [`TargetDistribution`] produced by an external hazard-analysis
//! tool, and the [`GroundMotionDatabase`] of candidate records — plus the
//! closed [`ImCategory`] classification that fixes each intensity measure's
//! amplitude-scaling exponent at construction time.
//!
//! Parsing of hazard-tool output files and database loading are external
//! collaborators; inputs here are already syntactically well-formed, and the
//! constructors only enforce the structural invariants the engine relies on
//! (realization counts, CDF monotonicity, known IM names).

pub mod category;
pub mod error;
pub mod intensity_measure;
pub mod record;
pub mod target;

pub use category::ImCategory;
pub use error::GcimError;
pub use intensity_measure::{IntensityMeasure, Realization};
pub use record::{GroundMotionDatabase, GroundMotionRecord};
pub use target::TargetDistribution;
