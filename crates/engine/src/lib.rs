//! Ground-motion selection engine.
//!
//! Implements replicate-based selection of recorded ground motions against
//! a generalized conditional intensity measure target: candidate records
//! are amplitude-scaled to the conditioning level, simulated realizations
//! are sampled without replacement, each realization is matched to its
//! best-fitting record in weighted log space, and every replicate is
//! scored with per-IM Kolmogorov-Smirnov statistics. The replicate with
//! the smallest overall misfit wins.
//!
//! # Example
//!
//! ```no_run
//! use poseidon_engine::{NullSink, SelectionConfig, select_ground_motions};
//! # fn demo(target: &poseidon_engine::TargetDistribution,
//! #         db: &poseidon_engine::GroundMotionDatabase)
//! #     -> Result<(), poseidon_engine::SelectionError> {
//! let config = SelectionConfig::new().with_n_gms(20).with_n_replicates(10);
//! let result = select_ground_motions(target, db, &config, &NullSink)?;
//! for gm in &result.selected {
//!     println!("{} x{:.2}", gm.gm_id, gm.scale_factor);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod diagnostics;
mod engine;
mod error;
mod ks;
mod replicate;
mod result;
mod scale;
mod summary;

pub use config::{DEFAULT_SEED, SelectionConfig};
pub use diagnostics::{DiagnosticLevel, DiagnosticsSink, MemorySink, NullSink};
pub use engine::select_ground_motions;
pub use error::SelectionError;
pub use ks::ks_statistic;
pub use replicate::{MatchedRecord, select_best_fitting};
pub use result::{ImDiagnostic, SelectedGroundMotion, SelectionResult};
pub use scale::{ScaledDatabase, scale_database};
pub use summary::{ImSummary, summarize};

// Data-model types callers need to assemble inputs.
pub use poseidon_gcim::{
    GcimError, GroundMotionDatabase, GroundMotionRecord, ImCategory, IntensityMeasure,
    Realization, TargetDistribution,
};
