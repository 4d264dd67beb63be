//! Configuration for a selection run.

use crate::error::SelectionError;

/// Fixed base seed used when a run is reproducible and the caller supplies
/// no seed of their own.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for one invocation of the selection engine.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use poseidon_engine::SelectionConfig;
///
/// let config = SelectionConfig::new()
///     .with_n_gms(20)
///     .with_n_replicates(5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SelectionConfig {
    n_gms: usize,
    n_replicates: usize,
    reproducible: bool,
    seed: u64,
    alpha: f64,
}

impl SelectionConfig {
    /// Creates a configuration with defaults.
    ///
    /// Defaults: `n_gms = 30`, `n_replicates = 1`, `reproducible = true`,
    /// `seed = DEFAULT_SEED`, `alpha = 0.10`.
    pub fn new() -> Self {
        Self {
            n_gms: 30,
            n_replicates: 1,
            reproducible: true,
            seed: DEFAULT_SEED,
            alpha: 0.10,
        }
    }

    /// Sets the number of ground motions to select.
    pub fn with_n_gms(mut self, n_gms: usize) -> Self {
        self.n_gms = n_gms;
        self
    }

    /// Sets the number of replicates to generate and score.
    pub fn with_n_replicates(mut self, n_replicates: usize) -> Self {
        self.n_replicates = n_replicates;
        self
    }

    /// Sets whether the run uses a deterministic base seed.
    pub fn with_reproducible(mut self, reproducible: bool) -> Self {
        self.reproducible = reproducible;
        self
    }

    /// Sets the base seed used for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the significance level for the KS critical value.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    // --- Accessors ---

    /// Returns the number of ground motions to select.
    pub fn n_gms(&self) -> usize {
        self.n_gms
    }

    /// Returns the number of replicates.
    pub fn n_replicates(&self) -> usize {
        self.n_replicates
    }

    /// Returns whether the run uses a deterministic base seed.
    pub fn reproducible(&self) -> bool {
        self.reproducible
    }

    /// Returns the base seed for reproducible runs.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the KS significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Validates this configuration.
    ///
    /// Checks that the counts are at least 1 and that `alpha / 2` lies in
    /// the tabulated KS range `[0.005, 0.10]`.
    pub fn validate(&self) -> Result<(), SelectionError> {
        if self.n_gms == 0 {
            return Err(SelectionError::InvalidConfig {
                reason: "n_gms must be >= 1".to_string(),
            });
        }
        if self.n_replicates == 0 {
            return Err(SelectionError::InvalidConfig {
                reason: "n_replicates must be >= 1".to_string(),
            });
        }
        if !self.alpha.is_finite() || !(0.005..=0.10).contains(&(self.alpha / 2.0)) {
            return Err(SelectionError::InvalidConfig {
                reason: format!(
                    "alpha {} must yield alpha/2 within [0.005, 0.10]",
                    self.alpha
                ),
            });
        }
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SelectionConfig::new();
        assert_eq!(cfg.n_gms(), 30);
        assert_eq!(cfg.n_replicates(), 1);
        assert!(cfg.reproducible());
        assert_eq!(cfg.seed(), DEFAULT_SEED);
        assert!((cfg.alpha() - 0.10).abs() < f64::EPSILON);
    }

    #[test]
    fn builder_chaining() {
        let cfg = SelectionConfig::new()
            .with_n_gms(20)
            .with_n_replicates(5)
            .with_reproducible(false)
            .with_seed(99)
            .with_alpha(0.05);
        assert_eq!(cfg.n_gms(), 20);
        assert_eq!(cfg.n_replicates(), 5);
        assert!(!cfg.reproducible());
        assert_eq!(cfg.seed(), 99);
        assert!((cfg.alpha() - 0.05).abs() < f64::EPSILON);
    }

    #[test]
    fn validate_ok() {
        assert!(SelectionConfig::new().validate().is_ok());
    }

    #[test]
    fn validate_zero_n_gms() {
        assert!(SelectionConfig::new().with_n_gms(0).validate().is_err());
    }

    #[test]
    fn validate_zero_n_replicates() {
        assert!(
            SelectionConfig::new()
                .with_n_replicates(0)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_alpha_bounds() {
        // alpha/2 below 0.005
        assert!(SelectionConfig::new().with_alpha(0.005).validate().is_err());
        // alpha/2 above 0.10
        assert!(SelectionConfig::new().with_alpha(0.3).validate().is_err());
        // boundary values are accepted
        assert!(SelectionConfig::new().with_alpha(0.01).validate().is_ok());
        assert!(SelectionConfig::new().with_alpha(0.2).validate().is_ok());
        assert!(
            SelectionConfig::new()
                .with_alpha(f64::NAN)
                .validate()
                .is_err()
        );
    }
}
