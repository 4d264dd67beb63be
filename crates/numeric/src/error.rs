//! Error types for the poseidon-numeric crate.

/// Error type for all fallible operations in the poseidon-numeric crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// Returned when an interpolation query falls outside the data bounds.
    #[error("value {x} is outside the data bounds [{lo}, {hi}]")]
    OutOfRange {
        /// The query value.
        x: f64,
        /// Lowest key in the data.
        lo: f64,
        /// Highest key in the data.
        hi: f64,
    },

    /// Returned when an operation requires at least one data point.
    #[error("empty data")]
    EmptyData,

    /// Returned when a KS sample size is below 1.
    #[error("sample size must be >= 1, got {n}")]
    InvalidSampleSize {
        /// The invalid sample size.
        n: usize,
    },

    /// Returned when the halved KS significance level is outside the
    /// tabulated range.
    #[error("alpha/2 = {alpha1} is outside the required bounds [0.005, 0.10]")]
    InvalidAlpha {
        /// The invalid halved significance level.
        alpha1: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_out_of_range() {
        let e = NumericError::OutOfRange {
            x: 5.0,
            lo: 0.0,
            hi: 1.0,
        };
        assert_eq!(e.to_string(), "value 5 is outside the data bounds [0, 1]");
    }

    #[test]
    fn error_empty_data() {
        assert_eq!(NumericError::EmptyData.to_string(), "empty data");
    }

    #[test]
    fn error_invalid_sample_size() {
        let e = NumericError::InvalidSampleSize { n: 0 };
        assert_eq!(e.to_string(), "sample size must be >= 1, got 0");
    }

    #[test]
    fn error_invalid_alpha() {
        let e = NumericError::InvalidAlpha { alpha1: 0.2 };
        assert_eq!(
            e.to_string(),
            "alpha/2 = 0.2 is outside the required bounds [0.005, 0.10]"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<NumericError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<NumericError>();
    }
}
