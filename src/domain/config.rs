//! Training configuration and validation

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Correct-answer probability used when the caller does not pick one.
pub const DEFAULT_CORRECT_PROBABILITY: f64 = 0.95;
/// Seed fed to every hash invocation unless overridden.
pub const DEFAULT_SEED: u32 = 0;
/// One position per digest bit is the ceiling a single 128-bit digest
/// supports through the affine derivation.
pub const DEFAULT_MAX_HASH_FUNCTIONS: usize = 128;

/// Configuration for training a filter
///
/// Finite probabilities outside the usable interval are clamped at training
/// time, not rejected; validation only refuses values no clamp can repair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Target probability of a correct membership answer, in (0, 1)
    pub correct_probability: f64,
    /// Seed for the 128-bit hash; the same seed must be used to train and query
    pub seed: u32,
    /// Hash-function count above which training refuses with
    /// `MultiDigestRequired` instead of degrading
    pub max_hash_functions: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            correct_probability: DEFAULT_CORRECT_PROBABILITY,
            seed: DEFAULT_SEED,
            max_hash_functions: DEFAULT_MAX_HASH_FUNCTIONS,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(
        correct_probability: f64,
        seed: u32,
        max_hash_functions: usize,
    ) -> Result<Self, FilterError> {
        let config = Self {
            correct_probability,
            seed,
            max_hash_functions,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        if !self.correct_probability.is_finite() {
            return Err(FilterError::InvalidParameters(format!(
                "correct_probability must be finite, got {}",
                self.correct_probability
            )));
        }

        if self.max_hash_functions == 0 {
            return Err(FilterError::InvalidParameters(
                "max_hash_functions cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for FilterConfig with validation
///
/// # Example
///
/// ```
/// use bloomsieve::FilterConfigBuilder;
///
/// let config = FilterConfigBuilder::new()
///     .correct_probability(0.99)
///     .seed(7)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.seed, 7);
/// ```
#[derive(Default)]
pub struct FilterConfigBuilder {
    correct_probability: Option<f64>,
    seed: Option<u32>,
    max_hash_functions: Option<usize>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target correct-answer probability
    pub fn correct_probability(mut self, probability: f64) -> Self {
        self.correct_probability = Some(probability);
        self
    }

    /// Set the hash seed
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the single-digest hash-function cap
    pub fn max_hash_functions(mut self, max: usize) -> Self {
        self.max_hash_functions = Some(max);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            correct_probability: self
                .correct_probability
                .unwrap_or(defaults.correct_probability),
            seed: self.seed.unwrap_or(defaults.seed),
            max_hash_functions: self
                .max_hash_functions
                .unwrap_or(defaults.max_hash_functions),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = FilterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.correct_probability, DEFAULT_CORRECT_PROBABILITY);
        assert_eq!(config.seed, DEFAULT_SEED);
    }

    #[test]
    fn test_validation_rejects_non_finite_probability() {
        let result = FilterConfig::new(f64::NAN, 0, 128);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));

        let result = FilterConfig::new(f64::INFINITY, 0, 128);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_validation_rejects_zero_hash_function_cap() {
        let result = FilterConfig::new(0.95, 0, 0);
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_out_of_range_probability_is_accepted() {
        // Clamped at training time, deliberately not a validation error.
        assert!(FilterConfig::new(0.999999, 0, 128).is_ok());
        assert!(FilterConfig::new(-1.0, 0, 128).is_ok());
    }

    #[test]
    fn test_builder_creates_valid_config() {
        let config = FilterConfigBuilder::new()
            .correct_probability(0.99)
            .seed(12345)
            .max_hash_functions(64)
            .build()
            .expect("should create valid config");

        assert_eq!(config.correct_probability, 0.99);
        assert_eq!(config.seed, 12345);
        assert_eq!(config.max_hash_functions, 64);
    }

    #[test]
    fn test_builder_uses_defaults() {
        let config = FilterConfigBuilder::new()
            .seed(1)
            .build()
            .expect("should use defaults for other fields");

        let defaults = FilterConfig::default();
        assert_eq!(config.correct_probability, defaults.correct_probability);
        assert_eq!(config.max_hash_functions, defaults.max_hash_functions);
    }

    #[test]
    fn test_builder_rejects_invalid_cap() {
        let result = FilterConfigBuilder::new().max_hash_functions(0).build();
        assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
    }

    #[test]
    fn test_config_round_trips_through_json() {
        let config = FilterConfigBuilder::new()
            .correct_probability(0.97)
            .seed(99)
            .build()
            .expect("valid config");

        let json = serde_json::to_string(&config).expect("serializes");
        let restored: FilterConfig = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(restored.correct_probability, config.correct_probability);
        assert_eq!(restored.seed, config.seed);
        assert_eq!(restored.max_hash_functions, config.max_hash_functions);
    }
}
