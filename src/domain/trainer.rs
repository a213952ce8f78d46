//! Filter training
//!
//! The trainer is the only construction path: it sizes the bit array from
//! the training-set size and target probability, hashes every element, and
//! seals the result into an immutable `BloomFilter`.

use tracing::{debug, warn};

use crate::error::FilterError;

use super::bit_positions::derive_positions;
use super::bit_set::PackedBitSet;
use super::bloom_filter::BloomFilter;
use super::config::FilterConfig;
use super::murmur::murmur3_x64_128;
use super::parameters::{calculate_optimal_parameters, clamp_probability};

/// Trains Bloom filters according to a `FilterConfig`.
#[derive(Clone, Debug, Default)]
pub struct FilterTrainer {
    config: FilterConfig,
}

impl FilterTrainer {
    /// Create a trainer with the default configuration
    /// (probability 0.95, seed 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trainer with an explicit configuration.
    pub fn with_config(config: FilterConfig) -> Self {
        Self { config }
    }

    /// The configuration this trainer applies.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Train a filter over `elements`.
    ///
    /// Duplicate elements only inflate the sizing estimate; they never break
    /// correctness. A probability outside the usable interval is clamped,
    /// not rejected.
    pub fn train<T, I>(&self, elements: I) -> Result<BloomFilter<T>, FilterError>
    where
        T: AsRef<[u8]>,
        I: IntoIterator<Item = T>,
    {
        let elements: Vec<T> = elements.into_iter().collect();

        let requested = self.config.correct_probability;
        let clamped = clamp_probability(requested);
        if clamped != requested {
            warn!(
                requested,
                clamped, "correct probability outside usable interval, clamped"
            );
        }

        let params = calculate_optimal_parameters(
            elements.len(),
            clamped,
            self.config.max_hash_functions,
        )?;
        debug!(
            elements = elements.len(),
            bits = params.number_of_bits,
            functions = params.number_of_hash_functions,
            expected_fpr = params.expected_fpr,
            "sized bloom filter"
        );

        let mut bits = PackedBitSet::with_bit_capacity(params.number_of_bits);
        for element in &elements {
            let digest = murmur3_x64_128(element.as_ref(), self.config.seed);
            for position in
                derive_positions(digest, params.number_of_bits, params.number_of_hash_functions)
            {
                bits.set(position);
            }
        }

        Ok(BloomFilter::from_parts(
            bits,
            &params,
            self.config.seed,
            elements.len(),
        ))
    }
}

/// Train a filter with the default configuration and an explicit
/// correct-answer probability.
///
/// ```
/// use bloomsieve::train_filter;
///
/// let filter = train_filter(["alpha", "beta", "gamma"], 0.95)?;
/// assert!(filter.contains(&"alpha"));
/// assert!(!filter.contains_opt(None));
/// # Ok::<(), bloomsieve::FilterError>(())
/// ```
pub fn train_filter<T, I>(
    elements: I,
    correct_probability: f64,
) -> Result<BloomFilter<T>, FilterError>
where
    T: AsRef<[u8]>,
    I: IntoIterator<Item = T>,
{
    FilterTrainer::with_config(FilterConfig {
        correct_probability,
        ..FilterConfig::default()
    })
    .train(elements)
}
