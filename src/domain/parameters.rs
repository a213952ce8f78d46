//! Optimal filter sizing
//!
//! Standard Bloom filter formulas, with p the false-positive probability:
//! - m = -n * ln(p) / (ln2)^2
//! - k = ceil(ln2 * m / n)
//!
//! See https://en.wikipedia.org/wiki/Bloom_filter#Probability_of_false_positives

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Lowest accepted correct-answer probability; anything below clamps here.
pub const PROBABILITY_MIN: f64 = 0.0001;
/// Highest accepted correct-answer probability; anything above clamps here.
pub const PROBABILITY_MAX: f64 = 0.9995;
/// Floor on the bit-array size, guarding the empty and near-empty cases.
pub const MIN_NUMBER_OF_BITS: usize = 5;

/// Sizing derived once per training run.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParameters {
    /// Number of bits in the filter (m)
    pub number_of_bits: usize,
    /// Number of hash functions (K)
    pub number_of_hash_functions: usize,
    /// Residual false-positive probability with these parameters
    pub expected_fpr: f64,
}

/// Clamp a correct-answer probability into the usable interval.
///
/// Out-of-range values are a leniency case, not an error: the caller gets a
/// degenerate-but-safe filter instead of a rejection.
pub fn clamp_probability(probability: f64) -> f64 {
    probability.clamp(PROBABILITY_MIN, PROBABILITY_MAX)
}

/// Compute optimal parameters for `element_count` elements at the given
/// correct-answer probability.
///
/// Fails only when the derived hash-function count exceeds
/// `max_hash_functions`, i.e. more slots than a single 128-bit digest
/// derivation supports.
pub fn calculate_optimal_parameters(
    element_count: usize,
    correct_probability: f64,
    max_hash_functions: usize,
) -> Result<FilterParameters, FilterError> {
    if element_count == 0 {
        return Ok(FilterParameters {
            number_of_bits: MIN_NUMBER_OF_BITS,
            number_of_hash_functions: 1,
            expected_fpr: 0.0,
        });
    }

    let n = element_count as f64;
    let false_positive_probability = 1.0 - clamp_probability(correct_probability);

    let number_of_bits = ((-n * false_positive_probability.ln() / (LN_2 * LN_2)) as usize)
        .max(MIN_NUMBER_OF_BITS);
    let number_of_hash_functions = ((LN_2 * number_of_bits as f64 / n).ceil() as usize).max(1);

    if number_of_hash_functions > max_hash_functions {
        return Err(FilterError::MultiDigestRequired {
            required: number_of_hash_functions,
            supported: max_hash_functions,
        });
    }

    let expected_fpr = calculate_fpr(number_of_bits, element_count, number_of_hash_functions);

    Ok(FilterParameters {
        number_of_bits,
        number_of_hash_functions,
        expected_fpr,
    })
}

/// Residual false-positive rate for given parameters: `(1 - e^(-kn/m))^k`.
pub fn calculate_fpr(number_of_bits: usize, element_count: usize, hash_functions: usize) -> f64 {
    if number_of_bits == 0 {
        return 1.0;
    }
    let exponent =
        -(hash_functions as f64) * (element_count as f64) / (number_of_bits as f64);
    (1.0 - exponent.exp()).powi(hash_functions as i32)
}
