//! Core trained Bloom filter
//!
//! A trained filter is immutable: there is no insert-after-build API and no
//! clear. If an element was in the training set, `contains` returns true;
//! false negatives are impossible. False positives occur at the residual
//! rate the sizing targeted.

use std::fmt;
use std::marker::PhantomData;

use super::bit_positions::derive_positions;
use super::bit_set::PackedBitSet;
use super::murmur::murmur3_x64_128;
use super::parameters::FilterParameters;

/// Probabilistic membership over a trained set of elements.
///
/// Generic over any element with a hashable byte encoding
/// (`T: AsRef<[u8]>`); strings hash as UTF-8. Safe to query from many
/// threads at once, nothing mutates after training.
#[derive(Clone, Debug)]
pub struct BloomFilter<T> {
    bits: PackedBitSet,
    number_of_bits: usize,
    number_of_hash_functions: usize,
    seed: u32,
    element_count: usize,
    expected_fpr: f64,
    _element: PhantomData<T>,
}

impl<T: AsRef<[u8]>> BloomFilter<T> {
    pub(crate) fn from_parts(
        bits: PackedBitSet,
        params: &FilterParameters,
        seed: u32,
        element_count: usize,
    ) -> Self {
        Self {
            bits,
            number_of_bits: params.number_of_bits,
            number_of_hash_functions: params.number_of_hash_functions,
            seed,
            element_count,
            expected_fpr: params.expected_fpr,
            _element: PhantomData,
        }
    }

    /// Test whether an element might be in the trained set.
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be a false positive)
    /// - `false` if the element is definitely NOT in the set
    ///
    /// Checking stops at the first unset bit.
    pub fn contains(&self, element: &T) -> bool {
        let digest = murmur3_x64_128(element.as_ref(), self.seed);
        derive_positions(digest, self.number_of_bits, self.number_of_hash_functions)
            .all(|position| self.bits.get(position))
    }

    /// Membership test for optional input: `None` is never in the set.
    pub fn contains_opt(&self, element: Option<&T>) -> bool {
        match element {
            Some(element) => self.contains(element),
            None => false,
        }
    }
}

impl<T> BloomFilter<T> {
    /// Filter size in bits (m)
    pub fn size_bits(&self) -> usize {
        self.number_of_bits
    }

    /// Number of hash functions (K)
    pub fn hash_count(&self) -> usize {
        self.number_of_hash_functions
    }

    /// Number of elements the filter was trained on
    pub fn element_count(&self) -> usize {
        self.element_count
    }

    /// Residual false-positive probability the sizing targeted
    pub fn expected_fpr(&self) -> f64 {
        self.expected_fpr
    }

    /// Number of bits set in the backing array
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }
}

impl<T> fmt::Display for BloomFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BloomFilter(murmur3 x64 128, bits={}, functions={})",
            self.number_of_bits, self.number_of_hash_functions
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::trainer::FilterTrainer;

    #[test]
    fn test_contains_after_training() {
        let filter = FilterTrainer::new()
            .train(["0xABCD1234567890ABCDEF"])
            .expect("training succeeds");

        assert!(
            filter.contains(&"0xABCD1234567890ABCDEF"),
            "contains() must return true for a trained element"
        );
    }

    #[test]
    fn test_none_is_never_contained() {
        let filter = FilterTrainer::new()
            .train(["a", "b", "c"])
            .expect("training succeeds");

        assert!(!filter.contains_opt(None));
        assert!(filter.contains_opt(Some(&"a")));
    }

    #[test]
    fn test_training_sets_at_most_k_bits_per_element() {
        let filter = FilterTrainer::new()
            .train(["only_element"])
            .expect("training succeeds");

        assert!(filter.bits_set() > 0, "training must set bits");
        assert!(
            filter.bits_set() <= filter.hash_count(),
            "one element sets at most K bits"
        );
    }

    #[test]
    fn test_display_names_parameters() {
        let filter = FilterTrainer::new()
            .train(["a", "b", "c"])
            .expect("training succeeds");

        let rendered = filter.to_string();
        assert!(rendered.contains("bits="), "got: {}", rendered);
        assert!(rendered.contains("functions="), "got: {}", rendered);
    }

    #[test]
    fn test_accessors_report_sizing() {
        let filter = FilterTrainer::new()
            .train(["a", "b", "c"])
            .expect("training succeeds");

        assert_eq!(filter.element_count(), 3);
        assert!(filter.size_bits() >= 5);
        assert!(filter.hash_count() >= 1);
        assert!(filter.expected_fpr() > 0.0 && filter.expected_fpr() < 1.0);
    }
}
