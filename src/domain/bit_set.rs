//! Fixed-capacity packed bit array
//!
//! Backing store is a flat `Vec<u64>`. Bits are addressed by absolute index;
//! unset bits read as `false`. There is no clear or delete operation: once a
//! bit is set it stays set for the lifetime of the set.

const WORD_BITS: usize = u64::BITS as usize;

/// Packed bit array sized once at allocation time.
///
/// The backing buffer holds one word beyond `ceil(bits / 64)` so a
/// derivation-time overshoot lands in owned memory rather than out of
/// bounds. Callers are still expected to stay below `bit_capacity()`.
#[derive(Clone, Debug)]
pub struct PackedBitSet {
    words: Vec<u64>,
    number_of_bits: usize,
}

impl PackedBitSet {
    /// Allocate a bit set able to hold `number_of_bits` bits, all unset.
    pub fn with_bit_capacity(number_of_bits: usize) -> Self {
        let word_count = number_of_bits.div_ceil(WORD_BITS) + 1;
        Self {
            words: vec![0; word_count],
            number_of_bits,
        }
    }

    /// Read bit `i`.
    pub fn get(&self, i: usize) -> bool {
        let word = self.words[i / WORD_BITS];
        (word >> (i % WORD_BITS)) & 1 == 1
    }

    /// Set bit `i`. Idempotent: setting an already-set bit changes nothing.
    pub fn set(&mut self, i: usize) {
        self.words[i / WORD_BITS] |= 1 << (i % WORD_BITS);
    }

    /// Capacity in bits requested at allocation time.
    pub fn bit_capacity(&self) -> usize {
        self.number_of_bits
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Number of backing words, headroom included.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Size of the backing buffer in bytes.
    pub fn size_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}
