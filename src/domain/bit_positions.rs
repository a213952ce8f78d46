//! Digest-to-bit-position derivation
//!
//! One 128-bit digest feeds all K hash functions through the affine family
//! `t_i = (K - i) * h1 + i * h2` instead of K independent hash calls.

use super::murmur::HashDigest;

/// Iterator over the K bit positions derived from a single digest.
///
/// Yields exactly `count` indices, each in `[0, number_of_bits)`. The affine
/// combination wraps in i64; the magnitude is taken with `unsigned_abs`, so
/// even `i64::MIN` maps into range before the modulo.
#[derive(Clone, Debug)]
pub struct BitPositions {
    h1: i64,
    h2: i64,
    number_of_bits: u64,
    count: usize,
    index: usize,
}

/// Derive `count` bit positions within `number_of_bits` from `digest`.
pub fn derive_positions(digest: HashDigest, number_of_bits: usize, count: usize) -> BitPositions {
    debug_assert!(number_of_bits > 0);
    BitPositions {
        h1: digest.h1 as i64,
        h2: digest.h2 as i64,
        number_of_bits: number_of_bits as u64,
        count,
        index: 0,
    }
}

impl Iterator for BitPositions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.index == self.count {
            return None;
        }
        let i = self.index as i64;
        let k = self.count as i64;
        let t = (k - i)
            .wrapping_mul(self.h1)
            .wrapping_add(i.wrapping_mul(self.h2));
        self.index += 1;
        Some((t.unsigned_abs() % self.number_of_bits) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BitPositions {}
