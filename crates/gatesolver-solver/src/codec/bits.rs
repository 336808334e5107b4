//! Fixed-width bit vector.

use smallvec::{smallvec, SmallVec};

/// A fixed-length sequence of bits, least significant bit first in each byte.
///
/// Unused bits of the last byte are always zero, so two vectors are equal
/// exactly when their lengths and bits agree.
///
/// # Example
///
/// ```
/// use gatesolver_solver::codec::BitVector;
///
/// let mut bits = BitVector::new(10);
/// bits.set_bit(3, true);
/// bits.write_bits(4, 0b101, 3);
///
/// assert!(bits.get_bit(3));
/// assert_eq!(bits.read_bits(4, 3), 0b101);
/// assert_eq!(bits.byte_len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    len: usize,
    bytes: SmallVec<[u8; 16]>,
}

impl BitVector {
    /// Creates an all-zero vector of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            bytes: smallvec![0; len.div_ceil(8)],
        }
    }

    /// Number of bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes backing the bits.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Heap bytes owned beyond the inline buffer.
    pub fn heap_bytes(&self) -> usize {
        if self.bytes.spilled() {
            self.bytes.capacity()
        } else {
            0
        }
    }

    #[inline]
    pub fn get_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.bytes[index / 8] >> (index % 8)) & 1 == 1
    }

    #[inline]
    pub fn set_bit(&mut self, index: usize, value: bool) {
        debug_assert!(index < self.len);
        let mask = 1u8 << (index % 8);
        if value {
            self.bytes[index / 8] |= mask;
        } else {
            self.bytes[index / 8] &= !mask;
        }
    }

    /// Writes the low `width` bits of `value` starting at `offset`,
    /// least significant first. Returns the offset after the field.
    pub fn write_bits(&mut self, offset: usize, value: usize, width: u32) -> usize {
        for j in 0..width as usize {
            self.set_bit(offset + j, (value >> j) & 1 == 1);
        }
        offset + width as usize
    }

    /// Reads a `width`-bit field written by [`write_bits`](Self::write_bits).
    pub fn read_bits(&self, offset: usize, width: u32) -> usize {
        (0..width as usize).fold(0, |acc, j| {
            acc | (usize::from(self.get_bit(offset + j)) << j)
        })
    }

    /// Copies bits `start..end` into a new vector.
    pub fn slice(&self, start: usize, end: usize) -> BitVector {
        debug_assert!(start <= end && end <= self.len);
        let mut out = BitVector::new(end - start);
        for i in start..end {
            if self.get_bit(i) {
                out.set_bit(i - start, true);
            }
        }
        out
    }

    /// Length of the common run between `self[start..]` and
    /// `other[other_start..]`.
    pub fn common_prefix_len(&self, start: usize, other: &BitVector, other_start: usize) -> usize {
        let limit = (self.len - start).min(other.len - other_start);
        (0..limit)
            .take_while(|&i| self.get_bit(start + i) == other.get_bit(other_start + i))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let bits = BitVector::new(13);
        assert_eq!(bits.len(), 13);
        assert_eq!(bits.byte_len(), 2);
        assert!((0..13).all(|i| !bits.get_bit(i)));
    }

    #[test]
    fn test_set_and_clear() {
        let mut bits = BitVector::new(9);
        bits.set_bit(8, true);
        assert!(bits.get_bit(8));
        assert_eq!(bits.as_bytes(), &[0, 1]);
        bits.set_bit(8, false);
        assert_eq!(bits, BitVector::new(9));
    }

    #[test]
    fn test_fields_are_lsb_first() {
        let mut bits = BitVector::new(8);
        let next = bits.write_bits(0, 0b110, 3);
        assert_eq!(next, 3);
        assert!(!bits.get_bit(0));
        assert!(bits.get_bit(1));
        assert!(bits.get_bit(2));
        assert_eq!(bits.read_bits(0, 3), 6);
    }

    #[test]
    fn test_zero_width_field() {
        let mut bits = BitVector::new(0);
        assert_eq!(bits.write_bits(0, 5, 0), 0);
        assert_eq!(bits.read_bits(0, 0), 0);
        assert!(bits.is_empty());
    }

    #[test]
    fn test_slice_and_common_prefix() {
        let mut bits = BitVector::new(12);
        bits.write_bits(0, 0b1011_0110_1101, 12);

        let tail = bits.slice(4, 12);
        assert_eq!(tail.len(), 8);
        assert_eq!(tail.read_bits(0, 8), 0b1011_0110);

        assert_eq!(bits.common_prefix_len(4, &tail, 0), 8);
        let mut other = tail.clone();
        other.set_bit(5, !other.get_bit(5));
        assert_eq!(tail.common_prefix_len(0, &other, 0), 5);
    }

    #[test]
    fn test_small_vectors_stay_inline() {
        assert_eq!(BitVector::new(64).heap_bytes(), 0);
        assert!(BitVector::new(1024).heap_bytes() >= 128);
    }
}
