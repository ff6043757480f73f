//! Bitboard implementation for line matching

use super::MAX_CELLS;

/// One bit per cell, row-major. 16 bits cover the 4x4 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub const fn from_bits(bits: u16) -> Self {
        Self { bits }
    }

    #[inline]
    pub fn bits(self) -> u16 {
        self.bits
    }

    /// Set the bit at a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits |= 1u16 << idx;
    }

    /// Clear the bit at a cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < MAX_CELLS);
        self.bits &= !(1u16 << idx);
    }

    /// Check if the bit at a cell index is set
    #[inline]
    pub fn get(self, idx: usize) -> bool {
        (self.bits >> idx) & 1 == 1
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// True if every bit of `mask` is set
    #[inline]
    pub fn contains_all(self, mask: u16) -> bool {
        self.bits & mask == mask
    }

    /// Number of set bits inside `mask`
    #[inline]
    pub fn count_in(self, mask: u16) -> u32 {
        (self.bits & mask).count_ones()
    }

    /// Iterate over set bit indices, lowest first
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        bb.set(0);
        bb.set(15);
        assert!(bb.get(0));
        assert!(bb.get(15));
        assert!(!bb.get(7));
        assert_eq!(bb.count(), 2);

        bb.clear(0);
        assert!(!bb.get(0));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let bb = Bitboard::from_bits(0b1000_0000_0010_0101);
        let ones: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(ones, vec![0, 2, 5, 15]);
    }

    #[test]
    fn test_mask_queries() {
        let bb = Bitboard::from_bits(0b0111);
        assert!(bb.contains_all(0b0011));
        assert!(!bb.contains_all(0b1001));
        assert_eq!(bb.count_in(0b1110), 2);
        assert!(Bitboard::new().is_empty());
    }
}
