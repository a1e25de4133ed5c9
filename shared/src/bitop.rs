//! Fixed-size bit arrays over `u32` words.
//!
//! Same word layout the driver uses for its `SHR_BITDCL` arrays: bit `n`
//! lives in word `n / 32` at position `n % 32`.

use crate::error::{ErrorCode, Result};

/// Bits per array word.
pub const WORD_BITS: usize = 32;

/// Words needed to hold `bits` bits.
#[inline]
pub const fn words_for(bits: usize) -> usize {
    (bits + WORD_BITS - 1) / WORD_BITS
}

#[inline]
const fn locate(bit: usize) -> (usize, u32) {
    (bit / WORD_BITS, 1u32 << (bit % WORD_BITS))
}

/// Set `bit`. Fails with `Param` past the end of the array.
pub fn set(words: &mut [u32], bit: usize) -> Result<()> {
    let (w, mask) = locate(bit);
    let word = words.get_mut(w).ok_or(ErrorCode::Param)?;
    *word |= mask;
    Ok(())
}

/// Clear `bit`. Fails with `Param` past the end of the array.
pub fn clear(words: &mut [u32], bit: usize) -> Result<()> {
    let (w, mask) = locate(bit);
    let word = words.get_mut(w).ok_or(ErrorCode::Param)?;
    *word &= !mask;
    Ok(())
}

/// Test `bit`. Out-of-range bits read as clear.
pub fn test(words: &[u32], bit: usize) -> bool {
    let (w, mask) = locate(bit);
    words.get(w).map_or(false, |word| word & mask != 0)
}

/// Population count.
pub fn count(words: &[u32]) -> usize {
    words.iter().map(|w| w.count_ones() as usize).sum()
}

/// Iterator over set bit indices, ascending.
pub struct SetBits<'a> {
    words: &'a [u32],
    idx: usize,
    cur: u32,
}

impl<'a> SetBits<'a> {
    pub fn new(words: &'a [u32]) -> Self {
        Self {
            words,
            idx: 0,
            cur: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for SetBits<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.cur != 0 {
                let bit = self.cur.trailing_zeros() as usize;
                // clear lowest set bit
                self.cur &= self.cur - 1;
                return Some(self.idx * WORD_BITS + bit);
            }
            self.idx += 1;
            self.cur = *self.words.get(self.idx)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_for() {
        assert_eq!(words_for(0), 0);
        assert_eq!(words_for(1), 1);
        assert_eq!(words_for(32), 1);
        assert_eq!(words_for(33), 2);
        assert_eq!(words_for(256), 8);
    }

    #[test]
    fn test_set_clear() {
        let mut words = [0u32; 2];
        set(&mut words, 0).unwrap();
        set(&mut words, 33).unwrap();
        assert_eq!(words, [1, 2]);
        assert!(test(&words, 33));
        clear(&mut words, 33).unwrap();
        assert!(!test(&words, 33));
        assert_eq!(count(&words), 1);
    }

    #[test]
    fn test_out_of_range() {
        let mut words = [0u32; 1];
        assert_eq!(set(&mut words, 32), Err(ErrorCode::Param));
        assert_eq!(clear(&mut words, 99), Err(ErrorCode::Param));
        assert!(!test(&words, 32));
    }

    #[test]
    fn test_iter() {
        let words = [0x8000_0001u32, 0, 0x10];
        let bits: Vec<usize> = SetBits::new(&words).collect();
        assert_eq!(bits, vec![0, 31, 68]);
        assert_eq!(SetBits::new(&[]).next(), None);
    }
}
