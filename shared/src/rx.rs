//! RX reason set (`_shr_rx_reasons_t`).
//!
//! The driver marks why a packet was copied to the CPU by setting reason
//! bits in the descriptor. Reason numbering belongs to the driver; this
//! type only stores the bits.

use core::fmt;

use crate::bitop::{self, SetBits};
use crate::error::Result;

/// Number of distinct RX reasons.
pub const RX_REASON_COUNT: usize = 160;

const RX_REASON_WORDS: usize = bitop::words_for(RX_REASON_COUNT);

/// Set of RX reasons.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RxReasons {
    pbits: [u32; RX_REASON_WORDS],
}

impl RxReasons {
    pub const fn new() -> Self {
        Self {
            pbits: [0; RX_REASON_WORDS],
        }
    }

    pub fn add(&mut self, reason: usize) -> Result<()> {
        bitop::set(&mut self.pbits, reason)
    }

    pub fn remove(&mut self, reason: usize) -> Result<()> {
        bitop::clear(&mut self.pbits, reason)
    }

    pub fn contains(&self, reason: usize) -> bool {
        reason < RX_REASON_COUNT && bitop::test(&self.pbits, reason)
    }

    pub fn count(&self) -> usize {
        bitop::count(&self.pbits)
    }

    pub fn is_empty(&self) -> bool {
        self.pbits.iter().all(|w| *w == 0)
    }

    pub fn clear(&mut self) {
        self.pbits = [0; RX_REASON_WORDS];
    }

    pub fn iter(&self) -> SetBits<'_> {
        SetBits::new(&self.pbits)
    }
}

impl fmt::Debug for RxReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
