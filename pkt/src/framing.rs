//! IEEE packet framing rules.
//!
//! The rule is: alloc_len = 12 + 4 + N + 4 + M + 4 + 12, with N the
//! payload and M the pad. The payload may grow until M == 0; the CRC moves
//! with it while the SL tag and HiGig header stay put. The IEEE packet is
//! DMAC through CRC inclusive and excludes both trailing headers.

use opennsl_shared::{ErrorCode, Result};

/// DMAC + SMAC.
pub const MAC_ADDRS_LEN: usize = 12;
/// 802.1Q tag.
pub const VLAN_TAG_LEN: usize = 4;
/// Ethernet FCS.
pub const CRC_LEN: usize = 4;
/// SL stacking tag.
pub const SL_TAG_LEN: usize = 4;
/// HiGig header.
pub const HIGIG_HDR_LEN: usize = 12;

/// Fixed bytes around payload and pad.
pub const OVERHEAD_LEN: usize = MAC_ADDRS_LEN + VLAN_TAG_LEN + CRC_LEN + SL_TAG_LEN + HIGIG_HDR_LEN;

/// Buffer size for `payload` bytes followed by `pad` bytes of headroom.
pub const fn alloc_len(payload: usize, pad: usize) -> usize {
    OVERHEAD_LEN + payload + pad
}

/// IEEE packet length for `payload` bytes, with or without a VLAN tag.
pub const fn ieee_len(payload: usize, tagged: bool) -> usize {
    let tag = if tagged { VLAN_TAG_LEN } else { 0 };
    MAC_ADDRS_LEN + tag + payload + CRC_LEN
}

/// Payload/pad split of one allocated packet buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IeeeFrame {
    alloc_len: usize,
    payload: usize,
}

impl IeeeFrame {
    /// Split `alloc_len` with `payload` bytes of payload.
    ///
    /// Fails with `Param` when the buffer cannot hold the payload.
    pub fn new(alloc_len: usize, payload: usize) -> Result<Self> {
        if alloc_len < OVERHEAD_LEN + payload {
            return Err(ErrorCode::Param);
        }
        Ok(Self { alloc_len, payload })
    }

    pub fn alloc_len(&self) -> usize {
        self.alloc_len
    }

    pub fn payload(&self) -> usize {
        self.payload
    }

    /// Unused bytes between CRC and SL tag.
    pub fn pad(&self) -> usize {
        self.alloc_len - OVERHEAD_LEN - self.payload
    }

    /// Offset of the CRC, which trails the payload.
    pub fn crc_offset(&self) -> usize {
        MAC_ADDRS_LEN + VLAN_TAG_LEN + self.payload
    }

    /// Offset of the SL tag. Independent of payload size.
    pub fn sl_tag_offset(&self) -> usize {
        self.alloc_len - HIGIG_HDR_LEN - SL_TAG_LEN
    }

    /// Offset of the HiGig header. Independent of payload size.
    pub fn higig_offset(&self) -> usize {
        self.alloc_len - HIGIG_HDR_LEN
    }

    /// IEEE length of this frame as carried in `Pkt::pkt_len`.
    pub fn ieee_len(&self) -> usize {
        ieee_len(self.payload, true)
    }

    /// Grow the payload into the pad. Fails with `Full` past the pad.
    pub fn grow(&mut self, extra: usize) -> Result<()> {
        if extra > self.pad() {
            return Err(ErrorCode::Full);
        }
        self.payload += extra;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alloc_len() {
        assert_eq!(OVERHEAD_LEN, 36);
        assert_eq!(alloc_len(46, 0), 82);
        assert_eq!(alloc_len(46, 10), 92);
    }

    #[test]
    fn test_ieee_len() {
        assert_eq!(ieee_len(46, true), 66);
        assert_eq!(ieee_len(46, false), 62);
    }

    #[test]
    fn test_frame_offsets() {
        let frame = IeeeFrame::new(alloc_len(100, 20), 100).unwrap();
        assert_eq!(frame.pad(), 20);
        assert_eq!(frame.crc_offset(), 116);
        assert_eq!(frame.sl_tag_offset(), 140);
        assert_eq!(frame.higig_offset(), 144);
        assert_eq!(frame.ieee_len(), 120);
    }

    #[test]
    fn test_grow_moves_crc_only() {
        let mut frame = IeeeFrame::new(alloc_len(100, 20), 100).unwrap();
        let sl = frame.sl_tag_offset();
        let hg = frame.higig_offset();
        frame.grow(20).unwrap();
        assert_eq!(frame.pad(), 0);
        assert_eq!(frame.crc_offset(), 136);
        assert_eq!(frame.sl_tag_offset(), sl);
        assert_eq!(frame.higig_offset(), hg);
        assert_eq!(frame.grow(1), Err(ErrorCode::Full));
    }

    #[test]
    fn test_too_small() {
        assert_eq!(IeeeFrame::new(35, 0), Err(ErrorCode::Param));
        assert!(IeeeFrame::new(36, 0).is_ok());
    }
}
