//! Packet descriptor (`opennsl_pkt_t`) and gather block (`opennsl_pkt_blk_t`).
//!
//! Packet layout in the data blocks:
//!
//! ```text
//!   DMAC + SMAC     12 bytes
//!   VLAN tag         4 bytes (may be filled in by SW on network switch)
//!   payload          N bytes
//!   CRC              4 bytes
//!   pad              M bytes
//!   SL tag           4 bytes (may be unused)
//!   HiGig header    12 bytes (may be unused)
//! ```
//!
//! `pkt_len` counts the IEEE packet only (DMAC through CRC); see
//! [`crate::framing`].
//!
//! CRITICAL: `Pkt` MUST match the driver library's layout exactly. The
//! reserved slots carry driver-private state and are kept as opaque
//! storage in the driver's field order and types.

use core::ffi::{c_int, c_void};
use core::{fmt, ptr, slice};

use opennsl_shared::{ErrorCode, Pbmp, Result, RxReasons};

use crate::types::*;

/// One scatter/gather segment. Does not own `data`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PktBlk {
    pub data: *mut u8,
    pub len: c_int,
}

impl PktBlk {
    /// Block referencing nothing.
    pub const fn null() -> Self {
        Self {
            data: ptr::null_mut(),
            len: 0,
        }
    }

    pub const fn new(data: *mut u8, len: c_int) -> Self {
        Self { data, len }
    }

    /// Block over `buf`. Fails with `Param` if the length overflows `c_int`.
    pub fn from_slice(buf: &mut [u8]) -> Result<Self> {
        let len = c_int::try_from(buf.len()).map_err(|_| ErrorCode::Param)?;
        Ok(Self::new(buf.as_mut_ptr(), len))
    }

    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }
}

impl Default for PktBlk {
    fn default() -> Self {
        Self::null()
    }
}

/// Packet descriptor.
#[repr(C)]
pub struct Pkt {
    /// Pointer to array of data blocks.
    pub pkt_data: *mut PktBlk,
    /// Number of blocks in data array.
    pub blk_count: u8,
    /// Unit number.
    pub unit: u8,
    _reserved1: u8,
    _reserved2: u8,
    /// 802.1q VID or VSI or VPN.
    pub vlan: Vlan,
    _reserved3: u8,
    _reserved4: u8,
    _reserved5: Vlan,
    _reserved6: u8,
    _reserved7: u8,
    _reserved8: Color,
    /// Source port used in header/tag.
    pub src_port: i8,
    _reserved9: Trunk,
    _reserved10: u16,
    _reserved11: u8,
    _reserved12: u16,
    _reserved13: u8,
    _reserved14: Gport,
    _reserved15: Gport,
    _reserved16: Multicast,
    _reserved17: u32,
    _reserved18: PktStkForward,
    _reserved19: u32,
    _reserved20: u32,
    _reserved21: u32,
    _reserved22: u32,
    _reserved23: If,
    /// Packet length according to flags.
    pub pkt_len: u16,
    _reserved24: u16,
    /// Target ports.
    pub tx_pbmp: Pbmp,
    /// Untagged target ports.
    pub tx_upbmp: Pbmp,
    _reserved25: Pbmp,
    _reserved26: Port,
    _reserved27: u8,
    _reserved28: u32,
    _reserved29: RxReasons,
    _reserved30: u32,
    _reserved31: u8,
    _reserved32: u8,
    _reserved33: u8,
    _reserved34: u8,
    _reserved35: u32,
    _reserved36: u32,
    _reserved37: If,
    _reserved38: VlanAction,
    _reserved39: VlanAction,
    _reserved40: u32,
    _reserved41: u32,
    _reserved42: u32,
    _reserved43: *mut c_void,
    _reserved44: *mut c_void,
    _reserved45: PktCb,
    /// `PKT_F_*` / `TX_*` flags, see [`crate::flags`].
    pub flags: u32,
    _reserved46: *mut c_void,
    _reserved47: i8,
    /// Embedded block used by single-buffer setup.
    one_blk: PktBlk,
    _reserved49: *mut Pkt,
    _reserved50: *mut c_void,
    _reserved51: i8,
    _reserved52: *mut Pkt,
    _reserved53: *mut c_void,
    _reserved54: *mut c_void,
    _reserved55: [u8; 16],
    _reserved56: [u8; 12],
    _reserved57: [u8; 4],
    _reserved58: [u8; 4],
    _reserved59: [u8; 16],
    _reserved60: u8,
    _reserved61: [u8; 10],
    _reserved62: c_int,
    _reserved63: c_int,
    _reserved64: u32,
    _reserved65: Pbmp,
    _reserved66: Pbmp,
    _reserved67: u32,
    _reserved68: u8,
    _reserved69: u8,
    _reserved70: u16,
    _reserved71: u32,
    _reserved72: *mut c_void,
    _reserved73: u16,
    _reserved74: u16,
    _reserved75: PktTimestampMode,
    _reserved76: PktOamLmCounterMode,
    _reserved77: PktOamLmCounterMode,
    _reserved78: u8,
    _reserved79: RxDecapTunnel,
    _reserved80: Gport,
    _reserved81: Gport,
    _reserved82: u32,
    _reserved83: c_int,
    _reserved84: Gport,
    _reserved85: u32,
    _reserved86: u32,
}

impl Pkt {
    /// All-zero descriptor: no blocks, null pointers, no flags.
    pub const fn new() -> Self {
        // SAFETY: every field is an integer, a raw pointer, an array of
        // those, or an `Option<fn>`; all-zero is a valid value for each.
        unsafe { core::mem::zeroed() }
    }

    /// Point the descriptor at a single caller-owned buffer.
    ///
    /// Wires the embedded block to `buf`/`len`, points `pkt_data` at it and
    /// sets `blk_count` to 1. Nothing is validated or copied. The buffer
    /// must outlive any TX/RX call using the descriptor, and the
    /// descriptor must not move while `pkt_data` is in use.
    pub fn one_buf_setup(&mut self, buf: *mut u8, len: c_int) {
        self.one_blk.data = buf;
        self.one_blk.len = len;
        self.pkt_data = &mut self.one_blk;
        self.blk_count = 1;
    }

    /// [`one_buf_setup`](Self::one_buf_setup) over a slice.
    pub fn one_buf_setup_slice(&mut self, buf: &mut [u8]) -> Result<()> {
        let blk = PktBlk::from_slice(buf)?;
        self.one_buf_setup(blk.data, blk.len);
        Ok(())
    }

    /// Point the descriptor at a caller-owned block array.
    ///
    /// Fails with `Param` when the array is longer than `blk_count` can
    /// express. Same lifetime rules as `one_buf_setup`.
    pub fn set_blocks(&mut self, blocks: &mut [PktBlk]) -> Result<()> {
        let count = u8::try_from(blocks.len()).map_err(|_| ErrorCode::Param)?;
        self.pkt_data = if count == 0 {
            ptr::null_mut()
        } else {
            blocks.as_mut_ptr()
        };
        self.blk_count = count;
        Ok(())
    }

    /// The embedded single-buffer block.
    pub fn one_blk(&self) -> &PktBlk {
        &self.one_blk
    }

    /// Check if `pkt_data` points at the embedded block.
    pub fn uses_one_blk(&self) -> bool {
        ptr::eq(self.pkt_data, &self.one_blk)
    }

    /// The valid blocks.
    ///
    /// # Safety
    /// `pkt_data` must point to at least `blk_count` initialized blocks
    /// that stay alive and unaliased for the returned lifetime.
    pub unsafe fn blocks(&self) -> &[PktBlk] {
        if self.pkt_data.is_null() || self.blk_count == 0 {
            return &[];
        }
        slice::from_raw_parts(self.pkt_data, self.blk_count as usize)
    }

    /// Bytes across all valid blocks. Negative lengths count as zero;
    /// the sum saturates at `usize::MAX`.
    ///
    /// # Safety
    /// Same as [`blocks`](Self::blocks).
    pub unsafe fn total_block_len(&self) -> usize {
        self.blocks()
            .iter()
            .map(|b| b.len.max(0) as usize)
            .fold(0usize, usize::saturating_add)
    }

    /// Check the descriptor invariants before handing it to the driver.
    ///
    /// - `blk_count > 0` requires a non-null `pkt_data`
    /// - blocks have non-negative lengths, and non-empty ones a buffer
    /// - `pkt_len` fits in the concatenated block bytes
    ///
    /// # Safety
    /// Same as [`blocks`](Self::blocks).
    pub unsafe fn validate(&self) -> Result<()> {
        if self.blk_count > 0 && self.pkt_data.is_null() {
            return Err(ErrorCode::Param);
        }
        for blk in self.blocks() {
            if blk.len < 0 || (blk.len > 0 && blk.is_null()) {
                return Err(ErrorCode::Param);
            }
        }
        if self.pkt_len as usize > self.total_block_len() {
            return Err(ErrorCode::Param);
        }
        Ok(())
    }
}

impl Default for Pkt {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Pkt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pkt")
            .field("pkt_data", &self.pkt_data)
            .field("blk_count", &self.blk_count)
            .field("unit", &self.unit)
            .field("vlan", &self.vlan)
            .field("src_port", &self.src_port)
            .field("pkt_len", &self.pkt_len)
            .field("tx_pbmp", &self.tx_pbmp)
            .field("tx_upbmp", &self.tx_upbmp)
            .field("flags", &format_args!("{:#x}", self.flags))
            .finish_non_exhaustive()
    }
}
