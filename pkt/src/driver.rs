//! Flag initialization backends.
//!
//! [`PktDriver`] is the seam between callers and whatever implements
//! `opennsl_pkt_flags_init`: the vendor library ([`NativeDriver`], feature
//! `native`) or the in-crate [`SoftDriver`] used on hosts without it.

use core::ffi::c_int;

use opennsl_shared::{ErrorCode, Result};

use crate::flags;
use crate::pkt::Pkt;
use crate::unit::UnitTable;

/// Packet flag initialization.
pub trait PktDriver {
    /// Set `pkt.flags` from `init_flags` and the device type of `unit`.
    ///
    /// # Returns
    /// - `Err(ErrorCode::Unit)`: unit out of range or not attached
    /// - `Err(ErrorCode::Param)`: no descriptor
    ///
    /// # Contract
    /// - Touches `pkt.flags` only
    /// - Same `(unit, init_flags)` on a fresh descriptor, same result
    fn flags_init(&self, unit: i32, pkt: Option<&mut Pkt>, init_flags: u32) -> Result<()>;

    /// C calling convention: raw pointer in, shared error code out.
    ///
    /// # Safety
    /// `pkt` must be null or valid for writes.
    unsafe fn flags_init_raw(&self, unit: c_int, pkt: *mut Pkt, init_flags: u32) -> c_int {
        match self.flags_init(unit, pkt.as_mut(), init_flags) {
            Ok(()) => ErrorCode::None.code(),
            Err(e) => e.code(),
        }
    }
}

/// Software backend driven by a [`UnitTable`].
#[derive(Default)]
pub struct SoftDriver {
    units: UnitTable,
}

impl SoftDriver {
    pub const fn new() -> Self {
        Self {
            units: UnitTable::new(),
        }
    }

    /// Registry of attached units.
    pub fn units(&self) -> &UnitTable {
        &self.units
    }
}

impl PktDriver for SoftDriver {
    fn flags_init(&self, unit: i32, pkt: Option<&mut Pkt>, init_flags: u32) -> Result<()> {
        let config = self.units.config(unit).map_err(|e| {
            log::warn!("flags_init: unit {}: {}", unit, e);
            e
        })?;
        let pkt = pkt.ok_or_else(|| {
            log::warn!("flags_init: unit {}: null packet", unit);
            ErrorCode::Param
        })?;

        pkt.flags = init_flags | config.default_flags();
        if log::log_enabled!(log::Level::Trace) {
            for name in flags::describe(pkt.flags) {
                log::trace!("flags_init: unit {}: {}", unit, name);
            }
        }
        Ok(())
    }
}

/// Backend calling into the vendor driver library.
#[cfg(feature = "native")]
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDriver;

#[cfg(feature = "native")]
impl PktDriver for NativeDriver {
    fn flags_init(&self, unit: i32, pkt: Option<&mut Pkt>, init_flags: u32) -> Result<()> {
        let raw = pkt.map_or(core::ptr::null_mut(), |p| p as *mut Pkt);
        // SAFETY: `raw` is null or derived from a live exclusive borrow.
        let rv = unsafe { crate::ffi::opennsl_pkt_flags_init(unit, raw, init_flags) };
        ErrorCode::check(rv).map(|_| ()).map_err(|e| {
            log::warn!("opennsl_pkt_flags_init: unit {}: {} ({})", unit, e, rv);
            e
        })
    }
}
