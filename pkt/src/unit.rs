//! Unit registry and per-device configuration.
//!
//! Flag initialization depends on the device type of the unit, so a unit
//! has to be attached with a [`DeviceConfig`] before descriptors can be
//! initialized for it.

use spin::Mutex;

use opennsl_shared::{ErrorCode, Result};

use crate::flags::{PKT_F_HGHDR, PKT_F_SLTAG, TX_CRC_REGEN};
use crate::types::MAX_UNITS;

/// Device family of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    /// Plain Ethernet switch.
    Xgs,
    /// Switch whose CPU path carries a HiGig header.
    XgsHigig,
    /// Switch stacked through SL tags.
    Stacking,
}

impl DeviceType {
    /// Flags every descriptor for this device starts with.
    pub const fn default_flags(self) -> u32 {
        match self {
            DeviceType::Xgs => 0,
            DeviceType::XgsHigig => PKT_F_HGHDR,
            DeviceType::Stacking => PKT_F_SLTAG,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Xgs => "xgs",
            DeviceType::XgsHigig => "xgs-higig",
            DeviceType::Stacking => "stacking",
        }
    }
}

/// Per-unit configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Device family.
    pub device_type: DeviceType,
    /// Regenerate the CRC on every TX by default.
    pub crc_regen: bool,
    /// Extra bits OR-ed into every descriptor.
    pub extra_flags: u32,
}

impl DeviceConfig {
    pub const fn new(device_type: DeviceType) -> Self {
        Self {
            device_type,
            crc_regen: false,
            extra_flags: 0,
        }
    }

    /// Set CRC regeneration default.
    pub const fn crc_regen(mut self, enable: bool) -> Self {
        self.crc_regen = enable;
        self
    }

    /// Set extra default flags.
    pub const fn extra_flags(mut self, flags: u32) -> Self {
        self.extra_flags = flags;
        self
    }

    /// Default flags for descriptors on this unit.
    pub const fn default_flags(&self) -> u32 {
        let regen = if self.crc_regen { TX_CRC_REGEN } else { 0 };
        self.device_type.default_flags() | regen | self.extra_flags
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self::new(DeviceType::Xgs)
    }
}

/// Map a raw unit number to a table slot. Fails with `Unit`.
pub fn unit_index(unit: i32) -> Result<usize> {
    usize::try_from(unit)
        .ok()
        .filter(|idx| *idx < MAX_UNITS)
        .ok_or(ErrorCode::Unit)
}

/// Attached units, one slot per unit number.
pub struct UnitTable {
    slots: Mutex<[Option<DeviceConfig>; MAX_UNITS]>,
}

impl UnitTable {
    pub const fn new() -> Self {
        Self {
            slots: Mutex::new([None; MAX_UNITS]),
        }
    }

    /// Attach `unit`. Fails with `Unit` out of range, `Exists` if attached.
    pub fn attach(&self, unit: i32, config: DeviceConfig) -> Result<()> {
        let idx = unit_index(unit)?;
        let mut slots = self.slots.lock();
        if slots[idx].is_some() {
            log::warn!("unit {}: already attached", unit);
            return Err(ErrorCode::Exists);
        }
        slots[idx] = Some(config);
        log::debug!(
            "unit {}: attached as {} (default flags {:#x})",
            unit,
            config.device_type.as_str(),
            config.default_flags()
        );
        Ok(())
    }

    /// Detach `unit`. Fails with `Unit` out of range, `Init` if not attached.
    pub fn detach(&self, unit: i32) -> Result<DeviceConfig> {
        let idx = unit_index(unit)?;
        let config = self.slots.lock()[idx].take().ok_or(ErrorCode::Init)?;
        log::debug!("unit {}: detached", unit);
        Ok(config)
    }

    pub fn is_attached(&self, unit: i32) -> bool {
        self.config(unit).is_ok()
    }

    /// Configuration of an attached unit. Fails with `Unit` otherwise.
    pub fn config(&self, unit: i32) -> Result<DeviceConfig> {
        let idx = unit_index(unit)?;
        self.slots.lock()[idx].ok_or(ErrorCode::Unit)
    }

    /// Number of attached units.
    pub fn count(&self) -> usize {
        self.slots.lock().iter().filter(|s| s.is_some()).count()
    }
}

impl Default for UnitTable {
    fn default() -> Self {
        Self::new()
    }
}
