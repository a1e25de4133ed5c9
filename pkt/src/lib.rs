//! OpenNSL Packet Transmit and Receive
//!
//! Layout of the packet descriptor handed to the driver's TX/RX entry
//! points, plus the two helpers that live at this layer: single-buffer
//! setup and device-specific flag initialization.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Application                             │
//! └─────────────────────────────────────────────────────────────────┘
//!          │ Pkt::one_buf_setup            │ PktDriver::flags_init
//!          ▼                               ▼
//! ┌──────────────────────┐     ┌──────────────────────────────────┐
//! │   Pkt  (#[repr(C)])  │     │ SoftDriver      NativeDriver     │
//! │   PktBlk[blk_count]  │◀────│ (UnitTable)     (extern "C")     │
//! └──────────────────────┘     └──────────────────────────────────┘
//!                                              │ feature "native"
//!                                              ▼
//!                                     vendor driver library
//! ```
//!
//! # Usage
//!
//! ```
//! use opennsl_pkt::{flags, DeviceConfig, DeviceType, Pkt, PktDriver, SoftDriver};
//!
//! # fn main() -> opennsl_pkt::Result<()> {
//! let driver = SoftDriver::new();
//! driver.units().attach(0, DeviceConfig::new(DeviceType::Xgs))?;
//!
//! let mut buf = [0u8; 128];
//! let mut pkt = Pkt::new();
//! pkt.one_buf_setup_slice(&mut buf)?;
//! driver.flags_init(0, Some(&mut pkt), flags::TX_CRC_APPEND)?;
//! assert_eq!(pkt.flags, flags::TX_CRC_APPEND);
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Descriptors are plain data. Neither helper may run concurrently on the
//! same descriptor without external synchronization.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod driver;
pub mod flags;
pub mod framing;
pub mod pkt;
pub mod types;
pub mod unit;

#[cfg(feature = "native")]
mod ffi;

pub use driver::{PktDriver, SoftDriver};
#[cfg(feature = "native")]
pub use driver::NativeDriver;
pub use pkt::{Pkt, PktBlk};
pub use types::{PktCb, Vlan, MAX_UNITS};
pub use unit::{DeviceConfig, DeviceType, UnitTable};

pub use opennsl_shared::{ErrorCode, Result};
