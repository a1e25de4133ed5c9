//! Scalar handle types embedded in the packet descriptor.
//!
//! These mirror the C typedefs one-for-one; every enum-typed slot is a
//! plain `c_int` because the driver owns the enumerator values.

use core::ffi::{c_int, c_void};

use crate::pkt::Pkt;

/// Maximum number of switch units in one system.
pub const MAX_UNITS: usize = 18;

/// 802.1Q VID, VSI or VPN.
pub type Vlan = u16;

pub type Color = c_int;
pub type Trunk = c_int;
pub type Gport = c_int;
pub type Multicast = c_int;
pub type If = c_int;
pub type Port = c_int;
pub type VlanAction = c_int;

/// Stacking header forwarding option (driver-defined values).
pub type PktStkForward = c_int;
/// Decap tunnel type (driver-defined values).
pub type RxDecapTunnel = c_int;
/// OAM DM timestamp mode (driver-defined values).
pub type PktTimestampMode = c_int;
/// OAM LM counter mode (driver-defined values).
pub type PktOamLmCounterMode = c_int;

/// Packet completion / arrival callback.
pub type PktCb = Option<unsafe extern "C" fn(unit: c_int, pkt: *mut Pkt, cookie: *mut c_void)>;
