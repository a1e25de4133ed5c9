//! Symbols exported by the vendor driver library.

use core::ffi::c_int;

use crate::pkt::Pkt;

#[link(name = "opennsl")]
extern "C" {
    /// Initialize `pkt->flags` from `init_flags` and the device type of
    /// `unit`. Returns a shared error code.
    pub fn opennsl_pkt_flags_init(unit: c_int, pkt: *mut Pkt, init_flags: u32) -> c_int;
}
