//! Descriptor flag bits (`Pkt::flags`).

/// Packet carries a HiGig header.
pub const PKT_F_HGHDR: u32 = 0x1;
/// Packet carries an SL stacking tag.
pub const PKT_F_SLTAG: u32 = 0x2;
/// Packet has no VLAN tag.
pub const PKT_F_NO_VTAG: u32 = 0x4;
/// Test packet.
pub const PKT_F_TEST: u32 = 0x8;

/// Allocate room for the CRC.
pub const TX_CRC_ALLOC: u32 = 0x10;
/// Regenerate the CRC.
pub const TX_CRC_REGEN: u32 = 0x20;
/// Append a fresh CRC.
pub const TX_CRC_APPEND: u32 = TX_CRC_ALLOC + TX_CRC_REGEN;
/// Corrupt the CRC on purpose.
pub const TX_CRC_FORCE_ERROR: u32 = 0x40;
/// Do not pad short frames.
pub const TX_NO_PAD: u32 = 0x80;
/// Fully mapped packet TX.
pub const TX_ETHER: u32 = 0x100000;

const NAMES: [(u32, &str); 9] = [
    (PKT_F_HGHDR, "HGHDR"),
    (PKT_F_SLTAG, "SLTAG"),
    (PKT_F_NO_VTAG, "NO_VTAG"),
    (PKT_F_TEST, "TEST"),
    (TX_CRC_ALLOC, "CRC_ALLOC"),
    (TX_CRC_REGEN, "CRC_REGEN"),
    (TX_CRC_FORCE_ERROR, "CRC_FORCE_ERROR"),
    (TX_NO_PAD, "NO_PAD"),
    (TX_ETHER, "ETHER"),
];

/// Every named bit.
pub const KNOWN: u32 = {
    let mut all = 0;
    let mut i = 0;
    while i < NAMES.len() {
        all |= NAMES[i].0;
        i += 1;
    }
    all
};

/// Names of the known bits set in `flags`, lowest bit first.
pub fn describe(flags: u32) -> impl Iterator<Item = &'static str> {
    let names: &'static [(u32, &str)] = &NAMES;
    names
        .iter()
        .filter(move |(bit, _)| flags & bit != 0)
        .map(|(_, name)| *name)
}

/// Bits set in `flags` that have no name here. The driver may still
/// assign them meaning.
pub const fn unknown_bits(flags: u32) -> u32 {
    flags & !KNOWN
}
