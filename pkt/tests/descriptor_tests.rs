//! Descriptor helper tests

use opennsl_pkt::flags::{self, TX_CRC_APPEND, TX_ETHER};
use opennsl_pkt::framing::{alloc_len, IeeeFrame};
use opennsl_pkt::{DeviceConfig, DeviceType, ErrorCode, Pkt, PktBlk, PktDriver, SoftDriver, MAX_UNITS};
use proptest::prelude::*;

fn attached(config: DeviceConfig) -> SoftDriver {
    let driver = SoftDriver::new();
    driver.units().attach(0, config).expect("attach unit 0");
    driver
}

#[test]
fn test_one_buf_setup_pointer_identity() {
    let mut buf = vec![0xAAu8; 128];
    let ptr = buf.as_mut_ptr();

    let mut pkt = Pkt::new();
    pkt.one_buf_setup(ptr, 128);

    assert_eq!(pkt.blk_count, 1);
    let blocks = unsafe { pkt.blocks() };
    assert_eq!(blocks, &[PktBlk::new(ptr, 128)]);

    // Writes through the block land in the caller's buffer
    unsafe { *blocks[0].data = 0x55 };
    assert_eq!(buf[0], 0x55);
}

#[test]
fn test_one_buf_setup_overrides_gather_list() {
    let mut a = [0u8; 8];
    let mut b = [0u8; 8];
    let mut blocks = [PktBlk::from_slice(&mut a).unwrap(), PktBlk::from_slice(&mut b).unwrap()];
    let mut pkt = Pkt::new();
    pkt.set_blocks(&mut blocks).unwrap();
    assert_eq!(pkt.blk_count, 2);

    let mut one = [0u8; 64];
    pkt.one_buf_setup_slice(&mut one).unwrap();
    assert_eq!(pkt.blk_count, 1);
    assert!(pkt.uses_one_blk());
    assert_eq!(pkt.one_blk().data, one.as_mut_ptr());
}

#[test]
fn test_flags_init_touches_flags_only() {
    let driver = attached(DeviceConfig::new(DeviceType::Stacking).crc_regen(true));
    let mut buf = [0u8; 80];
    let mut pkt = Pkt::new();
    pkt.one_buf_setup_slice(&mut buf).unwrap();
    pkt.unit = 0;
    pkt.vlan = 10;
    pkt.src_port = -1;
    pkt.pkt_len = 64;
    pkt.tx_pbmp.port_add(3).unwrap();
    pkt.tx_upbmp.port_add(4).unwrap();

    driver.flags_init(0, Some(&mut pkt), TX_ETHER).unwrap();

    assert_eq!(pkt.flags, TX_ETHER | flags::PKT_F_SLTAG | flags::TX_CRC_REGEN);
    assert_eq!(pkt.blk_count, 1);
    assert!(pkt.uses_one_blk());
    assert_eq!(pkt.vlan, 10);
    assert_eq!(pkt.src_port, -1);
    assert_eq!(pkt.pkt_len, 64);
    assert!(pkt.tx_pbmp.member(3));
    assert!(pkt.tx_upbmp.member(4));
    assert_eq!(unsafe { pkt.validate() }, Ok(()));
}

#[test]
fn test_flags_init_requires_attached_unit() {
    let driver = SoftDriver::new();
    let mut pkt = Pkt::new();
    for unit in [0, MAX_UNITS as i32 - 1] {
        assert_eq!(driver.flags_init(unit, Some(&mut pkt), 0), Err(ErrorCode::Unit));
    }
    assert_eq!(driver.flags_init(MAX_UNITS as i32, Some(&mut pkt), 0), Err(ErrorCode::Unit));

    driver.units().attach(5, DeviceConfig::default()).unwrap();
    assert_eq!(driver.flags_init(5, Some(&mut pkt), TX_CRC_APPEND), Ok(()));

    driver.units().detach(5).unwrap();
    assert_eq!(driver.flags_init(5, Some(&mut pkt), 0), Err(ErrorCode::Unit));
}

#[test]
fn test_framed_buffer_validates() {
    let frame = IeeeFrame::new(alloc_len(46, 18), 46).unwrap();
    let mut buf = vec![0u8; frame.alloc_len()];
    let mut pkt = Pkt::new();
    pkt.one_buf_setup_slice(&mut buf).unwrap();
    pkt.pkt_len = frame.ieee_len() as u16;
    assert_eq!(unsafe { pkt.validate() }, Ok(()));
}

proptest! {
    #[test]
    fn flags_init_is_idempotent(init_flags in any::<u32>(), higig in any::<bool>()) {
        let kind = if higig { DeviceType::XgsHigig } else { DeviceType::Xgs };
        let driver = attached(DeviceConfig::new(kind));

        let mut first = Pkt::new();
        driver.flags_init(0, Some(&mut first), init_flags).unwrap();
        let mut second = Pkt::new();
        driver.flags_init(0, Some(&mut second), init_flags).unwrap();
        prop_assert_eq!(first.flags, second.flags);

        driver.flags_init(0, Some(&mut first), init_flags).unwrap();
        prop_assert_eq!(first.flags, second.flags);
        prop_assert_eq!(first.flags & init_flags, init_flags);
    }

    #[test]
    fn one_buf_setup_keeps_len(len in any::<i32>()) {
        let mut buf = [0u8; 4];
        let mut pkt = Pkt::new();
        pkt.one_buf_setup(buf.as_mut_ptr(), len);
        prop_assert_eq!(pkt.blk_count, 1);
        prop_assert_eq!(pkt.one_blk().len, len);
        prop_assert_eq!(pkt.one_blk().data, buf.as_mut_ptr());
    }
}
