//! Port bitmap (`_shr_pbmp_t`).
//!
//! Bit `p` set means port `p` is a member. The width is fixed at build
//! time and must match the driver library the crate links against.

use core::fmt;

use crate::bitop::{self, SetBits};
use crate::error::Result;

/// Highest port count a bitmap can describe.
pub const PBMP_PORT_MAX: usize = 256;

/// Number of `u32` words in a bitmap.
pub const PBMP_WORD_MAX: usize = bitop::words_for(PBMP_PORT_MAX);

/// Port bitmap.
#[repr(C)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pbmp {
    pub pbits: [u32; PBMP_WORD_MAX],
}

impl Pbmp {
    /// Empty bitmap.
    pub const fn new() -> Self {
        Self {
            pbits: [0; PBMP_WORD_MAX],
        }
    }

    /// Bitmap holding each port of `ports`.
    pub fn from_ports<I: IntoIterator<Item = usize>>(ports: I) -> Result<Self> {
        let mut pbmp = Self::new();
        for port in ports {
            pbmp.port_add(port)?;
        }
        Ok(pbmp)
    }

    /// Add a port. Fails with `Param` for ports past `PBMP_PORT_MAX`.
    pub fn port_add(&mut self, port: usize) -> Result<()> {
        bitop::set(&mut self.pbits, port)
    }

    /// Remove a port. Fails with `Param` for ports past `PBMP_PORT_MAX`.
    pub fn port_remove(&mut self, port: usize) -> Result<()> {
        bitop::clear(&mut self.pbits, port)
    }

    /// Check if a port is a member.
    pub fn member(&self, port: usize) -> bool {
        bitop::test(&self.pbits, port)
    }

    /// Number of member ports.
    pub fn count(&self) -> usize {
        bitop::count(&self.pbits)
    }

    /// Check if no port is set.
    pub fn is_null(&self) -> bool {
        self.pbits.iter().all(|w| *w == 0)
    }

    /// Clear every port.
    pub fn clear(&mut self) {
        self.pbits = [0; PBMP_WORD_MAX];
    }

    /// Union with `other`.
    pub fn or(&mut self, other: &Pbmp) {
        for (a, b) in self.pbits.iter_mut().zip(other.pbits.iter()) {
            *a |= *b;
        }
    }

    /// Intersection with `other`.
    pub fn and(&mut self, other: &Pbmp) {
        for (a, b) in self.pbits.iter_mut().zip(other.pbits.iter()) {
            *a &= *b;
        }
    }

    /// Remove every port of `other`.
    pub fn remove(&mut self, other: &Pbmp) {
        for (a, b) in self.pbits.iter_mut().zip(other.pbits.iter()) {
            *a &= !*b;
        }
    }

    /// Member ports, ascending.
    pub fn ports(&self) -> SetBits<'_> {
        SetBits::new(&self.pbits)
    }
}

impl fmt::Debug for Pbmp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.ports()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_layout() {
        assert_eq!(PBMP_WORD_MAX, 8);
        assert_eq!(core::mem::size_of::<Pbmp>(), 32);
        assert_eq!(core::mem::align_of::<Pbmp>(), 4);
    }

    #[test]
    fn test_membership() {
        let mut pbmp = Pbmp::new();
        assert!(pbmp.is_null());
        pbmp.port_add(1).unwrap();
        pbmp.port_add(40).unwrap();
        pbmp.port_add(255).unwrap();
        assert!(pbmp.member(40));
        assert!(!pbmp.member(2));
        assert_eq!(pbmp.count(), 3);
        pbmp.port_remove(40).unwrap();
        assert!(!pbmp.member(40));
        assert_eq!(pbmp.port_add(PBMP_PORT_MAX), Err(ErrorCode::Param));
    }

    #[test]
    fn test_set_ops() {
        let a = Pbmp::from_ports([1, 2, 3]).unwrap();
        let b = Pbmp::from_ports([3, 4]).unwrap();

        let mut u = a;
        u.or(&b);
        assert_eq!(u.ports().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        let mut i = a;
        i.and(&b);
        assert_eq!(i.ports().collect::<Vec<_>>(), vec![3]);

        let mut d = a;
        d.remove(&b);
        assert_eq!(d.ports().collect::<Vec<_>>(), vec![1, 2]);

        d.clear();
        assert!(d.is_null());
    }

    #[test]
    fn test_debug() {
        let pbmp = Pbmp::from_ports([5, 9]).unwrap();
        assert_eq!(format!("{:?}", pbmp), "{5, 9}");
    }
}
