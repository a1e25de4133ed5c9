//! Switch event codes (`_shr_switch_event_t`).
//!
//! Asynchronous device conditions reported through the switch event
//! callback. Numbered from 1 and unrelated to the error codes, which are
//! never positive.

use core::fmt;

/// Switch event.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchEvent {
    Reserved1 = 1,
    Reserved2 = 2,
    Reserved3 = 3,
    Reserved4 = 4,
    Reserved5 = 5,
    Reserved6 = 6,
    Reserved7 = 7,
    Reserved8 = 8,
    Reserved9 = 9,
    Reserved10 = 10,
    Reserved11 = 11,
    Reserved12 = 12,
    Reserved13 = 13,
    Reserved14 = 14,
    /// MMU buffer statistics threshold crossed.
    MmuBstTrigger = 15,
    Reserved16 = 16,
    /// Last, as always.
    Limit = 17,
}

impl SwitchEvent {
    /// Every event in numeric order, sentinel last.
    pub const ALL: [SwitchEvent; 17] = [
        Self::Reserved1,
        Self::Reserved2,
        Self::Reserved3,
        Self::Reserved4,
        Self::Reserved5,
        Self::Reserved6,
        Self::Reserved7,
        Self::Reserved8,
        Self::Reserved9,
        Self::Reserved10,
        Self::Reserved11,
        Self::Reserved12,
        Self::Reserved13,
        Self::Reserved14,
        Self::MmuBstTrigger,
        Self::Reserved16,
        Self::Limit,
    ];

    /// Raw numeric value.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Parse from raw value.
    pub const fn from_code(value: i32) -> Option<Self> {
        if value < 1 || value > Self::Limit as i32 {
            return None;
        }
        Some(Self::ALL[(value - 1) as usize])
    }

    /// Check if this is the terminal sentinel rather than a real event.
    pub const fn is_sentinel(self) -> bool {
        matches!(self, Self::Limit)
    }
}

impl fmt::Display for SwitchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MmuBstTrigger => write!(f, "MMU BST trigger"),
            Self::Limit => write!(f, "event limit"),
            other => write!(f, "reserved event {}", other.code()),
        }
    }
}
