//! OpenNSL shared definitions
//!
//! Vocabulary shared by every OpenNSL API layer: the error code table,
//! switch event codes, and the fixed-size bit arrays (port bitmaps, RX
//! reason sets) that appear inside driver structures.
//!
//! Nothing here talks to hardware. Every type is either a closed
//! enumeration with stable numeric values or a `#[repr(C)]` layout that
//! the vendor driver reads directly.
//!
//! # Usage
//!
//! ```
//! use opennsl_shared::{errmsg, failure, ErrorCode};
//!
//! // Raw return value from a driver call
//! let rv = -4;
//! assert!(failure(rv));
//! assert_eq!(errmsg(rv), "Invalid parameter");
//!
//! // Or, the Rust way
//! assert_eq!(ErrorCode::check(rv), Err(ErrorCode::Param));
//! assert_eq!(errmsg(-100), "Unknown error");
//! ```

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod bitop;
pub mod error;
pub mod event;
pub mod pbmp;
pub mod rx;

pub use error::{errmsg, failure, success, ErrorCode, Result, ERRMSG};
pub use event::SwitchEvent;
pub use pbmp::{Pbmp, PBMP_PORT_MAX, PBMP_WORD_MAX};
pub use rx::{RxReasons, RX_REASON_COUNT};
