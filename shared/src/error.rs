//! Shared error codes.
//!
//! Every fallible OpenNSL call returns a single `int`: zero on success,
//! one of the negative codes below on failure. The numeric values are
//! part of the ABI; callers persist and compare them, so an existing
//! value must never change.
//!
//! A new code goes immediately before [`ErrorCode::Limit`], together with
//! exactly one new entry in [`ERRMSG`] just before "Unknown error".

use core::fmt;

/// Result type for operations that fail with a shared error code.
pub type Result<T> = core::result::Result<T, ErrorCode>;

/// Shared error code (`_shr_error_t`).
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ErrorCode {
    /// No error.
    None = 0,
    Internal = -1,
    Memory = -2,
    Unit = -3,
    Param = -4,
    Empty = -5,
    Full = -6,
    NotFound = -7,
    Exists = -8,
    Timeout = -9,
    Busy = -10,
    Fail = -11,
    Disabled = -12,
    BadId = -13,
    Resource = -14,
    Config = -15,
    Unavail = -16,
    Init = -17,
    Port = -18,
    /// Terminal sentinel. Must come last.
    Limit = -19,
}

/// Number of codes, sentinel included.
pub const ERROR_COUNT: usize = 20;

/// Message table, indexed by the absolute value of the code.
pub const ERRMSG: [&str; ERROR_COUNT] = [
    "Ok",
    "Internal error",
    "Out of memory",
    "Invalid unit",
    "Invalid parameter",
    "Table empty",
    "Table full",
    "Entry not found",
    "Entry exists",
    "Operation timed out",
    "Operation still running",
    "Operation failed",
    "Operation disabled",
    "Invalid identifier",
    "No resources for operation",
    "Invalid configuration",
    "Feature unavailable",
    "Feature not initialized",
    "Invalid port",
    "Unknown error",
];

/// Message for a raw return value.
///
/// Total over `i32`: anything outside `(Limit, 0]` reads "Unknown error".
pub const fn errmsg(rv: i32) -> &'static str {
    let idx = if rv <= 0 && rv > ErrorCode::Limit as i32 {
        -rv
    } else {
        -(ErrorCode::Limit as i32)
    };
    ERRMSG[idx as usize]
}

/// `true` iff `rv >= 0`.
#[inline]
pub const fn success(rv: i32) -> bool {
    rv >= 0
}

/// `true` iff `rv < 0`.
#[inline]
pub const fn failure(rv: i32) -> bool {
    rv < 0
}

impl ErrorCode {
    /// Every code, from `None` down to `Limit`.
    pub const ALL: [ErrorCode; ERROR_COUNT] = [
        Self::None,
        Self::Internal,
        Self::Memory,
        Self::Unit,
        Self::Param,
        Self::Empty,
        Self::Full,
        Self::NotFound,
        Self::Exists,
        Self::Timeout,
        Self::Busy,
        Self::Fail,
        Self::Disabled,
        Self::BadId,
        Self::Resource,
        Self::Config,
        Self::Unavail,
        Self::Init,
        Self::Port,
        Self::Limit,
    ];

    /// Raw numeric value.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Parse a raw value. `None` for anything outside `[Limit, 0]`.
    pub const fn from_code(rv: i32) -> Option<Self> {
        if rv > 0 || rv < Self::Limit as i32 {
            return None;
        }
        Some(Self::ALL[(-rv) as usize])
    }

    /// Human-readable message from the shared table.
    pub const fn message(self) -> &'static str {
        errmsg(self as i32)
    }

    /// Check if the code denotes success.
    pub const fn is_ok(self) -> bool {
        success(self as i32)
    }

    /// Check if the code denotes failure.
    pub const fn is_err(self) -> bool {
        failure(self as i32)
    }

    /// Turn a raw driver return into a `Result`.
    ///
    /// Non-negative values pass through untouched. Negative values below
    /// the table map to `Limit`, the "Unknown error" bucket.
    pub const fn check(rv: i32) -> Result<i32> {
        if success(rv) {
            return Ok(rv);
        }
        match Self::from_code(rv) {
            Some(code) => Err(code),
            None => Err(Self::Limit),
        }
    }
}

impl Default for ErrorCode {
    fn default() -> Self {
        ErrorCode::None
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(any(test, feature = "std"))]
impl std::error::Error for ErrorCode {}
