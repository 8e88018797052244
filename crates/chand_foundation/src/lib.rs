// crates/chand_foundation/src/lib.rs

//! CHAND foundation layer.
//!
//! Minimal base layer shared by the CHAND crates.
//!
//! # Modules
//!
//! - [`error`]: unified error type and result alias
//!
//! # Design principles
//!
//! 1. **Minimal dependencies**: only `thiserror`
//! 2. **Fail fast**: caller contract violations surface as errors before any
//!    computation runs

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;

pub use error::{ChandError, ChandResult};

/// Return early with the given error if the condition does not hold.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err.into());
        }
    };
}

/// Unwrap an `Option`, returning early with the given error on `None`.
#[macro_export]
macro_rules! require {
    ($opt:expr, $err:expr) => {
        match $opt {
            Some(v) => v,
            None => return Err($err.into()),
        }
    };
}

/// Prelude with the types used by every downstream crate.
pub mod prelude {
    pub use crate::error::{ChandError, ChandResult};
    pub use crate::{ensure, require};
}
