//! # nonzero-core
//!
//! Early-exit zero detection over integer sequences.
//!
//! This crate provides:
//! - [`nonzero`]: true when no element of a sequence equals zero
//! - [`any_nonzero`]: true when at least one element differs from zero
//! - Fallible variants for elements converted on the fly from a dynamic source
//!
//! Both predicates stop at the first element that settles the answer and
//! never look at the rest of the sequence.
//!
//! ## Architecture
//!
//! - [`checker`]: The scan itself, its configuration and the [`IsZero`] trait
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use nonzero_core::{any_nonzero, nonzero, try_nonzero, Error, Int};
//!
//! assert!(nonzero([3, 1, 4]));
//! assert!(nonzero(Vec::<i32>::new()));
//! assert!(!nonzero([0, 1, 0]));
//! assert!(any_nonzero([0, 1, 0]));
//!
//! // The scan stops at the zero and never reaches the bad element
//! let items = vec![Ok(Int::ZERO), Err(Error::invalid_element(1, "str"))];
//! assert_eq!(try_nonzero(items), Ok(false));
//! ```
//!
//! ## Extensibility
//!
//! - [`ZeroCheck`]: Customize the scanning strategy
//! - [`IsZero`]: Support additional element types
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod checker;
pub mod error;

// Re-export primary types for convenience
pub use checker::{
    any_nonzero, nonzero, try_any_nonzero, try_nonzero, Checker, CheckerConfig, Int, IsZero,
    Mode, Scan, ZeroCheck,
};
pub use error::{Error, Result};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
