//! Base contract for password hashing algorithms.
//!
//! This crate provides:
//! - The [`PasswordAlgorithm`] trait concrete algorithms implement
//! - Prefix-based detection of which algorithm produced a stored hash
//! - Constant-time hash comparison for verification
//! - Runtime [`AlgorithmDescriptor`]s loadable from TOML
//!
//! Concrete algorithms (bcrypt, PBKDF2, ...) live elsewhere and build on this.
//!
//! # Example
//!
//! ```
//! use passlib_password::{compare_strings, AlgorithmDescriptor};
//!
//! let bcrypt = AlgorithmDescriptor::new("bcrypt", "$2a$");
//! assert!(bcrypt.detect("$2a$10$abc"));
//! assert!(!bcrypt.detect("$1$abc"));
//!
//! assert!(compare_strings("$2a$10$abc", "$2a$10$abc"));
//! ```

#![warn(missing_docs)]

mod algorithm;
mod descriptor;
mod error;
mod prefix;
mod timing;

#[cfg(feature = "wasm")]
mod wasm;

pub use algorithm::{AlgorithmBase, PasswordAlgorithm};
pub use descriptor::AlgorithmDescriptor;
pub use error::{PasswordError, PasswordErrorCode, Result};
pub use prefix::has_prefix;
pub use timing::compare_strings;

/// Everything an algorithm implementation needs.
pub mod prelude {
    pub use crate::algorithm::{AlgorithmBase, PasswordAlgorithm};
    pub use crate::error::{PasswordError, Result};
}
