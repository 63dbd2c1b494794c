//! The contract every password hashing algorithm implements.
//!
//! A concrete algorithm implements [`PasswordAlgorithm`]: it declares the
//! prefix its hashes start with and supplies hash creation and verification.
//! Prefix lookup, detection and hash comparison come from [`AlgorithmBase`],
//! which is implemented for every algorithm through a blanket impl. Blanket
//! methods cannot be overridden, so no algorithm can swap in its own detection
//! rule or an early-exit comparison.
//!
//! # Example
//!
//! ```
//! use passlib_password::prelude::*;
//!
//! struct Legacy;
//!
//! impl PasswordAlgorithm for Legacy {
//!     const PREFIX: Option<&'static str> = Some("$legacy$");
//!
//!     fn create(&self, password: &str) -> Result<String> {
//!         Ok(format!("$legacy${}", password.len()))
//!     }
//!
//!     fn verify(&self, password: &str, hash: &str) -> Result<bool> {
//!         let expected = self.create(password)?;
//!         Ok(Self::compare_strings(expected, hash))
//!     }
//! }
//!
//! assert_eq!(Legacy::get_prefix().unwrap(), "$legacy$");
//! assert!(Legacy::detect("$legacy$8"));
//! assert!(!Legacy::detect("$2a$10$abc"));
//! assert!(Legacy.verify("hunter22", "$legacy$8").unwrap());
//! ```

use std::any::type_name;

use crate::error::{PasswordError, Result};
use crate::prefix::{declared, has_prefix};
use crate::timing;

/// A password hashing algorithm.
pub trait PasswordAlgorithm {
    /// Leading tag of every hash this algorithm produces, e.g. `"$2a$"`.
    ///
    /// Left as `None` (or set to `""`) the algorithm has no identity: prefix
    /// lookup fails and detection never matches.
    const PREFIX: Option<&'static str> = None;

    /// Hash a plaintext password.
    fn create(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// Implementations compute the expected hash and compare it with
    /// [`AlgorithmBase::compare_strings`], never with `==`.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Behavior shared by all algorithms. Implemented automatically.
pub trait AlgorithmBase: PasswordAlgorithm {
    /// Name used in errors and log events.
    fn algorithm_name() -> &'static str;

    /// Returns the declared prefix.
    ///
    /// # Errors
    /// [`PasswordError::MissingPrefix`] if the algorithm never declared one.
    fn get_prefix() -> Result<&'static str>;

    /// Returns true if `hash` was produced by this algorithm.
    ///
    /// Short or empty input is simply not detected. An algorithm without a
    /// prefix detects nothing; the configuration error is logged.
    fn detect(hash: impl AsRef<[u8]>) -> bool;

    /// Like [`detect`](AlgorithmBase::detect) but reports a missing prefix.
    fn try_detect(hash: impl AsRef<[u8]>) -> Result<bool>;

    /// Constant-time hash comparison. See [`crate::compare_strings`].
    fn compare_strings(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool;
}

impl<T: PasswordAlgorithm> AlgorithmBase for T {
    fn algorithm_name() -> &'static str {
        type_name::<T>()
    }

    fn get_prefix() -> Result<&'static str> {
        declared(T::PREFIX).ok_or_else(|| {
            tracing::error!(
                algorithm = Self::algorithm_name(),
                "hash prefix requested but never declared"
            );
            PasswordError::missing_prefix(Self::algorithm_name())
        })
    }

    fn detect(hash: impl AsRef<[u8]>) -> bool {
        Self::try_detect(hash).unwrap_or(false)
    }

    fn try_detect(hash: impl AsRef<[u8]>) -> Result<bool> {
        let prefix = Self::get_prefix()?;
        Ok(has_prefix(hash, prefix))
    }

    #[inline]
    fn compare_strings(a: impl AsRef<[u8]>, b: impl AsRef<[u8]>) -> bool {
        timing::compare_strings(a, b)
    }
}
