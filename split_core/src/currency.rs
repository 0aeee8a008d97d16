//! # Currency Type
//!
//! A type-safe wrapper for whole-unit currency amounts. This is a simple
//! newtype rather than a full money library because:
//! - The calculator deals in a single currency with no minor units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! Display formatting groups thousands with commas and appends the won
//! suffix, e.g. `Won(10_000)` renders as `10,000원`.
//!
//! ## Example
//!
//! ```rust
//! use split_core::currency::Won;
//!
//! let amount = Won(10_000);
//! assert_eq!(amount.to_string(), "10,000원");
//! assert_eq!(amount.grouped(), "10,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Mul, Sub};

/// A whole-unit amount of Korean won.
///
/// Serializes as a bare number so JSON payloads stay clean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Won(pub u64);

impl Won {
    /// Zero won
    pub const ZERO: Won = Won(0);

    /// Format the amount with thousands separators, no currency suffix.
    ///
    /// ```rust
    /// use split_core::currency::Won;
    ///
    /// assert_eq!(Won(1_234_567).grouped(), "1,234,567");
    /// assert_eq!(Won(100).grouped(), "100");
    /// ```
    pub fn grouped(self) -> String {
        let mut digits = self.0.to_string();
        let mut i = digits.len() as isize - 3;
        while i > 0 {
            digits.insert(i as usize, ',');
            i -= 3;
        }
        digits
    }
}

impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}원", self.grouped())
    }
}

impl Mul<u64> for Won {
    type Output = Won;

    fn mul(self, rhs: u64) -> Won {
        Won(self.0 * rhs)
    }
}

impl Sub for Won {
    type Output = Won;

    fn sub(self, rhs: Won) -> Won {
        Won(self.0 - rhs.0)
    }
}
