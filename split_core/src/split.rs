//! # Even Bill Split Calculation
//!
//! Splits a total amount evenly across a group, rounding each share up to the
//! next whole unit so the group always collects at least the total.
//!
//! ## Behavior
//!
//! - Per-person share uses ceiling division
//! - The overcollection caused by rounding up is reported as the remainder
//! - Raw user text normalizes to the nearest valid value (never rejected)
//! - Derived values are pure functions of the input; nothing is stored
//!
//! ## Example (LLM-friendly)
//!
//! ```rust
//! use split_core::split::{calculate, SplitInput};
//! use split_core::currency::Won;
//!
//! let input = SplitInput::new(Won(10_000), 3);
//! let outcome = calculate(&input).unwrap();
//!
//! assert_eq!(outcome.per_person, Won(3_334));
//! assert_eq!(outcome.remainder, Won(2));
//! assert_eq!(outcome.collected_total, Won(10_002));
//! assert!(outcome.has_remainder());
//! ```

use serde::{Deserialize, Serialize};

use crate::currency::Won;
use crate::errors::{SplitError, SplitResult};

/// People count used on load and after a reset
pub const DEFAULT_PEOPLE_COUNT: u32 = 2;

/// Largest total amount the calculator accepts (999,999,999,999 won).
///
/// Keeps `per_person * people_count` comfortably inside `u64` for any
/// people count. Normalization clamps to this value; `validate` rejects
/// anything above it.
pub const MAX_TOTAL_AMOUNT: u64 = 999_999_999_999;

/// Input parameters for an even bill split.
///
/// Construct with [`SplitInput::new`] for already-numeric values, or
/// [`SplitInput::from_raw`] to apply the normalization rules to raw user text.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_amount": 10000,
///   "people_count": 3
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitInput {
    /// Total amount to split, in whole won
    pub total_amount: Won,

    /// Number of people sharing the bill (>= 1 after normalization)
    pub people_count: u32,
}

impl Default for SplitInput {
    /// The documented load/reset state: no amount, two people.
    fn default() -> Self {
        SplitInput {
            total_amount: Won::ZERO,
            people_count: DEFAULT_PEOPLE_COUNT,
        }
    }
}

impl SplitInput {
    /// Create an input from already-numeric values.
    pub fn new(total_amount: Won, people_count: u32) -> Self {
        SplitInput {
            total_amount,
            people_count,
        }
    }

    /// Create an input from raw user text, normalizing both fields.
    ///
    /// See [`normalize_amount`] and [`normalize_people`] for the rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use split_core::split::SplitInput;
    /// use split_core::currency::Won;
    ///
    /// let input = SplitInput::from_raw("10000", "0");
    /// assert_eq!(input.total_amount, Won(10_000));
    /// assert_eq!(input.people_count, 1);
    /// ```
    pub fn from_raw(amount: &str, people: &str) -> Self {
        SplitInput {
            total_amount: normalize_amount(amount),
            people_count: normalize_people(people),
        }
    }

    /// Validate input parameters.
    ///
    /// Inputs built through normalization always pass; this guards the
    /// programmatic API against totals the arithmetic is not sized for.
    pub fn validate(&self) -> SplitResult<()> {
        if self.total_amount.0 > MAX_TOTAL_AMOUNT {
            return Err(SplitError::invalid_input(
                "total_amount",
                self.total_amount.0.to_string(),
                "Amount exceeds 999,999,999,999 won",
            ));
        }
        Ok(())
    }
}

/// Normalize a raw total-amount string.
///
/// Parses the trimmed text as an integer; parse failures and negative values
/// substitute `0`, and values above [`MAX_TOTAL_AMOUNT`] clamp to the cap.
/// No error is surfaced - invalid input silently normalizes.
///
/// # Example
///
/// ```rust
/// use split_core::split::normalize_amount;
/// use split_core::currency::Won;
///
/// assert_eq!(normalize_amount("10000"), Won(10_000));
/// assert_eq!(normalize_amount("-500"), Won(0));
/// assert_eq!(normalize_amount("lunch"), Won(0));
/// ```
pub fn normalize_amount(raw: &str) -> Won {
    match raw.trim().parse::<i128>() {
        Ok(value) if value < 0 => Won::ZERO,
        Ok(value) if value > MAX_TOTAL_AMOUNT as i128 => Won(MAX_TOTAL_AMOUNT),
        Ok(value) => Won(value as u64),
        Err(_) => Won::ZERO,
    }
}

/// Normalize a raw people-count string.
///
/// Parses the trimmed text as an integer; parse failures and values below `1`
/// substitute `1`, and values above `u32::MAX` clamp to `u32::MAX`.
///
/// # Example
///
/// ```rust
/// use split_core::split::normalize_people;
///
/// assert_eq!(normalize_people("3"), 3);
/// assert_eq!(normalize_people("0"), 1);
/// assert_eq!(normalize_people("everyone"), 1);
/// ```
pub fn normalize_people(raw: &str) -> u32 {
    match raw.trim().parse::<i128>() {
        Ok(value) if value < 1 => 1,
        Ok(value) if value > u32::MAX as i128 => u32::MAX,
        Ok(value) => value as u32,
        Err(_) => 1,
    }
}

/// Results of an even bill split.
///
/// Echoes the inputs alongside the derived values so a serialized outcome is
/// self-describing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "total_amount": 10000,
///   "people_count": 3,
///   "per_person": 3334,
///   "remainder": 2,
///   "collected_total": 10002
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitOutcome {
    /// Total amount that was split
    pub total_amount: Won,

    /// Number of people sharing the bill
    pub people_count: u32,

    /// Amount each person pays: `ceil(total_amount / people_count)`
    pub per_person: Won,

    /// Overcollection caused by rounding up: `per_person * people_count - total_amount`
    ///
    /// Always in `0..people_count` for a non-empty group.
    pub remainder: Won,

    /// Total the group collects: `per_person * people_count`
    ///
    /// Never less than `total_amount`.
    pub collected_total: Won,
}

impl SplitOutcome {
    /// Whether the remainder should be shown.
    ///
    /// Suppressed when the split is exact and for the zero-amount initial
    /// state.
    pub fn has_remainder(&self) -> bool {
        self.remainder > Won::ZERO && self.total_amount > Won::ZERO
    }
}

/// Calculate the even split for the given input.
///
/// This is a pure function suitable for LLM invocation.
///
/// Ceiling division guarantees `per_person * people_count >= total_amount`,
/// so the group never collects less than the bill. A zero people count yields
/// an all-zero outcome; callers using [`SplitInput::from_raw`] never produce
/// one.
///
/// # Arguments
///
/// * `input` - Total amount and people count
///
/// # Returns
///
/// * `Ok(SplitOutcome)` - Per-person share and rounding remainder
/// * `Err(SplitError)` - Structured error if the total is out of range
///
/// # Example
///
/// ```rust
/// use split_core::split::{calculate, SplitInput};
/// use split_core::currency::Won;
///
/// let outcome = calculate(&SplitInput::new(Won(10_000), 2)).unwrap();
/// assert_eq!(outcome.per_person, Won(5_000));
/// assert_eq!(outcome.remainder, Won(0));
/// assert!(!outcome.has_remainder());
/// ```
pub fn calculate(input: &SplitInput) -> SplitResult<SplitOutcome> {
    input.validate()?;

    if input.people_count == 0 {
        return Ok(SplitOutcome {
            total_amount: input.total_amount,
            people_count: 0,
            per_person: Won::ZERO,
            remainder: Won::ZERO,
            collected_total: Won::ZERO,
        });
    }

    let people = u64::from(input.people_count);
    let per_person = Won(input.total_amount.0.div_ceil(people));

    // per_person * people < total + people, so this stays inside u64
    let collected_total = per_person * people;
    let remainder = collected_total - input.total_amount;

    Ok(SplitOutcome {
        total_amount: input.total_amount,
        people_count: input.people_count,
        per_person,
        remainder,
        collected_total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uneven_split_rounds_up() {
        let outcome = calculate(&SplitInput::new(Won(10_000), 3)).unwrap();

        assert_eq!(outcome.per_person, Won(3_334));
        assert_eq!(outcome.remainder, Won(2));
        assert_eq!(outcome.collected_total, Won(10_002));
        assert!(outcome.has_remainder());
    }

    #[test]
    fn test_even_split_has_no_remainder() {
        let outcome = calculate(&SplitInput::new(Won(10_000), 2)).unwrap();

        assert_eq!(outcome.per_person, Won(5_000));
        assert_eq!(outcome.remainder, Won(0));
        assert_eq!(outcome.collected_total, Won(10_000));
        assert!(!outcome.has_remainder());
    }

    #[test]
    fn test_zero_amount_suppresses_remainder() {
        let outcome = calculate(&SplitInput::default()).unwrap();

        assert_eq!(outcome.per_person, Won(0));
        assert_eq!(outcome.remainder, Won(0));
        assert!(!outcome.has_remainder());
    }

    #[test]
    fn test_single_person_pays_everything() {
        let outcome = calculate(&SplitInput::new(Won(12_345), 1)).unwrap();

        assert_eq!(outcome.per_person, Won(12_345));
        assert_eq!(outcome.remainder, Won(0));
    }

    #[test]
    fn test_more_people_than_won() {
        let outcome = calculate(&SplitInput::new(Won(5), 8)).unwrap();

        // Everyone still pays a whole won, 3 won overcollected
        assert_eq!(outcome.per_person, Won(1));
        assert_eq!(outcome.remainder, Won(3));
        assert!(outcome.has_remainder());
    }

    #[test]
    fn test_ceiling_invariants_hold() {
        for total in (0..=500).chain([9_999, 10_000, 10_001, 123_456]) {
            for people in 1..=9 {
                let outcome = calculate(&SplitInput::new(Won(total), people)).unwrap();
                let collected = outcome.per_person.0 * u64::from(people);

                assert_eq!(outcome.per_person.0, total.div_ceil(u64::from(people)));
                assert!(collected >= total);
                assert!(collected - total < u64::from(people));
                assert_eq!(outcome.remainder.0, collected - total);
            }
        }
    }

    #[test]
    fn test_zero_people_yields_zero_outcome() {
        let outcome = calculate(&SplitInput::new(Won(10_000), 0)).unwrap();

        assert_eq!(outcome.per_person, Won(0));
        assert_eq!(outcome.remainder, Won(0));
        assert_eq!(outcome.collected_total, Won(0));
        assert!(!outcome.has_remainder());
    }

    #[test]
    fn test_max_amount_is_accepted() {
        let outcome = calculate(&SplitInput::new(Won(MAX_TOTAL_AMOUNT), 7)).unwrap();
        assert!(outcome.collected_total.0 >= MAX_TOTAL_AMOUNT);
        assert!(outcome.remainder.0 < 7);
    }

    #[test]
    fn test_over_cap_amount_is_rejected() {
        let result = calculate(&SplitInput::new(Won(MAX_TOTAL_AMOUNT + 1), 2));
        assert!(result.is_err());
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("10000"), Won(10_000));
        assert_eq!(normalize_amount("  10000  "), Won(10_000));
        assert_eq!(normalize_amount("0"), Won(0));
        assert_eq!(normalize_amount("-500"), Won(0));
        assert_eq!(normalize_amount(""), Won(0));
        assert_eq!(normalize_amount("lunch money"), Won(0));
        assert_eq!(normalize_amount("12.50"), Won(0));
        assert_eq!(normalize_amount("9999999999999999"), Won(MAX_TOTAL_AMOUNT));
    }

    #[test]
    fn test_normalize_people() {
        assert_eq!(normalize_people("3"), 3);
        assert_eq!(normalize_people(" 12 "), 12);
        assert_eq!(normalize_people("1"), 1);
        assert_eq!(normalize_people("0"), 1);
        assert_eq!(normalize_people("-3"), 1);
        assert_eq!(normalize_people(""), 1);
        assert_eq!(normalize_people("everyone"), 1);
        assert_eq!(normalize_people("99999999999"), u32::MAX);
    }

    #[test]
    fn test_from_raw_combines_both_rules() {
        let input = SplitInput::from_raw("-100", "0");
        assert_eq!(input, SplitInput::new(Won(0), 1));

        let input = SplitInput::from_raw("10000", "3");
        assert_eq!(input, SplitInput::new(Won(10_000), 3));
    }

    #[test]
    fn test_default_matches_reset_state() {
        let input = SplitInput::default();
        assert_eq!(input.total_amount, Won(0));
        assert_eq!(input.people_count, DEFAULT_PEOPLE_COUNT);
    }

    #[test]
    fn test_input_serialization_roundtrip() {
        let input = SplitInput::new(Won(10_000), 3);
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: SplitInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = calculate(&SplitInput::new(Won(10_000), 3)).unwrap();
        let json = serde_json::to_string_pretty(&outcome).unwrap();

        // Should contain key fields as bare numbers
        assert!(json.contains("\"per_person\": 3334"));
        assert!(json.contains("\"remainder\": 2"));
        assert!(json.contains("\"collected_total\": 10002"));

        let roundtrip: SplitOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);
    }
}
