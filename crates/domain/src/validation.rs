//! Field validation rules shared by the entity setters.
//!
//! Rejection is silent at the setter boundary: setters consult these rules
//! and keep the previous value when the input fails. The boundary constants
//! here are explicit choices; the accepted telephone lengths and the birth
//! date window were only ever pinned down by examples, so the rules accept
//! the known-good inputs and reject the known-bad ones.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters-only pattern for person first names.
static FIRST_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+$").expect("FIRST_NAME_RE pattern is valid"));

/// Earliest plausible pet birth date.
static MIN_BIRTH_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(1900, 1, 1).expect("MIN_BIRTH_DATE is a valid date"));

/// Minimum accepted telephone length, in digits.
pub const TELEPHONE_MIN_DIGITS: usize = 5;
/// Maximum accepted telephone length, in digits.
pub const TELEPHONE_MAX_DIGITS: usize = 15;

/// A first name is accepted when it consists of letters only.
pub fn valid_first_name(value: &str) -> bool {
    FIRST_NAME_RE.is_match(value)
}

/// A telephone number is accepted when it is all ASCII digits and of a
/// plausible length.
pub fn valid_telephone(value: &str) -> bool {
    (TELEPHONE_MIN_DIGITS..=TELEPHONE_MAX_DIGITS).contains(&value.len())
        && value.bytes().all(|b| b.is_ascii_digit())
}

/// A birth date is accepted when it falls between the 1900 floor and the
/// reference date, inclusive. Setters pass today's date as the reference;
/// tests may pin it for determinism.
pub fn valid_birth_date(date: NaiveDate, reference: NaiveDate) -> bool {
    date >= *MIN_BIRTH_DATE && date <= reference
}
