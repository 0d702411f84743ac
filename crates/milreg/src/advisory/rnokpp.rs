//! RNOKPP (national taxpayer number) structural checks.
//!
//! The first five digits count days since 1899-12-31 up to the holder's birth
//! date; the ninth digit is odd for men and even for women. Identifiers that do
//! not normalise to exactly ten digits are not validatable and every check
//! reports [`IdCheck::Skipped`].

use chrono::{Duration, NaiveDate};

use super::fact::Gender;

pub const RNOKPP_DIGITS: usize = 10;

const DAY_COUNT_DIGITS: usize = 5;
const PARITY_INDEX: usize = 8;

fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 31)
}

/// Outcome of comparing the identifier with declared data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCheck {
    Consistent,
    Mismatch,
    Skipped,
}

impl IdCheck {
    pub fn is_mismatch(self) -> bool {
        self == Self::Mismatch
    }
}

/// A normalised, structurally valid ten-digit identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rnokpp(String);

impl Rnokpp {
    /// Strip every non-digit and accept the result only if exactly ten digits remain.
    pub fn normalize(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        (digits.len() == RNOKPP_DIGITS).then_some(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn digit(&self, index: usize) -> u8 {
        self.0.as_bytes()[index] - b'0'
    }

    /// Digit at zero-based index 8.
    pub fn ninth_digit(&self) -> u8 {
        self.digit(PARITY_INDEX)
    }

    pub fn encoded_gender(&self) -> Gender {
        if self.ninth_digit() % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Integer value of the first five digits.
    pub fn encoded_day_count(&self) -> i64 {
        self.0.as_bytes()[..DAY_COUNT_DIGITS]
            .iter()
            .fold(0_i64, |acc, byte| acc * 10 + i64::from(byte - b'0'))
    }

    /// Birth date implied by the day count.
    pub fn encoded_birth_date(&self) -> Option<NaiveDate> {
        epoch()?.checked_add_signed(Duration::days(self.encoded_day_count()))
    }

    pub fn parity_check(&self, declared: Gender) -> IdCheck {
        if self.encoded_gender() == declared {
            IdCheck::Consistent
        } else {
            IdCheck::Mismatch
        }
    }

    pub fn birthdate_check(&self, birth_date: NaiveDate) -> IdCheck {
        let Some(epoch) = epoch() else {
            return IdCheck::Skipped;
        };
        let expected = (birth_date - epoch).num_days();
        if self.encoded_day_count() == expected {
            IdCheck::Consistent
        } else {
            IdCheck::Mismatch
        }
    }
}

/// Digits-only form of `raw`, when it has exactly ten digits.
pub fn normalize(raw: &str) -> Option<String> {
    Rnokpp::normalize(raw).map(|id| id.0)
}

pub fn ninth_digit(raw: &str) -> Option<u8> {
    Rnokpp::normalize(raw).map(|id| id.ninth_digit())
}

pub fn encoded_day_count(raw: &str) -> Option<i64> {
    Rnokpp::normalize(raw).map(|id| id.encoded_day_count())
}

/// Compare the parity digit with the declared sex.
pub fn parity_check(raw: Option<&str>, declared: Option<Gender>) -> IdCheck {
    match (raw.and_then(Rnokpp::normalize), declared) {
        (Some(id), Some(gender)) => id.parity_check(gender),
        _ => IdCheck::Skipped,
    }
}

/// Compare the encoded day count with the declared birth date.
pub fn birthdate_consistency_check(raw: Option<&str>, birth_date: Option<NaiveDate>) -> IdCheck {
    match (raw.and_then(Rnokpp::normalize), birth_date) {
        (Some(id), Some(birth)) => id.birthdate_check(birth),
        _ => IdCheck::Skipped,
    }
}
