use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::domain::Error;

/// A monetary quantity typed in by the user.
///
/// Accepted forms: an optional sign, digits, and an optional fractional
/// part (`50`, `-10`, `+5`, `.5`, `7.`). The value keeps every digit the
/// user typed; negative values parse fine and the account decides whether
/// they are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(pub Decimal);

impl Amount {
    pub fn value(&self) -> Decimal {
        self.0
    }

    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();

        let (neg, body) = match s.as_bytes().first()? {
            b'-' => (true, &s[1..]),
            b'+' => (false, &s[1..]),
            _ => (false, s),
        };
        let mut parts = body.split('.');
        let int_part = parts.next()?;
        let frac_part = parts.next().unwrap_or("");
        if parts.next().is_some() {
            return None;
        }
        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !digits(int_part) || !digits(frac_part) {
            return None;
        }

        let int_part = if int_part.is_empty() { "0" } else { int_part };
        let canonical = if frac_part.is_empty() {
            format!("{}{}", if neg { "-" } else { "" }, int_part)
        } else {
            format!("{}{}.{}", if neg { "-" } else { "" }, int_part, frac_part)
        };

        // refuses input it cannot hold exactly instead of rounding it
        let value = Decimal::from_str_exact(&canonical).ok()?;

        // "-0" parses as a negative zero
        if value.is_zero() {
            return Some(Self(Decimal::ZERO));
        }
        Some(Self(value))
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Amount::from_decimal_str(s)
            .ok_or_else(|| Error::Ingestion(format!("Invalid amount: {}", s.trim())))
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Amount::from_decimal_str(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid amount: {}", s)))
    }
}
