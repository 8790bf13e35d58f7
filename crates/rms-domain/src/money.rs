//! Money
//!
//! The backend stores prices as `DecimalField(decimal_places=2)` and emits
//! them as JSON strings ("12.50"). Amounts are kept as whole cents so cart
//! totals never drift.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parse a decimal string such as "12.5", "12.50" or "-3".
    /// More than two fractional digits are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        let s = raw.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        if frac.len() > 2 {
            return None;
        }
        let whole: i64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
        let frac: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().ok()? * 10,
            _ => frac.parse().ok()?,
        };
        let cents = whole.checked_mul(100)?.checked_add(frac)?;
        Some(Money(if negative { -cents } else { cents }))
    }

    /// Plain decimal form without currency sign, as the backend expects it
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-${}", Money(-self.0).to_decimal_string())
        } else {
            write!(f, "${}", self.to_decimal_string())
        }
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, rhs: u32) -> Money {
        Money(self.0 * i64::from(rhs))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(s) => Money::parse(&s)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid amount: {:?}", s))),
            RawAmount::Integer(n) => n
                .checked_mul(100)
                .map(Money)
                .ok_or_else(|| serde::de::Error::custom(format!("amount out of range: {}", n))),
            RawAmount::Float(x) => {
                let cents = (x * 100.0).round();
                // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
                if cents.is_finite() && cents >= i64::MIN as f64 && cents < i64::MAX as f64 {
                    Ok(Money(cents as i64))
                } else {
                    Err(serde::de::Error::custom(format!("amount out of range: {}", x)))
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_strings() {
        assert_eq!(Money::parse("12.50"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse("12.5"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse("7"), Some(Money::from_cents(700)));
        assert_eq!(Money::parse(".99"), Some(Money::from_cents(99)));
        assert_eq!(Money::parse("-3.05"), Some(Money::from_cents(-305)));
        assert_eq!(Money::parse("1.234"), None);
        assert_eq!(Money::parse("abc"), None);
        assert_eq!(Money::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(1250).to_string(), "$12.50");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-305).to_string(), "-$3.05");
    }

    #[test]
    fn test_deserialize_string_and_number() {
        let from_str: Money = serde_json::from_str(r#""4.20""#).unwrap();
        let from_int: Money = serde_json::from_str("4").unwrap();
        let from_float: Money = serde_json::from_str("4.2").unwrap();
        assert_eq!(from_str, Money::from_cents(420));
        assert_eq!(from_int, Money::from_cents(400));
        assert_eq!(from_float, Money::from_cents(420));
    }

    #[test]
    fn test_deserialize_out_of_range_is_error() {
        assert!(serde_json::from_str::<Money>("100000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("-100000000000000000").is_err());
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>(r#""100000000000000000""#).is_err());
        let big: Money = serde_json::from_str("92233720368547758").unwrap();
        assert_eq!(big, Money::from_cents(9_223_372_036_854_775_800));
    }

    #[test]
    fn test_serialize_as_decimal_string() {
        assert_eq!(serde_json::to_string(&Money::from_cents(1999)).unwrap(), r#""19.99""#);
    }

    #[test]
    fn test_arithmetic() {
        let total: Money = [Money::from_cents(250) * 2, Money::from_cents(99)].into_iter().sum();
        assert_eq!(total, Money::from_cents(599));
    }
}
