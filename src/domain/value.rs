//! Typed field values parsed from market data records.
//!
//! One `DataValue` per field: text, number (at one of three precisions), or
//! a calendar timestamp. Equality is kind-guarded, so values of different
//! kinds never compare equal. Numeric equality widens the narrower operand
//! (integer to float to double) before comparing with the wider type's `==`.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;

/// Discriminant identifying which variant a [`DataValue`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Text,
    Number,
    Temporal,
}

/// Numeric payload, tagged by precision.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Double(f64),
    Float(f32),
    Integer(i32),
}

impl PartialEq for Number {
    /// Cross-precision equality: widen the narrower operand, then compare
    /// exactly with the wider type's `==`. No epsilon. Widening an `f32`
    /// to `f64` is value-preserving but not decimal-preserving, so
    /// `Double(0.1) != Float(0.1)`.
    fn eq(&self, other: &Self) -> bool {
        use Number::*;
        match (self, other) {
            (Double(a), Double(b)) => a == b,
            (Double(a), Float(b)) => *a == f64::from(*b),
            (Double(a), Integer(b)) => *a == f64::from(*b),
            (Float(a), Double(b)) => f64::from(*a) == *b,
            (Float(a), Float(b)) => a == b,
            (Float(a), Integer(b)) => *a == *b as f32,
            (Integer(a), Double(b)) => f64::from(*a) == *b,
            (Integer(a), Float(b)) => *a as f32 == *b,
            (Integer(a), Integer(b)) => a == b,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Double(v) => write!(f, "{}", v),
            Number::Float(v) => write!(f, "{}", v),
            Number::Integer(v) => write!(f, "{}", v),
        }
    }
}

/// Calendar timestamp as six raw fields. Fields are stored exactly as given,
/// with no range checks; month 13 or second 75 are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Temporal {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl Temporal {
    /// A date with the time-of-day fields zeroed.
    pub fn from_date(year: i32, month: i32, day: i32) -> Self {
        Self::from_date_time(year, month, day, 0, 0, 0)
    }

    pub fn from_date_time(
        year: i32,
        month: i32,
        day: i32,
        hour: i32,
        minute: i32,
        second: i32,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a chrono timestamp, or `None` if the fields do not name a
    /// real calendar moment.
    pub fn to_naive(&self) -> Option<NaiveDateTime> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        let hour = u32::try_from(self.hour).ok()?;
        let minute = u32::try_from(self.minute).ok()?;
        let second = u32::try_from(self.second).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)?.and_hms_opt(hour, minute, second)
    }
}

impl fmt::Display for Temporal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// One typed unit of parsed data.
///
/// The derived `PartialEq` is the kind guard: differing variants are never
/// equal, and same-kind comparisons delegate to the payload semantics
/// ([`Number`]'s widening equality, [`Temporal`]'s field-wise equality).
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    Text(String),
    Number(Number),
    Temporal(Temporal),
}

impl DataValue {
    pub fn kind(&self) -> Kind {
        match self {
            DataValue::Text(_) => Kind::Text,
            DataValue::Number(_) => Kind::Number,
            DataValue::Temporal(_) => Kind::Temporal,
        }
    }
}

impl From<&str> for DataValue {
    fn from(value: &str) -> Self {
        DataValue::Text(value.to_string())
    }
}

impl From<String> for DataValue {
    fn from(value: String) -> Self {
        DataValue::Text(value)
    }
}

impl From<f64> for DataValue {
    fn from(value: f64) -> Self {
        DataValue::Number(Number::Double(value))
    }
}

impl From<f32> for DataValue {
    fn from(value: f32) -> Self {
        DataValue::Number(Number::Float(value))
    }
}

impl From<i32> for DataValue {
    fn from(value: i32) -> Self {
        DataValue::Number(Number::Integer(value))
    }
}

impl From<Number> for DataValue {
    fn from(value: Number) -> Self {
        DataValue::Number(value)
    }
}

impl From<Temporal> for DataValue {
    fn from(value: Temporal) -> Self {
        DataValue::Temporal(value)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Text(s) => write!(f, "{}", s),
            DataValue::Number(n) => write!(f, "{}", n),
            DataValue::Temporal(t) => write!(f, "{}", t),
        }
    }
}
