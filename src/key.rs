//! Keys as they arrive over the wire.
//!
//! The trees are generic over any `K: Ord`. The session layer stores [`Key`]s, which can be
//! numbers or text. Numbers compare numerically (exactly, even between integers and floats)
//! and text compares lexicographically. Mixing the two in one tree is refused by the session
//! with [`Error::IncomparableKey`][crate::Error::IncomparableKey]; the `Ord` impl still ranks
//! every number below every text key so that the order stays total.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// 2^63 as a float. The smallest float that is too large for an `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// A key stored by a [`Session`][crate::Session].
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Key {
    /// An integral number.
    Int(i64),
    /// A number with a fractional part (or too big for an `i64`).
    Float(f64),
    /// A text key.
    Text(String),
}

/// Which family of keys a [`Key`] belongs to. Only keys of one kind share a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum KeyKind {
    /// Integers and floats.
    Number,
    /// Strings.
    Text,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Number => f.write_str("number"),
            KeyKind::Text => f.write_str("text"),
        }
    }
}

impl Key {
    /// The family this key belongs to.
    pub fn kind(&self) -> KeyKind {
        match self {
            Key::Int(_) | Key::Float(_) => KeyKind::Number,
            Key::Text(_) => KeyKind::Text,
        }
    }

    /// Fails for NaN and infinite floats.
    pub fn check_finite(&self) -> Result<(), Error> {
        match self {
            Key::Float(f) if !f.is_finite() => Err(Error::NonFiniteKey),
            _ => Ok(()),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Int(value)
    }
}

impl From<f64> for Key {
    fn from(value: f64) -> Self {
        Key::Float(value)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Text(value.to_owned())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Text(value)
    }
}

/// Parses an integer if possible, then a finite float, and falls back to text.
impl FromStr for Key {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(int) = s.parse::<i64>() {
            return Ok(Key::Int(int));
        }
        match s.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(Key::Float(float)),
            _ => Ok(Key::Text(s.to_owned())),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(i) => write!(f, "{i}"),
            Key::Float(x) => write!(f, "{x}"),
            Key::Text(s) => write!(f, "{s:?}"),
        }
    }
}

impl Ord for Key {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Key::Int(a), Key::Int(b)) => a.cmp(b),
            // `partial_cmp` first so that -0.0 == 0.0, matching the int/float comparison.
            (Key::Float(a), Key::Float(b)) => a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b)),
            (Key::Int(a), Key::Float(b)) => cmp_int_float(*a, *b),
            (Key::Float(a), Key::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Key::Text(a), Key::Text(b)) => a.cmp(b),
            (a, b) => a.kind().cmp(&b.kind()),
        }
    }
}

impl PartialOrd for Key {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Key {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Key {}

/// Compares an integer with a float without rounding either.
fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        return Ordering::Less;
    }
    if float >= TWO_POW_63 {
        return Ordering::Less;
    }
    if float < -TWO_POW_63 {
        return Ordering::Greater;
    }

    // In range, so the whole part converts to an `i64` exactly.
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64
            .partial_cmp(&(float - whole))
            .unwrap_or(Ordering::Equal),
        unequal => unequal,
    }
}
