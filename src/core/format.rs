//! Numeric display helpers.

use std::fmt;

/// Result of [`padding_zero`]: either the zero-padded text or the
/// untouched number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Padded {
    Text(String),
    Number(i64),
}

impl fmt::Display for Padded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Prefix numbers below ten with a `0` (e.g. clock digits).
///
/// Numbers of ten or more come back unchanged as [`Padded::Number`].
pub fn padding_zero(num: i64) -> Padded {
    if num < 10 {
        Padded::Text(format!("0{}", num))
    } else {
        Padded::Number(num)
    }
}
