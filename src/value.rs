//! Value parsers and the erased storage slot flags write through.
//!
//! Every supported storage type implements [`FlagValue`]. A [`crate::Flag`]
//! keeps its storage as `&mut dyn Slot`, so the registry holds one element
//! type no matter what the flag decodes to.

use crate::util::{scan_float_prefix, scan_int_prefix};
use crate::DecodeError;
use std::num::IntErrorKind;

/// A type a flag can be bound to.
pub trait FlagValue: Sized {
    /// Decode a raw value token.
    /// # Errors [`DecodeError`] if `token` does not hold a `Self`.
    fn parse_value(token: &str) -> Result<Self, DecodeError>;
}

/// Type-erased write target. Implemented for every [`FlagValue`].
pub trait Slot {
    /// Decode `token` and store the result in place.
    /// # Errors [`DecodeError`]; storage is left untouched on failure.
    fn assign(&mut self, token: &str) -> Result<(), DecodeError>;
}

impl<T: FlagValue> Slot for T {
    fn assign(&mut self, token: &str) -> Result<(), DecodeError> {
        *self = T::parse_value(token)?;
        Ok(())
    }
}

macro_rules! int_value {
    ($($t:ty),* $(,)?) => {$(
        impl FlagValue for $t {
            fn parse_value(token: &str) -> Result<Self, DecodeError> {
                let field =
                    scan_int_prefix(token).ok_or_else(|| DecodeError::Integer(token.to_string()))?;
                field.parse::<$t>().map_err(|e| match e.kind() {
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                        DecodeError::OutOfRange(token.to_string())
                    }
                    _ => DecodeError::Integer(token.to_string()),
                })
            }
        }
    )*};
}

int_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! float_value {
    ($($t:ty),* $(,)?) => {$(
        impl FlagValue for $t {
            fn parse_value(token: &str) -> Result<Self, DecodeError> {
                scan_float_prefix(token)
                    .and_then(|field| field.parse::<$t>().ok())
                    .ok_or_else(|| DecodeError::Float(token.to_string()))
            }
        }
    )*};
}

float_value!(f32, f64);

/// `true`/`false` matched as a prefix of the token, so `trueish` reads as true.
impl FlagValue for bool {
    fn parse_value(token: &str) -> Result<Self, DecodeError> {
        if token.starts_with("true") {
            Ok(true)
        } else if token.starts_with("false") {
            Ok(false)
        } else {
            Err(DecodeError::Bool(token.to_string()))
        }
    }
}

impl FlagValue for String {
    fn parse_value(token: &str) -> Result<Self, DecodeError> {
        Ok(token.to_string())
    }
}

/// Stores `Some(value)`; a flag that never appears leaves the caller's `None`.
impl<T: FlagValue> FlagValue for Option<T> {
    fn parse_value(token: &str) -> Result<Self, DecodeError> {
        T::parse_value(token).map(Some)
    }
}

/// Decode an integer field (`%d` semantics; trailing bytes ignored).
/// # Errors [`DecodeError::Integer`] or [`DecodeError::OutOfRange`].
pub fn parse_int(token: &str) -> Result<i64, DecodeError> {
    i64::parse_value(token)
}

/// Decode a floating point field (`%lf` semantics; trailing bytes ignored).
/// # Errors [`DecodeError::Float`].
pub fn parse_double(token: &str) -> Result<f64, DecodeError> {
    f64::parse_value(token)
}

/// # Errors [`DecodeError::Bool`].
pub fn parse_bool(token: &str) -> Result<bool, DecodeError> {
    bool::parse_value(token)
}

/// Never fails.
#[must_use]
pub fn parse_string(token: &str) -> String {
    token.to_string()
}
