// Copyright (c) 2026 Spanguard Contributors.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::logic::tribool::Tribool;
use std::fmt;

/// Classification of why a bound could not be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The true result exists mathematically but exceeds the
    /// representation's maximum.
    Overflow,
    /// The true result exists mathematically but falls below the
    /// representation's minimum.
    Underflow,
    /// The operation is undefined for some value in the operand's range,
    /// e.g. division by zero.
    DomainError,
}

/// The failure tag carried by an invalid bound: an [`ErrorKind`] plus a
/// static diagnostic message.
///
/// Two `BoundError`s compare equal iff their kinds match; the diagnostic
/// text is not part of the error's identity.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::num::checked::{BoundError, ErrorKind};
///
/// let a = BoundError::new(ErrorKind::Overflow, "addition result overflows");
/// let b = BoundError::new(ErrorKind::Overflow, "multiplication result overflows");
/// assert_eq!(a, b);
/// assert_ne!(a, BoundError::new(ErrorKind::DomainError, "divide by zero"));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BoundError {
    kind: ErrorKind,
    message: &'static str,
}

impl BoundError {
    /// Creates a new failure tag from a kind and a diagnostic message.
    #[inline]
    pub const fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }

    /// Returns the error classification.
    #[inline]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the diagnostic message.
    #[inline]
    pub const fn message(&self) -> &'static str {
        self.message
    }
}

impl PartialEq for BoundError {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for BoundError {}

impl fmt::Display for BoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A checked bound: either a concrete value of representation `R`, or a
/// tagged description of why no concrete value could be produced.
///
/// Failure is data, never an unwinding error. An invalid bound carries an
/// [`ErrorKind`] and a diagnostic message and participates in equality and
/// (three-valued) ordering like any other value, which is what lets an
/// interval legitimately contain failure on one side only.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::num::checked::{Checked, ErrorKind};
/// # use spanguard_core::logic::tribool::Tribool;
///
/// let three = Checked::Valid(3i32);
/// let bad: Checked<i32> = Checked::invalid(ErrorKind::Overflow, "too big");
///
/// assert_eq!(three.value(), Some(3));
/// assert!(bad.error().is_some());
///
/// // Ordering against an invalid bound is indeterminate.
/// assert_eq!(three.tri_lt(&bad), Tribool::Indeterminate);
/// assert_eq!(three.tri_lt(&Checked::Valid(4)), Tribool::True);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Checked<R> {
    /// A concrete, representable value.
    Valid(R),
    /// The value could not be computed; the tag records why.
    Invalid(BoundError),
}

impl<R> Checked<R> {
    /// Creates an invalid bound from an error kind and diagnostic message.
    #[inline]
    pub const fn invalid(kind: ErrorKind, message: &'static str) -> Self {
        Checked::Invalid(BoundError::new(kind, message))
    }

    /// Returns `true` iff the bound holds a concrete value.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Checked::Valid(_))
    }

    /// Returns the concrete value, or `None` if the bound is invalid.
    #[inline]
    pub fn value(self) -> Option<R> {
        match self {
            Checked::Valid(v) => Some(v),
            Checked::Invalid(_) => None,
        }
    }

    /// Returns the failure tag, or `None` if the bound is valid.
    #[inline]
    pub fn error(self) -> Option<BoundError> {
        match self {
            Checked::Valid(_) => None,
            Checked::Invalid(e) => Some(e),
        }
    }
}

impl<R> Checked<R>
where
    R: PartialOrd + Copy,
{
    /// Three-valued `<`: indeterminate whenever either side is invalid.
    #[inline]
    pub fn tri_lt(&self, other: &Self) -> Tribool {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Tribool::from(a < b),
            _ => Tribool::Indeterminate,
        }
    }

    /// Three-valued `>`: indeterminate whenever either side is invalid.
    #[inline]
    pub fn tri_gt(&self, other: &Self) -> Tribool {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Tribool::from(a > b),
            _ => Tribool::Indeterminate,
        }
    }

    /// Three-valued `<=`: indeterminate whenever either side is invalid.
    #[inline]
    pub fn tri_le(&self, other: &Self) -> Tribool {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Tribool::from(a <= b),
            _ => Tribool::Indeterminate,
        }
    }

    /// Three-valued `>=`: indeterminate whenever either side is invalid.
    #[inline]
    pub fn tri_ge(&self, other: &Self) -> Tribool {
        match (self, other) {
            (Checked::Valid(a), Checked::Valid(b)) => Tribool::from(a >= b),
            _ => Tribool::Indeterminate,
        }
    }
}

impl<R> fmt::Display for Checked<R>
where
    R: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Checked::Valid(v) => write!(f, "{v}"),
            Checked::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl<R> From<R> for Checked<R> {
    #[inline]
    fn from(value: R) -> Self {
        Checked::Valid(value)
    }
}
