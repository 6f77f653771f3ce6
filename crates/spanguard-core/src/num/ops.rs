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

use crate::num::checked::{Checked, ErrorKind};
use num_traits::{Bounded, NumCast, ToPrimitive, Zero};
use std::fmt;

/// Numeric representations the interval engine can bound.
///
/// Implemented once per representation category (signed integers,
/// unsigned integers, floating point) rather than per concrete width.
/// Every operation returns a [`Checked`] value: the concrete result, or a
/// tag recording why the result is unrepresentable.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::num::checked::{Checked, ErrorKind};
/// # use spanguard_core::num::ops::CheckedNumeric;
///
/// assert_eq!(CheckedNumeric::checked_add(100i8, 27i8), Checked::Valid(127));
///
/// let overflowed = CheckedNumeric::checked_add(100i8, 100i8);
/// assert_eq!(overflowed.error().map(|e| e.kind()), Some(ErrorKind::Overflow));
/// ```
pub trait CheckedNumeric:
    Copy + PartialOrd + Bounded + Zero + NumCast + ToPrimitive + fmt::Debug + fmt::Display
{
    /// Checked addition; classifies a failed result as overflow or
    /// underflow.
    fn checked_add(self, rhs: Self) -> Checked<Self>;

    /// Checked subtraction; classifies a failed result as overflow or
    /// underflow.
    fn checked_sub(self, rhs: Self) -> Checked<Self>;

    /// Checked multiplication; classifies a failed result as overflow or
    /// underflow.
    fn checked_mul(self, rhs: Self) -> Checked<Self>;

    /// Checked division; division by zero is a domain error.
    fn checked_div(self, rhs: Self) -> Checked<Self>;

    /// Checked remainder; a zero divisor is a domain error.
    fn checked_rem(self, rhs: Self) -> Checked<Self>;
}

macro_rules! checked_numeric_signed {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedNumeric for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_add(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None if rhs < 0 => {
                        Checked::invalid(ErrorKind::Underflow, "addition result underflows")
                    }
                    None => Checked::invalid(ErrorKind::Overflow, "addition result overflows"),
                }
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_sub(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None if rhs > 0 => {
                        Checked::invalid(ErrorKind::Underflow, "subtraction result underflows")
                    }
                    None => Checked::invalid(ErrorKind::Overflow, "subtraction result overflows"),
                }
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_mul(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    // Operands of opposite sign overflowed towards the minimum
                    None if (self < 0) != (rhs < 0) => {
                        Checked::invalid(ErrorKind::Underflow, "multiplication result underflows")
                    }
                    None => {
                        Checked::invalid(ErrorKind::Overflow, "multiplication result overflows")
                    }
                }
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Checked<Self> {
                if rhs == 0 {
                    return Checked::invalid(ErrorKind::DomainError, "divide by zero");
                }
                match <$t>::checked_div(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    // MIN / -1 is the only remaining failure
                    None => Checked::invalid(ErrorKind::Overflow, "quotient overflows"),
                }
            }

            #[inline]
            fn checked_rem(self, rhs: Self) -> Checked<Self> {
                if rhs == 0 {
                    return Checked::invalid(ErrorKind::DomainError, "remainder by zero");
                }
                match <$t>::checked_rem(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => Checked::invalid(ErrorKind::Overflow, "remainder overflows"),
                }
            }
        }
    )*};
}

macro_rules! checked_numeric_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedNumeric for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_add(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => Checked::invalid(ErrorKind::Overflow, "addition result overflows"),
                }
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_sub(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => {
                        Checked::invalid(ErrorKind::Underflow, "subtraction result underflows")
                    }
                }
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_mul(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => {
                        Checked::invalid(ErrorKind::Overflow, "multiplication result overflows")
                    }
                }
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_div(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => Checked::invalid(ErrorKind::DomainError, "divide by zero"),
                }
            }

            #[inline]
            fn checked_rem(self, rhs: Self) -> Checked<Self> {
                match <$t>::checked_rem(self, rhs) {
                    Some(v) => Checked::Valid(v),
                    None => Checked::invalid(ErrorKind::DomainError, "remainder by zero"),
                }
            }
        }
    )*};
}

macro_rules! checked_numeric_float {
    ($($t:ty),* $(,)?) => {$(
        impl CheckedNumeric for $t {
            #[inline]
            fn checked_add(self, rhs: Self) -> Checked<Self> {
                classify_float(
                    self + rhs,
                    "addition result overflows",
                    "addition result underflows",
                    "addition result is not a number",
                )
            }

            #[inline]
            fn checked_sub(self, rhs: Self) -> Checked<Self> {
                classify_float(
                    self - rhs,
                    "subtraction result overflows",
                    "subtraction result underflows",
                    "subtraction result is not a number",
                )
            }

            #[inline]
            fn checked_mul(self, rhs: Self) -> Checked<Self> {
                classify_float(
                    self * rhs,
                    "multiplication result overflows",
                    "multiplication result underflows",
                    "multiplication result is not a number",
                )
            }

            #[inline]
            fn checked_div(self, rhs: Self) -> Checked<Self> {
                if rhs == 0.0 {
                    return Checked::invalid(ErrorKind::DomainError, "divide by zero");
                }
                classify_float(
                    self / rhs,
                    "quotient overflows",
                    "quotient underflows",
                    "quotient is not a number",
                )
            }

            #[inline]
            fn checked_rem(self, rhs: Self) -> Checked<Self> {
                if rhs == 0.0 {
                    return Checked::invalid(ErrorKind::DomainError, "remainder by zero");
                }
                classify_float(
                    self % rhs,
                    "remainder overflows",
                    "remainder underflows",
                    "remainder is not a number",
                )
            }
        }
    )*};
}

checked_numeric_signed!(i8, i16, i32, i64, i128, isize);
checked_numeric_unsigned!(u8, u16, u32, u64, u128, usize);
checked_numeric_float!(f32, f64);

#[inline]
fn classify_float<T>(
    value: T,
    overflow: &'static str,
    underflow: &'static str,
    domain: &'static str,
) -> Checked<T>
where
    T: num_traits::Float,
{
    if value.is_nan() {
        Checked::invalid(ErrorKind::DomainError, domain)
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            Checked::invalid(ErrorKind::Overflow, overflow)
        } else {
            Checked::invalid(ErrorKind::Underflow, underflow)
        }
    } else {
        Checked::Valid(value)
    }
}

/// Converts a checked bound to representation `R`, tagging values outside
/// `R`'s representable range as overflow. An invalid input propagates
/// unchanged.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::num::checked::{Checked, ErrorKind};
/// # use spanguard_core::num::ops;
///
/// assert_eq!(ops::cast::<i8, i32>(Checked::Valid(100)), Checked::Valid(100i8));
///
/// let out_of_range = ops::cast::<i8, i32>(Checked::Valid(1000));
/// assert_eq!(
///     out_of_range.error().map(|e| e.kind()),
///     Some(ErrorKind::Overflow)
/// );
/// ```
pub fn cast<R, T>(bound: Checked<T>) -> Checked<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
{
    match bound {
        Checked::Valid(v) => {
            if matches!(v.to_f64(), Some(x) if x.is_nan()) {
                return Checked::invalid(ErrorKind::DomainError, "cast of a non-numeric value");
            }
            match num_traits::cast::<T, R>(v) {
                Some(r) => Checked::Valid(r),
                None => Checked::invalid(ErrorKind::Overflow, "cast result out of range"),
            }
        }
        Checked::Invalid(e) => Checked::Invalid(e),
    }
}

macro_rules! checked_binary_fn {
    ($(#[$meta:meta])* $name:ident, $method:ident) => {
        $(#[$meta])*
        pub fn $name<R, T, U>(lhs: Checked<T>, rhs: Checked<U>) -> Checked<R>
        where
            R: CheckedNumeric,
            T: CheckedNumeric,
            U: CheckedNumeric,
        {
            match (cast::<R, T>(lhs), cast::<R, U>(rhs)) {
                (Checked::Valid(a), Checked::Valid(b)) => a.$method(b),
                (Checked::Invalid(e), _) => Checked::Invalid(e),
                (_, Checked::Invalid(e)) => Checked::Invalid(e),
            }
        }
    };
}

checked_binary_fn!(
    /// Adds two checked bounds in result representation `R`.
    ///
    /// Both operands are cast to `R` first; an invalid operand (or cast)
    /// propagates unchanged, left operand first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::num::checked::Checked;
    /// # use spanguard_core::num::ops;
    ///
    /// let sum = ops::add::<i32, i8, i8>(Checked::Valid(100), Checked::Valid(100));
    /// assert_eq!(sum, Checked::Valid(200i32));
    /// ```
    add,
    checked_add
);
checked_binary_fn!(
    /// Subtracts two checked bounds in result representation `R`.
    subtract,
    checked_sub
);
checked_binary_fn!(
    /// Multiplies two checked bounds in result representation `R`.
    multiply,
    checked_mul
);
checked_binary_fn!(
    /// Divides two checked bounds in result representation `R`.
    divide,
    checked_div
);
checked_binary_fn!(
    /// Takes the remainder of two checked bounds in result representation
    /// `R`.
    remainder,
    checked_rem
);
