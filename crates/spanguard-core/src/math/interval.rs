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
use crate::num::checked::{Checked, ErrorKind};
use crate::num::ops::{self, CheckedNumeric};
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// A closed interval `[lower, upper]` of possible values, expressed as a
/// pair of checked bounds.
///
/// Immutable value type: every operator returns a new interval and no
/// instance is mutated after construction. Conceptually `lower <= upper`
/// for any interval built from real bound values, but the type does not
/// enforce this when a bound is an exceptional marker: an invalid bound
/// signals "could not be computed", not a violated ordering, so
/// construction checks nothing beyond the bound representation itself.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::Interval;
///
/// let a: Interval<i32> = Interval::new(1, 5);
/// let b: Interval<i32> = Interval::new(10, 20);
/// assert_eq!((a + b).to_string(), "[11,25]");
/// assert_eq!((a * b).to_string(), "[10,100]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval<R>
where
    R: CheckedNumeric,
{
    lower: Checked<R>,
    upper: Checked<R>,
}

/// Reduces two or more checked values to their minimum by repeated
/// pairwise three-valued `<`, left to right.
///
/// The accumulator survives a step only when it compares definitely less
/// than the candidate; an indeterminate comparison (an invalid value on
/// either side) selects the candidate. Used to fold the four sign
/// cross-products of multiply and divide into the result's lower bound.
///
/// # Panics
///
/// Panics if called with an empty array.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::vmin;
/// # use spanguard_core::num::checked::Checked;
///
/// let least = vmin([Checked::Valid(4i32), Checked::Valid(-9), Checked::Valid(2)]);
/// assert_eq!(least, Checked::Valid(-9));
/// ```
pub fn vmin<R, const N: usize>(values: [Checked<R>; N]) -> Checked<R>
where
    R: CheckedNumeric,
{
    assert!(N > 0, "vmin requires at least one value");
    let mut result = values[0];
    for candidate in values.into_iter().skip(1) {
        if !result.tri_lt(&candidate).is_true() {
            result = candidate;
        }
    }
    result
}

/// Reduces two or more checked values to their maximum by repeated
/// pairwise three-valued `>`, left to right.
///
/// Mirror of [`vmin`]; folds the four sign cross-products of multiply and
/// divide into the result's upper bound.
///
/// # Panics
///
/// Panics if called with an empty array.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::vmax;
/// # use spanguard_core::num::checked::Checked;
///
/// let greatest = vmax([Checked::Valid(4i32), Checked::Valid(-9), Checked::Valid(2)]);
/// assert_eq!(greatest, Checked::Valid(4));
/// ```
pub fn vmax<R, const N: usize>(values: [Checked<R>; N]) -> Checked<R>
where
    R: CheckedNumeric,
{
    assert!(N > 0, "vmax requires at least one value");
    let mut result = values[0];
    for candidate in values.into_iter().skip(1) {
        if !result.tri_gt(&candidate).is_true() {
            result = candidate;
        }
    }
    result
}

impl<R> Interval<R>
where
    R: CheckedNumeric,
{
    /// Creates an interval from two raw values of a common type, casting
    /// each through the checked cast and capturing any representability
    /// violation in the affected bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::math::interval::Interval;
    /// # use spanguard_core::num::checked::Checked;
    ///
    /// let iv: Interval<i8> = Interval::new(-5, 5);
    /// assert_eq!(iv.lower(), Checked::Valid(-5));
    /// assert_eq!(iv.upper(), Checked::Valid(5));
    ///
    /// // Values i8 cannot represent become exceptional bounds, not wraps.
    /// let too_wide: Interval<i8> = Interval::new(-1000, 1000);
    /// assert!(!too_wide.no_exception());
    /// ```
    pub fn new<T>(lower: T, upper: T) -> Self
    where
        T: CheckedNumeric,
    {
        Self {
            lower: ops::cast(Checked::Valid(lower)),
            upper: ops::cast(Checked::Valid(upper)),
        }
    }

    /// Creates an interval from two already-checked bounds, copied
    /// verbatim with no re-check. Used when composing results of prior
    /// operations.
    #[inline]
    pub const fn from_bounds(lower: Checked<R>, upper: Checked<R>) -> Self {
        Self { lower, upper }
    }

    /// Re-casts both bounds into representation `T`, widening or
    /// narrowing the interval and capturing any representability
    /// violation per bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::math::interval::Interval;
    ///
    /// let narrow: Interval<i8> = Interval::new(-5, 5);
    /// let wide: Interval<i64> = narrow.cast();
    /// assert_eq!(wide, Interval::new(-5i64, 5i64));
    /// ```
    pub fn cast<T>(&self) -> Interval<T>
    where
        T: CheckedNumeric,
    {
        Interval {
            lower: ops::cast(self.lower),
            upper: ops::cast(self.upper),
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn lower(&self) -> Checked<R> {
        self.lower
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn upper(&self) -> Checked<R> {
        self.upper
    }

    /// Returns `true` iff both bounds are concrete values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::math::interval::Interval;
    ///
    /// assert!(Interval::<i32>::new(0, 9).no_exception());
    /// assert!(!Interval::<i8>::new(0, 1000).no_exception());
    /// ```
    #[inline]
    pub const fn no_exception(&self) -> bool {
        self.lower.is_valid() && self.upper.is_valid()
    }

    /// Returns whether every value representable by `other` is also
    /// representable by `self`, i.e. `lower <= other.lower` and
    /// `upper >= other.upper`.
    ///
    /// The bound comparisons are three-valued. A comparison against an
    /// exceptional bound is indeterminate, and indeterminate propagates
    /// through the conjunction unless a valid-bound comparison already
    /// disproves inclusion, in which case the definite `False` dominates.
    /// Callers must read `Indeterminate` as "cannot prove inclusion",
    /// never as false.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::logic::tribool::Tribool;
    /// # use spanguard_core::math::interval::Interval;
    ///
    /// let outer: Interval<i32> = Interval::new(0, 10);
    /// assert_eq!(outer.includes(&Interval::new(2, 8)), Tribool::True);
    /// assert_eq!(outer.includes(&Interval::new(5, 15)), Tribool::False);
    /// ```
    pub fn includes(&self, other: &Interval<R>) -> Tribool {
        self.lower.tri_le(&other.lower) & self.upper.tri_ge(&other.upper)
    }

    /// Three-valued `<`: definite-true iff every element of `self` is less
    /// than every element of `other`, definite-false iff every element
    /// exceeds every element of `other`, and indeterminate when the ranges
    /// overlap or either interval has an exceptional bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::logic::tribool::Tribool;
    /// # use spanguard_core::math::interval::Interval;
    ///
    /// let low: Interval<i32> = Interval::new(0, 4);
    /// let high: Interval<i32> = Interval::new(5, 9);
    /// assert_eq!(low.tri_lt(&high), Tribool::True);
    /// assert_eq!(high.tri_lt(&low), Tribool::False);
    ///
    /// let overlapping: Interval<i32> = Interval::new(3, 7);
    /// assert_eq!(low.tri_lt(&overlapping), Tribool::Indeterminate);
    /// ```
    pub fn tri_lt(&self, other: &Interval<R>) -> Tribool {
        if !self.no_exception() || !other.no_exception() {
            return Tribool::Indeterminate;
        }
        if self.upper.tri_lt(&other.lower).is_true() {
            Tribool::True
        } else if self.lower.tri_gt(&other.upper).is_true() {
            Tribool::False
        } else {
            Tribool::Indeterminate
        }
    }

    /// Three-valued `>`, symmetric to [`Interval::tri_lt`].
    pub fn tri_gt(&self, other: &Interval<R>) -> Tribool {
        if !self.no_exception() || !other.no_exception() {
            return Tribool::Indeterminate;
        }
        if self.lower.tri_gt(&other.upper).is_true() {
            Tribool::True
        } else if self.upper.tri_lt(&other.lower).is_true() {
            Tribool::False
        } else {
            Tribool::Indeterminate
        }
    }

    /// Three-valued `<=`, the negation of [`Interval::tri_gt`];
    /// indeterminate negates to indeterminate.
    #[inline]
    pub fn tri_le(&self, other: &Interval<R>) -> Tribool {
        !self.tri_gt(other)
    }

    /// Three-valued `>=`, the negation of [`Interval::tri_lt`];
    /// indeterminate negates to indeterminate.
    #[inline]
    pub fn tri_ge(&self, other: &Interval<R>) -> Tribool {
        !self.tri_lt(other)
    }
}

impl<R> Default for Interval<R>
where
    R: CheckedNumeric,
{
    /// The universal interval `[min(R), max(R)]`, used as
    /// "unknown/unconstrained".
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::math::interval::Interval;
    ///
    /// let any: Interval<i8> = Interval::default();
    /// assert_eq!(any, Interval::new(i8::MIN, i8::MAX));
    /// ```
    fn default() -> Self {
        Self {
            lower: Checked::Valid(R::min_value()),
            upper: Checked::Valid(R::max_value()),
        }
    }
}

/// Adds two intervals into result representation `R`: the lower bounds
/// combine and the upper bounds combine, each independently. A failure on
/// one bound does not force failure on the other.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::{self, Interval};
///
/// let a: Interval<i8> = Interval::new(1, 2);
/// let b: Interval<i8> = Interval::new(3, 4);
/// let sum: Interval<i32> = interval::add(&a, &b);
/// assert_eq!(sum, Interval::new(4, 6));
/// ```
pub fn add<R, T, U>(t: &Interval<T>, u: &Interval<U>) -> Interval<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
    U: CheckedNumeric,
{
    Interval::from_bounds(ops::add(t.lower, u.lower), ops::add(t.upper, u.upper))
}

/// Subtracts two intervals into result representation `R`, cross-pairing
/// the bounds: the result's lower bound is `t.lower - u.upper` and its
/// upper bound is `t.upper - u.lower`, since subtracting a larger
/// right-hand value shrinks the result.
pub fn sub<R, T, U>(t: &Interval<T>, u: &Interval<U>) -> Interval<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
    U: CheckedNumeric,
{
    Interval::from_bounds(
        ops::subtract(t.lower, u.upper),
        ops::subtract(t.upper, u.lower),
    )
}

/// Multiplies two intervals into result representation `R`.
///
/// Because either operand's bounds may change sign, the product's extremes
/// cannot be read from the operand extremes directly; all four cross
/// products are computed and folded with [`vmin`] for the lower bound and
/// [`vmax`] for the upper.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::{self, Interval};
///
/// let negatives: Interval<i32> = Interval::new(-5, -1);
/// let product: Interval<i32> = interval::mul(&negatives, &negatives);
/// assert_eq!(product, Interval::new(1, 25));
/// ```
pub fn mul<R, T, U>(t: &Interval<T>, u: &Interval<U>) -> Interval<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
    U: CheckedNumeric,
{
    let products: [Checked<R>; 4] = [
        ops::multiply(t.lower, u.lower),
        ops::multiply(t.lower, u.upper),
        ops::multiply(t.upper, u.lower),
        ops::multiply(t.upper, u.upper),
    ];
    Interval::from_bounds(vmin(products), vmax(products))
}

/// Divides two intervals into result representation `R`.
///
/// If the divisor's range brackets zero the operation is undefined for at
/// least one divisor value, and the result is the degenerate interval
/// `[0, domain_error]`. Otherwise the four cross quotients are folded with
/// [`vmin`] and [`vmax`].
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::{self, Interval};
/// # use spanguard_core::num::checked::ErrorKind;
///
/// let numerator: Interval<i32> = Interval::new(10, 20);
/// let positive: Interval<i32> = Interval::new(2, 5);
/// let straddling: Interval<i32> = Interval::new(-1, 1);
///
/// let safe: Interval<i32> = interval::div(&numerator, &positive);
/// assert_eq!(safe, Interval::new(2, 10));
///
/// let degenerate: Interval<i32> = interval::div(&numerator, &straddling);
/// assert_eq!(
///     degenerate.upper().error().map(|e| e.kind()),
///     Some(ErrorKind::DomainError)
/// );
/// ```
pub fn div<R, T, U>(t: &Interval<T>, u: &Interval<U>) -> Interval<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
    U: CheckedNumeric,
{
    let zero = Checked::Valid(U::zero());
    if u.lower.tri_le(&zero).is_true() && u.upper.tri_ge(&zero).is_true() {
        return Interval::from_bounds(
            Checked::Valid(R::zero()),
            Checked::invalid(ErrorKind::DomainError, "interval divisor includes zero"),
        );
    }
    let quotients: [Checked<R>; 4] = [
        ops::divide(t.lower, u.lower),
        ops::divide(t.lower, u.upper),
        ops::divide(t.upper, u.lower),
        ops::divide(t.upper, u.upper),
    ];
    Interval::from_bounds(vmin(quotients), vmax(quotients))
}

/// Computes the modulo of two intervals into result representation `R`.
///
/// Any divisor interval whose lower bound can be non-positive is rejected
/// with the degenerate `[0, domain_error]` result, a deliberately
/// conservative rule that also rejects strictly negative divisor ranges.
/// Otherwise the result is `[0, max(u.lower, u.upper)]`: non-negative and
/// bounded above by the larger divisor bound. The numerator's bounds do
/// not affect the result.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::math::interval::{self, Interval};
///
/// let numerator: Interval<i32> = Interval::new(10, 100);
/// let divisor: Interval<i32> = Interval::new(3, 7);
/// let remainder: Interval<i32> = interval::rem(&numerator, &divisor);
/// assert_eq!(remainder, Interval::new(0, 7));
/// ```
pub fn rem<R, T, U>(_t: &Interval<T>, u: &Interval<U>) -> Interval<R>
where
    R: CheckedNumeric,
    T: CheckedNumeric,
    U: CheckedNumeric,
{
    let zero = Checked::Valid(U::zero());
    if u.lower.tri_le(&zero).is_true() {
        return Interval::from_bounds(
            Checked::Valid(R::zero()),
            Checked::invalid(ErrorKind::DomainError, "interval divisor includes zero"),
        );
    }
    Interval::from_bounds(Checked::Valid(R::zero()), ops::cast(vmax([u.lower, u.upper])))
}

impl<R> Add for Interval<R>
where
    R: CheckedNumeric,
{
    type Output = Interval<R>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        add(&self, &rhs)
    }
}

impl<R> Sub for Interval<R>
where
    R: CheckedNumeric,
{
    type Output = Interval<R>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        sub(&self, &rhs)
    }
}

impl<R> Mul for Interval<R>
where
    R: CheckedNumeric,
{
    type Output = Interval<R>;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        mul(&self, &rhs)
    }
}

impl<R> Div for Interval<R>
where
    R: CheckedNumeric,
{
    type Output = Interval<R>;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        div(&self, &rhs)
    }
}

impl<R> Rem for Interval<R>
where
    R: CheckedNumeric,
{
    type Output = Interval<R>;

    #[inline]
    fn rem(self, rhs: Self) -> Self::Output {
        rem(&self, &rhs)
    }
}

impl<R> fmt::Display for Interval<R>
where
    R: CheckedNumeric,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.lower, self.upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_valid() {
        let iv: Interval<i32> = Interval::new(3, 9);
        assert_eq!(iv.lower(), Checked::Valid(3));
        assert_eq!(iv.upper(), Checked::Valid(9));
        assert!(iv.no_exception());
    }

    #[test]
    fn test_construction_out_of_range() {
        // Out-of-range raw bounds become exceptional markers, never wraps
        let iv: Interval<i8> = Interval::new(-1000, 1000);
        assert_eq!(iv.lower().error().map(|e| e.kind()), Some(ErrorKind::Overflow));
        assert_eq!(iv.upper().error().map(|e| e.kind()), Some(ErrorKind::Overflow));
        assert!(!iv.no_exception());

        // One representable bound stays concrete
        let half: Interval<i8> = Interval::new(5, 1000);
        assert_eq!(half.lower(), Checked::Valid(5));
        assert!(!half.upper().is_valid());
    }

    #[test]
    fn test_from_bounds_is_verbatim() {
        let bad: Checked<i32> = Checked::invalid(ErrorKind::Underflow, "below minimum");
        let iv = Interval::from_bounds(bad, Checked::Valid(7));
        assert_eq!(iv.lower().error().map(|e| e.message()), Some("below minimum"));
        assert_eq!(iv.upper(), Checked::Valid(7));
    }

    #[test]
    fn test_default_is_universal() {
        let iv: Interval<i16> = Interval::default();
        assert_eq!(iv, Interval::new(i16::MIN, i16::MAX));

        let fv: Interval<f64> = Interval::default();
        assert_eq!(fv, Interval::new(f64::MIN, f64::MAX));
    }

    #[test]
    fn test_cast_round_trip() {
        let iv: Interval<i8> = Interval::new(-100, 100);
        let widened: Interval<i32> = iv.cast();
        assert_eq!(widened, Interval::new(-100i32, 100i32));
        // Narrowing back reproduces the bounds exactly
        let narrowed: Interval<i8> = widened.cast();
        assert_eq!(narrowed, iv);
    }

    #[test]
    fn test_cast_narrowing_captures_overflow() {
        let wide: Interval<i32> = Interval::new(-1000, 1000);
        let narrowed: Interval<i8> = wide.cast();
        assert!(!narrowed.no_exception());
    }

    #[test]
    fn test_includes() {
        let outer: Interval<i32> = Interval::new(0, 10);
        assert_eq!(outer.includes(&Interval::new(0, 10)), Tribool::True);
        assert_eq!(outer.includes(&Interval::new(2, 8)), Tribool::True);
        assert_eq!(outer.includes(&Interval::new(-1, 5)), Tribool::False);
        assert_eq!(outer.includes(&Interval::new(5, 11)), Tribool::False);
    }

    #[test]
    fn test_includes_reflexive() {
        let iv: Interval<i64> = Interval::new(-37, 42);
        assert_eq!(iv.includes(&iv), Tribool::True);
    }

    #[test]
    fn test_includes_indeterminate_with_exceptional_bound() {
        let outer: Interval<i8> = Interval::default();
        let broken: Interval<i8> = Interval::new(0, 1000);
        assert_eq!(outer.includes(&broken), Tribool::Indeterminate);
        assert_eq!(broken.includes(&broken), Tribool::Indeterminate);
        // 0 <= -128 is definitely false, and false dominates the
        // conjunction even though the other comparison is indeterminate.
        assert_eq!(broken.includes(&outer), Tribool::False);
    }

    #[test]
    fn test_vmin_vmax() {
        let values = [
            Checked::Valid(4i32),
            Checked::Valid(-9),
            Checked::Valid(2),
            Checked::Valid(-9),
        ];
        assert_eq!(vmin(values), Checked::Valid(-9));
        assert_eq!(vmax(values), Checked::Valid(4));

        // Single element reduces to itself
        assert_eq!(vmin([Checked::Valid(7i32)]), Checked::Valid(7));
        assert_eq!(vmax([Checked::Valid(7i32)]), Checked::Valid(7));
    }

    #[test]
    fn test_vmin_indeterminate_selects_candidate() {
        // An indeterminate comparison drops the accumulator, so a trailing
        // invalid value wins the fold.
        let bad: Checked<i32> = Checked::invalid(ErrorKind::Overflow, "too big");
        assert_eq!(vmin([Checked::Valid(1), bad]).error().map(|e| e.kind()), Some(ErrorKind::Overflow));
        // A leading invalid value is displaced by the next candidate.
        assert_eq!(vmin([bad, Checked::Valid(1)]), Checked::Valid(1));
    }

    #[test]
    fn test_add() {
        let a: Interval<i32> = Interval::new(1, 2);
        let b: Interval<i32> = Interval::new(10, 20);
        assert_eq!(a + b, Interval::new(11, 22));
    }

    #[test]
    fn test_add_commutative_on_bounds() {
        let a: Interval<i32> = Interval::new(-7, 3);
        let b: Interval<i32> = Interval::new(2, 11);
        assert_eq!(a + b, b + a);
    }

    #[test]
    fn test_add_bounds_fail_independently() {
        let a: Interval<i8> = Interval::new(100, 120);
        let b: Interval<i8> = Interval::new(0, 10);
        let sum = a + b;
        // 100 + 0 fits; 120 + 10 does not
        assert_eq!(sum.lower(), Checked::Valid(100));
        assert_eq!(sum.upper().error().map(|e| e.kind()), Some(ErrorKind::Overflow));
    }

    #[test]
    fn test_sub_cross_pairs_bounds() {
        let a: Interval<i32> = Interval::new(1, 2);
        let b: Interval<i32> = Interval::new(3, 7);
        // lower = 1 - 7, upper = 2 - 3
        assert_eq!(a - b, Interval::new(-6, -1));
    }

    #[test]
    fn test_mul_all_negative_operands() {
        // Regression for the cross-product reduction: with all-negative
        // operands both result bounds are positive, lower 1 and upper 25.
        // Folding the upper bound with the minimum reducer would yield
        // [1,1] here.
        let iv: Interval<i32> = Interval::new(-5, -1);
        assert_eq!(iv * iv, Interval::new(1, 25));
    }

    #[test]
    fn test_mul_mixed_signs() {
        let a: Interval<i32> = Interval::new(-2, 3);
        let b: Interval<i32> = Interval::new(4, 5);
        // products: -8, -10, 12, 15
        assert_eq!(a * b, Interval::new(-10, 15));
    }

    #[test]
    fn test_mul_overflow_poisons_the_reduction() {
        let a: Interval<i8> = Interval::new(10, 100);
        let b: Interval<i8> = Interval::new(1, 2);
        let product = a * b;
        // 100 * 2 overflows i8. The reducers treat a comparison against an
        // invalid product as indeterminate and select the candidate, so the
        // failed product survives both folds.
        assert_eq!(
            product.lower().error().map(|e| e.kind()),
            Some(ErrorKind::Overflow)
        );
        assert_eq!(
            product.upper().error().map(|e| e.kind()),
            Some(ErrorKind::Overflow)
        );
    }

    #[test]
    fn test_div_positive_divisor() {
        let a: Interval<i32> = Interval::new(10, 20);
        let b: Interval<i32> = Interval::new(2, 5);
        // quotients: 5, 2, 10, 4
        assert_eq!(a / b, Interval::new(2, 10));
    }

    #[test]
    fn test_div_negative_divisor() {
        let a: Interval<i32> = Interval::new(10, 20);
        let b: Interval<i32> = Interval::new(-5, -2);
        // quotients: -2, -5, -4, -10
        assert_eq!(a / b, Interval::new(-10, -2));
    }

    #[test]
    fn test_div_divisor_straddles_zero() {
        let a: Interval<i32> = Interval::new(10, 20);
        let b: Interval<i32> = Interval::new(-1, 1);
        let result = a / b;
        assert_eq!(result.lower(), Checked::Valid(0));
        assert_eq!(
            result.upper().error().map(|e| e.kind()),
            Some(ErrorKind::DomainError)
        );

        // The numerator never rescues a zero-straddling divisor
        let negative: Interval<i32> = Interval::new(-20, -10);
        assert!(!(negative / b).upper().is_valid());
    }

    #[test]
    fn test_div_divisor_touching_zero() {
        // A bound exactly at zero still brackets zero
        let a: Interval<i32> = Interval::new(1, 2);
        assert!(!(a / Interval::new(0, 5)).upper().is_valid());
        assert!(!(a / Interval::new(-5, 0)).upper().is_valid());
    }

    #[test]
    fn test_rem_positive_divisor() {
        let a: Interval<i32> = Interval::new(10, 100);
        let b: Interval<i32> = Interval::new(3, 7);
        assert_eq!(a % b, Interval::new(0, 7));
    }

    #[test]
    fn test_rem_non_positive_divisor_is_conservative() {
        let a: Interval<i32> = Interval::new(10, 100);
        // [-5,-3] does not contain zero, but the conservative rule still
        // rejects any divisor whose lower bound is non-positive.
        let negative: Interval<i32> = Interval::new(-5, -3);
        let result = a % negative;
        assert_eq!(result.lower(), Checked::Valid(0));
        assert_eq!(
            result.upper().error().map(|e| e.kind()),
            Some(ErrorKind::DomainError)
        );

        assert!(!(a % Interval::new(0, 5)).upper().is_valid());
    }

    #[test]
    fn test_comparison_disjoint_is_total() {
        let low: Interval<i32> = Interval::new(0, 4);
        let high: Interval<i32> = Interval::new(5, 9);
        assert_eq!(low.tri_lt(&high), Tribool::True);
        assert_eq!(low.tri_gt(&high), Tribool::False);
        assert_eq!(high.tri_lt(&low), Tribool::False);
        assert_eq!(high.tri_gt(&low), Tribool::True);
    }

    #[test]
    fn test_comparison_overlapping_is_indeterminate() {
        let a: Interval<i32> = Interval::new(0, 5);
        let b: Interval<i32> = Interval::new(3, 9);
        assert_eq!(a.tri_lt(&b), Tribool::Indeterminate);
        assert_eq!(a.tri_gt(&b), Tribool::Indeterminate);
        assert_eq!(b.tri_lt(&a), Tribool::Indeterminate);
        assert_eq!(b.tri_gt(&a), Tribool::Indeterminate);
    }

    #[test]
    fn test_comparison_touching_bounds_is_indeterminate() {
        // Shared endpoint: not every element of a is below every element of b
        let a: Interval<i32> = Interval::new(0, 5);
        let b: Interval<i32> = Interval::new(5, 9);
        assert_eq!(a.tri_lt(&b), Tribool::Indeterminate);
    }

    #[test]
    fn test_comparison_exceptional_bound_is_indeterminate() {
        let broken: Interval<i8> = Interval::new(0, 1000);
        let fine: Interval<i8> = Interval::new(-5, 5);
        assert_eq!(broken.tri_lt(&fine), Tribool::Indeterminate);
        assert_eq!(fine.tri_gt(&broken), Tribool::Indeterminate);
        assert_eq!(fine.tri_le(&broken), Tribool::Indeterminate);
        assert_eq!(fine.tri_ge(&broken), Tribool::Indeterminate);
    }

    #[test]
    fn test_le_ge_are_negations() {
        let low: Interval<i32> = Interval::new(0, 4);
        let high: Interval<i32> = Interval::new(5, 9);
        assert_eq!(low.tri_le(&high), Tribool::True);
        assert_eq!(low.tri_ge(&high), Tribool::False);
        assert_eq!(high.tri_ge(&low), Tribool::True);

        let overlapping: Interval<i32> = Interval::new(3, 7);
        assert_eq!(low.tri_le(&overlapping), Tribool::Indeterminate);
    }

    #[test]
    fn test_equality_is_strict_description_equality() {
        let a: Interval<i32> = Interval::new(1, 5);
        assert_eq!(a, Interval::new(1, 5));
        assert_ne!(a, Interval::new(1, 6));
        assert_ne!(a, Interval::new(0, 5));

        // Identical exception tags compare equal even though no ordering
        // claim could be made about them.
        let broken: Interval<i8> = Interval::new(0, 1000);
        let wide: Interval<i16> = Interval::new(0, 1000);
        assert_eq!(broken, wide.cast::<i8>());
    }

    #[test]
    fn test_heterogeneous_operands() {
        let bytes: Interval<i8> = Interval::new(100, 120);
        let words: Interval<i16> = Interval::new(1000, 2000);
        let sum: Interval<i32> = add(&bytes, &words);
        assert_eq!(sum, Interval::new(1100, 2120));
    }

    #[test]
    fn test_float_intervals() {
        let a: Interval<f64> = Interval::new(0.5, 2.0);
        let b: Interval<f64> = Interval::new(4.0, 8.0);
        assert_eq!(a * b, Interval::new(2.0, 16.0));
        assert_eq!(b / a, Interval::new(2.0, 16.0));
    }

    #[test]
    fn test_display() {
        let iv: Interval<i32> = Interval::new(1, 5);
        assert_eq!(iv.to_string(), "[1,5]");

        let numerator: Interval<i32> = Interval::new(1, 2);
        let straddling: Interval<i32> = Interval::new(-1, 1);
        let degenerate: Interval<i32> = div(&numerator, &straddling);
        assert_eq!(degenerate.to_string(), "[0,interval divisor includes zero]");
    }
}
