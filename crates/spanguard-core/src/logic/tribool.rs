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

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

/// A three-valued truth type: `True`, `False`, or `Indeterminate`.
///
/// `Indeterminate` means "cannot be proven true or false given available
/// information". Negation maps it to itself; conjunction and disjunction
/// follow the Kleene tables, where a definite `False` dominates `&` and a
/// definite `True` dominates `|`.
///
/// # Examples
///
/// ```rust
/// # use spanguard_core::logic::tribool::Tribool;
///
/// let unknown = Tribool::Indeterminate;
/// assert_eq!(!unknown, Tribool::Indeterminate);
/// assert_eq!(Tribool::False & unknown, Tribool::False);
/// assert_eq!(Tribool::True & unknown, Tribool::Indeterminate);
/// assert_eq!(Tribool::True | unknown, Tribool::True);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tribool {
    /// The proposition is definitely true.
    True,
    /// The proposition is definitely false.
    False,
    /// The proposition can be neither proven nor disproven.
    #[default]
    Indeterminate,
}

impl Tribool {
    /// Returns `true` iff the value is definitely `True`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::logic::tribool::Tribool;
    ///
    /// assert!(Tribool::True.is_true());
    /// assert!(!Tribool::Indeterminate.is_true());
    /// ```
    #[inline]
    pub const fn is_true(self) -> bool {
        matches!(self, Tribool::True)
    }

    /// Returns `true` iff the value is definitely `False`.
    #[inline]
    pub const fn is_false(self) -> bool {
        matches!(self, Tribool::False)
    }

    /// Returns `true` iff the value is `Indeterminate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::logic::tribool::Tribool;
    ///
    /// assert!(Tribool::Indeterminate.is_indeterminate());
    /// assert!(!Tribool::False.is_indeterminate());
    /// ```
    #[inline]
    pub const fn is_indeterminate(self) -> bool {
        matches!(self, Tribool::Indeterminate)
    }

    /// Converts to a definite boolean, or `None` if indeterminate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use spanguard_core::logic::tribool::Tribool;
    ///
    /// assert_eq!(Tribool::True.to_bool(), Some(true));
    /// assert_eq!(Tribool::Indeterminate.to_bool(), None);
    /// ```
    #[inline]
    pub const fn to_bool(self) -> Option<bool> {
        match self {
            Tribool::True => Some(true),
            Tribool::False => Some(false),
            Tribool::Indeterminate => None,
        }
    }
}

impl From<bool> for Tribool {
    #[inline]
    fn from(value: bool) -> Self {
        if value { Tribool::True } else { Tribool::False }
    }
}

impl Not for Tribool {
    type Output = Tribool;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Tribool::True => Tribool::False,
            Tribool::False => Tribool::True,
            Tribool::Indeterminate => Tribool::Indeterminate,
        }
    }
}

impl BitAnd for Tribool {
    type Output = Tribool;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Tribool::False, _) | (_, Tribool::False) => Tribool::False,
            (Tribool::True, Tribool::True) => Tribool::True,
            _ => Tribool::Indeterminate,
        }
    }
}

impl BitOr for Tribool {
    type Output = Tribool;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Tribool::True, _) | (_, Tribool::True) => Tribool::True,
            (Tribool::False, Tribool::False) => Tribool::False,
            _ => Tribool::Indeterminate,
        }
    }
}

impl fmt::Display for Tribool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tribool::True => write!(f, "true"),
            Tribool::False => write!(f, "false"),
            Tribool::Indeterminate => write!(f, "indeterminate"),
        }
    }
}
