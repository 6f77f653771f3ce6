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

//! # Checked Numeric Foundations
//!
//! The bound representation and arithmetic primitives underneath the
//! interval engine. A bound is either a concrete number or a tagged
//! description of why no concrete number could be produced; arithmetic on
//! bounds never unwinds, it returns that description as data.
//!
//! ## Submodules
//!
//! - `checked`: `Checked<R>`, the valid-or-invalid bound sum type, with
//!   `BoundError`/`ErrorKind` failure tags, strict equality, and
//!   three-valued ordering comparisons.
//! - `ops`: The `CheckedNumeric` trait implemented per representation
//!   category (signed integer, unsigned integer, floating point) via
//!   macros, plus free combination functions (`add`, `subtract`,
//!   `multiply`, `divide`, `remainder`, `cast`) parameterized by result
//!   representation.
//!
//! ## Motivation
//!
//! Range analysis must compute with bounds that may legitimately be
//! unrepresentable. Encoding failure as a value keeps every bound
//! composable and comparable, and lets a failed lower bound coexist with a
//! perfectly good upper bound in the same interval.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod checked;
pub mod ops;
