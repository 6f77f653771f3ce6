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

//! # Interval Mathematics
//!
//! Closed interval arithmetic over checked bounds, the algorithmic core of
//! static range analysis.
//!
//! ## Submodules
//!
//! - `interval`: The `Interval<R>` value type, a closed `[lower, upper]`
//!   range whose bounds are checked values, with constructors, cross-
//!   representation casts, containment queries, the five arithmetic
//!   operators, three-valued ordered comparisons, and the variadic
//!   min/max reducers that fold sign cross-products into extremal bounds.
//!
//! ## Motivation
//!
//! Deciding ahead of execution whether `A op B` can overflow reduces to
//! interval arithmetic on the operands' static ranges. Closed intervals of
//! checked bounds compose under every operator while carrying "could not
//! be computed" verdicts bound-by-bound instead of aborting the analysis.
//!
//! Refer to the `interval` module for detailed APIs and examples.

pub mod interval;
