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

//! # Three-Valued Logic
//!
//! Truth values for questions that bounded range analysis cannot always
//! answer. Comparing intervals whose bounds may be exceptional, or whose
//! ranges overlap, yields neither `true` nor `false` but a third state:
//! indeterminate.
//!
//! ## Submodules
//!
//! - `tribool`: The `Tribool` enum with Kleene negation, conjunction
//!   (`&`), and disjunction (`|`), conversions to and from `bool`, and
//!   predicate accessors.
//!
//! ## Motivation
//!
//! Coercing "unknown" into `false` silently turns "cannot prove" into
//! "disproved", exactly the kind of unsound shortcut a safe-arithmetic
//! analysis must not take. An explicit third truth value forces callers to
//! handle all three outcomes.

pub mod tribool;
