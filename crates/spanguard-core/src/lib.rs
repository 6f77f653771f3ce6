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

//! # Spanguard Core
//!
//! Foundational primitives for static range analysis of safe numeric
//! expressions. This crate answers, ahead of execution, whether an
//! arithmetic operation over bounded operands can ever overflow, underflow,
//! or leave its domain, by propagating closed intervals of checked bounds
//! instead of executing concrete arithmetic.
//!
//! ## Modules
//!
//! - `logic`: Three-valued truth (`Tribool`) with Kleene negation,
//!   conjunction, and disjunction, used wherever an interval comparison
//!   cannot be resolved to a definite answer.
//! - `num`: The checked bound representation (`Checked<R>`, a value or a
//!   tagged failure) and checked arithmetic primitives (`CheckedNumeric`,
//!   plus free combination functions parameterized by result
//!   representation).
//! - `math`: The interval engine itself: `Interval<R>` with its
//!   constructors, arithmetic operators, three-valued comparisons, and the
//!   variadic min/max reducers that fold cross products into extremal
//!   bounds.
//!
//! ## Purpose
//!
//! Safe-arithmetic front ends need to bound the static range of an
//! expression before deciding whether a runtime check is required. Every
//! operation here is a pure function over immutable values: failure modes
//! are data carried inside bounds, never unwinding control flow, so ranges
//! that legitimately contain failure remain composable and comparable.
//!
//! Refer to each module for detailed APIs and examples.

pub mod logic;
pub mod math;
pub mod num;
