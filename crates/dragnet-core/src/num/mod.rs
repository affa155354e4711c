// Copyright (c) 2025 Felix Kahle.
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

//! # Numeric Foundations
//!
//! Traits for by-value arithmetic over generic operand types. This module
//! provides uniform, trait-based addition APIs that mirror Rust's intrinsic
//! behaviors while remaining open to user-defined operand types.
//!
//! ## Submodules
//!
//! - `ops`: The addable-capability trait (`AddVal`) with the generic `add`
//!   operation, and checked addition (`CheckedAddVal`) returning `Option<T>`
//!   for predictable overflow handling.
//!
//! ## Motivation
//!
//! Generic code should state the arithmetic capability it needs as a trait
//! bound rather than discovering it at runtime. These traits make the
//! capability explicit, so an operand type without addition is rejected when
//! the code is compiled instead of when it runs.
//!
//! Refer to the submodule for detailed APIs and examples.

pub mod ops;
