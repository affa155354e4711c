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

//! # Numeric Operations Traits
//!
//! Unified, by-value addition traits for generic operand types. This module
//! groups the plain and checked addition abstractions behind consistent
//! trait-based APIs suitable for generic code without references.
//!
//! ## Submodules
//!
//! - `arithmetic`: The addable-capability trait `AddVal` and the generic
//!   `add` operation. Any type with `Add<Output = Self>` qualifies; a type
//!   without addition is rejected at compile time.
//! - `checked_arithmetic`: The `CheckedAddVal` trait and the generic
//!   `checked_add` operation, returning `Option<T>` on overflow.
//!
//! Refer to each submodule for examples and trait lists.

pub mod arithmetic;
pub mod checked_arithmetic;
