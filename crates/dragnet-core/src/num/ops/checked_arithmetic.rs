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

use num_traits::CheckedAdd;

/// A trait for types that support checked addition by value (no references).
///
/// This mirrors the semantics of primitive integer `checked_add`, but provides
/// a trait-based API that does not take references (unlike the num_traits
/// method it is built on).
///
/// # Examples
///
/// ```rust
/// # use dragnet_core::num::ops::checked_arithmetic::CheckedAddVal;
/// let a: u8 = 200;
/// let b: u8 = 100;
/// assert_eq!(a.checked_add_val(b), None); // Overflow occurs
/// let c: u8 = 50;
/// assert_eq!(a.checked_add_val(c), Some(250)); // No overflow
/// ```
pub trait CheckedAddVal: Sized {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

impl<T> CheckedAddVal for T
where
    T: CheckedAdd,
{
    #[inline(always)]
    fn checked_add_val(self, v: T) -> Option<T> {
        self.checked_add(&v)
    }
}

/// Adds two operands, returning `None` if the addition overflows.
///
/// # Examples
///
/// ```rust
/// # use dragnet_core::num::ops::checked_arithmetic::checked_add;
/// assert_eq!(checked_add(1u8, 2u8), Some(3));
/// assert_eq!(checked_add(u8::MAX, 1u8), None);
/// ```
#[inline(always)]
pub fn checked_add<T: CheckedAddVal>(a: T, b: T) -> Option<T> {
    a.checked_add_val(b)
}
