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

use std::ops::Add;

/// A trait for types that support addition by value (no references).
///
/// This is the addable capability: any type whose `Add` implementation
/// produces the same type qualifies through the blanket implementation,
/// including user-defined types with custom merge behavior. The operation
/// means whatever `+` means for the operand type.
///
/// # Examples
///
/// ```rust
/// # use dragnet_core::num::ops::arithmetic::AddVal;
/// let a: i32 = 1;
/// let b: i32 = 2;
/// assert_eq!(a.add_val(b), 3);
/// ```
pub trait AddVal: Sized + Add<Self, Output = Self> {
    /// Performs addition by value.
    fn add_val(self, v: Self) -> Self;
}

impl<T> AddVal for T
where
    T: Add<Output = T>,
{
    #[inline(always)]
    fn add_val(self, v: T) -> T {
        self + v
    }
}

/// Adds two operands of the same addable type.
///
/// The result is whatever the operand type's addition produces: a numeric
/// sum for primitives, custom merge behavior for user-defined types. No
/// runtime validation is performed; a type that provides no addition
/// capability does not satisfy the `AddVal` bound and is rejected when the
/// call is compiled.
///
/// # Examples
///
/// ```rust
/// # use dragnet_core::num::ops::arithmetic::add;
/// assert_eq!(add(1, 2), 3);
/// assert_eq!(add(1.5, 2.5), 4.0);
/// ```
///
/// A user-defined operand type participates through its own `Add`:
///
/// ```rust
/// # use dragnet_core::num::ops::arithmetic::add;
/// use std::ops::Add;
///
/// #[derive(Debug, PartialEq)]
/// struct Merged;
///
/// impl Add for Merged {
///     type Output = Merged;
///     fn add(self, _rhs: Merged) -> Merged {
///         Merged
///     }
/// }
///
/// assert_eq!(add(Merged, Merged), Merged);
/// ```
///
/// A type without addition does not compile against `add`:
///
/// ```compile_fail
/// # use dragnet_core::num::ops::arithmetic::add;
/// struct NoAdd;
///
/// add(NoAdd, NoAdd);
/// ```
#[inline(always)]
pub fn add<T: AddVal>(a: T, b: T) -> T {
    a.add_val(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_integers() {
        assert_eq!(add(1, 2), 3);
        assert_eq!(add(-1i64, 1i64), 0);
        assert_eq!(add(200u8, 55u8), 255u8);
    }

    #[test]
    fn test_add_floats() {
        assert_eq!(add(1.5f64, 2.5f64), 4.0);
        assert_eq!(add(0.25f32, 0.5f32), 0.75);
    }

    #[test]
    fn test_add_matches_native_operator() {
        for a in -10i32..=10 {
            for b in -10i32..=10 {
                assert_eq!(add(a, b), a + b);
            }
        }
    }

    #[test]
    fn test_add_custom_merge_type() {
        // A type whose addition always yields the same fixed result,
        // regardless of operand identity.
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Merged;

        impl Add for Merged {
            type Output = Merged;
            fn add(self, _rhs: Merged) -> Merged {
                Merged
            }
        }

        assert_eq!(add(Merged, Merged), Merged);
        assert_eq!(Merged.add_val(Merged), Merged);
    }

    #[test]
    fn test_add_val_matches_add() {
        assert_eq!(5i32.add_val(7), add(5i32, 7));
    }
}
