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

use factorium_core::num::numeric::UnsignedNumeric;

/// Returns the largest `n` whose factorial fits in `T`.
///
/// | type   | n  |
/// |--------|----|
/// | `u8`   | 5  |
/// | `u16`  | 8  |
/// | `u32`  | 12 |
/// | `u64`  | 20 |
/// | `u128` | 34 |
///
/// # Examples
///
/// ```rust
/// # use factorium_factorial::limits::largest_representable_input;
/// assert_eq!(largest_representable_input::<u8>(), 5);
/// assert_eq!(largest_representable_input::<u64>(), 20);
/// ```
pub fn largest_representable_input<T>() -> T
where
    T: UnsignedNumeric,
{
    let mut n = T::ONE;
    let mut accumulator = T::ONE;
    // `n + 1` cannot overflow: the factorial leaves the range of `T` long
    // before the counter does.
    loop {
        let next = n + T::ONE;
        match accumulator.checked_mul_val(next) {
            Ok(product) => {
                accumulator = product;
                n = next;
            }
            Err(_) => return n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::iterative::iterative_checked;

    #[test]
    fn test_known_limits() {
        assert_eq!(largest_representable_input::<u8>(), 5);
        assert_eq!(largest_representable_input::<u16>(), 8);
        assert_eq!(largest_representable_input::<u32>(), 12);
        assert_eq!(largest_representable_input::<u64>(), 20);
        assert_eq!(largest_representable_input::<u128>(), 34);
    }

    #[test]
    fn test_usize_matches_pointer_width() {
        let expected = if usize::BITS == 64 { 20 } else { 12 };
        assert_eq!(largest_representable_input::<usize>(), expected);
    }

    #[test]
    fn test_limit_is_tight() {
        let n = largest_representable_input::<u32>();
        assert!(iterative_checked(n).is_ok());
        assert!(iterative_checked(n + 1).is_err());
    }
}
