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

/// A trait for unsigned integer types that have a constant representing 0.
pub trait Zero {
    /// The constant representing 0 for the implementing type.
    const ZERO: Self;
}

/// A trait for unsigned integer types that have a constant representing 1.
///
/// `ONE` is the multiplicative identity and the value of both `0!` and `1!`.
pub trait One {
    /// The constant representing 1 for the implementing type.
    const ONE: Self;
}

macro_rules! impl_constants_for {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                const ZERO: Self = 0;
            }

            impl One for $t {
                const ONE: Self = 1;
            }
        )*
    };
}

impl_constants_for!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    fn identity<T>() -> (T, T)
    where
        T: Zero + One,
    {
        (T::ZERO, T::ONE)
    }

    #[test]
    fn test_constants_u8() {
        assert_eq!(identity::<u8>(), (0, 1));
    }

    #[test]
    fn test_constants_u128() {
        assert_eq!(identity::<u128>(), (0, 1));
    }

    #[test]
    fn test_constants_usize() {
        assert_eq!(identity::<usize>(), (0, 1));
    }
}
