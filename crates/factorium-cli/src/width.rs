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

use clap::ValueEnum;
use num_traits::NumCast;

/// Concrete unsigned integer type a command runs at.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, ValueEnum)]
pub enum Width {
    U8,
    U16,
    U32,
    #[default]
    U64,
    U128,
    Usize,
}

impl Width {
    /// Number of bits of the selected type.
    pub fn bits(&self) -> u32 {
        match self {
            Width::U8 => u8::BITS,
            Width::U16 => u16::BITS,
            Width::U32 => u32::BITS,
            Width::U64 => u64::BITS,
            Width::U128 => u128::BITS,
            Width::Usize => usize::BITS,
        }
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Width::U8 => write!(f, "u8"),
            Width::U16 => write!(f, "u16"),
            Width::U32 => write!(f, "u32"),
            Width::U64 => write!(f, "u64"),
            Width::U128 => write!(f, "u128"),
            Width::Usize => write!(f, "usize"),
        }
    }
}

/// Narrows a command-line integer to `T`.
///
/// # Errors
///
/// Fails if `value` is larger than `T::MAX`.
pub fn narrow<T>(value: u128, width: Width) -> anyhow::Result<T>
where
    T: NumCast,
{
    <T as NumCast>::from(value)
        .ok_or_else(|| anyhow::anyhow!("{} does not fit in {}", value, width))
}

/// Runs a generic function at the concrete type selected by a `Width`.
macro_rules! dispatch_width {
    ($width:expr, $($func:ident)::+ ( $($arg:expr),* $(,)? )) => {
        match $width {
            $crate::width::Width::U8 => $($func)::+::<u8>($($arg),*),
            $crate::width::Width::U16 => $($func)::+::<u16>($($arg),*),
            $crate::width::Width::U32 => $($func)::+::<u32>($($arg),*),
            $crate::width::Width::U64 => $($func)::+::<u64>($($arg),*),
            $crate::width::Width::U128 => $($func)::+::<u128>($($arg),*),
            $crate::width::Width::Usize => $($func)::+::<usize>($($arg),*),
        }
    };
}

pub(crate) use dispatch_width;
