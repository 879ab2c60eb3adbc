/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Representation Mapper
//!
//! Maps a logical value type onto the raw integer a backend operates on, and
//! back. The mapping is a bit reinterpretation done with `bytemuck`; it is
//! never a numeric conversion, so enums, floats and small structs survive the
//! trip through a backend unchanged.
//!
//! Layout is checked while compiling: a mapping whose sizes differ, or whose
//! logical alignment exceeds the raw alignment, is rejected.
//!
//! # Example
//!
//! ```rust
//! use bytemuck::{CheckedBitPattern, NoUninit};
//! use prism3_atomic_ops::{represent, Representable};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, NoUninit, CheckedBitPattern)]
//! #[repr(u8)]
//! enum State {
//!     Idle = 0,
//!     Running = 1,
//!     Done = 7,
//! }
//!
//! represent!(State => u8);
//!
//! assert_eq!(State::Done.into_raw(), 7u8);
//! assert_eq!(State::from_raw(1), State::Running);
//! ```
//!
//! # Author
//!
//! Haixing Hu

use std::mem::{align_of, size_of};

use bytemuck::{CheckedBitPattern, NoUninit};

use crate::raw::Raw;

/// A logical type that can be carried through a backend as a raw integer.
///
/// Implement it with [`represent!`](crate::represent) rather than by hand.
///
/// # Author
///
/// Haixing Hu
pub trait Representable: Copy + 'static {
    /// The raw type this value travels as.
    type Raw: Raw;

    /// Reinterprets the bits of `self` as the raw type.
    fn into_raw(self) -> Self::Raw;

    /// Reinterprets raw bits as a logical value.
    ///
    /// # Panics
    ///
    /// Panics if `raw` is not a valid bit pattern for `Self`. Values read
    /// back from an [`Atomic`](crate::Atomic) are always valid because only
    /// values of `Self` are ever written into it.
    fn from_raw(raw: Self::Raw) -> Self;
}

/// A logical type whose arithmetic is exactly the two's-complement wrapping
/// arithmetic of its raw type.
///
/// Only `Integral` types get the add/subtract families. All primitive
/// integers qualify; floats, `bool`, `char` and enums do not.
pub trait Integral: Representable {}

/// Checks the layout contract between a logical and a raw type.
const fn assert_layout<T, U>() {
    assert!(
        size_of::<T>() == size_of::<U>(),
        "logical type and raw representation differ in size"
    );
    assert!(
        align_of::<T>() <= align_of::<U>(),
        "logical type is more strictly aligned than its raw representation"
    );
}

#[doc(hidden)]
#[inline(always)]
pub fn to_raw<T: NoUninit, U: Raw>(value: T) -> U {
    const { assert_layout::<T, U>() };
    bytemuck::cast(value)
}

#[doc(hidden)]
#[inline(always)]
pub fn from_raw<T: CheckedBitPattern, U: Raw>(raw: U) -> T {
    const { assert_layout::<T, U>() };
    bytemuck::checked::cast(raw)
}

/// Implements [`Representable`] for types with a `bytemuck` bit-level
/// description.
///
/// The logical type must implement `bytemuck::NoUninit` and
/// `bytemuck::CheckedBitPattern` (both derivable), and have exactly the size
/// of the named raw type.
///
/// ```rust
/// use bytemuck::{Pod, Zeroable};
/// use prism3_atomic_ops::{represent, Representable};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
/// #[repr(C)]
/// struct Pair {
///     low: u16,
///     high: u16,
/// }
///
/// represent!(Pair => u32);
///
/// let pair = Pair { low: 1, high: 2 };
/// assert_eq!(Pair::from_raw(pair.into_raw()), pair);
/// ```
#[macro_export]
macro_rules! represent {
    ($($ty:ty => $raw:ty),+ $(,)?) => {
        $(
            impl $crate::Representable for $ty {
                type Raw = $raw;

                #[inline(always)]
                fn into_raw(self) -> $raw {
                    $crate::representation::to_raw::<$ty, $raw>(self)
                }

                #[inline(always)]
                fn from_raw(raw: $raw) -> Self {
                    $crate::representation::from_raw::<$ty, $raw>(raw)
                }
            }
        )+
    };
}

macro_rules! represent_integral {
    ($($ty:ty => $raw:ty),+ $(,)?) => {
        $(
            crate::represent!($ty => $raw);

            impl Integral for $ty {}
        )+
    };
}

represent_integral! {
    u8 => u8,
    i8 => u8,
    u16 => u16,
    i16 => u16,
    u32 => u32,
    i32 => u32,
    u64 => u64,
    i64 => u64,
    usize => usize,
    isize => usize,
}

crate::represent! {
    bool => u8,
    char => u32,
    f32 => u32,
    f64 => u64,
}
