/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Raw Representations
//!
//! The unsigned integers backends operate on. Every logical type is carried
//! through a backend as one of these.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt::Debug;
use std::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// A raw representation type.
///
/// Arithmetic is always wrapping, with the width of the raw type, which is
/// also the width of every logical type mapped onto it.
///
/// # Author
///
/// Haixing Hu
pub trait Raw:
    sealed::Sealed
    + bytemuck::Pod
    + Copy
    + Eq
    + Hash
    + Debug
    + Default
    + Send
    + Sync
    + 'static
{
    /// Zero.
    const ZERO: Self;

    /// One.
    const ONE: Self;

    /// Width in bits.
    const BITS: u32;

    /// Two's-complement wrapping addition.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Two's-complement wrapping subtraction.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Two's-complement wrapping negation.
    fn wrapping_neg(self) -> Self;
}

macro_rules! impl_raw {
    ($($ty:ty),*) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Raw for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$ty>::wrapping_add(self, rhs)
                }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$ty>::wrapping_sub(self, rhs)
                }

                #[inline(always)]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_raw!(u8, u16, u32, u64, usize);
