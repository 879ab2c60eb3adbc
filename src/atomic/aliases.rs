/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Type Aliases
//!
//! Named atomics for the primitive types over the configured default
//! backend. Name [`Atomic`] directly to pick another backend.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::Atomic;
use crate::backend::DefaultBackend;

macro_rules! atomic_alias {
    ($($name:ident => $value:ty, $doc:expr;)*) => {
        $(
            #[doc = concat!("Atomic ", $doc, ".")]
            pub type $name = Atomic<$value, DefaultBackend>;
        )*
    };
}

atomic_alias! {
    AtomicBool => bool, "boolean";
    AtomicI8 => i8, "8-bit signed integer";
    AtomicU8 => u8, "8-bit unsigned integer";
    AtomicI16 => i16, "16-bit signed integer";
    AtomicU16 => u16, "16-bit unsigned integer";
    AtomicI32 => i32, "32-bit signed integer";
    AtomicU32 => u32, "32-bit unsigned integer";
    AtomicI64 => i64, "64-bit signed integer";
    AtomicU64 => u64, "64-bit unsigned integer";
    AtomicIsize => isize, "pointer-sized signed integer";
    AtomicUsize => usize, "pointer-sized unsigned integer";
    AtomicF32 => f32, "32-bit floating point";
    AtomicF64 => f64, "64-bit floating point";
}
