/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! The dispatch surface: [`Atomic`], a location holding any
//! [`Representable`](crate::Representable) value, whose operations are
//! resolved against its backend while the call site is compiled, plus
//! per-operation build-time queries and named aliases for the primitive
//! types.
//!
//! # Author
//!
//! Haixing Hu

mod aliases;
mod atomic_value;
mod queries;

pub use aliases::{
    AtomicBool,
    AtomicF32,
    AtomicF64,
    AtomicI16,
    AtomicI32,
    AtomicI64,
    AtomicI8,
    AtomicIsize,
    AtomicU16,
    AtomicU32,
    AtomicU64,
    AtomicU8,
    AtomicUsize,
};
pub use atomic_value::Atomic;
