/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-ops
//!
//! Atomic operations resolved at build time from what a backend says it can
//! do.
//!
//! Backends (hardware intrinsics, OS primitives, compiler builtins, a
//! software fallback) each implement only some atomic primitives, and only at
//! some ordering strengths. This crate takes a backend's declaration and,
//! for every operation a caller uses, decides while compiling the call site:
//!
//! - whether the operation can be provided at all;
//! - whether it is the backend's native primitive or synthesized from a
//!   sibling (`add` from `get_add`, `add_get` from `get_add` plus the delta,
//!   `compare_set` from `get_compare_set`, ...);
//! - which barrier it actually runs at, which is the requested one or the
//!   next level that satisfies it, never a weaker one.
//!
//! A synthesized operation still performs exactly one backend call. An
//! operation that cannot be provided is a compile error, never a runtime
//! fallback.
//!
//! ## Components
//!
//! - [`Barrier`] and the [`Order`] markers: the ordering lattice.
//! - [`OpKind`], [`Capabilities`], [`CapabilityTable`]: the capability model.
//! - [`Representable`], [`Integral`], [`represent!`]: logical to raw mapping.
//! - [`derivation`]: the per-kind rule tables and the resolver.
//! - [`resolution`]: queries, [`try_resolve`] and [`Report`] diagnostics.
//! - [`Backend`], [`NativeBackend`], [`SoftwareBackend`]: the backend boundary.
//! - [`Atomic`] and its aliases: the dispatch surface.
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_ops::{Acquire, AtomicU32, Barrier, Full, Relaxed};
//!
//! let atomic = AtomicU32::new(10);
//! assert_eq!(atomic.add_get(5), 15);
//! assert_eq!(atomic.get_subtract1_with::<Relaxed>(), 15);
//! assert!(atomic.compare_set(14, 20));
//!
//! // The standard atomics have no add that skips returning a value.
//! assert!(AtomicU32::add_exists::<Full>());
//! assert!(!AtomicU32::add_is_real::<Full>());
//!
//! // A plain store cannot carry acquire semantics; an acquire swap whose
//! // result is dropped can.
//! assert_eq!(AtomicU32::set_barrier::<Acquire>(), Some(Barrier::Acquire));
//! assert!(!AtomicU32::set_is_real::<Acquire>());
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod backend;
pub mod barrier;
pub mod capability;
pub mod derivation;
pub mod dispatch;
pub mod error;
pub mod raw;
pub mod representation;
pub mod resolution;

pub use atomic::{
    Atomic,
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
pub use backend::{
    Backend,
    DefaultBackend,
    NativeBackend,
    SoftwareBackend,
};
pub use barrier::{
    Acquire,
    Barrier,
    Full,
    Order,
    Relaxed,
    Release,
};
pub use capability::{
    Capabilities,
    CapabilityTable,
    OpKind,
    Shape,
};
pub use dispatch::Outcome;
pub use error::ResolveError;
pub use raw::Raw;
pub use representation::{
    Integral,
    Representable,
};
pub use resolution::{
    try_resolve,
    Report,
    ReportEntry,
    Resolved,
};
