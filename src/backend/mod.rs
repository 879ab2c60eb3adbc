/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Backends
//!
//! The boundary between the resolution engine and whatever actually performs
//! atomic memory accesses: hardware intrinsics, OS primitives, compiler
//! builtins or a software fallback.
//!
//! A backend declares, per raw type and per barrier, which primitives it
//! implements natively, and provides those primitives. The engine selects
//! exactly one of them for every call and never calls one the backend did not
//! declare.
//!
//! # Author
//!
//! Haixing Hu

mod native;
mod software;

pub use native::NativeBackend;
pub use software::SoftwareBackend;

use crate::barrier::Barrier;
use crate::capability::{CapabilityTable, OpKind};
use crate::raw::Raw;

/// The backend selected by the build configuration.
///
/// [`NativeBackend`] unless the `single-threaded` feature is enabled, in
/// which case it is [`SoftwareBackend`].
#[cfg(not(feature = "single-threaded"))]
pub type DefaultBackend = NativeBackend;

/// The backend selected by the build configuration.
///
/// [`NativeBackend`] unless the `single-threaded` feature is enabled, in
/// which case it is [`SoftwareBackend`].
#[cfg(feature = "single-threaded")]
pub type DefaultBackend = SoftwareBackend;

/// An atomic backend for raw type `U`.
///
/// Every primitive receives the barrier the resolver settled on, which is
/// always a level at which the backend declared that primitive. Primitives
/// the backend does not declare keep their default body; the engine never
/// reaches it.
///
/// # Safety
///
/// The engine trusts [`CAPABILITIES`](Backend::CAPABILITIES) completely.
/// An implementor must only set a bit at a barrier level if the
/// corresponding primitive, called with that level, is a single atomic
/// access on the cell that orders memory at least as strongly as the level
/// says. Declaring `Acquire` for an operation that is really relaxed breaks
/// every caller relying on it, and nothing can detect that at run time.
///
/// # Author
///
/// Haixing Hu
pub unsafe trait Backend<U: Raw> {
    /// The storage the caller owns and every primitive operates on.
    type Cell;

    /// Natively implemented primitives, per barrier.
    const CAPABILITIES: CapabilityTable;

    /// `true` if the primitives are built from ordinary loads and stores
    /// rather than genuinely atomic instructions. Such a backend is only
    /// correct where concurrent access is already excluded, and none of its
    /// operations is reported as real.
    const EMULATED: bool = false;

    /// Creates storage holding `value`.
    fn cell(value: U) -> Self::Cell;

    /// Consumes the storage and returns its value.
    fn into_inner(cell: Self::Cell) -> U;

    /// Loads the value.
    fn get(_cell: &Self::Cell, _barrier: Barrier) -> U {
        unsupported(OpKind::Get)
    }

    /// Stores `value`.
    fn set(_cell: &Self::Cell, _value: U, _barrier: Barrier) {
        unsupported(OpKind::Set)
    }

    /// Stores `value`, returning the previous value.
    fn get_set(_cell: &Self::Cell, _value: U, _barrier: Barrier) -> U {
        unsupported(OpKind::GetSet)
    }

    /// Stores `set` if the value equals `expect`; returns whether it did.
    fn compare_set(_cell: &Self::Cell, _expect: U, _set: U, _barrier: Barrier) -> bool {
        unsupported(OpKind::CompareSet)
    }

    /// Stores `set` if the value equals `expect`; returns the previous
    /// value either way.
    fn get_compare_set(_cell: &Self::Cell, _expect: U, _set: U, _barrier: Barrier) -> U {
        unsupported(OpKind::GetCompareSet)
    }

    /// Adds `delta`.
    fn add(_cell: &Self::Cell, _delta: U, _barrier: Barrier) {
        unsupported(OpKind::Add)
    }

    /// Adds `delta`, returning the new value.
    fn add_get(_cell: &Self::Cell, _delta: U, _barrier: Barrier) -> U {
        unsupported(OpKind::AddGet)
    }

    /// Adds `delta`, returning the previous value.
    fn get_add(_cell: &Self::Cell, _delta: U, _barrier: Barrier) -> U {
        unsupported(OpKind::GetAdd)
    }

    /// Subtracts `delta`.
    fn subtract(_cell: &Self::Cell, _delta: U, _barrier: Barrier) {
        unsupported(OpKind::Subtract)
    }

    /// Subtracts `delta`, returning the new value.
    fn subtract_get(_cell: &Self::Cell, _delta: U, _barrier: Barrier) -> U {
        unsupported(OpKind::SubtractGet)
    }

    /// Subtracts `delta`, returning the previous value.
    fn get_subtract(_cell: &Self::Cell, _delta: U, _barrier: Barrier) -> U {
        unsupported(OpKind::GetSubtract)
    }

    /// Increments.
    fn add1(_cell: &Self::Cell, _barrier: Barrier) {
        unsupported(OpKind::Add1)
    }

    /// Increments, returning the new value.
    fn add1_get(_cell: &Self::Cell, _barrier: Barrier) -> U {
        unsupported(OpKind::Add1Get)
    }

    /// Increments, returning the previous value.
    fn get_add1(_cell: &Self::Cell, _barrier: Barrier) -> U {
        unsupported(OpKind::GetAdd1)
    }

    /// Decrements.
    fn subtract1(_cell: &Self::Cell, _barrier: Barrier) {
        unsupported(OpKind::Subtract1)
    }

    /// Decrements, returning the new value.
    fn subtract1_get(_cell: &Self::Cell, _barrier: Barrier) -> U {
        unsupported(OpKind::Subtract1Get)
    }

    /// Decrements, returning the previous value.
    fn get_subtract1(_cell: &Self::Cell, _barrier: Barrier) -> U {
        unsupported(OpKind::GetSubtract1)
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn unsupported(kind: OpKind) -> ! {
    panic!("backend primitive `{kind}` was called but never declared")
}
