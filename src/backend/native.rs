/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Native Backend
//!
//! Backend over the standard library's atomic integers.
//!
//! The standard atomics expose load, store, swap, compare-exchange,
//! fetch-add and fetch-sub, so those are the declared primitives; everything
//! else is derived. A load cannot be performed with release ordering and a
//! store cannot be performed with acquire ordering, so those combinations are
//! not declared; they are derived from a read-modify-write at the same level
//! (`get_add(0)` for a release load, a swap for an acquire store).
//!
//! # Author
//!
//! Haixing Hu

use std::sync::atomic::Ordering;

use crate::backend::Backend;
use crate::barrier::Barrier;
use crate::capability::{Capabilities, CapabilityTable};

/// Backend over `std::sync::atomic`.
///
/// Implemented for `u8`, `u16`, `u32`, `u64` and `usize` on targets that
/// have atomics of that width.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

const READ_MODIFY_WRITE: Capabilities = Capabilities::GET_SET
    .union(Capabilities::COMPARE_SET)
    .union(Capabilities::GET_COMPARE_SET)
    .union(Capabilities::GET_ADD)
    .union(Capabilities::GET_SUBTRACT);

const NATIVE_CAPABILITIES: CapabilityTable = CapabilityTable::new()
    .with(
        Barrier::Relaxed,
        Capabilities::GET.union(Capabilities::SET).union(READ_MODIFY_WRITE),
    )
    .with(Barrier::Acquire, Capabilities::GET.union(READ_MODIFY_WRITE))
    .with(Barrier::Release, Capabilities::SET.union(READ_MODIFY_WRITE))
    .with(
        Barrier::Full,
        Capabilities::GET.union(Capabilities::SET).union(READ_MODIFY_WRITE),
    );

#[inline(always)]
fn ordering(barrier: Barrier) -> Ordering {
    match barrier {
        Barrier::Relaxed => Ordering::Relaxed,
        Barrier::Acquire => Ordering::Acquire,
        Barrier::Release => Ordering::Release,
        Barrier::Full => Ordering::SeqCst,
    }
}

// A failed compare-exchange is a load, which cannot carry release semantics.
#[inline(always)]
fn failure_ordering(barrier: Barrier) -> Ordering {
    match barrier {
        Barrier::Relaxed | Barrier::Release => Ordering::Relaxed,
        Barrier::Acquire => Ordering::Acquire,
        Barrier::Full => Ordering::SeqCst,
    }
}

macro_rules! impl_native_backend {
    ($($width:literal: $raw:ty => $atomic:ty),* $(,)?) => {
        $(
            #[cfg(target_has_atomic = $width)]
            unsafe impl Backend<$raw> for NativeBackend {
                type Cell = $atomic;

                const CAPABILITIES: CapabilityTable = NATIVE_CAPABILITIES;

                #[inline]
                fn cell(value: $raw) -> $atomic {
                    <$atomic>::new(value)
                }

                #[inline]
                fn into_inner(cell: $atomic) -> $raw {
                    cell.into_inner()
                }

                #[inline]
                fn get(cell: &$atomic, barrier: Barrier) -> $raw {
                    cell.load(ordering(barrier))
                }

                #[inline]
                fn set(cell: &$atomic, value: $raw, barrier: Barrier) {
                    cell.store(value, ordering(barrier));
                }

                #[inline]
                fn get_set(cell: &$atomic, value: $raw, barrier: Barrier) -> $raw {
                    cell.swap(value, ordering(barrier))
                }

                #[inline]
                fn compare_set(
                    cell: &$atomic,
                    expect: $raw,
                    set: $raw,
                    barrier: Barrier,
                ) -> bool {
                    cell.compare_exchange(
                        expect,
                        set,
                        ordering(barrier),
                        failure_ordering(barrier),
                    )
                    .is_ok()
                }

                #[inline]
                fn get_compare_set(
                    cell: &$atomic,
                    expect: $raw,
                    set: $raw,
                    barrier: Barrier,
                ) -> $raw {
                    match cell.compare_exchange(
                        expect,
                        set,
                        ordering(barrier),
                        failure_ordering(barrier),
                    ) {
                        Ok(prev) => prev,
                        Err(actual) => actual,
                    }
                }

                #[inline]
                fn get_add(cell: &$atomic, delta: $raw, barrier: Barrier) -> $raw {
                    cell.fetch_add(delta, ordering(barrier))
                }

                #[inline]
                fn get_subtract(cell: &$atomic, delta: $raw, barrier: Barrier) -> $raw {
                    cell.fetch_sub(delta, ordering(barrier))
                }
            }
        )*
    };
}

impl_native_backend! {
    "8": u8 => std::sync::atomic::AtomicU8,
    "16": u16 => std::sync::atomic::AtomicU16,
    "32": u32 => std::sync::atomic::AtomicU32,
    "64": u64 => std::sync::atomic::AtomicU64,
    "ptr": usize => std::sync::atomic::AtomicUsize,
}
