/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Software Backend
//!
//! Pure-software fallback for builds without concurrency. Its cell is a
//! `std::cell::Cell`, which is not `Sync`, so an [`Atomic`](crate::Atomic)
//! over this backend cannot be shared between threads at all; the compiler
//! enforces the single-threaded context the fallback relies on.
//!
//! Only the value-returning primitives are declared. With a single thread
//! every level is trivially honoured, so they are declared at all of them.
//! The primitives are plain read-modify-write sequences, so the backend is
//! marked as emulated and no operation over it reports itself as real.
//!
//! # Author
//!
//! Haixing Hu

use std::cell::Cell;

use crate::backend::Backend;
use crate::barrier::Barrier;
use crate::capability::{Capabilities, CapabilityTable};
use crate::raw::Raw;

/// Single-threaded backend over `Cell<U>`.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftwareBackend;

const SOFTWARE_CAPABILITIES: CapabilityTable = CapabilityTable::uniform(
    Capabilities::GET
        .union(Capabilities::GET_SET)
        .union(Capabilities::GET_COMPARE_SET)
        .union(Capabilities::GET_ADD)
        .union(Capabilities::GET_SUBTRACT),
);

unsafe impl<U: Raw> Backend<U> for SoftwareBackend {
    type Cell = Cell<U>;

    const CAPABILITIES: CapabilityTable = SOFTWARE_CAPABILITIES;

    const EMULATED: bool = true;

    #[inline]
    fn cell(value: U) -> Cell<U> {
        Cell::new(value)
    }

    #[inline]
    fn into_inner(cell: Cell<U>) -> U {
        cell.into_inner()
    }

    #[inline]
    fn get(cell: &Cell<U>, _barrier: Barrier) -> U {
        cell.get()
    }

    #[inline]
    fn get_set(cell: &Cell<U>, value: U, _barrier: Barrier) -> U {
        cell.replace(value)
    }

    #[inline]
    fn get_compare_set(cell: &Cell<U>, expect: U, set: U, _barrier: Barrier) -> U {
        let prev = cell.get();
        if prev == expect {
            cell.set(set);
        }
        prev
    }

    #[inline]
    fn get_add(cell: &Cell<U>, delta: U, _barrier: Barrier) -> U {
        let prev = cell.get();
        cell.set(prev.wrapping_add(delta));
        prev
    }

    #[inline]
    fn get_subtract(cell: &Cell<U>, delta: U, _barrier: Barrier) -> U {
        let prev = cell.get();
        cell.set(prev.wrapping_sub(delta));
        prev
    }
}
