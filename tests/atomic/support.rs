/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! Recording backend for tests: honest single-threaded primitives that
//! count calls and remember the last primitive and barrier used.

use prism3_atomic_ops::{Barrier, OpKind, Raw};
use std::cell::Cell;

pub struct Recorder<U> {
    value: Cell<U>,
    calls: Cell<usize>,
    last: Cell<Option<(OpKind, Barrier)>>,
}

impl<U: Raw> Recorder<U> {
    pub fn new(value: U) -> Self {
        Self {
            value: Cell::new(value),
            calls: Cell::new(0),
            last: Cell::new(None),
        }
    }

    /// Current value, without counting as a call.
    pub fn peek(&self) -> U {
        self.value.get()
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last(&self) -> Option<(OpKind, Barrier)> {
        self.last.get()
    }

    pub fn into_inner(self) -> U {
        self.value.into_inner()
    }

    fn record(&self, kind: OpKind, barrier: Barrier) {
        self.calls.set(self.calls.get() + 1);
        self.last.set(Some((kind, barrier)));
    }

    fn update(&self, f: impl FnOnce(U) -> U) -> (U, U) {
        let old = self.value.get();
        let new = f(old);
        self.value.set(new);
        (old, new)
    }

    pub fn get(&self, barrier: Barrier) -> U {
        self.record(OpKind::Get, barrier);
        self.value.get()
    }

    pub fn set(&self, value: U, barrier: Barrier) {
        self.record(OpKind::Set, barrier);
        self.value.set(value);
    }

    pub fn get_set(&self, value: U, barrier: Barrier) -> U {
        self.record(OpKind::GetSet, barrier);
        self.value.replace(value)
    }

    pub fn compare_set(&self, expect: U, set: U, barrier: Barrier) -> bool {
        self.record(OpKind::CompareSet, barrier);
        if self.value.get() == expect {
            self.value.set(set);
            true
        } else {
            false
        }
    }

    pub fn get_compare_set(&self, expect: U, set: U, barrier: Barrier) -> U {
        self.record(OpKind::GetCompareSet, barrier);
        let old = self.value.get();
        if old == expect {
            self.value.set(set);
        }
        old
    }

    pub fn add(&self, delta: U, barrier: Barrier) {
        self.record(OpKind::Add, barrier);
        self.update(|v| v.wrapping_add(delta));
    }

    pub fn add_get(&self, delta: U, barrier: Barrier) -> U {
        self.record(OpKind::AddGet, barrier);
        self.update(|v| v.wrapping_add(delta)).1
    }

    pub fn get_add(&self, delta: U, barrier: Barrier) -> U {
        self.record(OpKind::GetAdd, barrier);
        self.update(|v| v.wrapping_add(delta)).0
    }

    pub fn subtract(&self, delta: U, barrier: Barrier) {
        self.record(OpKind::Subtract, barrier);
        self.update(|v| v.wrapping_sub(delta));
    }

    pub fn subtract_get(&self, delta: U, barrier: Barrier) -> U {
        self.record(OpKind::SubtractGet, barrier);
        self.update(|v| v.wrapping_sub(delta)).1
    }

    pub fn get_subtract(&self, delta: U, barrier: Barrier) -> U {
        self.record(OpKind::GetSubtract, barrier);
        self.update(|v| v.wrapping_sub(delta)).0
    }

    pub fn add1(&self, barrier: Barrier) {
        self.record(OpKind::Add1, barrier);
        self.update(|v| v.wrapping_add(U::ONE));
    }

    pub fn add1_get(&self, barrier: Barrier) -> U {
        self.record(OpKind::Add1Get, barrier);
        self.update(|v| v.wrapping_add(U::ONE)).1
    }

    pub fn get_add1(&self, barrier: Barrier) -> U {
        self.record(OpKind::GetAdd1, barrier);
        self.update(|v| v.wrapping_add(U::ONE)).0
    }

    pub fn subtract1(&self, barrier: Barrier) {
        self.record(OpKind::Subtract1, barrier);
        self.update(|v| v.wrapping_sub(U::ONE));
    }

    pub fn subtract1_get(&self, barrier: Barrier) -> U {
        self.record(OpKind::Subtract1Get, barrier);
        self.update(|v| v.wrapping_sub(U::ONE)).1
    }

    pub fn get_subtract1(&self, barrier: Barrier) -> U {
        self.record(OpKind::GetSubtract1, barrier);
        self.update(|v| v.wrapping_sub(U::ONE)).0
    }
}

/// Declares a backend over [`Recorder`] with the given capability table.
///
/// Every primitive is implemented; the table decides which ones the engine
/// may select.
#[macro_export]
macro_rules! recording_backend {
    ($name:ident, $table:expr) => {
        pub struct $name;

        unsafe impl<U: prism3_atomic_ops::Raw> prism3_atomic_ops::Backend<U> for $name {
            type Cell = $crate::support::Recorder<U>;

            const CAPABILITIES: prism3_atomic_ops::CapabilityTable = $table;

            fn cell(value: U) -> Self::Cell {
                $crate::support::Recorder::new(value)
            }

            fn into_inner(cell: Self::Cell) -> U {
                cell.into_inner()
            }

            fn get(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.get(barrier)
            }

            fn set(cell: &Self::Cell, value: U, barrier: prism3_atomic_ops::Barrier) {
                cell.set(value, barrier)
            }

            fn get_set(cell: &Self::Cell, value: U, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.get_set(value, barrier)
            }

            fn compare_set(
                cell: &Self::Cell,
                expect: U,
                set: U,
                barrier: prism3_atomic_ops::Barrier,
            ) -> bool {
                cell.compare_set(expect, set, barrier)
            }

            fn get_compare_set(
                cell: &Self::Cell,
                expect: U,
                set: U,
                barrier: prism3_atomic_ops::Barrier,
            ) -> U {
                cell.get_compare_set(expect, set, barrier)
            }

            fn add(cell: &Self::Cell, delta: U, barrier: prism3_atomic_ops::Barrier) {
                cell.add(delta, barrier)
            }

            fn add_get(cell: &Self::Cell, delta: U, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.add_get(delta, barrier)
            }

            fn get_add(cell: &Self::Cell, delta: U, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.get_add(delta, barrier)
            }

            fn subtract(cell: &Self::Cell, delta: U, barrier: prism3_atomic_ops::Barrier) {
                cell.subtract(delta, barrier)
            }

            fn subtract_get(
                cell: &Self::Cell,
                delta: U,
                barrier: prism3_atomic_ops::Barrier,
            ) -> U {
                cell.subtract_get(delta, barrier)
            }

            fn get_subtract(
                cell: &Self::Cell,
                delta: U,
                barrier: prism3_atomic_ops::Barrier,
            ) -> U {
                cell.get_subtract(delta, barrier)
            }

            fn add1(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) {
                cell.add1(barrier)
            }

            fn add1_get(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.add1_get(barrier)
            }

            fn get_add1(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.get_add1(barrier)
            }

            fn subtract1(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) {
                cell.subtract1(barrier)
            }

            fn subtract1_get(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.subtract1_get(barrier)
            }

            fn get_subtract1(cell: &Self::Cell, barrier: prism3_atomic_ops::Barrier) -> U {
                cell.get_subtract1(barrier)
            }
        }
    };
}

recording_backend!(
    EveryPrimitive,
    prism3_atomic_ops::CapabilityTable::uniform(prism3_atomic_ops::Capabilities::all())
);
