/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Value
//!
//! The generic atomic cell callers use. Every operation is resolved against
//! the backend's capability declaration while the call site is compiled.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::marker::PhantomData;

use crate::backend::{Backend, DefaultBackend};
use crate::barrier::{Full, Order};
use crate::capability::OpKind;
use crate::raw::Raw;
use crate::representation::{Integral, Representable};
use crate::resolution::{require, require_weakest};

/// An atomic location holding a `T`, operated on through backend `B`.
///
/// Each operation comes in two forms: `add(delta)` requests a full barrier,
/// `add_with::<O>(delta)` requests the barrier `O`. The request is a lower
/// bound; when the backend only supports a stronger level, the stronger one
/// is used. When the backend cannot provide the operation at `O` or any
/// stronger level, the call does not compile.
///
/// Whatever rule is selected, one call performs exactly one backend
/// primitive on the location.
///
/// # Memory Ordering Strategy
///
/// - **Un-suffixed methods** (`get`, `set`, `add`, ...): request
///   [`Full`], the strongest level, matching the default of the
///   underlying engine.
/// - **`_with::<O>` methods**: request `O`. Use
///   [`Atomic::get_barrier`]-style queries to learn which level a given
///   backend really runs an operation at.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::{Acquire, Atomic, NativeBackend};
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(Atomic::<i32, NativeBackend>::new(0));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     handles.push(thread::spawn(move || {
///         for _ in 0..100 {
///             counter.add1();
///         }
///     }));
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.get_with::<Acquire>(), 1000);
/// ```
///
/// A combination the backend cannot provide is rejected at build time. A
/// backend that declares nothing but a load has no primitive a store could
/// be derived from:
///
/// ```compile_fail
/// use prism3_atomic_ops::{Atomic, Backend, Barrier, Capabilities, CapabilityTable};
/// use std::cell::Cell;
///
/// struct LoadOnly;
///
/// unsafe impl Backend<u32> for LoadOnly {
///     type Cell = Cell<u32>;
///     const CAPABILITIES: CapabilityTable =
///         CapabilityTable::new().with(Barrier::Full, Capabilities::GET);
///     fn cell(value: u32) -> Cell<u32> { Cell::new(value) }
///     fn into_inner(cell: Cell<u32>) -> u32 { cell.into_inner() }
///     fn get(cell: &Cell<u32>, _: Barrier) -> u32 { cell.get() }
/// }
///
/// let atomic: Atomic<u32, LoadOnly> = Atomic::new(1);
/// atomic.set(2);
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct Atomic<T: Representable, B: Backend<T::Raw> = DefaultBackend> {
    cell: B::Cell,
    _value: PhantomData<fn() -> T>,
}

impl<T: Representable, B: Backend<T::Raw>> Atomic<T, B> {
    /// Creates a new atomic holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            cell: B::cell(value.into_raw()),
            _value: PhantomData,
        }
    }

    /// Consumes the atomic and returns its value.
    #[inline]
    pub fn into_inner(self) -> T {
        T::from_raw(B::into_inner(self.cell))
    }

    /// Gets a reference to the backend storage, for callers that need to
    /// hand the location to the backend directly.
    #[inline]
    pub fn inner(&self) -> &B::Cell {
        &self.cell
    }

    /// Loads the current value with a full barrier.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn get(&self) -> T {
        self.get_with::<Full>()
    }

    /// Loads the current value.
    ///
    /// On a backend without a native load this is derived from a
    /// value-returning read-modify-write that leaves the value unchanged
    /// (adding zero, or swapping zero for zero).
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn get_with<O: Order>(&self) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Get) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ZERO, <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Stores `value` with a full barrier.
    #[inline]
    pub fn set(&self, value: T) {
        self.set_with::<Full>(value);
    }

    /// Stores `value`.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    #[inline]
    pub fn set_with<O: Order>(&self, value: T) {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Set) };
        resolved.apply::<B, T::Raw>(&self.cell, value.into_raw(), <T::Raw as Raw>::ZERO);
    }

    /// Stores `value` with a full barrier, returning the previous value.
    #[inline]
    pub fn get_set(&self, value: T) -> T {
        self.get_set_with::<Full>(value)
    }

    /// Stores `value`, returning the previous value.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value.
    ///
    /// # Returns
    ///
    /// The value before the store.
    #[inline]
    pub fn get_set_with<O: Order>(&self, value: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetSet) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, value.into_raw(), <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Compare-and-swap with a full barrier.
    #[inline]
    pub fn compare_set(&self, expect: T, set: T) -> bool {
        self.compare_set_with::<Full>(expect, set)
    }

    /// Stores `set` if the current value is bit-for-bit equal to `expect`.
    ///
    /// Comparison is on the raw representation, so for floats `-0.0` and
    /// `0.0` differ and a NaN matches an identical NaN.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Parameters
    ///
    /// * `expect` - The value the location must hold.
    /// * `set` - The value to store.
    ///
    /// # Returns
    ///
    /// `true` if the value was replaced. `false` is a normal outcome, not
    /// an error.
    #[inline]
    pub fn compare_set_with<O: Order>(&self, expect: T, set: T) -> bool {
        let resolved = const { require::<B, T::Raw, O>(OpKind::CompareSet) };
        resolved
            .apply::<B, T::Raw>(&self.cell, set.into_raw(), expect.into_raw())
            .expect_flag()
    }

    /// Compare-and-swap with a full barrier, returning the previous value.
    #[inline]
    pub fn get_compare_set(&self, expect: T, set: T) -> T {
        self.get_compare_set_with::<Full>(expect, set)
    }

    /// Stores `set` if the current value equals `expect`.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Returns
    ///
    /// The value before the operation; the swap happened iff it equals
    /// `expect`.
    #[inline]
    pub fn get_compare_set_with<O: Order>(&self, expect: T, set: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetCompareSet) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, set.into_raw(), expect.into_raw())
            .expect_value();
        T::from_raw(raw)
    }
}

impl<T: Integral, B: Backend<T::Raw>> Atomic<T, B> {
    /// Adds `delta` with a full barrier.
    #[inline]
    pub fn add(&self, delta: T) {
        self.add_with::<Full>(delta);
    }

    /// Adds `delta`, wrapping on overflow.
    ///
    /// Falls back, in order, on `get_add`, `add_get`, and subtracting the
    /// negated delta through the subtract family.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    #[inline]
    pub fn add_with<O: Order>(&self, delta: T) {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Add) };
        resolved.apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO);
    }

    /// Adds `delta` with a full barrier, returning the new value.
    #[inline]
    pub fn add_get(&self, delta: T) -> T {
        self.add_get_with::<Full>(delta)
    }

    /// Adds `delta`, returning the new value.
    ///
    /// When derived from `get_add`, the new value is computed as the
    /// returned previous value plus `delta`, with the same wrapping the
    /// location itself performed.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The value after the addition.
    #[inline]
    pub fn add_get_with<O: Order>(&self, delta: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::AddGet) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Adds `delta` with a full barrier, returning the previous value.
    #[inline]
    pub fn get_add(&self, delta: T) -> T {
        self.get_add_with::<Full>(delta)
    }

    /// Adds `delta`, returning the previous value.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Returns
    ///
    /// The value before the addition.
    #[inline]
    pub fn get_add_with<O: Order>(&self, delta: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetAdd) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Subtracts `delta` with a full barrier.
    #[inline]
    pub fn subtract(&self, delta: T) {
        self.subtract_with::<Full>(delta);
    }

    /// Subtracts `delta`, wrapping on overflow.
    #[inline]
    pub fn subtract_with<O: Order>(&self, delta: T) {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Subtract) };
        resolved.apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO);
    }

    /// Subtracts `delta` with a full barrier, returning the new value.
    #[inline]
    pub fn subtract_get(&self, delta: T) -> T {
        self.subtract_get_with::<Full>(delta)
    }

    /// Subtracts `delta`, returning the new value.
    #[inline]
    pub fn subtract_get_with<O: Order>(&self, delta: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::SubtractGet) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Subtracts `delta` with a full barrier, returning the previous value.
    #[inline]
    pub fn get_subtract(&self, delta: T) -> T {
        self.get_subtract_with::<Full>(delta)
    }

    /// Subtracts `delta`, returning the previous value.
    #[inline]
    pub fn get_subtract_with<O: Order>(&self, delta: T) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetSubtract) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, delta.into_raw(), <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Increments with a full barrier.
    #[inline]
    pub fn add1(&self) {
        self.add1_with::<Full>();
    }

    /// Increments by one, wrapping on overflow.
    ///
    /// Falls back on the other increment primitives, then on the add family
    /// with a delta of one. It never falls back on decrementing by minus
    /// one.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    #[inline]
    pub fn add1_with<O: Order>(&self) {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Add1) };
        resolved.apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO);
    }

    /// Increments with a full barrier, returning the new value.
    #[inline]
    pub fn add1_get(&self) -> T {
        self.add1_get_with::<Full>()
    }

    /// Increments, returning the new value.
    #[inline]
    pub fn add1_get_with<O: Order>(&self) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Add1Get) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Increments with a full barrier, returning the previous value.
    #[inline]
    pub fn get_add1(&self) -> T {
        self.get_add1_with::<Full>()
    }

    /// Increments, returning the previous value.
    ///
    /// # Type Parameters
    ///
    /// * `O` - The requested barrier.
    ///
    /// # Returns
    ///
    /// The value before the increment.
    #[inline]
    pub fn get_add1_with<O: Order>(&self) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetAdd1) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Decrements with a full barrier.
    #[inline]
    pub fn subtract1(&self) {
        self.subtract1_with::<Full>();
    }

    /// Decrements by one, wrapping on underflow.
    #[inline]
    pub fn subtract1_with<O: Order>(&self) {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Subtract1) };
        resolved.apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO);
    }

    /// Decrements with a full barrier, returning the new value.
    #[inline]
    pub fn subtract1_get(&self) -> T {
        self.subtract1_get_with::<Full>()
    }

    /// Decrements, returning the new value.
    ///
    /// When derived from `get_subtract1`, the result is the returned
    /// previous value minus one.
    #[inline]
    pub fn subtract1_get_with<O: Order>(&self) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::Subtract1Get) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }

    /// Decrements with a full barrier, returning the previous value.
    #[inline]
    pub fn get_subtract1(&self) -> T {
        self.get_subtract1_with::<Full>()
    }

    /// Decrements, returning the previous value.
    #[inline]
    pub fn get_subtract1_with<O: Order>(&self) -> T {
        let resolved = const { require::<B, T::Raw, O>(OpKind::GetSubtract1) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ONE, <T::Raw as Raw>::ZERO)
            .expect_value();
        T::from_raw(raw)
    }
}

impl<T, B> Default for Atomic<T, B>
where
    T: Representable + Default,
    B: Backend<T::Raw>,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Representable, B: Backend<T::Raw>> From<T> for Atomic<T, B> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T, B> fmt::Debug for Atomic<T, B>
where
    T: Representable + fmt::Debug,
    B: Backend<T::Raw>,
{
    // Reads at the weakest level the backend can provide a load at.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolved = const { require_weakest::<B, T::Raw>(OpKind::Get) };
        let raw = resolved
            .apply::<B, T::Raw>(&self.cell, <T::Raw as Raw>::ZERO, <T::Raw as Raw>::ZERO)
            .expect_value();
        f.debug_struct("Atomic")
            .field("value", &T::from_raw(raw))
            .finish()
    }
}
