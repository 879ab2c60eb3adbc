/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Capability Model
//!
//! The seventeen primitive operation kinds, the bitset a backend uses to
//! declare which of them it implements natively, and the per-barrier table
//! that holds one such bitset for every ordering level.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::barrier::Barrier;

/// One of the seventeen atomic primitive kinds.
///
/// The `Get*` prefix means "returns the value before the update", the
/// `*Get` suffix means "returns the value after the update".
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// Load.
    Get,
    /// Store.
    Set,
    /// Store, returning the previous value.
    GetSet,
    /// Compare-and-swap, returning whether the swap happened.
    CompareSet,
    /// Compare-and-swap, returning the previous value.
    GetCompareSet,
    /// Add a delta.
    Add,
    /// Add a delta, returning the new value.
    AddGet,
    /// Add a delta, returning the previous value.
    GetAdd,
    /// Subtract a delta.
    Subtract,
    /// Subtract a delta, returning the new value.
    SubtractGet,
    /// Subtract a delta, returning the previous value.
    GetSubtract,
    /// Increment.
    Add1,
    /// Increment, returning the new value.
    Add1Get,
    /// Increment, returning the previous value.
    GetAdd1,
    /// Decrement.
    Subtract1,
    /// Decrement, returning the new value.
    Subtract1Get,
    /// Decrement, returning the previous value.
    GetSubtract1,
}

/// What a primitive hands back to its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Nothing.
    Nothing,
    /// A raw value (previous or new, depending on the kind).
    Value,
    /// A success flag.
    Flag,
}

impl OpKind {
    /// Every kind, in declaration order.
    pub const ALL: [OpKind; 17] = [
        OpKind::Get,
        OpKind::Set,
        OpKind::GetSet,
        OpKind::CompareSet,
        OpKind::GetCompareSet,
        OpKind::Add,
        OpKind::AddGet,
        OpKind::GetAdd,
        OpKind::Subtract,
        OpKind::SubtractGet,
        OpKind::GetSubtract,
        OpKind::Add1,
        OpKind::Add1Get,
        OpKind::GetAdd1,
        OpKind::Subtract1,
        OpKind::Subtract1Get,
        OpKind::GetSubtract1,
    ];

    /// Returns the capability bit for this kind.
    #[inline]
    pub const fn as_set(self) -> Capabilities {
        Capabilities::from_bits_retain(1 << self as u32)
    }

    /// Returns what the primitive hands back.
    pub const fn shape(self) -> Shape {
        match self {
            OpKind::Set
            | OpKind::Add
            | OpKind::Subtract
            | OpKind::Add1
            | OpKind::Subtract1 => Shape::Nothing,
            OpKind::CompareSet => Shape::Flag,
            _ => Shape::Value,
        }
    }

    /// Returns `true` if the primitive consumes an operand (a value to store
    /// or a delta). The unit kinds and `Get` take none.
    pub const fn takes_operand(self) -> bool {
        !matches!(
            self,
            OpKind::Get
                | OpKind::Add1
                | OpKind::Add1Get
                | OpKind::GetAdd1
                | OpKind::Subtract1
                | OpKind::Subtract1Get
                | OpKind::GetSubtract1
        )
    }

    /// Returns `true` for the add/subtract families, including the unit
    /// kinds.
    pub const fn is_arithmetic(self) -> bool {
        (self as u8) >= (OpKind::Add as u8)
    }

    /// Name of the dispatch method for this kind.
    pub const fn name(self) -> &'static str {
        match self {
            OpKind::Get => "get",
            OpKind::Set => "set",
            OpKind::GetSet => "get_set",
            OpKind::CompareSet => "compare_set",
            OpKind::GetCompareSet => "get_compare_set",
            OpKind::Add => "add",
            OpKind::AddGet => "add_get",
            OpKind::GetAdd => "get_add",
            OpKind::Subtract => "subtract",
            OpKind::SubtractGet => "subtract_get",
            OpKind::GetSubtract => "get_subtract",
            OpKind::Add1 => "add1",
            OpKind::Add1Get => "add1_get",
            OpKind::GetAdd1 => "get_add1",
            OpKind::Subtract1 => "subtract1",
            OpKind::Subtract1Get => "subtract1_get",
            OpKind::GetSubtract1 => "get_subtract1",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags::bitflags! {
    /// A set of natively implemented primitive kinds.
    ///
    /// Bit `n` corresponds to the `n`-th variant of [`OpKind`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u32 {
        /// [`OpKind::Get`].
        const GET = 1 << 0;
        /// [`OpKind::Set`].
        const SET = 1 << 1;
        /// [`OpKind::GetSet`].
        const GET_SET = 1 << 2;
        /// [`OpKind::CompareSet`].
        const COMPARE_SET = 1 << 3;
        /// [`OpKind::GetCompareSet`].
        const GET_COMPARE_SET = 1 << 4;
        /// [`OpKind::Add`].
        const ADD = 1 << 5;
        /// [`OpKind::AddGet`].
        const ADD_GET = 1 << 6;
        /// [`OpKind::GetAdd`].
        const GET_ADD = 1 << 7;
        /// [`OpKind::Subtract`].
        const SUBTRACT = 1 << 8;
        /// [`OpKind::SubtractGet`].
        const SUBTRACT_GET = 1 << 9;
        /// [`OpKind::GetSubtract`].
        const GET_SUBTRACT = 1 << 10;
        /// [`OpKind::Add1`].
        const ADD1 = 1 << 11;
        /// [`OpKind::Add1Get`].
        const ADD1_GET = 1 << 12;
        /// [`OpKind::GetAdd1`].
        const GET_ADD1 = 1 << 13;
        /// [`OpKind::Subtract1`].
        const SUBTRACT1 = 1 << 14;
        /// [`OpKind::Subtract1Get`].
        const SUBTRACT1_GET = 1 << 15;
        /// [`OpKind::GetSubtract1`].
        const GET_SUBTRACT1 = 1 << 16;
    }
}

impl Capabilities {
    /// Returns `true` if `kind` is in the set.
    #[inline]
    pub const fn has(self, kind: OpKind) -> bool {
        self.contains(kind.as_set())
    }

    /// Iterates the kinds in the set, in [`OpKind::ALL`] order.
    pub fn kinds(self) -> impl Iterator<Item = OpKind> {
        OpKind::ALL.into_iter().filter(move |kind| self.has(*kind))
    }
}

impl From<OpKind> for Capabilities {
    fn from(kind: OpKind) -> Self {
        kind.as_set()
    }
}

impl FromIterator<OpKind> for Capabilities {
    fn from_iter<I: IntoIterator<Item = OpKind>>(iter: I) -> Self {
        let mut set = Capabilities::empty();
        for kind in iter {
            set = set.union(kind.as_set());
        }
        set
    }
}

/// A backend's capability declaration: one [`Capabilities`] set per
/// [`Barrier`] level.
///
/// A bit set at level `L` promises that the primitive, called with `L`,
/// orders memory at least as strongly as `L`. Nothing checks that promise.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::{Barrier, Capabilities, CapabilityTable};
///
/// const TABLE: CapabilityTable = CapabilityTable::new()
///     .with(Barrier::Acquire, Capabilities::GET)
///     .with(Barrier::Full, Capabilities::GET.union(Capabilities::SET));
///
/// assert!(TABLE.at(Barrier::Acquire).contains(Capabilities::GET));
/// assert!(TABLE.at(Barrier::Release).is_empty());
/// ```
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CapabilityTable {
    levels: [Capabilities; 4],
}

impl CapabilityTable {
    /// A table with no capabilities at any level.
    #[inline]
    pub const fn new() -> Self {
        Self {
            levels: [Capabilities::empty(); 4],
        }
    }

    /// A table declaring the same set at every level.
    #[inline]
    pub const fn uniform(caps: Capabilities) -> Self {
        Self { levels: [caps; 4] }
    }

    /// Adds `caps` to the set declared at `barrier`.
    #[inline]
    pub const fn with(mut self, barrier: Barrier, caps: Capabilities) -> Self {
        let index = barrier.index();
        self.levels[index] = self.levels[index].union(caps);
        self
    }

    /// Returns the set declared at `barrier`.
    #[inline]
    pub const fn at(&self, barrier: Barrier) -> Capabilities {
        self.levels[barrier.index()]
    }
}
