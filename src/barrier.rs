/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Barrier Lattice
//!
//! Defines the four memory-ordering strengths an atomic operation can be
//! requested at, and the "satisfies" relation the resolver uses to search
//! for a usable level.
//!
//! The relation is intentionally narrow: a level satisfies a request only if
//! it is the requested level itself or `Full`. `Acquire` and `Release` do not
//! satisfy each other, and nothing weaker than the request ever satisfies it.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

/// Memory-ordering strength of an atomic operation.
///
/// `Relaxed` is the "no barrier" level: the operation is atomic but orders
/// nothing around it.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Barrier {
    /// No ordering beyond atomicity of the access itself.
    Relaxed = 0,
    /// Later accesses cannot be reordered before this one.
    Acquire = 1,
    /// Earlier accesses cannot be reordered after this one.
    Release = 2,
    /// Both acquire and release, sequentially consistent.
    Full = 3,
}

impl Barrier {
    /// All levels, weakest first. Resolution walks this list upward.
    pub const ALL: [Barrier; 4] = [
        Barrier::Relaxed,
        Barrier::Acquire,
        Barrier::Release,
        Barrier::Full,
    ];

    /// Returns `true` if an operation performed at `self` fulfils a request
    /// for `want`.
    ///
    /// # Parameters
    ///
    /// * `want` - The requested level.
    ///
    /// # Returns
    ///
    /// `true` iff `self` is `Full` or equal to `want`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_ops::Barrier;
    ///
    /// assert!(Barrier::Full.satisfies(Barrier::Acquire));
    /// assert!(!Barrier::Acquire.satisfies(Barrier::Release));
    /// assert!(!Barrier::Acquire.satisfies(Barrier::Full));
    /// ```
    #[inline]
    pub const fn satisfies(self, want: Barrier) -> bool {
        matches!(self, Barrier::Full) || self as u8 == want as u8
    }

    /// Position of this level inside a per-barrier table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lower-case name, as used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Barrier::Relaxed => "relaxed",
            Barrier::Acquire => "acquire",
            Barrier::Release => "release",
            Barrier::Full => "full",
        }
    }
}

impl Default for Barrier {
    /// Requests default to the strongest level.
    #[inline]
    fn default() -> Self {
        Barrier::Full
    }
}

impl fmt::Display for Barrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level name of a requested barrier.
///
/// Dispatch methods take the requested ordering as a type parameter so that
/// resolution happens while the call site is compiled. The four marker types
/// [`Relaxed`], [`Acquire`], [`Release`] and [`Full`] are the only
/// implementors.
///
/// # Author
///
/// Haixing Hu
pub trait Order: sealed::Sealed {
    /// The runtime value of this level.
    const BARRIER: Barrier;
}

macro_rules! impl_order {
    ($($name:ident => $barrier:ident, $doc:expr;)*) => {
        $(
            #[doc = $doc]
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $name;

            impl sealed::Sealed for $name {}

            impl Order for $name {
                const BARRIER: Barrier = Barrier::$barrier;
            }
        )*
    };
}

impl_order! {
    Relaxed => Relaxed, "Requests [`Barrier::Relaxed`].";
    Acquire => Acquire, "Requests [`Barrier::Acquire`].";
    Release => Release, "Requests [`Barrier::Release`].";
    Full => Full, "Requests [`Barrier::Full`].";
}
