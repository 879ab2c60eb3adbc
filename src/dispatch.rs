/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Dispatch Executor
//!
//! Runs a resolved operation: transforms the operand, makes the single
//! backend call the selected rule names, and applies the rule's fix-up to
//! the result. No locks, no retries, no allocation.
//!
//! # Author
//!
//! Haixing Hu

use crate::backend::Backend;
use crate::barrier::Barrier;
use crate::capability::OpKind;
use crate::derivation::{Fixup, Operand};
use crate::raw::Raw;
use crate::resolution::Resolved;

/// Result of one primitive call, or of a resolved operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<U> {
    /// The operation returns nothing.
    Done,
    /// A raw value: the previous or the new one, depending on the kind.
    Value(U),
    /// A success flag.
    Flag(bool),
}

impl<U> Outcome<U> {
    /// The carried value, if any.
    #[inline]
    pub fn value(self) -> Option<U> {
        match self {
            Outcome::Value(value) => Some(value),
            _ => None,
        }
    }

    /// The carried flag, if any.
    #[inline]
    pub fn flag(self) -> Option<bool> {
        match self {
            Outcome::Flag(flag) => Some(flag),
            _ => None,
        }
    }

    // Derivation tables are checked at compile time, so the shape of a
    // resolved outcome always matches the shape of its kind.
    #[inline(always)]
    pub(crate) fn expect_value(self) -> U {
        match self {
            Outcome::Value(value) => value,
            _ => unreachable!("resolved operation did not produce a value"),
        }
    }

    #[inline(always)]
    pub(crate) fn expect_flag(self) -> bool {
        match self {
            Outcome::Flag(flag) => flag,
            _ => unreachable!("resolved operation did not produce a flag"),
        }
    }
}

impl Resolved {
    /// Executes this resolution on `cell`.
    ///
    /// `value` is the requested operand: the value to store, the delta, or
    /// the replacement of a compare-and-swap; `1` for the unit kinds and `0`
    /// for `get`. `expect` is the comparand of a compare-and-swap and is
    /// ignored otherwise.
    ///
    /// Exactly one backend primitive is called, at [`Self::barrier`].
    ///
    /// The backend `B` must be the one this resolution was computed for.
    /// With any other backend the selected primitive may not be declared, in
    /// which case the backend's default body panics.
    #[inline(always)]
    pub fn apply<B: Backend<U>, U: Raw>(&self, cell: &B::Cell, value: U, expect: U) -> Outcome<U> {
        let operand = match self.rule.operand {
            Operand::Same => value,
            Operand::Negated => value.wrapping_neg(),
        };
        let returned = invoke::<B, U>(cell, self.rule.requires, self.barrier, operand, expect);
        fix_up(self.rule.fixup, returned, value, expect)
    }
}

#[inline(always)]
fn invoke<B: Backend<U>, U: Raw>(
    cell: &B::Cell,
    primitive: OpKind,
    barrier: Barrier,
    operand: U,
    expect: U,
) -> Outcome<U> {
    match primitive {
        OpKind::Get => Outcome::Value(B::get(cell, barrier)),
        OpKind::Set => {
            B::set(cell, operand, barrier);
            Outcome::Done
        }
        OpKind::GetSet => Outcome::Value(B::get_set(cell, operand, barrier)),
        OpKind::CompareSet => Outcome::Flag(B::compare_set(cell, expect, operand, barrier)),
        OpKind::GetCompareSet => {
            Outcome::Value(B::get_compare_set(cell, expect, operand, barrier))
        }
        OpKind::Add => {
            B::add(cell, operand, barrier);
            Outcome::Done
        }
        OpKind::AddGet => Outcome::Value(B::add_get(cell, operand, barrier)),
        OpKind::GetAdd => Outcome::Value(B::get_add(cell, operand, barrier)),
        OpKind::Subtract => {
            B::subtract(cell, operand, barrier);
            Outcome::Done
        }
        OpKind::SubtractGet => Outcome::Value(B::subtract_get(cell, operand, barrier)),
        OpKind::GetSubtract => Outcome::Value(B::get_subtract(cell, operand, barrier)),
        OpKind::Add1 => {
            B::add1(cell, barrier);
            Outcome::Done
        }
        OpKind::Add1Get => Outcome::Value(B::add1_get(cell, barrier)),
        OpKind::GetAdd1 => Outcome::Value(B::get_add1(cell, barrier)),
        OpKind::Subtract1 => {
            B::subtract1(cell, barrier);
            Outcome::Done
        }
        OpKind::Subtract1Get => Outcome::Value(B::subtract1_get(cell, barrier)),
        OpKind::GetSubtract1 => Outcome::Value(B::get_subtract1(cell, barrier)),
    }
}

#[inline(always)]
fn fix_up<U: Raw>(fixup: Fixup, returned: Outcome<U>, delta: U, expect: U) -> Outcome<U> {
    match (fixup, returned) {
        (Fixup::Forward, outcome) => outcome,
        (Fixup::Discard, _) => Outcome::Done,
        (Fixup::PlusDelta, Outcome::Value(value)) => Outcome::Value(value.wrapping_add(delta)),
        (Fixup::MinusDelta, Outcome::Value(value)) => Outcome::Value(value.wrapping_sub(delta)),
        (Fixup::MatchesExpected, Outcome::Value(value)) => Outcome::Flag(value == expect),
        (fixup, outcome) => unreachable!("fix-up {fixup:?} cannot consume {outcome:?}"),
    }
}
