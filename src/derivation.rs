/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Derivation Engine
//!
//! For every operation kind, a fixed priority list of rules. Each rule names
//! the one backend primitive it calls, how the caller's operand is passed to
//! it, and how the primitive's result is turned into the requested result.
//!
//! Priority inside a list is always: the native primitive, then siblings that
//! return a value the result can be read from, then algebraic siblings
//! (subtracting a negated delta instead of adding). A rule never calls more
//! than one primitive.
//!
//! Resolution walks the barrier levels that satisfy the request, weakest
//! first, and at each level takes the first rule whose primitive the backend
//! declares. Everything here is `const`, so the whole search is done by the
//! compiler.
//!
//! # Author
//!
//! Haixing Hu

use crate::barrier::Barrier;
use crate::capability::{CapabilityTable, OpKind, Shape};
use crate::resolution::Resolved;

/// How the requested operand is handed to the selected primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Passed unchanged.
    Same,
    /// Passed as its two's-complement negation.
    Negated,
}

/// How the primitive's result becomes the requested result.
///
/// "Delta" is the requested operand: the added or subtracted amount, `1` for
/// the unit kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixup {
    /// The primitive's result is the requested result.
    Forward,
    /// The primitive's result is dropped.
    Discard,
    /// Returned value plus the delta.
    PlusDelta,
    /// Returned value minus the delta.
    MinusDelta,
    /// `true` iff the returned value equals the expected value.
    MatchesExpected,
}

impl Fixup {
    /// Shape produced when applied to a primitive of shape `input`, or
    /// `None` if the fix-up cannot consume that shape.
    pub const fn output(self, input: Shape) -> Option<Shape> {
        match (self, input) {
            (Fixup::Forward, shape) => Some(shape),
            (Fixup::Discard, _) => Some(Shape::Nothing),
            (Fixup::PlusDelta | Fixup::MinusDelta, Shape::Value) => Some(Shape::Value),
            (Fixup::MatchesExpected, Shape::Value) => Some(Shape::Flag),
            _ => None,
        }
    }
}

/// One entry of a derivation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rule {
    /// The primitive this rule calls; the backend must declare it.
    pub requires: OpKind,
    /// Operand transformation.
    pub operand: Operand,
    /// Result transformation.
    pub fixup: Fixup,
}

impl Rule {
    const fn new(requires: OpKind, operand: Operand, fixup: Fixup) -> Self {
        Self {
            requires,
            operand,
            fixup,
        }
    }

    const fn native(kind: OpKind) -> Self {
        Self::new(kind, Operand::Same, Fixup::Forward)
    }
}

use self::Fixup::{Discard, Forward, MatchesExpected, MinusDelta, PlusDelta};
use self::Operand::{Negated, Same};
use crate::capability::OpKind as K;

const GET: &[Rule] = &[
    Rule::native(K::Get),
    Rule::new(K::GetAdd, Same, Forward),
    Rule::new(K::GetSubtract, Same, Forward),
    Rule::new(K::GetCompareSet, Same, Forward),
];

const SET: &[Rule] = &[
    Rule::native(K::Set),
    Rule::new(K::GetSet, Same, Discard),
];

const GET_SET: &[Rule] = &[Rule::native(K::GetSet)];

const COMPARE_SET: &[Rule] = &[
    Rule::native(K::CompareSet),
    Rule::new(K::GetCompareSet, Same, MatchesExpected),
];

const GET_COMPARE_SET: &[Rule] = &[Rule::native(K::GetCompareSet)];

const ADD: &[Rule] = &[
    Rule::native(K::Add),
    Rule::new(K::GetAdd, Same, Discard),
    Rule::new(K::AddGet, Same, Discard),
    Rule::new(K::Subtract, Negated, Forward),
    Rule::new(K::GetSubtract, Negated, Discard),
    Rule::new(K::SubtractGet, Negated, Discard),
];

const ADD_GET: &[Rule] = &[
    Rule::native(K::AddGet),
    Rule::new(K::GetAdd, Same, PlusDelta),
    Rule::new(K::SubtractGet, Negated, Forward),
    Rule::new(K::GetSubtract, Negated, PlusDelta),
];

const GET_ADD: &[Rule] = &[
    Rule::native(K::GetAdd),
    Rule::new(K::AddGet, Same, MinusDelta),
    Rule::new(K::GetSubtract, Negated, Forward),
    Rule::new(K::SubtractGet, Negated, MinusDelta),
];

const SUBTRACT: &[Rule] = &[
    Rule::native(K::Subtract),
    Rule::new(K::GetSubtract, Same, Discard),
    Rule::new(K::SubtractGet, Same, Discard),
    Rule::new(K::Add, Negated, Forward),
    Rule::new(K::GetAdd, Negated, Discard),
    Rule::new(K::AddGet, Negated, Discard),
];

const SUBTRACT_GET: &[Rule] = &[
    Rule::native(K::SubtractGet),
    Rule::new(K::GetSubtract, Same, MinusDelta),
    Rule::new(K::AddGet, Negated, Forward),
    Rule::new(K::GetAdd, Negated, MinusDelta),
];

const GET_SUBTRACT: &[Rule] = &[
    Rule::native(K::GetSubtract),
    Rule::new(K::SubtractGet, Same, PlusDelta),
    Rule::new(K::GetAdd, Negated, Forward),
    Rule::new(K::AddGet, Negated, PlusDelta),
];

// The unit kinds fall back on the general kind of the same direction with a
// delta of one. They never borrow from the opposite direction. The
// fetch-first unit kinds try the general fetch sibling before their own
// family, since it already returns the previous value.

const ADD1: &[Rule] = &[
    Rule::native(K::Add1),
    Rule::new(K::GetAdd1, Same, Discard),
    Rule::new(K::Add1Get, Same, Discard),
    Rule::new(K::Add, Same, Forward),
    Rule::new(K::GetAdd, Same, Discard),
    Rule::new(K::AddGet, Same, Discard),
];

const ADD1_GET: &[Rule] = &[
    Rule::native(K::Add1Get),
    Rule::new(K::GetAdd1, Same, PlusDelta),
    Rule::new(K::AddGet, Same, Forward),
    Rule::new(K::GetAdd, Same, PlusDelta),
];

const GET_ADD1: &[Rule] = &[
    Rule::native(K::GetAdd1),
    Rule::new(K::GetAdd, Same, Forward),
    Rule::new(K::Add1Get, Same, MinusDelta),
    Rule::new(K::AddGet, Same, MinusDelta),
];

const SUBTRACT1: &[Rule] = &[
    Rule::native(K::Subtract1),
    Rule::new(K::GetSubtract1, Same, Discard),
    Rule::new(K::Subtract1Get, Same, Discard),
    Rule::new(K::Subtract, Same, Forward),
    Rule::new(K::GetSubtract, Same, Discard),
    Rule::new(K::SubtractGet, Same, Discard),
];

const SUBTRACT1_GET: &[Rule] = &[
    Rule::native(K::Subtract1Get),
    Rule::new(K::GetSubtract1, Same, MinusDelta),
    Rule::new(K::SubtractGet, Same, Forward),
    Rule::new(K::GetSubtract, Same, MinusDelta),
];

const GET_SUBTRACT1: &[Rule] = &[
    Rule::native(K::GetSubtract1),
    Rule::new(K::GetSubtract, Same, Forward),
    Rule::new(K::Subtract1Get, Same, PlusDelta),
    Rule::new(K::SubtractGet, Same, PlusDelta),
];

/// Returns the priority-ordered rule list for `kind`. The first entry is
/// always the native rule.
pub const fn rules(kind: OpKind) -> &'static [Rule] {
    match kind {
        K::Get => GET,
        K::Set => SET,
        K::GetSet => GET_SET,
        K::CompareSet => COMPARE_SET,
        K::GetCompareSet => GET_COMPARE_SET,
        K::Add => ADD,
        K::AddGet => ADD_GET,
        K::GetAdd => GET_ADD,
        K::Subtract => SUBTRACT,
        K::SubtractGet => SUBTRACT_GET,
        K::GetSubtract => GET_SUBTRACT,
        K::Add1 => ADD1,
        K::Add1Get => ADD1_GET,
        K::GetAdd1 => GET_ADD1,
        K::Subtract1 => SUBTRACT1,
        K::Subtract1Get => SUBTRACT1_GET,
        K::GetSubtract1 => GET_SUBTRACT1,
    }
}

/// Resolves `kind` requested at `want` against a capability table.
///
/// Levels are tried weakest first among those that satisfy `want`; inside a
/// level, rules are tried in priority order. Returns `None` when nothing
/// applies.
pub const fn resolve(kind: OpKind, table: &CapabilityTable, want: Barrier) -> Option<Resolved> {
    let list = rules(kind);
    let mut level = 0;
    while level < Barrier::ALL.len() {
        let barrier = Barrier::ALL[level];
        if barrier.satisfies(want) {
            let caps = table.at(barrier);
            let mut position = 0;
            while position < list.len() {
                let rule = list[position];
                if caps.has(rule.requires) {
                    return Some(Resolved {
                        kind,
                        rule,
                        position,
                        barrier,
                        emulated: false,
                    });
                }
                position += 1;
            }
        }
        level += 1;
    }
    None
}

/// Checks one table for internal consistency.
const fn table_is_consistent(kind: OpKind) -> bool {
    let list = rules(kind);
    if list.is_empty() {
        return false;
    }
    let native = list[0];
    if native.requires as u8 != kind as u8
        || !matches!(native.operand, Operand::Same)
        || !matches!(native.fixup, Fixup::Forward)
    {
        return false;
    }
    let mut position = 0;
    while position < list.len() {
        let rule = list[position];
        match rule.fixup.output(rule.requires.shape()) {
            Some(shape) if shape as u8 == kind.shape() as u8 => {}
            _ => return false,
        }
        if matches!(rule.operand, Operand::Negated)
            && !(kind.is_arithmetic() && kind.takes_operand() && rule.requires.takes_operand())
        {
            return false;
        }
        if position > 0 && rule.requires as u8 == kind as u8 {
            return false;
        }
        position += 1;
    }
    true
}

/// Returns `true` if every derivation table is well formed: native rule
/// first, no rule repeating the native primitive, every fix-up compatible
/// with the primitive's result and producing the requested result, and
/// negation only between operand-taking arithmetic kinds.
pub const fn tables_are_consistent() -> bool {
    let mut index = 0;
    while index < OpKind::ALL.len() {
        if !table_is_consistent(OpKind::ALL[index]) {
            return false;
        }
        index += 1;
    }
    true
}

const _: () = assert!(tables_are_consistent(), "malformed derivation table");
