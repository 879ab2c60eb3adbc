/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Resolution Queries
//!
//! The outcome of resolving one operation kind for one backend, raw type and
//! requested barrier, and the three build-time questions callers ask about
//! it: does it exist, is it the native primitive, and which barrier does it
//! actually run at.
//!
//! The typed dispatch surface never resolves at run time. The runtime entry
//! points here ([`try_resolve`], [`Report`]) exist for diagnostics and tests.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use crate::backend::Backend;
use crate::barrier::{Barrier, Order};
use crate::capability::{CapabilityTable, OpKind};
use crate::derivation::{self, Fixup, Operand, Rule};
use crate::error::ResolveError;
use crate::raw::Raw;

/// A successfully resolved operation: which rule was selected and at which
/// barrier its primitive is called.
///
/// Values of this type only come out of the resolver, so holding one proves
/// that the backend declared the primitive the rule calls.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolved {
    pub(crate) kind: OpKind,
    pub(crate) rule: Rule,
    pub(crate) position: usize,
    pub(crate) barrier: Barrier,
    pub(crate) emulated: bool,
}

impl Resolved {
    /// The requested operation kind.
    #[inline]
    pub const fn kind(&self) -> OpKind {
        self.kind
    }

    /// The selected rule.
    #[inline]
    pub const fn rule(&self) -> Rule {
        self.rule
    }

    /// Position of the selected rule in the kind's priority list.
    #[inline]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The barrier whose capabilities satisfied the rule; the primitive is
    /// called with this level. Never weaker than the request.
    #[inline]
    pub const fn barrier(&self) -> Barrier {
        self.barrier
    }

    /// Returns `true` if the native primitive was selected, i.e. the
    /// operation is the backend's own implementation of exactly this kind
    /// rather than one synthesized from a sibling.
    #[inline]
    pub const fn is_native(&self) -> bool {
        self.position == 0
    }

    /// Returns `true` if the backend emulates its primitives with ordinary
    /// loads and stores. See [`Backend::EMULATED`].
    #[inline]
    pub const fn is_emulated(&self) -> bool {
        self.emulated
    }

    /// Returns `true` if the operation is a single genuinely atomic
    /// primitive: native, and not emulated by the backend.
    #[inline]
    pub const fn is_real(&self) -> bool {
        self.is_native() && !self.emulated
    }

    #[inline]
    pub(crate) const fn with_emulation(mut self, emulated: bool) -> Self {
        self.emulated = emulated;
        self
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_native() {
            let note = if self.emulated { "native, emulated" } else { "native" };
            return write!(f, "{} ({}) at {}", self.kind, note, self.barrier);
        }
        write!(f, "{} via {}", self.kind, self.rule.requires)?;
        match self.rule.operand {
            Operand::Same => {}
            Operand::Negated => f.write_str(" (negated)")?,
        }
        match self.rule.fixup {
            Fixup::Forward => {}
            Fixup::Discard => f.write_str(", discard")?,
            Fixup::PlusDelta => f.write_str(", +delta")?,
            Fixup::MinusDelta => f.write_str(", -delta")?,
            Fixup::MatchesExpected => f.write_str(", == expected")?,
        }
        write!(f, " at {}", self.barrier)?;
        if self.emulated {
            f.write_str(" (emulated)")?;
        }
        Ok(())
    }
}

/// Resolves `kind` for backend `B` on raw type `U`, requested at `O`.
#[inline]
pub const fn resolve<B: Backend<U>, U: Raw, O: Order>(kind: OpKind) -> Option<Resolved> {
    match derivation::resolve(kind, &B::CAPABILITIES, O::BARRIER) {
        Some(resolved) => Some(resolved.with_emulation(B::EMULATED)),
        None => None,
    }
}

/// Returns `true` if some rule can produce `kind` at `O` or stronger.
#[inline]
pub const fn exists<B: Backend<U>, U: Raw, O: Order>(kind: OpKind) -> bool {
    resolve::<B, U, O>(kind).is_some()
}

/// Returns `true` if `kind` resolves to the backend's native primitive and
/// the backend is not an emulation. `false` when it does not resolve at all.
#[inline]
pub const fn is_real<B: Backend<U>, U: Raw, O: Order>(kind: OpKind) -> bool {
    match resolve::<B, U, O>(kind) {
        Some(resolved) => resolved.is_real(),
        None => false,
    }
}

/// Returns the barrier `kind` actually runs at when requested at `O`, or
/// `None` when it does not resolve.
#[inline]
pub const fn barrier<B: Backend<U>, U: Raw, O: Order>(kind: OpKind) -> Option<Barrier> {
    match resolve::<B, U, O>(kind) {
        Some(resolved) => Some(resolved.barrier),
        None => None,
    }
}

/// Resolution for a call site. Must only be evaluated inside a `const`
/// block: an unsatisfiable combination then fails the build.
#[doc(hidden)]
pub const fn require<B: Backend<U>, U: Raw, O: Order>(kind: OpKind) -> Resolved {
    match resolve::<B, U, O>(kind) {
        Some(resolved) => resolved,
        None => panic!("{}", unsatisfiable_message(kind)),
    }
}

/// Resolution of `kind` at the weakest requested level that can be
/// provided. Must only be evaluated inside a `const` block.
#[doc(hidden)]
pub const fn require_weakest<B: Backend<U>, U: Raw>(kind: OpKind) -> Resolved {
    let mut level = 0;
    while level < Barrier::ALL.len() {
        if let Some(resolved) = derivation::resolve(kind, &B::CAPABILITIES, Barrier::ALL[level]) {
            return resolved.with_emulation(B::EMULATED);
        }
        level += 1;
    }
    panic!("{}", unsatisfiable_message(kind))
}

const fn unsatisfiable_message(kind: OpKind) -> &'static str {
    match kind {
        OpKind::Get => "atomic `get` is not available from this backend at the requested barrier",
        OpKind::Set => "atomic `set` is not available from this backend at the requested barrier",
        OpKind::GetSet => {
            "atomic `get_set` is not available from this backend at the requested barrier"
        }
        OpKind::CompareSet => {
            "atomic `compare_set` is not available from this backend at the requested barrier"
        }
        OpKind::GetCompareSet => {
            "atomic `get_compare_set` is not available from this backend at the requested barrier"
        }
        OpKind::Add => "atomic `add` is not available from this backend at the requested barrier",
        OpKind::AddGet => {
            "atomic `add_get` is not available from this backend at the requested barrier"
        }
        OpKind::GetAdd => {
            "atomic `get_add` is not available from this backend at the requested barrier"
        }
        OpKind::Subtract => {
            "atomic `subtract` is not available from this backend at the requested barrier"
        }
        OpKind::SubtractGet => {
            "atomic `subtract_get` is not available from this backend at the requested barrier"
        }
        OpKind::GetSubtract => {
            "atomic `get_subtract` is not available from this backend at the requested barrier"
        }
        OpKind::Add1 => "atomic `add1` is not available from this backend at the requested barrier",
        OpKind::Add1Get => {
            "atomic `add1_get` is not available from this backend at the requested barrier"
        }
        OpKind::GetAdd1 => {
            "atomic `get_add1` is not available from this backend at the requested barrier"
        }
        OpKind::Subtract1 => {
            "atomic `subtract1` is not available from this backend at the requested barrier"
        }
        OpKind::Subtract1Get => {
            "atomic `subtract1_get` is not available from this backend at the requested barrier"
        }
        OpKind::GetSubtract1 => {
            "atomic `get_subtract1` is not available from this backend at the requested barrier"
        }
    }
}

/// Resolves `kind` at `want` against an arbitrary capability table, at run
/// time.
///
/// This is the diagnostic counterpart of the build-time resolution the
/// dispatch surface performs; both use the same rule tables and search.
///
/// # Errors
///
/// Returns [`ResolveError::Unsatisfiable`] when no rule applies at `want`
/// or any stronger satisfying level.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_ops::{try_resolve, Barrier, Capabilities, CapabilityTable, OpKind};
///
/// let table = CapabilityTable::new().with(Barrier::Full, Capabilities::GET_ADD);
/// let resolved = try_resolve(OpKind::Add, &table, Barrier::Acquire).unwrap();
/// assert_eq!(resolved.barrier(), Barrier::Full);
/// assert!(!resolved.is_real());
/// ```
pub fn try_resolve(
    kind: OpKind,
    table: &CapabilityTable,
    want: Barrier,
) -> Result<Resolved, ResolveError> {
    match derivation::resolve(kind, table, want) {
        Some(resolved) => {
            tracing::trace!(%kind, %want, %resolved, "resolved atomic operation");
            Ok(resolved)
        }
        None => {
            tracing::debug!(%kind, %want, "no derivation rule applies");
            Err(ResolveError::Unsatisfiable {
                kind,
                barrier: want,
            })
        }
    }
}

/// One cell of a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEntry {
    /// The requested kind.
    pub kind: OpKind,
    /// The requested barrier.
    pub requested: Barrier,
    /// The outcome.
    pub outcome: Result<Resolved, ResolveError>,
}

/// Resolution of every kind at every barrier for one capability table.
///
/// # Author
///
/// Haixing Hu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    /// Builds the report for backend `B` on raw type `U`.
    pub fn collect<B: Backend<U>, U: Raw>() -> Self {
        Self::build(&B::CAPABILITIES, B::EMULATED)
    }

    /// Builds the report for an arbitrary table of genuinely atomic
    /// primitives.
    pub fn for_table(table: &CapabilityTable) -> Self {
        Self::build(table, false)
    }

    fn build(table: &CapabilityTable, emulated: bool) -> Self {
        let mut entries = Vec::with_capacity(OpKind::ALL.len() * Barrier::ALL.len());
        for kind in OpKind::ALL {
            for requested in Barrier::ALL {
                let outcome = try_resolve(kind, table, requested)
                    .map(|resolved| resolved.with_emulation(emulated));
                entries.push(ReportEntry {
                    kind,
                    requested,
                    outcome,
                });
            }
        }
        let report = Self { entries };
        tracing::debug!(
            satisfiable = report.satisfiable().count(),
            native = report.satisfiable().filter(|r| r.is_native()).count(),
            real = report.satisfiable().filter(|r| r.is_real()).count(),
            emulated,
            total = report.entries.len(),
            "collected capability report"
        );
        report
    }

    /// All entries, kind-major.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Looks up one entry.
    pub fn get(&self, kind: OpKind, requested: Barrier) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|entry| entry.kind == kind && entry.requested == requested)
    }

    /// The resolved entries.
    pub fn satisfiable(&self) -> impl Iterator<Item = &Resolved> {
        self.entries
            .iter()
            .filter_map(|entry| entry.outcome.as_ref().ok())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<16}", "")?;
        for barrier in Barrier::ALL {
            write!(f, " {:<15}", barrier.name())?;
        }
        writeln!(f)?;
        for kind in OpKind::ALL {
            write!(f, "{:<16}", kind.name())?;
            for requested in Barrier::ALL {
                let cell = match self.get(kind, requested).map(|entry| &entry.outcome) {
                    Some(Ok(resolved)) if resolved.is_real() => {
                        format!("native@{}", resolved.barrier().name())
                    }
                    Some(Ok(resolved)) if resolved.is_native() => {
                        format!("emulated@{}", resolved.barrier().name())
                    }
                    Some(Ok(resolved)) => format!("derived@{}", resolved.barrier().name()),
                    _ => "-".to_owned(),
                };
                write!(f, " {:<15}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
