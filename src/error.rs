/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Resolution Errors
//!
//! The single failure a resolution can have. Typed call sites never observe
//! it at run time; they fail to build instead.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

use crate::barrier::Barrier;
use crate::capability::OpKind;

/// Error returned by the runtime resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ResolveError {
    /// No native primitive and no derivation rule is available for the kind
    /// at the requested barrier or any stronger level that satisfies it.
    #[error("atomic `{kind}` cannot be provided at barrier `{barrier}`")]
    Unsatisfiable {
        /// The requested kind.
        kind: OpKind,
        /// The requested barrier.
        barrier: Barrier,
    },
}
