/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Per-Operation Queries
//!
//! `const fn` predicates on [`Atomic`] for callers that must decide while
//! compiling whether an operation is usable: `add_exists::<O>()`,
//! `add_is_real::<O>()` and `add_barrier::<O>()`, and the same for every
//! other operation.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::Atomic;
use crate::backend::Backend;
use crate::barrier::{Barrier, Order};
use crate::capability::OpKind;
use crate::representation::Representable;
use crate::resolution;

macro_rules! impl_queries {
    ($($kind:ident: $name:literal => $exists:ident, $is_real:ident, $barrier:ident;)*) => {
        impl<T: Representable, B: Backend<T::Raw>> Atomic<T, B> {
            $(
                #[doc = concat!("Returns `true` if `", $name, "` requested at `O` can be provided.")]
                #[inline]
                pub const fn $exists<O: Order>() -> bool {
                    resolution::exists::<B, T::Raw, O>(OpKind::$kind)
                }

                #[doc = concat!("Returns `true` if `", $name, "` requested at `O` is the backend's native primitive.")]
                #[inline]
                pub const fn $is_real<O: Order>() -> bool {
                    resolution::is_real::<B, T::Raw, O>(OpKind::$kind)
                }

                #[doc = concat!("Returns the barrier `", $name, "` requested at `O` actually runs at.")]
                #[inline]
                pub const fn $barrier<O: Order>() -> Option<Barrier> {
                    resolution::barrier::<B, T::Raw, O>(OpKind::$kind)
                }
            )*
        }
    };
}

impl_queries! {
    Get: "get" => get_exists, get_is_real, get_barrier;
    Set: "set" => set_exists, set_is_real, set_barrier;
    GetSet: "get_set" => get_set_exists, get_set_is_real, get_set_barrier;
    CompareSet: "compare_set" => compare_set_exists, compare_set_is_real, compare_set_barrier;
    GetCompareSet: "get_compare_set" =>
        get_compare_set_exists, get_compare_set_is_real, get_compare_set_barrier;
    Add: "add" => add_exists, add_is_real, add_barrier;
    AddGet: "add_get" => add_get_exists, add_get_is_real, add_get_barrier;
    GetAdd: "get_add" => get_add_exists, get_add_is_real, get_add_barrier;
    Subtract: "subtract" => subtract_exists, subtract_is_real, subtract_barrier;
    SubtractGet: "subtract_get" => subtract_get_exists, subtract_get_is_real, subtract_get_barrier;
    GetSubtract: "get_subtract" => get_subtract_exists, get_subtract_is_real, get_subtract_barrier;
    Add1: "add1" => add1_exists, add1_is_real, add1_barrier;
    Add1Get: "add1_get" => add1_get_exists, add1_get_is_real, add1_get_barrier;
    GetAdd1: "get_add1" => get_add1_exists, get_add1_is_real, get_add1_barrier;
    Subtract1: "subtract1" => subtract1_exists, subtract1_is_real, subtract1_barrier;
    Subtract1Get: "subtract1_get" =>
        subtract1_get_exists, subtract1_get_is_real, subtract1_get_barrier;
    GetSubtract1: "get_subtract1" =>
        get_subtract1_exists, get_subtract1_is_real, get_subtract1_barrier;
}
