/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::{
    Acquire,
    Atomic,
    AtomicBool,
    AtomicF32,
    AtomicF64,
    NativeBackend,
    Relaxed,
    Release,
    SoftwareBackend,
};

#[test]
fn test_bool_basics() {
    let atomic = AtomicBool::new(false);
    assert!(!atomic.get());
    atomic.set(true);
    assert!(atomic.get());
    assert!(atomic.get_set(false));
    assert!(!AtomicBool::default().get());
    assert!(AtomicBool::from(true).into_inner());
}

#[test]
fn test_bool_compare_set() {
    let atomic = AtomicBool::new(false);
    assert!(!atomic.compare_set(true, false));
    assert!(atomic.compare_set_with::<Acquire>(false, true));
    assert!(atomic.get_compare_set(true, false));
    assert!(!atomic.get_with::<Relaxed>());
}

#[test]
fn test_bool_on_software_backend() {
    let atomic = Atomic::<bool, SoftwareBackend>::new(true);
    atomic.set_with::<Release>(false);
    assert!(!atomic.get_with::<Acquire>());
    assert!(!atomic.get_compare_set(false, true));
    assert!(atomic.into_inner());
}

#[test]
fn test_f32_basics() {
    let atomic = AtomicF32::new(1.5);
    assert_eq!(atomic.get(), 1.5);
    atomic.set_with::<Release>(-2.25);
    assert_eq!(atomic.get_with::<Acquire>(), -2.25);
    assert_eq!(atomic.get_set(f32::INFINITY), -2.25);
    assert_eq!(atomic.get(), f32::INFINITY);
}

#[test]
fn test_f32_compare_set_is_bitwise() {
    let atomic = AtomicF32::new(0.0);
    // -0.0 == 0.0 numerically but the bits differ.
    assert!(!atomic.compare_set(-0.0, 1.0));
    assert!(atomic.compare_set(0.0, 1.0));

    let nan = AtomicF32::new(f32::NAN);
    assert!(nan.compare_set(f32::NAN, 2.0));
    assert_eq!(nan.get(), 2.0);
}

#[test]
fn test_f64_basics() {
    let atomic = AtomicF64::default();
    assert_eq!(atomic.get(), 0.0);
    atomic.set(std::f64::consts::PI);
    assert_eq!(atomic.get_compare_set(std::f64::consts::PI, 1.0), std::f64::consts::PI);
    assert_eq!(atomic.into_inner(), 1.0);
}

#[test]
fn test_f64_on_software_backend() {
    let atomic = Atomic::<f64, SoftwareBackend>::new(-1.0);
    assert_eq!(atomic.get_set_with::<Relaxed>(1e300), -1.0);
    assert!(atomic.compare_set(1e300, f64::MIN_POSITIVE));
    assert_eq!(atomic.get(), f64::MIN_POSITIVE);
}

#[test]
fn test_char() {
    let atomic = Atomic::<char, NativeBackend>::new('a');
    assert_eq!(atomic.get_set('ß'), 'a');
    assert!(atomic.compare_set('ß', '字'));
    assert_eq!(atomic.get_with::<Relaxed>(), '字');
    assert_eq!(format!("{:?}", atomic), "Atomic { value: '字' }");
}

#[test]
fn test_scalar_queries() {
    type Flag = Atomic<bool, NativeBackend>;
    assert!(Flag::get_is_real::<Acquire>());
    assert!(!Flag::set_is_real::<Acquire>());
    assert!(Flag::get_set_is_real::<Acquire>());
    // Arithmetic kinds are still resolvable as queries on non-integral
    // types; only the methods require an integral value type.
    assert!(Flag::add_exists::<Relaxed>());
}
