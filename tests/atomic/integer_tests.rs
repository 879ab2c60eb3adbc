/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

test_atomic_integer!(i8, native_i8, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(u8, native_u8, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(i16, native_i16, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(u16, native_u16, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(i32, native_i32, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(u32, native_u32, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(i64, native_i64, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(u64, native_u64, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(isize, native_isize, prism3_atomic_ops::NativeBackend, concurrent);
test_atomic_integer!(usize, native_usize, prism3_atomic_ops::NativeBackend, concurrent);

test_atomic_integer!(i8, software_i8, prism3_atomic_ops::SoftwareBackend);
test_atomic_integer!(u16, software_u16, prism3_atomic_ops::SoftwareBackend);
test_atomic_integer!(i32, software_i32, prism3_atomic_ops::SoftwareBackend);
test_atomic_integer!(u64, software_u64, prism3_atomic_ops::SoftwareBackend);
test_atomic_integer!(usize, software_usize, prism3_atomic_ops::SoftwareBackend);
