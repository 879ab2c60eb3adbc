/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Counter Example
//!
//! Demonstrates counters on the native backend, what each operation is
//! resolved to, and the capability report of both shipped backends.
//!
//! Run with `RUST_LOG=prism3_atomic_ops=debug` to see resolution logs.

use prism3_atomic_ops::{
    try_resolve,
    Acquire,
    Atomic,
    Barrier,
    Full,
    NativeBackend,
    OpKind,
    Relaxed,
    Release,
    Report,
    SoftwareBackend,
};
use std::sync::Arc;
use std::thread;
use tracing_subscriber::EnvFilter;

type Counter = Atomic<i32, NativeBackend>;

fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("prism3_atomic_ops=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== Atomic Counter Example ===\n");

    // Example 1: Basic counter operations
    println!("1. Basic Counter Operations:");
    let counter = Counter::new(0);
    println!("   Initial value: {}", counter.get());

    counter.add1();
    println!("   After add1: {}", counter.get());

    counter.add_get(5);
    println!("   After adding 5: {}", counter.get());

    counter.subtract1_get_with::<Relaxed>();
    println!("   After subtract1 (relaxed): {}", counter.get_with::<Acquire>());

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(Counter::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.add1_with::<Release>();
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.get_with::<Acquire>(),
        num_threads * increments_per_thread
    );

    // Example 3: Compare-and-set
    println!("\n3. Compare-and-Set:");
    let counter = Counter::new(10);
    println!("   Initial value: {}", counter.get());

    for (expect, set) in [(10, 20), (10, 30)] {
        if counter.compare_set(expect, set) {
            println!("   CAS {} -> {} succeeded", expect, set);
        } else {
            println!(
                "   CAS {} -> {} failed: value is {}",
                expect,
                set,
                counter.get()
            );
        }
    }

    // Example 4: How operations are provided
    println!("\n4. Resolution on the native backend:");
    println!(
        "   add at full: exists={}, native={}",
        Counter::add_exists::<Full>(),
        Counter::add_is_real::<Full>()
    );
    println!(
        "   get requested at release runs at {:?}",
        Counter::get_barrier::<Release>()
    );
    let table = <NativeBackend as prism3_atomic_ops::Backend<u32>>::CAPABILITIES;
    for kind in [OpKind::AddGet, OpKind::Subtract1, OpKind::Set] {
        match try_resolve(kind, &table, Barrier::Acquire) {
            Ok(resolved) => println!("   {}", resolved),
            Err(error) => println!("   {}", error),
        }
    }

    // Example 5: Capability reports
    println!("\n5. Native backend report (u32):");
    print!("{}", Report::collect::<NativeBackend, u32>());
    println!("\n   Software backend report (u32):");
    print!("{}", Report::collect::<SoftwareBackend, u32>());

    println!("\n=== Example completed ===");
}
