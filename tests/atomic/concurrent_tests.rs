/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_ops::{Acquire, Atomic, NativeBackend, Relaxed, Release};
use std::sync::atomic::{
    AtomicUsize as StdAtomicUsize,
    Ordering,
};
use std::sync::{
    Arc,
    Barrier,
};
use std::thread;

const NUM_THREADS: usize = 10;
const ITERATIONS_PER_THREAD: usize = 1000;

// Test concurrent increments
#[test]
fn test_concurrent_increment() {
    let counter = Arc::new(Atomic::<i32, NativeBackend>::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..ITERATIONS_PER_THREAD {
                counter.add1_get();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.get(), (NUM_THREADS * ITERATIONS_PER_THREAD) as i32);
}

// Test concurrent decrements through a derived operation
#[test]
fn test_concurrent_decrement() {
    let counter = Arc::new(Atomic::<i64, NativeBackend>::new(10000));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                counter.subtract1_get_with::<Relaxed>();
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.get(), 10000 - (NUM_THREADS * 100) as i64);
}

// Every value returned by get_add1 is handed out exactly once.
#[test]
fn test_concurrent_tickets_are_unique() {
    let next = Arc::new(Atomic::<u64, NativeBackend>::new(0));
    let seen = Arc::new(
        (0..NUM_THREADS * 100)
            .map(|_| StdAtomicUsize::new(0))
            .collect::<Vec<_>>(),
    );
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let next = next.clone();
        let seen = seen.clone();
        handles.push(thread::spawn(move || {
            for _ in 0..100 {
                let ticket = next.get_add1_with::<Acquire>() as usize;
                seen[ticket].fetch_add(1, Ordering::Relaxed);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(seen.iter().all(|count| count.load(Ordering::Relaxed) == 1));
}

// Test concurrent CAS operations
#[test]
fn test_concurrent_cas() {
    let atomic = Arc::new(Atomic::<u32, NativeBackend>::new(0));
    let success_count = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            let mut current = atomic.get();
            loop {
                let actual = atomic.get_compare_set(current, current + 1);
                if actual == current {
                    success_count.fetch_add(1, Ordering::Relaxed);
                    break;
                }
                current = actual;
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(atomic.get(), NUM_THREADS as u32);
    assert_eq!(success_count.load(Ordering::Relaxed), NUM_THREADS);
}

// Test concurrent get_set operations
#[test]
fn test_concurrent_get_set() {
    let atomic = Arc::new(Atomic::<i32, NativeBackend>::new(0));
    let mut handles = vec![];
    let sum = Arc::new(StdAtomicUsize::new(0));

    for i in 0..NUM_THREADS {
        let atomic = atomic.clone();
        let sum = sum.clone();
        let handle = thread::spawn(move || {
            let old = atomic.get_set((i + 1) as i32);
            sum.fetch_add(old as usize, Ordering::Relaxed);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    // Every value but the last one written was read back exactly once.
    let final_value = atomic.get() as usize;
    assert!((1..=NUM_THREADS).contains(&final_value));
    let total: usize = (1..=NUM_THREADS).sum();
    assert_eq!(sum.load(Ordering::Relaxed) + final_value, total);
}

// Only one thread wins the flag
#[test]
fn test_concurrent_flag() {
    let flag = Arc::new(Atomic::<bool, NativeBackend>::new(false));
    let success_count = Arc::new(StdAtomicUsize::new(0));
    let mut handles = vec![];

    for _ in 0..NUM_THREADS {
        let flag = flag.clone();
        let success_count = success_count.clone();
        let handle = thread::spawn(move || {
            if flag.compare_set_with::<Acquire>(false, true) {
                success_count.fetch_add(1, Ordering::Relaxed);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(flag.get());
    assert_eq!(success_count.load(Ordering::Relaxed), 1);
}

// Release store paired with acquire load publishes the data written before it.
#[test]
fn test_release_acquire_publication() {
    let data = Arc::new(Atomic::<u64, NativeBackend>::new(0));
    let ready = Arc::new(Atomic::<bool, NativeBackend>::new(false));
    let barrier = Arc::new(Barrier::new(2));

    let producer = {
        let data = data.clone();
        let ready = ready.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            data.set_with::<Relaxed>(42);
            ready.set_with::<Release>(true);
        })
    };

    let consumer = {
        let data = data.clone();
        let ready = ready.clone();
        let barrier = barrier.clone();
        thread::spawn(move || {
            barrier.wait();
            while !ready.get_with::<Acquire>() {
                std::hint::spin_loop();
            }
            data.get_with::<Relaxed>()
        })
    };

    producer.join().unwrap();
    assert_eq!(consumer.join().unwrap(), 42);
}

// Release loads and acquire stores are derived from read-modify-write
// operations; they must stay atomic under contention.
#[test]
fn test_derived_orderings_under_contention() {
    let counter = Arc::new(Atomic::<usize, NativeBackend>::new(0));
    let barrier = Arc::new(Barrier::new(NUM_THREADS));
    let mut handles = vec![];

    for i in 0..NUM_THREADS {
        let counter = counter.clone();
        let barrier = barrier.clone();
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..ITERATIONS_PER_THREAD {
                if i % 2 == 0 {
                    counter.add_with::<Acquire>(1);
                } else {
                    counter.add_get_with::<Release>(1);
                }
                let _ = counter.get_with::<Release>();
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(counter.get(), NUM_THREADS * ITERATIONS_PER_THREAD);
}
