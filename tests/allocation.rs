//! Counts heap allocations made by the descent loop.
//!
//! A counting global allocator tallies allocations per thread; setup is allowed to
//! allocate, the iteration loop is not.

use std::alloc::{GlobalAlloc, Layout, System};
use std::cell::Cell;

use faer::Mat;
use lsgd::{DescentWorkspace, Kernel, evaluate_gradient, transpose};

struct CountingAlloc;

thread_local! {
    static ALLOCATIONS: Cell<usize> = const { Cell::new(0) };
}

fn bump() {
    let _ = ALLOCATIONS.try_with(|c| c.set(c.get() + 1));
}

fn allocations() -> usize {
    ALLOCATIONS.with(|c| c.get())
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        bump();
        unsafe { System.alloc(layout) }
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        bump();
        unsafe { System.alloc_zeroed(layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        bump();
        unsafe { System.realloc(ptr, layout, new_size) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn problem() -> (Mat<f64>, Vec<f64>) {
    let a = Mat::from_fn(10, 20, |i, j| ((i * 20 + j) as f64 * 0.37).sin());
    let b = (0..10).map(|i| (i as f64).cos()).collect();
    (a, b)
}

#[test]
fn iteration_loop_does_not_allocate() {
    let (a, b) = problem();
    let x0 = vec![0.0; 20];

    let before_setup = allocations();
    let mut ws = DescentWorkspace::new(a.as_ref(), &b, &x0).unwrap();
    assert!(allocations() > before_setup, "setup should own its buffers");

    let before = allocations();
    ws.iterate(1000, 1e-3, Kernel::Serial).unwrap();
    assert_eq!(allocations(), before);
}

#[test]
fn evaluator_does_not_allocate() {
    let (a, b) = problem();
    let at = transpose(a.as_ref());
    let x = vec![0.5; 20];
    let mut grad = vec![0.0; 20];
    let mut residual = vec![0.0; 10];

    let before = allocations();
    for _ in 0..10 {
        evaluate_gradient(&mut grad, &mut residual, &x, &a, &b, &at).unwrap();
    }
    assert_eq!(allocations(), before);
}
