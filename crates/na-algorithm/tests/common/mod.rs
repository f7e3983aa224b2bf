//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use std::cell::Cell;
use std::rc::Rc;

pub const EPSILON: f64 = 1e-10;

/// Iterator that counts how many elements were pulled from it
pub struct Counting<I> {
    inner: I,
    reads: Rc<Cell<usize>>,
}

impl<I: Iterator> Iterator for Counting<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        self.reads.set(self.reads.get() + 1);
        Some(item)
    }
}

/// Counting iterator over a borrowed slice
pub type CountingSlice<'a, T> = Counting<std::iter::Copied<std::slice::Iter<'a, T>>>;

/// Wrap `data` in a counting iterator, returning the iterator and its counter
pub fn counting<T: Copy>(data: &[T]) -> (CountingSlice<'_, T>, Rc<Cell<usize>>) {
    let reads = Rc::new(Cell::new(0));
    let iter = Counting {
        inner: data.iter().copied(),
        reads: Rc::clone(&reads),
    };
    (iter, reads)
}

/// Special real values that are data, not missing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        f64::EPSILON,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        std::f64::consts::PI,
        std::f64::consts::E,
    ]
}

/// Assert two vectors are equal within tolerance, treating missing as equal to missing
pub fn assert_vectors_equal(actual: &[f64], expected: &[f64], context: &str) {
    use na_core::Element;

    assert_eq!(actual.len(), expected.len(), "length mismatch for {}", context);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        if e.is_na() {
            assert!(a.is_na(), "{}: expected missing at {}, got {}", context, i, a);
        } else {
            assert!(!a.is_na(), "{}: unexpected missing at {}", context, i);
            assert!(
                (a - e).abs() <= EPSILON * e.abs().max(1.0),
                "{}: mismatch at {}: {} vs {}",
                context,
                i,
                a,
                e
            );
        }
    }
}
