//! Extension trait bringing the reductions and transforms to slices

use crate::reduce::{prod, prod_nona, sum, sum_nona};
use crate::transform::{map_missing, RealFn};
use na_core::{any_na, Element};

/// Missing-aware operations on slices of an element kind
///
/// # Examples
///
/// ```rust
/// use na_algorithm::NaSliceExt;
/// use na_core::Element;
///
/// let data = vec![1_i32, 2, 3];
/// assert_eq!(data.na_sum(), 6);
/// assert!(!data.has_na());
///
/// let roots = [4.0, f64::na()].na_sqrt();
/// assert_eq!(roots[0], 2.0);
/// assert!(roots[1].is_na());
/// ```
pub trait NaSliceExt<T: Element> {
    /// Sum with missing short-circuit
    fn na_sum(&self) -> T;

    /// Sum without missing check
    fn na_sum_nona(&self) -> T;

    /// Product with missing short-circuit
    fn na_prod(&self) -> T;

    /// Product without missing check
    fn na_prod_nona(&self) -> T;

    /// Whether any element is missing
    fn has_na(&self) -> bool;

    /// Apply one of the real functions elementwise into a new vector
    fn na_apply(&self, func: RealFn) -> Vec<f64>;

    /// Natural logarithm of every element
    fn na_log(&self) -> Vec<f64> {
        self.na_apply(RealFn::Log)
    }

    /// Exponential of every element
    fn na_exp(&self) -> Vec<f64> {
        self.na_apply(RealFn::Exp)
    }

    /// Square root of every element
    fn na_sqrt(&self) -> Vec<f64> {
        self.na_apply(RealFn::Sqrt)
    }
}

impl<T: Element> NaSliceExt<T> for [T] {
    fn na_sum(&self) -> T {
        sum(self.iter().copied())
    }

    fn na_sum_nona(&self) -> T {
        sum_nona(self.iter().copied())
    }

    fn na_prod(&self) -> T {
        prod(self.iter().copied())
    }

    fn na_prod_nona(&self) -> T {
        prod_nona(self.iter().copied())
    }

    fn has_na(&self) -> bool {
        any_na(self.iter().copied())
    }

    fn na_apply(&self, func: RealFn) -> Vec<f64> {
        map_missing(self.iter().copied(), |x| func.apply(x)).collect()
    }
}
