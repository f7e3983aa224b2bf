//! Missing-aware elementwise transforms
//!
//! Each input element produces exactly one real output, in order. A missing
//! input of either kind becomes the real missing sentinel; anything else is
//! converted to `f64` and handed to the math function unchanged. Domain
//! errors are not intercepted: `ln(-1.0)` is NaN and `ln(0.0)` is `-inf`,
//! exactly as `f64` defines them.

use na_core::{Element, Error, Result};
use std::iter::FusedIterator;

/// The real-valued functions provided as ready-made transforms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealFn {
    /// Natural logarithm
    Log,
    /// Exponential
    Exp,
    /// Square root
    Sqrt,
}

impl RealFn {
    /// Apply the function to a non-missing real value
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Self::Log => x.ln(),
            Self::Exp => x.exp(),
            Self::Sqrt => x.sqrt(),
        }
    }

    /// Get the name of this function
    pub fn name(&self) -> &'static str {
        match self {
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Sqrt => "sqrt",
        }
    }
}

/// Apply `f` to one element, passing missing values through
///
/// ```rust
/// use na_algorithm::na_map;
/// use na_core::Element;
///
/// assert_eq!(na_map(4, f64::sqrt), 2.0);
/// assert!(na_map(i32::na(), f64::sqrt).is_na());
/// ```
#[inline]
pub fn na_map<T, F>(value: T, f: F) -> f64
where
    T: Element,
    F: FnOnce(f64) -> f64,
{
    if value.is_na() {
        f64::na()
    } else {
        f(value.to_real())
    }
}

/// Lazy iterator applying a function with missing passthrough
///
/// Created by [`map_missing`]. Yields one `f64` per input element.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct NaMap<I, F> {
    iter: I,
    f: F,
}

impl<T, I, F> Iterator for NaMap<I, F>
where
    T: Element,
    I: Iterator<Item = T>,
    F: FnMut(f64) -> f64,
{
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        let value = self.iter.next()?;
        Some(na_map(value, &mut self.f))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T, I, F> ExactSizeIterator for NaMap<I, F>
where
    T: Element,
    I: ExactSizeIterator<Item = T>,
    F: FnMut(f64) -> f64,
{
}

impl<T, I, F> FusedIterator for NaMap<I, F>
where
    T: Element,
    I: FusedIterator<Item = T>,
    F: FnMut(f64) -> f64,
{
}

/// Wrap a sequence so that `f` is applied elementwise with missing passthrough
///
/// ```rust
/// use na_algorithm::map_missing;
/// use na_core::Element;
///
/// let out: Vec<f64> = map_missing([1.0, f64::na()], |x| x * 2.0).collect();
/// assert_eq!(out[0], 2.0);
/// assert!(out[1].is_na());
/// ```
pub fn map_missing<T, I, F>(input: I, f: F) -> NaMap<I::IntoIter, F>
where
    T: Element,
    I: IntoIterator<Item = T>,
    F: FnMut(f64) -> f64,
{
    NaMap {
        iter: input.into_iter(),
        f,
    }
}

/// Apply `f` to every element, appending the results to `sink`
pub fn transform<T, I, S, F>(input: I, sink: &mut S, f: F)
where
    T: Element,
    I: IntoIterator<Item = T>,
    S: Extend<f64>,
    F: FnMut(f64) -> f64,
{
    sink.extend(map_missing(input, f));
}

/// Apply `f` to every element, writing the results into `out`
///
/// `out` must have the same length as `input`; otherwise nothing is written
/// and [`Error::LengthMismatch`] is returned.
pub fn transform_slice<T, F>(input: &[T], out: &mut [f64], mut f: F) -> Result<()>
where
    T: Element,
    F: FnMut(f64) -> f64,
{
    if input.len() != out.len() {
        return Err(Error::length_mismatch(input.len(), out.len()));
    }

    for (slot, &value) in out.iter_mut().zip(input) {
        *slot = na_map(value, &mut f);
    }
    Ok(())
}

/// Natural logarithm of every element
///
/// ```rust
/// use na_algorithm::log;
/// use na_core::Element;
///
/// let mut out = Vec::new();
/// log([1.0, f64::na(), std::f64::consts::E], &mut out);
/// assert_eq!(out[0], 0.0);
/// assert!(out[1].is_na());
/// assert!((out[2] - 1.0).abs() < 1e-12);
/// ```
pub fn log<T, I, S>(input: I, sink: &mut S)
where
    T: Element,
    I: IntoIterator<Item = T>,
    S: Extend<f64>,
{
    transform(input, sink, |x| RealFn::Log.apply(x));
}

/// Exponential of every element
pub fn exp<T, I, S>(input: I, sink: &mut S)
where
    T: Element,
    I: IntoIterator<Item = T>,
    S: Extend<f64>,
{
    transform(input, sink, |x| RealFn::Exp.apply(x));
}

/// Square root of every element
pub fn sqrt<T, I, S>(input: I, sink: &mut S)
where
    T: Element,
    I: IntoIterator<Item = T>,
    S: Extend<f64>,
{
    transform(input, sink, |x| RealFn::Sqrt.apply(x));
}
