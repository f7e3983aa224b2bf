//! Missing-aware reductions
//!
//! Sum and product in two flavours each:
//!
//! | Operation   | Missing check | Integer overflow         | Empty input          |
//! |-------------|---------------|--------------------------|----------------------|
//! | `sum`       | short-circuit | NA if result overflows   | `zero()`             |
//! | `sum_nona`  | none          | wraps                    | `zero()`             |
//! | `prod`      | short-circuit | NA if result overflows   | per [`EmptyProduct`] |
//! | `prod_nona` | none          | wraps                    | per [`EmptyProduct`] |
//!
//! The checked variants stop reading the input at the first missing element.
//! The unchecked variants assume the caller already knows the input has no
//! missing elements (for instance via [`na_core::any_na`]); if it does, the
//! sentinel takes part in the arithmetic like any other value. Debug builds
//! assert on that precondition.
//!
//! Accumulation is strictly left to right with no compensation. The checked
//! variants accumulate integers in a wider type and only range-check the final
//! result, so whenever the true result fits in an `i32` both flavours agree.

use log::{debug, trace};
use na_core::{Element, EmptyProduct, ReduceConfig};

/// Reduction engine carrying a [`ReduceConfig`]
///
/// The free functions [`sum`], [`sum_nona`], [`prod`] and [`prod_nona`] use
/// `Reducer::default()`.
///
/// # Examples
///
/// ```rust
/// use na_algorithm::Reducer;
/// use na_core::ReduceConfig;
///
/// let reducer = Reducer::new(ReduceConfig::legacy());
/// assert_eq!(reducer.prod(Vec::<i32>::new()), 0);
/// assert_eq!(reducer.prod([2, 3, 4]), 24);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reducer {
    config: ReduceConfig,
}

impl Reducer {
    /// Create a reducer with the given configuration
    pub fn new(config: ReduceConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &ReduceConfig {
        &self.config
    }

    /// Sum, returning the sentinel as soon as a missing element is seen
    pub fn sum<T, I>(&self, input: I) -> T
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        fold_checked(input, T::zero().widen(), T::zero(), T::wide_add, "sum")
    }

    /// Sum without looking for missing elements
    pub fn sum_nona<T, I>(&self, input: I) -> T
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        fold_unchecked(input, T::zero(), T::zero(), T::raw_add, "sum_nona")
    }

    /// Product, returning the sentinel as soon as a missing element is seen
    pub fn prod<T, I>(&self, input: I) -> T
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        fold_checked(input, T::one().widen(), self.empty_product(), T::wide_mul, "prod")
    }

    /// Product without looking for missing elements
    pub fn prod_nona<T, I>(&self, input: I) -> T
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        fold_unchecked(input, T::one(), self.empty_product(), T::raw_mul, "prod_nona")
    }

    #[inline]
    fn empty_product<T: Element>(&self) -> T {
        match self.config.empty_product {
            EmptyProduct::Identity => T::one(),
            EmptyProduct::Zero => T::zero(),
        }
    }
}

fn fold_checked<T, I>(
    input: I,
    init: T::Wide,
    empty: T,
    op: fn(T::Wide, T) -> T::Wide,
    name: &str,
) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    let mut acc = init;
    let mut seen = 0usize;

    for (index, value) in input.into_iter().enumerate() {
        if value.is_na() {
            trace!("{name}: missing {} value at position {index}", T::KIND);
            return T::na();
        }
        acc = op(acc, value);
        seen = index + 1;
    }

    if seen == 0 {
        return empty;
    }

    // Only the final result has to fit; intermediate overflow may cancel out.
    let result = T::narrow(acc);
    if result.is_na() {
        debug!("{name}: {} result out of range after {seen} values", T::KIND);
    }
    result
}

fn fold_unchecked<T, I>(input: I, init: T, empty: T, op: fn(T, T) -> T, name: &str) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    let mut acc = init;
    let mut seen = false;

    for value in input {
        debug_assert!(
            !value.is_na(),
            "{name}: missing {} value passed to an unchecked reduction",
            T::KIND
        );
        acc = op(acc, value);
        seen = true;
    }

    if seen {
        acc
    } else {
        empty
    }
}

/// Sum a sequence, propagating missing values
///
/// # Examples
///
/// ```rust
/// use na_algorithm::sum;
/// use na_core::Element;
///
/// assert_eq!(sum([1, 2, 3]), 6);
/// assert!(sum([1, i32::na(), 3]).is_na());
/// assert_eq!(sum(Vec::<f64>::new()), 0.0);
/// ```
pub fn sum<T, I>(input: I) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    Reducer::default().sum(input)
}

/// Sum a sequence known to contain no missing values
///
/// ```rust
/// use na_algorithm::sum_nona;
///
/// assert_eq!(sum_nona([1.5, 2.5]), 4.0);
/// ```
pub fn sum_nona<T, I>(input: I) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    Reducer::default().sum_nona(input)
}

/// Multiply a sequence, propagating missing values
///
/// An empty sequence yields `one()`; use a [`Reducer`] configured with
/// [`ReduceConfig::legacy`] to get `zero()` instead.
///
/// ```rust
/// use na_algorithm::prod;
///
/// assert_eq!(prod([2, 3, 4]), 24);
/// assert_eq!(prod(Vec::<i32>::new()), 1);
/// ```
pub fn prod<T, I>(input: I) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    Reducer::default().prod(input)
}

/// Multiply a sequence known to contain no missing values
pub fn prod_nona<T, I>(input: I) -> T
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    Reducer::default().prod_nona(input)
}
