//! Element kinds and their missing-value sentinels
//!
//! Every element a reduction or transform touches belongs to one of two
//! families: real (`f64`) or integral (`i32`). The [`Element`] trait resolves,
//! at compile time, the missing sentinel and the additive and multiplicative
//! identities of a family, and owns the single predicate that decides whether
//! a value is missing.
//!
//! # Design Philosophy
//!
//! - **Statically resolved**: no runtime branching on the kind
//! - **Closed set**: the trait is sealed, so `u8`, `f32` and friends are rejected
//!   by the compiler rather than at runtime
//! - **Narrow missing test**: algorithms only ever ask [`Element::is_na`], so the
//!   sentinel encoding can change without touching them
//!
//! ```compile_fail
//! use na_core::Element;
//!
//! // Only f64 and i32 are element kinds.
//! let _ = <u8 as Element>::na();
//! ```

use num_traits::{CheckedMul, SaturatingAdd, WrappingAdd, WrappingMul};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Bit pattern of the real missing sentinel: a NaN carrying payload 1954
pub const NA_REAL_BITS: u64 = 0x7FF0_0000_0000_07A2;

/// Payload stored in the low word of [`NA_REAL_BITS`]
const NA_REAL_PAYLOAD: u32 = 1954;

/// Integral missing sentinel
pub const NA_INTEGER: i32 = i32::MIN;

/// Numeric family of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Double precision floating point
    Real,
    /// 32-bit signed integer
    Integer,
}

impl ElementKind {
    /// Get the name of this kind
    pub fn name(&self) -> &'static str {
        match self {
            Self::Real => "real",
            Self::Integer => "integer",
        }
    }
}

impl Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for f64 {}
    impl Sealed for i32 {}
}

/// A numeric element with a reserved missing sentinel
///
/// Implemented for `f64` and `i32` only.
pub trait Element: sealed::Sealed + Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Kind tag of this family
    const KIND: ElementKind;

    /// The missing sentinel
    fn na() -> Self;

    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Whether `self` is the missing sentinel
    ///
    /// For reals this is not `==`: the sentinel is a NaN and must be recognised
    /// by its payload.
    fn is_na(self) -> bool;

    /// Accumulator wide enough that intermediate results never lose the final answer
    type Wide: Copy + Debug;

    /// Lift into the wide accumulator
    fn widen(self) -> Self::Wide;

    /// Add an element to a wide accumulator
    fn wide_add(acc: Self::Wide, rhs: Self) -> Self::Wide;

    /// Multiply a wide accumulator by an element
    fn wide_mul(acc: Self::Wide, rhs: Self) -> Self::Wide;

    /// Narrow a finished accumulator, yielding the sentinel when it does not fit
    fn narrow(acc: Self::Wide) -> Self;

    /// Add without any range check (integers wrap)
    fn raw_add(self, rhs: Self) -> Self;

    /// Multiply without any range check (integers wrap)
    fn raw_mul(self, rhs: Self) -> Self;

    /// Convert to a real value for the real-valued math primitives
    fn to_real(self) -> f64;

    /// View as an explicit optional value
    #[inline]
    fn to_option(self) -> Option<Self> {
        if self.is_na() {
            None
        } else {
            Some(self)
        }
    }

    /// Encode an optional value, mapping `None` to the sentinel
    #[inline]
    fn from_option(value: Option<Self>) -> Self {
        value.unwrap_or_else(Self::na)
    }
}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::Real;

    #[inline]
    fn na() -> Self {
        f64::from_bits(NA_REAL_BITS)
    }

    #[inline]
    fn zero() -> Self {
        <f64 as num_traits::Zero>::zero()
    }

    #[inline]
    fn one() -> Self {
        <f64 as num_traits::One>::one()
    }

    #[inline]
    fn is_na(self) -> bool {
        // Arithmetic may quiet the NaN, but the low word survives.
        self.is_nan() && (self.to_bits() & 0xFFFF_FFFF) as u32 == NA_REAL_PAYLOAD
    }

    type Wide = f64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn wide_add(acc: f64, rhs: Self) -> f64 {
        acc + rhs
    }

    #[inline]
    fn wide_mul(acc: f64, rhs: Self) -> f64 {
        acc * rhs
    }

    #[inline]
    fn narrow(acc: f64) -> Self {
        acc
    }

    #[inline]
    fn raw_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn raw_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn to_real(self) -> f64 {
        self
    }
}

impl Element for i32 {
    const KIND: ElementKind = ElementKind::Integer;

    #[inline]
    fn na() -> Self {
        NA_INTEGER
    }

    #[inline]
    fn zero() -> Self {
        <i32 as num_traits::Zero>::zero()
    }

    #[inline]
    fn one() -> Self {
        <i32 as num_traits::One>::one()
    }

    #[inline]
    fn is_na(self) -> bool {
        self == NA_INTEGER
    }

    type Wide = i128;

    #[inline]
    fn widen(self) -> i128 {
        i128::from(self)
    }

    #[inline]
    fn wide_add(acc: i128, rhs: Self) -> i128 {
        SaturatingAdd::saturating_add(&acc, &i128::from(rhs))
    }

    #[inline]
    fn wide_mul(acc: i128, rhs: Self) -> i128 {
        // Non-zero factors never shrink the magnitude, so a clamped product
        // stays out of range until a zero factor resets it.
        let rhs = i128::from(rhs);
        CheckedMul::checked_mul(&acc, &rhs).unwrap_or(if (acc < 0) != (rhs < 0) {
            i128::MIN
        } else {
            i128::MAX
        })
    }

    #[inline]
    fn narrow(acc: i128) -> Self {
        // A result equal to the sentinel is out of range as well.
        i32::try_from(acc).unwrap_or(NA_INTEGER)
    }

    #[inline]
    fn raw_add(self, rhs: Self) -> Self {
        WrappingAdd::wrapping_add(&self, &rhs)
    }

    #[inline]
    fn raw_mul(self, rhs: Self) -> Self {
        WrappingMul::wrapping_mul(&self, &rhs)
    }

    #[inline]
    fn to_real(self) -> f64 {
        f64::from(self)
    }
}

/// Check whether any element of a sequence is missing
///
/// Stops at the first missing element.
///
/// # Examples
///
/// ```rust
/// use na_core::{any_na, Element};
///
/// assert!(!any_na([1, 2, 3]));
/// assert!(any_na([1, i32::na(), 3]));
/// ```
pub fn any_na<T, I>(input: I) -> bool
where
    T: Element,
    I: IntoIterator<Item = T>,
{
    input.into_iter().any(T::is_na)
}
