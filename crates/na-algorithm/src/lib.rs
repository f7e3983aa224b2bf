//! Missing-aware reductions and elementwise transforms
//!
//! Sums, products and log/exp/sqrt over sequences of `f64` or `i32` where one
//! reserved value of each kind means "missing". The element kind is resolved
//! statically through [`na_core::Element`]; nothing here branches on it at
//! runtime.
//!
//! # Overview
//!
//! - [`reduce`]: `sum`, `sum_nona`, `prod`, `prod_nona` and the configurable
//!   [`Reducer`]
//! - [`transform`]: `log`, `exp`, `sqrt` and the generic [`transform()`] /
//!   [`map_missing`] building blocks
//! - [`ext`]: [`NaSliceExt`] for calling all of the above on slices
//!
//! Every operation is a single forward pass with constant extra state. Calls
//! share nothing, so independent calls may run on different threads; a host
//! that partitions a sequence can combine partial sums with [`sum`] itself,
//! which keeps the missing short-circuit at the combine step.
//!
//! # Example
//!
//! ```rust
//! use na_algorithm::{prod, sqrt, sum};
//! use na_core::Element;
//!
//! assert_eq!(sum([1, 2, 3]), 6);
//! assert!(sum([1, i32::na(), 3]).is_na());
//! assert_eq!(prod([2, 3, 4]), 24);
//!
//! let mut out = Vec::new();
//! sqrt([1.0, f64::na(), 4.0], &mut out);
//! assert_eq!(out[0], 1.0);
//! assert!(out[1].is_na());
//! assert_eq!(out[2], 2.0);
//! ```

pub mod ext;
pub mod reduce;
pub mod transform;

pub use ext::NaSliceExt;
pub use reduce::{prod, prod_nona, sum, sum_nona, Reducer};
pub use transform::{
    exp, log, map_missing, na_map, sqrt, transform, transform_slice, NaMap, RealFn,
};
