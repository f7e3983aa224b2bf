//! Missing-value-aware numeric algorithms
//!
//! Facade over the na-stats workspace:
//!
//! - [`na_core`]: element kinds, sentinels, identities, configuration
//! - [`na_algorithm`]: sum, product, log, exp and sqrt
//!
//! # Example
//!
//! ```rust
//! use na_stats::prelude::*;
//!
//! assert_eq!(sum([1, 2, 3]), 6);
//! assert!(sum([1, i32::na(), 3]).is_na());
//! assert_eq!([2_i32, 3, 4].na_prod(), 24);
//! ```

pub use na_algorithm;
pub use na_core;

pub use na_algorithm::{
    exp, log, map_missing, na_map, prod, prod_nona, sqrt, sum, sum_nona, transform,
    transform_slice, NaMap, NaSliceExt, RealFn, Reducer,
};
pub use na_core::{any_na, Element, ElementKind, EmptyProduct, Error, ReduceConfig, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        any_na, exp, log, prod, prod_nona, sqrt, sum, sum_nona, Element, ElementKind,
        EmptyProduct, NaSliceExt, RealFn, ReduceConfig, Reducer,
    };
}
