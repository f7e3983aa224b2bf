//! Element kinds, missing-value sentinels and identities
//!
//! This crate is the type foundation of na-stats. It answers, per element
//! kind, three questions at compile time: what is the missing sentinel, what
//! are zero and one, and is a given value missing. The algorithms in
//! `na-algorithm` are written once against the [`Element`] trait.
//!
//! # Example
//!
//! ```rust
//! use na_core::{Element, ElementKind};
//!
//! assert_eq!(<i32 as Element>::KIND, ElementKind::Integer);
//! assert!(i32::na().is_na());
//! assert!(f64::na().is_na());
//! assert!(!f64::NAN.is_na());
//! ```

pub mod config;
pub mod element;
pub mod error;

// Re-export core types
pub use config::{EmptyProduct, ReduceConfig};
pub use element::{any_na, Element, ElementKind, NA_INTEGER, NA_REAL_BITS};
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
