//! Configuration for the reduction engine

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Value returned by a product over an empty sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyProduct {
    /// The multiplicative identity, `one()`
    #[default]
    Identity,

    /// The additive identity, `zero()`
    ///
    /// Kept for hosts that depend on the historical result.
    Zero,
}

impl EmptyProduct {
    /// Get the name of this convention
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Zero => "zero",
        }
    }
}

impl FromStr for EmptyProduct {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" | "one" => Ok(Self::Identity),
            "zero" | "legacy" => Ok(Self::Zero),
            other => Err(Error::InvalidParameter(format!(
                "unknown empty product convention '{other}', expected 'identity' or 'zero'"
            ))),
        }
    }
}

/// Settings shared by all reductions of a `Reducer`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReduceConfig {
    /// Result of `prod` and `prod_nona` on an empty sequence
    #[serde(default)]
    pub empty_product: EmptyProduct,
}

impl ReduceConfig {
    /// Configuration reproducing the historical behavior (empty product is zero)
    pub fn legacy() -> Self {
        Self {
            empty_product: EmptyProduct::Zero,
        }
    }

    /// Set the empty product convention
    pub fn with_empty_product(mut self, empty_product: EmptyProduct) -> Self {
        self.empty_product = empty_product;
        self
    }
}
