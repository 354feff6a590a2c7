use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Flat package price, not scaled by rental duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct PackageCost(f64);

impl PackageCost {
    pub fn new(cost: impl Into<f64>) -> Self {
        Self(cost.into())
    }
}
