use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Amount charged for the whole rental, locked in at booking time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct TotalCost(f64);

impl TotalCost {
    pub fn new(cost: impl Into<f64>) -> Self {
        Self(cost.into())
    }
}
