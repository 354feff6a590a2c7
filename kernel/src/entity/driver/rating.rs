use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DriverRating(f64);

impl DriverRating {
    pub fn new(rating: impl Into<f64>) -> Self {
        Self(rating.into())
    }
}
