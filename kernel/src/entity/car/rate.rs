use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Rental cost per day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DailyRate(f64);

impl DailyRate {
    pub fn new(rate: impl Into<f64>) -> Self {
        Self(rate.into())
    }
}
