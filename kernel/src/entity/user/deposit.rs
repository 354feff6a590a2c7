use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Prepaid credit on a user account.
///
/// May go negative: payment debits the full rental cost with no floor check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct DepositBalance(f64);

impl DepositBalance {
    pub fn new(amount: impl Into<f64>) -> Self {
        Self(amount.into())
    }

    pub fn credit(&self, amount: f64) -> Self {
        Self(self.0 + amount)
    }

    pub fn debit(&self, amount: f64) -> Self {
        Self(self.0 - amount)
    }
}

impl Default for DepositBalance {
    fn default() -> Self {
        Self(0.0)
    }
}
