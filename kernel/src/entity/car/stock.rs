use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Units of one car model available to book. Never negative, never restored:
/// approval consumes a unit and cancellation does not give it back.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct CarStock(i32);

impl CarStock {
    pub fn new(stock: impl Into<i32>) -> Self {
        Self(stock.into())
    }

    pub fn is_available(&self) -> bool {
        self.0 > 0
    }

    /// One unit out. `None` when nothing is left to hand over.
    pub fn decrement(&self) -> Option<Self> {
        if self.0 > 0 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod test {
    use super::CarStock;

    #[test]
    fn decrement_stops_at_zero() {
        let stock = CarStock::new(1);
        let stock = stock.decrement().unwrap();
        assert_eq!(stock, CarStock::new(0));
        assert!(stock.decrement().is_none());
        assert!(!stock.is_available());
    }
}
