use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Rental lifecycle. `Book` is the initial state; `Rent` and `Cancel` are
/// terminal. Stock is consumed on the `Paid -> Rent` transition only and is
/// never given back on cancellation.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RentalStatus {
    Book,
    Paid,
    Rent,
    Cancel,
}

impl RentalStatus {
    /// `Book -> Paid`, triggered by the payment operation.
    pub fn pay(self) -> error_stack::Result<Self, KernelError> {
        match self {
            RentalStatus::Book => Ok(RentalStatus::Paid),
            other => Err(transition_error(other, RentalStatus::Paid)),
        }
    }

    /// `Paid -> Rent`, triggered by owner approval.
    pub fn approve(self) -> error_stack::Result<Self, KernelError> {
        match self {
            RentalStatus::Paid => Ok(RentalStatus::Rent),
            other => Err(transition_error(other, RentalStatus::Rent)),
        }
    }

    /// `Book -> Cancel` or `Paid -> Cancel`, triggered by owner rejection.
    /// Terminal states stay where they are.
    pub fn reject(self) -> error_stack::Result<Self, KernelError> {
        match self {
            RentalStatus::Book | RentalStatus::Paid => Ok(RentalStatus::Cancel),
            other => Err(transition_error(other, RentalStatus::Cancel)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RentalStatus::Book => "Book",
            RentalStatus::Paid => "Paid",
            RentalStatus::Rent => "Rent",
            RentalStatus::Cancel => "Cancel",
        }
    }
}

fn transition_error(from: RentalStatus, to: RentalStatus) -> Report<KernelError> {
    Report::new(KernelError::InvalidStateTransition).attach_printable(format!(
        "cannot move rental from '{}' to '{}'",
        from.as_str(),
        to.as_str()
    ))
}

impl FromStr for RentalStatus {
    type Err = Report<KernelError>;

    fn from_str(status: &str) -> Result<Self, Self::Err> {
        match status {
            "Book" => Ok(RentalStatus::Book),
            "Paid" => Ok(RentalStatus::Paid),
            "Rent" => Ok(RentalStatus::Rent),
            "Cancel" => Ok(RentalStatus::Cancel),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown rental status: {other}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::KernelError;

    use super::RentalStatus;

    #[test]
    fn booked_rental_can_be_paid() {
        assert_eq!(RentalStatus::Book.pay().unwrap(), RentalStatus::Paid);
    }

    #[test]
    fn rent_requires_payment_first() {
        let report = RentalStatus::Book.approve().unwrap_err();
        assert!(matches!(
            report.current_context(),
            KernelError::InvalidStateTransition
        ));
        assert_eq!(RentalStatus::Paid.approve().unwrap(), RentalStatus::Rent);
    }

    #[test]
    fn approval_is_not_repeatable() {
        let status = RentalStatus::Paid.approve().unwrap();
        assert!(status.approve().is_err());
    }

    #[test]
    fn reject_before_and_after_payment() {
        assert_eq!(RentalStatus::Book.reject().unwrap(), RentalStatus::Cancel);
        assert_eq!(RentalStatus::Paid.reject().unwrap(), RentalStatus::Cancel);
    }

    #[test]
    fn terminal_states_stay_terminal() {
        assert!(RentalStatus::Rent.reject().is_err());
        assert!(RentalStatus::Cancel.pay().is_err());
        assert!(RentalStatus::Cancel.reject().is_err());
        assert!(RentalStatus::Rent.pay().is_err());
    }
}
