use error_stack::Report;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use vodca::{AsRefln, Fromln, References};

use crate::KernelError;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Span of a rental, from handover to agreed return.
///
/// Billing is by exact fractional days, not rounded up.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References)]
pub struct RentalPeriod {
    starts_at: OffsetDateTime,
    ends_at: OffsetDateTime,
}

impl RentalPeriod {
    pub fn new(
        starts_at: OffsetDateTime,
        ends_at: OffsetDateTime,
    ) -> error_stack::Result<Self, KernelError> {
        if ends_at <= starts_at {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("return date must be after rental date"));
        }
        Ok(Self { starts_at, ends_at })
    }

    /// Rehydration from the store; the range was validated when the rental
    /// was created.
    pub fn from_raw(starts_at: OffsetDateTime, ends_at: OffsetDateTime) -> Self {
        Self { starts_at, ends_at }
    }

    pub fn days(&self) -> f64 {
        (self.ends_at - self.starts_at).as_seconds_f64() / SECONDS_PER_DAY
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct RequestedAt(OffsetDateTime);

impl RequestedAt {
    pub fn new(at: impl Into<OffsetDateTime>) -> Self {
        Self(at.into())
    }

    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use super::RentalPeriod;

    #[test]
    fn period_rejects_inverted_range() {
        let result = RentalPeriod::new(
            datetime!(2024-03-03 10:00 UTC),
            datetime!(2024-03-01 10:00 UTC),
        );
        assert!(result.is_err());
    }

    #[test]
    fn exact_two_days() {
        let period = RentalPeriod::new(
            datetime!(2024-03-01 10:00 UTC),
            datetime!(2024-03-03 10:00 UTC),
        )
        .unwrap();
        assert_eq!(period.days(), 2.0);
    }

    #[test]
    fn fractional_days_are_not_rounded() {
        let period = RentalPeriod::new(
            datetime!(2024-03-01 10:00 UTC),
            datetime!(2024-03-02 22:00 UTC),
        )
        .unwrap();
        assert_eq!(period.days(), 1.5);
    }
}
