use crate::entity::car::DailyRate;
use crate::entity::common::RentalPeriod;
use crate::entity::membership::MembershipTier;
use crate::entity::package::PackageCost;
use crate::entity::rental::TotalCost;

/// Flat per-day chauffeur surcharge.
pub const DRIVER_DAILY_FEE: f64 = 100.0;
/// Charged once when both pickup and dropoff locations are given.
pub const PICKUP_DROPOFF_FEE: f64 = 100.0;
pub const AIRPORT_TRANSFER_FEE: f64 = 50.0;
pub const CONCIERGE_FEE: f64 = 100.0;

/// Everything the pricing rules need, gathered up front by the caller.
/// Computing the total never touches the store and has no side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalQuote {
    period: RentalPeriod,
    daily_rate: DailyRate,
    with_driver: bool,
    package_cost: Option<PackageCost>,
    pickup_dropoff: bool,
    airport_transfer: bool,
    concierge_services: bool,
    tier: Option<MembershipTier>,
}

impl RentalQuote {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        period: RentalPeriod,
        daily_rate: DailyRate,
        with_driver: bool,
        package_cost: Option<PackageCost>,
        pickup_dropoff: bool,
        airport_transfer: bool,
        concierge_services: bool,
        tier: Option<MembershipTier>,
    ) -> Self {
        Self {
            period,
            daily_rate,
            with_driver,
            package_cost,
            pickup_dropoff,
            airport_transfer,
            concierge_services,
            tier,
        }
    }

    pub fn days(&self) -> f64 {
        self.period.days()
    }

    /// Duration times rate, plus the selected surcharges, then the
    /// membership multiplier. Fractional days are billed exactly.
    pub fn total(&self) -> TotalCost {
        let days = self.period.days();
        let mut total = days * self.daily_rate.as_ref();

        if self.with_driver {
            total += days * DRIVER_DAILY_FEE;
        }
        if let Some(cost) = &self.package_cost {
            total += cost.as_ref();
        }
        if self.pickup_dropoff {
            total += PICKUP_DROPOFF_FEE;
        }
        if self.airport_transfer {
            total += AIRPORT_TRANSFER_FEE;
        }
        if self.concierge_services {
            total += CONCIERGE_FEE;
        }

        let multiplier = self.tier.map(|tier| tier.multiplier()).unwrap_or(1.0);
        TotalCost::new(total * multiplier)
    }
}

#[cfg(test)]
mod test {
    use time::macros::datetime;

    use crate::entity::car::DailyRate;
    use crate::entity::common::RentalPeriod;
    use crate::entity::membership::MembershipTier;
    use crate::entity::package::PackageCost;

    use super::{RentalQuote, DRIVER_DAILY_FEE};

    fn two_day_period() -> RentalPeriod {
        RentalPeriod::new(
            datetime!(2024-05-01 09:00 UTC),
            datetime!(2024-05-03 09:00 UTC),
        )
        .unwrap()
    }

    fn bare_quote(tier: Option<MembershipTier>) -> RentalQuote {
        RentalQuote::new(
            two_day_period(),
            DailyRate::new(500.0),
            false,
            None,
            false,
            false,
            false,
            tier,
        )
    }

    #[test]
    fn bare_rental_is_duration_times_rate() {
        assert_eq!(*bare_quote(None).total().as_ref(), 1000.0);
    }

    #[test]
    fn gold_member_pays_eighty_percent() {
        assert_eq!(
            *bare_quote(Some(MembershipTier::Gold)).total().as_ref(),
            800.0
        );
    }

    #[test]
    fn driver_adds_daily_fee_independently() {
        let without = RentalQuote::new(
            two_day_period(),
            DailyRate::new(500.0),
            false,
            Some(PackageCost::new(250.0)),
            true,
            true,
            true,
            None,
        );
        let with = RentalQuote::new(
            two_day_period(),
            DailyRate::new(500.0),
            true,
            Some(PackageCost::new(250.0)),
            true,
            true,
            true,
            None,
        );
        let difference = with.total().as_ref() - without.total().as_ref();
        assert_eq!(difference, 2.0 * DRIVER_DAILY_FEE);
    }

    #[test]
    fn surcharges_stack_additively() {
        let quote = RentalQuote::new(
            two_day_period(),
            DailyRate::new(500.0),
            true,
            Some(PackageCost::new(300.0)),
            true,
            true,
            true,
            None,
        );
        // 1000 + 200 (driver) + 300 (package) + 100 + 50 + 100
        assert_eq!(*quote.total().as_ref(), 1750.0);
    }

    #[test]
    fn package_cost_is_flat_not_daily() {
        let one_day = RentalQuote::new(
            RentalPeriod::new(
                datetime!(2024-05-01 09:00 UTC),
                datetime!(2024-05-02 09:00 UTC),
            )
            .unwrap(),
            DailyRate::new(500.0),
            false,
            Some(PackageCost::new(300.0)),
            false,
            false,
            false,
            None,
        );
        assert_eq!(*one_day.total().as_ref(), 800.0);
    }

    #[test]
    fn tiers_never_increase_the_price() {
        let none = *bare_quote(None).total().as_ref();
        let silver = *bare_quote(Some(MembershipTier::Silver)).total().as_ref();
        let gold = *bare_quote(Some(MembershipTier::Gold)).total().as_ref();
        let platinum = *bare_quote(Some(MembershipTier::Platinum)).total().as_ref();
        assert!(none >= silver && silver >= gold && gold >= platinum);
    }

    #[test]
    fn half_days_are_billed_exactly() {
        let quote = RentalQuote::new(
            RentalPeriod::new(
                datetime!(2024-05-01 09:00 UTC),
                datetime!(2024-05-02 21:00 UTC),
            )
            .unwrap(),
            DailyRate::new(500.0),
            false,
            None,
            false,
            false,
            false,
            None,
        );
        assert_eq!(*quote.total().as_ref(), 750.0);
    }
}
