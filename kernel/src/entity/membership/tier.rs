use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Membership discount level. A user without any membership record simply
/// pays full price; that absence is not an error.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum MembershipTier {
    Silver,
    Gold,
    Platinum,
}

impl MembershipTier {
    /// Factor applied to the pre-discount total at booking time.
    pub fn multiplier(&self) -> f64 {
        match self {
            MembershipTier::Silver => 0.90,
            MembershipTier::Gold => 0.80,
            MembershipTier::Platinum => 0.70,
        }
    }

    /// Fraction taken off the pre-discount total.
    pub fn discount_fraction(&self) -> f64 {
        match self {
            MembershipTier::Silver => 0.10,
            MembershipTier::Gold => 0.20,
            MembershipTier::Platinum => 0.30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MembershipTier::Silver => "Silver",
            MembershipTier::Gold => "Gold",
            MembershipTier::Platinum => "Platinum",
        }
    }
}

impl FromStr for MembershipTier {
    type Err = Report<KernelError>;

    fn from_str(tier: &str) -> Result<Self, Self::Err> {
        match tier {
            "Silver" => Ok(MembershipTier::Silver),
            "Gold" => Ok(MembershipTier::Gold),
            "Platinum" => Ok(MembershipTier::Platinum),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown membership tier: {other}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::MembershipTier;

    #[test]
    fn multiplier_decreases_with_tier() {
        let mut last = 1.0;
        for tier in [
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Platinum,
        ] {
            assert!(tier.multiplier() < last);
            last = tier.multiplier();
        }
    }

    #[test]
    fn multiplier_and_fraction_are_complementary() {
        for tier in [
            MembershipTier::Silver,
            MembershipTier::Gold,
            MembershipTier::Platinum,
        ] {
            assert!((tier.multiplier() + tier.discount_fraction() - 1.0).abs() < f64::EPSILON);
        }
    }
}
