mod id;
mod tier;

pub use self::{id::*, tier::*};
use crate::entity::user::UserId;
use destructure::Destructure;
use vodca::References;

/// At most one membership per user; the tier never changes once assigned.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Membership {
    id: MembershipId,
    user_id: UserId,
    tier: MembershipTier,
}

impl Membership {
    pub fn new(id: MembershipId, user_id: UserId, tier: MembershipTier) -> Self {
        Self { id, user_id, tier }
    }
}
