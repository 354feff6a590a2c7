use uuid::Uuid;

use kernel::prelude::entity::{DestructMembership, Membership};

#[derive(Debug, Clone, PartialEq)]
pub struct MembershipDto {
    pub membership_id: Uuid,
    pub user_id: Uuid,
    pub email: String,
    pub discount_level: String,
}

impl MembershipDto {
    pub fn from_membership(value: Membership, email: String) -> Self {
        let DestructMembership { id, user_id, tier } = value.into_destruct();
        Self {
            membership_id: id.into(),
            user_id: user_id.into(),
            email,
            discount_level: tier.as_str().to_string(),
        }
    }
}
