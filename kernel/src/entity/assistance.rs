mod description;
mod id;
mod location;

pub use self::{description::*, id::*, location::*};
use crate::entity::common::RequestedAt;
use crate::entity::rental::RentalId;
use crate::entity::user::UserId;
use destructure::Destructure;
use vodca::References;

/// Roadside assistance request raised against an active rental.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Assistance {
    id: AssistanceId,
    rental_id: RentalId,
    user_id: UserId,
    requested_at: RequestedAt,
    description: AssistanceDescription,
    location: AssistanceLocation,
}

impl Assistance {
    pub fn new(
        id: AssistanceId,
        rental_id: RentalId,
        user_id: UserId,
        requested_at: RequestedAt,
        description: AssistanceDescription,
        location: AssistanceLocation,
    ) -> Self {
        Self {
            id,
            rental_id,
            user_id,
            requested_at,
            description,
            location,
        }
    }
}
