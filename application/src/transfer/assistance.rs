use time::OffsetDateTime;
use uuid::Uuid;

use kernel::prelude::entity::{Assistance, DestructAssistance};

pub struct CallAssistanceDto {
    pub user_id: Uuid,
    pub rental_id: Uuid,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssistanceDto {
    pub assistance_id: Uuid,
    pub rental_id: Uuid,
    pub user_id: Uuid,
    pub requested_at: OffsetDateTime,
    pub description: String,
    pub location: String,
    pub location_link: String,
}

impl AssistanceDto {
    pub fn from_assistance(value: Assistance, location_link: String) -> Self {
        let DestructAssistance {
            id,
            rental_id,
            user_id,
            requested_at,
            description,
            location,
        } = value.into_destruct();
        Self {
            assistance_id: id.into(),
            rental_id: rental_id.into(),
            user_id: user_id.into(),
            requested_at: requested_at.into(),
            description: description.into(),
            location: location.into(),
            location_link,
        }
    }
}
