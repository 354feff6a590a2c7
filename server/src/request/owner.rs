use crate::controller::TryIntake;
use application::transfer::{ApprovalAction, ApproveBookingDto};
use error_stack::Report;
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct ApprovalRequest {
    rental_id: Uuid,
    action: String,
}

pub struct OwnerTransformer;

impl TryIntake<(Uuid, ApprovalRequest)> for OwnerTransformer {
    type To = ApproveBookingDto;
    type Error = Report<KernelError>;
    fn emit(&self, (acting_user_id, req): (Uuid, ApprovalRequest)) -> Result<Self::To, Self::Error> {
        let action = match req.action.as_str() {
            "approve" => ApprovalAction::Approve,
            "reject" => ApprovalAction::Reject,
            other => {
                return Err(Report::new(KernelError::Validation)
                    .attach_printable(format!("unknown approval action: {other}")))
            }
        };
        Ok(ApproveBookingDto {
            acting_user_id,
            rental_id: req.rental_id,
            action,
        })
    }
}
