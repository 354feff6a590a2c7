use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{ApprovalRequest, OwnerTransformer};
use crate::response::{ApprovalPresenter, ReportPresenter};
use application::service::{ApprovalService, ReportService};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait OwnerRouter {
    fn route_owner(self) -> Self;
}

impl OwnerRouter for Router<AppModule> {
    fn route_owner(self) -> Self {
        self.route(
            "/owner/approve-booking",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser,
                 Json(req): Json<ApprovalRequest>| async move {
                    let acting_user_id = *identity.user_id().as_ref();
                    Controller::new(OwnerTransformer, ApprovalPresenter)
                        .try_intake((acting_user_id, req))
                        .map_err(ErrorStatus::from)?
                        .handle(|dto| handler.process_booking(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/owner/report",
            get(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser| async move {
                    let acting_user_id = *identity.user_id().as_ref();
                    Controller::new((), ReportPresenter)
                        .bypass(|| handler.rental_report(acting_user_id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
