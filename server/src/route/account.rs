use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{TopUpRequest, UserTransformer};
use crate::response::{EnrollmentPresenter, MembershipPresenter, UserPresenter};
use application::service::{DepositService, MembershipService};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};

pub trait AccountRouter {
    fn route_account(self) -> Self;
}

impl AccountRouter for Router<AppModule> {
    fn route_account(self) -> Self {
        self.route(
            "/users/register-membership",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new((), EnrollmentPresenter)
                        .bypass(|| handler.register_membership(user_id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/get-membership",
            get(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new((), MembershipPresenter)
                        .bypass(|| handler.get_membership(user_id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/get-deposit",
            get(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new((), UserPresenter)
                        .bypass(|| handler.get_deposit(user_id))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/topup",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser,
                 Json(req): Json<TopUpRequest>| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new(UserTransformer, UserPresenter)
                        .intake((user_id, req))
                        .handle(|dto| handler.top_up(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
