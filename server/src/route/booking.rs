use crate::auth::AuthorizedUser;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{BookingRequest, BookingTransformer, CallAssistanceRequest, PaymentRequest};
use crate::response::{BookingPresenter, PaymentPresenter};
use application::service::{AssistanceService, BookingService, PaymentService};
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

pub trait BookingRouter {
    fn route_booking(self) -> Self;
}

impl BookingRouter for Router<AppModule> {
    fn route_booking(self) -> Self {
        self.route(
            "/users/booking",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser,
                 Json(req): Json<BookingRequest>| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake((user_id, req))
                        .handle(|dto| handler.book(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/making-payment",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser,
                 Json(req): Json<PaymentRequest>| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new(BookingTransformer, PaymentPresenter)
                        .intake((user_id, req))
                        .handle(|dto| handler.make_payment(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/users/call-assistance",
            post(
                |State(handler): State<AppModule>,
                 AuthorizedUser(identity): AuthorizedUser,
                 Json(req): Json<CallAssistanceRequest>| async move {
                    let user_id = *identity.user_id().as_ref();
                    Controller::new(BookingTransformer, BookingPresenter)
                        .intake((user_id, req))
                        .handle(|dto| handler.call_assistance(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
