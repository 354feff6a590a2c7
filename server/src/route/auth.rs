use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{LoginRequest, RegisterRequest, UserTransformer};
use crate::response::UserPresenter;
use application::service::AccountService;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

pub trait AuthRouter {
    fn route_auth(self) -> Self;
}

impl AuthRouter for Router<AppModule> {
    fn route_auth(self) -> Self {
        self.route(
            "/register",
            post(
                |State(handler): State<AppModule>, Json(req): Json<RegisterRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| handler.register(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/login",
            post(
                |State(handler): State<AppModule>, Json(req): Json<LoginRequest>| async move {
                    Controller::new(UserTransformer, UserPresenter)
                        .intake(req)
                        .handle(|dto| handler.login(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
