use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::response::CatalogPresenter;
use application::service::CatalogService;
use axum::extract::State;
use axum::routing::get;
use axum::Router;

pub trait CatalogRouter {
    fn route_catalog(self) -> Self;
}

impl CatalogRouter for Router<AppModule> {
    fn route_catalog(self) -> Self {
        self.route(
            "/cars",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), CatalogPresenter)
                    .bypass(|| handler.get_available_cars())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/drivers",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), CatalogPresenter)
                    .bypass(|| handler.get_drivers())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
        .route(
            "/packages",
            get(|State(handler): State<AppModule>| async move {
                Controller::new((), CatalogPresenter)
                    .bypass(|| handler.get_packages())
                    .await
                    .map_err(ErrorStatus::from)
            }),
        )
    }
}
