use crate::{
    access_log::access_log,
    handler::{
        default_handler::default_handler,
        ping_handler::{method_not_allowed, ping, post_ping},
    },
    state::AppState,
};
use axum::{
    Router,
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
    middleware,
    routing::get,
};
use std::any::Any;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, set_header::SetResponseHeaderLayer};

pub const SERVER_HEADER: &str = "Rust/Axum/Ping";

pub fn create_router(app_state: AppState) -> Router {
    let debug = app_state.config.debug;

    let router = Router::new()
        .route(
            "/ping",
            // axum answers HEAD with the GET handler unless told otherwise
            get(ping)
                .post(post_ping)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
        .fallback(default_handler)
        .with_state(app_state);

    with_layers(router, debug)
}

/// Access log outermost so it sees the 500s produced by the panic layer.
pub fn with_layers(router: Router, debug: bool) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(access_log))
            .layer(SetResponseHeaderLayer::overriding(
                header::SERVER,
                HeaderValue::from_static(SERVER_HEADER),
            ))
            .layer(CatchPanicLayer::custom(
                move |panic: Box<dyn Any + Send + 'static>| panic_response(panic, debug),
            )),
    )
}

fn panic_response(panic: Box<dyn Any + Send + 'static>, debug: bool) -> Response<Body> {
    let body = if debug {
        let details = if let Some(s) = panic.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic message".to_string()
        };
        Body::from(format!("{}\n", details))
    } else {
        Body::empty()
    };

    let mut response = Response::new(body);
    *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
    response
}
