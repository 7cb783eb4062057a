mod extract;
mod handlers;
mod schema;

use std::net::SocketAddr;

use anyhow::Context;
use axum::{
  Router,
  http::Method,
  routing::{get, post},
};
use tower::ServiceBuilder;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};
use tower_http::{
  cors::{Any, CorsLayer},
  trace::TraceLayer,
};

use crate::{prelude::*, state::AppState};

pub fn router(app: Arc<AppState>) -> Router {
  Router::new()
    .route(
      "/auth/register",
      post(handlers::register).options(handlers::preflight),
    )
    .route("/auth/login", post(handlers::login).options(handlers::preflight))
    .route(
      "/user/profile",
      get(handlers::profile)
        .put(handlers::update_profile)
        .options(handlers::preflight),
    )
    .route(
      "/user/dashboard",
      get(handlers::dashboard).options(handlers::preflight),
    )
    .route(
      "/transactions",
      get(handlers::transactions).options(handlers::preflight),
    )
    .route(
      "/investment/packages",
      get(handlers::packages).options(handlers::preflight),
    )
    .route(
      "/admin/users",
      get(handlers::admin_users).options(handlers::preflight),
    )
    .method_not_allowed_fallback(handlers::method_not_allowed)
    .fallback(handlers::not_found)
    .layer(
      ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
        CorsLayer::new()
          .allow_origin(Any)
          .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
          ])
          .allow_headers(Any),
      ),
    )
    .with_state(app)
}

pub async fn serve(app: Arc<AppState>) -> anyhow::Result<()> {
  let governor_conf = Arc::new(
    GovernorConfigBuilder::default()
      .per_second(2)
      .burst_size(100)
      .finish()
      .context("Failed to build rate limiter config")?,
  );

  let governor_limiter = governor_conf.limiter().clone();

  tokio::spawn(async move {
    loop {
      tokio::time::sleep(Duration::from_secs(60)).await;
      governor_limiter.retain_recent();
    }
  });

  let port = app.config.port;
  let router = router(app)
    .layer(GovernorLayer::new(governor_conf))
    .into_make_service_with_connect_info::<SocketAddr>();

  let addr = SocketAddr::from(([0, 0, 0, 0], port));
  let listener = tokio::net::TcpListener::bind(addr)
    .await
    .with_context(|| format!("Failed to bind {addr}"))?;

  info!("HTTP server listening on {addr}");

  axum::serve(listener, router)
    .with_graceful_shutdown(shutdown_signal())
    .await
    .context("Server error")
}

async fn shutdown_signal() {
  if let Err(err) = tokio::signal::ctrl_c().await {
    error!("Failed to listen for shutdown signal: {err}");
    std::future::pending::<()>().await;
  }
  info!("Shutdown signal received");
}
