use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use log::{debug, error, info};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::client::PartyPlanner;
use crate::request::{ErrorResponse, PlanRequest};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError
{   error: crate::error::Error
  , distinct: bool
}

impl AppError
{   fn new(error: crate::error::Error, planner: &PartyPlanner) -> Self
    {   AppError
        {   error
          , distinct: planner.config().distinct_status_codes
        }
    }
}

impl IntoResponse for AppError
{   fn into_response(self) -> axum::response::Response
    {   let status = StatusCode::from_u16(self.error.status_code(self.distinct))
          .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self.error))).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn build_router(planner: Arc<PartyPlanner>) -> Router
{   let public_dir = planner.config().public_dir.clone();
    Router::new()
      .route("/api/party-plan", post(party_plan))
      .fallback_service(ServeDir::new(public_dir))
      .layer(CorsLayer::permissive())
      .with_state(planner)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(planner: Arc<PartyPlanner>)
  -> Result<(), crate::error::Error>
{   let config = planner.config().clone();
    let addr: SocketAddr = format!("{}:{}", config.bind_addr, config.port)
      .parse()
      .map_err(|e| crate::error::Error::InvalidConfiguration(
        format!("bad listen address: {}", e)
      ))?;

    let app = build_router(planner);
    let listener = tokio::net::TcpListener::bind(addr).await
      .map_err(|e| crate::error::Error::Other(e.to_string()))?;
    info!("Server running at http://localhost:{}", config.port);
    info!("Static files are served from {}", config.public_dir.display());

    axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await
      .map_err(|e| crate::error::Error::Other(e.to_string()))?;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal()
{   if let Err(e) = tokio::signal::ctrl_c().await
    {   error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// `POST /api/party-plan`
///
/// If the caller disconnects, hyper drops this future and with it the
/// pending upstream request.
async fn party_plan(
  State(planner): State<Arc<PartyPlanner>>
, body: Bytes
) -> Result<axum::response::Response, AppError>
{   let req = PlanRequest::from_body(&body)
      .map_err(|e| AppError::new(e, &planner))?;
    debug!("Received party plan request: {:?}", req);

    match planner.generate_plan(&req).await
    {   Ok(plan) => Ok(Json(plan).into_response())
      , Err(e) => {
          error!("Failed to generate party plan: {} ({:?})", e, e.detail());
          Err(AppError::new(e, &planner))
        }
    }
}
