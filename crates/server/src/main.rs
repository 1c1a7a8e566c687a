// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod identity;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use iec_tracker_api::{
    AcknowledgeAndRouteRequest, ApiError, CaseResponse, CreateCaseRequest, DashboardResponse,
    DeleteCaseResponse, EligibleAssigneesResponse, NextTransitionResponse, SubmitNoticePciRequest,
    TransitionResponse, UpdateCaseRequest, WorkflowResponse, WriteCaseResponse,
    acknowledge_and_route, create_case, delete_case, get_case, get_dashboard,
    get_eligible_assignees, get_next_transition, list_workflow, submit_notice_pci, update_case,
};
use iec_tracker_domain::{
    CASE_WORKFLOW_STEPS, DEFAULT_TIMEZONE, DomainError, local_date, parse_timezone,
    validate_workflow_steps,
};
use iec_tracker_persistence::{PersistenceError, SqlitePersistence};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use time::Date;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// IEC Case Tracker Server - HTTP server for the IEC case tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,

    /// IANA timezone used to decide what "today" is
    #[arg(short, long, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    /// JSON file of user records to import at start-up
    #[arg(short, long)]
    users: Option<PathBuf>,
}

/// Errors that stop the server from starting.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The persistence layer failed.
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// A configuration value was rejected.
    #[error("Invalid configuration: {0}")]
    Configuration(DomainError),

    /// The workflow table failed validation.
    #[error("Invalid workflow definition: {0}")]
    Workflow(DomainError),

    /// The users file could not be read.
    #[error("Failed to read users file '{path}': {source}")]
    UsersFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The users file is not valid JSON.
    #[error("Failed to parse users file '{path}': {source}")]
    UsersFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The bind address is malformed.
    #[error("Invalid bind address: {0}")]
    Address(#[from] std::net::AddrParseError),

    /// Binding or serving failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<SqlitePersistence>>,
    /// The office timezone.
    timezone: Tz,
    /// Pins "today" to a fixed date instead of the clock.
    fixed_today: Option<Date>,
}

impl AppState {
    fn new(persistence: SqlitePersistence, timezone: Tz) -> Self {
        Self {
            persistence: Arc::new(Mutex::new(persistence)),
            timezone,
            fixed_today: None,
        }
    }

    fn today(&self) -> Result<Date, HttpError> {
        if let Some(today) = self.fixed_today {
            return Ok(today);
        }
        local_date(Utc::now(), self.timezone).map_err(|e| {
            error!(error = %e, "Failed to compute local date");
            HttpError {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: e.to_string(),
            }
        })
    }
}

/// Query string identifying the acting user.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ActorQuery {
    /// The acting user's ID.
    actor_id: i64,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::StateConflict { .. } | ApiError::DomainRuleViolation { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::WorkflowNotConfigured { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error while handling request");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/workflow`.
#[allow(clippy::unused_async)]
async fn handle_list_workflow() -> Json<WorkflowResponse> {
    Json(list_workflow())
}

/// Handler for POST `/cases`.
async fn handle_create_case(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateCaseRequest>,
) -> Result<Json<WriteCaseResponse>, HttpError> {
    info!(actor_id = req.actor_id, "Handling create_case request");
    let today: Date = app_state.today()?;

    let mut persistence = app_state.persistence.lock().await;
    let response: WriteCaseResponse = create_case(&mut persistence, req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/cases/{case_id}`.
async fn handle_get_case(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<CaseResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: CaseResponse = get_case(&mut persistence, case_id, query.actor_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for PUT `/cases/{case_id}`.
async fn handle_update_case(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Json(req): Json<UpdateCaseRequest>,
) -> Result<Json<WriteCaseResponse>, HttpError> {
    info!(case_id, actor_id = req.actor_id, "Handling update_case request");

    let mut persistence = app_state.persistence.lock().await;
    let response: WriteCaseResponse = update_case(&mut persistence, case_id, req)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for DELETE `/cases/{case_id}`.
async fn handle_delete_case(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<DeleteCaseResponse>, HttpError> {
    info!(case_id, actor_id = query.actor_id, "Handling delete_case request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteCaseResponse = delete_case(&mut persistence, case_id, query.actor_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/dashboard`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<DashboardResponse>, HttpError> {
    let today: Date = app_state.today()?;

    let mut persistence = app_state.persistence.lock().await;
    let response: DashboardResponse = get_dashboard(&mut persistence, query.actor_id, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/cases/{case_id}/eligible_assignees`.
async fn handle_eligible_assignees(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<EligibleAssigneesResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: EligibleAssigneesResponse =
        get_eligible_assignees(&mut persistence, case_id, query.actor_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for GET `/cases/{case_id}/next_transition`.
async fn handle_next_transition(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Query(query): Query<ActorQuery>,
) -> Result<Json<NextTransitionResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: NextTransitionResponse =
        get_next_transition(&mut persistence, case_id, query.actor_id)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/cases/{case_id}/acknowledge_and_route`.
async fn handle_acknowledge_and_route(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Json(req): Json<AcknowledgeAndRouteRequest>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(
        case_id,
        actor_id = req.actor_id,
        assign_to = req.assign_to,
        "Handling acknowledge_and_route request"
    );
    let today: Date = app_state.today()?;

    let mut persistence = app_state.persistence.lock().await;
    let response: TransitionResponse =
        acknowledge_and_route(&mut persistence, case_id, req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Handler for POST `/cases/{case_id}/submit_notice_pci`.
async fn handle_submit_notice_pci(
    AxumState(app_state): AxumState<AppState>,
    Path(case_id): Path<i64>,
    Json(req): Json<SubmitNoticePciRequest>,
) -> Result<Json<TransitionResponse>, HttpError> {
    info!(
        case_id,
        actor_id = req.actor_id,
        "Handling submit_notice_pci request"
    );
    let today: Date = app_state.today()?;

    let mut persistence = app_state.persistence.lock().await;
    let response: TransitionResponse = submit_notice_pci(&mut persistence, case_id, req, today)?;
    drop(persistence);

    Ok(Json(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/workflow", get(handle_list_workflow))
        .route("/cases", post(handle_create_case))
        .route(
            "/cases/{case_id}",
            get(handle_get_case)
                .put(handle_update_case)
                .delete(handle_delete_case),
        )
        .route("/dashboard", get(handle_dashboard))
        .route(
            "/cases/{case_id}/eligible_assignees",
            get(handle_eligible_assignees),
        )
        .route(
            "/cases/{case_id}/next_transition",
            get(handle_next_transition),
        )
        .route(
            "/cases/{case_id}/acknowledge_and_route",
            post(handle_acknowledge_and_route),
        )
        .route(
            "/cases/{case_id}/submit_notice_pci",
            post(handle_submit_notice_pci),
        )
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing IEC Case Tracker Server");

    validate_workflow_steps(&CASE_WORKFLOW_STEPS).map_err(ServerError::Workflow)?;
    let timezone: Tz = parse_timezone(&args.timezone).map_err(ServerError::Configuration)?;
    info!(timezone = %timezone, "Using office timezone");

    let mut persistence: SqlitePersistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path.display());
        SqlitePersistence::new_with_file(db_path)?
    } else {
        warn!("Using in-memory database; data is lost on shutdown");
        SqlitePersistence::new_in_memory()?
    };

    if let Some(users_path) = &args.users {
        let users = identity::read_users_file(users_path)?;
        identity::import_users(&mut persistence, &users)?;
    }

    let app: Router = build_router(AppState::new(persistence, timezone));

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
