use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use domain::stores::{ConfigStore, EmployeeStore, PingStore};
use shared::jwt::JwtKeys;

use crate::config::Config;
use crate::middleware::{require_admin, require_auth};
use crate::routes::{auth, employees, health, locations, reports, settings};

/// Storage handles selected at startup.
#[derive(Clone)]
pub struct Stores {
    pub pings: Arc<dyn PingStore>,
    pub settings: Arc<dyn ConfigStore>,
    pub employees: Arc<dyn EmployeeStore>,
}

#[derive(Clone)]
pub struct AppState {
    pub pings: Arc<dyn PingStore>,
    pub settings: Arc<dyn ConfigStore>,
    pub employees: Arc<dyn EmployeeStore>,
    pub jwt: Arc<JwtKeys>,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, stores: Stores) -> Router {
    let config = Arc::new(config);

    let jwt = Arc::new(JwtKeys::new(
        &config.jwt.secret,
        config.jwt.token_expiry_secs,
    ));

    let state = AppState {
        pings: stores.pings,
        settings: stores.settings,
        employees: stores.employees,
        jwt,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Employee routes (require a valid bearer token)
    let protected_routes = Router::new()
        .route("/api/v1/locations", post(locations::submit_ping))
        .route("/api/v1/locations/today", get(locations::today_status))
        .route("/api/v1/reports/daily", get(reports::daily_report))
        .route("/api/v1/reports/range", get(reports::range_report))
        .route("/api/v1/reports/monthly", get(reports::monthly_report))
        .route("/api/v1/settings/office", get(settings::office_settings))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Admin routes (require the admin role)
    let admin_routes = Router::new()
        .route(
            "/api/v1/admin/settings/office/circle",
            put(settings::update_circle),
        )
        .route(
            "/api/v1/admin/settings/office/area",
            put(settings::update_area),
        )
        .route(
            "/api/v1/admin/settings/polling",
            put(settings::update_polling_policy),
        )
        .route("/api/v1/admin/employees", get(employees::list_employees))
        .route(
            "/api/v1/admin/employees/:employee_id",
            get(employees::get_employee),
        )
        .route(
            "/api/v1/admin/employees/:employee_id/approve",
            post(employees::approve_employee),
        )
        .route(
            "/api/v1/admin/employees/:employee_id/reject",
            post(employees::reject_employee),
        )
        .route(
            "/api/v1/admin/employees/:employee_id/revoke",
            post(employees::revoke_employee),
        )
        .route(
            "/api/v1/admin/employees/:employee_id/schedule",
            put(employees::update_schedule),
        )
        .route(
            "/api/v1/admin/reports/today-summary",
            get(reports::today_summary),
        )
        .route(
            "/api/v1/admin/reports/:user_id/daily",
            get(reports::employee_daily_report),
        )
        .route(
            "/api/v1/admin/reports/:user_id/range",
            get(reports::employee_range_report),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/v1/auth/login", post(auth::login));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
