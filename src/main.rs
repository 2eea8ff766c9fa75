//! Kiosk Inventory Management Server
//!
//! REST API server for self-service inventory kiosks.

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kiosk_server::{api, config::AppConfig, repository::Repository, services::Services, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Initialize tracing; an optional rolling file appender sits next to the
    // stdout layer when logging.file is configured
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("kiosk_server={},tower_http=debug", config.logging.level).into()
    });

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .with(config.logging.file.as_deref().map(|path| {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_ansi(false)
                    .with_writer(file_appender(path))
            }))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(config.logging.file.as_deref().map(|path| {
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender(path))
            }))
            .init();
    }

    tracing::info!("Starting Kiosk Server v{}", env!("CARGO_PKG_VERSION"));

    // Create database connection pool
    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect(&config.database.url)
        .await
        .expect("Failed to connect to database");

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");

    tracing::info!("Database migrations completed");

    // Save server address before moving config
    let server_host = config.server.host.clone();
    let server_port = config.server.port;

    // Create repository and services
    let repository = Repository::new(pool);
    let services = Services::new(repository, config.email.clone());

    // Create application state
    let state = AppState {
        config: Arc::new(config),
        services: Arc::new(services),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::new(server_host.parse().expect("Invalid host address"), server_port);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Daily-rolling appender for the configured log file path
fn file_appender(path: &str) -> tracing_appender::rolling::RollingFileAppender {
    let path = std::path::Path::new(path);
    let directory = path.parent().unwrap_or_else(|| std::path::Path::new("."));
    let filename = path
        .file_name()
        .map(|f| f.to_os_string())
        .unwrap_or_else(|| "kiosk-server.log".into());
    tracing_appender::rolling::daily(directory, filename)
}

/// Create the application router with all routes
fn create_router(state: AppState) -> Router {
    // CORS configuration: kiosk frontends are served from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        .route("/ready", get(api::health::readiness_check))
        // Checkout / return workflow
        .route(
            "/select-product/:emp_code/:product_name",
            post(api::checkout::select_product),
        )
        .route("/return-products/:emp_code", get(api::checkout::return_products))
        .route(
            "/return-product/:emp_code/:item_code",
            post(api::checkout::return_product),
        )
        .route(
            "/return-damaged-products/:emp_code",
            get(api::checkout::return_damaged_products),
        )
        .route(
            "/return-damaged-product/:emp_code/:item_code",
            post(api::checkout::return_damaged_product),
        )
        // Kiosk browse
        .route("/inventory/unique-products", get(api::catalog::unique_products))
        .route("/categories", get(api::catalog::list_categories))
        .route("/categories", post(api::catalog::create_category))
        .route("/categories/:id", get(api::catalog::get_category))
        .route("/categories/:id", put(api::catalog::update_category))
        .route("/categories/:id", delete(api::catalog::delete_category))
        .route(
            "/categories/:id/products",
            get(api::catalog::products_by_category),
        )
        .route("/filter-products", get(api::catalog::filter_products))
        // Inventory catalog
        .route("/inventory", post(api::inventory::create_item))
        .route("/inventory", get(api::inventory::list_items))
        .route("/inventory/load", post(api::inventory::load_items))
        .route("/inventory/:id", get(api::inventory::get_item))
        .route("/inventory/:id", put(api::inventory::update_item))
        .route("/inventory/:id", delete(api::inventory::delete_item))
        // Ledgers
        .route("/listings", get(api::listings::list_listings))
        .route("/listings", post(api::listings::create_listing))
        .route("/listings/:id", get(api::listings::get_listing))
        .route("/listings/:id", put(api::listings::update_listing))
        .route("/listings/:id", delete(api::listings::delete_listing))
        .route("/unreturned-listings", get(api::listings::list_unreturned))
        .route("/unreturned-listings", post(api::listings::create_unreturned))
        .route(
            "/unreturned-listings/:listing_id",
            put(api::listings::update_unreturned),
        )
        .route(
            "/unreturned-listings/:listing_id",
            delete(api::listings::delete_unreturned),
        )
        .route("/damaged-listings", get(api::listings::list_damaged))
        .route("/damaged-listings", post(api::listings::create_damaged))
        .route("/damaged-listings/:id", get(api::listings::get_damaged))
        .route("/damaged-listings/:id", put(api::listings::update_damaged))
        .route("/damaged-listings/:id", delete(api::listings::delete_damaged))
        // Employees
        .route("/employees", get(api::employees::list_employees))
        .route("/employees", post(api::employees::create_employee))
        .route("/employees/:id", get(api::employees::get_employee))
        .route("/employees/:id", put(api::employees::update_employee))
        .route("/employees/:id", delete(api::employees::delete_employee))
        .route("/employee-actions", post(api::employees::employee_actions))
        // Roles
        .route("/roles", get(api::roles::list_roles))
        .route("/roles", post(api::roles::create_role))
        .route("/roles/:id", get(api::roles::get_role))
        .route("/roles/:id", put(api::roles::update_role))
        .route("/roles/:id", delete(api::roles::delete_role))
        // Locations
        .route("/locations", get(api::locations::list_locations))
        .route("/locations", post(api::locations::create_location))
        .route("/locations/:id", get(api::locations::get_location))
        .route("/locations/:id", put(api::locations::update_location))
        .route("/locations/:id", delete(api::locations::delete_location))
        // Machines
        .route("/machines", get(api::machines::list_machines))
        .route("/machines", post(api::machines::create_machine))
        .route("/machines/:id", get(api::machines::get_machine))
        .route("/machines/:id", put(api::machines::update_machine))
        .route("/machines/:id", delete(api::machines::delete_machine))
        // Parameters
        .route("/parameters", get(api::parameters::list_parameters))
        .route("/parameters", post(api::parameters::create_parameter))
        .route("/parameters/:id", get(api::parameters::get_parameter))
        .route("/parameters/:id", put(api::parameters::update_parameter))
        .route("/parameters/:id", delete(api::parameters::delete_parameter))
        // Email accounts
        .route("/email-accounts", get(api::email::list_email_accounts))
        .route("/email-accounts", post(api::email::create_email_account))
        .route("/email-accounts/:id", get(api::email::get_email_account))
        .route("/email-accounts/:id", put(api::email::update_email_account))
        .route("/email-accounts/:id", delete(api::email::delete_email_account))
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = api::openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
