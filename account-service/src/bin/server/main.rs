use std::sync::Arc;

use account_service::account::service::AuthService;
use account_service::account::validators::EmailValidator;
use account_service::account::validators::PasswordLengthValidator;
use account_service::config::Config;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresAccountRepository;
use auth::PasswordHasher;
use auth::SessionTokenGenerator;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        password_min_length = config.password_policy.min_length,
        password_max_length = config.password_policy.max_length,
        hashing_memory_kib = config.hashing.memory_cost_kib,
        hashing_iterations = config.hashing.iterations,
        session_token_bytes = config.session.token_bytes,
        "Configuration loaded"
    );

    // Reject bad policy or cost settings before touching the database
    let password_hasher = PasswordHasher::with_cost(
        config.hashing.memory_cost_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?;
    let token_generator = SessionTokenGenerator::with_byte_length(config.session.token_bytes);
    let password_validator = PasswordLengthValidator::new(
        config.password_policy.min_length,
        config.password_policy.max_length,
    )?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = config.database.max_connections,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let auth_service = Arc::new(AuthService::new(
        Arc::new(PostgresAccountRepository::new(pg_pool)),
        Arc::new(EmailValidator::new()),
        Arc::new(password_validator),
        Arc::new(password_hasher),
        Arc::new(token_generator),
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(auth_service)).await?;

    tracing::info!("Server exited successfully");

    Ok(())
}
