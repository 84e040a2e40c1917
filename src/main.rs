use std::{process, sync::Arc, time::Duration};

use foglio::{
    application::{
        categories::CategoryService,
        error::AppError,
        posts::PostService,
        repos::{CategoriesRepo, PostsRepo, PostsWriteRepo},
    },
    config,
    infra::{
        db::{self, PostgresRepositories},
        error::InfraError,
        http,
        telemetry,
    },
};
use sqlx::postgres::PgPool;
use tokio::net::TcpListener;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli()
        .map_err(|err| AppError::unexpected(format!("failed to load configuration: {err}")))?;

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(config::ServeArgs::default()));

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Migrate(_) => run_migrate(settings).await,
        config::Command::Seed(_) => run_seed(settings).await,
    }
}

async fn connect_pool(settings: &config::Settings) -> Result<PgPool, AppError> {
    let url = settings.database.url.as_deref().ok_or_else(|| {
        AppError::from(InfraError::configuration(
            "database.url is not set; pass --database-url or FOGLIO__DATABASE__URL",
        ))
    })?;

    PostgresRepositories::connect(url, settings.database.max_connections.get())
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    let pool = connect_pool(&settings).await?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    let repos = Arc::new(PostgresRepositories::new(pool));
    let posts_repo: Arc<dyn PostsRepo> = repos.clone();
    let posts_write_repo: Arc<dyn PostsWriteRepo> = repos.clone();
    let categories_repo: Arc<dyn CategoriesRepo> = repos.clone();

    let post_service = Arc::new(PostService::new(
        posts_repo,
        posts_write_repo,
        categories_repo.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(categories_repo));

    let state = http::ApiState {
        posts: post_service,
        categories: category_service,
        db: repos,
    };
    let router = http::api::build_api_router(state);

    let listener = TcpListener::bind(settings.server.addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    info!(addr = %settings.server.addr, "foglio api listening");

    let grace = settings.server.graceful_shutdown;
    let server =
        axum::serve(listener, router.into_make_service()).with_graceful_shutdown(shutdown_signal());
    let server = async move { server.await };

    tokio::select! {
        result = server => {
            result.map_err(|err| AppError::unexpected(format!("server error: {err}")))?;
        }
        _ = shutdown_deadline(grace) => {
            warn!("graceful shutdown deadline reached, aborting open connections");
        }
    }

    Ok(())
}

async fn run_migrate(settings: config::Settings) -> Result<(), AppError> {
    let pool = connect_pool(&settings).await?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    info!("migrations applied");
    Ok(())
}

async fn run_seed(settings: config::Settings) -> Result<(), AppError> {
    let pool = connect_pool(&settings).await?;
    PostgresRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    let installed = db::seed::install_default_categories(&pool)
        .await
        .map_err(|err| AppError::unexpected(err.to_string()))?;

    info!(installed, "seed complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received, draining connections"),
        Err(err) => {
            error!(error = %err, "failed to install shutdown signal handler");
            std::future::pending::<()>().await;
        }
    }
}

// Second ctrl-c waiter backing the hard deadline; resolves only after the
// grace period elapses.
async fn shutdown_deadline(grace: Duration) {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    tokio::time::sleep(grace).await;
}
