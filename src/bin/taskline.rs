//! `taskline` server.
//!
//! Serves the task API, publishes status events on update and runs the
//! notification listener until SIGINT or SIGTERM.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use taskline::config::AppConfig;
use taskline::http;
use taskline::kafka::ensure_topic;
use taskline::notification::{
    adapters::{kafka::KafkaTaskStatusListener, smtp::SmtpNotificationSender},
    services::TaskStatusConsumer,
};
use taskline::task::{
    adapters::{
        kafka::KafkaTaskEventPublisher,
        postgres::{PostgresTaskRepository, TaskPgPool},
    },
    services::TaskService,
};

/// How long queued status events may take to drain on shutdown.
const PUBLISHER_FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(name = "taskline", version, about = "Task API with status notifications")]
struct Cli {
    /// Configuration file (TOML, YAML or JSON); environment variables override it.
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    /// Tracing filter directive (for example `info` or `taskline=debug`).
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    log_level: String,
    /// Create the `tasks` table before serving.
    #[arg(long = "migrate")]
    migrate: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = AppConfig::load(args.config_path.as_deref()).context("load configuration")?;
    info!(
        listen = %config.server.listen,
        topic = %config.kafka.topic.name,
        "starting taskline"
    );

    let manager = ConnectionManager::<PgConnection>::new(&config.database.url);
    let pool: TaskPgPool = Pool::builder()
        .max_size(config.database.max_connections)
        .build(manager)
        .context("create database pool")?;
    let repository = Arc::new(PostgresTaskRepository::new(pool));
    if args.migrate {
        repository
            .apply_schema()
            .await
            .context("apply database schema")?;
        info!("database schema applied");
    }

    ensure_topic(&config.kafka)
        .await
        .context("provision status topic")?;
    let publisher = Arc::new(
        KafkaTaskEventPublisher::new(&config.kafka).context("create status event publisher")?,
    );
    let service = Arc::new(TaskService::new(
        repository,
        Arc::clone(&publisher),
        config.kafka.topic.name.clone(),
    ));

    let sender = Arc::new(SmtpNotificationSender::new(&config.mail).context("create mail sender")?);
    let consumer = Arc::new(TaskStatusConsumer::from_config(sender, &config.notification));
    let listener = KafkaTaskStatusListener::new(&config.kafka, consumer)
        .context("create status listener")?;

    let shutdown = CancellationToken::new();
    setup_signal_handlers(&shutdown);

    let listener_shutdown = shutdown.clone();
    let listener_task = tokio::spawn(async move {
        let outcome = listener.run(listener_shutdown).await;
        if let Err(err) = &outcome {
            error!(error = %err, "status listener failed; notifications stopped");
        }
        outcome
    });

    let tcp = TcpListener::bind(&config.server.listen)
        .await
        .with_context(|| format!("bind {}", config.server.listen))?;
    info!(listen = %config.server.listen, "http server listening");
    let served = http::serve(tcp, http::router(service), shutdown.clone()).await;
    shutdown.cancel();
    info!("http server stopped");

    let listener_outcome = listener_task.await;
    let flushed = publisher.flush(PUBLISHER_FLUSH_TIMEOUT);

    served.context("serve http")?;
    listener_outcome
        .context("join status listener")?
        .context("status listener")?;
    flushed.context("flush queued status events")?;
    info!("shutdown complete");

    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn setup_signal_handlers(shutdown: &CancellationToken) {
    let sigint_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            return;
        }
        info!("received SIGINT");
        sigint_token.cancel();
    });

    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let sigterm_token = shutdown.clone();
        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                    info!("received SIGTERM");
                    sigterm_token.cancel();
                }
                Err(err) => {
                    warn!(error = %err, "failed to install SIGTERM handler");
                }
            }
        });
    }
}
