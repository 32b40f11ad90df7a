//! Medidesk CLI
//!
//! Command-line driver for the practice dashboard core:
//! - Check backend health and show dashboard statistics
//! - Watch the dashboard on an interval
//! - Run admin commands (seed sample data, clear the database)

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use medidesk::api::{BackendApi, BackendClient};
use medidesk::config::{generate_default_config, Config, LoggingConfig};
use medidesk::dashboard::{DashboardAggregator, DashboardEvent, FetchState, NoticeLevel};

#[derive(Parser)]
#[command(name = "medidesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Practice dashboard core for a GP booking backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a config file (default: standard locations)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check backend health and show the current statistics (default)
    Status,

    /// Refresh the dashboard on the configured interval until interrupted
    Watch,

    /// Seed the backend with sample records
    Seed,

    /// Drop all database collections (destructive)
    ClearDatabase {
        /// Confirm the destructive clear; without it nothing is sent
        #[arg(long)]
        yes: bool,
    },

    /// Show raw backend collection statistics
    DbStats,

    /// Write a default config file
    InitConfig {
        /// Target path (default: ./config.toml)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    tracing::info!("Medidesk v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Backend: {}", config.backend.base_url);

    let client = Arc::new(BackendClient::new(config.backend.clone()));
    let dashboard = Arc::new(DashboardAggregator::new(client.clone()));

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            check_health(client.as_ref()).await;
            let state = dashboard.refresh().await;
            report_state(&state);
        }

        Commands::Watch => {
            check_health(client.as_ref()).await;

            let mut events = dashboard.subscribe();
            let interval = config.dashboard.auto_refresh_secs;
            let refresh_task = dashboard.clone().start_auto_refresh(interval);

            // Show the first snapshot immediately rather than waiting a tick
            dashboard.refresh().await;

            loop {
                tokio::select! {
                    event = events.recv() => match event {
                        Ok(DashboardEvent::FetchStateChanged(state)) => report_state(&state),
                        Ok(DashboardEvent::Notice(notice)) => match notice.level {
                            NoticeLevel::Info => tracing::info!("{}", notice.message),
                            NoticeLevel::Error => tracing::warn!("{}", notice.message),
                        },
                        Err(tokio::sync::broadcast::error::RecvError::Lagged(skipped)) => {
                            tracing::warn!(skipped, "Event stream lagged");
                        }
                        Err(tokio::sync::broadcast::error::RecvError::Closed) => break,
                    },
                    _ = tokio::signal::ctrl_c() => {
                        tracing::info!("Shutting down");
                        break;
                    }
                }
            }

            refresh_task.abort();
        }

        Commands::Seed => {
            let outcome = dashboard.seed_sample_data().await?;
            tracing::info!("{}", outcome.message);
            report_state(&dashboard.fetch_state().await);
        }

        Commands::ClearDatabase { yes } => {
            dashboard.request_clear_database().await?;

            if !yes {
                dashboard.cancel_clear_database().await;
                tracing::warn!(
                    "Refusing to clear the database without --yes; \
                     this drops every patient, doctor, and appointment record"
                );
                return Ok(());
            }

            let outcome = dashboard.confirm_clear_database().await?;
            tracing::info!("{}", outcome.message);
        }

        Commands::DbStats => {
            let outcome = client.database_stats().await?;
            tracing::info!("{}", outcome.message);
            if let Some(output) = outcome.output {
                println!("{output}");
            }
        }

        Commands::InitConfig { path } => {
            let path = path.unwrap_or_else(|| PathBuf::from("./config.toml"));
            std::fs::write(&path, generate_default_config())?;
            tracing::info!("Wrote default config to {:?}", path);
        }
    }

    Ok(())
}

/// Initialize logging per the config, honoring RUST_LOG when set
fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("medidesk={}", config.level)),
    );

    if config.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn check_health(client: &BackendClient) {
    match client.health_check().await {
        Ok(health) => tracing::info!(status = %health.status, "Backend reachable"),
        Err(e) => tracing::warn!(error = %e, "Backend health check failed"),
    }
}

/// Log a one-line summary of the dashboard state
fn report_state(state: &FetchState) {
    match state {
        FetchState::Idle => tracing::info!("Dashboard idle"),
        FetchState::Loading => tracing::info!("Dashboard loading..."),
        FetchState::Ready(snapshot) => {
            tracing::info!(
                "Patients: {} total, {} new this month",
                snapshot.patients.total_patients,
                snapshot.patients.new_this_month
            );
            tracing::info!(
                "Doctors: {} total, {} available",
                snapshot.doctors.total_doctors,
                snapshot.doctors.available_doctors
            );
            tracing::info!(
                "Appointments: {} today, {} this week, {} this month",
                snapshot.appointments.today,
                snapshot.appointments.this_week,
                snapshot.appointments.this_month
            );
        }
        FetchState::Failed(message) => {
            tracing::error!("Dashboard refresh failed: {message}");
        }
    }
}
