//! Activity Roster - Entry point.

use activity_roster::{
    api::{create_router_with_rate_limit, AppState, RateLimitState},
    config::Config,
    registry::{load_seed_file, Registry},
};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(config).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<()> {
    info!("Starting Activity Roster");

    let registry = build_registry(&config)?;
    info!(
        activities = registry.count(),
        participants = registry.total_participants(),
        "Registry seeded"
    );

    let state = AppState::new(registry);
    let rate_limit = RateLimitState::new(config.rate_limit.global_per_minute);
    let app = create_router_with_rate_limit(state, rate_limit);

    let addr = config.server.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")
}

fn build_registry(config: &Config) -> Result<Registry> {
    match &config.roster.seed_path {
        Some(path) => {
            info!(path = %path.display(), "Loading seed catalog");
            let activities = load_seed_file(path)?;
            Registry::from_activities(activities).context("Seed catalog rejected")
        }
        None => {
            info!("Using built-in activity catalog");
            Ok(Registry::seeded())
        }
    }
}
