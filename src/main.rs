use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sporttracker::config::Config;
use sporttracker::db;
use sporttracker::dialog::DialogStore;
use sporttracker::handlers::chat::ChatState;
use sporttracker::migrations::run_migrations;
use sporttracker::repositories::{
    AbsWorkoutRepository, ExerciseRepository, PullUpWorkoutRepository, SwimmingWorkoutRepository,
    UserRepository, WorkoutRepository,
};
use sporttracker::{routes, telegram};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables, RUST_LOG included
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sporttracker=debug,teloxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Missing BOT_TOKEN or DATABASE_URL stops us here
    let config = Config::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    tracing::info!("Connecting to database: {}", config.database_url);
    let pool = db::create_pool(&config.database_url)?;
    run_migrations(&pool)?;

    let chat_state = ChatState {
        dialogs: Arc::new(DialogStore::new()),
        user_repo: UserRepository::new(pool.clone()),
        exercise_repo: ExerciseRepository::new(pool.clone()),
        workout_repo: WorkoutRepository::new(pool.clone()),
        swimming_repo: SwimmingWorkoutRepository::new(pool.clone()),
        pull_up_repo: PullUpWorkoutRepository::new(pool.clone()),
        abs_repo: AbsWorkoutRepository::new(pool),
    };

    let app = routes::create_router();
    let addr = config.server_addr();
    tracing::info!("Starting health server at http://{}", addr);
    let listener = TcpListener::bind(&addr).await?;

    let bot = teloxide::Bot::new(&config.bot_token);

    let server = async {
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
    };

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("Health server stopped");
        }
        _ = telegram::run(bot, chat_state) => {
            tracing::info!("Telegram dispatcher stopped");
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
