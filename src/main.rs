use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookstock::{config, db, report, seed};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstock=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // No schema or data operation may run without a verified connection.
    let db = match db::connect(&config.database_url).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("database connection verified");

    if let Err(e) = db::create_schema(&db).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
    tracing::info!("schema ready");

    if let Err(e) = seed::seed_catalog(&db).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
    tracing::info!("catalog seeded");

    if let Err(e) = report::print_catalog(&db).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
