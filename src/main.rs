use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bus_booking_client::{
    config::Config,
    session,
    ApiResult, BookingClient,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bus_booking_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run() -> ApiResult<()> {
    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Using backend at {}", config.api_base_url);

    let client = BookingClient::new(config)?;

    let store = client.session_store();
    let session_id = session::session_id(&store)?;
    tracing::info!(%session_id, store = %store.path().display(), "Session ready");

    let ctx = client.auth_context();
    tracing::info!(
        logged_in = ctx.is_logged_in(),
        admin = ctx.is_admin(),
        "Auth context resolved"
    );

    let operators = client.operators().get_all().await?;
    tracing::info!("Fetched {} operators", operators.len());

    let routes = client.routes().get_all().await?;
    for route in &routes {
        tracing::debug!(
            id = %route.id,
            "{} -> {} ({} km, {} pickups)",
            route.origin,
            route.destination,
            route.distance,
            route.pickup_stops.len()
        );
    }
    tracing::info!("Fetched {} routes", routes.len());

    if ctx.is_admin() {
        let stations = client.stations().get_all().await?;
        tracing::info!("Fetched {} stations", stations.len());
    }

    Ok(())
}
