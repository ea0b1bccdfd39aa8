use pubload::config::load_config;
use pubload::publisher::{RedisSink, run_publisher};
use pubload::utils::logging;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init("info");

    let settings = match load_config() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    // One connection for the whole run; failure here is fatal, no retry.
    let mut sink = match RedisSink::connect(&settings.redis_url()).await {
        Ok(sink) => {
            info!(
                "Connected to redis at {}:{}",
                settings.redis_host, settings.redis_port
            );
            sink
        }
        Err(e) => {
            error!(
                "Failed to connect to redis at {}:{}: {e}",
                settings.redis_host, settings.redis_port
            );
            std::process::exit(1);
        }
    };

    let stats = run_publisher(
        &mut sink,
        settings.producer_batch_size,
        settings.target_duration(),
        settings.producer_produce_indefinitely,
    )
    .await;

    // Reached on every loop exit path, including error-driven ones.
    info!("Total messages published: {}", stats.total_messages);
}
