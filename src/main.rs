use imbalance_sim::{CalculatorService, ServiceConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Imbalance Profit Calculator - before/after comparison of generation imbalance costs

USAGE:
    imbalance-sim [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    imbalance-sim

    # Run with config file
    imbalance-sim --config config.json

    # Run with custom port
    PORT=9000 imbalance-sim
"#
    );
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imbalance_sim=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let config = if let Some(path) = config_path {
        // Load from config file
        tracing::info!("Loading configuration from: {}", path);
        ServiceConfig::from_file(&path)?
    } else {
        // Use default configuration with env var overrides
        let mut config = ServiceConfig::default();
        if let Ok(host) = std::env::var("HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port.parse().unwrap_or(config.server.port);
        }

        tracing::info!("Using default configuration");
        config
    };

    let service = CalculatorService::new(config);

    tracing::info!("Starting {}", service.config.name);
    tracing::info!(
        "Front-end: http://{}:{}/",
        service.config.server.host,
        service.config.server.port
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /ping");
    tracing::info!("  GET  /");
    tracing::info!("  GET  /static/*");
    tracing::info!("  POST /calculator");

    service.run().await
}
