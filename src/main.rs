//! fsgateway CLI entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use fsgateway::cli::{handle_error, Cli, Commands};
use fsgateway::config::ConfigLoader;
use fsgateway::{GatewayClient, GatewayClientConfig};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config =
        match ConfigLoader::load_with_overrides(cli.endpoint.clone(), cli.token.clone()) {
            Ok(config) => config,
            Err(err) => std::process::exit(handle_error(&err, cli.json)),
        };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let client = match GatewayClient::new(GatewayClientConfig::from(&config)) {
        Ok(client) => client,
        Err(err) => std::process::exit(handle_error(&err, cli.json)),
    };

    use fsgateway::cli::commands;
    let result = match cli.command {
        Commands::User(args) => commands::user::execute(&client, args, cli.json).await,
        Commands::ProjectAssociation(args) => {
            commands::project_association::execute(&client, args, cli.json).await
        }
        Commands::FlavorAssociation(args) => {
            commands::flavor_association::execute(&client, args, cli.json).await
        }
        Commands::ImageAssociation(args) => {
            commands::image_association::execute(&client, args, cli.json).await
        }
        Commands::NetworkAssociation(args) => {
            commands::network_association::execute(&client, args, cli.json).await
        }
        Commands::SubnetAssociation(args) => {
            commands::subnet_association::execute(&client, args, cli.json).await
        }
        Commands::Version(args) => commands::version::execute(&client, args, cli.json).await,
    };

    if let Err(err) = result {
        std::process::exit(handle_error(&err, cli.json));
    }
}
