use clap::Parser;
use keto::cli::{
    handle_config_init, handle_delete, handle_providers, load_config, Cli, Commands,
    ConfigCommands,
};
use keto::cloudprovider::ProviderRegistry;
use keto::logging::init_tracing;
use keto::providers;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<String, Box<dyn std::error::Error>> {
    // Writing a config file must not depend on the current one parsing.
    if let Commands::Config(ConfigCommands::Init(args)) = &cli.command {
        return handle_config_init(args);
    }

    let config = load_config(&cli)?;
    init_tracing(&config.logging)?;
    tracing::debug!(
        config_file = ?cli.config,
        cloud = ?config.cloud.provider,
        "Configuration loaded"
    );

    let registry: ProviderRegistry = ProviderRegistry::new();
    if let Err(e) = providers::register_all(&registry) {
        // Two built-ins share a name: this binary is mis-assembled.
        tracing::error!(error = %e, "Cloud provider registration failed");
        return Err(e.into());
    }

    match &cli.command {
        Commands::Providers(args) => handle_providers(args, &registry, &config),
        Commands::Delete(args) => handle_delete(args, &registry, &config).await,
        Commands::Config(ConfigCommands::Init(args)) => handle_config_init(args),
    }
}
