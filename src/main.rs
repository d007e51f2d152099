use clap::Parser;
use std::error::Error;
use subnet_info::cli::Cli;
use subnet_info::config::{self, Settings};
use subnet_info::device::SystemNetwork;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file(config::LOG_CONFIG, Default::default()) {
        eprintln!("Logging disabled, could not load {}: {e}", config::LOG_CONFIG);
    }
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let source = SystemNetwork::new(settings.clone());

    subnet_info::run(cli.command(), &source, &settings).await?;

    Ok(())
}
