use addrbook::cli::Cli;
use addrbook::config::Config;
use addrbook::service::HttpAddressService;
use addrbook::{logging, ui};
use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            return ExitCode::from(1);
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    logging::init(&config.logging)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .thread_name("addrbook-io")
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let service = {
        let _enter = runtime.enter();
        HttpAddressService::new(&config.service).context("Failed to create service client")?
    };
    tracing::info!(base_url = service.base_url(), "Starting address book");

    ui::runtime::run(&config, runtime.handle(), Arc::new(service))
        .context("Terminal UI failed")?;

    runtime.shutdown_timeout(Duration::from_millis(500));
    Ok(())
}
