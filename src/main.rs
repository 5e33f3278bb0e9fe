use anyhow::Result;
use clap::Parser;
use tokio::runtime::Runtime;

use repocoder_rs::cli::{Cli, Commands};
use repocoder_rs::{commands, config, ui};

fn main() -> Result<()> {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(log_level.into()),
        )
        .init();

    // `actions` only prints static text, so a broken config file must not
    // stop it.
    let needs_config = matches!(
        &cli.command,
        Commands::Send { .. } | Commands::Bundle { .. }
    );
    let config = if needs_config {
        match config::load_config() {
            Ok(config) => config,
            Err(e) => {
                ui::error(&e.to_string(), true);
                if let Some(suggestion) = e.suggestion() {
                    println!();
                    println!("{}", ui::info(suggestion, true));
                }
                std::process::exit(1);
            }
        }
    } else {
        config::load_config().unwrap_or_default()
    };

    let rt = Runtime::new()?;
    rt.block_on(async {
        match cli.command {
            Commands::Send {
                action,
                llm,
                model,
                api_key,
                crawl,
            } => {
                let options = commands::SendOptions {
                    crawl: crawl.into(),
                    action,
                    llm,
                    model,
                    api_key,
                };
                if let Err(e) = commands::send::run(&options, &config).await {
                    report_failure(&e, config.ui.colored);
                }
            }
            Commands::Bundle { crawl } => {
                let options = crawl.into();
                if let Err(e) = commands::bundle::run(&options, &config) {
                    report_failure(&e, config.ui.colored);
                }
            }
            Commands::Actions => {
                commands::actions::run(&config);
            }
        }
        Ok(())
    })
}

fn report_failure(e: &repocoder_rs::error::RepocoderError, colored: bool) -> ! {
    ui::error(&e.to_string(), colored);
    if let Some(suggestion) = e.suggestion() {
        println!();
        println!("{}", ui::info(suggestion, colored));
    }
    std::process::exit(1);
}
