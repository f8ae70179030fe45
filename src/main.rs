//! Burst Bench - Main CLI Application
//!
//! Measures the throughput of an HTTP request/response service by sending
//! timed bursts of fixed-size binary payloads across an escalating size
//! schedule and reporting packet and bit rates.

use burst_bench::{
    cli::Cli,
    client::HttpTransport,
    config::{parser::load_config, EnvManager},
    driver::BenchmarkDriver,
    error::{AppError, Result},
    logging::{LogLevel, Logger},
    output::{OutputCoordinator, OutputFormatterFactory},
    stats::RunStatistics,
    PKG_NAME, VERSION,
};
use clap::Parser;
use std::error::Error;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Set up better panic handling
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Application panic: {}", panic_info);
        eprintln!("Please report this issue at: https://github.com/burst-bench/burst-bench/issues");
        process::exit(1);
    }));

    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(message) = cli.validate() {
        eprintln!("Error: {}", message);
        process::exit(1);
    }

    // Handle the actual application logic
    if let Err(e) = run_application(cli).await {
        eprintln!("Error: {}", e);

        if let Some(source) = e.source() {
            eprintln!("Caused by: {}", source);
        }

        // Print suggestions for common errors
        print_error_suggestions(&e);

        process::exit(e.exit_code());
    }
}

/// Main application logic
async fn run_application(cli: Cli) -> Result<()> {
    // Show debug info if requested
    if cli.debug {
        println!("{} v{}", PKG_NAME, VERSION);
        println!("Built: {}", env!("BUILD_TIME"));
        if let Some(commit) = option_env!("GIT_COMMIT") {
            println!("Commit: {}", commit);
        }
        println!("Debug mode enabled");
        println!();
    }

    if cli.init_env {
        let path = std::path::Path::new(".env.example");
        EnvManager::save_example_env_file(path)?;
        println!("Wrote {}", path.display());
        return Ok(());
    }

    // Load and validate configuration
    let config = load_config(cli)?;

    if config.debug {
        println!("Configuration loaded successfully:");
        println!("{}", burst_bench::config::parser::display_config_summary(&config));
        println!();
    }

    let min_level = if config.debug {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    let logger = Logger::new("bbench", min_level, config.enable_color);

    // Initialize core components
    let transport = Arc::new(HttpTransport::new(config.timeout())?);
    let formatter = OutputFormatterFactory::create_formatter(config.enable_color, config.verbose);
    let coordinator = OutputCoordinator::new(formatter);

    if config.verbose || config.debug {
        let schedule = config.escalation_schedule()?;
        println!(
            "Benchmarking {} with {} packets per burst across {} payload sizes: {:?}",
            config.endpoint,
            config.packets_per_burst,
            schedule.len(),
            schedule
        );
        println!();
    }

    let verbose = config.verbose;
    let enable_color = config.enable_color;
    let driver = BenchmarkDriver::new(
        config,
        transport,
        coordinator,
        logger.component("driver"),
    );

    // Execute the escalating burst schedule; per-burst reports are printed
    // by the driver as each burst completes
    let results = driver.run().await?;

    // Aggregate run summary
    let stats = RunStatistics::from_results(&results);

    if verbose {
        let summary_formatter = OutputFormatterFactory::create_formatter(enable_color, verbose);
        let summary_coordinator = OutputCoordinator::new(summary_formatter);
        println!();
        println!("{}", summary_coordinator.display_run_summary(&results, &stats)?);
    }

    if stats.has_failures() {
        logger.warn(&format!(
            "{} of {} packet attempts failed during the run",
            stats.total_failed, stats.total_attempted
        ));
    }

    Ok(())
}

/// Print helpful suggestions for common errors
fn print_error_suggestions(error: &AppError) {
    match error {
        AppError::Config(_) | AppError::Validation(_) | AppError::Parse(_) => {
            eprintln!();
            eprintln!("Configuration help:");
            eprintln!("  - Check your .env file format");
            eprintln!("  - Endpoint must be an absolute http:// or https:// URL");
            eprintln!("  - Packets, sizes, factor and steps must be positive integers");
        }
        AppError::Transport(_) => {
            eprintln!();
            eprintln!("Network troubleshooting:");
            eprintln!("  - Check that the target service is running");
            eprintln!("  - Verify the endpoint host and port");
            eprintln!("  - Verify firewall settings");
        }
        AppError::Protocol(_) => {
            eprintln!();
            eprintln!("Protocol troubleshooting:");
            eprintln!("  - Confirm the endpoint speaks plain HTTP on the configured port");
            eprintln!("  - Try a smaller payload size with --initial-size");
        }
        _ => {}
    }
}
