mod agent;
mod brain;
mod executor;

use agent::Harness;
use brain::{Brain, BrainConfig, BrainInitError};
use clap::Parser;
use executor::{ExecutorConfig, ShellCommandExecutor};
use std::process;
use tracing::{Level, error, info};
use tracing_subscriber::fmt;

/// CLI arguments
#[derive(Debug, Parser)]
#[command(name = "askrun")]
#[command(about = "Ask a hosted model one question, then run one shell command")]
struct Args {
    /// Question sent to the model
    #[arg(short, long, default_value = "Who is the Prime Minister of India")]
    query: String,

    /// Shell command executed on this host
    #[arg(short, long, default_value = "ls -l")]
    command: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the results
    fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();

    // Setup
    println!("Loading API key from environment...");
    let brain_config = match BrainConfig::from_env() {
        Ok(config) => config,
        Err(e) => exit_with_config_error(e),
    };
    println!("Gemini API configured successfully.");

    println!("Initializing Gemini model ({})...", brain_config.model);
    let brain = match Brain::new(brain_config) {
        Ok(brain) => brain,
        Err(e) => exit_with_config_error(e),
    };

    let harness = Harness::new(brain, ShellCommandExecutor::new(ExecutorConfig::default()));
    info!("Harness initialized");

    // Model query
    println!("\n--- Starting Gemini API Test ---");
    if !args.query.is_empty() {
        println!("\nSending query to Gemini: '{}'", args.query);
    }
    let response = harness.ask(Some(&args.query)).await;

    println!("\n--- Gemini's Response ---");
    println!("{}", response);
    println!("--------------------------");

    // Shell command
    println!("\n--- Running command: '{}' ---", args.command);
    let output = harness.run(&args.command).await;
    println!("{}", output);
    println!("--------------------------");

    println!("\n--- Test complete ---");
    Ok(())
}

fn exit_with_config_error(e: BrainInitError) -> ! {
    error!(error = %e, "configuration failed");
    eprintln!("Error: {}", e);
    if matches!(e, BrainInitError::ConfigMissing(_)) {
        eprintln!("Please make sure you have a .env file in the working directory,");
        eprintln!("and that it contains a line like: GEMINI_API_KEY=your_key_here");
    }
    process::exit(1);
}
