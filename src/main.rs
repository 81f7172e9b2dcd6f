use clap::Parser;
use topic_explorer::cli::Cli;
use topic_explorer::commands;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("• Failed to load .env: {}", e);
        }
    }
    setup_logging();

    let cli = Cli::parse();
    if let Err(e) = commands::dispatch(cli).await {
        log::debug!("command failed: {:?}", e);
        eprintln!("• {}", e);
        std::process::exit(1);
    }
}
