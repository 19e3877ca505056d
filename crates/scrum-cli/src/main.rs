mod cli;
mod handlers;
mod output;

use std::sync::Arc;

use clap::Parser;

use cli::{Cli, Commands};
use scrum_backend::JsonFileBackend;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("SCRUM_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    let backend = match JsonFileBackend::load(&cli.file).await {
        Ok(backend) => Arc::new(backend),
        Err(e) => output::output_error(&format!("Failed to load {}: {}", cli.file, e)),
    };

    match cli.command {
        Commands::Project(cmd) => handlers::project::handle_project_command(backend, cmd.action).await?,
        Commands::Backlog(cmd) => handlers::backlog::handle_backlog_command(backend, cmd.action).await?,
        Commands::Task(cmd) => handlers::task::handle_task_command(backend, cmd.action).await?,
        Commands::Sprint(cmd) => handlers::sprint::handle_sprint_command(backend, cmd.action).await?,
        Commands::Team(cmd) => handlers::team::handle_team_command(backend, cmd.action).await?,
        Commands::Chat(cmd) => handlers::chat::handle_chat_command(backend, cmd.action).await?,
        Commands::Profile(cmd) => handlers::profile::handle_profile_command(backend, cmd.action).await?,
    }

    Ok(())
}
