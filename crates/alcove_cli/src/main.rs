mod cli;
mod commands;
mod config;
mod render;
mod runtime;

use clap::Parser;

use crate::cli::Commands;
use crate::config::Config;
use crate::runtime::Shell;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut config = Config::load().await?;

    match cli.command {
        Commands::Config { command } => {
            commands::handle_config_command(command, &mut config).await?;
        }
        command => {
            let shell = Shell::init(config).await?;
            match command {
                Commands::Browse => commands::handle_browse_command(&shell).await?,
                Commands::Search { query } => {
                    commands::handle_search_command(&shell, query).await?;
                }
                Commands::Save { title } => commands::handle_save_command(&shell, title).await?,
                Commands::Read { title } => commands::handle_read_command(&shell, title).await?,
                Commands::Library { command } => {
                    commands::handle_library_command(&shell, command).await?;
                }
                Commands::Account { command } => {
                    commands::handle_account_command(&shell, command).await?;
                }
                Commands::Subscribe { email } => {
                    commands::handle_subscribe_command(&shell, email).await?;
                }
                Commands::Theme { value } => {
                    commands::handle_theme_command(&shell, value).await?;
                }
                Commands::Config { .. } => {}
            }
        }
    }

    Ok(())
}
