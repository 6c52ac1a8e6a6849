//! Account command handlers: sign-in state transitions.

use std::io::{self, Write};

use eyre::Result;

use alcove_app::{AppEvent, reduce};
use alcove_auth::IdentityProvider;

use crate::cli::AccountCommands;
use crate::runtime::Shell;

pub async fn handle_account_command(shell: &Shell, cmd: AccountCommands) -> Result<()> {
    match cmd {
        AccountCommands::Register { email } => handle_register(shell, email).await,
        AccountCommands::Login { email } => handle_login(shell, email).await,
        AccountCommands::LoginWith { provider } => handle_login_with(shell, provider).await,
        AccountCommands::Logout => handle_logout(shell).await,
        AccountCommands::Whoami => handle_whoami(shell).await,
    }
}

async fn handle_register(shell: &Shell, email: String) -> Result<()> {
    let password = prompt("Password")?;
    let provider = shell.identity().await?;
    let watcher = provider.subscribe();
    let mut state = shell.app_state().await?;

    match provider.register(&email, &password).await {
        Ok(session) => {
            println!(
                "✅ Registration successful! You are now signed in as {}.",
                session.display_name
            );
        }
        Err(e) => {
            println!("Registration failed: {}", e);
        }
    }

    // react to the resulting notification, whatever it was
    let snapshot = watcher.borrow().clone();
    let effects = reduce(&mut state, AppEvent::SessionChanged(snapshot));
    shell.run_effects(&state, effects).await
}

async fn handle_login(shell: &Shell, email: String) -> Result<()> {
    let password = prompt("Password")?;
    let provider = shell.identity().await?;
    let watcher = provider.subscribe();
    let mut state = shell.app_state().await?;

    match provider.login(&email, &password).await {
        Ok(session) => {
            println!("👋 Welcome back, {}! Login successful.", session.display_name);
        }
        Err(e) => {
            println!("Login failed: {}", e);
        }
    }

    let snapshot = watcher.borrow().clone();
    let effects = reduce(&mut state, AppEvent::SessionChanged(snapshot));
    shell.run_effects(&state, effects).await
}

async fn handle_login_with(shell: &Shell, provider_name: String) -> Result<()> {
    let provider = shell.identity().await?;
    let watcher = provider.subscribe();
    let mut state = shell.app_state().await?;

    match provider.login_federated(&provider_name).await {
        Ok(session) => {
            println!("👋 Welcome, {}!", session.display_name);
        }
        Err(e) => {
            println!("{}", e);
        }
    }

    let snapshot = watcher.borrow().clone();
    let effects = reduce(&mut state, AppEvent::SessionChanged(snapshot));
    shell.run_effects(&state, effects).await
}

async fn handle_logout(shell: &Shell) -> Result<()> {
    let provider = shell.identity().await?;
    let watcher = provider.subscribe();
    let mut state = shell.app_state().await?;

    match provider.logout().await {
        Ok(()) => println!("Logged out successfully."),
        Err(e) => println!("Logout failed: {}", e),
    }

    let snapshot = watcher.borrow().clone();
    let effects = reduce(&mut state, AppEvent::SessionChanged(snapshot));
    shell.run_effects(&state, effects).await
}

async fn handle_whoami(shell: &Shell) -> Result<()> {
    match shell.session_cache().load().await {
        Some(session) => {
            println!("Signed in as {} ({})", session.display_name, session.email);
        }
        None => {
            println!("Not signed in.");
        }
    }
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
