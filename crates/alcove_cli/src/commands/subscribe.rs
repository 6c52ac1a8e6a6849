use eyre::Result;

use crate::runtime::Shell;

pub async fn handle_subscribe_command(shell: &Shell, email: String) -> Result<()> {
    let client = shell.newsletter()?;
    match client.subscribe(&email).await {
        Ok(message) => println!("✅ {}", message),
        Err(e) => println!("Subscription failed: {}", e),
    }
    Ok(())
}
