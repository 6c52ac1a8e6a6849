use eyre::Result;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub async fn handle_config_command(cmd: ConfigCommands, config: &mut Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("{}", config.show_all());
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get_value(&key)?);
        }
        ConfigCommands::Set { key, value } => {
            config.set_value(&key, &value)?;
            config.save().await?;
            println!("Set {} = {}", key, config.get_value(&key)?);
        }
        ConfigCommands::Reset => {
            *config = Config::reset().await?;
            println!("Configuration reset to defaults");
        }
    }
    Ok(())
}
